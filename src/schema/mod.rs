//! Schema-as-data: the declarative shape extracted records must satisfy.
//!
//! A field is either a constrained leaf or a named group of sub-fields.
//! Fields live in vectors, not maps; declaration order is the order the
//! validator reports missing paths in.

pub mod registry;
pub mod validate;

pub use registry::{form_schema, profile_schema};
pub use validate::{validate, ValidationReport};

use regex::Regex;
use serde_json::{Map, Value};

/// Format restriction on a leaf value.
#[derive(Debug, Clone)]
pub enum Constraint {
    /// Full-string regular-expression match.
    Pattern(Regex),
    /// Closed set of allowed literals.
    OneOf(&'static [&'static str]),
    /// Integer range, inclusive on both ends.
    IntRange { min: i64, max: i64 },
}

impl Constraint {
    /// Does a present value satisfy the constraint?
    ///
    /// Numbers are matched through their decimal rendering for `Pattern`,
    /// and numeric strings are accepted for `IntRange`, since the extractor's
    /// output drifts between the two shapes.
    pub fn matches(&self, value: &Value) -> bool {
        match self {
            Constraint::Pattern(re) => match value {
                Value::String(s) => re.is_match(s),
                Value::Number(n) => re.is_match(&n.to_string()),
                _ => false,
            },
            Constraint::OneOf(allowed) => value
                .as_str()
                .is_some_and(|s| allowed.iter().any(|a| *a == s)),
            Constraint::IntRange { min, max } => {
                let n = match value {
                    Value::Number(n) => n.as_i64(),
                    Value::String(s) => s.trim().parse::<i64>().ok(),
                    _ => None,
                };
                n.is_some_and(|n| (*min..=*max).contains(&n))
            }
        }
    }
}

#[derive(Debug, Clone)]
pub enum FieldKind {
    Leaf { constraint: Option<Constraint> },
    Group { children: Vec<Field> },
}

#[derive(Debug, Clone)]
pub struct Field {
    pub name: &'static str,
    pub kind: FieldKind,
}

impl Field {
    pub fn leaf(name: &'static str) -> Self {
        Self { name, kind: FieldKind::Leaf { constraint: None } }
    }

    pub fn constrained(name: &'static str, constraint: Constraint) -> Self {
        Self { name, kind: FieldKind::Leaf { constraint: Some(constraint) } }
    }

    pub fn group(name: &'static str, children: Vec<Field>) -> Self {
        Self { name, kind: FieldKind::Group { children } }
    }
}

/// An ordered set of fields a Record must provide.
#[derive(Debug, Clone)]
pub struct Schema {
    pub fields: Vec<Field>,
}

impl Schema {
    pub fn new(fields: Vec<Field>) -> Self {
        Self { fields }
    }

    /// The all-empty record shaped like this schema: `""` at every leaf,
    /// nested objects for groups. Fed to the form-extraction prompt and
    /// used as the resilience fallback when the extractor's output is
    /// unusable.
    pub fn template(&self) -> Value {
        Value::Object(template_map(&self.fields))
    }
}

fn template_map(fields: &[Field]) -> Map<String, Value> {
    let mut map = Map::new();
    for field in fields {
        let value = match &field.kind {
            FieldKind::Leaf { .. } => Value::String(String::new()),
            FieldKind::Group { children } => Value::Object(template_map(children)),
        };
        map.insert(field.name.to_string(), value);
    }
    map
}
