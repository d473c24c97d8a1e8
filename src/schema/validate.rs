//! Recursive completeness check of a candidate record against a schema.
//!
//! Walks the schema depth-first in declaration order. A leaf counts as
//! missing when it is absent, null, or an empty string, and also when a
//! format constraint exists and the present value fails it (malformed is
//! reported as missing, not as a separate kind). Side-effect-free.

use serde_json::{Map, Value};

use super::{Field, FieldKind, Schema};

/// Outcome of a schema walk: the dotted paths of every missing leaf.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    pub missing: Vec<String>,
}

impl ValidationReport {
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
    }
}

/// Check `candidate` against `schema`, reporting missing leaf paths in
/// schema declaration order.
pub fn validate(candidate: &Value, schema: &Schema) -> ValidationReport {
    let empty = Map::new();
    let map = candidate.as_object().unwrap_or(&empty);
    let mut missing = Vec::new();
    walk(&schema.fields, map, "", &mut missing);
    ValidationReport { missing }
}

fn walk(fields: &[Field], map: &Map<String, Value>, prefix: &str, missing: &mut Vec<String>) {
    let empty = Map::new();
    for field in fields {
        let path = if prefix.is_empty() {
            field.name.to_string()
        } else {
            format!("{prefix}.{}", field.name)
        };
        match &field.kind {
            FieldKind::Group { children } => {
                // An absent or non-object sub-value walks as an empty map,
                // so every child below it is reported individually.
                let sub = map
                    .get(field.name)
                    .and_then(Value::as_object)
                    .unwrap_or(&empty);
                walk(children, sub, &path, missing);
            }
            FieldKind::Leaf { constraint } => {
                let present = match map.get(field.name) {
                    None | Some(Value::Null) => None,
                    Some(Value::String(s)) if s.trim().is_empty() => None,
                    Some(v) => Some(v),
                };
                let ok = match (present, constraint) {
                    (None, _) => false,
                    (Some(_), None) => true,
                    (Some(v), Some(c)) => c.matches(v),
                };
                if !ok {
                    missing.push(path);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::language::Language;
    use crate::models::tests_support::valid_profile_value;
    use crate::schema::{form_schema, profile_schema};
    use serde_json::json;

    // ── Template completeness ───────────────────────────────────────

    #[test]
    fn empty_template_is_never_complete() {
        for schema in [
            profile_schema(),
            form_schema(Language::En),
            form_schema(Language::He),
        ] {
            let report = validate(&schema.template(), &schema);
            assert!(!report.is_complete());
        }
    }

    #[test]
    fn template_reports_every_leaf() {
        let schema = form_schema(Language::En);
        let report = validate(&schema.template(), &schema);
        // 13 flat + 4 dates × 3 + address × 7 + institution block × 3
        assert_eq!(report.missing.len(), 35);
        assert!(report.missing.contains(&"dateOfBirth.day".to_string()));
        assert!(report
            .missing
            .contains(&"medicalInstitutionFields.medicalDiagnoses".to_string()));
    }

    // ── Profile records ─────────────────────────────────────────────

    #[test]
    fn valid_profile_has_zero_missing() {
        let report = validate(&valid_profile_value(), &profile_schema());
        assert!(report.is_complete(), "unexpected missing: {:?}", report.missing);
    }

    #[test]
    fn short_id_number_flagged() {
        let mut value = valid_profile_value();
        value["id_number"] = json!("1234");
        let report = validate(&value, &profile_schema());
        assert_eq!(report.missing, vec!["id_number"]);
    }

    #[test]
    fn out_of_range_age_flagged() {
        let mut value = valid_profile_value();
        value["age"] = json!(200);
        let report = validate(&value, &profile_schema());
        assert_eq!(report.missing, vec!["age"]);
    }

    #[test]
    fn enum_mismatch_flagged_as_missing() {
        let mut value = valid_profile_value();
        value["tier"] = json!("platinum");
        let report = validate(&value, &profile_schema());
        assert_eq!(report.missing, vec!["tier"]);
    }

    // ── Walk semantics ──────────────────────────────────────────────

    #[test]
    fn absent_group_reports_all_children() {
        let schema = form_schema(Language::En);
        let mut value = schema.template();
        value.as_object_mut().unwrap().remove("dateOfBirth");
        let report = validate(&value, &schema);
        for child in ["day", "month", "year"] {
            assert!(report.missing.contains(&format!("dateOfBirth.{child}")));
        }
    }

    #[test]
    fn non_object_candidate_reports_everything() {
        let schema = profile_schema();
        let report = validate(&json!("not an object"), &schema);
        assert_eq!(report.missing.len(), 8);
    }

    #[test]
    fn missing_paths_follow_declaration_order() {
        let schema = profile_schema();
        let report = validate(&json!({}), &schema);
        assert_eq!(
            report.missing,
            vec![
                "first_name",
                "last_name",
                "id_number",
                "gender",
                "age",
                "hmo",
                "card_number",
                "tier"
            ]
        );
    }

    #[test]
    fn validate_is_idempotent() {
        let mut value = valid_profile_value();
        value["card_number"] = json!("12");
        let schema = profile_schema();
        let first = validate(&value, &schema);
        let second = validate(&value, &schema);
        assert_eq!(first, second);
    }

    #[test]
    fn null_and_whitespace_leaves_count_as_missing() {
        let schema = Schema::new(vec![
            crate::schema::Field::leaf("a"),
            crate::schema::Field::leaf("b"),
        ]);
        let report = validate(&json!({"a": null, "b": "   "}), &schema);
        assert_eq!(report.missing, vec!["a", "b"]);
    }
}
