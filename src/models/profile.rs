//! Typed member profile: the record the collection conversation produces.
//!
//! `UserProfile::from_value` is the gate between raw LLM JSON and the rest
//! of the system: every field must be present, well-typed, and within its
//! format constraint before a profile exists at all. Unknown keys in the
//! source value are dropped.

use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Macro for closed string enums with literal wire values.
macro_rules! literal_enum {
    ($name:ident { $($variant:ident => $s:literal),+ $(,)? }) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $s),+
                }
            }

            pub const ALLOWED: &'static [&'static str] = &[$($s),+];
        }

        impl std::str::FromStr for $name {
            type Err = ProfileError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($s => Ok(Self::$variant)),+,
                    _ => Err(ProfileError::InvalidField {
                        field: stringify!($name),
                        reason: format!("'{s}' is not one of {:?}", Self::ALLOWED),
                    }),
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl Serialize for $name {
            fn serialize<S: serde::Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
                s.serialize_str(self.as_str())
            }
        }
    };
}

literal_enum!(Gender {
    Male => "male",
    Female => "female",
    Other => "other",
});

literal_enum!(Hmo {
    Maccabi => "מכבי",
    Meuhedet => "מאוחדת",
    Clalit => "כללית",
});

literal_enum!(Tier {
    Gold => "זהב",
    Silver => "כסף",
    Bronze => "ארד",
});

/// Oldest accepted member age.
pub const MAX_AGE: u64 = 120;

/// Why a candidate value failed the typed profile gate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProfileError {
    #[error("candidate is not a JSON object")]
    NotAnObject,

    #[error("missing field `{0}`")]
    MissingField(&'static str),

    #[error("invalid `{field}`: {reason}")]
    InvalidField { field: &'static str, reason: String },
}

/// A confirmed-or-pending member record. All eight fields are mandatory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserProfile {
    pub first_name: String,
    pub last_name: String,
    /// 9-digit national ID.
    pub id_number: String,
    pub gender: Gender,
    pub age: u8,
    pub hmo: Hmo,
    /// 9-digit HMO card number.
    pub card_number: String,
    pub tier: Tier,
}

impl UserProfile {
    /// Build a profile from a raw JSON value, enforcing every constraint.
    ///
    /// Accepts `age` as either a JSON number or a numeric string, since the
    /// extractor's output varies between the two. Ignores unknown keys.
    pub fn from_value(value: &Value) -> Result<Self, ProfileError> {
        let map = value.as_object().ok_or(ProfileError::NotAnObject)?;

        let first_name = required_string(map, "first_name")?;
        let last_name = required_string(map, "last_name")?;

        let id_number = required_string(map, "id_number")?;
        check_nine_digits("id_number", &id_number)?;

        let gender: Gender = required_string(map, "gender")?
            .parse()
            .map_err(|_| invalid_enum("gender", Gender::ALLOWED, map))?;

        let age = parse_age(map)?;

        let hmo: Hmo = required_string(map, "hmo")?
            .parse()
            .map_err(|_| invalid_enum("hmo", Hmo::ALLOWED, map))?;

        let card_number = required_string(map, "card_number")?;
        check_nine_digits("card_number", &card_number)?;

        let tier: Tier = required_string(map, "tier")?
            .parse()
            .map_err(|_| invalid_enum("tier", Tier::ALLOWED, map))?;

        Ok(Self {
            first_name,
            last_name,
            id_number,
            gender,
            age,
            hmo,
            card_number,
            tier,
        })
    }
}

fn required_string(
    map: &serde_json::Map<String, Value>,
    field: &'static str,
) -> Result<String, ProfileError> {
    let value = map.get(field).ok_or(ProfileError::MissingField(field))?;
    let text = match value {
        Value::String(s) => s.trim().to_string(),
        Value::Number(n) => n.to_string(),
        _ => {
            return Err(ProfileError::InvalidField {
                field,
                reason: "expected a string".into(),
            })
        }
    };
    if text.is_empty() {
        return Err(ProfileError::MissingField(field));
    }
    Ok(text)
}

fn check_nine_digits(field: &'static str, value: &str) -> Result<(), ProfileError> {
    if value.len() == 9 && value.bytes().all(|b| b.is_ascii_digit()) {
        Ok(())
    } else {
        Err(ProfileError::InvalidField {
            field,
            reason: format!("'{value}' is not a 9-digit number"),
        })
    }
}

fn parse_age(map: &serde_json::Map<String, Value>) -> Result<u8, ProfileError> {
    let value = map.get("age").ok_or(ProfileError::MissingField("age"))?;
    let age = match value {
        Value::Number(n) => n.as_u64(),
        Value::String(s) => s.trim().parse::<u64>().ok(),
        _ => None,
    };
    match age {
        Some(a) if a <= MAX_AGE => Ok(a as u8),
        _ => Err(ProfileError::InvalidField {
            field: "age",
            reason: format!("expected an integer in 0..={MAX_AGE}, got {value}"),
        }),
    }
}

fn invalid_enum(
    field: &'static str,
    allowed: &[&str],
    map: &serde_json::Map<String, Value>,
) -> ProfileError {
    let got = map.get(field).cloned().unwrap_or(Value::Null);
    ProfileError::InvalidField {
        field,
        reason: format!("{got} is not one of {allowed:?}"),
    }
}

impl Serialize for UserProfile {
    fn serialize<S: serde::Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        let mut st = s.serialize_struct("UserProfile", 8)?;
        st.serialize_field("first_name", &self.first_name)?;
        st.serialize_field("last_name", &self.last_name)?;
        st.serialize_field("id_number", &self.id_number)?;
        st.serialize_field("gender", &self.gender)?;
        st.serialize_field("age", &self.age)?;
        st.serialize_field("hmo", &self.hmo)?;
        st.serialize_field("card_number", &self.card_number)?;
        st.serialize_field("tier", &self.tier)?;
        st.end()
    }
}

// Deserialization goes through the same gate as extraction, so a profile
// arriving in a request body obeys the same constraints.
impl<'de> Deserialize<'de> for UserProfile {
    fn deserialize<D: serde::Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(d)?;
        UserProfile::from_value(&value).map_err(serde::de::Error::custom)
    }
}
