//! Parse-or-fail handling of raw extractor replies.

use serde_json::Value;

use super::ExtractionError;

/// Replies that mean "not enough information yet", compared after
/// trimming and lowercasing.
const INSUFFICIENT_SENTINELS: &[&str] = &["none", "null", "{}"];

/// Turn a raw LLM reply into a candidate record value.
///
/// The sentinel and unparseable JSON are both expected outcomes; the
/// caller stays in the collecting phase on either.
pub fn parse_record(raw: &str) -> Result<Value, ExtractionError> {
    let trimmed = raw.trim();
    if INSUFFICIENT_SENTINELS.contains(&trimmed.to_lowercase().as_str()) {
        return Err(ExtractionError::InsufficientInfo);
    }

    let cleaned = strip_code_fences(trimmed);
    let value: Value = serde_json::from_str(cleaned)
        .map_err(|e| ExtractionError::MalformedJson(e.to_string()))?;

    // A bare JSON null or empty object also carries no information.
    match &value {
        Value::Null => Err(ExtractionError::InsufficientInfo),
        Value::Object(map) if map.is_empty() => Err(ExtractionError::InsufficientInfo),
        _ => Ok(value),
    }
}

/// Strip a ```json fenced block if the model wrapped its reply in one.
fn strip_code_fences(text: &str) -> &str {
    let Some(rest) = text.strip_prefix("```") else {
        return text;
    };
    let rest = rest.strip_prefix("json").unwrap_or(rest);
    let rest = rest.strip_suffix("```").unwrap_or(rest);
    rest.trim()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn plain_json_parses() {
        let value = parse_record(r#"{"first_name": "Dana"}"#).unwrap();
        assert_eq!(value, json!({"first_name": "Dana"}));
    }

    #[test]
    fn sentinel_word_is_insufficient_info() {
        for raw in ["None", "none", " NULL ", "{}"] {
            assert!(
                matches!(parse_record(raw), Err(ExtractionError::InsufficientInfo)),
                "raw {raw:?} should be the sentinel"
            );
        }
    }

    #[test]
    fn fenced_json_is_unwrapped() {
        let raw = "```json\n{\"age\": 30}\n```";
        assert_eq!(parse_record(raw).unwrap(), json!({"age": 30}));
    }

    #[test]
    fn fence_without_language_tag_is_unwrapped() {
        let raw = "```\n{\"age\": 30}\n```";
        assert_eq!(parse_record(raw).unwrap(), json!({"age": 30}));
    }

    #[test]
    fn prose_reply_is_malformed() {
        let result = parse_record("I could not find the details you asked for.");
        assert!(matches!(result, Err(ExtractionError::MalformedJson(_))));
    }

    #[test]
    fn truncated_json_is_malformed() {
        let result = parse_record(r#"{"first_name": "Dana""#);
        assert!(matches!(result, Err(ExtractionError::MalformedJson(_))));
    }

    #[test]
    fn parsed_null_is_insufficient_info() {
        // "null" hits the sentinel before parsing, but a fenced null parses
        let result = parse_record("```json\nnull\n```");
        assert!(matches!(result, Err(ExtractionError::InsufficientInfo)));
    }

    #[test]
    fn parsed_empty_object_is_insufficient_info() {
        let result = parse_record("```json\n{}\n```");
        assert!(matches!(result, Err(ExtractionError::InsufficientInfo)));
    }
}
