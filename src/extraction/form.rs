//! Form-mode extraction: OCR text in, schema-shaped record out.
//!
//! Output is always template-shaped: extracted values are overlaid onto
//! the schema, unknown keys are dropped, absent leaves become empty
//! strings. When the reply cannot be parsed at all the record falls back
//! to the empty template and the report lists every leaf.

use std::sync::Arc;

use serde_json::{Map, Value};

use crate::language::Language;
use crate::llm::{LlmClient, LlmError, ResponseFormat};
use crate::schema::{form_schema, validate, Field, FieldKind, ValidationReport};

use super::parser::parse_record;
use super::prompt::form_extraction_messages;

/// Result of one form extraction: the coerced record plus its
/// completeness report.
#[derive(Debug, Clone)]
pub struct FormExtraction {
    pub language: Language,
    pub record: Value,
    pub report: ValidationReport,
}

/// Fills the National Insurance form schema from document text.
pub struct FormExtractor {
    llm: Arc<dyn LlmClient>,
}

impl FormExtractor {
    pub fn new(llm: Arc<dyn LlmClient>) -> Self {
        Self { llm }
    }

    /// Extract the form fields from OCR text in the given language.
    ///
    /// Only the completion call itself is a hard failure; an unusable
    /// reply degrades to the all-empty record so the caller still gets a
    /// full missing-field report.
    pub fn extract(&self, form_text: &str, language: Language) -> Result<FormExtraction, LlmError> {
        let schema = form_schema(language);
        let messages = form_extraction_messages(&schema.template(), form_text);
        let raw = self.llm.complete(&messages, ResponseFormat::Json)?;

        let record = match parse_record(&raw) {
            Ok(candidate) => coerce_to_schema(&candidate, &schema.fields),
            Err(e) => {
                tracing::warn!(error = %e, "Form extraction unusable, falling back to empty record");
                schema.template()
            }
        };

        let report = validate(&record, &schema);
        tracing::info!(
            language = language.as_tag(),
            missing = report.missing.len(),
            "Form extraction finished"
        );

        Ok(FormExtraction { language, record, report })
    }
}

/// Overlay a candidate onto the schema shape: schema keys only, groups
/// recursed, absent or scalar-mismatched leaves emptied.
fn coerce_to_schema(candidate: &Value, fields: &[Field]) -> Value {
    let empty = Map::new();
    let map = candidate.as_object().unwrap_or(&empty);
    let mut out = Map::new();
    for field in fields {
        let value = match &field.kind {
            FieldKind::Group { children } => {
                coerce_to_schema(map.get(field.name).unwrap_or(&Value::Null), children)
            }
            FieldKind::Leaf { .. } => match map.get(field.name) {
                Some(v @ (Value::String(_) | Value::Number(_) | Value::Bool(_))) => v.clone(),
                _ => Value::String(String::new()),
            },
        };
        out.insert(field.name.to_string(), value);
    }
    Value::Object(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::MockLlmClient;
    use serde_json::json;

    fn extractor(reply: &str) -> FormExtractor {
        FormExtractor::new(Arc::new(MockLlmClient::new(reply)))
    }

    #[test]
    fn extracted_values_land_on_schema_shape() {
        let reply = json!({
            "lastName": "Cohen",
            "firstName": "Dana",
            "dateOfBirth": {"day": "07", "month": "03", "year": "1985"}
        })
        .to_string();
        let extraction = extractor(&reply)
            .extract("some form text", Language::En)
            .unwrap();

        assert_eq!(extraction.record["lastName"], "Cohen");
        assert_eq!(extraction.record["dateOfBirth"]["day"], "07");
        // Untouched leaves exist and are empty
        assert_eq!(extraction.record["signature"], "");
        assert!(!extraction.report.is_complete());
        assert!(extraction
            .report
            .missing
            .contains(&"injuredBodyPart".to_string()));
    }

    #[test]
    fn unknown_keys_are_dropped() {
        let reply = json!({"lastName": "Cohen", "shoeSize": "44"}).to_string();
        let extraction = extractor(&reply)
            .extract("text", Language::En)
            .unwrap();
        assert!(extraction.record.get("shoeSize").is_none());
    }

    #[test]
    fn unparseable_reply_falls_back_to_empty_record() {
        let extraction = extractor("I can't read this form.")
            .extract("text", Language::En)
            .unwrap();
        assert_eq!(extraction.record, form_schema(Language::En).template());
        assert_eq!(extraction.report.missing.len(), 35);
    }

    #[test]
    fn hebrew_schema_keys_used_for_hebrew_forms() {
        let reply = json!({"שם משפחה": "כהן"}).to_string();
        let extraction = extractor(&reply)
            .extract("שם משפחה: כהן", Language::He)
            .unwrap();
        assert_eq!(extraction.record["שם משפחה"], "כהן");
        assert!(extraction.record.get("lastName").is_none());
    }

    #[test]
    fn fenced_reply_is_unwrapped() {
        let reply = "```json\n{\"lastName\": \"Levi\"}\n```";
        let extraction = extractor(reply).extract("text", Language::En).unwrap();
        assert_eq!(extraction.record["lastName"], "Levi");
    }

    #[test]
    fn mismatched_group_shape_becomes_empty_group() {
        let reply = json!({"dateOfBirth": "1985-03-07"}).to_string();
        let extraction = extractor(&reply).extract("text", Language::En).unwrap();
        assert_eq!(extraction.record["dateOfBirth"], json!({"day": "", "month": "", "year": ""}));
    }
}
