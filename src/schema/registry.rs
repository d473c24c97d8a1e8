//! The two fixed schemas the service knows: the National Insurance form
//! template (Hebrew and English key variants) and the member profile.
//! Pure lookup: no I/O, same output for the same language every time.

use regex::Regex;

use crate::language::Language;
use crate::models::{Gender, Hmo, Tier};

use super::{Constraint, Field, Schema};

/// 9-digit national ID / HMO card format.
const NINE_DIGITS: &str = r"^\d{9}$";

fn nine_digits() -> Constraint {
    Constraint::Pattern(Regex::new(NINE_DIGITS).expect("static regex"))
}

/// The member-profile schema: 8 flat fields, all format-constrained where
/// the domain constrains them.
pub fn profile_schema() -> Schema {
    Schema::new(vec![
        Field::leaf("first_name"),
        Field::leaf("last_name"),
        Field::constrained("id_number", nine_digits()),
        Field::constrained("gender", Constraint::OneOf(Gender::ALLOWED)),
        Field::constrained("age", Constraint::IntRange { min: 0, max: 120 }),
        Field::constrained("hmo", Constraint::OneOf(Hmo::ALLOWED)),
        Field::constrained("card_number", nine_digits()),
        Field::constrained("tier", Constraint::OneOf(Tier::ALLOWED)),
    ])
}

fn date_group(name: &'static str, day: &'static str, month: &'static str, year: &'static str) -> Field {
    Field::group(name, vec![Field::leaf(day), Field::leaf(month), Field::leaf(year)])
}

/// The National Insurance form schema in the requested language.
///
/// Key names are language-variant because the extractor mirrors the form's
/// printed labels; the shape is identical in both variants.
pub fn form_schema(language: Language) -> Schema {
    match language {
        Language::He => hebrew_form_schema(),
        Language::En => english_form_schema(),
    }
}

fn english_form_schema() -> Schema {
    Schema::new(vec![
        Field::leaf("lastName"),
        Field::leaf("firstName"),
        Field::leaf("idNumber"),
        Field::leaf("gender"),
        date_group("dateOfBirth", "day", "month", "year"),
        Field::group(
            "address",
            vec![
                Field::leaf("street"),
                Field::leaf("houseNumber"),
                Field::leaf("entrance"),
                Field::leaf("apartment"),
                Field::leaf("city"),
                Field::leaf("postalCode"),
                Field::leaf("poBox"),
            ],
        ),
        Field::leaf("landlinePhone"),
        Field::leaf("mobilePhone"),
        Field::leaf("jobType"),
        date_group("dateOfInjury", "day", "month", "year"),
        Field::leaf("timeOfInjury"),
        Field::leaf("accidentLocation"),
        Field::leaf("accidentAddress"),
        Field::leaf("accidentDescription"),
        Field::leaf("injuredBodyPart"),
        Field::leaf("signature"),
        date_group("formFillingDate", "day", "month", "year"),
        date_group("formReceiptDateAtClinic", "day", "month", "year"),
        Field::group(
            "medicalInstitutionFields",
            vec![
                Field::leaf("healthFundMember"),
                Field::leaf("natureOfAccident"),
                Field::leaf("medicalDiagnoses"),
            ],
        ),
    ])
}

fn hebrew_form_schema() -> Schema {
    Schema::new(vec![
        Field::leaf("שם משפחה"),
        Field::leaf("שם פרטי"),
        Field::leaf("מספר זהות"),
        Field::leaf("מין"),
        date_group("תאריך לידה", "יום", "חודש", "שנה"),
        Field::group(
            "כתובת",
            vec![
                Field::leaf("רחוב"),
                Field::leaf("מספר בית"),
                Field::leaf("כניסה"),
                Field::leaf("דירה"),
                Field::leaf("ישוב"),
                Field::leaf("מיקוד"),
                Field::leaf("תא דואר"),
            ],
        ),
        Field::leaf("טלפון קווי"),
        Field::leaf("טלפון נייד"),
        Field::leaf("סוג העבודה"),
        date_group("תאריך הפגיעה", "יום", "חודש", "שנה"),
        Field::leaf("שעת הפגיעה"),
        Field::leaf("מקום התאונה"),
        Field::leaf("כתובת מקום התאונה"),
        Field::leaf("תיאור התאונה"),
        Field::leaf("האיבר שנפגע"),
        Field::leaf("חתימה"),
        date_group("תאריך מילוי הטופס", "יום", "חודש", "שנה"),
        date_group("תאריך קבלת הטופס בקופה", "יום", "חודש", "שנה"),
        Field::group(
            "למילוי ע\"י המוסד הרפואי",
            vec![
                Field::leaf("חבר בקופת חולים"),
                Field::leaf("מהות התאונה"),
                Field::leaf("אבחנות רפואיות"),
            ],
        ),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::FieldKind;

    fn leaf_count(fields: &[Field]) -> usize {
        fields
            .iter()
            .map(|f| match &f.kind {
                FieldKind::Leaf { .. } => 1,
                FieldKind::Group { children } => leaf_count(children),
            })
            .sum()
    }

    #[test]
    fn form_variants_have_identical_shape() {
        let en = form_schema(Language::En);
        let he = form_schema(Language::He);
        assert_eq!(en.fields.len(), he.fields.len());
        assert_eq!(leaf_count(&en.fields), leaf_count(&he.fields));
    }

    #[test]
    fn form_schema_has_nineteen_top_level_fields() {
        assert_eq!(form_schema(Language::En).fields.len(), 19);
    }

    #[test]
    fn profile_schema_has_eight_fields() {
        let schema = profile_schema();
        assert_eq!(schema.fields.len(), 8);
        assert!(schema
            .fields
            .iter()
            .all(|f| matches!(f.kind, FieldKind::Leaf { .. })));
    }

    #[test]
    fn profile_schema_constrains_formats() {
        let schema = profile_schema();
        let constrained = schema
            .fields
            .iter()
            .filter(|f| matches!(f.kind, FieldKind::Leaf { constraint: Some(_) }))
            .count();
        // id_number, gender, age, hmo, card_number, tier
        assert_eq!(constrained, 6);
    }

    #[test]
    fn hebrew_template_uses_hebrew_keys() {
        let template = form_schema(Language::He).template();
        assert!(template.get("שם משפחה").is_some());
        assert!(template["תאריך לידה"].get("יום").is_some());
    }

    #[test]
    fn english_template_matches_form_layout() {
        let template = form_schema(Language::En).template();
        assert_eq!(template["lastName"], "");
        assert_eq!(template["address"]["street"], "");
        assert_eq!(template["medicalInstitutionFields"]["healthFundMember"], "");
    }

    #[test]
    fn registry_is_deterministic() {
        let a = form_schema(Language::He).template();
        let b = form_schema(Language::He).template();
        assert_eq!(a, b);
    }
}
