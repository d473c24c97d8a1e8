//! Localized user-facing texts and the collection system prompt.
//!
//! The confirmation summary and welcome message are rendered locally:
//! they list values the system already holds, so no LLM call is spent on
//! them and the wording is exact.

use crate::language::Language;
use crate::models::UserProfile;

/// System instruction for the collection conversation.
pub fn collection_system_prompt(language: Language) -> String {
    format!(
        "You are a friendly assistant for a health insurance provider. \
Your goal is to collect user information in a natural, conversational way.
- Ask for one piece of information at a time, or two related ones (e.g., first and last name).
- Be polite and friendly.
- The required pieces of information are: first name, last name, 9-digit ID number, gender, age, \
HMO name (must be one of: מכבי, מאוחדת, כללית), 9-digit HMO card number, \
and insurance tier (must be one of: זהב, כסף, ארד).
- Keep the entire conversation in {}.",
        language.instruction_name()
    )
}

/// The confirmation summary: every visible field echoed back, with a
/// yes-or-correct closing question.
pub fn confirmation_summary(profile: &UserProfile, language: Language) -> String {
    match language {
        Language::He => format!(
            "מעולה, תודה! אנא הקדש/י רגע לאימות הפרטים שלך:\n\n\
**שם מלא**: {} {}\n\
**מספר ת.ז**: {}\n\
**גיל**: {}\n\
**מין**: {}\n\
**קופת חולים**: {}\n\
**מספר כרטיס קופה**: {}\n\
**רובד ביטוחי**: {}\n\n\
האם כל המידע נכון? אנא השב/השיבי 'כן' לאישור, או ציין/צייני את הפרטים שברצונך לשנות.",
            profile.first_name,
            profile.last_name,
            profile.id_number,
            profile.age,
            profile.gender,
            profile.hmo,
            profile.card_number,
            profile.tier,
        ),
        Language::En => format!(
            "Great, thank you! Please take a moment to confirm your details:\n\n\
**Full Name**: {} {}\n\
**ID Number**: {}\n\
**Age**: {}\n\
**Gender**: {}\n\
**HMO**: {}\n\
**HMO Card Number**: {}\n\
**Insurance Tier**: {}\n\n\
Is all of this information correct? Please reply with 'Yes' to confirm \
or provide the details you'd like to change.",
            profile.first_name,
            profile.last_name,
            profile.id_number,
            profile.age,
            profile.gender,
            profile.hmo,
            profile.card_number,
            profile.tier,
        ),
    }
}

/// One-time greeting when the profile is committed and questions open up.
pub fn welcome_message(language: Language, first_name: &str) -> String {
    match language {
        Language::He => format!(
            "ברוך/ה הבא/ה, {first_name}! כעת ניתן לשאול שאלות על תוכנית הבריאות שלך."
        ),
        Language::En => format!(
            "Welcome, {first_name}! You can now ask questions about your HMO plan."
        ),
    }
}

/// The canned user turn recorded when the summary is accepted.
pub fn user_confirmed(language: Language) -> &'static str {
    match language {
        Language::He => "כן, המידע נכון.",
        Language::En => "Yes, this is correct.",
    }
}

/// The canned user turn recorded when the summary is rejected.
pub fn user_corrected(language: Language) -> &'static str {
    match language {
        Language::He => "לא, אני צריך/ה לבצע תיקון.",
        Language::En => "No, I need to make a correction.",
    }
}
