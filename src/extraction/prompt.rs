//! Prompt assembly for both extraction modes.

use serde_json::Value;

use crate::models::{Message, Role};

/// Instruction for conversation-mode extraction: JSON restricted to the
/// profile keys, with the sentinel word for incomplete conversations.
const CONVERSATION_EXTRACTION_PROMPT: &str = "\
Review the following conversation and extract the user's information into a JSON object.
The required fields are: `first_name`, `last_name`, `id_number` (9 digits), \
`gender` ('male', 'female', or 'other'), `age` (0-120), `hmo` ('מכבי', 'מאוחדת', 'כללית'), \
`card_number` (9 digits), and `tier` ('זהב', 'כסף', 'ארד').
If any piece of information is missing, respond with the word \"None\".";

/// Messages asking the LLM to extract a profile from conversation history.
pub fn conversation_extraction_messages(history: &[Message]) -> Vec<Message> {
    vec![
        Message::system(CONVERSATION_EXTRACTION_PROMPT),
        Message::user(format!(
            "Here is the conversation history:\n\n{}",
            render_history(history)
        )),
    ]
}

/// Messages asking the LLM to fill a form schema from OCR text.
///
/// Absent fields are requested as empty strings (form mode has no
/// sentinel, since a blank form is a valid, all-empty record).
pub fn form_extraction_messages(schema_template: &Value, form_text: &str) -> Vec<Message> {
    vec![Message::user(format!(
        "Extract the following fields from the given form text. \
         Return only JSON with keys exactly as in the schema. \
         Use empty string for missing fields.\nSchema: {schema_template}\n\nForm Text:\n{form_text}"
    ))]
}

fn render_history(history: &[Message]) -> String {
    history
        .iter()
        .map(|m| {
            let role = match m.role {
                Role::User => "user",
                Role::Assistant => "assistant",
                Role::System => "system",
            };
            format!("{role}: {}", m.content)
        })
        .collect::<Vec<_>>()
        .join("\n")
}
