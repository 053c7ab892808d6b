//! Conversation shaping — persona preamble, history mapping, follow-up suggestions.
//!
//! Pure functions, no I/O. The chat model only accepts `user` and `model`
//! turns, so the persona is emulated as a leading user/model exchange:
//!
//! ```text
//! user:  "I want you to act as: <persona instruction>"
//! model: "I understand. I'll act as described. How can I help you?"
//! ...history (sender "user" → user, anything else → model)...
//! user:  <new message>
//! ```

use serde::{Deserialize, Serialize};

use crate::persona::Persona;

const PERSONA_PREFIX: &str = "I want you to act as: ";
const PERSONA_ACK: &str = "I understand. I'll act as described. How can I help you?";

/// Number of synthetic turns placed ahead of the history.
pub const PREAMBLE_LEN: usize = 2;

/// Substituted whenever follow-up generation fails or cannot be parsed.
pub const FALLBACK_SUGGESTIONS: [&str; 3] = [
    "Can you explain that in more detail?",
    "What's an example of this concept?",
    "How does this relate to other topics?",
];

// ─── Wire types ────────────────────────────────────────────────────────────

/// One turn of client-held history.
///
/// Missing fields and non-string values (`null`, numbers, booleans) deserialize
/// as empty, so a malformed sender tag lands on the model side of the
/// conversation instead of failing the whole request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    #[serde(default, deserialize_with = "string_or_empty")]
    pub sender: String,
    #[serde(default, deserialize_with = "string_or_empty")]
    pub text: String,
}

fn string_or_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(s) => s,
        _ => String::new(),
    })
}

impl Turn {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            sender: "user".into(),
            text: text.into(),
        }
    }

    pub fn bot(text: impl Into<String>) -> Self {
        Self {
            sender: "bot".into(),
            text: text.into(),
        }
    }
}

/// Role understood by the chat model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Model,
}

impl Role {
    /// Only the exact sender tag `"user"` maps to [`Role::User`].
    pub fn from_sender(sender: &str) -> Self {
        if sender == "user" {
            Role::User
        } else {
            Role::Model
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Model => "model",
        }
    }
}

/// One entry of the composed message list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub parts: Vec<String>,
}

impl Message {
    pub fn new(role: Role, text: impl Into<String>) -> Self {
        Self {
            role,
            parts: vec![text.into()],
        }
    }

    pub fn user(text: impl Into<String>) -> Self {
        Self::new(Role::User, text)
    }

    pub fn model(text: impl Into<String>) -> Self {
        Self::new(Role::Model, text)
    }
}

/// Reply returned to the web client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reply {
    pub message: String,
    pub suggestions: Vec<String>,
}

// ─── Composition ───────────────────────────────────────────────────────────

/// Build the message list for the primary generation call.
///
/// Length is always `PREAMBLE_LEN + history.len() + 1`.
pub fn compose(message: &str, persona: Persona, history: &[Turn]) -> Vec<Message> {
    let mut out = Vec::with_capacity(PREAMBLE_LEN + history.len() + 1);

    out.push(Message::user(format!("{PERSONA_PREFIX}{}", persona.instruction())));
    out.push(Message::model(PERSONA_ACK));

    out.extend(
        history
            .iter()
            .map(|turn| Message::new(Role::from_sender(&turn.sender), turn.text.clone())),
    );

    out.push(Message::user(message));
    out
}

/// Build the single-turn request asking for three follow-up questions about `reply`.
pub fn suggestion_request(reply: &str) -> Vec<Message> {
    vec![Message::user(format!(
        "Based on this conversation where the last response was: '{reply}', suggest 3 brief \
         follow-up questions that would naturally continue the discussion. Format them as a \
         JSON array of strings. Just return the JSON array, nothing else."
    ))]
}

// ─── Suggestion parsing ────────────────────────────────────────────────────

/// Suggestion text was not a JSON array of strings.
#[derive(Debug, thiserror::Error)]
#[error("suggestions are not a JSON array of strings: {0}")]
pub struct SuggestionParseError(#[from] serde_json::Error);

/// Parse the model's suggestion text.
///
/// Surrounding whitespace is trimmed, then a leading ```` ```json ```` and a
/// trailing ```` ``` ```` are removed if present before JSON parsing.
pub fn parse_suggestions(raw: &str) -> Result<Vec<String>, SuggestionParseError> {
    let mut text = raw.trim();
    if let Some(rest) = text.strip_prefix("```json") {
        text = rest;
    }
    if let Some(rest) = text.strip_suffix("```") {
        text = rest;
    }
    Ok(serde_json::from_str(text.trim())?)
}

/// Owned copy of [`FALLBACK_SUGGESTIONS`].
pub fn fallback_suggestions() -> Vec<String> {
    FALLBACK_SUGGESTIONS.iter().map(|s| s.to_string()).collect()
}
