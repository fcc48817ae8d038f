//! Chat message types and completion-prompt rendering.

use serde::{Deserialize, Serialize};

/// Author of a conversation turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Role::System => "system",
            Role::User => "user",
            Role::Assistant => "assistant",
        }
    }
}

/// A single role-tagged turn.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn system(content: impl Into<String>) -> Self {
        Self { role: Role::System, content: content.into() }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self { role: Role::User, content: content.into() }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self { role: Role::Assistant, content: content.into() }
    }
}

/// Flatten a message list into a single text prompt.
///
/// Base models without a chat template expect the `### Role:` delimiter
/// convention; the prompt always ends with an open `### Assistant:` cue so
/// the model continues as the assistant.
pub fn render_completion_prompt(messages: &[Message]) -> String {
    let mut prompt = String::new();
    for msg in messages {
        let header = match msg.role {
            Role::System => "### System:",
            Role::User => "### User:",
            Role::Assistant => "### Assistant:",
        };
        prompt.push_str(header);
        prompt.push('\n');
        prompt.push_str(&msg.content);
        prompt.push_str("\n\n");
    }
    prompt.push_str("### Assistant:\n");
    prompt
}

// ── Tests ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn prompt_uses_delimiter_convention() {
        let messages = vec![
            Message::system("be helpful"),
            Message::user("what is theft?"),
        ];
        let prompt = render_completion_prompt(&messages);
        assert_eq!(
            prompt,
            "### System:\nbe helpful\n\n### User:\nwhat is theft?\n\n### Assistant:\n"
        );
    }

    #[test]
    fn prompt_keeps_turn_order() {
        let messages = vec![
            Message::user("first"),
            Message::assistant("second"),
            Message::user("third"),
        ];
        let prompt = render_completion_prompt(&messages);
        let first = prompt.find("first").unwrap();
        let second = prompt.find("second").unwrap();
        let third = prompt.find("third").unwrap();
        assert!(first < second && second < third);
    }

    #[test]
    fn empty_history_still_gets_assistant_cue() {
        assert_eq!(render_completion_prompt(&[]), "### Assistant:\n");
    }

    #[test]
    fn role_round_trips_through_serde() {
        let json = serde_json::to_string(&Role::Assistant).unwrap();
        assert_eq!(json, "\"assistant\"");
        let back: Role = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Role::Assistant);
    }
}
