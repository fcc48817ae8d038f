//! Raw record shapes as stored in the realtime database.
//!
//! Records were written by several client versions; the structs default
//! every field and timestamps are coerced from either JSON numbers or
//! numeric strings.

use serde::Deserialize;
use serde_json::Value;

/// `users/{uid}` node.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserRecord {
    pub email: String,
    pub phone: Option<String>,
    pub display_name: Option<String>,
    #[serde(rename = "photoURL")]
    pub photo_url: Option<String>,
    pub created_at: Option<Value>,
    pub last_login: Option<Value>,
}

/// `chats/{uid}/{chat_id}` node.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ChatEntry {
    pub user_email: String,
    pub message: String,
    pub response: String,
    pub category: Option<String>,
    pub timestamp: Option<Value>,
}

impl ChatEntry {
    pub fn timestamp_millis(&self) -> i64 {
        self.timestamp.as_ref().and_then(as_millis).unwrap_or(0)
    }

    pub fn category_or_default(&self) -> String {
        match &self.category {
            Some(c) if !c.is_empty() => c.clone(),
            _ => "General".to_owned(),
        }
    }
}

/// Millisecond epoch timestamps arrive as numbers or numeric strings.
pub fn as_millis(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) if !s.is_empty() => s.parse().ok(),
        _ => None,
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod test {
    use super::*;
    use serde_json::json;

    #[test]
    fn millis_coerces_numbers_and_strings() {
        assert_eq!(as_millis(&json!(1700000000000_i64)), Some(1700000000000));
        assert_eq!(as_millis(&json!("1700000000000")), Some(1700000000000));
        assert_eq!(as_millis(&json!("")), None);
        assert_eq!(as_millis(&json!(null)), None);
        assert_eq!(as_millis(&json!("not a number")), None);
    }

    #[test]
    fn user_record_tolerates_missing_fields() {
        let rec: UserRecord = serde_json::from_value(json!({
            "email": "user@example.com",
            "createdAt": "1700000000000"
        }))
        .unwrap();
        assert_eq!(rec.email, "user@example.com");
        assert!(rec.phone.is_none());
        assert_eq!(rec.created_at.as_ref().and_then(as_millis), Some(1700000000000));
    }

    #[test]
    fn chat_entry_defaults_category() {
        let entry: ChatEntry = serde_json::from_value(json!({
            "message": "what is theft?",
            "timestamp": 5
        }))
        .unwrap();
        assert_eq!(entry.category_or_default(), "General");
        assert_eq!(entry.timestamp_millis(), 5);
    }
}
