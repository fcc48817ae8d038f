//! Auth-provider admin operations (Identity Toolkit v1 REST).
//!
//! The bearer token is an externally minted service-account OAuth token;
//! minting and refresh happen outside this service.

use reqwest::Client;
use serde_json::{json, Value};

use super::FirebaseError;

const BASE_URL: &str = "https://identitytoolkit.googleapis.com/v1";

/// Profile fields to change on an account; only `Some` fields are sent.
#[derive(Debug, Default)]
pub struct AccountUpdate {
    pub email: Option<String>,
    pub display_name: Option<String>,
    /// E.164 phone number.
    pub phone_number: Option<String>,
}

impl AccountUpdate {
    pub fn is_empty(&self) -> bool {
        self.email.is_none() && self.display_name.is_none() && self.phone_number.is_none()
    }
}

#[derive(Debug, Clone)]
pub struct AuthAdmin {
    http: Client,
    token: String,
}

impl AuthAdmin {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            token: token.into(),
        }
    }

    async fn post(&self, endpoint: &str, body: Value) -> Result<(), FirebaseError> {
        let url = format!("{BASE_URL}/{endpoint}");
        let resp = self
            .http
            .post(url)
            .bearer_auth(&self.token)
            .json(&body)
            .send()
            .await?;
        let status = resp.status();
        if status.is_success() {
            Ok(())
        } else {
            let body = resp.text().await.unwrap_or_default();
            Err(FirebaseError::Status { status, body })
        }
    }

    /// Delete the account `uid`.
    pub async fn delete_account(&self, uid: &str) -> Result<(), FirebaseError> {
        self.post("accounts:delete", json!({ "localId": uid })).await
    }

    /// Update profile fields on `uid`; absent fields are left untouched.
    pub async fn update_account(
        &self,
        uid: &str,
        update: AccountUpdate,
    ) -> Result<(), FirebaseError> {
        let mut body = json!({ "localId": uid });
        if let Some(email) = update.email {
            body["email"] = email.into();
        }
        if let Some(name) = update.display_name {
            body["displayName"] = name.into();
        }
        if let Some(phone) = update.phone_number {
            body["phoneNumber"] = phone.into();
        }
        self.post("accounts:update", body).await
    }

    /// Attach custom claims to `uid` (serialised into `customAttributes`).
    pub async fn set_custom_claims(&self, uid: &str, claims: &Value) -> Result<(), FirebaseError> {
        self.post(
            "accounts:update",
            json!({ "localId": uid, "customAttributes": claims.to_string() }),
        )
        .await
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn empty_update_is_detected() {
        assert!(AccountUpdate::default().is_empty());
        let update = AccountUpdate {
            email: Some("a@b.c".into()),
            ..Default::default()
        };
        assert!(!update.is_empty());
    }
}
