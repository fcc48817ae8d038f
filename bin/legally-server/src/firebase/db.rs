//! Realtime-database REST client.
//!
//! Every node is addressable as `{base}/{path}.json`: GET returns the JSON
//! subtree (`null` for absent nodes), PATCH merges children (JSON `null`
//! values remove keys), DELETE removes the subtree.

use reqwest::Client;
use serde_json::Value;

use super::FirebaseError;

#[derive(Debug, Clone)]
pub struct RealtimeDb {
    http: Client,
    base_url: String,
    secret: Option<String>,
}

impl RealtimeDb {
    pub fn new(base_url: impl Into<String>, secret: Option<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            http: Client::new(),
            base_url,
            secret,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}.json", self.base_url, path)
    }

    fn credential(&self) -> Vec<(&str, &str)> {
        match &self.secret {
            Some(secret) => vec![("auth", secret.as_str())],
            None => Vec::new(),
        }
    }

    async fn check(resp: reqwest::Response) -> Result<reqwest::Response, FirebaseError> {
        let status = resp.status();
        if status.is_success() {
            Ok(resp)
        } else {
            let body = resp.text().await.unwrap_or_default();
            Err(FirebaseError::Status { status, body })
        }
    }

    /// Fetch the subtree at `path`; `None` when the node does not exist.
    pub async fn get(&self, path: &str) -> Result<Option<Value>, FirebaseError> {
        let resp = self
            .http
            .get(self.url(path))
            .query(&self.credential())
            .send()
            .await?;
        let value: Value = Self::check(resp).await?.json().await?;
        Ok((!value.is_null()).then_some(value))
    }

    /// Merge `update` into the node at `path`.
    pub async fn patch(&self, path: &str, update: &Value) -> Result<(), FirebaseError> {
        let resp = self
            .http
            .patch(self.url(path))
            .query(&self.credential())
            .json(update)
            .send()
            .await?;
        Self::check(resp).await?;
        Ok(())
    }

    /// Remove the subtree at `path`.
    pub async fn delete(&self, path: &str) -> Result<(), FirebaseError> {
        let resp = self
            .http
            .delete(self.url(path))
            .query(&self.credential())
            .send()
            .await?;
        Self::check(resp).await?;
        Ok(())
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn node_urls_end_in_json() {
        let db = RealtimeDb::new("https://demo.firebaseio.com", None);
        assert_eq!(db.url("users/u1"), "https://demo.firebaseio.com/users/u1.json");
    }

    #[test]
    fn trailing_slashes_are_stripped() {
        let db = RealtimeDb::new("https://demo.firebaseio.com//", None);
        assert_eq!(db.url("chats"), "https://demo.firebaseio.com/chats.json");
    }

    #[test]
    fn credential_only_present_when_configured() {
        let open = RealtimeDb::new("https://demo.firebaseio.com", None);
        assert!(open.credential().is_empty());

        let secured = RealtimeDb::new("https://demo.firebaseio.com", Some("s3cret".into()));
        assert_eq!(secured.credential(), vec![("auth", "s3cret")]);
    }
}
