//! Typed admin operations over the hosted database and auth provider.
//!
//! The hosted database offers no server-side pagination or aggregation for
//! the access patterns used here, so every listing is a full read followed
//! by an in-memory sort/slice, and the dashboard is a full-collection scan
//! recomputed per request. Acceptable at the assumed request volume.

use chrono::{NaiveTime, Utc};
use serde_json::{json, Map, Value};
use std::collections::HashMap;
use tracing::warn;

use crate::config::Config;
use crate::schemas::admin::{
    CategoryCount, ChatQuery, ChatRecord, DashboardStats, UpdateUserRequest, UserData,
    UserDetails,
};

use super::types::{as_millis, ChatEntry, UserRecord};
use super::{AccountUpdate, AuthAdmin, FirebaseError, RealtimeDb};

pub struct AdminGateway {
    db: RealtimeDb,
    /// `None` when no auth-provider token is configured.
    auth: Option<AuthAdmin>,
}

impl AdminGateway {
    /// `None` when no database URL is configured at all.
    pub fn from_config(config: &Config) -> Option<Self> {
        let url = config.firebase_database_url.as_ref()?;
        let db = RealtimeDb::new(url.clone(), config.firebase_database_secret.clone());
        let auth = config.firebase_auth_token.clone().map(AuthAdmin::new);
        Some(Self { db, auth })
    }

    fn auth(&self) -> Result<&AuthAdmin, FirebaseError> {
        self.auth.as_ref().ok_or(FirebaseError::AuthNotConfigured)
    }

    // ── Reads ─────────────────────────────────────────────────────────────────

    async fn users_map(&self) -> Result<HashMap<String, UserRecord>, FirebaseError> {
        Ok(object_entries(self.db.get("users").await?))
    }

    async fn chats_tree(&self) -> Result<HashMap<String, HashMap<String, ChatEntry>>, FirebaseError>
    {
        let mut tree = HashMap::new();
        if let Some(Value::Object(map)) = self.db.get("chats").await? {
            for (uid, subtree) in map {
                tree.insert(uid, object_entries(Some(subtree)));
            }
        }
        Ok(tree)
    }

    /// All users, sliced in memory. Returns `(total, page)`.
    pub async fn list_users(
        &self,
        limit: usize,
        offset: usize,
    ) -> Result<(usize, Vec<UserData>), FirebaseError> {
        let users: Vec<UserData> = self
            .users_map()
            .await?
            .into_iter()
            .map(|(uid, rec)| user_data(uid, &rec))
            .collect();
        let total = users.len();
        let page = users.into_iter().skip(offset).take(limit).collect();
        Ok((total, page))
    }

    /// One user's detail view; `None` when the record does not exist.
    pub async fn get_user(&self, uid: &str) -> Result<Option<UserDetails>, FirebaseError> {
        let Some(node) = self.db.get(&format!("users/{uid}")).await? else {
            return Ok(None);
        };
        let rec: UserRecord = serde_json::from_value(node).unwrap_or_default();
        Ok(Some(UserDetails {
            id: uid.to_owned(),
            email: rec.email.clone(),
            phone: rec.phone.clone(),
            created_at: rec.created_at.as_ref().and_then(as_millis).unwrap_or(0),
            last_login: rec.last_login.as_ref().and_then(as_millis),
            display_name: rec.display_name,
            photo_url: rec.photo_url,
        }))
    }

    /// One user's chat history, newest first. Returns `(total, page)`.
    pub async fn user_chats(
        &self,
        uid: &str,
        limit: usize,
    ) -> Result<(usize, Vec<ChatRecord>), FirebaseError> {
        let entries = object_entries::<ChatEntry>(self.db.get(&format!("chats/{uid}")).await?);
        let mut chats: Vec<ChatRecord> = entries
            .into_iter()
            .map(|(chat_id, entry)| ChatRecord {
                id: chat_id,
                user_id: uid.to_owned(),
                user_email: entry.user_email.clone(),
                message: entry.message.clone(),
                response: entry.response.clone(),
                category: entry.category_or_default(),
                timestamp: entry.timestamp_millis(),
            })
            .collect();
        chats.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        let total = chats.len();
        chats.truncate(limit);
        Ok((total, chats))
    }

    /// Every chat query across all users, newest first, optionally filtered
    /// to one user. Returns `(total, page)`.
    pub async fn list_queries(
        &self,
        limit: usize,
        offset: usize,
        user_id: Option<&str>,
    ) -> Result<(usize, Vec<ChatQuery>), FirebaseError> {
        let mut queries = Vec::new();
        for (uid, chats) in self.chats_tree().await? {
            if user_id.is_some_and(|filter| filter != uid) {
                continue;
            }
            for entry in chats.into_values() {
                queries.push(ChatQuery {
                    user_id: uid.clone(),
                    query: entry.message.clone(),
                    timestamp: entry.timestamp_millis(),
                    category: entry.category_or_default(),
                });
            }
        }
        queries.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        let total = queries.len();
        let page = queries.into_iter().skip(offset).take(limit).collect();
        Ok((total, page))
    }

    /// Single full-collection scan; nothing is maintained incrementally.
    pub async fn dashboard_stats(&self) -> Result<DashboardStats, FirebaseError> {
        let users = self.users_map().await?;
        let chats = self.chats_tree().await?;

        let today_start = Utc::now()
            .date_naive()
            .and_time(NaiveTime::MIN)
            .and_utc()
            .timestamp_millis();

        let active_users_today = users
            .values()
            .filter(|u| u.last_login.as_ref().and_then(as_millis).unwrap_or(0) >= today_start)
            .count();

        let mut total_queries = 0;
        let mut queries_today = 0;
        let mut category_count: HashMap<String, usize> = HashMap::new();
        for user_chats in chats.values() {
            for entry in user_chats.values() {
                total_queries += 1;
                if entry.timestamp_millis() >= today_start {
                    queries_today += 1;
                }
                *category_count.entry(entry.category_or_default()).or_default() += 1;
            }
        }

        let mut top_categories: Vec<CategoryCount> = category_count
            .into_iter()
            .map(|(category, count)| CategoryCount { category, count })
            .collect();
        top_categories.sort_by(|a, b| b.count.cmp(&a.count));
        top_categories.truncate(5);

        Ok(DashboardStats {
            total_users: users.len(),
            total_queries,
            active_users_today,
            queries_today,
            top_categories,
            last_updated: Utc::now().to_rfc3339(),
        })
    }

    // ── Mutations ─────────────────────────────────────────────────────────────

    /// Delete the auth account, the user record, and the chat subtree.
    ///
    /// Only the auth delete can fail the operation; the database cleanup
    /// afterwards is best-effort and never rolled back, so the stores may
    /// diverge on partial failure.
    pub async fn delete_user(&self, uid: &str) -> Result<(), FirebaseError> {
        self.auth()?.delete_account(uid).await?;

        if let Err(e) = self.db.delete(&format!("users/{uid}")).await {
            warn!(uid, error = %e, "user record delete failed after auth delete");
        }
        if let Err(e) = self.db.delete(&format!("chats/{uid}")).await {
            warn!(uid, error = %e, "chat subtree delete failed after auth delete");
        }
        Ok(())
    }

    /// Update a user in both stores.
    ///
    /// The auth-provider update is best-effort: failures are logged and the
    /// database update proceeds regardless, so the two stores can diverge.
    pub async fn update_user(
        &self,
        uid: &str,
        update: &UpdateUserRequest,
    ) -> Result<(), FirebaseError> {
        if let Some(auth) = &self.auth {
            let account = AccountUpdate {
                email: update.email.clone().filter(|v| !v.is_empty()),
                display_name: update.display_name.clone().filter(|v| !v.is_empty()),
                phone_number: update
                    .phone
                    .as_deref()
                    .map(str::trim)
                    .filter(|v| !v.is_empty())
                    .map(normalize_phone),
            };
            if !account.is_empty() {
                if let Err(e) = auth.update_account(uid, account).await {
                    warn!(uid, error = %e, "auth provider update failed; updating database anyway");
                }
            }
        }

        let mut db_updates = Map::new();
        if let Some(email) = update.email.as_ref().filter(|v| !v.is_empty()) {
            db_updates.insert("email".to_owned(), json!(email));
        }
        if let Some(phone) = &update.phone {
            // An empty string clears the field; JSON null removes the key.
            db_updates.insert(
                "phone".to_owned(),
                if phone.is_empty() { Value::Null } else { json!(phone) },
            );
        }
        if let Some(name) = &update.display_name {
            db_updates.insert(
                "displayName".to_owned(),
                if name.is_empty() { Value::Null } else { json!(name) },
            );
        }
        if !db_updates.is_empty() {
            self.db
                .patch(&format!("users/{uid}"), &Value::Object(db_updates))
                .await?;
        }
        Ok(())
    }

    /// Grant the `admin` role claim on the auth provider.
    pub async fn set_admin_role(&self, uid: &str) -> Result<(), FirebaseError> {
        self.auth()?
            .set_custom_claims(uid, &json!({ "admin": true }))
            .await
    }
}

// ── private helpers ──────────────────────────────────────────────────────────

/// Deserialise the children of a JSON object node, skipping the node
/// entirely when absent. Malformed children collapse to defaults rather
/// than failing the whole listing.
fn object_entries<T: serde::de::DeserializeOwned + Default>(
    node: Option<Value>,
) -> HashMap<String, T> {
    let mut entries = HashMap::new();
    if let Some(Value::Object(map)) = node {
        for (key, value) in map {
            entries.insert(key, serde_json::from_value(value).unwrap_or_default());
        }
    }
    entries
}

fn user_data(uid: String, rec: &UserRecord) -> UserData {
    UserData {
        id: uid,
        email: rec.email.clone(),
        phone: rec.phone.clone(),
        created_at: rec.created_at.as_ref().and_then(as_millis).unwrap_or(0),
        last_login: rec.last_login.as_ref().and_then(as_millis),
    }
}

/// E.164 with a `+91` default country code, matching the user base.
fn normalize_phone(phone: &str) -> String {
    if phone.starts_with('+') {
        phone.to_owned()
    } else {
        format!("+91{phone}")
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn phone_gets_default_country_code() {
        assert_eq!(normalize_phone("9876543210"), "+919876543210");
        assert_eq!(normalize_phone("+449876543210"), "+449876543210");
    }

    #[test]
    fn object_entries_skips_absent_nodes() {
        let entries: HashMap<String, ChatEntry> = object_entries(None);
        assert!(entries.is_empty());
    }

    #[test]
    fn object_entries_tolerates_malformed_children() {
        let node = serde_json::json!({
            "good": { "message": "hi", "timestamp": 3 },
            "bad": "not an object"
        });
        let entries: HashMap<String, ChatEntry> = object_entries(Some(node));
        assert_eq!(entries.len(), 2);
        assert_eq!(entries["good"].message, "hi");
        assert_eq!(entries["bad"].message, "");
    }
}
