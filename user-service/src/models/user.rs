use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Core user entity. Records are immutable once created; `id` and
/// `created_at` are assigned by the service at construction time.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    /// `None` serializes as JSON `null` — the field is always present on the wire.
    pub age: Option<i64>,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Builds a fresh record with a generated v4 id and the current time.
    pub fn new(name: String, email: String, age: Option<i64>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            email,
            age,
            created_at: Utc::now(),
        }
    }
}

// ── Request payloads ─────────────────────────────────────────────────────────

/// Every field is optional so that a missing one reaches the handler's
/// presence check instead of failing deserialization.
#[derive(Debug, Deserialize)]
pub struct CreateUser {
    pub name: Option<String>,
    pub email: Option<String>,
    pub age: Option<i64>,
}
