use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Core product entity. Records are immutable once created; `id` and
/// `created_at` are assigned by the service at construction time.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub stock: i64,
    pub created_at: DateTime<Utc>,
}

impl Product {
    /// Builds a fresh record with a generated v4 id and the current time.
    pub fn new(name: String, description: String, price: f64, stock: i64) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            description,
            price,
            stock,
            created_at: Utc::now(),
        }
    }
}

// ── Request payloads ─────────────────────────────────────────────────────────

/// Every field is optional so that a missing one reaches the handler's
/// presence check instead of failing deserialization.
#[derive(Debug, Deserialize)]
pub struct CreateProduct {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub stock: Option<i64>,
}
