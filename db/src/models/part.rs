use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
pub struct Part {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub vendor: Option<String>,
    pub price_cents: Option<i64>,
    pub created_at: DateTime<Utc>,
}
