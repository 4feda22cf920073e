use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
pub struct PartRequest {
    pub id: Uuid,
    pub user_id: Uuid,
    pub vehicle: String,
    pub part_description: String,
    pub urgency: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
}
