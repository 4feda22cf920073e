use serde_json::Value;
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct OrderCreateRequest {
    pub user_id: Uuid,
    pub items: Value,
}
