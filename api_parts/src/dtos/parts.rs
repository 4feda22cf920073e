use db::models::part::Part;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    pub query: Option<String>,
    pub role: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub query: String,
    pub role: Option<String>,
    pub results: Vec<Part>,
}

#[derive(Debug, Deserialize)]
pub struct CreatePartRequest {
    pub user_id: Option<Uuid>,
    pub vehicle: Option<String>,
    pub part_description: Option<String>,
    pub urgency: Option<String>,
}
