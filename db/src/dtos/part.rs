use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct PartRequestCreate {
    pub user_id: Uuid,
    pub vehicle: String,
    pub part_description: String,
    pub urgency: String,
}
