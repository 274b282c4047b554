use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Member {
    pub member_id: Uuid,
    pub display_name: String,
    pub email: Option<String>,
    pub created_at: chrono::NaiveDateTime,
}
