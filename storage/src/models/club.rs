use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// A club running an awards program. Point configuration lives here;
/// the engine treats these rows as read-only facts.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Club {
    pub club_id: Uuid,
    pub name: String,
    pub default_points: i64,
    pub conservation_multiplier: i64,
    pub program_start: Option<NaiveDate>,
    pub program_end: Option<NaiveDate>,
    pub created_at: chrono::NaiveDateTime,
}
