use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// Club-scoped point configuration for one exact species name.
///
/// Wins over the genus override when present with `points > 0`; a value
/// of zero means "not configured" at this level.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct SpeciesOverride {
    pub override_id: Uuid,
    pub club_id: Uuid,
    pub species_name: String,
    pub points: i64,
    pub created_at: chrono::NaiveDateTime,
    pub updated_at: chrono::NaiveDateTime,
}
