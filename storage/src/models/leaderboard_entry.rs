use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// Fully derived per-member standings for one club and program period.
/// Rebuilt wholesale by every aggregation run; zero-point rows are pruned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct LeaderboardEntry {
    pub entry_id: Uuid,
    pub club_id: Uuid,
    pub member_id: Uuid,
    pub period: i64,
    pub species_count: i64,
    pub conservation_species_count: i64,
    pub points: i64,
    pub updated_at: chrono::NaiveDateTime,
}
