use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// Club-scoped point configuration for a whole genus.
///
/// At most one row per (club_id, genus_name) is valid; a second row is a
/// data-integrity violation that lookups report instead of resolving.
/// `species_count` and `override_count` are cached display values,
/// recomputable from the catalog and the species-override table.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct GenusOverride {
    pub override_id: Uuid,
    pub club_id: Uuid,
    pub genus_name: String,
    pub points: i64,
    pub example_species: Option<String>,
    pub species_count: i64,
    pub override_count: i64,
    pub created_at: chrono::NaiveDateTime,
    pub updated_at: chrono::NaiveDateTime,
}
