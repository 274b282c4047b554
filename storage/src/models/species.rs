use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// A species catalog row. The catalog is maintained externally; the
/// engine reads the conservation flag and derives genus from the name.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct CatalogSpecies {
    pub species_id: Uuid,
    pub scientific_name: String,
    pub common_name: Option<String>,
    pub is_conservation_priority: bool,
    pub created_at: chrono::NaiveDateTime,
}
