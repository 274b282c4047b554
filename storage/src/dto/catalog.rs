use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

/// Request payload for adding a species to the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateSpeciesRequest {
    #[validate(length(
        min = 1,
        max = 255,
        message = "Scientific name must be between 1 and 255 characters"
    ))]
    pub scientific_name: String,

    #[validate(length(max = 255))]
    pub common_name: Option<String>,

    #[serde(default)]
    pub is_conservation_priority: bool,
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct CatalogFilter {
    /// Restrict the listing to one genus.
    pub genus: Option<String>,
}
