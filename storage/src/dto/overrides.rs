use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

fn validate_genus_name(genus: &str) -> Result<(), validator::ValidationError> {
    if genus.split_whitespace().count() == 1 {
        Ok(())
    } else {
        Err(validator::ValidationError::new("invalid_genus_name"))
    }
}

/// Request payload for configuring a genus-level point value.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateGenusOverrideRequest {
    #[validate(length(min = 1, max = 128))]
    #[validate(custom(function = "validate_genus_name"))]
    pub genus_name: String,

    #[validate(range(min = 0, message = "Points must be >= 0"))]
    pub points: i64,

    #[validate(length(max = 255))]
    pub example_species: Option<String>,
}

/// Request payload for configuring an exact-species point value.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateSpeciesOverrideRequest {
    #[validate(length(min = 1, max = 255))]
    pub species_name: String,

    #[validate(range(min = 0, message = "Points must be >= 0"))]
    pub points: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateOverridePointsRequest {
    #[validate(range(min = 0, message = "Points must be >= 0"))]
    pub points: i64,
}

/// Result of a backfill run over the species catalog.
#[derive(Debug, Serialize, ToSchema)]
pub struct BackfillSummary {
    pub created: u64,
}
