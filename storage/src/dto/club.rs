use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Request payload for registering a club's awards program.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateClubRequest {
    #[validate(length(
        min = 1,
        max = 255,
        message = "Name must be between 1 and 255 characters"
    ))]
    pub name: String,

    #[validate(range(min = 0, message = "Default points must be >= 0"))]
    pub default_points: i64,

    #[validate(range(min = 1, message = "Conservation multiplier must be >= 1"))]
    pub conservation_multiplier: i64,

    pub program_start: Option<NaiveDate>,

    pub program_end: Option<NaiveDate>,
}
