use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateMemberRequest {
    #[validate(length(
        min = 1,
        max = 255,
        message = "Display name must be between 1 and 255 characters"
    ))]
    pub display_name: String,

    #[validate(email)]
    pub email: Option<String>,
}
