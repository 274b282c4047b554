use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use crate::models::{Submission, SubmissionStatus};

/// Request payload for a member's award claim.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateSubmissionRequest {
    pub club_id: Uuid,

    pub member_id: Uuid,

    pub specimen_id: Uuid,

    #[validate(length(
        min = 1,
        max = 255,
        message = "Species name must be between 1 and 255 characters"
    ))]
    pub species_name: String,

    /// Program year the claim counts toward; defaults to the current year.
    pub period: Option<i64>,

    #[validate(length(max = 2000))]
    pub notes: Option<String>,
}

/// Admin approval, optionally replacing the resolver's point snapshot.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct ApproveSubmissionRequest {
    #[validate(range(min = 0, message = "Points must be >= 0"))]
    pub points: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateNotesRequest {
    #[validate(length(max = 2000))]
    pub notes: Option<String>,
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct SubmissionFilter {
    pub club_id: Uuid,
    pub period: Option<i64>,
    pub status: Option<SubmissionStatus>,
}

/// A freshly created submission plus the resolver's side-effect flag.
#[derive(Debug, Serialize, ToSchema)]
pub struct SubmissionCreated {
    pub submission: Submission,
    /// True when pricing this claim auto-created a genus override at the
    /// club default, pending admin tuning.
    pub genus_created: bool,
}
