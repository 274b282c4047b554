use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// Review lifecycle of a submission.
///
/// Open → {Approved, Declined}; Declined → Resubmitted → {Approved,
/// Declined}; Approved → Closed (terminal) or back to Resubmitted via
/// explicit admin re-open.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema,
)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum SubmissionStatus {
    Open,
    Approved,
    Declined,
    Resubmitted,
    Closed,
}

impl SubmissionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Approved => "approved",
            Self::Declined => "declined",
            Self::Resubmitted => "resubmitted",
            Self::Closed => "closed",
        }
    }

    pub fn can_transition_to(self, next: SubmissionStatus) -> bool {
        use SubmissionStatus::*;
        matches!(
            (self, next),
            (Open, Approved)
                | (Open, Declined)
                | (Declined, Resubmitted)
                | (Resubmitted, Approved)
                | (Resubmitted, Declined)
                | (Approved, Closed)
                | (Approved, Resubmitted)
        )
    }

    /// A live submission blocks another claim for the same specimen.
    /// Only declined submissions free the slot.
    pub fn is_live(self) -> bool {
        self != Self::Declined
    }
}

/// A member's claim that they bred a specimen, priced at creation time.
///
/// `points` and `conservation_applied` are snapshots from the resolver;
/// later changes to the override tables never touch existing rows. The
/// only post-creation point edit is an explicit admin override at
/// approval, which replaces the snapshot with a new one.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Submission {
    pub submission_id: Uuid,
    pub club_id: Uuid,
    pub member_id: Uuid,
    pub specimen_id: Uuid,
    pub species_name: String,
    pub period: i64,
    pub points: i64,
    pub conservation_applied: bool,
    pub status: SubmissionStatus,
    pub needs_review: bool,
    pub notes: Option<String>,
    pub created_at: chrono::NaiveDateTime,
    pub updated_at: chrono::NaiveDateTime,
}

#[cfg(test)]
mod tests {
    use super::SubmissionStatus::*;

    #[test]
    fn test_open_can_be_reviewed() {
        assert!(Open.can_transition_to(Approved));
        assert!(Open.can_transition_to(Declined));
        assert!(!Open.can_transition_to(Closed));
        assert!(!Open.can_transition_to(Resubmitted));
    }

    #[test]
    fn test_declined_can_only_be_resubmitted() {
        assert!(Declined.can_transition_to(Resubmitted));
        assert!(!Declined.can_transition_to(Approved));
        assert!(!Declined.can_transition_to(Closed));
    }

    #[test]
    fn test_resubmitted_can_be_reviewed_again() {
        assert!(Resubmitted.can_transition_to(Approved));
        assert!(Resubmitted.can_transition_to(Declined));
    }

    #[test]
    fn test_approved_closes_or_reopens() {
        assert!(Approved.can_transition_to(Closed));
        assert!(Approved.can_transition_to(Resubmitted));
        assert!(!Approved.can_transition_to(Declined));
    }

    #[test]
    fn test_closed_is_terminal() {
        for next in [Open, Approved, Declined, Resubmitted] {
            assert!(!Closed.can_transition_to(next));
        }
    }

    #[test]
    fn test_only_declined_frees_the_specimen() {
        assert!(!Declined.is_live());
        for status in [Open, Approved, Resubmitted, Closed] {
            assert!(status.is_live());
        }
    }
}
