use uuid::Uuid;

use crate::models::{Submission, SubmissionStatus};

/// Who is acting on a resource. The HTTP layer decides which variant a
/// request maps to (bearer key or member header); the engine only asks the
/// capability questions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Actor {
    Admin,
    Member(Uuid),
}

impl Actor {
    /// Status transitions and approval-time point overrides are admin-only.
    pub fn can_review(&self) -> bool {
        matches!(self, Actor::Admin)
    }

    /// Notes are editable by the owning member while the claim is still
    /// theirs to amend (before approval); admins can always edit.
    pub fn can_edit_notes(&self, submission: &Submission) -> bool {
        match self {
            Actor::Admin => true,
            Actor::Member(member_id) => {
                *member_id == submission.member_id
                    && matches!(
                        submission.status,
                        SubmissionStatus::Open
                            | SubmissionStatus::Declined
                            | SubmissionStatus::Resubmitted
                    )
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submission(member_id: Uuid, status: SubmissionStatus) -> Submission {
        let now = chrono::Utc::now().naive_utc();
        Submission {
            submission_id: Uuid::new_v4(),
            club_id: Uuid::new_v4(),
            member_id,
            specimen_id: Uuid::new_v4(),
            species_name: "Betta splendens".to_string(),
            period: 2026,
            points: 10,
            conservation_applied: false,
            status,
            needs_review: false,
            notes: None,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_only_admin_reviews() {
        assert!(Actor::Admin.can_review());
        assert!(!Actor::Member(Uuid::new_v4()).can_review());
    }

    #[test]
    fn test_owner_edits_notes_before_approval() {
        let member_id = Uuid::new_v4();
        let actor = Actor::Member(member_id);

        assert!(actor.can_edit_notes(&submission(member_id, SubmissionStatus::Open)));
        assert!(actor.can_edit_notes(&submission(member_id, SubmissionStatus::Declined)));
        assert!(!actor.can_edit_notes(&submission(member_id, SubmissionStatus::Approved)));
        assert!(!actor.can_edit_notes(&submission(member_id, SubmissionStatus::Closed)));
    }

    #[test]
    fn test_non_owner_cannot_edit_notes() {
        let actor = Actor::Member(Uuid::new_v4());
        assert!(!actor.can_edit_notes(&submission(Uuid::new_v4(), SubmissionStatus::Open)));
    }

    #[test]
    fn test_admin_edits_any_notes() {
        assert!(Actor::Admin.can_edit_notes(&submission(Uuid::new_v4(), SubmissionStatus::Closed)));
    }
}
