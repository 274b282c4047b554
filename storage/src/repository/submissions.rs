use sqlx::{QueryBuilder, Sqlite, SqlitePool};
use uuid::Uuid;

use crate::dto::submission::{CreateSubmissionRequest, SubmissionFilter};
use crate::error::{Result, StorageError};
use crate::models::{Submission, SubmissionStatus};
use crate::services::resolution::Resolution;

const SUBMISSION_COLUMNS: &str =
    "submission_id, club_id, member_id, specimen_id, species_name, period, points, \
     conservation_applied, status, needs_review, notes, created_at, updated_at";

/// The submission ledger. Persists point snapshots and drives the review
/// state machine; it never recomputes points from current configuration.
pub struct SubmissionRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> SubmissionRepository<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Persists a new claim with the resolver's snapshot.
    ///
    /// Rejects with `DuplicateSubmission` when a live (non-declined) claim
    /// for the same (club, member, specimen) already exists.
    pub async fn create(
        &self,
        request: &CreateSubmissionRequest,
        period: i64,
        resolution: &Resolution,
    ) -> Result<Submission> {
        let live_count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM submissions \
             WHERE club_id = ? AND member_id = ? AND specimen_id = ? AND status != 'declined'",
        )
        .bind(request.club_id)
        .bind(request.member_id)
        .bind(request.specimen_id)
        .fetch_one(self.pool)
        .await?;

        if live_count > 0 {
            return Err(StorageError::DuplicateSubmission);
        }

        let now = chrono::Utc::now().naive_utc();
        let submission = Submission {
            submission_id: Uuid::new_v4(),
            club_id: request.club_id,
            member_id: request.member_id,
            specimen_id: request.specimen_id,
            species_name: request.species_name.clone(),
            period,
            points: resolution.points,
            conservation_applied: resolution.conservation_applied,
            status: SubmissionStatus::Open,
            needs_review: resolution.needs_review,
            notes: request.notes.clone(),
            created_at: now,
            updated_at: now,
        };

        sqlx::query(
            "INSERT INTO submissions (submission_id, club_id, member_id, specimen_id, \
             species_name, period, points, conservation_applied, status, needs_review, \
             notes, created_at, updated_at) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(submission.submission_id)
        .bind(submission.club_id)
        .bind(submission.member_id)
        .bind(submission.specimen_id)
        .bind(&submission.species_name)
        .bind(submission.period)
        .bind(submission.points)
        .bind(submission.conservation_applied)
        .bind(submission.status)
        .bind(submission.needs_review)
        .bind(&submission.notes)
        .bind(submission.created_at)
        .bind(submission.updated_at)
        .execute(self.pool)
        .await?;

        Ok(submission)
    }

    pub async fn find_by_id(&self, submission_id: Uuid) -> Result<Submission> {
        let submission = sqlx::query_as::<_, Submission>(&format!(
            "SELECT {SUBMISSION_COLUMNS} FROM submissions WHERE submission_id = ?"
        ))
        .bind(submission_id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(submission)
    }

    pub async fn list(&self, filter: &SubmissionFilter) -> Result<Vec<Submission>> {
        let mut query = QueryBuilder::<Sqlite>::new(format!(
            "SELECT {SUBMISSION_COLUMNS} FROM submissions WHERE club_id = "
        ));
        query.push_bind(filter.club_id);

        if let Some(period) = filter.period {
            query.push(" AND period = ");
            query.push_bind(period);
        }

        if let Some(status) = filter.status {
            query.push(" AND status = ");
            query.push_bind(status.as_str());
        }

        query.push(" ORDER BY created_at DESC");

        let submissions = query
            .build_query_as::<Submission>()
            .fetch_all(self.pool)
            .await?;

        Ok(submissions)
    }

    /// Approved submissions for one club and period, the aggregation input.
    pub async fn list_approved(&self, club_id: Uuid, period: i64) -> Result<Vec<Submission>> {
        let submissions = sqlx::query_as::<_, Submission>(&format!(
            "SELECT {SUBMISSION_COLUMNS} FROM submissions \
             WHERE club_id = ? AND period = ? AND status = 'approved' \
             ORDER BY member_id, created_at"
        ))
        .bind(club_id)
        .bind(period)
        .fetch_all(self.pool)
        .await?;

        Ok(submissions)
    }

    /// Approves a submission. An explicit admin point value replaces the
    /// snapshot; it is still a snapshot, untouched by future override
    /// edits.
    pub async fn approve(
        &self,
        submission_id: Uuid,
        admin_points: Option<i64>,
    ) -> Result<Submission> {
        let submission = self.find_by_id(submission_id).await?;
        self.ensure_transition(&submission, SubmissionStatus::Approved)?;

        let points = admin_points.unwrap_or(submission.points);
        let updated_at = chrono::Utc::now().naive_utc();

        sqlx::query(
            "UPDATE submissions SET status = ?, points = ?, needs_review = 0, updated_at = ? \
             WHERE submission_id = ?",
        )
        .bind(SubmissionStatus::Approved)
        .bind(points)
        .bind(updated_at)
        .bind(submission_id)
        .execute(self.pool)
        .await?;

        Ok(Submission {
            status: SubmissionStatus::Approved,
            points,
            needs_review: false,
            updated_at,
            ..submission
        })
    }

    pub async fn decline(&self, submission_id: Uuid) -> Result<Submission> {
        self.transition(submission_id, SubmissionStatus::Declined)
            .await
    }

    pub async fn resubmit(&self, submission_id: Uuid) -> Result<Submission> {
        self.transition(submission_id, SubmissionStatus::Resubmitted)
            .await
    }

    pub async fn close(&self, submission_id: Uuid) -> Result<Submission> {
        self.transition(submission_id, SubmissionStatus::Closed)
            .await
    }

    pub async fn update_notes(
        &self,
        submission_id: Uuid,
        notes: Option<&str>,
    ) -> Result<Submission> {
        let submission = self.find_by_id(submission_id).await?;
        let updated_at = chrono::Utc::now().naive_utc();

        sqlx::query("UPDATE submissions SET notes = ?, updated_at = ? WHERE submission_id = ?")
            .bind(notes)
            .bind(updated_at)
            .bind(submission_id)
            .execute(self.pool)
            .await?;

        Ok(Submission {
            notes: notes.map(String::from),
            updated_at,
            ..submission
        })
    }

    async fn transition(&self, submission_id: Uuid, next: SubmissionStatus) -> Result<Submission> {
        let submission = self.find_by_id(submission_id).await?;
        self.ensure_transition(&submission, next)?;

        let updated_at = chrono::Utc::now().naive_utc();
        sqlx::query("UPDATE submissions SET status = ?, updated_at = ? WHERE submission_id = ?")
            .bind(next)
            .bind(updated_at)
            .bind(submission_id)
            .execute(self.pool)
            .await?;

        Ok(Submission {
            status: next,
            updated_at,
            ..submission
        })
    }

    fn ensure_transition(&self, submission: &Submission, next: SubmissionStatus) -> Result<()> {
        if !submission.status.can_transition_to(next) {
            return Err(StorageError::ConstraintViolation(format!(
                "Cannot move submission from '{}' to '{}'",
                submission.status.as_str(),
                next.as_str()
            )));
        }
        Ok(())
    }
}
