use chrono::Datelike;
use sqlx::SqlitePool;
use storage::{
    dto::submission::{CreateSubmissionRequest, SubmissionCreated, SubmissionFilter},
    error::Result,
    models::Submission,
    repository::catalog::CatalogRepository,
    repository::club::ClubRepository,
    repository::submissions::SubmissionRepository,
    services::capability::Actor,
    services::resolution::resolve_points,
};
use uuid::Uuid;

use crate::error::{WebError, WebResult};

/// Price and persist a member's claim.
///
/// Pulls the club configuration and the catalog conservation flag, runs
/// the resolver, then snapshots the result onto a new ledger row.
pub async fn create_submission(
    pool: &SqlitePool,
    request: &CreateSubmissionRequest,
) -> Result<SubmissionCreated> {
    let club = ClubRepository::new(pool).find_by_id(request.club_id).await?;

    let is_conservation_flagged = CatalogRepository::new(pool)
        .find_by_name(&request.species_name)
        .await?
        .map(|species| species.is_conservation_priority)
        .unwrap_or(false);

    let resolution =
        resolve_points(pool, &club, &request.species_name, is_conservation_flagged).await?;

    let period = request
        .period
        .unwrap_or_else(|| chrono::Utc::now().year() as i64);

    let submission = SubmissionRepository::new(pool)
        .create(request, period, &resolution)
        .await?;

    Ok(SubmissionCreated {
        submission,
        genus_created: resolution.genus_created,
    })
}

pub async fn get_submission(pool: &SqlitePool, submission_id: Uuid) -> Result<Submission> {
    let repo = SubmissionRepository::new(pool);
    repo.find_by_id(submission_id).await
}

pub async fn list_submissions(
    pool: &SqlitePool,
    filter: &SubmissionFilter,
) -> Result<Vec<Submission>> {
    let repo = SubmissionRepository::new(pool);
    repo.list(filter).await
}

pub async fn approve_submission(
    pool: &SqlitePool,
    actor: Actor,
    submission_id: Uuid,
    admin_points: Option<i64>,
) -> WebResult<Submission> {
    if !actor.can_review() {
        return Err(WebError::Forbidden);
    }

    let repo = SubmissionRepository::new(pool);
    Ok(repo.approve(submission_id, admin_points).await?)
}

pub async fn decline_submission(
    pool: &SqlitePool,
    actor: Actor,
    submission_id: Uuid,
) -> WebResult<Submission> {
    if !actor.can_review() {
        return Err(WebError::Forbidden);
    }

    let repo = SubmissionRepository::new(pool);
    Ok(repo.decline(submission_id).await?)
}

pub async fn resubmit_submission(
    pool: &SqlitePool,
    actor: Actor,
    submission_id: Uuid,
) -> WebResult<Submission> {
    if !actor.can_review() {
        return Err(WebError::Forbidden);
    }

    let repo = SubmissionRepository::new(pool);
    Ok(repo.resubmit(submission_id).await?)
}

pub async fn close_submission(
    pool: &SqlitePool,
    actor: Actor,
    submission_id: Uuid,
) -> WebResult<Submission> {
    if !actor.can_review() {
        return Err(WebError::Forbidden);
    }

    let repo = SubmissionRepository::new(pool);
    Ok(repo.close(submission_id).await?)
}

/// Notes are the only field the owning member may edit, and only before
/// approval.
pub async fn update_notes(
    pool: &SqlitePool,
    actor: Actor,
    submission_id: Uuid,
    notes: Option<&str>,
) -> WebResult<Submission> {
    let repo = SubmissionRepository::new(pool);
    let submission = repo.find_by_id(submission_id).await?;

    if !actor.can_edit_notes(&submission) {
        return Err(WebError::Forbidden);
    }

    Ok(repo.update_notes(submission_id, notes).await?)
}
