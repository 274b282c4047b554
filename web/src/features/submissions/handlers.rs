use axum::{
    Json,
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::submission::{
        ApproveSubmissionRequest, CreateSubmissionRequest, SubmissionCreated, SubmissionFilter,
        UpdateNotesRequest,
    },
    models::Submission,
    services::capability::Actor,
};
use uuid::Uuid;
use validator::Validate;

use crate::error::WebError;
use crate::middleware::auth::member_actor;

use super::services;

#[utoipa::path(
    post,
    path = "/api/submissions",
    request_body = CreateSubmissionRequest,
    responses(
        (status = 201, description = "Submission created with a point snapshot", body = SubmissionCreated),
        (status = 409, description = "A live submission already exists for this specimen"),
        (status = 422, description = "Species name has no derivable genus")
    ),
    tag = "submissions"
)]
pub async fn create_submission(
    State(db): State<Database>,
    Json(request): Json<CreateSubmissionRequest>,
) -> Result<Response, WebError> {
    request.validate()?;

    let created = services::create_submission(db.pool(), &request).await?;
    Ok((StatusCode::CREATED, Json(created)).into_response())
}

#[utoipa::path(
    get,
    path = "/api/submissions/{submission_id}",
    params(
        ("submission_id" = Uuid, Path, description = "Submission id")
    ),
    responses(
        (status = 200, description = "Submission found", body = Submission),
        (status = 404, description = "Submission not found")
    ),
    tag = "submissions"
)]
pub async fn get_submission(
    State(db): State<Database>,
    Path(submission_id): Path<Uuid>,
) -> Result<Response, WebError> {
    let submission = services::get_submission(db.pool(), submission_id).await?;
    Ok(Json(submission).into_response())
}

#[utoipa::path(
    get,
    path = "/api/submissions",
    params(SubmissionFilter),
    responses(
        (status = 200, description = "List submissions for a club", body = Vec<Submission>)
    ),
    tag = "submissions"
)]
pub async fn list_submissions(
    State(db): State<Database>,
    Query(filter): Query<SubmissionFilter>,
) -> Result<Json<Vec<Submission>>, WebError> {
    let submissions = services::list_submissions(db.pool(), &filter).await?;
    Ok(Json(submissions))
}

#[utoipa::path(
    post,
    path = "/api/submissions/{submission_id}/approve",
    params(
        ("submission_id" = Uuid, Path, description = "Submission id")
    ),
    request_body = ApproveSubmissionRequest,
    responses(
        (status = 200, description = "Submission approved", body = Submission),
        (status = 409, description = "Invalid status transition")
    ),
    security(("bearer_auth" = [])),
    tag = "submissions"
)]
pub async fn approve_submission(
    State(db): State<Database>,
    Path(submission_id): Path<Uuid>,
    Json(request): Json<ApproveSubmissionRequest>,
) -> Result<Response, WebError> {
    request.validate()?;

    let submission =
        services::approve_submission(db.pool(), Actor::Admin, submission_id, request.points)
            .await?;
    Ok(Json(submission).into_response())
}

#[utoipa::path(
    post,
    path = "/api/submissions/{submission_id}/decline",
    params(
        ("submission_id" = Uuid, Path, description = "Submission id")
    ),
    responses(
        (status = 200, description = "Submission declined", body = Submission),
        (status = 409, description = "Invalid status transition")
    ),
    security(("bearer_auth" = [])),
    tag = "submissions"
)]
pub async fn decline_submission(
    State(db): State<Database>,
    Path(submission_id): Path<Uuid>,
) -> Result<Response, WebError> {
    let submission = services::decline_submission(db.pool(), Actor::Admin, submission_id).await?;
    Ok(Json(submission).into_response())
}

#[utoipa::path(
    post,
    path = "/api/submissions/{submission_id}/resubmit",
    params(
        ("submission_id" = Uuid, Path, description = "Submission id")
    ),
    responses(
        (status = 200, description = "Submission re-opened", body = Submission),
        (status = 409, description = "Invalid status transition")
    ),
    security(("bearer_auth" = [])),
    tag = "submissions"
)]
pub async fn resubmit_submission(
    State(db): State<Database>,
    Path(submission_id): Path<Uuid>,
) -> Result<Response, WebError> {
    let submission = services::resubmit_submission(db.pool(), Actor::Admin, submission_id).await?;
    Ok(Json(submission).into_response())
}

#[utoipa::path(
    post,
    path = "/api/submissions/{submission_id}/close",
    params(
        ("submission_id" = Uuid, Path, description = "Submission id")
    ),
    responses(
        (status = 200, description = "Submission closed", body = Submission),
        (status = 409, description = "Invalid status transition")
    ),
    security(("bearer_auth" = [])),
    tag = "submissions"
)]
pub async fn close_submission(
    State(db): State<Database>,
    Path(submission_id): Path<Uuid>,
) -> Result<Response, WebError> {
    let submission = services::close_submission(db.pool(), Actor::Admin, submission_id).await?;
    Ok(Json(submission).into_response())
}

#[utoipa::path(
    put,
    path = "/api/submissions/{submission_id}/notes",
    params(
        ("submission_id" = Uuid, Path, description = "Submission id")
    ),
    request_body = UpdateNotesRequest,
    responses(
        (status = 200, description = "Notes updated", body = Submission),
        (status = 403, description = "Not the owning member, or past approval")
    ),
    tag = "submissions"
)]
pub async fn update_notes(
    State(db): State<Database>,
    Path(submission_id): Path<Uuid>,
    headers: HeaderMap,
    Json(request): Json<UpdateNotesRequest>,
) -> Result<Response, WebError> {
    request.validate()?;

    let actor = member_actor(&headers)?;
    let submission =
        services::update_notes(db.pool(), actor, submission_id, request.notes.as_deref()).await?;
    Ok(Json(submission).into_response())
}
