use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{Database, dto::member::CreateMemberRequest, models::Member};
use validator::Validate;

use crate::error::WebError;

use super::services;

#[utoipa::path(
    get,
    path = "/api/members",
    responses(
        (status = 200, description = "List all members", body = Vec<Member>)
    ),
    tag = "members"
)]
pub async fn list_members(State(db): State<Database>) -> Result<Json<Vec<Member>>, WebError> {
    let members = services::list_members(db.pool()).await?;
    Ok(Json(members))
}

#[utoipa::path(
    post,
    path = "/api/members",
    request_body = CreateMemberRequest,
    responses(
        (status = 201, description = "Member created", body = Member),
        (status = 400, description = "Validation failed")
    ),
    security(("bearer_auth" = [])),
    tag = "members"
)]
pub async fn create_member(
    State(db): State<Database>,
    Json(request): Json<CreateMemberRequest>,
) -> Result<Response, WebError> {
    request.validate()?;

    let member = services::create_member(db.pool(), &request).await?;
    Ok((StatusCode::CREATED, Json(member)).into_response())
}
