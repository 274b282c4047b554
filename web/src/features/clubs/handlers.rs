use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{Database, dto::club::CreateClubRequest, models::Club};
use uuid::Uuid;
use validator::Validate;

use crate::error::WebError;

use super::services;

#[utoipa::path(
    get,
    path = "/api/clubs",
    responses(
        (status = 200, description = "List all clubs", body = Vec<Club>)
    ),
    tag = "clubs"
)]
pub async fn list_clubs(State(db): State<Database>) -> Result<Json<Vec<Club>>, WebError> {
    let clubs = services::list_clubs(db.pool()).await?;
    Ok(Json(clubs))
}

#[utoipa::path(
    get,
    path = "/api/clubs/{club_id}",
    params(
        ("club_id" = Uuid, Path, description = "Club id")
    ),
    responses(
        (status = 200, description = "Club found", body = Club),
        (status = 404, description = "Club not found")
    ),
    tag = "clubs"
)]
pub async fn get_club(
    State(db): State<Database>,
    Path(club_id): Path<Uuid>,
) -> Result<Response, WebError> {
    let club = services::get_club(db.pool(), club_id).await?;
    Ok(Json(club).into_response())
}

#[utoipa::path(
    post,
    path = "/api/clubs",
    request_body = CreateClubRequest,
    responses(
        (status = 201, description = "Club created", body = Club),
        (status = 400, description = "Validation failed")
    ),
    security(("bearer_auth" = [])),
    tag = "clubs"
)]
pub async fn create_club(
    State(db): State<Database>,
    Json(request): Json<CreateClubRequest>,
) -> Result<Response, WebError> {
    request.validate()?;

    let club = services::create_club(db.pool(), &request).await?;
    Ok((StatusCode::CREATED, Json(club)).into_response())
}
