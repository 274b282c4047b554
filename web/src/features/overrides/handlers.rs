use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::overrides::{
        BackfillSummary, CreateGenusOverrideRequest, CreateSpeciesOverrideRequest,
        UpdateOverridePointsRequest,
    },
    models::{GenusOverride, SpeciesOverride},
};
use uuid::Uuid;
use validator::Validate;

use crate::error::WebError;

use super::services;

#[utoipa::path(
    get,
    path = "/api/clubs/{club_id}/overrides/genus",
    params(
        ("club_id" = Uuid, Path, description = "Club id")
    ),
    responses(
        (status = 200, description = "List genus overrides", body = Vec<GenusOverride>)
    ),
    tag = "overrides"
)]
pub async fn list_genus_overrides(
    State(db): State<Database>,
    Path(club_id): Path<Uuid>,
) -> Result<Json<Vec<GenusOverride>>, WebError> {
    let rows = services::list_genus_overrides(db.pool(), club_id).await?;
    Ok(Json(rows))
}

#[utoipa::path(
    get,
    path = "/api/clubs/{club_id}/overrides/species",
    params(
        ("club_id" = Uuid, Path, description = "Club id")
    ),
    responses(
        (status = 200, description = "List species overrides", body = Vec<SpeciesOverride>)
    ),
    tag = "overrides"
)]
pub async fn list_species_overrides(
    State(db): State<Database>,
    Path(club_id): Path<Uuid>,
) -> Result<Json<Vec<SpeciesOverride>>, WebError> {
    let rows = services::list_species_overrides(db.pool(), club_id).await?;
    Ok(Json(rows))
}

#[utoipa::path(
    post,
    path = "/api/clubs/{club_id}/overrides/genus",
    params(
        ("club_id" = Uuid, Path, description = "Club id")
    ),
    request_body = CreateGenusOverrideRequest,
    responses(
        (status = 201, description = "Genus override created", body = GenusOverride),
        (status = 409, description = "Override already exists")
    ),
    security(("bearer_auth" = [])),
    tag = "overrides"
)]
pub async fn create_genus_override(
    State(db): State<Database>,
    Path(club_id): Path<Uuid>,
    Json(request): Json<CreateGenusOverrideRequest>,
) -> Result<Response, WebError> {
    request.validate()?;

    let row = services::create_genus_override(db.pool(), club_id, &request).await?;
    Ok((StatusCode::CREATED, Json(row)).into_response())
}

#[utoipa::path(
    post,
    path = "/api/clubs/{club_id}/overrides/species",
    params(
        ("club_id" = Uuid, Path, description = "Club id")
    ),
    request_body = CreateSpeciesOverrideRequest,
    responses(
        (status = 201, description = "Species override created", body = SpeciesOverride),
        (status = 409, description = "Override already exists")
    ),
    security(("bearer_auth" = [])),
    tag = "overrides"
)]
pub async fn create_species_override(
    State(db): State<Database>,
    Path(club_id): Path<Uuid>,
    Json(request): Json<CreateSpeciesOverrideRequest>,
) -> Result<Response, WebError> {
    request.validate()?;

    let row = services::create_species_override(db.pool(), club_id, &request).await?;
    Ok((StatusCode::CREATED, Json(row)).into_response())
}

#[utoipa::path(
    put,
    path = "/api/clubs/{club_id}/overrides/genus/{override_id}",
    params(
        ("club_id" = Uuid, Path, description = "Club id"),
        ("override_id" = Uuid, Path, description = "Override id")
    ),
    request_body = UpdateOverridePointsRequest,
    responses(
        (status = 200, description = "Points updated", body = GenusOverride),
        (status = 404, description = "Override not found")
    ),
    security(("bearer_auth" = [])),
    tag = "overrides"
)]
pub async fn update_genus_points(
    State(db): State<Database>,
    Path((_club_id, override_id)): Path<(Uuid, Uuid)>,
    Json(request): Json<UpdateOverridePointsRequest>,
) -> Result<Response, WebError> {
    request.validate()?;

    let row = services::update_genus_points(db.pool(), override_id, request.points).await?;
    Ok(Json(row).into_response())
}

#[utoipa::path(
    put,
    path = "/api/clubs/{club_id}/overrides/species/{override_id}",
    params(
        ("club_id" = Uuid, Path, description = "Club id"),
        ("override_id" = Uuid, Path, description = "Override id")
    ),
    request_body = UpdateOverridePointsRequest,
    responses(
        (status = 204, description = "Points updated"),
        (status = 404, description = "Override not found")
    ),
    security(("bearer_auth" = [])),
    tag = "overrides"
)]
pub async fn update_species_points(
    State(db): State<Database>,
    Path((_club_id, override_id)): Path<(Uuid, Uuid)>,
    Json(request): Json<UpdateOverridePointsRequest>,
) -> Result<Response, WebError> {
    request.validate()?;

    services::update_species_points(db.pool(), override_id, request.points).await?;
    Ok(StatusCode::NO_CONTENT.into_response())
}

#[utoipa::path(
    delete,
    path = "/api/clubs/{club_id}/overrides/genus/{override_id}",
    params(
        ("club_id" = Uuid, Path, description = "Club id"),
        ("override_id" = Uuid, Path, description = "Override id")
    ),
    responses(
        (status = 204, description = "Override deleted"),
        (status = 404, description = "Override not found")
    ),
    security(("bearer_auth" = [])),
    tag = "overrides"
)]
pub async fn delete_genus_override(
    State(db): State<Database>,
    Path((_club_id, override_id)): Path<(Uuid, Uuid)>,
) -> Result<Response, WebError> {
    services::delete_genus_override(db.pool(), override_id).await?;
    Ok(StatusCode::NO_CONTENT.into_response())
}

#[utoipa::path(
    delete,
    path = "/api/clubs/{club_id}/overrides/species/{override_id}",
    params(
        ("club_id" = Uuid, Path, description = "Club id"),
        ("override_id" = Uuid, Path, description = "Override id")
    ),
    responses(
        (status = 204, description = "Override deleted"),
        (status = 404, description = "Override not found")
    ),
    security(("bearer_auth" = [])),
    tag = "overrides"
)]
pub async fn delete_species_override(
    State(db): State<Database>,
    Path((_club_id, override_id)): Path<(Uuid, Uuid)>,
) -> Result<Response, WebError> {
    services::delete_species_override(db.pool(), override_id).await?;
    Ok(StatusCode::NO_CONTENT.into_response())
}

#[utoipa::path(
    post,
    path = "/api/clubs/{club_id}/overrides/genus/backfill",
    params(
        ("club_id" = Uuid, Path, description = "Club id")
    ),
    responses(
        (status = 200, description = "Backfill complete", body = BackfillSummary),
        (status = 404, description = "Club not found")
    ),
    security(("bearer_auth" = [])),
    tag = "overrides"
)]
pub async fn backfill_genus_overrides(
    State(db): State<Database>,
    Path(club_id): Path<Uuid>,
) -> Result<Json<BackfillSummary>, WebError> {
    let created = services::backfill(db.pool(), club_id).await?;
    Ok(Json(BackfillSummary { created }))
}

#[utoipa::path(
    post,
    path = "/api/clubs/{club_id}/overrides/genus/{override_id}/recount",
    params(
        ("club_id" = Uuid, Path, description = "Club id"),
        ("override_id" = Uuid, Path, description = "Override id")
    ),
    responses(
        (status = 200, description = "Counters recomputed", body = GenusOverride),
        (status = 404, description = "Override not found")
    ),
    security(("bearer_auth" = [])),
    tag = "overrides"
)]
pub async fn recount_genus_override(
    State(db): State<Database>,
    Path((_club_id, override_id)): Path<(Uuid, Uuid)>,
) -> Result<Json<GenusOverride>, WebError> {
    let row = services::recount(db.pool(), override_id).await?;
    Ok(Json(row))
}
