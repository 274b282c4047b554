use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::catalog::{CatalogFilter, CreateSpeciesRequest},
    models::CatalogSpecies,
};
use validator::Validate;

use crate::error::WebError;

use super::services;

#[utoipa::path(
    get,
    path = "/api/catalog",
    params(CatalogFilter),
    responses(
        (status = 200, description = "List catalog species", body = Vec<CatalogSpecies>)
    ),
    tag = "catalog"
)]
pub async fn list_species(
    State(db): State<Database>,
    Query(filter): Query<CatalogFilter>,
) -> Result<Json<Vec<CatalogSpecies>>, WebError> {
    let species = services::list_species(db.pool(), &filter).await?;
    Ok(Json(species))
}

#[utoipa::path(
    post,
    path = "/api/catalog",
    request_body = CreateSpeciesRequest,
    responses(
        (status = 201, description = "Species added", body = CatalogSpecies),
        (status = 400, description = "Validation failed")
    ),
    security(("bearer_auth" = [])),
    tag = "catalog"
)]
pub async fn create_species(
    State(db): State<Database>,
    Json(request): Json<CreateSpeciesRequest>,
) -> Result<Response, WebError> {
    request.validate()?;

    let species = services::create_species(db.pool(), &request).await?;
    Ok((StatusCode::CREATED, Json(species)).into_response())
}
