use axum::{
    Json,
    extract::{Path, Query, State},
};
use storage::{
    Database,
    dto::leaderboard::{LeaderboardQuery, StandingRow},
    models::LeaderboardEntry,
};
use uuid::Uuid;

use crate::error::WebError;

use super::services;

#[utoipa::path(
    get,
    path = "/api/clubs/{club_id}/leaderboard",
    params(
        ("club_id" = Uuid, Path, description = "Club id"),
        LeaderboardQuery
    ),
    responses(
        (status = 200, description = "Ranked standings for the period", body = Vec<StandingRow>)
    ),
    tag = "leaderboard"
)]
pub async fn get_standings(
    State(db): State<Database>,
    Path(club_id): Path<Uuid>,
    Query(query): Query<LeaderboardQuery>,
) -> Result<Json<Vec<StandingRow>>, WebError> {
    let period = query.period.unwrap_or_else(services::default_period);
    let standings = services::get_standings(db.pool(), club_id, period).await?;
    Ok(Json(standings))
}

#[utoipa::path(
    post,
    path = "/api/clubs/{club_id}/leaderboard/recompute",
    params(
        ("club_id" = Uuid, Path, description = "Club id"),
        LeaderboardQuery
    ),
    responses(
        (status = 200, description = "Leaderboard rebuilt from approved submissions", body = Vec<LeaderboardEntry>)
    ),
    security(("bearer_auth" = [])),
    tag = "leaderboard"
)]
pub async fn recompute_leaderboard(
    State(db): State<Database>,
    Path(club_id): Path<Uuid>,
    Query(query): Query<LeaderboardQuery>,
) -> Result<Json<Vec<LeaderboardEntry>>, WebError> {
    let period = query.period.unwrap_or_else(services::default_period);
    let entries = services::recompute(db.pool(), club_id, period).await?;
    Ok(Json(entries))
}
