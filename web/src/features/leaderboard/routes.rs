use axum::{
    Router, middleware,
    routing::{get, post},
};
use storage::Database;

use super::handlers::{get_standings, recompute_leaderboard};
use crate::middleware::auth::{ApiKeys, require_auth};

pub fn routes(api_keys: ApiKeys) -> Router<Database> {
    let protected = Router::new()
        .route("/recompute", post(recompute_leaderboard))
        .route_layer(middleware::from_fn_with_state(api_keys, require_auth));

    Router::new().route("/", get(get_standings)).merge(protected)
}
