use axum::{
    Router, middleware,
    routing::{delete, get, post, put},
};
use storage::Database;

use super::handlers::{
    backfill_genus_overrides, create_genus_override, create_species_override,
    delete_genus_override, delete_species_override, list_genus_overrides, list_species_overrides,
    recount_genus_override, update_genus_points, update_species_points,
};
use crate::middleware::auth::{ApiKeys, require_auth};

pub fn routes(api_keys: ApiKeys) -> Router<Database> {
    let protected = Router::new()
        .route("/genus", post(create_genus_override))
        .route("/genus/backfill", post(backfill_genus_overrides))
        .route("/genus/:override_id", put(update_genus_points))
        .route("/genus/:override_id", delete(delete_genus_override))
        .route("/genus/:override_id/recount", post(recount_genus_override))
        .route("/species", post(create_species_override))
        .route("/species/:override_id", put(update_species_points))
        .route("/species/:override_id", delete(delete_species_override))
        .route_layer(middleware::from_fn_with_state(api_keys, require_auth));

    Router::new()
        .route("/genus", get(list_genus_overrides))
        .route("/species", get(list_species_overrides))
        .merge(protected)
}
