use axum::{
    Router, middleware,
    routing::{get, post, put},
};
use storage::Database;

use super::handlers::{
    approve_submission, close_submission, create_submission, decline_submission, get_submission,
    list_submissions, resubmit_submission, update_notes,
};
use crate::middleware::auth::{ApiKeys, require_auth};

pub fn routes(api_keys: ApiKeys) -> Router<Database> {
    let protected = Router::new()
        .route("/:submission_id/approve", post(approve_submission))
        .route("/:submission_id/decline", post(decline_submission))
        .route("/:submission_id/resubmit", post(resubmit_submission))
        .route("/:submission_id/close", post(close_submission))
        .route_layer(middleware::from_fn_with_state(api_keys, require_auth));

    Router::new()
        .route("/", post(create_submission))
        .route("/", get(list_submissions))
        .route("/:submission_id", get(get_submission))
        .route("/:submission_id/notes", put(update_notes))
        .merge(protected)
}
