use crate::auth::guards::require_basic_auth;
use axum::{Router, middleware::from_fn_with_state, routing::post};
use post::create_review;
use util::state::AppState;

pub mod common;
pub mod post;

/// Builds the `/courses/{course_id}/reviews` route group.
///
/// - `POST /` → `create_review` (Basic auth)
pub fn reviews_routes(app_state: AppState) -> Router<AppState> {
    Router::new().route(
        "/",
        post(create_review).route_layer(from_fn_with_state(app_state, require_basic_auth)),
    )
}
