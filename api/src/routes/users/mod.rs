//! # Users Routes Module
//!
//! - `get.rs` — the authenticated user's own record
//! - `post.rs` — registration

use crate::auth::guards::require_basic_auth;
use axum::{
    Router,
    middleware::from_fn_with_state,
    routing::{get, post},
};
use get::get_current_user;
use post::create_user;
use util::state::AppState;

pub mod common;
pub mod get;
pub mod post;

/// Builds the `/users` route group.
///
/// - `GET /users` → `get_current_user` (Basic auth)
/// - `POST /users` → `create_user` (public)
pub fn users_routes(app_state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(get_current_user).route_layer(from_fn_with_state(app_state, require_basic_auth)),
        )
        .route("/", post(create_user))
}
