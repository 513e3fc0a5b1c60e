//! # Courses Routes Module
//!
//! - `get.rs` — course listing and detail
//! - `post.rs` — course creation
//! - `put.rs` — course update
//! - `reviews/` — reviews posted on a course

use crate::auth::guards::require_basic_auth;
use axum::{
    Router,
    middleware::from_fn_with_state,
    routing::{get, post, put},
};
use get::{get_course, list_courses};
use post::create_course;
use put::update_course;
use reviews::reviews_routes;
use util::state::AppState;

pub mod common;
pub mod get;
pub mod post;
pub mod put;
pub mod reviews;

/// Builds the `/courses` route group.
///
/// - `GET /courses` → `list_courses` (public)
/// - `POST /courses` → `create_course` (Basic auth)
/// - `GET /courses/{course_id}` → `get_course` (public)
/// - `PUT /courses/{course_id}` → `update_course` (Basic auth)
/// - `/courses/{course_id}/reviews` → see [`reviews`]
pub fn courses_routes(app_state: AppState) -> Router<AppState> {
    Router::new()
        .route("/", get(list_courses))
        .route(
            "/",
            post(create_course)
                .route_layer(from_fn_with_state(app_state.clone(), require_basic_auth)),
        )
        .route("/{course_id}", get(get_course))
        .route(
            "/{course_id}",
            put(update_course)
                .route_layer(from_fn_with_state(app_state.clone(), require_basic_auth)),
        )
        .nest("/{course_id}/reviews", reviews_routes(app_state))
}
