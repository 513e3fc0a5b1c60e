//! HTTP route entry point.
//!
//! Route groups under `/api`:
//! - `/health` → liveness probe (public)
//! - `/users` → current user (Basic auth) and registration (public)
//! - `/courses` → course listing and detail (public), create/update (Basic auth)
//! - `/courses/{course_id}/reviews` → post a review (Basic auth)

use crate::auth::middleware::log_request;
use crate::error::AppError;
use crate::routes::{courses::courses_routes, health::health_routes, users::users_routes};
use axum::{Json, Router, middleware::from_fn, response::IntoResponse, routing::get};
use serde_json::json;
use tower_http::cors::CorsLayer;
use util::state::AppState;

pub mod courses;
pub mod health;
pub mod users;

/// Builds the `/api` router. Each group applies the Basic-auth gate to its own
/// protected methods, so public and protected handlers can share a path.
pub fn routes(app_state: AppState) -> Router {
    Router::new()
        .nest("/health", health_routes())
        .nest("/users", users_routes(app_state.clone()))
        .nest("/courses", courses_routes(app_state.clone()))
        .with_state(app_state)
}

/// The whole application: welcome route, `/api`, the not-found fallback,
/// request logging and CORS.
pub fn app(app_state: AppState) -> Router {
    Router::new()
        .route("/", get(welcome))
        .nest("/api", routes(app_state))
        .fallback(route_not_found)
        .layer(from_fn(log_request))
        .layer(CorsLayer::very_permissive())
}

async fn welcome() -> impl IntoResponse {
    Json(json!({ "message": "Welcome to the Course Review API" }))
}

async fn route_not_found() -> AppError {
    AppError::NotFound("Route Not Found".into())
}
