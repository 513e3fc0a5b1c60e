use crate::auth::AuthUser;
use crate::error::AppError;
use crate::routes::courses::reviews::common::CreateReviewRequest;
use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::{StatusCode, header::LOCATION},
    response::IntoResponse,
};
use services::review::ReviewService;
use util::state::AppState;

/// POST /api/courses/{course_id}/reviews
///
/// Posts a review by the caller on someone else's course.
///
/// ### Request Body
/// ```json
/// { "rating": 5, "review": "Great course!" }
/// ```
///
/// ### Response: 201 Created, `Location: /`, empty body
///
/// ### Errors
/// - 400 rating missing or outside 1..=5
/// - 401 Authentication Failed
/// - 403 Forbidden (caller owns the course)
/// - 404 Course not found
/// - 500 Unable to create review
pub async fn create_review(
    State(app_state): State<AppState>,
    AuthUser(user): AuthUser,
    Path(raw_id): Path<String>,
    payload: Result<Json<CreateReviewRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let course_id: i64 = raw_id
        .parse()
        .map_err(|_| AppError::NotFound("Course not found".into()))?;
    let Json(req) = payload?;

    ReviewService::create(app_state.db(), course_id, user.id, req.into()).await?;
    Ok((StatusCode::CREATED, [(LOCATION, "/")]))
}
