use crate::auth::AuthUser;
use crate::error::AppError;
use crate::routes::courses::common::UpdateCourseRequest;
use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};
use services::course::{CourseService, course_not_found};
use util::state::AppState;

/// PUT /api/courses/{course_id}
///
/// Partially updates a course the caller owns. Supplying `steps` replaces the
/// whole step list.
///
/// ### Response: 204 No Content
///
/// ### Errors
/// - 400 validation failure or malformed body
/// - 401 Authentication Failed
/// - 403 Forbidden (caller is not the owner)
/// - 404 No Course found with id: `<course_id>`
pub async fn update_course(
    State(app_state): State<AppState>,
    AuthUser(user): AuthUser,
    Path(raw_id): Path<String>,
    payload: Result<Json<UpdateCourseRequest>, JsonRejection>,
) -> Result<StatusCode, AppError> {
    let course_id: i64 = raw_id.parse().map_err(|_| course_not_found(&raw_id))?;
    let Json(req) = payload?;

    CourseService::update(app_state.db(), course_id, user.id, req.into()).await?;
    Ok(StatusCode::NO_CONTENT)
}
