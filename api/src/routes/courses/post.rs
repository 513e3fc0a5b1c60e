use crate::auth::AuthUser;
use crate::error::AppError;
use crate::routes::courses::common::CreateCourseRequest;
use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header::LOCATION},
    response::IntoResponse,
};
use services::course::CourseService;
use util::state::AppState;

/// POST /api/courses
///
/// Creates a course owned by the caller.
///
/// ### Request Body
/// ```json
/// {
///   "title": "Build a Basic Bookcase",
///   "description": "High-end furniture projects are great to dream about.",
///   "estimatedTime": "12 hours",
///   "materialsNeeded": "* 1/2\" plywood",
///   "steps": [{ "stepNumber": 1, "title": "Measure Twice, Cut Once", "description": "..." }]
/// }
/// ```
///
/// ### Response: 201 Created, `Location: /`, empty body
///
/// ### Errors
/// - 400 validation failure or malformed body
/// - 401 Authentication Failed
pub async fn create_course(
    State(app_state): State<AppState>,
    AuthUser(user): AuthUser,
    payload: Result<Json<CreateCourseRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(req) = payload?;

    CourseService::create(app_state.db(), user.id, req.into()).await?;
    Ok((StatusCode::CREATED, [(LOCATION, "/")]))
}
