use crate::error::AppError;
use crate::routes::courses::common::{CourseDetailResponse, CourseSummaryResponse};
use axum::{
    Json,
    extract::{Path, State},
};
use services::course::{CourseService, course_not_found};
use util::state::AppState;

/// GET /api/courses
///
/// Lists every course as `_id` and `title`, oldest first.
///
/// ### Response: 200 OK
/// ```json
/// [{ "_id": 1, "title": "Build a Basic Bookcase" }]
/// ```
pub async fn list_courses(
    State(app_state): State<AppState>,
) -> Result<Json<Vec<CourseSummaryResponse>>, AppError> {
    let courses = CourseService::list(app_state.db()).await?;
    Ok(Json(courses.into_iter().map(Into::into).collect()))
}

/// GET /api/courses/{course_id}
///
/// Returns a course with its steps, its full reviews and its owner reduced
/// to `_id` and `fullName`.
///
/// ### Errors
/// - 404 No Course found with id: `<course_id>` (also for ids that are not integers)
pub async fn get_course(
    State(app_state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Json<CourseDetailResponse>, AppError> {
    let course_id: i64 = raw_id.parse().map_err(|_| course_not_found(&raw_id))?;

    let detail = CourseService::find_detail(app_state.db(), course_id)
        .await?
        .ok_or_else(|| course_not_found(&raw_id))?;

    Ok(Json(detail.into()))
}
