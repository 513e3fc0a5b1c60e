use crate::error::AppError;
use crate::routes::users::common::CreateUserRequest;
use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use services::user::UserService;
use util::state::AppState;

/// POST /api/users
///
/// Registers a user. The password is hashed before it reaches the store.
///
/// ### Request Body
/// ```json
/// {
///   "fullName": "Jane Smith",
///   "emailAddress": "jane@smith.com",
///   "password": "password",
///   "confirmPassword": "password"
/// }
/// ```
///
/// ### Response: 201 Created (empty body)
///
/// ### Errors
/// - 400 Passwords must match
/// - 400 validation failure (blank name, malformed email, blank password)
/// - 400 duplicate email address
pub async fn create_user(
    State(app_state): State<AppState>,
    payload: Result<Json<CreateUserRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(req) = payload?;

    if req.password != req.confirm_password {
        return Err(AppError::BadRequest("Passwords must match".into()));
    }

    UserService::create(app_state.db(), req.into()).await?;
    Ok(StatusCode::CREATED)
}
