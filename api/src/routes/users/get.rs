use crate::auth::AuthUser;
use crate::routes::users::common::UserResponse;
use axum::Json;

/// GET /api/users
///
/// Returns the user whose Basic credentials accompanied the request.
///
/// ### Response: 200 OK
/// ```json
/// { "_id": 1, "fullName": "Joe Smith", "emailAddress": "joe@smith.com" }
/// ```
///
/// ### Errors
/// - 401 Authentication Failed
pub async fn get_current_user(AuthUser(user): AuthUser) -> Json<UserResponse> {
    Json(user.into())
}
