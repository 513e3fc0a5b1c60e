pub mod guards;
pub mod middleware;

use crate::error::AppError;
use axum::{extract::FromRequestParts, http::request::Parts};
use services::user::User;

/// The user resolved from the request's Basic credentials.
///
/// Inserted into request extensions by [`guards::require_basic_auth`]; extracting
/// it on a route without the gate is a 401.
#[derive(Debug, Clone)]
pub struct AuthUser(pub User);

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthUser>()
            .cloned()
            .ok_or(AppError::Unauthorized)
    }
}
