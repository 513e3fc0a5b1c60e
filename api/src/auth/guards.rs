use crate::auth::AuthUser;
use crate::error::AppError;
use axum::{
    body::Body,
    extract::{FromRequestParts, State},
    http::Request,
    middleware::Next,
    response::Response,
};
use axum_extra::extract::TypedHeader;
use headers::{Authorization, authorization::Basic};
use services::user::UserService;
use util::state::AppState;

/// Authentication gate for protected routes.
///
/// Decodes `Authorization: Basic <base64(email:password)>`, resolves the user
/// through the credential store and inserts [`AuthUser`] into the request.
///
/// A missing header, a malformed header, an unknown email and a wrong password
/// all produce the same `401 Authentication Failed`. Store failures are 500s.
///
/// ```ignore
/// Router::new()
///     .route("/", get(handler).route_layer(from_fn_with_state(state, require_basic_auth)))
/// ```
pub async fn require_basic_auth(
    State(app_state): State<AppState>,
    req: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    let (mut parts, body) = req.into_parts();

    let TypedHeader(Authorization(basic)) =
        TypedHeader::<Authorization<Basic>>::from_request_parts(&mut parts, &app_state)
            .await
            .map_err(|_| {
                tracing::debug!(path = %parts.uri.path(), "Missing or malformed Basic credentials");
                AppError::Unauthorized
            })?;

    let user = UserService::authenticate(app_state.db(), basic.username(), basic.password()).await?;

    let auth_user = AuthUser(user);
    let mut req = Request::from_parts(parts, body);
    req.extensions_mut().insert(auth_user.clone());

    // Echoed on the response so the request logger can attribute it.
    let mut response = next.run(req).await;
    response.extensions_mut().insert(auth_user);
    Ok(response)
}
