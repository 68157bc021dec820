//! HTTP Basic authentication middleware.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use axum_extra::headers::{authorization::Basic, Authorization, HeaderMapExt};

use crate::api::AppState;
use crate::errors::AppError;
use crate::services::UserDetails;

/// Authenticated user taken from the Basic credentials
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CurrentUser {
    pub id: i64,
    pub usuario: String,
    pub nome: String,
}

impl From<UserDetails> for CurrentUser {
    fn from(details: UserDetails) -> Self {
        Self {
            id: details.id(),
            usuario: details.username().to_string(),
            nome: details.nome().to_string(),
        }
    }
}

/// Checks `Authorization: Basic ...` against stored credentials, then
/// injects the `CurrentUser` into the request extensions.
///
/// A missing or unparsable header is `Unauthorized`; an unknown user or a
/// wrong password is `InvalidCredentials`.
pub async fn basic_auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let Authorization(credentials) = request
        .headers()
        .typed_get::<Authorization<Basic>>()
        .ok_or_else(|| {
            tracing::warn!(path = %request.uri().path(), "Missing Basic credentials");
            AppError::Unauthorized
        })?;

    let details = state
        .user_details_service
        .authenticate(credentials.username(), credentials.password())
        .await
        .inspect_err(|e| {
            tracing::warn!(path = %request.uri().path(), "Basic auth rejected: {}", e);
        })?;

    tracing::debug!(usuario = details.username(), "Basic credentials accepted");
    request.extensions_mut().insert(CurrentUser::from(details));

    Ok(next.run(request).await)
}
