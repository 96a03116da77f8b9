//! Basic authentication middleware.

use axum::{
    body::Body,
    extract::State,
    http::{HeaderMap, Request},
    middleware::Next,
    response::Response,
};
use axum_extra::headers::{authorization::Basic, Authorization, HeaderMapExt};

use auth_service_lib::Principal;
use common::{AppError, AppResult};

use crate::state::AppState;

/// Current authenticated user extracted from the Basic credentials.
#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub username: String,
}

impl From<Principal> for CurrentUser {
    fn from(principal: Principal) -> Self {
        Self {
            username: principal.username,
        }
    }
}

/// Authentication middleware for routes open to every known user.
pub async fn basic_auth_middleware(
    State(state): State<AppState>,
    mut request: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    let credentials = extract_credentials(request.headers())?;

    let principal = state
        .auth_service
        .authenticate(credentials.username(), credentials.password())
        .await?;

    request.extensions_mut().insert(CurrentUser::from(principal));

    Ok(next.run(request).await)
}

/// Authentication middleware for administrator-only routes.
///
/// Bad credentials yield 401; a valid non-admin user yields 403.
pub async fn admin_middleware(
    State(state): State<AppState>,
    mut request: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    let credentials = extract_credentials(request.headers())?;

    let principal = state
        .auth_service
        .authorize_admin(credentials.username(), credentials.password())
        .await?;

    tracing::debug!(username = %principal.username, "Admin request authorized");
    request.extensions_mut().insert(CurrentUser::from(principal));

    Ok(next.run(request).await)
}

/// Decode `Authorization: Basic ...`.
fn extract_credentials(headers: &HeaderMap) -> AppResult<Authorization<Basic>> {
    headers
        .typed_get::<Authorization<Basic>>()
        .ok_or(AppError::Unauthorized)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{header::AUTHORIZATION, HeaderValue};

    #[test]
    fn test_extract_credentials() {
        let mut headers = HeaderMap::new();
        // admin:secret
        headers.insert(AUTHORIZATION, HeaderValue::from_static("Basic YWRtaW46c2VjcmV0"));

        let credentials = extract_credentials(&headers).unwrap();
        assert_eq!(credentials.username(), "admin");
        assert_eq!(credentials.password(), "secret");
    }

    #[test]
    fn test_missing_or_foreign_scheme_is_unauthorized() {
        let headers = HeaderMap::new();
        assert!(matches!(
            extract_credentials(&headers),
            Err(AppError::Unauthorized)
        ));

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_static("Bearer token"));
        assert!(matches!(
            extract_credentials(&headers),
            Err(AppError::Unauthorized)
        ));
    }
}
