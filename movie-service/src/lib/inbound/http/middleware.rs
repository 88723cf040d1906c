use axum::extract::Request;
use axum::extract::State;
use axum::http::header::AUTHORIZATION;
use axum::http::HeaderMap;
use axum::middleware::Next;
use axum::response::Response;

use crate::inbound::http::handlers::AuthApiError;
use crate::inbound::http::router::AppState;

const PUBLIC_PREFIX: &str = "/api/auth";
const BEARER_PREFIX: &str = "Bearer ";

/// Identity taken from a verified access token, stored in request extensions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub role: String,
}

impl From<auth::Claims> for AuthenticatedUser {
    fn from(claims: auth::Claims) -> Self {
        Self {
            email: claims.sub,
            first_name: claims.first_name,
            last_name: claims.last_name,
            role: claims.role,
        }
    }
}

/// Whether a request path needs a bearer token.
///
/// Only `/api/auth` and paths below it are public; unknown paths are
/// protected too.
pub fn requires_authentication(path: &str) -> bool {
    match path.strip_prefix(PUBLIC_PREFIX) {
        Some(rest) => !(rest.is_empty() || rest.starts_with('/')),
        None => true,
    }
}

/// Middleware that validates JWT tokens on protected paths and adds the
/// caller's identity to request extensions
pub async fn authenticate(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AuthApiError> {
    if !requires_authentication(req.uri().path()) {
        return Ok(next.run(req).await);
    }

    let token = extract_bearer_token(req.headers())?;

    let claims: auth::Claims = state.authenticator.validate_token(token).map_err(|e| {
        tracing::warn!(path = %req.uri().path(), error = %e, "JWT validation failed");
        AuthApiError::Unauthorized("invalid or expired token".to_string())
    })?;

    req.extensions_mut()
        .insert(AuthenticatedUser::from(claims));

    Ok(next.run(req).await)
}

fn extract_bearer_token(headers: &HeaderMap) -> Result<&str, AuthApiError> {
    let header = headers
        .get(AUTHORIZATION)
        .ok_or_else(|| AuthApiError::Unauthorized("missing Authorization header".to_string()))?;

    let value = header
        .to_str()
        .map_err(|_| AuthApiError::Unauthorized("invalid Authorization header".to_string()))?;

    value
        .strip_prefix(BEARER_PREFIX)
        .filter(|token| !token.trim().is_empty())
        .ok_or_else(|| {
            AuthApiError::Unauthorized(
                "invalid Authorization header format, expected: Bearer <token>".to_string(),
            )
        })
}
