use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use crate::domain::user::models::Credentials;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::AuthApiError;
use crate::inbound::http::router::AppState;
use crate::user::errors::UserError;

pub async fn login(
    State(state): State<AppState>,
    body: Result<Json<LoginRequestBody>, JsonRejection>,
) -> Result<ApiSuccess<LoginResponseData>, AuthApiError> {
    let Json(body) = body?;
    let credentials =
        Credentials::new(body.correo, body.contrasenia).map_err(UserError::from)?;

    let token = state.auth_service.login(&credentials).await.map_err(|e| {
        if let UserError::InvalidCredentials = e {
            tracing::warn!("Login rejected: invalid credentials");
        }
        AuthApiError::from(e)
    })?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        LoginResponseData { token: token.token },
    ))
}

/// Login body. Field names are part of the public contract.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoginRequestBody {
    correo: Option<String>,
    contrasenia: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginResponseData {
    pub token: String,
}
