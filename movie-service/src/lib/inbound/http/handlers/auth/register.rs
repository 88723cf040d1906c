use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use crate::domain::user::models::RegisterUserCommand;
use crate::domain::user::models::User;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::AuthApiError;
use crate::inbound::http::router::AppState;
use crate::user::errors::UserError;

pub async fn register(
    State(state): State<AppState>,
    body: Result<Json<RegisterRequestBody>, JsonRejection>,
) -> Result<ApiSuccess<RegisterResponseData>, AuthApiError> {
    let Json(body) = body?;
    let command = body.try_into_command()?;

    state
        .auth_service
        .register(command)
        .await
        .map_err(|e| {
            if let UserError::EmailAlreadyExists(_) = e {
                tracing::debug!("Registration rejected: email already registered");
            }
            AuthApiError::from(e)
        })
        .map(|ref user| ApiSuccess::new(StatusCode::OK, user.into()))
}

/// HTTP request body for registration. Every field is optional at the
/// wire level so a missing field is reported like a blank one.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RegisterRequestBody {
    name: Option<String>,
    last_name: Option<String>,
    email: Option<String>,
    password: Option<String>,
}

impl RegisterRequestBody {
    fn try_into_command(self) -> Result<RegisterUserCommand, UserError> {
        Ok(RegisterUserCommand::new(
            self.name,
            self.last_name,
            self.email,
            self.password,
        )?)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegisterResponseData {
    pub id: i64,
    pub name: String,
    pub last_name: String,
    pub email: String,
    pub role: String,
}

impl From<&User> for RegisterResponseData {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.0,
            name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            email: user.email.clone(),
            role: user.role.to_string(),
        }
    }
}
