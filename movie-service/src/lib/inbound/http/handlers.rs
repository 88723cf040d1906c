use axum::extract::rejection::JsonRejection;
use axum::extract::rejection::PathRejection;
use axum::http::header::LOCATION;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde::Serialize;

use crate::genre::errors::GenreError;
use crate::movie::errors::MovieError;
use crate::user::errors::UserError;
use crate::vote::errors::VoteError;

pub mod auth;
pub mod genres;
pub mod movies;
pub mod votes;

/// Successful response: status, optional `Location` header and a JSON body.
#[derive(Debug, Clone)]
pub struct ApiSuccess<T: Serialize + PartialEq> {
    status: StatusCode,
    location: Option<String>,
    body: Json<T>,
}

impl<T> PartialEq for ApiSuccess<T>
where
    T: Serialize + PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.status == other.status
            && self.location == other.location
            && self.body.0 == other.body.0
    }
}

impl<T: Serialize + PartialEq> ApiSuccess<T> {
    pub fn new(status: StatusCode, data: T) -> Self {
        Self {
            status,
            location: None,
            body: Json(data),
        }
    }

    /// 201 response pointing at the created resource.
    pub fn created(location: String, data: T) -> Self {
        Self {
            status: StatusCode::CREATED,
            location: Some(location),
            body: Json(data),
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }

    pub fn data(&self) -> &T {
        &self.body.0
    }
}

impl<T: Serialize + PartialEq> IntoResponse for ApiSuccess<T> {
    fn into_response(self) -> Response {
        match self.location {
            Some(location) => (self.status, [(LOCATION, location)], self.body).into_response(),
            None => (self.status, self.body).into_response(),
        }
    }
}

/// Error returned by the catalogue routes, rendered as `{status, message}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    InternalServerError(String),
    UnprocessableEntity(String),
    NotFound(String),
    /// Duplicate id or name; answered with 302 Found
    Found(String),
    Unauthorized(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::InternalServerError(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
            ApiError::UnprocessableEntity(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::Found(msg) => (StatusCode::FOUND, msg),
            ApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
        };

        (status, Json(ApiErrorBody::new(status, message))).into_response()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::UnprocessableEntity(rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::UnprocessableEntity(rejection.body_text())
    }
}

impl From<MovieError> for ApiError {
    fn from(err: MovieError) -> Self {
        match err {
            MovieError::NotFound(_) | MovieError::NotFoundByName(_) => {
                ApiError::NotFound(err.to_string())
            }
            MovieError::AlreadyExists(_) | MovieError::NameAlreadyExists(_) => {
                ApiError::Found(err.to_string())
            }
            MovieError::InvalidName(_)
            | MovieError::InvalidDuration(_)
            | MovieError::UnknownGenres(_) => ApiError::UnprocessableEntity(err.to_string()),
            MovieError::DatabaseError(_) => ApiError::InternalServerError(err.to_string()),
        }
    }
}

impl From<GenreError> for ApiError {
    fn from(err: GenreError) -> Self {
        match err {
            GenreError::NotFound(_) | GenreError::NotFoundByName(_) => {
                ApiError::NotFound(err.to_string())
            }
            GenreError::AlreadyExists(_) | GenreError::NameAlreadyExists(_) => {
                ApiError::Found(err.to_string())
            }
            GenreError::InvalidName(_) => ApiError::UnprocessableEntity(err.to_string()),
            GenreError::DatabaseError(_) => ApiError::InternalServerError(err.to_string()),
        }
    }
}

impl From<VoteError> for ApiError {
    fn from(err: VoteError) -> Self {
        match err {
            VoteError::InvalidValue(_) => ApiError::UnprocessableEntity(err.to_string()),
            VoteError::MovieNotFound(_) => ApiError::NotFound(err.to_string()),
            VoteError::VoterNotFound(_) => ApiError::Unauthorized(err.to_string()),
            VoteError::DatabaseError(_) => ApiError::InternalServerError(err.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiErrorBody {
    pub status: u16,
    pub message: String,
}

impl ApiErrorBody {
    pub fn new(status: StatusCode, message: String) -> Self {
        Self {
            status: status.as_u16(),
            message,
        }
    }
}

/// Error returned by the authentication routes and the bearer-token
/// middleware, rendered as `{error}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthApiError {
    BadRequest(String),
    Unauthorized(String),
    InternalServerError(String),
}

impl IntoResponse for AuthApiError {
    fn into_response(self) -> Response {
        let (status, error) = match self {
            AuthApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AuthApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
            AuthApiError::InternalServerError(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        (status, Json(AuthErrorBody { error })).into_response()
    }
}

impl From<JsonRejection> for AuthApiError {
    fn from(rejection: JsonRejection) -> Self {
        AuthApiError::BadRequest(rejection.body_text())
    }
}

impl From<UserError> for AuthApiError {
    fn from(err: UserError) -> Self {
        match err {
            UserError::InvalidCredentialsInput(_)
            | UserError::InvalidRegistration(_)
            | UserError::EmailAlreadyExists(_) => AuthApiError::BadRequest(err.to_string()),
            UserError::InvalidCredentials => AuthApiError::Unauthorized(err.to_string()),
            UserError::Password(_) | UserError::Token(_) | UserError::DatabaseError(_) => {
                AuthApiError::InternalServerError(err.to_string())
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthErrorBody {
    pub error: String,
}

/// Fallback for unmatched paths. Only reached with a valid token.
pub async fn not_found() -> ApiError {
    ApiError::NotFound("Resource not found".to_string())
}
