use std::sync::Arc;
use std::time::Duration;

use auth::Authenticator;
use axum::body::Body;
use axum::http::header::InvalidHeaderValue;
use axum::http::header::LOCATION;
use axum::http::HeaderValue;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::get;
use axum::routing::post;
use axum::Router;
use tower_http::cors::AllowHeaders;
use tower_http::cors::AllowMethods;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::auth::login::login;
use super::handlers::auth::register::register;
use super::handlers::genres::create_genre::create_genre;
use super::handlers::genres::delete_genre::delete_genre;
use super::handlers::genres::get_genre::get_genre;
use super::handlers::genres::get_genre_by_name::get_genre_by_name;
use super::handlers::genres::list_genres::list_genres;
use super::handlers::genres::update_genre::update_genre;
use super::handlers::movies::create_movie::create_movie;
use super::handlers::movies::delete_movie::delete_movie;
use super::handlers::movies::get_movie::get_movie;
use super::handlers::movies::get_movie_by_name::get_movie_by_name;
use super::handlers::movies::list_movies::list_movies;
use super::handlers::movies::update_movie::update_movie;
use super::handlers::not_found;
use super::handlers::votes::cast_vote::cast_vote;
use super::handlers::votes::list_votes::list_votes;
use super::middleware::authenticate as auth_middleware;
use crate::domain::genre::ports::GenreServicePort;
use crate::domain::movie::ports::MovieServicePort;
use crate::domain::user::ports::AuthServicePort;
use crate::domain::vote::ports::VoteServicePort;

#[derive(Clone)]
pub struct AppState {
    pub auth_service: Arc<dyn AuthServicePort>,
    pub movie_service: Arc<dyn MovieServicePort>,
    pub genre_service: Arc<dyn GenreServicePort>,
    pub vote_service: Arc<dyn VoteServicePort>,
    pub authenticator: Arc<Authenticator>,
}

/// Build the CORS policy for the given origins.
///
/// Credentials are allowed, so methods and headers mirror the preflight
/// request instead of using a wildcard.
///
/// # Errors
/// Returns an error when an origin is not a valid header value.
pub fn cors_layer(allowed_origins: &[String]) -> Result<CorsLayer, InvalidHeaderValue> {
    let origins = allowed_origins
        .iter()
        .map(|origin| HeaderValue::from_str(origin))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .expose_headers([LOCATION])
        .allow_credentials(true))
}

pub fn create_router(state: AppState, cors: CorsLayer) -> Router {
    let auth_routes = Router::new()
        .route("/login", post(login))
        .route("/register", post(register));

    let movie_routes = Router::new()
        .route("/", get(list_movies).post(create_movie))
        .route("/by-name/:name", get(get_movie_by_name))
        .route(
            "/:id",
            get(get_movie).put(update_movie).delete(delete_movie),
        )
        .route("/:id/votes", get(list_votes).post(cast_vote));

    let genre_routes = Router::new()
        .route("/", get(list_genres).post(create_genre))
        .route("/by-name/:name", get(get_genre_by_name))
        .route(
            "/:id",
            get(get_genre).put(update_genre).delete(delete_genre),
        );

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    Router::new()
        .nest("/api/auth", auth_routes)
        .nest("/api/v1/movies", movie_routes)
        .nest("/api/v1/genres", genre_routes)
        .fallback(not_found)
        .layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ))
        .layer(trace_layer)
        .layer(cors)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use auth::PasswordHasher;
    use axum::http::StatusCode;
    use http_body_util::BodyExt;
    use mockall::mock;
    use tower::ServiceExt;

    use super::*;
    use crate::domain::genre::models::CreateGenreCommand;
    use crate::domain::genre::models::Genre;
    use crate::domain::genre::models::GenreId;
    use crate::domain::genre::models::GenreName;
    use crate::domain::genre::models::UpdateGenreCommand;
    use crate::domain::movie::models::CreateMovieCommand;
    use crate::domain::movie::models::Movie;
    use crate::domain::movie::models::MovieId;
    use crate::domain::movie::models::MovieName;
    use crate::domain::movie::models::UpdateMovieCommand;
    use crate::domain::user::models::AuthToken;
    use crate::domain::user::models::Credentials;
    use crate::domain::user::models::RegisterUserCommand;
    use crate::domain::user::models::User;
    use crate::domain::vote::models::CastVoteOutcome;
    use crate::domain::vote::models::Vote;
    use crate::domain::vote::models::VoteValue;
    use crate::genre::errors::GenreError;
    use crate::movie::errors::MovieError;
    use crate::user::errors::UserError;
    use crate::vote::errors::VoteError;

    const SECRET: &[u8] = b"test-secret-key-for-jwt-signing-at-least-32-bytes";

    mock! {
        pub TestAuthService {}

        #[async_trait]
        impl AuthServicePort for TestAuthService {
            async fn register(&self, command: RegisterUserCommand) -> Result<User, UserError>;
            async fn login(&self, credentials: &Credentials) -> Result<AuthToken, UserError>;
        }
    }

    mock! {
        pub TestMovieService {}

        #[async_trait]
        impl MovieServicePort for TestMovieService {
            async fn list_movies(&self) -> Result<Vec<Movie>, MovieError>;
            async fn get_movie(&self, id: MovieId) -> Result<Movie, MovieError>;
            async fn get_movie_by_name(&self, name: &MovieName) -> Result<Movie, MovieError>;
            async fn create_movie(&self, command: CreateMovieCommand) -> Result<Movie, MovieError>;
            async fn update_movie(&self, command: UpdateMovieCommand) -> Result<Movie, MovieError>;
            async fn delete_movie(&self, id: MovieId) -> Result<(), MovieError>;
        }
    }

    mock! {
        pub TestGenreService {}

        #[async_trait]
        impl GenreServicePort for TestGenreService {
            async fn list_genres(&self) -> Result<Vec<Genre>, GenreError>;
            async fn get_genre(&self, id: GenreId) -> Result<Genre, GenreError>;
            async fn get_genre_by_name(&self, name: &GenreName) -> Result<Genre, GenreError>;
            async fn create_genre(&self, command: CreateGenreCommand) -> Result<Genre, GenreError>;
            async fn update_genre(&self, command: UpdateGenreCommand) -> Result<Genre, GenreError>;
            async fn delete_genre(&self, id: GenreId) -> Result<(), GenreError>;
        }
    }

    mock! {
        pub TestVoteService {}

        #[async_trait]
        impl VoteServicePort for TestVoteService {
            async fn cast_vote(&self, voter_email: &str, movie_id: MovieId, value: VoteValue) -> Result<CastVoteOutcome, VoteError>;
            async fn list_votes(&self, movie_id: MovieId) -> Result<Vec<Vote>, VoteError>;
        }
    }

    fn router(auth_service: MockTestAuthService, genre_service: MockTestGenreService) -> Router {
        let hasher = PasswordHasher::with_cost(PasswordHasher::MIN_COST).unwrap();
        let state = AppState {
            auth_service: Arc::new(auth_service),
            movie_service: Arc::new(MockTestMovieService::new()),
            genre_service: Arc::new(genre_service),
            vote_service: Arc::new(MockTestVoteService::new()),
            authenticator: Arc::new(Authenticator::new(SECRET, hasher).unwrap()),
        };
        let cors = cors_layer(&["http://localhost:5173".to_string()]).unwrap();

        create_router(state, cors)
    }

    async fn json_body(response: axum::response::Response) -> serde_json::Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_login_route_is_public() {
        let mut auth_service = MockTestAuthService::new();
        auth_service
            .expect_login()
            .times(1)
            .returning(|_| Err(UserError::InvalidCredentials));

        let request = Request::builder()
            .method("POST")
            .uri("/api/auth/login")
            .header("content-type", "application/json")
            .body(Body::from(
                r#"{"correo":"ana@test.com","contrasenia":"wrong"}"#,
            ))
            .unwrap();

        let response = router(auth_service, MockTestGenreService::new())
            .oneshot(request)
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            json_body(response).await,
            serde_json::json!({ "error": "invalid credentials" })
        );
    }

    #[tokio::test]
    async fn test_protected_route_without_token() {
        let mut genre_service = MockTestGenreService::new();
        genre_service.expect_list_genres().times(0);

        let request = Request::builder()
            .uri("/api/v1/genres")
            .body(Body::empty())
            .unwrap();

        let response = router(MockTestAuthService::new(), genre_service)
            .oneshot(request)
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert!(json_body(response).await["error"].is_string());
    }

    #[tokio::test]
    async fn test_protected_route_with_token() {
        let mut genre_service = MockTestGenreService::new();
        genre_service.expect_list_genres().times(1).returning(|| {
            Ok(vec![Genre {
                id: GenreId(1),
                name: GenreName::new("Drama".to_string()).unwrap(),
            }])
        });

        let token = auth::JwtHandler::new(SECRET)
            .unwrap()
            .encode(&auth::Claims::for_user("ana@test.com", "Ana", "Lopez", "USER"))
            .unwrap();

        let request = Request::builder()
            .uri("/api/v1/genres")
            .header("authorization", format!("Bearer {}", token))
            .body(Body::empty())
            .unwrap();

        let response = router(MockTestAuthService::new(), genre_service)
            .oneshot(request)
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            json_body(response).await,
            serde_json::json!([{ "id": 1, "name": "Drama" }])
        );
    }
}
