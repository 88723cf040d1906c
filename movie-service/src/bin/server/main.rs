use std::sync::Arc;

use auth::Authenticator;
use auth::PasswordHasher;
use movie_service::config::Config;
use movie_service::domain::genre::service::GenreService;
use movie_service::domain::movie::service::MovieService;
use movie_service::domain::user::service::AuthService;
use movie_service::domain::vote::service::VoteService;
use movie_service::inbound::http::router::cors_layer;
use movie_service::inbound::http::router::create_router;
use movie_service::inbound::http::router::AppState;
use movie_service::outbound::repositories::PostgresGenreRepository;
use movie_service::outbound::repositories::PostgresMovieRepository;
use movie_service::outbound::repositories::PostgresUserRepository;
use movie_service::outbound::repositories::PostgresVoteRepository;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tokio::signal;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "movie_service=debug,auth=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "movie-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;

    tracing::info!(
        http_port = config.server.http_port,
        max_connections = config.database.max_connections,
        bcrypt_cost = config.password.bcrypt_cost,
        allow_legacy_plaintext = config.password.allow_legacy_plaintext,
        cors_origins = ?config.cors.allowed_origins,
        "Configuration loaded"
    );

    // Fail fast on a weak signing secret or an out-of-range bcrypt cost
    let password_hasher = PasswordHasher::with_cost(config.password.bcrypt_cost)?;
    let authenticator = Arc::new(
        Authenticator::new(config.jwt.secret.as_bytes(), password_hasher)?
            .with_legacy_plaintext(config.password.allow_legacy_plaintext),
    );

    let pg_pool = PgPoolOptions::new()
        .max_connections(config.database.max_connections)
        .connect(&config.database.url)
        .await?;
    tracing::info!(
        max_connections = config.database.max_connections,
        database = "postgresql",
        "Database connection pool created"
    );

    sqlx::migrate!("./migrations").run(&pg_pool).await?;
    tracing::info!(database = "postgresql", "Database migrations completed");

    log_database_identity(&pg_pool).await?;

    let user_repository = Arc::new(PostgresUserRepository::new(pg_pool.clone()));
    let movie_repository = Arc::new(PostgresMovieRepository::new(pg_pool.clone()));
    let genre_repository = Arc::new(PostgresGenreRepository::new(pg_pool.clone()));
    let vote_repository = Arc::new(PostgresVoteRepository::new(pg_pool));

    let state = AppState {
        auth_service: Arc::new(AuthService::new(
            Arc::clone(&user_repository),
            Arc::clone(&authenticator),
        )),
        movie_service: Arc::new(MovieService::new(
            Arc::clone(&movie_repository),
            Arc::clone(&genre_repository),
        )),
        genre_service: Arc::new(GenreService::new(genre_repository)),
        vote_service: Arc::new(VoteService::new(
            vote_repository,
            movie_repository,
            user_repository,
        )),
        authenticator,
    };

    let http_application = create_router(state, cors_layer(&config.cors.allowed_origins)?);

    let http_address = format!("0.0.0.0:{}", config.server.http_port);
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = config.server.http_port,
        protocol = "http",
        "Http server listening"
    );

    axum::serve(http_listener, http_application)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server exited successfully");

    Ok(())
}

async fn log_database_identity(pool: &PgPool) -> Result<(), sqlx::Error> {
    let (database, user): (String, String) =
        sqlx::query_as("SELECT current_database()::TEXT, current_user::TEXT")
            .fetch_one(pool)
            .await?;

    tracing::info!(database = %database, user = %user, "Database connectivity verified");

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
