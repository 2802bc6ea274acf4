use std::sync::Arc;

use auth::TokenIssuer;
use axum::http::HeaderValue;
use chrono::Duration;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use session_service::config::Config;
use session_service::domain::user::service::AccountService;
use session_service::inbound::http::router::create_router;
use session_service::outbound::repositories::PostgresUserRepository;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    let config = Config::load()?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.environment.default_log_filter().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "session-service",
        version = env!("CARGO_PKG_VERSION"),
        environment = ?config.environment,
        "Service starting"
    );

    tracing::info!(
        http_port = config.server.http_port,
        access_ttl_seconds = config.jwt.access_ttl_seconds,
        refresh_ttl_days = config.jwt.refresh_ttl_days,
        cors_origin = %config.http.cors_origin,
        "Configuration loaded"
    );

    let pg_pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&config.database.url)
        .await?;
    tracing::info!(
        max_connections = 5,
        database = "postgresql",
        "Database connection pool created"
    );

    sqlx::migrate!("./migrations").run(&pg_pool).await?;
    tracing::info!(database = "postgresql", "Database migrations completed");

    let token_issuer = Arc::new(TokenIssuer::new(
        config.jwt.secret.as_bytes(),
        Duration::seconds(config.jwt.access_ttl_seconds),
        Duration::days(config.jwt.refresh_ttl_days),
    ));
    let user_repository = Arc::new(PostgresUserRepository::new(pg_pool));
    let account_service = Arc::new(AccountService::new(user_repository));

    let cors_origin: HeaderValue = config.http.cors_origin.parse()?;

    let http_address = format!("0.0.0.0:{}", config.server.http_port);
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = config.server.http_port,
        protocol = "http",
        "Http server listening"
    );

    let application = create_router(
        account_service,
        token_issuer,
        config.environment.secure_cookies(),
        cors_origin,
    );

    axum::serve(http_listener, application).await?;

    Ok(())
}
