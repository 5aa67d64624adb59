//! GymPoint Ledger server
//!
//! ## REST Endpoints
//!
//! - `POST /api/inscriptions` - Enroll a member in a plan
//! - `GET /api/inscriptions` - List ongoing and future subscriptions
//! - `GET /api/inscriptions/:id` - Show one subscription
//! - `PUT /api/inscriptions/:id` - Change plan or start date
//! - `DELETE /api/inscriptions/:id` - Cancel a subscription
//! - `POST /api/members/:id/checkins` - Record a check-in
//! - `GET /api/members/:id/checkins` - Check-in history

use std::sync::Arc;

use axum::http::HeaderValue;
use axum::Router;
use tokio::signal;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use gympoint_ledger::adapters::http::{api_router, AppDependencies, AppState};
use gympoint_ledger::adapters::notifications::LoggingNotificationSink;
use gympoint_ledger::adapters::postgres::{
    create_lock_pool, create_pool, run_migrations, PostgresAdvisoryLock,
    PostgresCheckInRepository, PostgresMemberDirectory, PostgresPlanCatalog,
    PostgresSubscriptionRepository,
};
use gympoint_ledger::adapters::SystemClock;
use gympoint_ledger::config::{AppConfig, ServerConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::load()?;
    config.validate()?;

    init_tracing(&config.server)?;
    tracing::info!(
        environment = ?config.server.environment,
        port = config.server.port,
        "Starting GymPoint Ledger"
    );

    // Database
    let pool = create_pool(&config.database).await?;
    let lock_pool = create_lock_pool(&config.database).await?;
    if config.database.run_migrations {
        run_migrations(&pool).await?;
        tracing::info!("Migrations applied");
    }

    // Handlers
    let state = AppState::new(AppDependencies {
        subscription_repository: Arc::new(PostgresSubscriptionRepository::new(pool.clone())),
        check_in_repository: Arc::new(PostgresCheckInRepository::new(pool.clone())),
        plan_catalog: Arc::new(PostgresPlanCatalog::new(pool.clone())),
        member_directory: Arc::new(PostgresMemberDirectory::new(pool.clone())),
        member_lock: Arc::new(PostgresAdvisoryLock::new(lock_pool.clone())),
        notifications: Arc::new(LoggingNotificationSink::new()),
        clock: Arc::new(SystemClock),
        quota_policy: config.attendance.quota_policy()?,
        subscriptions_per_page: config.attendance.subscriptions_per_page,
        check_ins_per_page: config.attendance.check_ins_per_page,
    });

    let app = build_router(state, &config.server);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("HTTP server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    lock_pool.close().await;
    pool.close().await;
    tracing::info!("Shutdown complete");
    Ok(())
}

fn init_tracing(server: &ServerConfig) -> anyhow::Result<()> {
    let filter = EnvFilter::try_new(&server.log_level)?;
    let registry = tracing_subscriber::registry().with(filter);

    if server.is_production() {
        registry.with(tracing_subscriber::fmt::layer().json()).try_init()?;
    } else {
        registry.with(tracing_subscriber::fmt::layer()).try_init()?;
    }
    Ok(())
}

fn build_router(state: AppState, server: &ServerConfig) -> Router {
    let origins = server
        .cors_origins_list()
        .iter()
        .filter_map(|origin| origin.parse::<HeaderValue>().ok())
        .collect::<Vec<_>>();
    let cors = CorsLayer::new().allow_methods(Any).allow_headers(Any);
    let cors = if origins.is_empty() {
        cors.allow_origin(Any)
    } else {
        cors.allow_origin(origins)
    };

    let middleware = ServiceBuilder::new()
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(cors)
        .layer(TimeoutLayer::new(server.request_timeout()));

    api_router(state).layer(middleware)
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl+C");
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
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}
