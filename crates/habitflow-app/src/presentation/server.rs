use axum::http::header::CONTENT_TYPE;
use axum::http::{Method, StatusCode};
use axum::Router;
use std::future::IntoFuture;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::signal::ctrl_c;
use tokio::sync::Notify;
#[cfg(unix)]
use tokio::signal::unix::{signal, SignalKind};
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::{error, info, warn};

use crate::presentation::bootstrap::{build_app_state, open_database};
use crate::presentation::error::ApiError;
use crate::presentation::routes::api_routes;
use crate::presentation::state::AppState;
use habitflow_domain::calendar::SystemClock;
use habitflow_infrastructure::config::AppConfig;

/// Full application router: `/api` routes plus CORS, tracing and a request timeout.
pub fn build_router(state: Arc<AppState>, request_timeout: Duration) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(60 * 60));

    Router::new()
        .nest("/api", api_routes())
        .fallback(|| async { ApiError::not_found("Route not found") })
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            request_timeout,
        ))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Serve until Ctrl+C or SIGTERM, then close the database.
pub async fn run(config: AppConfig) -> anyhow::Result<()> {
    let startup_started_at = std::time::Instant::now();

    let database = open_database(&config).await?;
    let state = Arc::new(build_app_state(database.clone(), Arc::new(SystemClock)));
    let app = build_router(state, config.timeouts.http_request);

    let address = config.socket_addr();
    info!("Binding to {address}");
    let listener = TcpListener::bind(address).await?;
    info!(
        "✓ HabitFlow API listening on {address} (startup {}ms)",
        startup_started_at.elapsed().as_millis()
    );

    let draining = Arc::new(Notify::new());
    let server = axum::serve(listener, app).with_graceful_shutdown({
        let draining = draining.clone();
        async move {
            shutdown_signal().await;
            draining.notify_one();
        }
    });

    // In-flight requests get a bounded grace period once shutdown starts
    let grace = config.timeouts.shutdown_grace;
    tokio::select! {
        result = server.into_future() => result?,
        _ = async {
            draining.notified().await;
            tokio::time::sleep(grace).await;
        } => {
            warn!("Shutdown grace period of {}s elapsed, dropping open connections", grace.as_secs());
        }
    }

    database.close().await;
    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        match ctrl_c().await {
            Ok(()) => info!("Received Ctrl+C, shutting down"),
            Err(e) => {
                error!("Failed to install Ctrl+C handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                error!("Failed to install signal handler: {}", e);
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
}
