//! HTTP surface: static frontend plus the JSON API.

pub mod routes;
pub mod state;
pub mod static_files;

use std::time::Duration;

use axum::{
    Router,
    http::{Method, StatusCode, header::CONTENT_TYPE},
    middleware,
    routing::{get, post},
};
use tokio::{
    net::TcpListener,
    signal::{self, ctrl_c},
};
use tower_http::cors::{Any, CorsLayer};
use tracing::{info, warn};

use crate::config::Config;
use crate::db::{initialize::presses_table_exists, pool::DbPool};
use crate::errors::AppResult;
use crate::models::button;
use routes::{dump_handler, press_handler, time_handler, times_handler};
use state::AppState;
use static_files::{StaticAssets, serve_static};

/// Build the application router. Static assets are checked first; anything
/// that is not a known asset reaches the API routes.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(60 * 60));

    Router::new()
        .route("/api/press", post(press_handler))
        .route("/api/dump", get(dump_handler))
        .route("/api/time/{location}", get(time_handler))
        .route("/api/times", get(times_handler))
        .fallback(|| async { StatusCode::NOT_FOUND })
        .layer(middleware::from_fn_with_state(state.clone(), serve_static))
        .layer(cors)
        .with_state(state)
}

pub async fn start_server(cfg: &Config) -> AppResult<()> {
    button::validate_table()?;

    info!("Opening database {}", cfg.database_path());
    let pool = DbPool::open(cfg.database_path())?;

    if !pool.run(presses_table_exists).await? {
        warn!("Table `presses` not found; run `pressrate init` to create it");
    }

    let assets = StaticAssets::scan(&cfg.static_dir);
    info!(
        "Serving {} static assets from {}",
        assets.len(),
        cfg.static_dir.display()
    );

    let app = router(AppState::new(pool, assets));

    info!("Binding to {}", cfg.bind);
    let listener = TcpListener::bind(&cfg.bind).await?;
    info!("Server running on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shut down");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = ctrl_c().await {
            warn!("Failed to install Ctrl+C handler: {e}");
            std::future::pending::<()>().await;
        }
        info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                warn!("Failed to install SIGTERM handler: {e}");
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
