//! Employee Cache - Employee CRUD service with a cache-aside layer
//!
//! Serves the employee REST API with the `employees` cache region in front
//! of the configured store.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tokio::signal;
use tokio::task::JoinHandle;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use employee_cache::api::{create_router, AppState};
use employee_cache::store::{EmployeeRepository, InMemoryEmployeeRepository};
use employee_cache::{seed_employees, spawn_cleanup_task, Config};

/// Main entry point for the employee service.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging
/// 2. Load configuration from environment variables
/// 3. Open the employee store and create the cache region
/// 4. Seed the sample employees (before accepting traffic)
/// 5. Start background TTL cleanup task when a TTL is configured
/// 6. Start HTTP server on configured port
/// 7. Handle graceful shutdown on SIGINT/SIGTERM
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "employee_cache=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting employee service");

    let config = Config::from_env();
    info!(
        "Configuration loaded: port={}, cache_max_entries={}, cache_ttl={:?}, seed_on_startup={}",
        config.server_port, config.cache_max_entries, config.cache_ttl, config.seed_on_startup
    );

    let repository = build_repository(&config).await?;
    let state = AppState::with_repository(repository, &config);
    info!(region = state.service.cache().name(), "Cache region initialized");

    if config.seed_on_startup {
        seed_employees(&state.service)
            .await
            .context("failed to seed sample employees")?;
    }

    // Without a TTL nothing ever expires, so there is nothing to sweep
    let cleanup_handle = config.cache_ttl.map(|_| {
        info!("Background cleanup task started");
        spawn_cleanup_task(state.service.cache().clone(), config.cleanup_interval)
    });

    let app = create_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server_port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(cleanup_handle))
        .await
        .context("server error")?;

    info!("Server shutdown complete");
    Ok(())
}

fn in_memory_repository() -> Arc<dyn EmployeeRepository> {
    info!("Using in-memory employee store");
    Arc::new(InMemoryEmployeeRepository::new())
}

#[cfg(feature = "sqlite")]
async fn build_repository(config: &Config) -> anyhow::Result<Arc<dyn EmployeeRepository>> {
    use employee_cache::store::SqliteEmployeeRepository;

    match &config.sqlite_path {
        Some(path) => {
            let repository = SqliteEmployeeRepository::new(path)
                .await
                .with_context(|| format!("failed to open SQLite store at {}", path))?;
            info!(path = %path, "Using SQLite employee store");
            Ok(Arc::new(repository))
        }
        None => Ok(in_memory_repository()),
    }
}

#[cfg(not(feature = "sqlite"))]
async fn build_repository(_config: &Config) -> anyhow::Result<Arc<dyn EmployeeRepository>> {
    Ok(in_memory_repository())
}

/// Waits for shutdown signal (Ctrl+C or SIGTERM).
///
/// On shutdown signal, aborts the cleanup task (if any) and allows graceful shutdown.
async fn shutdown_signal(cleanup_handle: Option<JoinHandle<()>>) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, initiating shutdown...");
        }
        _ = terminate => {
            info!("Received SIGTERM, initiating shutdown...");
        }
    }

    if let Some(handle) = cleanup_handle {
        handle.abort();
        warn!("Cleanup task aborted");
    }
}
