//! # twinsvcd — twinsvc service runner
//!
//! Composition root that wires the adapters together and starts one service.
//! The `m1d` and `m2d` binaries are thin wrappers over [`run`].
//!
//! ## Responsibilities
//! - Parse configuration (config file, env vars)
//! - Initialise logging
//! - Construct the in-memory repository and the record service
//! - Run the seed routine before the listener is bound
//! - Build the axum router, bind to a TCP port and serve
//! - Handle graceful shutdown (SIGTERM/SIGINT)
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

pub mod config;
pub mod service;

use std::sync::Arc;

use axum::Router;
use tracing_subscriber::EnvFilter;
use twinsvc_adapter_http_axum::state::AppState;
use twinsvc_adapter_storage_memory::InMemoryRepository;
use twinsvc_app::services::record_service::RecordService;
use twinsvc_domain::error::TwinSvcError;

use crate::config::Config;
use crate::service::Service;

/// Build a seeded router for service `S` backed by a fresh in-memory store.
///
/// # Errors
///
/// Returns a storage error if the seed routine fails.
pub async fn build_router<S: Service>(config: &Config) -> Result<Router, TwinSvcError> {
    let profile = S::PROFILE;
    let service = Arc::new(RecordService::new(
        InMemoryRepository::<S::Record>::new(),
    ));

    if let Some(mode) = config.seed_mode(&profile) {
        let outcome = service.seed(mode, S::seed_records()).await?;
        tracing::debug!(service = profile.name, ?outcome, "seed routine finished");
    } else {
        tracing::info!(service = profile.name, "seeding disabled");
    }

    let state = AppState::from_arc(service, profile.health_message);
    Ok(twinsvc_adapter_http_axum::router::build(state))
}

/// Load configuration, seed, and serve service `S` until a shutdown signal.
///
/// # Errors
///
/// Returns an error if configuration, logging setup, seeding, binding or
/// serving fails.
pub async fn run<S: Service>() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let profile = S::PROFILE;
    let config = Config::load(&profile)?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(&config.logging.filter)?)
        .try_init()?;

    let app = build_router::<S>(&config).await?;

    let bind_addr = config.bind_addr(&profile);
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(service = profile.name, %bind_addr, "listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!(service = profile.name, "shut down");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to listen for SIGTERM");
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
    tracing::info!("shutdown signal received");
}
