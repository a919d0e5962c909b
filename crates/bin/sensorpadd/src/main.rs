//! # sensorpadd — sensorpad dashboard daemon
//!
//! Composition root that wires the adapters together and starts the server.
//!
//! ## Responsibilities
//! - Parse configuration (TOML file, env vars)
//! - Initialize the JSON log files (seed absent ones, never overwrite)
//! - Construct the store implementations (adapters)
//! - Construct application services, injecting stores via the port trait
//! - Build the axum router, injecting application services
//! - Bind to a TCP port and serve until ctrl-c
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;

use sensorpad_adapter_http_axum::state::AppState;
use sensorpad_adapter_storage_json::JsonLogFile;
use sensorpad_app::services::led_service::LedService;
use sensorpad_app::services::sensor_service::SensorService;
use sensorpad_domain::led::LedState;
use sensorpad_domain::reading::{Dht22Reading, Mq2Reading};
use sensorpad_domain::time::now_string;
use tracing_subscriber::EnvFilter;

use crate::config::Config;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_new(&config.logging.filter).unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Stores — one JSON array file per log.
    let led_store: JsonLogFile<LedState> =
        JsonLogFile::new(config.storage.data_dir.join("data_led.json"));
    let dht22_store: JsonLogFile<Dht22Reading> =
        JsonLogFile::new(config.storage.data_dir.join("data_dht22.json"));
    let mq2_store: JsonLogFile<Mq2Reading> =
        JsonLogFile::new(config.storage.data_dir.join("data_mq2.json"));

    // Seed absent files: the LED log starts with one all-off record so its
    // last element is always a full state; sensor logs start empty.
    led_store
        .ensure_initialized(&[LedState::all_off(now_string())])
        .await?;
    dht22_store.ensure_initialized(&[]).await?;
    mq2_store.ensure_initialized(&[]).await?;

    // Services
    let led_service = LedService::new(led_store);
    let sensor_service = SensorService::new(dht22_store, mq2_store);

    // HTTP
    let state = AppState::new(led_service, sensor_service);
    let app = sensorpad_adapter_http_axum::router::build(state);

    let bind_addr = config.bind_addr();
    tracing::info!(addr = %bind_addr, "sensorpadd listening");

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to install ctrl-c handler");
    }
}
