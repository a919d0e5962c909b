//! Axum router assembly.

use axum::Router;
use axum::routing::get;
use tower_http::trace::TraceLayer;

use sensorpad_app::ports::LogStore;
use sensorpad_domain::led::LedState;
use sensorpad_domain::reading::{Dht22Reading, Mq2Reading};

use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// Merges API routes under `/api` and the dashboard page at `/`.
/// Includes a [`TraceLayer`] that logs each HTTP request/response at the
/// `DEBUG` level using the `tracing` ecosystem.
pub fn build<L, D, M>(state: AppState<L, D, M>) -> Router
where
    L: LogStore<LedState> + Send + Sync + 'static,
    D: LogStore<Dht22Reading> + Send + Sync + 'static,
    M: LogStore<Mq2Reading> + Send + Sync + 'static,
{
    Router::new()
        .route("/health", get(health_check))
        .nest("/api", crate::api::routes())
        .merge(crate::dashboard::routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}
