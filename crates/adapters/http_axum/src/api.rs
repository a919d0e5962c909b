//! JSON API handler modules.

pub mod led;
pub mod sensors;

use axum::Router;
use axum::routing::{get, post};

use sensorpad_app::ports::LogStore;
use sensorpad_domain::led::LedState;
use sensorpad_domain::reading::{Dht22Reading, Mq2Reading};

use crate::state::AppState;

/// Build the `/api` sub-router.
pub fn routes<L, D, M>() -> Router<AppState<L, D, M>>
where
    L: LogStore<LedState> + Send + Sync + 'static,
    D: LogStore<Dht22Reading> + Send + Sync + 'static,
    M: LogStore<Mq2Reading> + Send + Sync + 'static,
{
    Router::new()
        // LED control
        .route("/led/status", get(led::status::<L, D, M>))
        .route("/led/toggle", post(led::toggle::<L, D, M>))
        // Sensor ingestion + combined read
        .route("/sensor/dht22", post(sensors::submit_dht22::<L, D, M>))
        .route("/sensor/mq2", post(sensors::submit_mq2::<L, D, M>))
        .route("/sensor/data", get(sensors::combined::<L, D, M>))
}
