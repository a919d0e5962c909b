//! Shared application state for axum handlers.

use std::sync::Arc;

use sensorpad_app::ports::LogStore;
use sensorpad_app::services::led_service::LedService;
use sensorpad_app::services::sensor_service::SensorService;
use sensorpad_domain::led::LedState;
use sensorpad_domain::reading::{Dht22Reading, Mq2Reading};

/// Application state shared across all axum handlers.
///
/// Generic over the three log store types to avoid dynamic dispatch.
/// `Clone` is implemented manually so the underlying types themselves do not
/// need to be `Clone` — only the `Arc` wrappers are cloned.
pub struct AppState<L, D, M> {
    /// LED toggle/status service.
    pub led_service: Arc<LedService<L>>,
    /// Sensor ingestion and combined-read service.
    pub sensor_service: Arc<SensorService<D, M>>,
}

impl<L, D, M> Clone for AppState<L, D, M> {
    fn clone(&self) -> Self {
        Self {
            led_service: Arc::clone(&self.led_service),
            sensor_service: Arc::clone(&self.sensor_service),
        }
    }
}

impl<L, D, M> AppState<L, D, M>
where
    L: LogStore<LedState> + Send + Sync + 'static,
    D: LogStore<Dht22Reading> + Send + Sync + 'static,
    M: LogStore<Mq2Reading> + Send + Sync + 'static,
{
    /// Create a new application state from service instances.
    pub fn new(led_service: LedService<L>, sensor_service: SensorService<D, M>) -> Self {
        Self {
            led_service: Arc::new(led_service),
            sensor_service: Arc::new(sensor_service),
        }
    }
}
