//! JSON handlers for sensor ingestion and the combined latest read.

use axum::Json;
use axum::extract::State;
use serde::{Deserialize, Serialize};

use sensorpad_app::ports::LogStore;
use sensorpad_domain::error::ValidationError;
use sensorpad_domain::led::LedState;
use sensorpad_domain::reading::{Dht22Reading, Mq2Reading, SensorSnapshot};

use crate::error::ApiError;
use crate::state::AppState;

/// Request body for a DHT22 submission. Fields are optional so that an
/// absent field produces the documented 400 body instead of a
/// deserialization rejection.
#[derive(Deserialize)]
pub struct Dht22Request {
    pub temperature: Option<f64>,
    pub humidity: Option<f64>,
}

/// Request body for an MQ2 submission.
#[derive(Deserialize)]
pub struct Mq2Request {
    pub gas_value: Option<f64>,
}

/// Acknowledgement body for successful submissions — no echoed data.
#[derive(Serialize)]
pub struct AckResponse {
    pub success: bool,
}

/// `POST /api/sensor/dht22`
pub async fn submit_dht22<L, D, M>(
    State(state): State<AppState<L, D, M>>,
    Json(req): Json<Dht22Request>,
) -> Result<Json<AckResponse>, ApiError>
where
    L: LogStore<LedState> + Send + Sync + 'static,
    D: LogStore<Dht22Reading> + Send + Sync + 'static,
    M: LogStore<Mq2Reading> + Send + Sync + 'static,
{
    let (Some(temperature), Some(humidity)) = (req.temperature, req.humidity) else {
        return Err(ValidationError::MissingDht22Data.into());
    };
    state
        .sensor_service
        .record_dht22(temperature, humidity)
        .await?;
    Ok(Json(AckResponse { success: true }))
}

/// `POST /api/sensor/mq2`
pub async fn submit_mq2<L, D, M>(
    State(state): State<AppState<L, D, M>>,
    Json(req): Json<Mq2Request>,
) -> Result<Json<AckResponse>, ApiError>
where
    L: LogStore<LedState> + Send + Sync + 'static,
    D: LogStore<Dht22Reading> + Send + Sync + 'static,
    M: LogStore<Mq2Reading> + Send + Sync + 'static,
{
    let Some(gas_value) = req.gas_value else {
        return Err(ValidationError::MissingMq2Data.into());
    };
    state.sensor_service.record_mq2(gas_value).await?;
    Ok(Json(AckResponse { success: true }))
}

/// `GET /api/sensor/data`
pub async fn combined<L, D, M>(
    State(state): State<AppState<L, D, M>>,
) -> Result<Json<SensorSnapshot>, ApiError>
where
    L: LogStore<LedState> + Send + Sync + 'static,
    D: LogStore<Dht22Reading> + Send + Sync + 'static,
    M: LogStore<Mq2Reading> + Send + Sync + 'static,
{
    let snapshot = state.sensor_service.combined_latest().await?;
    Ok(Json(snapshot))
}
