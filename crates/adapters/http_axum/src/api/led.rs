//! JSON handlers for LED status and toggling.

use std::str::FromStr;

use axum::Json;
use axum::extract::State;
use serde::{Deserialize, Serialize};

use sensorpad_app::ports::LogStore;
use sensorpad_domain::led::{LedName, LedState};
use sensorpad_domain::reading::{Dht22Reading, Mq2Reading};

use crate::error::ApiError;
use crate::state::AppState;

/// Request body for toggling a single LED.
///
/// `led` is validated against the three known names; `status` is typed as a
/// boolean, so non-boolean JSON values are rejected at deserialization.
#[derive(Deserialize)]
pub struct ToggleRequest {
    pub led: String,
    pub status: bool,
}

/// Response body for a successful toggle: acknowledgement plus the full
/// updated state.
#[derive(Serialize)]
pub struct ToggleResponse {
    pub success: bool,
    pub status: LedState,
}

/// `GET /api/led/status`
pub async fn status<L, D, M>(
    State(state): State<AppState<L, D, M>>,
) -> Result<Json<LedState>, ApiError>
where
    L: LogStore<LedState> + Send + Sync + 'static,
    D: LogStore<Dht22Reading> + Send + Sync + 'static,
    M: LogStore<Mq2Reading> + Send + Sync + 'static,
{
    let current = state.led_service.status().await?;
    Ok(Json(current))
}

/// `POST /api/led/toggle`
pub async fn toggle<L, D, M>(
    State(state): State<AppState<L, D, M>>,
    Json(req): Json<ToggleRequest>,
) -> Result<Json<ToggleResponse>, ApiError>
where
    L: LogStore<LedState> + Send + Sync + 'static,
    D: LogStore<Dht22Reading> + Send + Sync + 'static,
    M: LogStore<Mq2Reading> + Send + Sync + 'static,
{
    let led = LedName::from_str(&req.led)?;
    let status = state.led_service.toggle(led, req.status).await?;
    Ok(Json(ToggleResponse {
        success: true,
        status,
    }))
}
