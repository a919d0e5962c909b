//! Sensor readings — DHT22 (temperature/humidity) and MQ2 (gas) records.
//!
//! Sensor logs are append-only histories of freshly constructed records;
//! nothing is carried forward between entries.

use serde::{Deserialize, Serialize};

use crate::time::TIMESTAMP_UNAVAILABLE;

/// One DHT22 reading: temperature in °C and relative humidity in %.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dht22Reading {
    pub temperature: f64,
    pub humidity: f64,
    /// Local wall-clock string, see [`crate::time::TIMESTAMP_FORMAT`].
    pub timestamp: String,
}

/// One MQ2 reading: raw gas concentration value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mq2Reading {
    pub gas_value: f64,
    /// Local wall-clock string, see [`crate::time::TIMESTAMP_FORMAT`].
    pub timestamp: String,
}

/// Flattened merge of the latest DHT22 and MQ2 readings, as served by the
/// aggregated read endpoint. Empty logs contribute zero values and an `N/A`
/// timestamp instead of failing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensorSnapshot {
    pub temperature: f64,
    pub humidity: f64,
    pub gas_value: f64,
    pub dht22_timestamp: String,
    pub mq2_timestamp: String,
}

impl SensorSnapshot {
    /// Merge the latest reading of each log, substituting placeholders for
    /// whichever log is still empty.
    #[must_use]
    pub fn merge(dht22: Option<Dht22Reading>, mq2: Option<Mq2Reading>) -> Self {
        let (temperature, humidity, dht22_timestamp) = match dht22 {
            Some(r) => (r.temperature, r.humidity, r.timestamp),
            None => (0.0, 0.0, TIMESTAMP_UNAVAILABLE.to_string()),
        };
        let (gas_value, mq2_timestamp) = match mq2 {
            Some(r) => (r.gas_value, r.timestamp),
            None => (0.0, TIMESTAMP_UNAVAILABLE.to_string()),
        };
        Self {
            temperature,
            humidity,
            gas_value,
            dht22_timestamp,
            mq2_timestamp,
        }
    }
}
