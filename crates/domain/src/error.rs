//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`SensorPadError`] via `#[from]`. Adapters keep their own source errors
//! (IO, JSON) and box them into the `Storage` variant so the domain never
//! depends on adapter crates.

/// Top-level error for all sensorpad operations.
#[derive(Debug, thiserror::Error)]
pub enum SensorPadError {
    /// A request carried an invalid or missing field.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Reading, writing, or parsing a persisted log failed.
    #[error("storage error")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Validation failures for incoming requests.
///
/// Display strings are part of the HTTP contract: they are returned verbatim
/// in `400` error bodies.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ValidationError {
    /// The `led` field named something other than `led1`/`led2`/`led3`.
    #[error("Invalid LED name")]
    InvalidLedName,

    /// A DHT22 submission omitted `temperature` or `humidity`.
    #[error("Missing temperature or humidity data")]
    MissingDht22Data,

    /// An MQ2 submission omitted `gas_value`.
    #[error("Missing gas value data")]
    MissingMq2Data,
}
