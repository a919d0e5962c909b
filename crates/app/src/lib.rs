//! # sensorpad-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define the **port trait** that storage adapters must implement:
//!   - [`ports::LogStore`] — bounded, append-only record history
//! - Define **driving/inbound ports** as use-case structs:
//!   - [`services::led_service::LedService`] — toggle LEDs, read current state
//!   - [`services::sensor_service::SensorService`] — record readings, serve
//!     the combined latest snapshot
//! - Orchestrate domain objects without knowing *how* persistence works
//!
//! ## Dependency rule
//! Depends on `sensorpad-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the
//! reverse.

pub mod ports;
pub mod services;
