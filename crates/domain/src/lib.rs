//! # sensorpad-domain
//!
//! Pure domain model for the sensorpad telemetry dashboard.
//!
//! ## Responsibilities
//! - Foundational types: error conventions, timestamp formatting
//! - Define **LED state** records (point-in-time on/off state of three LEDs)
//! - Define **sensor readings** (DHT22 temperature/humidity, MQ2 gas value)
//! - Define the **combined snapshot** returned by the aggregated read
//! - Contain all invariant enforcement and domain logic
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod led;
pub mod reading;
pub mod time;
