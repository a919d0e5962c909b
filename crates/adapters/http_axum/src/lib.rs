//! # sensorpad-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the **JSON API** for the dashboard and for sensor nodes
//!   (`/api/led/*`, `/api/sensor/*`)
//! - Serve the **dashboard page** at `/` — a single static HTML document that
//!   polls the JSON API from the browser
//! - Map HTTP requests into application service calls (driving adapter)
//! - Map application errors into HTTP responses (400 for validation failures,
//!   opaque 500 for storage failures)
//!
//! ## Dependency rule
//! Depends on `sensorpad-app` (for the port trait and services) and
//! `sensorpad-domain` (for record types used in request/response mapping).
//! Never leaks axum types into the domain.

pub mod api;
pub mod dashboard;
pub mod error;
pub mod router;
pub mod state;
