//! Application services — one per use-case group.

pub mod led_service;
pub mod sensor_service;
