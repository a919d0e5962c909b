//! # sensorpad-adapter-storage-json
//!
//! Flat-file JSON persistence adapter.
//!
//! ## Responsibilities
//! - Implement the [`LogStore`](sensorpad_app::ports::LogStore) port on top of
//!   plain JSON array files (one file per log)
//! - Enforce the drop-oldest history bound on append
//! - Seed absent files on startup without ever overwriting existing data
//!
//! ## On-disk format
//! Each log is a single JSON array, oldest-first, rewritten whole on every
//! append. There is no index, no versioning, and no atomic rename — the files
//! double as a human-readable interchange format.
//!
//! ## Dependency rule
//! Depends on `sensorpad-app` (for the port trait) and `sensorpad-domain`
//! (for the error type). Never imports HTTP or framework crates.

mod error;
mod log_file;

pub use error::StorageError;
pub use log_file::JsonLogFile;
