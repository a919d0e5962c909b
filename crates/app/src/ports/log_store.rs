//! Log store port — bounded record-history persistence.

use std::future::Future;

use sensorpad_domain::error::SensorPadError;

/// Maximum number of records a log retains. Appending beyond the limit drops
/// the oldest entries.
pub const HISTORY_LIMIT: usize = 20;

/// A size-capped, ordered history of records of one type.
///
/// Records are kept oldest-first; the "current" value of a log is its last
/// element. Implementations serialize their own read-modify-write cycles, so
/// two concurrent appends never lose a record (last-writer-wins applies per
/// record, not per file).
pub trait LogStore<R> {
    /// Read the full history, oldest-first.
    fn read_all(&self) -> impl Future<Output = Result<Vec<R>, SensorPadError>> + Send;

    /// Append a record, dropping the oldest entries beyond
    /// [`HISTORY_LIMIT`]. Returns the record as persisted.
    fn append(&self, record: R) -> impl Future<Output = Result<R, SensorPadError>> + Send;

    /// Return the most recently appended record, or `None` when the log is
    /// empty.
    fn latest(&self) -> impl Future<Output = Result<Option<R>, SensorPadError>> + Send;
}
