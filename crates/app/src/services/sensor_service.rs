//! Sensor service — use-cases for recording and reading sensor telemetry.

use sensorpad_domain::error::SensorPadError;
use sensorpad_domain::reading::{Dht22Reading, Mq2Reading, SensorSnapshot};
use sensorpad_domain::time::now_string;

use crate::ports::LogStore;

/// Application service for the DHT22 and MQ2 reading logs.
///
/// Each submission appends a freshly constructed record; nothing is carried
/// forward between entries. The combined read merges the latest record of
/// each log, substituting placeholders for empty logs.
pub struct SensorService<D, M> {
    dht22: D,
    mq2: M,
}

impl<D, M> SensorService<D, M>
where
    D: LogStore<Dht22Reading>,
    M: LogStore<Mq2Reading>,
{
    /// Create a new service backed by the given log stores.
    pub fn new(dht22: D, mq2: M) -> Self {
        Self { dht22, mq2 }
    }

    /// Record a DHT22 reading stamped "now".
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the log store.
    pub async fn record_dht22(
        &self,
        temperature: f64,
        humidity: f64,
    ) -> Result<Dht22Reading, SensorPadError> {
        let reading = self
            .dht22
            .append(Dht22Reading {
                temperature,
                humidity,
                timestamp: now_string(),
            })
            .await?;
        tracing::debug!(temperature, humidity, "dht22 reading recorded");
        Ok(reading)
    }

    /// Record an MQ2 reading stamped "now".
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the log store.
    pub async fn record_mq2(&self, gas_value: f64) -> Result<Mq2Reading, SensorPadError> {
        let reading = self
            .mq2
            .append(Mq2Reading {
                gas_value,
                timestamp: now_string(),
            })
            .await?;
        tracing::debug!(gas_value, "mq2 reading recorded");
        Ok(reading)
    }

    /// Merge the latest reading of each sensor log into one flat snapshot.
    /// Empty logs contribute zero values and an `N/A` timestamp; this only
    /// fails on underlying storage errors.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from either log store.
    pub async fn combined_latest(&self) -> Result<SensorSnapshot, SensorPadError> {
        let dht22 = self.dht22.latest().await?;
        let mq2 = self.mq2.latest().await?;
        Ok(SensorSnapshot::merge(dht22, mq2))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::HISTORY_LIMIT;
    use std::future::Future;
    use std::sync::Mutex;

    struct InMemoryLog<R> {
        records: Mutex<Vec<R>>,
    }

    impl<R> Default for InMemoryLog<R> {
        fn default() -> Self {
            Self {
                records: Mutex::new(Vec::new()),
            }
        }
    }

    impl<R: Clone + Send + Sync> LogStore<R> for InMemoryLog<R> {
        fn read_all(&self) -> impl Future<Output = Result<Vec<R>, SensorPadError>> + Send {
            let records = self.records.lock().unwrap().clone();
            async { Ok(records) }
        }

        fn append(&self, record: R) -> impl Future<Output = Result<R, SensorPadError>> + Send {
            let mut records = self.records.lock().unwrap();
            records.push(record.clone());
            let excess = records.len().saturating_sub(HISTORY_LIMIT);
            records.drain(..excess);
            async { Ok(record) }
        }

        fn latest(&self) -> impl Future<Output = Result<Option<R>, SensorPadError>> + Send {
            let last = self.records.lock().unwrap().last().cloned();
            async { Ok(last) }
        }
    }

    fn make_service() -> SensorService<InMemoryLog<Dht22Reading>, InMemoryLog<Mq2Reading>> {
        SensorService::new(InMemoryLog::default(), InMemoryLog::default())
    }

    #[tokio::test]
    async fn should_record_dht22_reading_with_submitted_values() {
        let svc = make_service();
        let reading = svc.record_dht22(25.3, 61.0).await.unwrap();
        assert_eq!(reading.temperature, 25.3);
        assert_eq!(reading.humidity, 61.0);
        assert!(!reading.timestamp.is_empty());
    }

    #[tokio::test]
    async fn should_record_mq2_reading_with_submitted_value() {
        let svc = make_service();
        let reading = svc.record_mq2(412.0).await.unwrap();
        assert_eq!(reading.gas_value, 412.0);
    }

    #[tokio::test]
    async fn should_serve_placeholders_when_both_logs_empty() {
        let svc = make_service();
        let snapshot = svc.combined_latest().await.unwrap();
        assert_eq!(snapshot.temperature, 0.0);
        assert_eq!(snapshot.gas_value, 0.0);
        assert_eq!(snapshot.dht22_timestamp, "N/A");
        assert_eq!(snapshot.mq2_timestamp, "N/A");
    }

    #[tokio::test]
    async fn should_serve_latest_reading_of_each_log() {
        let svc = make_service();
        svc.record_dht22(20.0, 50.0).await.unwrap();
        svc.record_dht22(21.5, 48.0).await.unwrap();
        svc.record_mq2(300.0).await.unwrap();

        let snapshot = svc.combined_latest().await.unwrap();
        assert_eq!(snapshot.temperature, 21.5);
        assert_eq!(snapshot.humidity, 48.0);
        assert_eq!(snapshot.gas_value, 300.0);
    }

    #[tokio::test]
    async fn should_merge_independently_when_one_log_is_empty() {
        let svc = make_service();
        svc.record_mq2(512.0).await.unwrap();

        let snapshot = svc.combined_latest().await.unwrap();
        assert_eq!(snapshot.temperature, 0.0);
        assert_eq!(snapshot.dht22_timestamp, "N/A");
        assert_eq!(snapshot.gas_value, 512.0);
        assert_ne!(snapshot.mq2_timestamp, "N/A");
    }
}
