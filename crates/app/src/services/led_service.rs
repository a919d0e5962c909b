//! LED service — use-cases for reading and toggling LED state.

use sensorpad_domain::error::SensorPadError;
use sensorpad_domain::led::{LedName, LedState};
use sensorpad_domain::time::now_string;

use crate::ports::LogStore;

/// Application service for the three-LED state log.
///
/// The LED log models full point-in-time state: a toggle copies the latest
/// record forward, flips one field, restamps it, and appends. When the log is
/// empty the all-off state stands in for the missing latest record.
pub struct LedService<S> {
    store: S,
}

impl<S: LogStore<LedState>> LedService<S> {
    /// Create a new service backed by the given log store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Set one LED to `on`, carrying the other two forward unchanged.
    ///
    /// Returns the full updated state as persisted.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the log store.
    pub async fn toggle(&self, led: LedName, on: bool) -> Result<LedState, SensorPadError> {
        let mut state = self
            .store
            .latest()
            .await?
            .unwrap_or_else(|| LedState::all_off(now_string()));
        state.set(led, on);
        state.timestamp = now_string();
        let persisted = self.store.append(state).await?;
        tracing::debug!(led = %led, on, "led toggled");
        Ok(persisted)
    }

    /// Return the current LED state — the latest record, or a synthesized
    /// all-off state stamped "now" when the log is empty. Never writes.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the log store.
    pub async fn status(&self) -> Result<LedState, SensorPadError> {
        Ok(self
            .store
            .latest()
            .await?
            .unwrap_or_else(|| LedState::all_off(now_string())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::HISTORY_LIMIT;
    use std::future::Future;
    use std::sync::Mutex;

    struct InMemoryLog {
        records: Mutex<Vec<LedState>>,
    }

    impl Default for InMemoryLog {
        fn default() -> Self {
            Self {
                records: Mutex::new(Vec::new()),
            }
        }
    }

    impl LogStore<LedState> for InMemoryLog {
        fn read_all(&self) -> impl Future<Output = Result<Vec<LedState>, SensorPadError>> + Send {
            let records = self.records.lock().unwrap().clone();
            async { Ok(records) }
        }

        fn append(
            &self,
            record: LedState,
        ) -> impl Future<Output = Result<LedState, SensorPadError>> + Send {
            let mut records = self.records.lock().unwrap();
            records.push(record.clone());
            let excess = records.len().saturating_sub(HISTORY_LIMIT);
            records.drain(..excess);
            async { Ok(record) }
        }

        fn latest(
            &self,
        ) -> impl Future<Output = Result<Option<LedState>, SensorPadError>> + Send {
            let last = self.records.lock().unwrap().last().cloned();
            async { Ok(last) }
        }
    }

    fn make_service() -> LedService<InMemoryLog> {
        LedService::new(InMemoryLog::default())
    }

    #[tokio::test]
    async fn should_report_all_off_when_log_is_empty() {
        let svc = make_service();
        let status = svc.status().await.unwrap();
        assert!(!status.led1);
        assert!(!status.led2);
        assert!(!status.led3);
    }

    #[tokio::test]
    async fn should_not_write_when_reading_status() {
        let svc = make_service();
        let _ = svc.status().await.unwrap();
        assert!(svc.store.records.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn should_carry_unnamed_leds_forward_on_toggle() {
        let svc = make_service();
        svc.toggle(LedName::Led2, true).await.unwrap();
        let state = svc.toggle(LedName::Led3, true).await.unwrap();
        assert!(!state.led1);
        assert!(state.led2);
        assert!(state.led3);
    }

    #[tokio::test]
    async fn should_match_folded_toggles_after_any_sequence() {
        let svc = make_service();
        let toggles = [
            (LedName::Led1, true),
            (LedName::Led2, true),
            (LedName::Led1, false),
            (LedName::Led3, true),
            (LedName::Led2, false),
            (LedName::Led2, true),
        ];

        let mut expected = LedState::all_off(String::new());
        for (led, on) in toggles {
            expected.set(led, on);
            svc.toggle(led, on).await.unwrap();
        }

        let status = svc.status().await.unwrap();
        assert_eq!(status.led1, expected.led1);
        assert_eq!(status.led2, expected.led2);
        assert_eq!(status.led3, expected.led3);
    }

    #[tokio::test]
    async fn should_append_one_record_per_toggle() {
        let svc = make_service();
        svc.toggle(LedName::Led1, true).await.unwrap();
        svc.toggle(LedName::Led1, false).await.unwrap();
        assert_eq!(svc.store.records.lock().unwrap().len(), 2);
    }
}
