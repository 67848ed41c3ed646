#![forbid(unsafe_code)]

//! JSONL action/snapshot logs and deterministic replay.
//!
//! Every dispatched action is recorded together with the snapshot it
//! produced. The log serializes to JSONL with a blake3 digest over the
//! stream, so two runs can be compared byte for byte: the engine is pure, so
//! replaying a log against a fresh scroller must reproduce the identical
//! snapshot sequence.

use gridport_core::{GridScroller, GridSnapshot, ScrollAction, ScrollConfig, ScrollError};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
struct LogRecord {
    seq: u64,
    action: ScrollAction,
    snapshot: GridSnapshot,
}

/// Recorded action/snapshot history for one scroller run.
#[derive(Debug, Clone)]
pub struct ActionLog {
    config: ScrollConfig,
    records: Vec<LogRecord>,
}

impl ActionLog {
    /// Start an empty log for a run with the given tuning.
    #[must_use]
    pub fn new(config: ScrollConfig) -> Self {
        Self {
            config,
            records: Vec::new(),
        }
    }

    /// Dispatch an action through the scroller and record the outcome.
    pub fn record(
        &mut self,
        scroller: &mut GridScroller,
        action: &ScrollAction,
    ) -> Result<(), ScrollError> {
        scroller.dispatch(action)?;
        let snapshot = scroller.snapshot()?;
        self.records.push(LogRecord {
            seq: self.records.len() as u64,
            action: *action,
            snapshot,
        });
        Ok(())
    }

    /// Number of recorded actions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether anything has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Serialize the log as one JSON record per line.
    pub fn to_jsonl(&self) -> Result<String, serde_json::Error> {
        let mut out = String::new();
        for record in &self.records {
            out.push_str(&serde_json::to_string(record)?);
            out.push('\n');
        }
        Ok(out)
    }

    /// blake3 digest of the JSONL stream.
    pub fn digest(&self) -> Result<String, serde_json::Error> {
        Ok(blake3::hash(self.to_jsonl()?.as_bytes())
            .to_hex()
            .to_string())
    }

    /// Replay the recorded actions against a fresh scroller with the same
    /// tuning, producing the log of that second run.
    pub fn replay(&self) -> Result<ActionLog, ScrollError> {
        let _span = tracing::info_span!("replay", actions = self.records.len()).entered();
        let mut scroller = GridScroller::new(self.config.clone());
        let mut log = ActionLog::new(self.config.clone());
        for record in &self.records {
            log.record(&mut scroller, &record.action)?;
        }
        Ok(log)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridport_core::Scale;

    fn recorded_run() -> ActionLog {
        let config = ScrollConfig::default();
        let scale = Scale::for_grid(200.0, 20.0, 20.0, 50, &config).unwrap();
        let mut scroller = GridScroller::new(config.clone());
        let mut log = ActionLog::new(config);
        for action in [
            ScrollAction::SetScale(scale),
            ScrollAction::OnScroll { scroll_top: 0.0 },
            ScrollAction::OnScroll { scroll_top: 120.0 },
            ScrollAction::AddDelta { delta: -20.0 },
            ScrollAction::ScrollTo { scroll_top: 640.0 },
            ScrollAction::OnScroll { scroll_top: 640.0 },
        ] {
            log.record(&mut scroller, &action).unwrap();
        }
        log
    }

    #[test]
    fn jsonl_has_one_line_per_action() {
        let log = recorded_run();
        assert_eq!(log.len(), 6);
        assert_eq!(log.to_jsonl().unwrap().lines().count(), 6);
    }

    #[test]
    fn replay_reproduces_the_digest() {
        let log = recorded_run();
        let replayed = log.replay().unwrap();
        assert_eq!(log.digest().unwrap(), replayed.digest().unwrap());
    }

    #[test]
    fn different_runs_have_different_digests() {
        let log = recorded_run();
        let mut other = recorded_run();
        let config = ScrollConfig::default();
        let mut scroller = GridScroller::new(config.clone());
        let scale = Scale::for_grid(200.0, 20.0, 20.0, 50, &config).unwrap();
        scroller.dispatch(&ScrollAction::SetScale(scale)).unwrap();
        other
            .record(&mut scroller, &ScrollAction::OnScroll { scroll_top: 33.0 })
            .unwrap();
        assert_ne!(log.digest().unwrap(), other.digest().unwrap());
    }

    #[test]
    fn failed_dispatch_records_nothing() {
        let mut log = ActionLog::new(ScrollConfig::default());
        let mut scroller = GridScroller::with_defaults();
        let err = log
            .record(&mut scroller, &ScrollAction::ScrollTo { scroll_top: 1.0 })
            .unwrap_err();
        assert_eq!(err, ScrollError::ScaleNotSet);
        assert!(log.is_empty());
    }
}
