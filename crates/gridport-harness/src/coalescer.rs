#![forbid(unsafe_code)]

//! Coalescing for high-frequency scroll notifications.
//!
//! Browsers can deliver many scroll events per animation frame during fast
//! wheel or trackpad motion. Batching them is the host's job, not the
//! engine's: positions are absolute, so within one frame tick the latest
//! position wins and the rest carry no information. The harness uses this to
//! drive storm tests the way a frame-looped embedder would.

/// Accumulates scroll notifications within a single frame tick.
///
/// All operations are O(1); at most one pending position is held.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScrollCoalescer {
    pending: Option<f64>,
    event_count: u32,
}

impl ScrollCoalescer {
    /// Create an empty coalescer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one native scroll notification. Latest position wins.
    pub fn push(&mut self, scroll_top: f64) {
        self.pending = Some(scroll_top);
        self.event_count += 1;
    }

    /// Whether any notifications arrived since the last drain.
    #[must_use]
    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Drain the batched position and reset for the next frame.
    ///
    /// Returns `(scroll_top, coalesced_event_count)` if anything arrived.
    pub fn drain(&mut self) -> Option<(f64, u32)> {
        let result = self.pending.take().map(|top| (top, self.event_count));
        self.event_count = 0;
        result
    }
}
