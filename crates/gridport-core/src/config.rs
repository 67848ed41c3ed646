#![forbid(unsafe_code)]

//! Tuning knobs for the scroll engine.

/// Tuning parameters for scroll behavior.
///
/// These are empirically tuned UI constants, not correctness contracts: the
/// engine's invariants hold for any positive values, and embedders may retune
/// them freely.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollConfig {
    /// Movement threshold (px) separating small scrolls from large jumps.
    ///
    /// Motion at or below this magnitude accumulates into the virtual delta
    /// without touching the anchor; anything larger re-anchors. Mouse-wheel
    /// and keyboard motion stays far below this; scrollbar drags exceed it.
    pub large_jump_px: f64,

    /// Extra rows rendered above/below the visible band to reduce pop-in
    /// during fast scrolling.
    pub padding_rows: usize,

    /// Hard ceiling on the rendered row window.
    ///
    /// Exceeding it is reported as an error: it signals a misconfigured
    /// caller (e.g. padding far larger than the viewport), never a condition
    /// to recover from.
    pub max_rendered_rows: usize,

    /// Ceiling (px) on the real scrollable canvas height.
    ///
    /// Browser engines cap the height of a scrollable element at tens of
    /// millions of pixels; the default stays safely below every current
    /// engine's limit. Taller content is compressed onto the capped canvas
    /// by the scale factor.
    pub max_canvas_px: f64,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            large_jump_px: 5_000.0,
            padding_rows: 8,
            max_rendered_rows: 1_000,
            max_canvas_px: 15_000_000.0,
        }
    }
}

impl ScrollConfig {
    /// Cap a virtual canvas height at [`max_canvas_px`](Self::max_canvas_px).
    #[must_use]
    pub fn capped_canvas_height(&self, virtual_height: f64) -> f64 {
        virtual_height.min(self.max_canvas_px)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_reasonable() {
        let cfg = ScrollConfig::default();
        assert!(cfg.large_jump_px > 0.0);
        assert!(cfg.padding_rows > 0);
        assert!(cfg.max_rendered_rows >= 100);
        assert!(cfg.max_canvas_px > 1_000_000.0);
    }

    #[test]
    fn short_canvas_is_not_capped() {
        let cfg = ScrollConfig::default();
        assert_eq!(cfg.capped_canvas_height(1_020.0), 1_020.0);
    }

    #[test]
    fn tall_canvas_is_capped() {
        let cfg = ScrollConfig::default();
        assert_eq!(cfg.capped_canvas_height(330_000_033.0), cfg.max_canvas_px);
    }
}
