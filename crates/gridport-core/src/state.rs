#![forbid(unsafe_code)]

//! Scroll actions and the pure state reducer.
//!
//! The engine's entire mutable surface is one [`ScrollState`] cell, replaced
//! wholesale by [`reduce`] for every [`ScrollAction`]. Nothing here touches
//! the host: real scrolls are executed by the embedder and confirmed back
//! through [`ScrollAction::OnScroll`].
//!
//! # Anchor + delta
//!
//! At very large row counts, virtual offsets grow big enough that recomputing
//! them from the real position on every pixel of motion accumulates visible
//! floating-point error. The state therefore splits the virtual position into
//! a coarse anchor ([`ScrollState::virtual_base`]), updated rarely and
//! exactly from real coordinates, plus a small bounded delta
//! ([`ScrollState::virtual_delta`]) that absorbs ordinary wheel and keyboard
//! motion. The delta is reset whenever it would otherwise grow past the
//! configured large-jump threshold, so every arithmetic step stays in safe
//! numeric range. Collapsing the pair into a single floating offset would
//! reintroduce the jitter this split exists to prevent.

use crate::config::ScrollConfig;
use crate::error::ScrollError;
use crate::scale::Scale;

/// Discrete inputs processed by [`reduce`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ScrollAction {
    /// Install a new coordinate scale after a geometry change.
    SetScale(Scale),
    /// A native scroll notification from the host viewport.
    OnScroll { scroll_top: f64 },
    /// A programmatic scroll was just issued against the host viewport; the
    /// confirming native notification has not arrived yet.
    ScrollTo { scroll_top: f64 },
    /// Adjust the virtual delta only; the real scrollbar does not move.
    AddDelta { delta: f64 },
}

/// Scroll position state: the last observed real position plus the
/// anchor/delta decomposition of the virtual position.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollState {
    scale: Option<Scale>,
    scroll_top: Option<f64>,
    virtual_base: Option<f64>,
    virtual_delta: f64,
    is_scrolling: bool,
}

impl ScrollState {
    /// Empty state: nothing observed, no scale installed.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Currently installed scale, if any.
    #[must_use]
    pub fn scale(&self) -> Option<Scale> {
        self.scale
    }

    /// Last observed real scroll position.
    #[must_use]
    pub fn scroll_top(&self) -> Option<f64> {
        self.scroll_top
    }

    /// The anchor: virtual position corresponding to the real position at the
    /// last (re-)anchoring.
    #[must_use]
    pub fn virtual_base(&self) -> Option<f64> {
        self.virtual_base
    }

    /// Small movement accumulated since the anchor.
    #[must_use]
    pub fn virtual_delta(&self) -> f64 {
        self.virtual_delta
    }

    /// Whether a programmatic scroll is in flight.
    #[must_use]
    pub fn is_scrolling(&self) -> bool {
        self.is_scrolling
    }

    /// Effective virtual scroll position, once anchored.
    #[must_use]
    pub fn virtual_scroll_top(&self) -> Option<f64> {
        self.virtual_base.map(|base| base + self.virtual_delta)
    }
}

/// Apply one action to the state, returning the replacement state.
///
/// Pure and synchronous: the input state is never mutated, and feeding the
/// same state and action always produces the same result. On error the caller
/// keeps the old state.
pub fn reduce(
    state: &ScrollState,
    action: &ScrollAction,
    config: &ScrollConfig,
) -> Result<ScrollState, ScrollError> {
    match *action {
        ScrollAction::SetScale(scale) => set_scale(state, scale),
        ScrollAction::OnScroll { scroll_top } => on_scroll(state, scroll_top, config),
        ScrollAction::ScrollTo { scroll_top } => scroll_to(state, scroll_top),
        ScrollAction::AddDelta { delta } => add_delta(state, delta),
    }
}

fn finite(name: &'static str, value: f64) -> Result<f64, ScrollError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ScrollError::NonFiniteInput { name, value })
    }
}

fn set_scale(state: &ScrollState, scale: Scale) -> Result<ScrollState, ScrollError> {
    let mut next = state.clone();
    if next.virtual_base.is_none()
        && let Some(scroll_top) = next.scroll_top
    {
        // Derive the anchor so the effective virtual position matches the
        // known real position, keeping any delta accumulated before the
        // scale existed.
        next.virtual_base = Some(scale.to_virtual(scroll_top) - next.virtual_delta);
    }
    next.scale = Some(scale);
    Ok(next)
}

fn on_scroll(
    state: &ScrollState,
    scroll_top: f64,
    config: &ScrollConfig,
) -> Result<ScrollState, ScrollError> {
    let scroll_top = finite("scroll_top", scroll_top)?;
    let mut next = state.clone();
    next.is_scrolling = false;
    next.scroll_top = Some(scroll_top);

    let Some(scale) = state.scale else {
        // No coordinate mapping yet; only the raw position can be recorded.
        return Ok(next);
    };
    let max = scale.max_scroll_top();
    let anchored = scale.to_virtual(scroll_top.clamp(0.0, max));

    let (Some(prev_top), Some(_)) = (state.scroll_top, state.virtual_base) else {
        // First observation: anchor exactly.
        next.virtual_base = Some(anchored);
        next.virtual_delta = 0.0;
        return Ok(next);
    };

    let delta = scroll_top - prev_top;
    let at_rail = scroll_top <= 0.0 || scroll_top >= max;
    let large_jump = delta.abs() > config.large_jump_px
        || (state.virtual_delta + delta).abs() > config.large_jump_px;

    if at_rail || large_jump {
        #[cfg(feature = "tracing")]
        tracing::trace!(scroll_top, delta, at_rail, "re-anchoring");
        next.virtual_base = Some(anchored);
        next.virtual_delta = 0.0;
    } else {
        next.virtual_delta = state.virtual_delta + delta;
    }
    Ok(next)
}

fn scroll_to(state: &ScrollState, scroll_top: f64) -> Result<ScrollState, ScrollError> {
    let scroll_top = finite("scroll_top", scroll_top)?;
    let Some(scale) = state.scale else {
        return Err(ScrollError::ScaleNotSet);
    };
    let mut next = state.clone();
    next.is_scrolling = true;
    next.scroll_top = Some(scroll_top);
    next.virtual_base = Some(scale.to_virtual(scroll_top.clamp(0.0, scale.max_scroll_top())));
    next.virtual_delta = 0.0;
    Ok(next)
}

fn add_delta(state: &ScrollState, delta: f64) -> Result<ScrollState, ScrollError> {
    let delta = finite("delta", delta)?;
    let mut next = state.clone();
    next.virtual_delta += delta;
    Ok(next)
}
