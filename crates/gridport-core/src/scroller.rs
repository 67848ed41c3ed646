#![forbid(unsafe_code)]

//! Action dispatch and the read-only snapshot surface.

use crate::config::ScrollConfig;
use crate::error::ScrollError;
use crate::planner::{ScrollPlan, plan_row_into_view};
use crate::state::{ScrollAction, ScrollState, reduce};
use crate::window::{RowWindow, row_window};

/// Owner of the single scroll-state cell.
///
/// Everything the rendering layer needs flows through [`dispatch`](Self::dispatch)
/// (inputs) and [`snapshot`](Self::snapshot) (outputs). A failed dispatch
/// leaves the previous state untouched.
#[derive(Debug, Clone)]
pub struct GridScroller {
    state: ScrollState,
    config: ScrollConfig,
}

/// Read-only view of the engine for one frame.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridSnapshot {
    /// Height the host should give the real scroll canvas, once known.
    pub canvas_height: Option<f64>,
    /// Rows to mount, once a scale and an anchor exist.
    pub rows: Option<RowWindow>,
    /// Whether a programmatic scroll is in flight.
    pub is_scrolling: bool,
}

impl GridScroller {
    /// Create a scroller with the given tuning.
    #[must_use]
    pub fn new(config: ScrollConfig) -> Self {
        Self {
            state: ScrollState::new(),
            config,
        }
    }

    /// Create a scroller with default tuning.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self::new(ScrollConfig::default())
    }

    /// Process one action, replacing the state wholesale.
    pub fn dispatch(&mut self, action: &ScrollAction) -> Result<(), ScrollError> {
        self.state = reduce(&self.state, action, &self.config)?;
        Ok(())
    }

    /// Snapshot the current frame.
    pub fn snapshot(&self) -> Result<GridSnapshot, ScrollError> {
        Ok(GridSnapshot {
            canvas_height: self.state.scale().map(|s| s.params().canvas_height),
            rows: row_window(&self.state, &self.config)?,
            is_scrolling: self.state.is_scrolling(),
        })
    }

    /// Compute the action (if any) that brings `grid_row` fully into view.
    pub fn plan_row_into_view(&self, grid_row: usize) -> Result<Option<ScrollPlan>, ScrollError> {
        plan_row_into_view(&self.state, &self.config, grid_row)
    }

    /// Current state.
    #[must_use]
    pub fn state(&self) -> &ScrollState {
        &self.state
    }

    /// Current tuning.
    #[must_use]
    pub fn config(&self) -> &ScrollConfig {
        &self.config
    }

    /// Replace the tuning for subsequent actions.
    pub fn set_config(&mut self, config: ScrollConfig) {
        self.config = config;
    }
}
