#![forbid(unsafe_code)]

//! Scripted host viewport and the driver that wires it to the engine.

use gridport_core::{GridScroller, GridSnapshot, Scale, ScrollAction, ScrollError, ScrollPlan};

/// A stand-in for the real DOM scroll container.
///
/// Mimics the one behavior the engine relies on: `scroll_to` clamps to the
/// scrollable range, and whatever position the viewport lands on is what the
/// subsequent native notification reports.
#[derive(Debug, Clone)]
pub struct SimViewport {
    scroll_top: f64,
    client_height: f64,
    max_scroll_top: f64,
}

impl SimViewport {
    /// Viewport at rest at the top.
    #[must_use]
    pub fn new(client_height: f64, max_scroll_top: f64) -> Self {
        Self {
            scroll_top: 0.0,
            client_height,
            max_scroll_top,
        }
    }

    /// Current scroll position.
    #[must_use]
    pub fn scroll_top(&self) -> f64 {
        self.scroll_top
    }

    /// Viewport height.
    #[must_use]
    pub fn client_height(&self) -> f64 {
        self.client_height
    }

    /// Largest reachable scroll position.
    #[must_use]
    pub fn max_scroll_top(&self) -> f64 {
        self.max_scroll_top
    }

    /// Scroll to an absolute position; returns where the viewport landed.
    pub fn scroll_to(&mut self, top: f64) -> f64 {
        self.scroll_top = top.clamp(0.0, self.max_scroll_top);
        self.scroll_top
    }

    /// Scroll by a wheel delta; returns where the viewport landed.
    pub fn wheel(&mut self, delta_px: f64) -> f64 {
        self.scroll_to(self.scroll_top + delta_px)
    }
}

/// Wires a [`SimViewport`] to a [`GridScroller`], playing the embedder role:
/// native scrolls are forwarded as `OnScroll`, and scroll plans are executed
/// the way the engine expects (`Nudge` via `AddDelta`; `JumpTo` via the
/// viewport followed by `ScrollTo` and the confirming `OnScroll`).
#[derive(Debug, Clone)]
pub struct GridDriver {
    scroller: GridScroller,
    viewport: SimViewport,
}

impl GridDriver {
    /// Build a driver for the given geometry and install the scale.
    ///
    /// Like a real embedder, the driver reports the initial scroll position
    /// at mount, so the engine is anchored from the start.
    pub fn new(scale: Scale, mut scroller: GridScroller) -> Result<Self, ScrollError> {
        let params = scale.params();
        scroller.dispatch(&ScrollAction::SetScale(scale))?;
        let viewport = SimViewport::new(params.client_height, scale.max_scroll_top());
        let mut driver = Self { scroller, viewport };
        driver.notify_scroll()?;
        Ok(driver)
    }

    fn notify_scroll(&mut self) -> Result<(), ScrollError> {
        self.scroller.dispatch(&ScrollAction::OnScroll {
            scroll_top: self.viewport.scroll_top(),
        })
    }

    /// Scroll by a wheel delta and deliver the native notification.
    pub fn wheel(&mut self, delta_px: f64) -> Result<(), ScrollError> {
        self.viewport.wheel(delta_px);
        self.notify_scroll()
    }

    /// Drag the scrollbar to an absolute position and deliver the native
    /// notification.
    pub fn drag_to(&mut self, scroll_top: f64) -> Result<(), ScrollError> {
        self.viewport.scroll_to(scroll_top);
        self.notify_scroll()
    }

    /// Move focus to a grid row, executing whatever plan the engine produces.
    /// Returns the plan for assertions.
    pub fn focus_row(&mut self, grid_row: usize) -> Result<Option<ScrollPlan>, ScrollError> {
        let plan = self.scroller.plan_row_into_view(grid_row)?;
        match plan {
            Some(ScrollPlan::JumpTo { scroll_top }) => {
                let landed = self.viewport.scroll_to(scroll_top);
                self.scroller
                    .dispatch(&ScrollAction::ScrollTo { scroll_top: landed })?;
                self.notify_scroll()?;
            }
            Some(ScrollPlan::Nudge { delta }) => {
                self.scroller.dispatch(&ScrollAction::AddDelta { delta })?;
            }
            None => {}
        }
        Ok(plan)
    }

    /// Snapshot the engine.
    pub fn snapshot(&self) -> Result<GridSnapshot, ScrollError> {
        self.scroller.snapshot()
    }

    /// The engine side.
    #[must_use]
    pub fn scroller(&self) -> &GridScroller {
        &self.scroller
    }

    /// The host side.
    #[must_use]
    pub fn viewport(&self) -> &SimViewport {
        &self.viewport
    }
}
