#![forbid(unsafe_code)]

//! Virtual-scroll coordinate engine for data grids with very large row counts.
//!
//! A grid over millions of rows cannot give the browser a canvas tall enough
//! to hold them: engines cap scrollable element heights. This crate
//! reconciles the bounded real scroll range with the unbounded logical row
//! space. From the current scroll position it derives which rows to mount
//! and the scroll needed to bring an arbitrary row into view. It is a pure,
//! synchronous state machine with no rendering or DOM concerns; the host
//! owns the scroll container and feeds native events in as actions.
//!
//! # Pieces
//!
//! - [`Scale`] is the immutable mapping between real and virtual pixel
//!   spaces.
//! - [`ScrollState`] and [`reduce`] form the anchor/delta state cell and its
//!   action vocabulary ([`ScrollAction`]).
//! - [`RowWindow`] / [`row_window`] decide which rows to mount and where.
//! - [`ScrollPlan`] / [`plan_row_into_view`] bring a row into view.
//! - [`GridScroller`] bundles the above behind a dispatch/snapshot surface.
//!
//! # Example
//!
//! ```
//! use gridport_core::{GridScroller, Scale, ScrollAction, ScrollConfig};
//!
//! let config = ScrollConfig::default();
//! let scale = Scale::for_grid(200.0, 20.0, 20.0, 50, &config).unwrap();
//!
//! let mut grid = GridScroller::new(config);
//! grid.dispatch(&ScrollAction::SetScale(scale)).unwrap();
//! grid.dispatch(&ScrollAction::OnScroll { scroll_top: 600.0 }).unwrap();
//!
//! let rows = grid.snapshot().unwrap().rows.unwrap();
//! assert_eq!(rows.visible_start, 29);
//! ```

pub mod config;
pub mod error;
pub mod planner;
pub mod scale;
pub mod scroller;
pub mod state;
pub mod window;

pub use config::ScrollConfig;
pub use error::{GeometryError, ScrollError};
pub use planner::{ScrollPlan, plan_row_into_view};
pub use scale::{Scale, ScaleParams};
pub use scroller::{GridScroller, GridSnapshot};
pub use state::{ScrollAction, ScrollState, reduce};
pub use window::{RowWindow, row_window};
