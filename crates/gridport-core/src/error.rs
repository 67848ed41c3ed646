#![forbid(unsafe_code)]

//! Fail-fast error types.
//!
//! Every error here represents a caller or configuration defect (impossible
//! geometry, stale row counts, out-of-range indices), never a transient
//! runtime fault. Violations are surfaced immediately and are not meant to be
//! recovered from; nothing is silently clamped or swallowed.

use std::fmt;

/// Rejected [`Scale`](crate::scale::Scale) construction inputs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GeometryError {
    /// A dimension is NaN or infinite.
    NonFiniteDimension { name: &'static str, value: f64 },
    /// A dimension that must be strictly positive is not.
    NonPositiveDimension { name: &'static str, value: f64 },
    /// The real canvas does not extend past the viewport.
    CanvasNotScrollable {
        canvas_height: f64,
        client_height: f64,
    },
    /// The virtual canvas does not extend past the viewport.
    VirtualCanvasNotScrollable {
        virtual_canvas_height: f64,
        client_height: f64,
    },
}

impl fmt::Display for GeometryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonFiniteDimension { name, value } => {
                write!(f, "{name} must be finite, got {value}")
            }
            Self::NonPositiveDimension { name, value } => {
                write!(f, "{name} must be > 0, got {value}")
            }
            Self::CanvasNotScrollable {
                canvas_height,
                client_height,
            } => write!(
                f,
                "canvas height {canvas_height} must exceed client height {client_height}"
            ),
            Self::VirtualCanvasNotScrollable {
                virtual_canvas_height,
                client_height,
            } => write!(
                f,
                "virtual canvas height {virtual_canvas_height} must exceed client height {client_height}"
            ),
        }
    }
}

impl std::error::Error for GeometryError {}

/// Errors from the reducer, the row-window calculator, and the planner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScrollError {
    /// Invalid geometry while building or replacing a scale.
    Geometry(GeometryError),
    /// An action or derived intermediate is NaN or infinite.
    NonFiniteInput { name: &'static str, value: f64 },
    /// The operation needs a scale, but none has been installed.
    ScaleNotSet,
    /// The operation needs an anchor, but no scroll position has been
    /// observed yet.
    AnchorNotSet,
    /// A 1-based grid row index outside `[1, num_rows + 1]`.
    RowIndexOutOfRange { grid_row: usize, max: usize },
    /// The padded row window exceeds the configured ceiling.
    WindowOverCeiling { rows: usize, limit: usize },
    /// The computed row window violates its own bounds; indicates an
    /// inconsistency between the installed scale and the scroll state.
    WindowInconsistent {
        visible_start: usize,
        visible_end: usize,
        num_rows: usize,
    },
}

impl From<GeometryError> for ScrollError {
    fn from(err: GeometryError) -> Self {
        Self::Geometry(err)
    }
}

impl fmt::Display for ScrollError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Geometry(err) => write!(f, "invalid geometry: {err}"),
            Self::NonFiniteInput { name, value } => {
                write!(f, "{name} must be finite, got {value}")
            }
            Self::ScaleNotSet => write!(f, "no scale installed"),
            Self::AnchorNotSet => write!(f, "no scroll position observed yet"),
            Self::RowIndexOutOfRange { grid_row, max } => {
                write!(f, "grid row {grid_row} out of range 1..={max}")
            }
            Self::WindowOverCeiling { rows, limit } => write!(
                f,
                "rendered row window of {rows} rows exceeds the ceiling of {limit}"
            ),
            Self::WindowInconsistent {
                visible_start,
                visible_end,
                num_rows,
            } => write!(
                f,
                "row window {visible_start}..{visible_end} inconsistent with {num_rows} rows"
            ),
        }
    }
}

impl std::error::Error for ScrollError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Geometry(err) => Some(err),
            _ => None,
        }
    }
}
