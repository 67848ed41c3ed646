#![forbid(unsafe_code)]

//! Derived row range: which rows to mount and where to place them.
//!
//! Nothing here is stored; the window is recomputed on demand from the
//! current [`ScrollState`](crate::state::ScrollState). The rendered block is
//! positioned in real (bounded) coordinates near the current viewport, never
//! in raw virtual coordinates, so the host's layout math stays within safe
//! pixel magnitudes.

use crate::config::ScrollConfig;
use crate::error::ScrollError;
use crate::state::ScrollState;

/// The rows to mount for the current scroll position.
///
/// Starts are inclusive, ends exclusive. The rendered range extends the
/// visible range by up to the configured padding on each side, clamped to
/// `[0, num_rows]`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RowWindow {
    /// First row intersecting the viewport.
    pub visible_start: usize,
    /// Past the last row intersecting the viewport.
    pub visible_end: usize,
    /// First row to mount, including padding.
    pub rendered_start: usize,
    /// Past the last row to mount, including padding.
    pub rendered_end: usize,
    /// Real-coordinate offset for the rendered block (header plus rows
    /// `rendered_start..rendered_end`); present once a real scroll position
    /// has been observed.
    pub slice_top: Option<f64>,
}

impl RowWindow {
    /// Number of rows intersecting the viewport.
    #[must_use]
    pub fn visible_len(&self) -> usize {
        self.visible_end.saturating_sub(self.visible_start)
    }

    /// Number of rows to mount.
    #[must_use]
    pub fn rendered_len(&self) -> usize {
        self.rendered_end.saturating_sub(self.rendered_start)
    }
}

/// Floor a pixel quotient into a row index clamped to `[0, max]`.
fn row_index(raw: f64, max: usize) -> usize {
    if raw <= 0.0 {
        0
    } else {
        (raw as usize).min(max)
    }
}

/// Compute the row window for the current state.
///
/// Returns `Ok(None)` until both a scale and an anchor exist (nothing is
/// known yet; the renderer should show an empty state). Errors indicate a
/// misconfigured caller or an inconsistency between scale and state, never a
/// recoverable runtime condition.
pub fn row_window(
    state: &ScrollState,
    config: &ScrollConfig,
) -> Result<Option<RowWindow>, ScrollError> {
    let (Some(scale), Some(virtual_scroll_top)) = (state.scale(), state.virtual_scroll_top())
    else {
        return Ok(None);
    };
    if !virtual_scroll_top.is_finite() {
        return Err(ScrollError::NonFiniteInput {
            name: "virtual_scroll_top",
            value: virtual_scroll_top,
        });
    }

    let p = scale.params();
    let num_rows = p.num_rows;
    // The viewport still shows (part of) the header band when the virtual
    // position has not moved past it.
    let in_header_band = num_rows == 0 || virtual_scroll_top < p.header_height;

    let (visible_start, hidden_before) = if in_header_band {
        (0, virtual_scroll_top)
    } else {
        let raw = ((virtual_scroll_top - p.header_height) / p.row_height).floor();
        let start = row_index(raw, num_rows - 1);
        (
            start,
            virtual_scroll_top - p.header_height - start as f64 * p.row_height,
        )
    };

    let visible_end = if num_rows == 0 {
        0
    } else {
        let raw =
            ((virtual_scroll_top + p.client_height - p.header_height) / p.row_height).floor();
        row_index(raw, num_rows - 1).max(visible_start) + 1
    };

    let rendered_start = visible_start.saturating_sub(config.padding_rows);
    let rendered_end = (visible_end + config.padding_rows).min(num_rows);

    if visible_start > visible_end
        || visible_end > num_rows
        || rendered_start > visible_start
        || rendered_end < visible_end
    {
        return Err(ScrollError::WindowInconsistent {
            visible_start,
            visible_end,
            num_rows,
        });
    }
    let rendered = rendered_end - rendered_start;
    if rendered > config.max_rendered_rows {
        return Err(ScrollError::WindowOverCeiling {
            rows: rendered,
            limit: config.max_rendered_rows,
        });
    }

    let slice_top = match state.scroll_top() {
        Some(scroll_top) => {
            let mut top = scroll_top - hidden_before;
            if !in_header_band {
                top -= p.header_height;
            }
            top -= (visible_start - rendered_start) as f64 * p.row_height;
            if !top.is_finite() {
                return Err(ScrollError::NonFiniteInput {
                    name: "slice_top",
                    value: top,
                });
            }
            Some(top)
        }
        None => None,
    };

    Ok(Some(RowWindow {
        visible_start,
        visible_end,
        rendered_start,
        rendered_end,
        slice_top,
    }))
}
