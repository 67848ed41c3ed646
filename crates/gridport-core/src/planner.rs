#![forbid(unsafe_code)]

//! Planning the scroll needed to bring a row fully into view.
//!
//! Row indices here are 1-based grid rows, matching the accessible-grid
//! convention: row 1 is the header, row `num_rows + 1` the last data row.
//!
//! The planner distinguishes two outcomes. A marginally clipped row gets a
//! [`ScrollPlan::Nudge`], applied through
//! [`ScrollAction::AddDelta`](crate::state::ScrollAction): the virtual
//! position shifts but the real scrollbar stays put, so moving keyboard
//! focus by one row never visibly jumps the thumb. A distant row gets a
//! [`ScrollPlan::JumpTo`], a real scroll the host must execute; the engine
//! re-anchors through the `ScrollTo`/`OnScroll` pair that follows.

use crate::config::ScrollConfig;
use crate::error::ScrollError;
use crate::state::ScrollState;

/// How to bring a target row into view.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ScrollPlan {
    /// Execute a real scroll to this position against the host viewport.
    JumpTo { scroll_top: f64 },
    /// Dispatch this delta via `AddDelta`; the scrollbar does not move.
    Nudge { delta: f64 },
}

/// Compute the action (if any) that brings `grid_row` fully into view.
///
/// Returns `Ok(None)` when the row is already fully visible, or when it is
/// the header row, which never needs scrolling. A missing scale or anchor is
/// a sequencing defect in the caller and fails fast.
pub fn plan_row_into_view(
    state: &ScrollState,
    config: &ScrollConfig,
    grid_row: usize,
) -> Result<Option<ScrollPlan>, ScrollError> {
    let Some(scale) = state.scale() else {
        return Err(ScrollError::ScaleNotSet);
    };
    let p = scale.params();
    let max = p.num_rows + 1;
    if grid_row < 1 || grid_row > max {
        return Err(ScrollError::RowIndexOutOfRange { grid_row, max });
    }
    if grid_row == 1 {
        return Ok(None);
    }
    let Some(virtual_scroll_top) = state.virtual_scroll_top() else {
        return Err(ScrollError::AnchorNotSet);
    };
    if !virtual_scroll_top.is_finite() {
        return Err(ScrollError::NonFiniteInput {
            name: "virtual_scroll_top",
            value: virtual_scroll_top,
        });
    }

    let row = (grid_row - 2) as f64;
    let top = p.header_height + row * p.row_height;
    let bottom = top + p.row_height;

    // The header band occupies the top of the viewport, so rows are judged
    // against the band below it.
    let hidden_before = virtual_scroll_top + p.header_height - top;
    let hidden_after = bottom - (virtual_scroll_top + p.client_height);
    if hidden_before <= 0.0 && hidden_after <= 0.0 {
        return Ok(None);
    }

    let raw_delta = if hidden_before > 0.0 {
        -hidden_before
    } else {
        hidden_after
    };

    if raw_delta.abs() > config.large_jump_px
        || (state.virtual_delta() + raw_delta).abs() > config.large_jump_px
    {
        let scroll_top = scale.from_virtual(virtual_scroll_top + raw_delta);
        if !scroll_top.is_finite() {
            return Err(ScrollError::NonFiniteInput {
                name: "scroll_top",
                value: scroll_top,
            });
        }
        #[cfg(feature = "tracing")]
        tracing::debug!(grid_row, scroll_top, "planning real scroll");
        Ok(Some(ScrollPlan::JumpTo { scroll_top }))
    } else {
        #[cfg(feature = "tracing")]
        tracing::trace!(grid_row, delta = raw_delta, "planning nudge");
        Ok(Some(ScrollPlan::Nudge { delta: raw_delta }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scale::Scale;
    use crate::state::{ScrollAction, reduce};

    fn grid_state(scroll_top: f64) -> ScrollState {
        let config = ScrollConfig::default();
        let scale = Scale::for_grid(200.0, 20.0, 20.0, 50, &config).unwrap();
        let state = reduce(&ScrollState::new(), &ScrollAction::SetScale(scale), &config).unwrap();
        reduce(&state, &ScrollAction::OnScroll { scroll_top }, &config).unwrap()
    }

    // Anchored at 600: the band below the header shows virtual 620..800,
    // i.e. rows 30..=38 fully, with rows 29 and 39 clipped.

    #[test]
    fn header_row_never_needs_scrolling() {
        let plan = plan_row_into_view(&grid_state(600.0), &ScrollConfig::default(), 1).unwrap();
        assert_eq!(plan, None);
    }

    #[test]
    fn fully_visible_row_needs_no_action() {
        let state = grid_state(600.0);
        for grid_row in [32, 36, 40] {
            let plan = plan_row_into_view(&state, &ScrollConfig::default(), grid_row).unwrap();
            assert_eq!(plan, None, "grid row {grid_row} should be visible");
        }
    }

    #[test]
    fn row_clipped_above_gets_upward_nudge() {
        // Row 29 (grid row 31) starts at virtual 600, 20px behind the header.
        let plan = plan_row_into_view(&grid_state(600.0), &ScrollConfig::default(), 31).unwrap();
        assert_eq!(plan, Some(ScrollPlan::Nudge { delta: -20.0 }));
    }

    #[test]
    fn row_clipped_below_gets_downward_nudge() {
        // Row 39 (grid row 41) ends at virtual 820, 20px past the viewport.
        let plan = plan_row_into_view(&grid_state(600.0), &ScrollConfig::default(), 41).unwrap();
        assert_eq!(plan, Some(ScrollPlan::Nudge { delta: 20.0 }));
    }

    #[test]
    fn distant_row_gets_real_scroll() {
        let config = ScrollConfig {
            large_jump_px: 100.0,
            ..ScrollConfig::default()
        };
        // Last row is 220 virtual px below the viewport bottom.
        let plan = plan_row_into_view(&grid_state(600.0), &config, 51).unwrap();
        assert_eq!(plan, Some(ScrollPlan::JumpTo { scroll_top: 820.0 }));
    }

    #[test]
    fn real_scroll_round_trips_to_no_action() {
        let config = ScrollConfig {
            large_jump_px: 100.0,
            ..ScrollConfig::default()
        };
        let state = grid_state(600.0);
        let Some(ScrollPlan::JumpTo { scroll_top }) =
            plan_row_into_view(&state, &config, 51).unwrap()
        else {
            panic!("expected a real scroll");
        };
        let state = reduce(&state, &ScrollAction::ScrollTo { scroll_top }, &config).unwrap();
        let state = reduce(&state, &ScrollAction::OnScroll { scroll_top }, &config).unwrap();
        assert_eq!(state.virtual_scroll_top(), Some(820.0));
        let plan = plan_row_into_view(&state, &config, 51).unwrap();
        assert_eq!(plan, None);
    }

    #[test]
    fn nudge_round_trips_to_no_action() {
        let state = grid_state(600.0);
        let config = ScrollConfig::default();
        let Some(ScrollPlan::Nudge { delta }) = plan_row_into_view(&state, &config, 31).unwrap()
        else {
            panic!("expected a nudge");
        };
        let state = reduce(&state, &ScrollAction::AddDelta { delta }, &config).unwrap();
        assert_eq!(plan_row_into_view(&state, &config, 31).unwrap(), None);
        // The scrollbar did not move.
        assert_eq!(state.scroll_top(), Some(600.0));
    }

    #[test]
    fn out_of_range_indices_are_rejected() {
        let state = grid_state(600.0);
        for grid_row in [0, 52, 1_000] {
            let err = plan_row_into_view(&state, &ScrollConfig::default(), grid_row).unwrap_err();
            assert!(
                matches!(err, ScrollError::RowIndexOutOfRange { .. }),
                "grid row {grid_row} should be rejected"
            );
        }
    }

    #[test]
    fn planner_before_scale_is_an_error() {
        let err = plan_row_into_view(&ScrollState::new(), &ScrollConfig::default(), 2).unwrap_err();
        assert_eq!(err, ScrollError::ScaleNotSet);
    }

    #[test]
    fn planner_before_anchor_is_an_error() {
        let config = ScrollConfig::default();
        let scale = Scale::for_grid(200.0, 20.0, 20.0, 50, &config).unwrap();
        let state = reduce(&ScrollState::new(), &ScrollAction::SetScale(scale), &config).unwrap();
        let err = plan_row_into_view(&state, &config, 2).unwrap_err();
        assert_eq!(err, ScrollError::AnchorNotSet);
    }
}
