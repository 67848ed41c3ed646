//! End-to-end scenarios against the public dispatch/snapshot surface.

use gridport_core::{
    GridScroller, Scale, ScaleParams, ScrollAction, ScrollConfig, ScrollPlan,
};

/// 10M rows compressed onto a bounded canvas: the virtual canvas tops 330M
/// virtual px while the real canvas stays around 10M.
#[test]
fn ten_million_row_geometry() {
    let scale = Scale::new(ScaleParams {
        canvas_height: 10_050_000.0,
        client_height: 100.0,
        header_height: 33.0,
        row_height: 33.0,
        num_rows: 10_000_000,
    })
    .unwrap();
    assert_eq!(scale.virtual_canvas_height(), 330_000_033.0);
    assert!(scale.factor() > 30.0 && scale.factor() < 34.0);

    let mut grid = GridScroller::with_defaults();
    grid.dispatch(&ScrollAction::SetScale(scale)).unwrap();
    grid.dispatch(&ScrollAction::OnScroll {
        scroll_top: 5_000_000.0,
    })
    .unwrap();

    let rows = grid.snapshot().unwrap().rows.unwrap();
    // Proportional position is preserved: about half way through the rows.
    let mid = rows.visible_start as f64 / 10_000_000.0;
    assert!(mid > 0.49 && mid < 0.51, "unexpected position {mid}");
    assert!(rows.rendered_len() <= 1_000);
}

/// A 50-row grid fits its canvas outright, so real and virtual coordinates
/// coincide and every position maps through unchanged.
#[test]
fn fifty_row_grid_walkthrough() {
    let config = ScrollConfig::default();
    let scale = Scale::for_grid(200.0, 20.0, 20.0, 50, &config).unwrap();
    assert_eq!(scale.factor(), 1.0);

    let mut grid = GridScroller::new(config);
    grid.dispatch(&ScrollAction::SetScale(scale)).unwrap();
    grid.dispatch(&ScrollAction::OnScroll { scroll_top: 600.0 })
        .unwrap();

    let snapshot = grid.snapshot().unwrap();
    assert_eq!(snapshot.canvas_height, Some(1_020.0));
    let rows = snapshot.rows.unwrap();
    assert_eq!(rows.visible_start, 29);

    // Rows 30..=38 sit fully inside the band below the header.
    assert_eq!(grid.plan_row_into_view(35).unwrap(), None);

    // Row 29 is clipped by the header: a 20px nudge, no scrollbar movement.
    let plan = grid.plan_row_into_view(31).unwrap().unwrap();
    assert_eq!(plan, ScrollPlan::Nudge { delta: -20.0 });
    let ScrollPlan::Nudge { delta } = plan else {
        unreachable!()
    };
    grid.dispatch(&ScrollAction::AddDelta { delta }).unwrap();
    assert_eq!(grid.state().scroll_top(), Some(600.0));
    assert_eq!(grid.plan_row_into_view(31).unwrap(), None);
}

/// A real scroll planned for a distant row, once executed and confirmed,
/// leaves the effective virtual position where the plan put it.
#[test]
fn planned_jump_round_trips_stably() {
    let config = ScrollConfig {
        large_jump_px: 100.0,
        ..ScrollConfig::default()
    };
    let scale = Scale::for_grid(200.0, 20.0, 20.0, 50, &config).unwrap();
    let mut grid = GridScroller::new(config);
    grid.dispatch(&ScrollAction::SetScale(scale)).unwrap();
    grid.dispatch(&ScrollAction::OnScroll { scroll_top: 0.0 })
        .unwrap();

    let Some(ScrollPlan::JumpTo { scroll_top }) = grid.plan_row_into_view(51).unwrap() else {
        panic!("expected a real scroll to the last row");
    };
    grid.dispatch(&ScrollAction::ScrollTo { scroll_top }).unwrap();
    let in_flight = grid.state().virtual_scroll_top().unwrap();
    assert!(grid.snapshot().unwrap().is_scrolling);

    grid.dispatch(&ScrollAction::OnScroll { scroll_top }).unwrap();
    assert!(!grid.snapshot().unwrap().is_scrolling);
    assert_eq!(grid.state().virtual_scroll_top(), Some(in_flight));
    assert_eq!(grid.plan_row_into_view(51).unwrap(), None);
}

/// Layout changes mid-session: replacing the scale keeps the user's place.
#[test]
fn growing_the_grid_keeps_the_anchor() {
    let config = ScrollConfig::default();
    let small = Scale::for_grid(200.0, 20.0, 20.0, 50, &config).unwrap();
    let mut grid = GridScroller::new(config.clone());
    grid.dispatch(&ScrollAction::SetScale(small)).unwrap();
    grid.dispatch(&ScrollAction::OnScroll { scroll_top: 400.0 })
        .unwrap();

    let grown = Scale::for_grid(200.0, 20.0, 20.0, 500, &config).unwrap();
    grid.dispatch(&ScrollAction::SetScale(grown)).unwrap();

    // The anchor survives the swap; only the canvas grew.
    assert_eq!(grid.state().virtual_scroll_top(), Some(400.0));
    assert_eq!(grid.snapshot().unwrap().canvas_height, Some(10_020.0));
    let rows = grid.snapshot().unwrap().rows.unwrap();
    assert_eq!(rows.visible_start, 19);
}

#[test]
fn empty_grid_renders_nothing() {
    let config = ScrollConfig::default();
    let scale = Scale::for_grid(40.0, 50.0, 20.0, 0, &config).unwrap();
    let mut grid = GridScroller::new(config);
    grid.dispatch(&ScrollAction::SetScale(scale)).unwrap();
    grid.dispatch(&ScrollAction::OnScroll { scroll_top: 0.0 })
        .unwrap();

    let rows = grid.snapshot().unwrap().rows.unwrap();
    assert_eq!(rows.visible_start, 0);
    assert_eq!(rows.visible_end, 0);
    assert_eq!(rows.rendered_len(), 0);
}
