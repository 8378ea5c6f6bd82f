//! Tests for mirroring body scrolling into the header panes.
//!
//! Horizontal body scroll moves the column header, vertical body scroll
//! moves the row header, and the corner never moves.
#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::panic
)]

mod common;
mod fixtures;

use common::attach_grid;
use fixtures::TableBuilder;
use tablescroller::{attach, HostDocument, ScrollSync, ScrollerOptions};

fn pinned_2_1() -> ScrollerOptions {
    ScrollerOptions::new().with_pinned(2, 1).with_size(200.0, 150.0)
}

// ============================================================================
// Following the Body
// ============================================================================

#[test]
fn test_headers_follow_body_scroll() {
    let (doc, _, scroller) = attach_grid(12, 8, &pinned_2_1());
    assert!(scroller.is_synced());

    doc.scroll_to(&scroller.body().frame, 50.0, 30.0);

    assert_eq!(doc.scroll_offset(&scroller.body().frame), (50.0, 30.0));
    assert_eq!(
        doc.scroll_offset(&scroller.column_header().unwrap().frame),
        (50.0, 0.0)
    );
    assert_eq!(
        doc.scroll_offset(&scroller.row_header().unwrap().frame),
        (0.0, 30.0)
    );
    assert_eq!(doc.scroll_offset(&scroller.corner().unwrap().frame), (0.0, 0.0));
}

#[test]
fn test_headers_track_repeated_scrolls() {
    let (doc, _, scroller) = attach_grid(12, 8, &pinned_2_1());
    let body = scroller.body().frame;
    let column_header = scroller.column_header().unwrap().frame;
    let row_header = scroller.row_header().unwrap().frame;

    for (x, y) in [(10.0, 5.0), (120.0, 60.0), (0.0, 0.0), (33.5, 12.25)] {
        doc.scroll_to(&body, x, y);
        assert_eq!(doc.scroll_offset(&column_header).0, x);
        assert_eq!(doc.scroll_offset(&row_header).1, y);
    }
}

#[test]
fn test_headers_reach_the_end_with_the_body() {
    let (doc, _, scroller) = attach_grid(12, 8, &pinned_2_1());
    let body = scroller.body().frame;
    let column_header = scroller.column_header().unwrap().frame;
    let row_header = scroller.row_header().unwrap().frame;

    doc.scroll_to(&body, 10_000.0, 10_000.0);
    let (max_x, max_y) = doc.max_scroll(&body);
    assert!(max_x > 0.0 && max_y > 0.0);
    assert_eq!(doc.scroll_offset(&body), (max_x, max_y));

    // Headers are sized so their last column/row lines up with the body's.
    assert_eq!(doc.max_scroll(&column_header).0, max_x);
    assert_eq!(doc.max_scroll(&row_header).1, max_y);
    assert_eq!(doc.scroll_offset(&column_header).0, max_x);
    assert_eq!(doc.scroll_offset(&row_header).1, max_y);
}

#[test]
fn test_rows_only_syncs_column_header() {
    let options = ScrollerOptions::new().with_pinned(1, 0).with_size(150.0, 100.0);
    let (doc, _, scroller) = attach_grid(12, 8, &options);
    assert!(scroller.is_synced());
    assert!(scroller.row_header().is_none());

    doc.scroll_to(&scroller.body().frame, 40.0, 25.0);
    assert_eq!(
        doc.scroll_offset(&scroller.column_header().unwrap().frame),
        (40.0, 0.0)
    );
}

#[test]
fn test_columns_only_syncs_row_header() {
    let options = ScrollerOptions::new().with_pinned(0, 1).with_size(150.0, 100.0);
    let (doc, _, scroller) = attach_grid(12, 8, &options);
    assert!(scroller.column_header().is_none());

    doc.scroll_to(&scroller.body().frame, 40.0, 25.0);
    assert_eq!(
        doc.scroll_offset(&scroller.row_header().unwrap().frame),
        (0.0, 25.0)
    );
}

// ============================================================================
// Degenerate and Lifetime Cases
// ============================================================================

#[test]
fn test_nothing_pinned_has_no_listener() {
    let options = ScrollerOptions::new().with_pinned(0, 0).with_size(200.0, 150.0);
    let (doc, _, scroller) = attach_grid(12, 8, &options);

    assert!(!scroller.is_synced());
    assert_eq!(doc.listener_count(&scroller.body().frame), 0);
    assert_eq!(doc.computed_width(&scroller.body().frame), 200.0);
    assert_eq!(doc.computed_height(&scroller.body().frame), 150.0);

    // Scrolling still works, there is simply nothing to follow.
    doc.scroll_to(&scroller.body().frame, 50.0, 30.0);
    assert_eq!(doc.scroll_offset(&scroller.body().frame), (50.0, 30.0));
}

#[test]
fn test_dropping_scroller_unregisters_listener() {
    let (doc, _, scroller) = attach_grid(12, 8, &pinned_2_1());
    let body = scroller.body().frame;
    let column_header = scroller.column_header().unwrap().frame;
    assert_eq!(doc.listener_count(&body), 1);

    drop(scroller);
    assert_eq!(doc.listener_count(&body), 0);

    doc.scroll_to(&body, 50.0, 30.0);
    assert_eq!(doc.scroll_offset(&column_header), (0.0, 0.0));
}

#[test]
fn test_programmatic_body_scroll_does_not_dispatch() {
    let (doc, _, scroller) = attach_grid(12, 8, &pinned_2_1());
    let body = scroller.body().frame;
    let column_header = scroller.column_header().unwrap().frame;

    doc.set_scroll_left(&body, 80.0);
    assert_eq!(doc.scroll_offset(&column_header).0, 0.0);

    // An explicit apply catches the headers up.
    ScrollSync::new(&doc, scroller.panes()).apply();
    assert_eq!(doc.scroll_offset(&column_header).0, 80.0);
}

#[test]
fn test_two_scrollers_are_independent() {
    let (doc, table) = TableBuilder::grid(12, 8).build();
    let options = pinned_2_1();
    let first = attach(&doc, Some(&table), Some(&options)).unwrap();
    let second = attach(&doc, Some(&table), Some(&options)).unwrap();
    assert_ne!(first.mount(), second.mount());

    doc.scroll_to(&first.body().frame, 60.0, 20.0);
    assert_eq!(doc.scroll_offset(&first.column_header().unwrap().frame).0, 60.0);
    assert_eq!(doc.scroll_offset(&second.column_header().unwrap().frame).0, 0.0);
}
