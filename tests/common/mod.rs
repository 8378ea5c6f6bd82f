//! Common test utilities and assertion helpers.
//!
//! Helpers for attaching a scroller to a fixture table and reading back what
//! ended up in each pane.
#![allow(
    dead_code,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::panic
)]

use tablescroller::{attach, HostDocument, MemoryDocument, NodeId, ScrollerOptions, ScrollerPanes};

// Re-export fixtures for convenience
pub use super::fixtures::*;

// ============================================================================
// Attach Helpers
// ============================================================================

/// Build a `rows` x `cols` grid and attach a scroller with `options`.
pub fn attach_grid(
    rows: usize,
    cols: usize,
    options: &ScrollerOptions,
) -> (MemoryDocument, NodeId, ScrollerPanes<MemoryDocument>) {
    let (doc, table) = TableBuilder::grid(rows, cols).build();
    let scroller = attach(&doc, Some(&table), Some(options)).expect("attach");
    (doc, table, scroller)
}

// ============================================================================
// Content Helpers
// ============================================================================

/// Cell texts of `table`, row by row.
pub fn cell_texts(doc: &MemoryDocument, table: &NodeId) -> Vec<Vec<String>> {
    doc.elements_by_tag(table, "tr")
        .iter()
        .map(|row| {
            doc.child_elements(row)
                .iter()
                .filter(|cell| matches!(doc.tag_name(cell).as_str(), "td" | "th"))
                .map(|cell| doc.text(cell))
                .collect()
        })
        .collect()
}

/// Every cell text of `table`, flattened.
pub fn all_texts(doc: &MemoryDocument, table: &NodeId) -> Vec<String> {
    cell_texts(doc, table).into_iter().flatten().collect()
}

/// Number of elements under `root` (inclusive) whose id is `id`.
pub fn count_id(doc: &MemoryDocument, root: &NodeId, id: &str) -> usize {
    let own = usize::from(doc.attribute(root, "id").as_deref() == Some(id));
    let descendants = ["table", "thead", "tbody", "tfoot", "tr", "th", "td", "div"]
        .iter()
        .flat_map(|tag| doc.elements_by_tag(root, tag))
        .filter(|el| doc.attribute(el, "id").as_deref() == Some(id))
        .count();
    own + descendants
}

// ============================================================================
// Assertions
// ============================================================================

/// Assert two lengths agree to within a hundredth of a pixel.
pub fn assert_px(actual: f64, expected: f64, what: &str) {
    assert!(
        (actual - expected).abs() < 0.01,
        "{what}: expected {expected}px, got {actual}px"
    );
}

/// Assert an inline style length.
pub fn assert_style_px(doc: &MemoryDocument, element: &NodeId, property: &str, expected: f64) {
    let actual = doc
        .style_px(element, property)
        .unwrap_or_else(|| panic!("no inline {property}"));
    assert_px(actual, expected, property);
}
