//! Measurement helpers shared by the reconciler and the hosts.
//!
//! Rendered sizes always come from the host's computed layout, never from
//! attributes. Callers must only measure elements that are attached.

use crate::host::HostDocument;

/// Parse a CSS pixel length (`"120px"`, `"120.5px"`, `"0"`).
pub fn parse_px(value: &str) -> Option<f64> {
    let value = value.trim();
    let number = value.strip_suffix("px").unwrap_or(value).trim();
    number.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Format a pixel length for an inline style.
pub fn px(value: f64) -> String {
    format!("{value}px")
}

/// Cells of the first row of `table`: its `th` children, or its `td`
/// children when the row has no header cells.
pub fn first_row_cells<D: HostDocument>(doc: &D, table: &D::Element) -> Vec<D::Element> {
    doc.elements_by_tag(table, "tr")
        .first()
        .map(|row| row_cells(doc, row))
        .unwrap_or_default()
}

/// Header cells of `row` if it has any, else its data cells.
pub fn row_cells<D: HostDocument>(doc: &D, row: &D::Element) -> Vec<D::Element> {
    let children = doc.child_elements(row);
    let of_tag = |tag: &str| -> Vec<D::Element> {
        children
            .iter()
            .filter(|c| doc.tag_name(c) == tag)
            .cloned()
            .collect()
    };
    let headers = of_tag("th");
    if headers.is_empty() {
        of_tag("td")
    } else {
        headers
    }
}

/// Rendered widths of the first-row cells of `table`.
pub fn column_widths<D: HostDocument>(doc: &D, table: &D::Element) -> Vec<f64> {
    first_row_cells(doc, table)
        .iter()
        .map(|cell| doc.computed_width(cell))
        .collect()
}

/// Space taken by the vertical scrollbar (`offsetWidth - clientWidth`).
pub fn vertical_scrollbar_width<D: HostDocument>(doc: &D, element: &D::Element) -> f64 {
    let (offset, _) = doc.offset_size(element);
    let (client, _) = doc.client_size(element);
    (offset - client).max(0.0)
}

/// Space taken by the horizontal scrollbar (`offsetHeight - clientHeight`).
pub fn horizontal_scrollbar_height<D: HostDocument>(doc: &D, element: &D::Element) -> f64 {
    let (_, offset) = doc.offset_size(element);
    let (_, client) = doc.client_size(element);
    (offset - client).max(0.0)
}
