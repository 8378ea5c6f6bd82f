//! Dimension reconciliation between panes that share a seam.
//!
//! Panes are laid out independently, so after mounting their column widths
//! and frame sizes are brought into agreement in a fixed order. Each step
//! reads sizes produced by the previous ones; the order is part of the
//! behaviour.

use serde::Serialize;

use super::assemble::Panes;
use super::measure::{
    first_row_cells, horizontal_scrollbar_height, px, vertical_scrollbar_width,
};
use crate::error::Result;
use crate::host::HostDocument;
use crate::types::ScrollerConfig;

/// Frame sizes fixed by [`reconcile`].
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameSizes {
    pub body_width: f64,
    pub body_height: f64,
    /// Height forced onto the column header frame, when the cap applied.
    pub column_header_cap: Option<f64>,
    /// Body frame `offsetWidth - clientWidth`.
    pub scrollbar_width: f64,
    /// Body frame `offsetHeight - clientHeight`.
    pub scrollbar_height: f64,
}

/// Give each first-row column of `a` and `b` the wider of the two widths.
///
/// All widths are read before any is written, and both cells receive the
/// result, so writing one column cannot shift a column already handled.
/// Only as many columns as the shorter first row has are aligned.
pub fn align_column_widths<D: HostDocument>(
    doc: &D,
    a: &D::Element,
    b: &D::Element,
) -> Result<()> {
    let a_cells = first_row_cells(doc, a);
    let b_cells = first_row_cells(doc, b);
    let widths: Vec<f64> = a_cells
        .iter()
        .zip(&b_cells)
        .map(|(x, y)| doc.computed_width(x).max(doc.computed_width(y)))
        .collect();
    for ((x, y), width) in a_cells.iter().zip(&b_cells).zip(widths) {
        let width = px(width);
        doc.set_style(x, "width", &width)?;
        doc.set_style(y, "width", &width)?;
    }
    Ok(())
}

/// Widen the narrower of two tables to the other's total width.
pub fn match_table_widths<D: HostDocument>(
    doc: &D,
    a: &D::Element,
    b: &D::Element,
) -> Result<()> {
    let a_width = doc.computed_width(a);
    let b_width = doc.computed_width(b);
    if a_width > b_width {
        doc.set_style(b, "width", &px(a_width))?;
    } else if b_width > a_width {
        doc.set_style(a, "width", &px(b_width))?;
    }
    Ok(())
}

/// Align the panes of a freshly assembled scroller.
///
/// 1. corner and row header columns share widths;
/// 2. column header and body tables share total width, then column widths;
/// 3. body frame width = configured width − row header frame width;
/// 4. body frame height = configured height − column header frame height;
/// 5. the column header frame is capped to the mount height left below the
///    corner;
/// 6. the column header frame loses the body's vertical scrollbar width and
///    the row header frame the body's horizontal scrollbar height, so header
///    cells stay over the body cells they label.
pub fn reconcile<D: HostDocument>(
    doc: &D,
    config: &ScrollerConfig,
    mount: &D::Element,
    panes: &Panes<D::Element>,
) -> Result<FrameSizes> {
    let body = &panes.body;

    if let (Some(corner), Some(row_header)) = (&panes.corner, &panes.row_header) {
        align_column_widths(doc, &corner.table, &row_header.table)?;
    }

    if let Some(column_header) = &panes.column_header {
        match_table_widths(doc, &column_header.table, &body.table)?;
        align_column_widths(doc, &column_header.table, &body.table)?;
    }

    let row_header_width = panes
        .row_header
        .as_ref()
        .map_or(0.0, |pane| doc.computed_width(&pane.frame));
    let body_width = (config.width - row_header_width).max(0.0);
    doc.set_style(&body.frame, "width", &px(body_width))?;

    let column_header_height = panes
        .column_header
        .as_ref()
        .map_or(0.0, |pane| doc.computed_height(&pane.frame));
    let body_height = (config.height - column_header_height).max(0.0);
    doc.set_style(&body.frame, "height", &px(body_height))?;

    let mut column_header_cap = None;
    if let (Some(corner), Some(column_header)) = (&panes.corner, &panes.column_header) {
        let cap = doc.computed_height(mount) - doc.computed_height(&corner.frame);
        if cap > 0.0 && cap < doc.computed_height(&column_header.frame) {
            doc.set_style(&column_header.frame, "height", &px(cap))?;
            column_header_cap = Some(cap);
        }
    }

    let scrollbar_width = vertical_scrollbar_width(doc, &body.frame);
    let scrollbar_height = horizontal_scrollbar_height(doc, &body.frame);
    if let Some(column_header) = &panes.column_header {
        let width = (body_width - scrollbar_width).max(0.0);
        doc.set_style(&column_header.frame, "width", &px(width))?;
    }
    if let Some(row_header) = &panes.row_header {
        let height = (body_height - scrollbar_height).max(0.0);
        doc.set_style(&row_header.frame, "height", &px(height))?;
    }

    let sizes = FrameSizes {
        body_width,
        body_height,
        column_header_cap,
        scrollbar_width,
        scrollbar_height,
    };
    tracing::debug!(target: "tablescroller::layout", ?sizes, "reconciled pane sizes");
    Ok(sizes)
}
