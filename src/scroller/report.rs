//! Serializable snapshot of a mounted scroller's geometry.
//!
//! Used by the CLI and the JS `layoutReport()` getter to inspect how a
//! table was split and sized.

use serde::Serialize;

use super::ScrollerPanes;
use crate::host::HostDocument;
use crate::layout::{measure::column_widths, FrameSizes, Pane};
use crate::types::{PaneKind, ScrollerConfig};

/// Geometry of one pane.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaneReport {
    pub kind: PaneKind,
    pub frame_class: &'static str,
    pub table_class: &'static str,
    pub frame_width: f64,
    pub frame_height: f64,
    pub table_width: f64,
    pub table_height: f64,
    pub rows: usize,
    /// Cells in the first row.
    pub columns: usize,
    /// Rendered widths of the first-row cells.
    pub column_widths: Vec<f64>,
    pub scroll_left: f64,
    pub scroll_top: f64,
}

/// Geometry of every pane plus the configuration that produced it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutReport {
    pub config: ScrollerConfig,
    pub mount_width: f64,
    pub mount_height: f64,
    pub frame_sizes: FrameSizes,
    pub panes: Vec<PaneReport>,
}

impl PaneReport {
    fn measure<D: HostDocument>(doc: &D, pane: &Pane<D::Element>) -> Self {
        let (frame_width, frame_height) = doc.offset_size(&pane.frame);
        let (scroll_left, scroll_top) = doc.scroll_offset(&pane.frame);
        let column_widths = column_widths(doc, &pane.table);
        Self {
            kind: pane.kind,
            frame_class: pane.kind.frame_class(),
            table_class: pane.kind.table_class(),
            frame_width,
            frame_height,
            table_width: doc.computed_width(&pane.table),
            table_height: doc.computed_height(&pane.table),
            rows: doc.elements_by_tag(&pane.table, "tr").len(),
            columns: column_widths.len(),
            column_widths,
            scroll_left,
            scroll_top,
        }
    }
}

impl<D: HostDocument> ScrollerPanes<D> {
    /// Measure every pane as currently rendered.
    pub fn layout_report(&self, doc: &D) -> LayoutReport {
        LayoutReport {
            config: self.config.clone(),
            mount_width: doc.computed_width(&self.mount),
            mount_height: doc.computed_height(&self.mount),
            frame_sizes: self.sizes,
            panes: self
                .panes
                .iter()
                .map(|pane| PaneReport::measure(doc, pane))
                .collect(),
        }
    }
}
