//! Pane assembly: wrap each partition in a frame and mount it.

use super::partition::clone_table_section;
use crate::error::Result;
use crate::host::HostDocument;
use crate::types::PaneKind;

/// A frame (scroll viewport) and the partition table inside it.
#[derive(Debug, Clone)]
pub struct Pane<E> {
    pub kind: PaneKind,
    pub frame: E,
    pub table: E,
}

/// The panes built for one scroller. Only the body is always present.
#[derive(Debug, Clone)]
pub struct Panes<E> {
    pub corner: Option<Pane<E>>,
    pub column_header: Option<Pane<E>>,
    pub row_header: Option<Pane<E>>,
    pub body: Pane<E>,
}

impl<E> Panes<E> {
    pub fn get(&self, kind: PaneKind) -> Option<&Pane<E>> {
        match kind {
            PaneKind::Corner => self.corner.as_ref(),
            PaneKind::ColumnHeader => self.column_header.as_ref(),
            PaneKind::RowHeader => self.row_header.as_ref(),
            PaneKind::Body => Some(&self.body),
        }
    }

    /// Existing panes in mount order.
    pub fn iter(&self) -> impl Iterator<Item = &Pane<E>> {
        PaneKind::ALL.into_iter().filter_map(|kind| self.get(kind))
    }
}

/// Build one pane: frame with its class marker, partition table inside.
fn build_pane<D: HostDocument>(
    doc: &D,
    source: &D::Element,
    kind: PaneKind,
    pinned_rows: usize,
    pinned_cols: usize,
) -> Result<Pane<D::Element>> {
    let frame = doc.create_element("div")?;
    doc.add_class(&frame, kind.frame_class())?;
    doc.set_style(&frame, "overflow", kind.frame_overflow())?;

    let (rows, cols) = kind.ranges(pinned_rows, pinned_cols);
    let table = clone_table_section(doc, source, rows, cols)?;
    doc.add_class(&table, kind.table_class())?;
    doc.append_child(&frame, &table)?;

    Ok(Pane { kind, frame, table })
}

/// Create every applicable pane and append the frames to `mount` in the
/// order corner, column header, row header, body.
pub fn assemble_panes<D: HostDocument>(
    doc: &D,
    source: &D::Element,
    mount: &D::Element,
    pinned_rows: usize,
    pinned_cols: usize,
) -> Result<Panes<D::Element>> {
    let build = |kind: PaneKind| -> Result<Option<Pane<D::Element>>> {
        if !kind.exists(pinned_rows, pinned_cols) {
            return Ok(None);
        }
        let pane = build_pane(doc, source, kind, pinned_rows, pinned_cols)?;
        doc.append_child(mount, &pane.frame)?;
        tracing::debug!(target: "tablescroller::layout", ?kind, "mounted pane");
        Ok(Some(pane))
    };

    let corner = build(PaneKind::Corner)?;
    let column_header = build(PaneKind::ColumnHeader)?;
    let row_header = build(PaneKind::RowHeader)?;
    let body = build_pane(doc, source, PaneKind::Body, pinned_rows, pinned_cols)?;
    doc.append_child(mount, &body.frame)?;
    tracing::debug!(target: "tablescroller::layout", kind = ?PaneKind::Body, "mounted pane");

    Ok(Panes {
        corner,
        column_header,
        row_header,
        body,
    })
}
