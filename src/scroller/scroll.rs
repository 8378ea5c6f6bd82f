//! Scroll synchronization from the body frame into the header frames.

use crate::error::Result;
use crate::host::HostDocument;
use crate::layout::Panes;

/// Mirrors the body frame's scroll offsets into the header frames: the
/// column header follows horizontally, the row header vertically. The
/// corner is never touched.
#[derive(Clone)]
pub struct ScrollSync<D: HostDocument> {
    doc: D,
    body: D::Element,
    column_header: Option<D::Element>,
    row_header: Option<D::Element>,
}

impl<D: HostDocument> ScrollSync<D> {
    pub fn new(doc: &D, panes: &Panes<D::Element>) -> Self {
        Self {
            doc: doc.clone(),
            body: panes.body.frame.clone(),
            column_header: panes.column_header.as_ref().map(|p| p.frame.clone()),
            row_header: panes.row_header.as_ref().map(|p| p.frame.clone()),
        }
    }

    /// True when there is at least one header frame to follow the body.
    pub fn has_followers(&self) -> bool {
        self.column_header.is_some() || self.row_header.is_some()
    }

    /// Copy the body's current offsets into the header frames.
    pub fn apply(&self) {
        let (left, top) = self.doc.scroll_offset(&self.body);
        if let Some(frame) = &self.column_header {
            self.doc.set_scroll_left(frame, left);
        }
        if let Some(frame) = &self.row_header {
            self.doc.set_scroll_top(frame, top);
        }
        tracing::trace!(target: "tablescroller::scroller", left, top, "synced header scroll");
    }

    /// Register [`ScrollSync::apply`] on the body frame's scroll event.
    pub fn listen(self) -> Result<D::Listener> {
        let doc = self.doc.clone();
        let body = self.body.clone();
        doc.listen_scroll(&body, Box::new(move || self.apply()))
    }
}
