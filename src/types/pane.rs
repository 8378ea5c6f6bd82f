//! Pane kinds and the row/column ranges they cover.

use std::ops::Range;

use serde::Serialize;

/// Half-open index range over rows or columns. `end: None` runs through the
/// last index. Ranges are clipped against the actual length when applied,
/// so out-of-range indices simply select nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SectionRange {
    pub start: usize,
    pub end: Option<usize>,
}

impl SectionRange {
    /// `[start, end)`
    pub const fn bounded(start: usize, end: usize) -> Self {
        Self {
            start,
            end: Some(end),
        }
    }

    /// `[start, ∞)`
    pub const fn starting_at(start: usize) -> Self {
        Self { start, end: None }
    }

    /// Concrete indices for a sequence of `len` items.
    pub fn clip(&self, len: usize) -> Range<usize> {
        let end = self.end.map_or(len, |end| end.min(len));
        let start = self.start.min(end);
        start..end
    }

    /// True when no index can ever be selected.
    pub fn is_empty(&self) -> bool {
        self.end.is_some_and(|end| end <= self.start)
    }
}

/// One of the four regions a table is split into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum PaneKind {
    /// Pinned rows × pinned columns; never scrolls.
    Corner,
    /// Pinned rows × scrolling columns; follows horizontal scroll.
    ColumnHeader,
    /// Scrolling rows × pinned columns; follows vertical scroll.
    RowHeader,
    /// The scrollable data region.
    Body,
}

impl PaneKind {
    /// Mount order.
    pub const ALL: [PaneKind; 4] = [
        PaneKind::Corner,
        PaneKind::ColumnHeader,
        PaneKind::RowHeader,
        PaneKind::Body,
    ];

    pub fn frame_class(self) -> &'static str {
        match self {
            Self::Corner => "corner-frame",
            Self::ColumnHeader => "scrollable-columns-frame",
            Self::RowHeader => "scrollable-rows-frame",
            Self::Body => "scrollable-data-frame",
        }
    }

    pub fn table_class(self) -> &'static str {
        match self {
            Self::Corner => "corner-table",
            Self::ColumnHeader => "scrollable-columns-table",
            Self::RowHeader => "scrollable-rows-table",
            Self::Body => "scrollable-data-table",
        }
    }

    /// Whether this pane is built for the given pinned counts.
    pub fn exists(self, pinned_rows: usize, pinned_cols: usize) -> bool {
        match self {
            Self::Corner => pinned_rows > 0 && pinned_cols > 0,
            Self::ColumnHeader => pinned_rows > 0,
            Self::RowHeader => pinned_cols > 0,
            Self::Body => true,
        }
    }

    /// `(rows, cols)` of the source table this pane shows.
    pub fn ranges(self, pinned_rows: usize, pinned_cols: usize) -> (SectionRange, SectionRange) {
        let pinned_r = SectionRange::bounded(0, pinned_rows);
        let pinned_c = SectionRange::bounded(0, pinned_cols);
        let rest_r = SectionRange::starting_at(pinned_rows);
        let rest_c = SectionRange::starting_at(pinned_cols);
        match self {
            Self::Corner => (pinned_r, pinned_c),
            Self::ColumnHeader => (pinned_r, rest_c),
            Self::RowHeader => (rest_r, pinned_c),
            Self::Body => (rest_r, rest_c),
        }
    }

    /// Inline `overflow` for the frame: only the body shows scrollbars,
    /// the other frames are scrolled programmatically.
    pub fn frame_overflow(self) -> &'static str {
        match self {
            Self::Body => "auto",
            _ => "hidden",
        }
    }
}
