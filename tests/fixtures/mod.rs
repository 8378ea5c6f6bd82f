//! Test fixtures for building tables in a headless document.
//!
//! Every generated cell holds exactly eight characters, so in the
//! [`MemoryDocument`] layout model every column is [`CELL_WIDTH`] wide and
//! every row [`ROW_HEIGHT`] tall unless a test widens something on purpose.
//!
//! # Example
//!
//! ```rust
//! use fixtures::TableBuilder;
//!
//! let (doc, table) = TableBuilder::grid(12, 8).mount("box").build();
//! ```
#![allow(
    dead_code,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::panic,
    clippy::cast_lossless
)]

use tablescroller::{HostDocument, MemoryDocument, NodeId, CELL_PADDING, CHAR_WIDTH};

/// Rendered width of every generated cell.
pub const CELL_WIDTH: f64 = 8.0 * CHAR_WIDTH + 2.0 * CELL_PADDING;
/// Rendered height of every generated row.
pub const ROW_HEIGHT: f64 = tablescroller::DEFAULT_ROW_HEIGHT;

/// Text of the generated header cell in column `c`.
pub fn head_text(c: usize) -> String {
    format!("head{c:04}")
}

/// Text of the generated data cell at row `r`, column `c`.
pub fn cell_text(r: usize, c: usize) -> String {
    format!("cell{r:02}{c:02}")
}

// ============================================================================
// Table Builder
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Group {
    Head,
    Body,
    Foot,
}

/// Builder for a `<table>` wrapped in `<div id="page">`.
#[derive(Debug, Clone)]
pub struct TableBuilder {
    id: String,
    class: Option<String>,
    rows: Vec<(Group, bool, Vec<String>)>,
    mounts: Vec<String>,
}

impl Default for TableBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TableBuilder {
    pub fn new() -> Self {
        Self {
            id: "grid".to_string(),
            class: None,
            rows: Vec::new(),
            mounts: Vec::new(),
        }
    }

    /// `rows` rows by `cols` columns: one `<thead>` row of `<th>` cells and
    /// `rows - 1` `<tbody>` rows of `<td>` cells.
    pub fn grid(rows: usize, cols: usize) -> Self {
        let mut builder = Self::new();
        if rows == 0 {
            return builder;
        }
        builder = builder.head_row((0..cols).map(head_text).collect());
        for r in 1..rows {
            builder = builder.body_row((0..cols).map(|c| cell_text(r, c)).collect());
        }
        builder
    }

    pub fn id(mut self, id: &str) -> Self {
        self.id = id.to_string();
        self
    }

    pub fn class(mut self, class: &str) -> Self {
        self.class = Some(class.to_string());
        self
    }

    pub fn head_row(mut self, cells: Vec<String>) -> Self {
        self.rows.push((Group::Head, true, cells));
        self
    }

    pub fn body_row(mut self, cells: Vec<String>) -> Self {
        self.rows.push((Group::Body, false, cells));
        self
    }

    /// A `<tbody>` row whose cells are `<th>`.
    pub fn body_header_row(mut self, cells: Vec<String>) -> Self {
        self.rows.push((Group::Body, true, cells));
        self
    }

    pub fn foot_row(mut self, cells: Vec<String>) -> Self {
        self.rows.push((Group::Foot, false, cells));
        self
    }

    /// Add an empty `<div id=...>` after the table.
    pub fn mount(mut self, id: &str) -> Self {
        self.mounts.push(id.to_string());
        self
    }

    pub fn markup(&self) -> String {
        let mut out = String::from("<div id=\"page\">");
        out.push_str(&format!("<table id=\"{}\"", self.id));
        if let Some(class) = &self.class {
            out.push_str(&format!(" class=\"{class}\""));
        }
        out.push('>');

        for group in [Group::Head, Group::Body, Group::Foot] {
            let rows: Vec<_> = self.rows.iter().filter(|(g, _, _)| *g == group).collect();
            if rows.is_empty() {
                continue;
            }
            let tag = match group {
                Group::Head => "thead",
                Group::Body => "tbody",
                Group::Foot => "tfoot",
            };
            out.push_str(&format!("<{tag}>"));
            for (_, header, cells) in rows {
                let cell_tag = if *header { "th" } else { "td" };
                out.push_str("<tr>");
                for text in cells {
                    out.push_str(&format!("<{cell_tag}>{text}</{cell_tag}>"));
                }
                out.push_str("</tr>");
            }
            out.push_str(&format!("</{tag}>"));
        }
        out.push_str("</table>");

        for id in &self.mounts {
            out.push_str(&format!("<div id=\"{id}\"></div>"));
        }
        out.push_str("</div>");
        out
    }

    /// Parse the markup into a fresh document and return it with the table.
    pub fn build(&self) -> (MemoryDocument, NodeId) {
        let doc = MemoryDocument::from_markup(&self.markup()).expect("fixture markup");
        let table = doc.element_by_id(&self.id).expect("fixture table");
        (doc, table)
    }
}
