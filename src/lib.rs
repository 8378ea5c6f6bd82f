//! tablescroller - pinned header rows and columns for HTML tables
//!
//! Splits a `<table>` into four synchronized panes inside a mount container:
//! - Corner: the pinned rows crossed with the pinned columns
//! - Column header: the pinned rows, scrolls horizontally with the body
//! - Row header: the pinned columns, scrolls vertically with the body
//! - Body: everything else, the only pane the user scrolls
//!
//! Column widths and frame sizes are reconciled across the seams so the
//! panes line up like one table. The source table is only cloned, never
//! moved.
//!
//! # Usage (JavaScript)
//!
//! ```javascript
//! import init, { TableScroller } from 'tablescroller';
//! await init();
//! const scroller = new TableScroller(document.getElementById('grid'), {
//!     width: 600, height: 400, pinnedRows: 1, pinnedCols: 1,
//! });
//! ```
//!
//! # Usage (Rust)
//!
//! ```
//! use tablescroller::{attach, MemoryDocument, HostDocument, ScrollerOptions};
//!
//! let doc = MemoryDocument::from_markup(
//!     "<table id=\"grid\"><tr><th>a</th><th>b</th></tr><tr><td>1</td><td>2</td></tr></table>",
//! )?;
//! let table = doc.element_by_id("grid");
//! let scroller = attach(&doc, table.as_ref(), Some(&ScrollerOptions::new()))?;
//! assert!(scroller.column_header().is_some());
//! # Ok::<(), tablescroller::ScrollerError>(())
//! ```

pub mod error;
pub mod host;
pub mod layout;
mod parser;
pub mod scroller;
pub mod types;
pub mod xml_helpers;

use wasm_bindgen::prelude::*;

pub use error::{Result, ScrollerError};
pub use host::{
    HostDocument, MemoryDocument, NodeId, CELL_PADDING, CHAR_WIDTH, DEFAULT_ROW_HEIGHT, SCROLLBAR_SIZE,
};
pub use layout::{clone_table_section, FrameSizes, Pane, Panes};
pub use scroller::{attach, LayoutReport, PaneReport, ScrollSync, ScrollerPanes};
#[cfg(target_arch = "wasm32")]
pub use scroller::TableScroller;
pub use types::*;

/// Get the library version
#[must_use]
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
