//! Layout engine: splitting the source table into panes and sizing them.
//!
//! This module handles:
//! - Cloning rectangular sections of a table (`partition`)
//! - Wrapping sections in frames and mounting them (`assemble`)
//! - Reading rendered sizes (`measure`)
//! - Aligning column widths and frame sizes across seams (`reconcile`)

mod assemble;
pub mod measure;
mod partition;
mod reconcile;

pub use assemble::{assemble_panes, Pane, Panes};
pub use partition::clone_table_section;
pub use reconcile::{align_column_widths, match_table_widths, reconcile, FrameSizes};
