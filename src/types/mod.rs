//! Data types shared across the scroller.

mod options;
mod pane;

pub use options::*;
pub use pane::*;
