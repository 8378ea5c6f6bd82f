//! Host document abstraction.
//!
//! The scroller never talks to the browser directly. Everything it needs
//! from the page (creating and cloning elements, reading rendered sizes,
//! writing inline styles, scroll offsets and scroll listeners) goes through
//! [`HostDocument`], so the partitioning and reconciliation logic runs the
//! same against the real DOM ([`web::WebDocument`], wasm32 only) and against
//! the headless [`MemoryDocument`] used by tests, benches and the CLI.

mod memory;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use memory::{
    MemoryDocument, NodeId, CELL_PADDING, CHAR_WIDTH, DEFAULT_ROW_HEIGHT, SCROLLBAR_SIZE,
};

use crate::error::Result;

/// Capability set the scroller needs from the page.
///
/// Handles are cheap to clone and refer to one live document; methods take
/// `&self` and mutate through the handle.
pub trait HostDocument: Clone + 'static {
    /// Handle to one element of the document.
    type Element: Clone + 'static;
    /// Keeps a registered scroll listener alive while it is held.
    type Listener;

    /// The document body, used as mount parent for detached tables.
    fn body(&self) -> Result<Self::Element>;
    fn create_element(&self, tag: &str) -> Result<Self::Element>;
    fn element_by_id(&self, id: &str) -> Option<Self::Element>;
    /// Lowercase tag name.
    fn tag_name(&self, element: &Self::Element) -> String;
    /// Clone an element: attributes only, or the whole subtree when `deep`.
    fn clone_element(&self, element: &Self::Element, deep: bool) -> Result<Self::Element>;
    fn append_child(&self, parent: &Self::Element, child: &Self::Element) -> Result<()>;
    fn parent_element(&self, element: &Self::Element) -> Option<Self::Element>;
    /// Direct element children in order.
    fn child_elements(&self, element: &Self::Element) -> Vec<Self::Element>;
    /// Descendants of `root` with the given tag, in document order.
    fn elements_by_tag(&self, root: &Self::Element, tag: &str) -> Vec<Self::Element>;

    fn attribute(&self, element: &Self::Element, name: &str) -> Option<String>;
    fn set_attribute(&self, element: &Self::Element, name: &str, value: &str) -> Result<()>;
    fn remove_attribute(&self, element: &Self::Element, name: &str) -> Result<()>;
    fn add_class(&self, element: &Self::Element, class: &str) -> Result<()>;
    fn set_style(&self, element: &Self::Element, property: &str, value: &str) -> Result<()>;

    /// Rendered width from the computed style, in CSS pixels.
    fn computed_width(&self, element: &Self::Element) -> f64;
    /// Rendered height from the computed style, in CSS pixels.
    fn computed_height(&self, element: &Self::Element) -> f64;
    /// Border-box size (`offsetWidth`, `offsetHeight`).
    fn offset_size(&self, element: &Self::Element) -> (f64, f64);
    /// Size inside borders and scrollbars (`clientWidth`, `clientHeight`).
    fn client_size(&self, element: &Self::Element) -> (f64, f64);

    /// `(scrollLeft, scrollTop)`
    fn scroll_offset(&self, element: &Self::Element) -> (f64, f64);
    fn set_scroll_left(&self, element: &Self::Element, value: f64);
    fn set_scroll_top(&self, element: &Self::Element, value: f64);
    /// Call `handler` on every scroll event of `element` for as long as the
    /// returned listener is kept.
    fn listen_scroll(
        &self,
        element: &Self::Element,
        handler: Box<dyn FnMut()>,
    ) -> Result<Self::Listener>;
}
