//! Table scroller setup - the primary entry point.
//!
//! [`attach`] turns a source table into pinned panes in one synchronous
//! pass:
//! - Validating the element and options, before touching the document
//! - Merging the options over the table's defaults
//! - Resolving (or creating) the mount container
//! - Partitioning the table and mounting the panes
//! - Reconciling pane sizes
//! - Wiring body scroll into the header panes
//!
//! The returned [`ScrollerPanes`] owns the scroll listener; keep it alive for
//! as long as the panes are on the page.

mod report;
mod scroll;
#[cfg(target_arch = "wasm32")]
mod wasm;

pub use report::{LayoutReport, PaneReport};
pub use scroll::ScrollSync;
#[cfg(target_arch = "wasm32")]
pub use wasm::TableScroller;

use crate::error::{Result, ScrollerError};
use crate::host::HostDocument;
use crate::layout::{assemble_panes, measure::px, reconcile, FrameSizes, Pane, Panes};
use crate::types::{PaneKind, ScrollerConfig, ScrollerOptions, MOUNT_ID_PREFIX};

/// Handle to a mounted scroller: the merged configuration, the mount, each
/// pane's frame and table, and the live scroll listener.
pub struct ScrollerPanes<D: HostDocument> {
    config: ScrollerConfig,
    mount: D::Element,
    panes: Panes<D::Element>,
    sizes: FrameSizes,
    listener: Option<D::Listener>,
}

impl<D: HostDocument> ScrollerPanes<D> {
    pub fn config(&self) -> &ScrollerConfig {
        &self.config
    }

    pub fn mount(&self) -> &D::Element {
        &self.mount
    }

    pub fn panes(&self) -> &Panes<D::Element> {
        &self.panes
    }

    pub fn pane(&self, kind: PaneKind) -> Option<&Pane<D::Element>> {
        self.panes.get(kind)
    }

    pub fn corner(&self) -> Option<&Pane<D::Element>> {
        self.panes.corner.as_ref()
    }

    pub fn column_header(&self) -> Option<&Pane<D::Element>> {
        self.panes.column_header.as_ref()
    }

    pub fn row_header(&self) -> Option<&Pane<D::Element>> {
        self.panes.row_header.as_ref()
    }

    pub fn body(&self) -> &Pane<D::Element> {
        &self.panes.body
    }

    /// Frame sizes fixed during reconciliation.
    pub fn frame_sizes(&self) -> FrameSizes {
        self.sizes
    }

    /// Whether body scrolling is wired into header panes.
    pub fn is_synced(&self) -> bool {
        self.listener.is_some()
    }
}

/// Split `element` into pinned panes.
///
/// `element` must be a `<table>` and `options` must be present; both are
/// checked before the document is touched. Every other irregular input
/// (pinned counts past the table's extent, empty tables) yields empty
/// partitions rather than an error.
pub fn attach<D: HostDocument>(
    doc: &D,
    element: Option<&D::Element>,
    options: Option<&ScrollerOptions>,
) -> Result<ScrollerPanes<D>> {
    let element = element.ok_or(ScrollerError::InvalidElement)?;
    if doc.tag_name(element) != "table" {
        return Err(ScrollerError::InvalidElement);
    }
    let options = options.ok_or(ScrollerError::MissingOptions)?;

    let (natural_width, natural_height) = doc.offset_size(element);
    let config = ScrollerConfig::resolve(options, natural_width, natural_height);

    let (mount, mount_id) = resolve_mount(doc, element, config.mount_point_id.as_deref())?;
    let config = config.with_resolved_mount(mount_id);
    doc.set_style(&mount, "width", &px(config.width))?;
    doc.set_style(&mount, "height", &px(config.height))?;

    let panes = assemble_panes(doc, element, &mount, config.pinned_rows, config.pinned_cols)?;
    let sizes = reconcile(doc, &config, &mount, &panes)?;

    let sync = ScrollSync::new(doc, &panes);
    let listener = if sync.has_followers() {
        Some(sync.listen()?)
    } else {
        None
    };

    if config.remove_original {
        doc.set_style(element, "display", "none")?;
    }

    tracing::debug!(
        target: "tablescroller::scroller",
        mount = ?config.mount_point_id,
        pinned_rows = config.pinned_rows,
        pinned_cols = config.pinned_cols,
        width = config.width,
        height = config.height,
        "table scroller attached"
    );

    Ok(ScrollerPanes {
        config,
        mount,
        panes,
        sizes,
        listener,
    })
}

/// Find the requested mount container, or create one next to the table.
fn resolve_mount<D: HostDocument>(
    doc: &D,
    table: &D::Element,
    requested: Option<&str>,
) -> Result<(D::Element, String)> {
    if let Some(id) = requested {
        if let Some(mount) = doc.element_by_id(id) {
            return Ok((mount, id.to_string()));
        }
        tracing::warn!(
            target: "tablescroller::scroller",
            id,
            "mount point not found, creating a new container"
        );
    }

    let id = next_mount_id(doc);
    let mount = doc.create_element("div")?;
    doc.set_attribute(&mount, "id", &id)?;
    let parent = match doc.parent_element(table) {
        Some(parent) => parent,
        None => doc.body()?,
    };
    doc.append_child(&parent, &mount)?;
    Ok((mount, id))
}

/// First `tablescroller-N` id not taken in the document.
fn next_mount_id<D: HostDocument>(doc: &D) -> String {
    (1_usize..)
        .map(|n| format!("{MOUNT_ID_PREFIX}{n}"))
        .find(|id| doc.element_by_id(id).is_none())
        .unwrap_or_else(|| MOUNT_ID_PREFIX.to_string())
}
