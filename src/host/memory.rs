//! Headless in-memory document.
//!
//! `MemoryDocument` implements [`HostDocument`] over a small node arena with
//! a deterministic layout model, so the scroller can be exercised without a
//! browser. The model only covers what the scroller reads:
//!
//! - a cell is as wide as its text (`CHAR_WIDTH` per char plus padding on
//!   both sides) or its inline width, whichever is larger;
//! - table columns take the widest cell in the column, rows the tallest cell
//!   (at least `DEFAULT_ROW_HEIGHT`); an inline table width above the natural
//!   width is spread evenly over the columns;
//! - every other element shrinks to fit its children (widest child, stacked
//!   heights) unless it carries an inline width/height;
//! - `overflow: auto` containers grow `SCROLLBAR_SIZE` scrollbars when their
//!   content overflows, `overflow: scroll` always has both;
//! - `display: none` measures as zero.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fmt;
use std::rc::{Rc, Weak};

use super::HostDocument;
use crate::error::{Result, ScrollerError};
use crate::layout::measure::{parse_px, px};

/// Width of one character of cell text.
pub const CHAR_WIDTH: f64 = 7.0;
/// Horizontal padding on each side of a cell.
pub const CELL_PADDING: f64 = 4.0;
/// Minimum row height.
pub const DEFAULT_ROW_HEIGHT: f64 = 20.0;
/// Thickness of a native scrollbar.
pub const SCROLLBAR_SIZE: f64 = 17.0;

/// Handle to a node of a [`MemoryDocument`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

#[derive(Debug, Clone, Default)]
struct Node {
    tag: String,
    attributes: BTreeMap<String, String>,
    style: BTreeMap<String, String>,
    text: String,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    scroll_left: f64,
    scroll_top: f64,
}

/// Column widths and row heights of one laid-out table.
struct TableGrid {
    col_widths: Vec<f64>,
    row_heights: Vec<f64>,
}

impl TableGrid {
    fn width(&self) -> f64 {
        self.col_widths.iter().sum()
    }

    fn height(&self) -> f64 {
        self.row_heights.iter().sum()
    }
}

struct Tree {
    nodes: Vec<Node>,
    body: NodeId,
    revision: u64,
}

type ScrollHandler = Rc<RefCell<Box<dyn FnMut()>>>;

struct Registration {
    id: u64,
    target: NodeId,
    handler: ScrollHandler,
}

#[derive(Default)]
struct Listeners {
    next_id: u64,
    entries: Vec<Registration>,
}

/// Keeps a scroll handler registered; dropping it unregisters the handler.
pub struct MemoryListener {
    id: u64,
    registry: Weak<RefCell<Listeners>>,
}

impl Drop for MemoryListener {
    fn drop(&mut self) {
        if let Some(registry) = self.registry.upgrade() {
            if let Ok(mut listeners) = registry.try_borrow_mut() {
                listeners.entries.retain(|entry| entry.id != self.id);
            }
        }
    }
}

/// Shared handle to an in-memory document.
#[derive(Clone)]
pub struct MemoryDocument {
    tree: Rc<RefCell<Tree>>,
    listeners: Rc<RefCell<Listeners>>,
}

impl fmt::Debug for MemoryDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tree = self.tree.borrow();
        f.debug_struct("MemoryDocument")
            .field("nodes", &tree.nodes.len())
            .field("revision", &tree.revision)
            .finish_non_exhaustive()
    }
}

impl Default for MemoryDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryDocument {
    /// An empty document holding only a `<body>`.
    pub fn new() -> Self {
        let body = Node {
            tag: "body".to_string(),
            ..Node::default()
        };
        Self {
            tree: Rc::new(RefCell::new(Tree {
                nodes: vec![body],
                body: NodeId(0),
                revision: 0,
            })),
            listeners: Rc::new(RefCell::new(Listeners::default())),
        }
    }

    /// Parse an XHTML fragment and append its elements to the body.
    pub fn from_markup(markup: &str) -> Result<Self> {
        let doc = Self::new();
        let body = doc.tree.borrow().body;
        crate::parser::parse_into(&doc, body, markup)?;
        Ok(doc)
    }

    /// Append text to an element's own text content.
    pub fn append_text(&self, element: &NodeId, text: &str) {
        let mut tree = self.tree.borrow_mut();
        tree.revision += 1;
        if let Some(node) = tree.node_mut(*element) {
            node.text.push_str(text);
        }
    }

    /// Text content of the element and all its descendants.
    pub fn text(&self, element: &NodeId) -> String {
        self.tree.borrow().text_content(*element)
    }

    /// Inline style property, if set.
    pub fn style(&self, element: &NodeId, property: &str) -> Option<String> {
        self.tree
            .borrow()
            .node(*element)
            .and_then(|node| node.style.get(property).cloned())
    }

    pub fn classes(&self, element: &NodeId) -> Vec<String> {
        self.attribute(element, "class")
            .map(|class| class.split_whitespace().map(str::to_string).collect())
            .unwrap_or_default()
    }

    pub fn has_class(&self, element: &NodeId, class: &str) -> bool {
        self.classes(element).iter().any(|c| c == class)
    }

    /// Number of mutations applied so far.
    pub fn revision(&self) -> u64 {
        self.tree.borrow().revision
    }

    /// Number of nodes ever created, attached or not.
    pub fn node_count(&self) -> usize {
        self.tree.borrow().nodes.len()
    }

    pub fn listener_count(&self, element: &NodeId) -> usize {
        self.listeners
            .borrow()
            .entries
            .iter()
            .filter(|entry| entry.target == *element)
            .count()
    }

    /// Simulate a user scroll: move the offsets (clamped to the scrollable
    /// range) and dispatch the element's scroll listeners.
    ///
    /// Programmatic writes through `set_scroll_left`/`set_scroll_top` never
    /// dispatch, so a handler mirroring offsets into other elements cannot
    /// re-enter itself.
    pub fn scroll_to(&self, element: &NodeId, x: f64, y: f64) {
        {
            let mut tree = self.tree.borrow_mut();
            let (max_x, max_y) = tree.max_scroll(*element);
            if let Some(node) = tree.node_mut(*element) {
                node.scroll_left = x.clamp(0.0, max_x);
                node.scroll_top = y.clamp(0.0, max_y);
            }
        }
        let handlers: Vec<ScrollHandler> = self
            .listeners
            .borrow()
            .entries
            .iter()
            .filter(|entry| entry.target == *element)
            .map(|entry| Rc::clone(&entry.handler))
            .collect();
        for handler in handlers {
            if let Ok(mut handler) = handler.try_borrow_mut() {
                (&mut **handler)();
            }
        }
    }

    /// Largest `(scrollLeft, scrollTop)` the element accepts.
    pub fn max_scroll(&self, element: &NodeId) -> (f64, f64) {
        self.tree.borrow().max_scroll(*element)
    }

    fn missing(element: NodeId) -> ScrollerError {
        ScrollerError::Dom(format!("unknown node {}", element.0))
    }
}

impl Tree {
    fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    fn node_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id.0)
    }

    fn tag(&self, id: NodeId) -> &str {
        self.node(id).map_or("", |node| node.tag.as_str())
    }

    fn alloc(&mut self, node: Node) -> NodeId {
        self.revision += 1;
        self.nodes.push(node);
        NodeId(self.nodes.len() - 1)
    }

    fn detach(&mut self, child: NodeId) {
        let old_parent = self.node(child).and_then(|node| node.parent);
        if let Some(parent) = old_parent.and_then(|p| self.node_mut(p)) {
            parent.children.retain(|&c| c != child);
        }
        if let Some(node) = self.node_mut(child) {
            node.parent = None;
        }
    }

    fn append(&mut self, parent: NodeId, child: NodeId) -> Result<()> {
        if self.node(parent).is_none() {
            return Err(MemoryDocument::missing(parent));
        }
        if self.node(child).is_none() {
            return Err(MemoryDocument::missing(child));
        }
        if self.is_ancestor_or_self(child, parent) {
            return Err(ScrollerError::Dom(
                "cannot append an element inside itself".to_string(),
            ));
        }
        self.detach(child);
        self.revision += 1;
        if let Some(node) = self.node_mut(child) {
            node.parent = Some(parent);
        }
        if let Some(node) = self.node_mut(parent) {
            node.children.push(child);
        }
        Ok(())
    }

    fn is_ancestor_or_self(&self, ancestor: NodeId, mut id: NodeId) -> bool {
        loop {
            if id == ancestor {
                return true;
            }
            match self.node(id).and_then(|node| node.parent) {
                Some(parent) => id = parent,
                None => return false,
            }
        }
    }

    fn clone_subtree(&mut self, id: NodeId, deep: bool) -> Result<NodeId> {
        let source = self.node(id).ok_or_else(|| MemoryDocument::missing(id))?;
        let copy = Node {
            tag: source.tag.clone(),
            attributes: source.attributes.clone(),
            style: source.style.clone(),
            text: if deep { source.text.clone() } else { String::new() },
            ..Node::default()
        };
        let children = if deep {
            source.children.clone()
        } else {
            Vec::new()
        };
        let copy = self.alloc(copy);
        for child in children {
            let child_copy = self.clone_subtree(child, true)?;
            self.append(copy, child_copy)?;
        }
        Ok(copy)
    }

    fn descendants_by_tag(&self, root: NodeId, tag: &str) -> Vec<NodeId> {
        let mut found = Vec::new();
        let mut stack: Vec<NodeId> = self
            .node(root)
            .map(|node| node.children.iter().rev().copied().collect())
            .unwrap_or_default();
        while let Some(id) = stack.pop() {
            let Some(node) = self.node(id) else {
                continue;
            };
            if node.tag == tag {
                found.push(id);
            }
            stack.extend(node.children.iter().rev().copied());
        }
        found
    }

    fn text_content(&self, id: NodeId) -> String {
        let Some(node) = self.node(id) else {
            return String::new();
        };
        let mut text = node.text.clone();
        for &child in &node.children {
            text.push_str(&self.text_content(child));
        }
        text
    }

    fn style_px(&self, id: NodeId, property: &str) -> Option<f64> {
        self.node(id)
            .and_then(|node| node.style.get(property))
            .and_then(|value| parse_px(value))
    }

    fn is_hidden(&self, mut id: NodeId) -> bool {
        loop {
            let Some(node) = self.node(id) else {
                return false;
            };
            if node.style.get("display").is_some_and(|d| d == "none") {
                return true;
            }
            match node.parent {
                Some(parent) => id = parent,
                None => return false,
            }
        }
    }

    // ------------------------------------------------------------------
    // Table layout
    // ------------------------------------------------------------------

    /// Rows of `table` in document order, not descending into nested tables.
    fn table_rows(&self, table: NodeId) -> Vec<NodeId> {
        let mut rows = Vec::new();
        let mut stack: Vec<NodeId> = self
            .node(table)
            .map(|node| node.children.iter().rev().copied().collect())
            .unwrap_or_default();
        while let Some(id) = stack.pop() {
            match self.tag(id) {
                "tr" => rows.push(id),
                "table" => {}
                _ => {
                    if let Some(node) = self.node(id) {
                        stack.extend(node.children.iter().rev().copied());
                    }
                }
            }
        }
        rows
    }

    fn row_cells(&self, row: NodeId) -> Vec<NodeId> {
        self.node(row)
            .map(|node| {
                node.children
                    .iter()
                    .copied()
                    .filter(|&c| matches!(self.tag(c), "td" | "th"))
                    .collect()
            })
            .unwrap_or_default()
    }

    fn owning_table(&self, id: NodeId) -> Option<NodeId> {
        let mut current = self.node(id)?.parent;
        while let Some(parent) = current {
            if self.tag(parent) == "table" {
                return Some(parent);
            }
            current = self.node(parent)?.parent;
        }
        None
    }

    fn cell_natural_width(&self, cell: NodeId) -> f64 {
        let chars = self.text_content(cell).chars().count() as f64;
        let intrinsic = chars * CHAR_WIDTH + 2.0 * CELL_PADDING;
        self.style_px(cell, "width")
            .map_or(intrinsic, |width| intrinsic.max(width))
    }

    fn table_grid(&self, table: NodeId) -> TableGrid {
        let rows = self.table_rows(table);
        let mut col_widths: Vec<f64> = Vec::new();
        let mut row_heights = Vec::with_capacity(rows.len());
        for &row in &rows {
            let mut row_height = DEFAULT_ROW_HEIGHT;
            for (col, cell) in self.row_cells(row).into_iter().enumerate() {
                let width = self.cell_natural_width(cell);
                match col_widths.get_mut(col) {
                    Some(existing) => *existing = existing.max(width),
                    None => col_widths.push(width),
                }
                if let Some(height) = self.style_px(cell, "height") {
                    row_height = row_height.max(height);
                }
            }
            row_heights.push(row_height);
        }

        let natural: f64 = col_widths.iter().sum();
        if let Some(width) = self.style_px(table, "width") {
            if width > natural && !col_widths.is_empty() {
                let extra = (width - natural) / col_widths.len() as f64;
                for w in &mut col_widths {
                    *w += extra;
                }
            }
        }
        TableGrid {
            col_widths,
            row_heights,
        }
    }

    fn position_in<T: PartialEq>(items: &[T], item: &T) -> Option<usize> {
        items.iter().position(|i| i == item)
    }

    fn width(&self, id: NodeId) -> f64 {
        if self.is_hidden(id) {
            return 0.0;
        }
        match self.tag(id) {
            "table" => self.table_grid(id).width(),
            "td" | "th" => {
                let row = self.node(id).and_then(|node| node.parent);
                let table = self.owning_table(id);
                match (row, table) {
                    (Some(row), Some(table)) => {
                        let col = Self::position_in(&self.row_cells(row), &id);
                        let grid = self.table_grid(table);
                        col.and_then(|c| grid.col_widths.get(c).copied())
                            .unwrap_or_else(|| self.cell_natural_width(id))
                    }
                    _ => self.cell_natural_width(id),
                }
            }
            "tr" | "thead" | "tbody" | "tfoot" => self
                .owning_table(id)
                .map_or(0.0, |table| self.table_grid(table).width()),
            _ => self
                .style_px(id, "width")
                .unwrap_or_else(|| self.content_size(id).0),
        }
    }

    fn height(&self, id: NodeId) -> f64 {
        if self.is_hidden(id) {
            return 0.0;
        }
        match self.tag(id) {
            "table" => self.table_grid(id).height(),
            "tr" => self.row_height(id),
            "td" | "th" => self
                .node(id)
                .and_then(|node| node.parent)
                .map_or(DEFAULT_ROW_HEIGHT, |row| self.row_height(row)),
            "thead" | "tbody" | "tfoot" => self
                .table_rows(id)
                .into_iter()
                .map(|row| self.row_height(row))
                .sum(),
            _ => self
                .style_px(id, "height")
                .unwrap_or_else(|| self.content_size(id).1),
        }
    }

    fn row_height(&self, row: NodeId) -> f64 {
        let Some(table) = self.owning_table(row) else {
            return DEFAULT_ROW_HEIGHT;
        };
        let rows = self.table_rows(table);
        let grid = self.table_grid(table);
        Self::position_in(&rows, &row)
            .and_then(|i| grid.row_heights.get(i).copied())
            .unwrap_or(DEFAULT_ROW_HEIGHT)
    }

    /// Widest child and stacked child heights.
    fn content_size(&self, id: NodeId) -> (f64, f64) {
        let Some(node) = self.node(id) else {
            return (0.0, 0.0);
        };
        node.children.iter().fold((0.0_f64, 0.0_f64), |(w, h), &c| {
            (w.max(self.width(c)), h + self.height(c))
        })
    }

    fn overflow(&self, id: NodeId) -> &str {
        self.node(id)
            .and_then(|node| node.style.get("overflow"))
            .map_or("visible", String::as_str)
    }

    /// `(vertical, horizontal)` scrollbar presence.
    fn scrollbars(&self, id: NodeId, width: f64, height: f64) -> (bool, bool) {
        match self.overflow(id) {
            "scroll" => (true, true),
            "auto" => {
                let (content_w, content_h) = self.content_size(id);
                let mut vertical = content_h > height;
                let mut horizontal = content_w > width;
                if vertical && !horizontal {
                    horizontal = content_w > width - SCROLLBAR_SIZE;
                }
                if horizontal && !vertical {
                    vertical = content_h > height - SCROLLBAR_SIZE;
                }
                (vertical, horizontal)
            }
            _ => (false, false),
        }
    }

    fn client_size(&self, id: NodeId) -> (f64, f64) {
        let width = self.width(id);
        let height = self.height(id);
        let (vertical, horizontal) = self.scrollbars(id, width, height);
        let bar = |present: bool| if present { SCROLLBAR_SIZE } else { 0.0 };
        (
            (width - bar(vertical)).max(0.0),
            (height - bar(horizontal)).max(0.0),
        )
    }

    fn max_scroll(&self, id: NodeId) -> (f64, f64) {
        if self.overflow(id) == "visible" {
            return (0.0, 0.0);
        }
        let (content_w, content_h) = self.content_size(id);
        let (client_w, client_h) = self.client_size(id);
        (
            (content_w - client_w).max(0.0),
            (content_h - client_h).max(0.0),
        )
    }
}

/// Parse `"width: 40px; height: 20px"` into property/value pairs.
fn parse_style_declarations(style: &str) -> impl Iterator<Item = (String, String)> + '_ {
    style.split(';').filter_map(|decl| {
        let (property, value) = decl.split_once(':')?;
        let property = property.trim();
        let value = value.trim();
        (!property.is_empty()).then(|| (property.to_ascii_lowercase(), value.to_string()))
    })
}

fn serialize_style(style: &BTreeMap<String, String>) -> String {
    style
        .iter()
        .map(|(property, value)| format!("{property}: {value};"))
        .collect::<Vec<_>>()
        .join(" ")
}

impl HostDocument for MemoryDocument {
    type Element = NodeId;
    type Listener = MemoryListener;

    fn body(&self) -> Result<NodeId> {
        Ok(self.tree.borrow().body)
    }

    fn create_element(&self, tag: &str) -> Result<NodeId> {
        Ok(self.tree.borrow_mut().alloc(Node {
            tag: tag.to_ascii_lowercase(),
            ..Node::default()
        }))
    }

    fn element_by_id(&self, id: &str) -> Option<NodeId> {
        let tree = self.tree.borrow();
        let body = tree.body;
        // Only attached elements are reachable, as in the DOM.
        std::iter::once(body)
            .chain(tree.descendants(body))
            .find(|&n| {
                tree.node(n)
                    .and_then(|node| node.attributes.get("id"))
                    .is_some_and(|v| v == id)
            })
    }

    fn tag_name(&self, element: &NodeId) -> String {
        self.tree.borrow().tag(*element).to_string()
    }

    fn clone_element(&self, element: &NodeId, deep: bool) -> Result<NodeId> {
        self.tree.borrow_mut().clone_subtree(*element, deep)
    }

    fn append_child(&self, parent: &NodeId, child: &NodeId) -> Result<()> {
        self.tree.borrow_mut().append(*parent, *child)
    }

    fn parent_element(&self, element: &NodeId) -> Option<NodeId> {
        self.tree.borrow().node(*element).and_then(|node| node.parent)
    }

    fn child_elements(&self, element: &NodeId) -> Vec<NodeId> {
        self.tree
            .borrow()
            .node(*element)
            .map(|node| node.children.clone())
            .unwrap_or_default()
    }

    fn elements_by_tag(&self, root: &NodeId, tag: &str) -> Vec<NodeId> {
        self.tree
            .borrow()
            .descendants_by_tag(*root, &tag.to_ascii_lowercase())
    }

    fn attribute(&self, element: &NodeId, name: &str) -> Option<String> {
        let tree = self.tree.borrow();
        let node = tree.node(*element)?;
        if name == "style" {
            return (!node.style.is_empty()).then(|| serialize_style(&node.style));
        }
        node.attributes.get(name).cloned()
    }

    fn set_attribute(&self, element: &NodeId, name: &str, value: &str) -> Result<()> {
        let mut tree = self.tree.borrow_mut();
        tree.revision += 1;
        let node = tree
            .node_mut(*element)
            .ok_or_else(|| Self::missing(*element))?;
        if name == "style" {
            node.style = parse_style_declarations(value).collect();
        } else {
            node.attributes.insert(name.to_string(), value.to_string());
        }
        Ok(())
    }

    fn remove_attribute(&self, element: &NodeId, name: &str) -> Result<()> {
        let mut tree = self.tree.borrow_mut();
        tree.revision += 1;
        let node = tree
            .node_mut(*element)
            .ok_or_else(|| Self::missing(*element))?;
        if name == "style" {
            node.style.clear();
        } else {
            node.attributes.remove(name);
        }
        Ok(())
    }

    fn add_class(&self, element: &NodeId, class: &str) -> Result<()> {
        let mut classes = self.classes(element);
        if !classes.iter().any(|c| c == class) {
            classes.push(class.to_string());
        }
        self.set_attribute(element, "class", &classes.join(" "))
    }

    fn set_style(&self, element: &NodeId, property: &str, value: &str) -> Result<()> {
        let mut tree = self.tree.borrow_mut();
        tree.revision += 1;
        let node = tree
            .node_mut(*element)
            .ok_or_else(|| Self::missing(*element))?;
        node.style
            .insert(property.to_ascii_lowercase(), value.trim().to_string());
        Ok(())
    }

    fn computed_width(&self, element: &NodeId) -> f64 {
        self.tree.borrow().width(*element)
    }

    fn computed_height(&self, element: &NodeId) -> f64 {
        self.tree.borrow().height(*element)
    }

    fn offset_size(&self, element: &NodeId) -> (f64, f64) {
        let tree = self.tree.borrow();
        (tree.width(*element), tree.height(*element))
    }

    fn client_size(&self, element: &NodeId) -> (f64, f64) {
        self.tree.borrow().client_size(*element)
    }

    fn scroll_offset(&self, element: &NodeId) -> (f64, f64) {
        self.tree
            .borrow()
            .node(*element)
            .map_or((0.0, 0.0), |node| (node.scroll_left, node.scroll_top))
    }

    fn set_scroll_left(&self, element: &NodeId, value: f64) {
        let mut tree = self.tree.borrow_mut();
        let (max_x, _) = tree.max_scroll(*element);
        if let Some(node) = tree.node_mut(*element) {
            node.scroll_left = value.clamp(0.0, max_x);
        }
    }

    fn set_scroll_top(&self, element: &NodeId, value: f64) {
        let mut tree = self.tree.borrow_mut();
        let (_, max_y) = tree.max_scroll(*element);
        if let Some(node) = tree.node_mut(*element) {
            node.scroll_top = value.clamp(0.0, max_y);
        }
    }

    fn listen_scroll(
        &self,
        element: &NodeId,
        handler: Box<dyn FnMut()>,
    ) -> Result<MemoryListener> {
        if self.tree.borrow().node(*element).is_none() {
            return Err(Self::missing(*element));
        }
        let mut listeners = self.listeners.borrow_mut();
        listeners.next_id += 1;
        let id = listeners.next_id;
        listeners.entries.push(Registration {
            id,
            target: *element,
            handler: Rc::new(RefCell::new(handler)),
        });
        Ok(MemoryListener {
            id,
            registry: Rc::downgrade(&self.listeners),
        })
    }
}

impl Tree {
    /// All descendants of `root` in document order.
    fn descendants(&self, root: NodeId) -> Vec<NodeId> {
        let mut found = Vec::new();
        let mut stack: Vec<NodeId> = self
            .node(root)
            .map(|node| node.children.iter().rev().copied().collect())
            .unwrap_or_default();
        while let Some(id) = stack.pop() {
            found.push(id);
            if let Some(node) = self.node(id) {
                stack.extend(node.children.iter().rev().copied());
            }
        }
        found
    }
}

/// Helpers for building and inspecting tables in code.
impl MemoryDocument {
    /// Create `<tag>` with optional text and append it to `parent`.
    pub fn append_element(&self, parent: &NodeId, tag: &str, text: &str) -> Result<NodeId> {
        let element = self.create_element(tag)?;
        if !text.is_empty() {
            self.append_text(&element, text);
        }
        self.append_child(parent, &element)?;
        Ok(element)
    }

    /// Inline width as a number, if set in px.
    pub fn style_px(&self, element: &NodeId, property: &str) -> Option<f64> {
        self.style(element, property).and_then(|v| parse_px(&v))
    }

    /// Set an inline size in px.
    pub fn set_style_px(&self, element: &NodeId, property: &str, value: f64) -> Result<()> {
        self.set_style(element, property, &px(value))
    }
}
