//! Guest document model.
//!
//! An arena-backed element tree standing in for the rendered preview
//! document the bridge inspects. Nodes are raw `usize` indices into the
//! arena. Removal recycles the node's slot (and its subtree's) through a
//! free-index pool, so repeated insert/remove cycles - an overlay blinking
//! on and off for the lifetime of the document - never grow the arena. An
//! index is only meaningful while its node is attached.
//!
//! Paint order follows document order: children paint above their parent,
//! later siblings paint above earlier ones. `element_from_point` walks that
//! order from the body down and returns the topmost hit, which is exactly
//! the element a pointer would land on in the rendered page.
//!
//! # Example
//!
//! ```ignore
//! use limelight::document::GuestDocument;
//! use limelight::{Point, Rect};
//!
//! let mut doc = GuestDocument::new(Rect::new(0.0, 0.0, 800.0, 600.0));
//! let div = doc.append_child(doc.body(), "div", Rect::new(10.0, 10.0, 200.0, 100.0));
//! assert_eq!(doc.element_from_point(Point::new(50.0, 50.0)), Some(div));
//! ```

use crate::types::{NodeFlags, Point, Rect};

// =============================================================================
// ElementNode
// =============================================================================

/// A single element in the guest document.
#[derive(Debug, Clone)]
struct ElementNode {
    /// Lower-cased tag name.
    tag: String,
    /// Bounding rect in viewport-fixed coordinates.
    rect: Rect,
    /// Parent index. `None` for the body root and for detached nodes.
    parent: Option<usize>,
    /// Child indices in document (= stacking) order.
    children: Vec<usize>,
    /// Behavior flags.
    flags: NodeFlags,
}

// =============================================================================
// GuestDocument
// =============================================================================

/// The element tree of the embedded preview document.
#[derive(Debug, Clone)]
pub struct GuestDocument {
    nodes: Vec<ElementNode>,
    /// Free index pool for slot reuse.
    free: Vec<usize>,
    body: usize,
}

impl GuestDocument {
    /// Create a document whose body spans the given viewport rect.
    pub fn new(viewport: Rect) -> Self {
        let body = ElementNode {
            tag: "body".to_string(),
            rect: viewport,
            parent: None,
            children: Vec::new(),
            flags: NodeFlags::NONE,
        };
        Self {
            nodes: vec![body],
            free: Vec::new(),
            body: 0,
        }
    }

    /// The body root index.
    pub fn body(&self) -> usize {
        self.body
    }

    /// Append a child element under `parent`, painted above its earlier
    /// siblings. Tag names are stored lower-cased. Reuses a recycled slot
    /// when one is available.
    pub fn append_child(&mut self, parent: usize, tag: &str, rect: Rect) -> usize {
        let node = ElementNode {
            tag: tag.to_ascii_lowercase(),
            rect,
            parent: Some(parent),
            children: Vec::new(),
            flags: NodeFlags::NONE,
        };
        let index = match self.free.pop() {
            Some(index) => {
                self.nodes[index] = node;
                index
            }
            None => {
                self.nodes.push(node);
                self.nodes.len() - 1
            }
        };
        self.nodes[parent].children.push(index);
        index
    }

    /// Detach a node and its subtree from the tree, recycling their slots.
    ///
    /// Removing the body, or a node that is already detached, is a no-op -
    /// in particular a slot is never recycled twice.
    pub fn remove(&mut self, index: usize) {
        if index == self.body {
            return;
        }
        let Some(parent) = self.nodes[index].parent.take() else {
            return;
        };
        self.nodes[parent].children.retain(|&c| c != index);
        self.recycle(index);
    }

    fn recycle(&mut self, index: usize) {
        for child in std::mem::take(&mut self.nodes[index].children) {
            self.nodes[child].parent = None;
            self.recycle(child);
        }
        self.free.push(index);
    }

    /// Reposition a node.
    pub fn set_rect(&mut self, index: usize, rect: Rect) {
        self.nodes[index].rect = rect;
    }

    /// Replace a node's flags.
    pub fn set_flags(&mut self, index: usize, flags: NodeFlags) {
        self.nodes[index].flags = flags;
    }

    /// A node's lower-cased tag name.
    pub fn tag(&self, index: usize) -> &str {
        &self.nodes[index].tag
    }

    /// A node's bounding rect.
    pub fn rect(&self, index: usize) -> Rect {
        self.nodes[index].rect
    }

    /// A node's parent, if attached and not the body root.
    pub fn parent(&self, index: usize) -> Option<usize> {
        self.nodes[index].parent
    }

    /// A node's flags.
    pub fn flags(&self, index: usize) -> NodeFlags {
        self.nodes[index].flags
    }

    /// Whether a node is still reachable from the body.
    pub fn is_attached(&self, index: usize) -> bool {
        let mut current = index;
        loop {
            if current == self.body {
                return true;
            }
            match self.nodes[current].parent {
                Some(parent) => current = parent,
                None => return false,
            }
        }
    }

    // =========================================================================
    // Hit query
    // =========================================================================

    /// The topmost rendered element at `point`.
    ///
    /// Hidden and pointer-transparent nodes are skipped along with their
    /// subtrees. Returns the body itself when the point is inside the
    /// viewport but over no child, and `None` outside the viewport.
    pub fn element_from_point(&self, point: Point) -> Option<usize> {
        self.hit_node(self.body, point)
    }

    fn hit_node(&self, index: usize, point: Point) -> Option<usize> {
        let node = &self.nodes[index];
        if node
            .flags
            .intersects(NodeFlags::HIDDEN | NodeFlags::POINTER_TRANSPARENT)
        {
            return None;
        }

        // Later siblings paint on top, so the first hit walking backwards wins.
        for &child in node.children.iter().rev() {
            if let Some(hit) = self.hit_node(child, point) {
                return Some(hit);
            }
        }

        node.rect.contains(point).then_some(index)
    }
}

// =============================================================================
// TESTS
// =============================================================================
