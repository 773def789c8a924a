//! Highlight overlay lifecycle.
//!
//! Owns the single highlight node. The node is created lazily on the first
//! `show`, appended last under the body so it paints above page content, and
//! flagged pointer-transparent so it never intercepts hit testing. `hide`
//! detaches and discards it. No other component touches the node directly;
//! the singleton invariant lives entirely inside this type.

use crate::document::GuestDocument;
use crate::types::{NodeFlags, Rect};

/// Tag used for the overlay node. Cosmetic only; the node is excluded from
/// hit testing regardless.
const OVERLAY_TAG: &str = "div";

// =============================================================================
// OverlayRenderer
// =============================================================================

/// Owner of the singleton highlight-box node.
#[derive(Debug, Default)]
pub struct OverlayRenderer {
    node: Option<usize>,
}

impl OverlayRenderer {
    /// Create a renderer with no overlay shown.
    pub fn new() -> Self {
        Self::default()
    }

    /// Show the overlay over `rect`, creating the node on first use and
    /// unconditionally repositioning it afterwards.
    ///
    /// If the embedder detached our node through the document (slots are
    /// recycled, so the index may even belong to an unrelated element by
    /// now), a fresh node is created instead of repositioning the stale one.
    pub fn show(&mut self, doc: &mut GuestDocument, rect: Rect) {
        let node = match self.node {
            Some(node) if doc.is_attached(node) && doc.flags(node).contains(NodeFlags::OVERLAY) => {
                node
            }
            _ => {
                let node = doc.append_child(doc.body(), OVERLAY_TAG, rect);
                doc.set_flags(node, NodeFlags::OVERLAY | NodeFlags::POINTER_TRANSPARENT);
                self.node = Some(node);
                node
            }
        };
        doc.set_rect(node, rect);
    }

    /// Detach and discard the overlay node. Safe to call when none exists.
    pub fn hide(&mut self, doc: &mut GuestDocument) {
        if let Some(node) = self.node.take() {
            doc.remove(node);
        }
    }

    /// Whether the overlay node currently exists.
    pub fn is_visible(&self) -> bool {
        self.node.is_some()
    }

    /// The overlay node's index while visible.
    pub fn node(&self) -> Option<usize> {
        self.node
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Point;

    fn doc() -> GuestDocument {
        GuestDocument::new(Rect::new(0.0, 0.0, 800.0, 600.0))
    }

    #[test]
    fn test_show_creates_singleton_lazily() {
        let mut doc = doc();
        let mut overlay = OverlayRenderer::new();
        assert!(!overlay.is_visible());

        overlay.show(&mut doc, Rect::new(10.0, 10.0, 100.0, 50.0));
        let first = overlay.node().unwrap();

        overlay.show(&mut doc, Rect::new(30.0, 30.0, 80.0, 20.0));
        assert_eq!(overlay.node(), Some(first)); // reused, not recreated
        assert_eq!(doc.rect(first), Rect::new(30.0, 30.0, 80.0, 20.0));
    }

    #[test]
    fn test_overlay_never_intercepts_hits() {
        let mut doc = doc();
        let div = doc.append_child(doc.body(), "div", Rect::new(0.0, 0.0, 200.0, 200.0));
        let mut overlay = OverlayRenderer::new();

        overlay.show(&mut doc, Rect::new(0.0, 0.0, 200.0, 200.0));

        // The overlay sits above the div in paint order but is transparent.
        assert_eq!(doc.element_from_point(Point::new(50.0, 50.0)), Some(div));
    }

    #[test]
    fn test_hide_detaches_and_is_idempotent() {
        let mut doc = doc();
        let mut overlay = OverlayRenderer::new();

        overlay.show(&mut doc, Rect::new(0.0, 0.0, 10.0, 10.0));
        let node = overlay.node().unwrap();

        overlay.hide(&mut doc);
        assert!(!overlay.is_visible());
        assert!(!doc.is_attached(node));

        // Hiding again is a no-op.
        overlay.hide(&mut doc);
        assert!(!overlay.is_visible());
    }

    #[test]
    fn test_show_after_hide_reattaches() {
        let mut doc = doc();
        let mut overlay = OverlayRenderer::new();

        overlay.show(&mut doc, Rect::new(0.0, 0.0, 10.0, 10.0));
        overlay.hide(&mut doc);

        overlay.show(&mut doc, Rect::new(5.0, 5.0, 10.0, 10.0));
        let node = overlay.node().unwrap();

        assert!(doc.is_attached(node));
        assert!(doc.flags(node).contains(NodeFlags::OVERLAY));
        assert_eq!(doc.rect(node), Rect::new(5.0, 5.0, 10.0, 10.0));
    }

    #[test]
    fn test_show_hide_cycles_do_not_grow_arena() {
        let mut doc = doc();
        let mut overlay = OverlayRenderer::new();

        overlay.show(&mut doc, Rect::new(0.0, 0.0, 10.0, 10.0));
        let first = overlay.node().unwrap();
        overlay.hide(&mut doc);

        // A pointer sweep alternating match/miss for the lifetime of the
        // document must recycle the same slot, not allocate a new one each
        // cycle.
        for _ in 0..5 {
            overlay.show(&mut doc, Rect::new(0.0, 0.0, 10.0, 10.0));
            assert_eq!(overlay.node(), Some(first));
            overlay.hide(&mut doc);
        }
    }

    #[test]
    fn test_show_recovers_from_external_detach() {
        let mut doc = doc();
        let mut overlay = OverlayRenderer::new();

        overlay.show(&mut doc, Rect::new(0.0, 0.0, 10.0, 10.0));
        let stale = overlay.node().unwrap();

        // Embedder drops our node while syncing the model, then reuses the
        // slot for an unrelated element.
        doc.remove(stale);
        let imposter = doc.append_child(doc.body(), "p", Rect::new(0.0, 0.0, 50.0, 50.0));
        assert_eq!(imposter, stale); // recycled slot

        overlay.show(&mut doc, Rect::new(5.0, 5.0, 10.0, 10.0));
        let node = overlay.node().unwrap();

        assert_ne!(node, imposter); // the unrelated element is untouched
        assert!(doc.is_attached(node));
        assert!(doc.flags(node).contains(NodeFlags::OVERLAY));
        assert_eq!(doc.rect(imposter), Rect::new(0.0, 0.0, 50.0, 50.0));
    }
}
