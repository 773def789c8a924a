//! Hit testing - viewport point to meaningful element.
//!
//! Resolution runs in two steps:
//! 1. Ask the document for the topmost rendered element at the point.
//! 2. If its tag is not in the target set, climb strictly upward through
//!    ancestors - stopping at, and excluding, the body - and take the first
//!    whitelisted tag found.
//!
//! The nearest qualifying ancestor wins; the climb never descends back into
//! siblings or children. Given the same document and point the result is
//! deterministic.

use crate::document::GuestDocument;
use crate::types::{ElementDescriptor, Point};

// =============================================================================
// Tag whitelist
// =============================================================================

/// Tags eligible to be reported as an inspected element.
///
/// Structural containers, headings, inline text, links, media, and
/// list/table elements. Everything else is treated as presentation detail
/// and resolved to its nearest qualifying ancestor.
pub const TARGET_TAGS: &[&str] = &[
    "div", "p", "span", "h1", "h2", "h3", "h4", "h5", "h6", "a", "button", "img", "section",
    "article", "header", "footer", "nav", "main", "aside", "ul", "ol", "li", "table", "tr", "td",
    "th",
];

/// Check whether a lower-cased tag name is in the target set.
pub fn is_target_tag(tag: &str) -> bool {
    TARGET_TAGS.contains(&tag)
}

// =============================================================================
// Resolution
// =============================================================================

/// Resolve a viewport point to the descriptor of the nearest whitelisted
/// element, or `None` when nothing qualifies.
///
/// A miss is a normal outcome, not an error: points outside the viewport,
/// and points whose entire ancestor chain up to (but excluding) the body is
/// non-whitelisted, both resolve to `None`.
pub fn resolve(doc: &GuestDocument, point: Point) -> Option<ElementDescriptor> {
    let element = doc.element_from_point(point)?;
    let body = doc.body();

    let mut current = element;
    while current != body {
        let tag = doc.tag(current);
        if is_target_tag(tag) {
            return Some(ElementDescriptor::new(doc.rect(current), tag));
        }
        current = doc.parent(current)?;
    }

    None
}

// =============================================================================
// TESTS
// =============================================================================
