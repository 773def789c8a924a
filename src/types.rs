//! Core types for limelight.
//!
//! Geometry is expressed in CSS pixels in the viewport-fixed coordinate space
//! of the guest document — the same space the host receives in
//! `elementAtPoint` payloads, so no translation happens at the boundary.

use serde::{Deserialize, Serialize};

// =============================================================================
// Point
// =============================================================================

/// A viewport-relative point in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Create a new point.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

// =============================================================================
// Rect
// =============================================================================

/// An axis-aligned rectangle in viewport-fixed coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    /// Create a new rect.
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Check whether a point lies inside this rect.
    ///
    /// Half-open on the far edges: the left/top edge is inside, the
    /// right/bottom edge is not. Two adjacent siblings sharing an edge
    /// therefore never both claim a point on it - the same rule the
    /// rendered page applies when resolving an element from a point.
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x
            && point.x < self.x + self.width
            && point.y >= self.y
            && point.y < self.y + self.height
    }
}

// =============================================================================
// ElementDescriptor
// =============================================================================

/// Geometry and tag of a resolved element, as reported to the host.
///
/// Produced fresh on every hit test and never persisted. The wire form uses
/// camelCase (`tagName`) because that is what the host-side editor speaks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementDescriptor {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub tag_name: String,
}

impl ElementDescriptor {
    /// Build a descriptor from a bounding rect and a lower-cased tag name.
    pub fn new(rect: Rect, tag_name: impl Into<String>) -> Self {
        Self {
            x: rect.x,
            y: rect.y,
            width: rect.width,
            height: rect.height,
            tag_name: tag_name.into(),
        }
    }

    /// The descriptor's bounding rect.
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }
}

// =============================================================================
// Node Flags (bitflags)
// =============================================================================

bitflags::bitflags! {
    /// Per-node behavior flags in the guest document.
    ///
    /// Combine with bitwise OR: `NodeFlags::OVERLAY | NodeFlags::POINTER_TRANSPARENT`
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct NodeFlags: u8 {
        const NONE = 0;
        /// Node is invisible and excluded from hit testing.
        const HIDDEN = 1 << 0;
        /// Node never intercepts pointer hits (CSS `pointer-events: none`).
        const POINTER_TRANSPARENT = 1 << 1;
        /// Node is the highlight overlay, painted above page content.
        const OVERLAY = 1 << 2;
    }
}

// =============================================================================
// TESTS
// =============================================================================
