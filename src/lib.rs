//! # limelight
//!
//! Guest-side element inspection bridge for embedded preview documents.
//!
//! A hosting editor embeds a preview document it cannot reach into directly;
//! limelight is the logic living on the preview side of that boundary. It
//! resolves viewport points to semantically meaningful elements, keeps a
//! highlight overlay in sync with the pointer, and speaks a small JSON
//! envelope protocol with the host — no shared memory, no direct access
//! across the boundary.
//!
//! ## Architecture
//!
//! ```text
//! pointer move ─┐
//!               ├→ HitTester → OverlayRenderer (visual)
//! host message ─┘       └────→ HostTransport (elementAtPoint out)
//!
//! launch query ─┐
//!               ├→ ActivationController → scriptInjected (once per activation)
//! toggle msg  ──┘
//! ```
//!
//! Everything is single-threaded and synchronous: work happens only inside
//! pointer and message callbacks, in strict receipt order, and
//! deactivation detaches synchronously so no in-flight work survives it.
//!
//! ## Modules
//!
//! - [`types`] - Core types (Point, Rect, ElementDescriptor, NodeFlags)
//! - [`document`] - Guest document arena and topmost-element-at-point query
//! - [`hit`] - Tag whitelist and point-to-descriptor resolution
//! - [`overlay`] - Singleton highlight node lifecycle
//! - [`state`] - Activation state machine
//! - [`protocol`] - Envelope tagged union and wire codec
//! - [`bridge`] - Dispatch, outbound posting, origin policy
//! - [`config`] - Launch-time query parameter flags

pub mod bridge;
pub mod config;
pub mod document;
pub mod hit;
pub mod overlay;
pub mod protocol;
pub mod state;
pub mod types;

// Re-export commonly used items
pub use types::*;

pub use bridge::{ElementBridge, HostTransport, OriginPolicy};
pub use config::LaunchConfig;
pub use document::GuestDocument;
pub use hit::{is_target_tag, resolve, TARGET_TAGS};
pub use overlay::OverlayRenderer;
pub use protocol::{Envelope, ProtocolError};
pub use state::{ActivationController, Transition};
