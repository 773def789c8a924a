//! Message bridge - inbound dispatch and outbound posting.
//!
//! The bridge wires the leaf components together: inbound envelopes and raw
//! pointer events come in, hit tests and overlay updates happen
//! synchronously, and replies go back out through the [`HostTransport`]
//! seam. Everything runs on the caller's thread in strict receipt order;
//! there is no queueing, coalescing, or debouncing, so a fast pointer sweep
//! produces one full hit-test-plus-message cycle per move event.
//!
//! # Example
//!
//! ```ignore
//! use limelight::{ElementBridge, GuestDocument, HostTransport, LaunchConfig, Point, Rect};
//!
//! struct PostMessagePort;
//!
//! impl HostTransport for PostMessagePort {
//!     fn post(&self, payload: &str, target_origin: &str) {
//!         // hand the payload to the embedding page's postMessage
//!     }
//! }
//!
//! let doc = GuestDocument::new(Rect::new(0.0, 0.0, 800.0, 600.0));
//! let mut bridge = ElementBridge::new(doc, PostMessagePort);
//! bridge.boot(&LaunchConfig::from_query("?editMode=true"));
//! bridge.pointer_moved(Point::new(120.0, 80.0));
//! ```

use spark_signals::{signal, Signal};

use crate::config::LaunchConfig;
use crate::document::GuestDocument;
use crate::hit;
use crate::overlay::OverlayRenderer;
use crate::protocol::Envelope;
use crate::state::{ActivationController, Transition};
use crate::types::{ElementDescriptor, Point};

// =============================================================================
// HostTransport
// =============================================================================

/// Outbound half of the context boundary.
///
/// The embedder supplies the actual delivery mechanism (postMessage, a test
/// recorder, a channel). `target_origin` is `"*"` under the default policy;
/// the transport must not assume anything about the recipient beyond that.
pub trait HostTransport {
    fn post(&self, payload: &str, target_origin: &str);
}

// =============================================================================
// OriginPolicy
// =============================================================================

/// Where outbound envelopes are addressed.
///
/// The wildcard reproduces the original behavior (no origin restriction, a
/// documented gap); stricter deployments swap in an allow-list without
/// touching dispatch logic.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum OriginPolicy {
    /// Address every message to `"*"`.
    #[default]
    Wildcard,
    /// Post one copy per listed origin.
    AllowList(Vec<String>),
}

// =============================================================================
// ElementBridge
// =============================================================================

/// Guest-side entry point: owns the document model, the activation state,
/// and the overlay, and speaks the envelope protocol with the host.
pub struct ElementBridge<T: HostTransport> {
    doc: GuestDocument,
    controller: ActivationController,
    overlay: OverlayRenderer,
    transport: T,
    policy: OriginPolicy,
    hovered: Signal<Option<ElementDescriptor>>,
}

impl<T: HostTransport> ElementBridge<T> {
    /// Create an inactive bridge over a document, posting through
    /// `transport` under the default wildcard policy.
    pub fn new(doc: GuestDocument, transport: T) -> Self {
        Self {
            doc,
            controller: ActivationController::new(),
            overlay: OverlayRenderer::new(),
            transport,
            policy: OriginPolicy::Wildcard,
            hovered: signal(None),
        }
    }

    /// Replace the outbound origin policy.
    pub fn with_policy(mut self, policy: OriginPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Apply the load-time activation trigger. Called once after the
    /// document is ready; a truthy query flag activates immediately and
    /// emits the `scriptInjected` announcement.
    pub fn boot(&mut self, config: &LaunchConfig) {
        if config.should_activate() {
            self.apply(true);
        }
    }

    // =========================================================================
    // Inbound
    // =========================================================================

    /// Handle one raw payload received from the host.
    ///
    /// Anything that does not decode to a known envelope - malformed JSON,
    /// unknown `"type"`, a missing tag - is not for us and is dropped
    /// without a diagnostic or state change. Guest→Host envelope types
    /// arriving inbound are ignored the same way.
    pub fn receive(&mut self, raw: &str) {
        let envelope = match Envelope::decode(raw) {
            Ok(envelope) => envelope,
            Err(err) => {
                tracing::trace!(%err, "ignoring unrecognized inbound payload");
                return;
            }
        };

        match envelope {
            Envelope::ToggleEditMode { is_active } => self.apply(is_active),
            Envelope::InitElementHighlighter { .. } => self.apply(true),
            Envelope::GetElementAtPoint { x, y } => {
                // Reply only on a match; a miss sends nothing.
                if let Some(desc) = hit::resolve(&self.doc, Point::new(x, y)) {
                    self.post(&Envelope::element_at_point(&desc));
                }
            }
            // Our own outbound types looping back: not for us.
            Envelope::ScriptInjected { .. } | Envelope::ElementAtPoint { .. } => {}
        }
    }

    /// Handle a pointer move over the document. No-op while inactive.
    ///
    /// A match repositions the overlay and notifies the host; a miss clears
    /// the overlay silently.
    pub fn pointer_moved(&mut self, point: Point) {
        if !self.controller.is_active() {
            return;
        }

        match hit::resolve(&self.doc, point) {
            Some(desc) => {
                self.overlay.show(&mut self.doc, desc.rect());
                self.post(&Envelope::element_at_point(&desc));
                self.hovered.set(Some(desc));
            }
            None => {
                self.overlay.hide(&mut self.doc);
                self.hovered.set(None);
            }
        }
    }

    /// Handle the pointer leaving the document: clear the overlay, send
    /// nothing.
    pub fn pointer_left(&mut self) {
        self.overlay.hide(&mut self.doc);
        self.hovered.set(None);
    }

    // =========================================================================
    // Activation plumbing
    // =========================================================================

    /// Single transition point for both producers (boot config and runtime
    /// messages). The `scriptInjected` announcement fires only on the edge
    /// into `active`, so redundant triggers stay silent.
    fn apply(&mut self, is_active: bool) {
        match self.controller.toggle(is_active) {
            Transition::Activated => self.post(&Envelope::script_injected()),
            Transition::Deactivated => {
                self.overlay.hide(&mut self.doc);
                self.hovered.set(None);
            }
            Transition::NoChange => {}
        }
    }

    // =========================================================================
    // Outbound
    // =========================================================================

    fn post(&self, envelope: &Envelope) {
        let payload = match envelope.encode() {
            Ok(payload) => payload,
            Err(err) => {
                tracing::warn!(%err, "dropping outbound envelope");
                return;
            }
        };

        match &self.policy {
            OriginPolicy::Wildcard => self.transport.post(&payload, "*"),
            OriginPolicy::AllowList(origins) => {
                for origin in origins {
                    self.transport.post(&payload, origin);
                }
            }
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Whether highlighting is currently live.
    pub fn is_active(&self) -> bool {
        self.controller.is_active()
    }

    /// Whether the highlight overlay node currently exists.
    pub fn overlay_visible(&self) -> bool {
        self.overlay.is_visible()
    }

    /// The last pointer-driven hit, as a reactive signal.
    pub fn hovered(&self) -> Signal<Option<ElementDescriptor>> {
        self.hovered.clone()
    }

    /// The document under inspection.
    pub fn document(&self) -> &GuestDocument {
        &self.doc
    }

    /// Mutable access for the embedder to keep the model in sync with the
    /// rendered page.
    pub fn document_mut(&mut self) -> &mut GuestDocument {
        &mut self.doc
    }
}

// =============================================================================
// TESTS
// =============================================================================
