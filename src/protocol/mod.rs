//! Envelope protocol between host and guest.
//!
//! A closed tagged union, JSON on the wire, discriminated by a `"type"`
//! field. There are no acknowledgements and no correlation identifiers: a
//! `getElementAtPoint` reply and a pointer-driven notification are the same
//! `elementAtPoint` type, and the host treats the latest one as
//! authoritative.
//!
//! Payloads that fail to decode - or carry a `"type"` this union does not
//! know - are "not for me" rather than errors; the bridge drops them
//! silently (see `bridge::ElementBridge::receive`).

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::ElementDescriptor;

// =============================================================================
// Errors
// =============================================================================

/// Failure to move an envelope across the context boundary.
#[derive(Debug, Error)]
pub enum ProtocolError {
    #[error("failed to decode envelope: {0}")]
    Decode(#[source] serde_json::Error),
    #[error("failed to encode envelope: {0}")]
    Encode(#[source] serde_json::Error),
}

// =============================================================================
// Envelope
// =============================================================================

/// A typed message unit exchanged between host and guest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Envelope {
    /// Guest→Host: sent once, on the transition into active.
    ScriptInjected { success: bool },

    /// Host→Guest: runtime activation toggle.
    #[serde(rename_all = "camelCase")]
    ToggleEditMode { is_active: bool },

    /// Host→Guest: on-demand hit test at a viewport point.
    GetElementAtPoint { x: f64, y: f64 },

    /// Guest→Host: reply to a query, or a pointer-move notification.
    #[serde(rename_all = "camelCase")]
    ElementAtPoint {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        tag_name: String,
    },

    /// Host→Guest: unconditional activation. The payload flag is accepted
    /// for wire compatibility but ignored by dispatch.
    #[serde(rename_all = "camelCase")]
    InitElementHighlighter {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        is_active: Option<bool>,
    },
}

impl Envelope {
    /// The one unsolicited announcement the guest ever sends.
    pub fn script_injected() -> Self {
        Self::ScriptInjected { success: true }
    }

    /// Wrap a resolved descriptor for transit.
    pub fn element_at_point(desc: &ElementDescriptor) -> Self {
        Self::ElementAtPoint {
            x: desc.x,
            y: desc.y,
            width: desc.width,
            height: desc.height,
            tag_name: desc.tag_name.clone(),
        }
    }

    /// Decode a raw payload received from the other context.
    pub fn decode(raw: &str) -> Result<Self, ProtocolError> {
        serde_json::from_str(raw).map_err(ProtocolError::Decode)
    }

    /// Encode for transit to the other context.
    pub fn encode(&self) -> Result<String, ProtocolError> {
        serde_json::to_string(self).map_err(ProtocolError::Encode)
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Rect;

    #[test]
    fn test_script_injected_wire_shape() {
        let json = Envelope::script_injected().encode().unwrap();
        assert_eq!(json, r#"{"type":"scriptInjected","success":true}"#);
    }

    #[test]
    fn test_toggle_edit_mode_decodes_camel_case() {
        let env = Envelope::decode(r#"{"type":"toggleEditMode","isActive":false}"#).unwrap();
        assert_eq!(env, Envelope::ToggleEditMode { is_active: false });
    }

    #[test]
    fn test_get_element_at_point_decodes() {
        let env = Envelope::decode(r#"{"type":"getElementAtPoint","x":12.5,"y":48.0}"#).unwrap();
        assert_eq!(env, Envelope::GetElementAtPoint { x: 12.5, y: 48.0 });
    }

    #[test]
    fn test_element_at_point_wire_shape() {
        let desc = ElementDescriptor::new(Rect::new(4.0, 8.0, 100.0, 24.0), "button");
        let json = Envelope::element_at_point(&desc).encode().unwrap();

        assert!(json.starts_with(r#"{"type":"elementAtPoint""#));
        assert!(json.contains(r#""tagName":"button""#));
        assert!(json.contains(r#""width":100.0"#));
    }

    #[test]
    fn test_init_highlighter_flag_is_optional() {
        let bare = Envelope::decode(r#"{"type":"initElementHighlighter"}"#).unwrap();
        assert_eq!(bare, Envelope::InitElementHighlighter { is_active: None });

        let flagged =
            Envelope::decode(r#"{"type":"initElementHighlighter","isActive":true}"#).unwrap();
        assert_eq!(
            flagged,
            Envelope::InitElementHighlighter {
                is_active: Some(true)
            }
        );
    }

    #[test]
    fn test_unknown_type_fails_to_decode() {
        assert!(Envelope::decode(r#"{"type":"dragElement","x":1.0}"#).is_err());
    }

    #[test]
    fn test_garbage_fails_to_decode() {
        assert!(Envelope::decode("not json at all").is_err());
        assert!(Envelope::decode(r#"{"no":"type field"}"#).is_err());
    }

    #[test]
    fn test_round_trip() {
        let env = Envelope::GetElementAtPoint { x: 1.0, y: 2.0 };
        assert_eq!(Envelope::decode(&env.encode().unwrap()).unwrap(), env);
    }
}
