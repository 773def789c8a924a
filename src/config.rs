//! Launch configuration.
//!
//! The host can request immediate activation without sending a message by
//! loading the preview with `?editMode=true` or `?highlightElements=true`.
//! The query string is read exactly once, at boot; nothing here is runtime
//! state. Only the literal value `"true"` is truthy.

/// Activation flags read from the preview URL's query string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LaunchConfig {
    /// `editMode=true` was present.
    pub edit_mode: bool,
    /// `highlightElements=true` was present.
    pub highlight_elements: bool,
}

impl LaunchConfig {
    /// Parse a query string. A leading `?` is accepted and ignored; unknown
    /// parameters are skipped; a repeated parameter is truthy if any
    /// occurrence is `"true"`.
    pub fn from_query(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);

        let mut config = Self::default();
        for pair in query.split('&') {
            let (key, value) = match pair.split_once('=') {
                Some(kv) => kv,
                None => (pair, ""),
            };
            let truthy = value == "true";
            match key {
                "editMode" => config.edit_mode |= truthy,
                "highlightElements" => config.highlight_elements |= truthy,
                _ => {}
            }
        }
        config
    }

    /// Whether either flag requests activation at load.
    pub fn should_activate(&self) -> bool {
        self.edit_mode || self.highlight_elements
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edit_mode_flag() {
        let config = LaunchConfig::from_query("?editMode=true");
        assert!(config.edit_mode);
        assert!(!config.highlight_elements);
        assert!(config.should_activate());
    }

    #[test]
    fn test_highlight_elements_flag() {
        let config = LaunchConfig::from_query("highlightElements=true&page=2");
        assert!(config.highlight_elements);
        assert!(config.should_activate());
    }

    #[test]
    fn test_only_literal_true_is_truthy() {
        assert!(!LaunchConfig::from_query("?editMode=1").should_activate());
        assert!(!LaunchConfig::from_query("?editMode=TRUE").should_activate());
        assert!(!LaunchConfig::from_query("?editMode").should_activate());
        assert!(!LaunchConfig::from_query("?editMode=false").should_activate());
    }

    #[test]
    fn test_empty_and_unrelated_queries() {
        assert!(!LaunchConfig::from_query("").should_activate());
        assert!(!LaunchConfig::from_query("?utm_source=mail&ref=home").should_activate());
    }

    #[test]
    fn test_both_flags_together() {
        let config = LaunchConfig::from_query("?editMode=true&highlightElements=true");
        assert!(config.edit_mode && config.highlight_elements);
    }
}
