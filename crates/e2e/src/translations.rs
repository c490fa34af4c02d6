//! Localized label lookup
//!
//! The UI renders some controls with translated accessible names. Checks must
//! resolve those labels through the app's translation resource rather than
//! hardcoding localized text, so a locale bump does not break the suite. The
//! resource is loaded once per run and shared read-only afterwards.

use std::path::Path;

use serde_json::Value;

use crate::error::{E2eError, E2eResult};

#[derive(Debug, Clone)]
pub struct Translations {
    root: Value,
}

impl Translations {
    /// Parse a translation resource from a JSON string.
    pub fn from_json(json: &str) -> E2eResult<Self> {
        Ok(Self {
            root: serde_json::from_str(json)?,
        })
    }

    /// Load the translation resource from disk.
    pub fn load(path: &Path) -> E2eResult<Self> {
        let content =
            std::fs::read_to_string(path).map_err(|e| E2eError::TranslationResource {
                path: path.display().to_string(),
                source: e,
            })?;
        Self::from_json(&content)
    }

    /// Resolve a dotted key path, e.g. `aria.move-preview-to-new-window`,
    /// to the localized display string.
    pub fn resolve(&self, key: &str) -> E2eResult<String> {
        let mut node = &self.root;
        for part in key.split('.') {
            node = node
                .get(part)
                .ok_or_else(|| E2eError::TranslationKey(key.to_string()))?;
        }
        node.as_str()
            .map(str::to_owned)
            .ok_or_else(|| E2eError::TranslationKey(key.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "aria": {
            "move-preview-to-new-window": "Move preview to new window"
        },
        "buttons": { "run": "Run" }
    }"#;

    #[test]
    fn resolves_nested_key() {
        let t = Translations::from_json(SAMPLE).unwrap();
        assert_eq!(
            t.resolve("aria.move-preview-to-new-window").unwrap(),
            "Move preview to new window"
        );
    }

    #[test]
    fn missing_key_is_an_error() {
        let t = Translations::from_json(SAMPLE).unwrap();
        let err = t.resolve("aria.no-such-key").unwrap_err();
        assert!(matches!(err, E2eError::TranslationKey(_)));
    }

    #[test]
    fn non_string_leaf_is_an_error() {
        let t = Translations::from_json(SAMPLE).unwrap();
        let err = t.resolve("aria").unwrap_err();
        assert!(matches!(err, E2eError::TranslationKey(_)));
    }

    #[test]
    fn invalid_json_is_an_error() {
        assert!(Translations::from_json("not json").is_err());
    }
}
