//! Dictionary identity attributes and locale processing flags.

use std::collections::HashMap;

/// Attribute key holding the dictionary id.
pub const DICTIONARY_ATTRIBUTE: &str = "dictionary";

/// Attribute key holding the human-readable version label.
pub const VERSION_ATTRIBUTE: &str = "version";

/// Metadata stamped alongside dictionary content.
///
/// The locale flags only select normalization performed by the codecs;
/// nothing here acts on them.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DictionaryOptions {
    /// Free-form identity attributes.
    pub attributes: HashMap<String, String>,
    /// Fold German umlauts.
    pub german_umlaut_processing: bool,
    /// Expand French ligatures.
    pub french_ligature_processing: bool,
}

impl DictionaryOptions {
    /// Creates options from an attribute map and both locale flags.
    #[must_use]
    pub const fn new(
        attributes: HashMap<String, String>,
        german_umlaut_processing: bool,
        french_ligature_processing: bool,
    ) -> Self {
        Self {
            attributes,
            german_umlaut_processing,
            french_ligature_processing,
        }
    }

    /// Returns the value stored under `key`.
    #[must_use]
    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }

    /// Stores `value` under `key`, returning the previous value.
    pub fn insert_attribute(
        &mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Option<String> {
        self.attributes.insert(key.into(), value.into())
    }

    /// Returns the dictionary id attribute.
    #[must_use]
    pub fn dictionary_id(&self) -> Option<&str> {
        self.attribute(DICTIONARY_ATTRIBUTE)
    }

    /// Returns the version label attribute.
    #[must_use]
    pub fn version_label(&self) -> Option<&str> {
        self.attribute(VERSION_ATTRIBUTE)
    }
}
