//! Dictionary options for test fixtures.

use std::collections::HashMap;

use format::{DictionaryOptions, DICTIONARY_ATTRIBUTE, VERSION_ATTRIBUTE};

/// Builds fixture options identifying dictionary `id` at `version_label`.
///
/// Both locale flags are off and the attribute map holds exactly the
/// `dictionary` and `version` entries. Every call returns a fresh map.
#[must_use]
pub fn build_options(id: &str, version_label: &str) -> DictionaryOptions {
    let mut options = DictionaryOptions::new(HashMap::with_capacity(2), false, false);
    options.insert_attribute(DICTIONARY_ATTRIBUTE, id);
    options.insert_attribute(VERSION_ATTRIBUTE, version_label);
    options
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_attributes() {
        let options = build_options("foo", "12");
        let expected: HashMap<String, String> = [
            ("dictionary".to_string(), "foo".to_string()),
            ("version".to_string(), "12".to_string()),
        ]
        .into_iter()
        .collect();
        assert_eq!(options.attributes, expected);
        assert!(!options.german_umlaut_processing);
        assert!(!options.french_ligature_processing);
    }

    #[test]
    fn repeated_calls_are_equal_and_independent() {
        let first = build_options("foo", "12");
        let mut second = build_options("foo", "12");
        assert_eq!(first, second);

        second.insert_attribute("locale", "en_US");
        second.insert_attribute(VERSION_ATTRIBUTE, "13");
        assert_eq!(first.attributes.len(), 2);
        assert_eq!(first.version_label(), Some("12"));
        assert_ne!(first, second);
    }

    #[test]
    fn empty_strings_are_kept() {
        let options = build_options("", "");
        assert_eq!(options.dictionary_id(), Some(""));
        assert_eq!(options.version_label(), Some(""));
    }
}
