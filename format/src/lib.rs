//! Format version capability model for makedict binary dictionaries.
//!
//! This crate describes *which* dictionary format is requested, not how its
//! bytes are laid out. Raw [`FormatOptions`] are resolved into the closed
//! [`DictFormat`] enum, and every caller that dispatches on a version matches
//! that enum exhaustively.
//!
//! # Design Principles
//!
//! - **Lazy validation** - Options construct freely; unsupported versions fail at dispatch.
//! - **Closed version set** - Adding a version is a compile error at every dispatch site.
//! - **No I/O** - Everything here is plain data.
//!
//! # Example
//!
//! ```
//! use format::{DictFormat, FormatOptions};
//!
//! let format = FormatOptions::VERSION4_WITH_DYNAMIC_UPDATE.format().unwrap();
//! assert!(matches!(format, DictFormat::V4 { supports_dynamic_update: true, .. }));
//! assert!(FormatOptions::new(5).format().is_err());
//! ```

mod access;
mod error;
mod options;
mod version;

pub use access::{AccessMode, USE_BYTE_ARRAY, USE_BYTE_BUFFER};
pub use error::{FormatError, FormatResult, Operation};
pub use options::{DictionaryOptions, DICTIONARY_ATTRIBUTE, VERSION_ATTRIBUTE};
pub use version::{
    DictFormat, FormatOptions, FIRST_VERSION_WITH_DYNAMIC_UPDATE, FIRST_VERSION_WITH_TERMINAL_ID,
    MAXIMUM_SUPPORTED_VERSION, MINIMUM_SUPPORTED_VERSION, VERSION2, VERSION3, VERSION4,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn public_api_exports() {
        let _ = FormatOptions::PRESETS;
        let _ = DictFormat::V2;
        let _ = AccessMode::WritableByteBuffer;
        let _ = DictionaryOptions::default();
        let _ = Operation::Path;
        let _ = (USE_BYTE_ARRAY, USE_BYTE_BUFFER);
        let _ = (DICTIONARY_ATTRIBUTE, VERSION_ATTRIBUTE);

        let _: FormatResult<()> = Ok(());
    }

    #[test]
    fn every_preset_is_supported() {
        for preset in FormatOptions::PRESETS {
            assert!(preset.is_supported_version());
            assert_eq!(preset.format().unwrap().version(), preset.version);
        }
    }

    #[test]
    fn value_types_are_thread_safe() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<FormatOptions>();
        assert_send_sync::<DictFormat>();
        assert_send_sync::<DictionaryOptions>();
        assert_send_sync::<FormatError>();
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_roundtrip_options() {
        let options = FormatOptions::VERSION4_WITH_DYNAMIC_UPDATE_AND_TIMESTAMP;
        let json = serde_json::to_string(&options).unwrap();
        let back: FormatOptions = serde_json::from_str(&json).unwrap();
        assert_eq!(back, options);

        let mut dict = DictionaryOptions::default();
        dict.insert_attribute(DICTIONARY_ATTRIBUTE, "foo");
        let json = serde_json::to_string(&dict).unwrap();
        let back: DictionaryOptions = serde_json::from_str(&json).unwrap();
        assert_eq!(back, dict);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_negative_version_reaches_dispatch() {
        let json = r#"{"version":-3,"supports_dynamic_update":false,"has_timestamp":false}"#;
        let options: FormatOptions = serde_json::from_str(json).unwrap();
        assert_eq!(
            options.format(),
            Err(FormatError::unsupported(-3, Operation::Format))
        );
    }
}
