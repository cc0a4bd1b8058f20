//! Version-aware test fixture factory for makedict binary dictionaries.
//!
//! Given [`FormatOptions`](format::FormatOptions), this crate decides:
//!
//! - where a test dictionary lives ([`resolve_path`])
//! - which encoder, decoder or updater handles it ([`create_encoder`],
//!   [`create_decoder`], [`create_updater`])
//! - which identity attributes it carries ([`build_options`])
//!
//! Unsupported versions fail with
//! [`FormatError::UnsupportedFormatVersion`](format::FormatError) and should
//! abort the calling test.
//!
//! # Example
//!
//! ```
//! use std::path::Path;
//!
//! use codec::DictEncoder;
//! use fixtures::{create_encoder, resolve_path};
//! use format::FormatOptions;
//!
//! let options = FormatOptions::VERSION4_WITH_DYNAMIC_UPDATE_AND_TIMESTAMP;
//! let path = resolve_path("testdict1", "4", &options, Path::new("/tmp")).unwrap();
//! assert_eq!(path, Path::new("/tmp/testdict1.4"));
//!
//! let encoder = create_encoder(&path, &options, Path::new("/tmp/cache")).unwrap();
//! assert!(matches!(encoder, DictEncoder::Ver4(_)));
//! ```

mod config;
mod factory;
mod options;
mod path;

pub use config::{FixtureDirs, CACHE_DIR_NAME};
pub use factory::{create_decoder, create_encoder, create_updater};
pub use options::build_options;
pub use path::{resolve_path, TEST_DICT_FILE_EXTENSION};
