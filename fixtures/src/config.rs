//! Directory configuration for fixture construction.

use std::path::{Path, PathBuf};

use codec::DictEncoder;
use format::{FormatOptions, FormatResult};

use crate::{create_encoder, resolve_path};

/// Name of the cache subdirectory used by [`FixtureDirs::default`].
pub const CACHE_DIR_NAME: &str = "cache";

/// Where fixture dictionaries and encoder caches live.
///
/// Paths are only joined, never created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixtureDirs {
    /// Directory holding dictionary files.
    pub dict_dir: PathBuf,

    /// Directory handed to directory-backed encoders.
    pub cache_dir: PathBuf,
}

impl Default for FixtureDirs {
    fn default() -> Self {
        let dict_dir = std::env::temp_dir();
        let cache_dir = dict_dir.join(CACHE_DIR_NAME);
        Self {
            dict_dir,
            cache_dir,
        }
    }
}

impl FixtureDirs {
    /// Creates a configuration from explicit directories.
    #[must_use]
    pub fn new(dict_dir: impl Into<PathBuf>, cache_dir: impl Into<PathBuf>) -> Self {
        Self {
            dict_dir: dict_dir.into(),
            cache_dir: cache_dir.into(),
        }
    }

    /// Creates a configuration rooted at `/tmp` regardless of platform.
    #[must_use]
    pub fn for_testing() -> Self {
        Self::new("/tmp", "/tmp/cache")
    }

    /// Resolves the path of `name` inside [`dict_dir`](Self::dict_dir).
    pub fn dict_file(
        &self,
        name: &str,
        version_label: &str,
        options: &FormatOptions,
    ) -> FormatResult<PathBuf> {
        resolve_path(name, version_label, options, &self.dict_dir)
    }

    /// Selects an encoder using the configured cache directory.
    pub fn encoder(&self, path: &Path, options: &FormatOptions) -> FormatResult<DictEncoder> {
        create_encoder(path, options, &self.cache_dir)
    }
}
