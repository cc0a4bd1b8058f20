//! Encoder handles.

use std::path::{Path, PathBuf};

use crate::CodecFamily;

/// Encoder for the single-file container, bound to its output file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ver3DictEncoder {
    path: PathBuf,
}

impl Ver3DictEncoder {
    /// Creates an encoder that writes to `path`.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the output file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Encoder for the directory-backed container, bound to its cache directory.
///
/// The final dictionary location is chosen by the encoder itself inside the
/// cache directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ver4DictEncoder {
    cache_dir: PathBuf,
}

impl Ver4DictEncoder {
    /// Creates an encoder that writes under `cache_dir`.
    #[must_use]
    pub fn new(cache_dir: impl Into<PathBuf>) -> Self {
        Self {
            cache_dir: cache_dir.into(),
        }
    }

    /// Returns the cache directory.
    #[must_use]
    pub fn cache_dir(&self) -> &Path {
        &self.cache_dir
    }
}

/// An encoder of either family.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DictEncoder {
    Ver3(Ver3DictEncoder),
    Ver4(Ver4DictEncoder),
}

impl DictEncoder {
    /// Returns the implementation family.
    #[must_use]
    pub const fn family(&self) -> CodecFamily {
        match self {
            Self::Ver3(_) => CodecFamily::Ver3,
            Self::Ver4(_) => CodecFamily::Ver4,
        }
    }

    /// Returns where the encoder writes: a file for [`CodecFamily::Ver3`],
    /// a cache directory for [`CodecFamily::Ver4`].
    #[must_use]
    pub fn output(&self) -> &Path {
        match self {
            Self::Ver3(encoder) => encoder.path(),
            Self::Ver4(encoder) => encoder.cache_dir(),
        }
    }
}

impl From<Ver3DictEncoder> for DictEncoder {
    fn from(encoder: Ver3DictEncoder) -> Self {
        Self::Ver3(encoder)
    }
}

impl From<Ver4DictEncoder> for DictEncoder {
    fn from(encoder: Ver4DictEncoder) -> Self {
        Self::Ver4(encoder)
    }
}
