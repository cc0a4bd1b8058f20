//! Decoder handles.

use std::path::{Path, PathBuf};

use format::AccessMode;

use crate::{CodecFamily, FileBinding};

/// Decoder for the single-file container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ver3DictDecoder {
    binding: FileBinding,
}

impl Ver3DictDecoder {
    /// Creates a decoder reading `path` with `access_mode`.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>, access_mode: AccessMode) -> Self {
        Self {
            binding: FileBinding::new(path, access_mode),
        }
    }

    /// Returns the file binding.
    #[must_use]
    pub const fn binding(&self) -> &FileBinding {
        &self.binding
    }
}

/// Decoder for the directory-backed container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ver4DictDecoder {
    binding: FileBinding,
}

impl Ver4DictDecoder {
    /// Creates a decoder reading the dictionary at `path` with `access_mode`.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>, access_mode: AccessMode) -> Self {
        Self {
            binding: FileBinding::new(path, access_mode),
        }
    }

    /// Returns the file binding.
    #[must_use]
    pub const fn binding(&self) -> &FileBinding {
        &self.binding
    }
}

/// A decoder of either family.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DictDecoder {
    Ver3(Ver3DictDecoder),
    Ver4(Ver4DictDecoder),
}

impl DictDecoder {
    /// Returns the implementation family.
    #[must_use]
    pub const fn family(&self) -> CodecFamily {
        match self {
            Self::Ver3(_) => CodecFamily::Ver3,
            Self::Ver4(_) => CodecFamily::Ver4,
        }
    }

    /// Returns the file binding.
    #[must_use]
    pub const fn binding(&self) -> &FileBinding {
        match self {
            Self::Ver3(decoder) => decoder.binding(),
            Self::Ver4(decoder) => decoder.binding(),
        }
    }

    /// Returns the bound location.
    #[must_use]
    pub fn path(&self) -> &Path {
        self.binding().path()
    }

    /// Returns the access mode.
    #[must_use]
    pub const fn access_mode(&self) -> AccessMode {
        self.binding().access_mode()
    }
}

impl From<Ver3DictDecoder> for DictDecoder {
    fn from(decoder: Ver3DictDecoder) -> Self {
        Self::Ver3(decoder)
    }
}

impl From<Ver4DictDecoder> for DictDecoder {
    fn from(decoder: Ver4DictDecoder) -> Self {
        Self::Ver4(decoder)
    }
}
