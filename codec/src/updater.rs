//! Updater handles.
//!
//! Updaters modify an encoded dictionary in place, so they are only built
//! for formats that support dynamic update and always map the file
//! writable.

use std::path::{Path, PathBuf};

use format::AccessMode;

use crate::{CodecFamily, FileBinding};

/// Access mode every updater opens its backing storage with.
pub const UPDATER_ACCESS_MODE: AccessMode = AccessMode::WritableByteBuffer;

/// Updater for the single-file container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ver3DictUpdater {
    binding: FileBinding,
}

impl Ver3DictUpdater {
    /// Creates an updater for the file at `path`.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            binding: FileBinding::new(path, UPDATER_ACCESS_MODE),
        }
    }

    /// Returns the file binding.
    #[must_use]
    pub const fn binding(&self) -> &FileBinding {
        &self.binding
    }
}

/// Updater for the directory-backed container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ver4DictUpdater {
    binding: FileBinding,
}

impl Ver4DictUpdater {
    /// Creates an updater for the dictionary at `path`.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            binding: FileBinding::new(path, UPDATER_ACCESS_MODE),
        }
    }

    /// Returns the file binding.
    #[must_use]
    pub const fn binding(&self) -> &FileBinding {
        &self.binding
    }
}

/// An updater of either family.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DictUpdater {
    Ver3(Ver3DictUpdater),
    Ver4(Ver4DictUpdater),
}

impl DictUpdater {
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
            Self::Ver3(updater) => updater.binding(),
            Self::Ver4(updater) => updater.binding(),
        }
    }

    /// Returns the bound location.
    #[must_use]
    pub fn path(&self) -> &Path {
        self.binding().path()
    }

    /// Returns the access mode, always [`UPDATER_ACCESS_MODE`].
    #[must_use]
    pub const fn access_mode(&self) -> AccessMode {
        self.binding().access_mode()
    }
}

impl From<Ver3DictUpdater> for DictUpdater {
    fn from(updater: Ver3DictUpdater) -> Self {
        Self::Ver3(updater)
    }
}

impl From<Ver4DictUpdater> for DictUpdater {
    fn from(updater: Ver4DictUpdater) -> Self {
        Self::Ver4(updater)
    }
}
