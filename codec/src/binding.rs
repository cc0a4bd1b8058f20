//! File binding shared by decoder and updater handles.

use std::path::{Path, PathBuf};

use format::AccessMode;

/// A dictionary location plus the way its bytes will be accessed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileBinding {
    path: PathBuf,
    access_mode: AccessMode,
}

impl FileBinding {
    /// Binds `path` with the given access mode.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>, access_mode: AccessMode) -> Self {
        Self {
            path: path.into(),
            access_mode,
        }
    }

    /// Returns the bound location.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the access mode.
    #[must_use]
    pub const fn access_mode(&self) -> AccessMode {
        self.access_mode
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn binding_accessors() {
        let binding = FileBinding::new("/tmp/d.4", AccessMode::ByteArray);
        assert_eq!(binding.path(), Path::new("/tmp/d.4"));
        assert_eq!(binding.access_mode(), AccessMode::ByteArray);
    }
}
