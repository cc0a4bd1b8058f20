//! Error types for format dispatch.

use std::fmt;

/// Result type for format dispatch operations.
pub type FormatResult<T> = Result<T, FormatError>;

/// Errors raised when a format version cannot serve a request.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum FormatError {
    /// The version is outside the supported set, or the operation is not
    /// available for an otherwise valid version.
    UnsupportedFormatVersion {
        /// Raw version number carried by the format options.
        version: i32,
        /// What was being attempted.
        operation: Operation,
    },
}

/// Dispatch operation that rejected a format version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// Resolving raw options into a [`DictFormat`](crate::DictFormat).
    Format,
    /// Resolving a dictionary file path.
    Path,
    /// Selecting an encoder.
    Encoder,
    /// Selecting a decoder.
    Decoder,
    /// Selecting an updater.
    Updater,
}

impl FormatError {
    /// Creates an [`FormatError::UnsupportedFormatVersion`] error.
    #[must_use]
    pub const fn unsupported(version: i32, operation: Operation) -> Self {
        Self::UnsupportedFormatVersion { version, operation }
    }

    /// Returns the version number that was rejected.
    #[must_use]
    pub const fn version(&self) -> i32 {
        match self {
            Self::UnsupportedFormatVersion { version, .. } => *version,
        }
    }
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedFormatVersion { version, operation } => {
                write!(
                    f,
                    "unsupported format version {version} for {operation}"
                )
            }
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Format => "format resolution",
            Self::Path => "path resolution",
            Self::Encoder => "encoder selection",
            Self::Decoder => "decoder selection",
            Self::Updater => "updater selection",
        };
        write!(f, "{name}")
    }
}

impl std::error::Error for FormatError {}
