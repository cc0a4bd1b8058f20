//! Codec families shared by several format versions.

use format::DictFormat;

/// Implementation family a codec handle belongs to.
///
/// Versions 2 and 3 share the single-file container and its codecs;
/// version 4 has its own directory-backed ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CodecFamily {
    /// Single-file container codecs (versions 2 and 3).
    Ver3,
    /// Directory-backed container codecs (version 4).
    Ver4,
}

impl CodecFamily {
    /// Returns the family that reads and writes `format`.
    #[must_use]
    pub const fn for_format(format: DictFormat) -> Self {
        match format {
            DictFormat::V2 | DictFormat::V3 { .. } => Self::Ver3,
            DictFormat::V4 { .. } => Self::Ver4,
        }
    }

    /// Returns `true` if the family writes a single output file.
    #[must_use]
    pub const fn is_single_file(self) -> bool {
        matches!(self, Self::Ver3)
    }
}

impl From<DictFormat> for CodecFamily {
    fn from(format: DictFormat) -> Self {
        Self::for_format(format)
    }
}
