//! Buffer access modes accepted by codec constructors.

/// Raw marker for [`AccessMode::ByteArray`].
pub const USE_BYTE_ARRAY: u8 = 1;

/// Raw marker for [`AccessMode::WritableByteBuffer`].
pub const USE_BYTE_BUFFER: u8 = 2;

/// How a codec reaches the bytes of a dictionary file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AccessMode {
    /// Read the whole file into a plain in-memory array.
    ByteArray,
    /// Map the file into a writable buffer.
    WritableByteBuffer,
}

impl AccessMode {
    /// Returns the raw marker value.
    #[must_use]
    pub const fn raw(self) -> u8 {
        match self {
            Self::ByteArray => USE_BYTE_ARRAY,
            Self::WritableByteBuffer => USE_BYTE_BUFFER,
        }
    }

    /// Parses a raw marker value.
    #[must_use]
    pub const fn from_raw(raw: u8) -> Option<Self> {
        match raw {
            USE_BYTE_ARRAY => Some(Self::ByteArray),
            USE_BYTE_BUFFER => Some(Self::WritableByteBuffer),
            _ => None,
        }
    }

    /// Returns `true` if the mode allows writing back to the file.
    #[must_use]
    pub const fn is_writable(self) -> bool {
        matches!(self, Self::WritableByteBuffer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_markers() {
        assert_eq!(AccessMode::ByteArray.raw(), 1);
        assert_eq!(AccessMode::WritableByteBuffer.raw(), 2);
    }

    #[test]
    fn from_raw_known() {
        assert_eq!(AccessMode::from_raw(1), Some(AccessMode::ByteArray));
        assert_eq!(AccessMode::from_raw(2), Some(AccessMode::WritableByteBuffer));
    }

    #[test]
    fn from_raw_unknown() {
        assert_eq!(AccessMode::from_raw(0), None);
        assert_eq!(AccessMode::from_raw(3), None);
    }

    #[test]
    fn only_mapped_buffer_is_writable() {
        assert!(!AccessMode::ByteArray.is_writable());
        assert!(AccessMode::WritableByteBuffer.is_writable());
    }
}
