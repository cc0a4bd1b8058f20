//! Format versions, feature flags and their resolved capability set.

use crate::error::{FormatError, FormatResult, Operation};

/// Format version 2: static single-file dictionaries.
pub const VERSION2: i32 = 2;

/// Format version 3: single-file dictionaries with optional dynamic update.
pub const VERSION3: i32 = 3;

/// Format version 4: directory-backed dictionaries.
pub const VERSION4: i32 = 4;

/// Oldest version this crate can dispatch.
pub const MINIMUM_SUPPORTED_VERSION: i32 = VERSION2;

/// Newest version this crate can dispatch.
pub const MAXIMUM_SUPPORTED_VERSION: i32 = VERSION4;

/// First version whose files may be updated in place.
pub const FIRST_VERSION_WITH_DYNAMIC_UPDATE: i32 = VERSION3;

/// First version that stores terminal ids for word nodes.
pub const FIRST_VERSION_WITH_TERMINAL_ID: i32 = VERSION4;

/// Declared format version plus feature flags.
///
/// Construction never validates the combination. A version outside the
/// supported range, or a flag the version cannot honour, only surfaces when
/// the options are dispatched through [`FormatOptions::format`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FormatOptions {
    /// Raw format version number. Signed so that any declared value,
    /// including negative ones, reaches dispatch and is rejected there.
    pub version: i32,
    /// Whether the dictionary supports in-place updates (version 3+).
    pub supports_dynamic_update: bool,
    /// Whether entries carry timestamps (version 4 with dynamic update).
    pub has_timestamp: bool,
}

impl FormatOptions {
    /// Version 2.
    pub const VERSION2: Self = Self::new(VERSION2);
    /// Version 3, static.
    pub const VERSION3_WITHOUT_DYNAMIC_UPDATE: Self = Self::with_dynamic_update(VERSION3, false);
    /// Version 3, updatable.
    pub const VERSION3_WITH_DYNAMIC_UPDATE: Self = Self::with_dynamic_update(VERSION3, true);
    /// Version 4, static.
    pub const VERSION4_WITHOUT_DYNAMIC_UPDATE: Self = Self::with_dynamic_update(VERSION4, false);
    /// Version 4, updatable.
    pub const VERSION4_WITH_DYNAMIC_UPDATE: Self = Self::with_dynamic_update(VERSION4, true);
    /// Version 4, updatable, with timestamps.
    pub const VERSION4_WITH_DYNAMIC_UPDATE_AND_TIMESTAMP: Self =
        Self::with_timestamp(VERSION4, true, true);

    /// Every named preset, oldest version first.
    pub const PRESETS: [Self; 6] = [
        Self::VERSION2,
        Self::VERSION3_WITHOUT_DYNAMIC_UPDATE,
        Self::VERSION3_WITH_DYNAMIC_UPDATE,
        Self::VERSION4_WITHOUT_DYNAMIC_UPDATE,
        Self::VERSION4_WITH_DYNAMIC_UPDATE,
        Self::VERSION4_WITH_DYNAMIC_UPDATE_AND_TIMESTAMP,
    ];

    /// Creates options with every feature flag cleared.
    #[must_use]
    pub const fn new(version: i32) -> Self {
        Self::with_timestamp(version, false, false)
    }

    /// Creates options with the dynamic update flag set as given.
    #[must_use]
    pub const fn with_dynamic_update(version: i32, supports_dynamic_update: bool) -> Self {
        Self::with_timestamp(version, supports_dynamic_update, false)
    }

    /// Creates options with both feature flags set as given.
    #[must_use]
    pub const fn with_timestamp(
        version: i32,
        supports_dynamic_update: bool,
        has_timestamp: bool,
    ) -> Self {
        Self {
            version,
            supports_dynamic_update,
            has_timestamp,
        }
    }

    /// Returns `true` if the version lies in the supported range.
    #[must_use]
    pub const fn is_supported_version(self) -> bool {
        self.version >= MINIMUM_SUPPORTED_VERSION && self.version <= MAXIMUM_SUPPORTED_VERSION
    }

    /// Returns `true` if the version stores terminal ids.
    #[must_use]
    pub const fn has_terminal_id(self) -> bool {
        self.version >= FIRST_VERSION_WITH_TERMINAL_ID
    }

    /// Resolves the raw options into a closed [`DictFormat`].
    ///
    /// Flags that have no meaning for the version are dropped.
    ///
    /// # Errors
    ///
    /// Returns [`FormatError::UnsupportedFormatVersion`] for any version
    /// other than 2, 3 or 4.
    pub const fn format(self) -> FormatResult<DictFormat> {
        match self.version {
            VERSION2 => Ok(DictFormat::V2),
            VERSION3 => Ok(DictFormat::V3 {
                supports_dynamic_update: self.supports_dynamic_update,
            }),
            VERSION4 => Ok(DictFormat::V4 {
                supports_dynamic_update: self.supports_dynamic_update,
                has_timestamp: self.has_timestamp,
            }),
            other => Err(FormatError::unsupported(other, Operation::Format)),
        }
    }
}

/// A supported format version carrying the flags it understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DictFormat {
    /// Version 2. Never updatable.
    V2,
    /// Version 3. Single-file container.
    V3 { supports_dynamic_update: bool },
    /// Version 4. Directory-backed container.
    V4 {
        supports_dynamic_update: bool,
        has_timestamp: bool,
    },
}

impl DictFormat {
    /// Returns the numeric version.
    #[must_use]
    pub const fn version(self) -> i32 {
        match self {
            Self::V2 => VERSION2,
            Self::V3 { .. } => VERSION3,
            Self::V4 { .. } => VERSION4,
        }
    }

    /// Returns `true` if dictionaries of this format can be updated in place.
    #[must_use]
    pub const fn supports_dynamic_update(self) -> bool {
        match self {
            Self::V2 => false,
            Self::V3 {
                supports_dynamic_update,
            }
            | Self::V4 {
                supports_dynamic_update,
                ..
            } => supports_dynamic_update,
        }
    }

    /// Returns `true` if entries carry timestamps.
    #[must_use]
    pub const fn has_timestamp(self) -> bool {
        match self {
            Self::V2 | Self::V3 { .. } => false,
            Self::V4 {
                supports_dynamic_update,
                has_timestamp,
            } => supports_dynamic_update && has_timestamp,
        }
    }
}

impl From<DictFormat> for FormatOptions {
    fn from(format: DictFormat) -> Self {
        Self::with_timestamp(
            format.version(),
            format.supports_dynamic_update(),
            format.has_timestamp(),
        )
    }
}

impl TryFrom<FormatOptions> for DictFormat {
    type Error = FormatError;

    fn try_from(options: FormatOptions) -> FormatResult<Self> {
        options.format()
    }
}
