//! File naming conventions for test dictionaries.

use std::path::{Path, PathBuf};

use format::{DictFormat, FormatError, FormatOptions, FormatResult, Operation};
use tracing::{trace, warn};

/// Suffix marking single-file test dictionaries.
pub const TEST_DICT_FILE_EXTENSION: &str = ".testDict";

/// Computes where the test dictionary `name` lives for `options`.
///
/// Versions 2 and 3 get `{name}.{version_label}.testDict`; version 4
/// dictionaries are directories named `{name}.{version_label}`. The result
/// always stays under `directory`: leading separators in `name` are dropped.
/// Nothing is created on disk.
///
/// # Errors
///
/// Returns [`FormatError::UnsupportedFormatVersion`] if the version is not
/// 2, 3 or 4.
pub fn resolve_path(
    name: &str,
    version_label: &str,
    options: &FormatOptions,
    directory: &Path,
) -> FormatResult<PathBuf> {
    let Ok(format) = options.format() else {
        warn!(version = options.version, "no file naming convention for version");
        return Err(FormatError::unsupported(options.version, Operation::Path));
    };
    let file_name = match format {
        DictFormat::V2 | DictFormat::V3 { .. } => {
            format!("{name}.{version_label}{TEST_DICT_FILE_EXTENSION}")
        }
        DictFormat::V4 { .. } => format!("{name}.{version_label}"),
    };
    let path = directory.join(file_name.trim_start_matches(std::path::is_separator));
    trace!(path = %path.display(), version = options.version, "resolved dictionary path");
    Ok(path)
}
