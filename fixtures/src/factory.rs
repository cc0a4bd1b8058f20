//! Codec selection by format version.

use std::path::Path;

use codec::{
    DictDecoder, DictEncoder, DictUpdater, Ver3DictDecoder, Ver3DictEncoder, Ver3DictUpdater,
    Ver4DictDecoder, Ver4DictEncoder, Ver4DictUpdater,
};
use format::{AccessMode, DictFormat, FormatError, FormatOptions, FormatResult, Operation};
use tracing::{debug, warn};

fn resolve(options: &FormatOptions, operation: Operation) -> FormatResult<DictFormat> {
    options.format().map_err(|_| unsupported(options.version, operation))
}

fn unsupported(version: i32, operation: Operation) -> FormatError {
    warn!(version, %operation, "format version rejected");
    FormatError::unsupported(version, operation)
}

/// Selects the encoder for `options`.
///
/// Version 4 encoders write under `cache_dir` and ignore `path`; versions 2
/// and 3 share the single-file encoder bound to `path`.
///
/// # Errors
///
/// Returns [`FormatError::UnsupportedFormatVersion`] if the version is not
/// 2, 3 or 4.
pub fn create_encoder(
    path: &Path,
    options: &FormatOptions,
    cache_dir: &Path,
) -> FormatResult<DictEncoder> {
    let encoder = match resolve(options, Operation::Encoder)? {
        DictFormat::V4 { .. } => DictEncoder::from(Ver4DictEncoder::new(cache_dir)),
        DictFormat::V2 | DictFormat::V3 { .. } => DictEncoder::from(Ver3DictEncoder::new(path)),
    };
    debug!(
        version = options.version,
        family = ?encoder.family(),
        output = %encoder.output().display(),
        "selected encoder"
    );
    Ok(encoder)
}

/// Selects the decoder for `options`, reading with `access_mode`.
///
/// # Errors
///
/// Returns [`FormatError::UnsupportedFormatVersion`] if the version is not
/// 2, 3 or 4.
pub fn create_decoder(
    path: &Path,
    options: &FormatOptions,
    access_mode: AccessMode,
) -> FormatResult<DictDecoder> {
    let decoder = match resolve(options, Operation::Decoder)? {
        DictFormat::V4 { .. } => DictDecoder::from(Ver4DictDecoder::new(path, access_mode)),
        DictFormat::V2 | DictFormat::V3 { .. } => {
            DictDecoder::from(Ver3DictDecoder::new(path, access_mode))
        }
    };
    debug!(
        version = options.version,
        family = ?decoder.family(),
        ?access_mode,
        path = %path.display(),
        "selected decoder"
    );
    Ok(decoder)
}

/// Selects the updater for `options`, bound to `path`.
///
/// Updaters always map their file writable. The dynamic update flag itself
/// is not checked here; only the version decides.
///
/// # Errors
///
/// Returns [`FormatError::UnsupportedFormatVersion`] for version 2, which
/// cannot be updated, and for any version other than 3 or 4.
pub fn create_updater(path: &Path, options: &FormatOptions) -> FormatResult<DictUpdater> {
    let updater = match resolve(options, Operation::Updater)? {
        DictFormat::V4 { .. } => DictUpdater::from(Ver4DictUpdater::new(path)),
        DictFormat::V3 { .. } => DictUpdater::from(Ver3DictUpdater::new(path)),
        DictFormat::V2 => return Err(unsupported(options.version, Operation::Updater)),
    };
    debug!(
        version = options.version,
        family = ?updater.family(),
        path = %path.display(),
        "selected updater"
    );
    Ok(updater)
}
