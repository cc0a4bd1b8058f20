//! Encoder, decoder and updater handles for makedict binary dictionaries.
//!
//! Each handle records where a codec is bound and how it reaches the bytes.
//! The byte layout of the dictionaries is owned by the codec implementations
//! behind these handles, not by this crate.
//!
//! # Families
//!
//! - [`CodecFamily::Ver3`] - single-file container, used by versions 2 and 3.
//! - [`CodecFamily::Ver4`] - directory-backed container, used by version 4.

mod binding;
mod decoder;
mod encoder;
mod family;
mod updater;

pub use binding::FileBinding;
pub use decoder::{DictDecoder, Ver3DictDecoder, Ver4DictDecoder};
pub use encoder::{DictEncoder, Ver3DictEncoder, Ver4DictEncoder};
pub use family::CodecFamily;
pub use updater::{DictUpdater, Ver3DictUpdater, Ver4DictUpdater, UPDATER_ACCESS_MODE};

#[cfg(test)]
mod tests {
    use super::*;
    use format::AccessMode;

    #[test]
    fn public_api_exports() {
        let _ = CodecFamily::Ver3;
        let _ = FileBinding::new("/tmp", AccessMode::ByteArray);
        let _ = DictEncoder::from(Ver4DictEncoder::new("/tmp"));
        let _ = DictDecoder::from(Ver3DictDecoder::new("/tmp", AccessMode::ByteArray));
        let _ = DictUpdater::from(Ver4DictUpdater::new("/tmp"));
        let _ = UPDATER_ACCESS_MODE;
    }

    #[test]
    fn handles_are_thread_safe() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<DictEncoder>();
        assert_send_sync::<DictDecoder>();
        assert_send_sync::<DictUpdater>();
    }
}
