use thiserror::Error;

/// Errors returned by the checked decoders and the checked processor.
///
/// # Examples
/// ```
/// use byteconv::checked;
/// use byteconv::{ByteOrder, DecodeError};
///
/// let err = checked::decode_uint32(&[1, 2, 3], 0, ByteOrder::BigEndian).unwrap_err();
/// assert_eq!(err, DecodeError::TooShort { width: 4, actual: 3, offset: 0 });
/// assert!(err.to_string().contains("not enough bytes"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("not enough bytes to decode: need {width} at offset {offset}, got length {actual}")]
    TooShort {
        width: usize,
        actual: usize,
        offset: usize,
    },
}
