use thiserror::Error;

/// Errors returned by the strict hex parser.
///
/// # Examples
/// ```
/// use byteconv::ByteOrder;
/// use byteconv::hex::{HexError, hex_to_bytes};
///
/// let err = hex_to_bytes("abc", ByteOrder::BigEndian).unwrap_err();
/// assert_eq!(err, HexError::OddLength { digits: 3 });
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HexError {
    #[error("odd number of hex digits: {digits}")]
    OddLength { digits: usize },
}
