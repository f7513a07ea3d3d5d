use log::debug;
use serde::{Deserialize, Serialize};

use super::error::HexError;
use crate::ByteOrder;

/// How an odd digit count is handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HexMode {
    /// Odd digit count is a [`HexError::OddLength`].
    #[default]
    Strict,
    /// The unpaired digit is dropped.
    Lenient,
}

/// Parse `input` into bytes, selecting strict or lenient handling at runtime.
pub fn parse_hex(input: &str, order: ByteOrder, mode: HexMode) -> Result<Vec<u8>, HexError> {
    match mode {
        HexMode::Strict => hex_to_bytes(input, order),
        HexMode::Lenient => Ok(hex_to_bytes_lenient(input, order)),
    }
}

/// Strict conversion: an odd digit count (after the prefix) is an error.
///
/// # Examples
/// ```
/// use byteconv::ByteOrder;
/// use byteconv::hex::hex_to_bytes;
///
/// assert_eq!(
///     hex_to_bytes("deadF00D", ByteOrder::BigEndian).unwrap(),
///     vec![0xDE, 0xAD, 0xF0, 0x0D]
/// );
/// assert_eq!(
///     hex_to_bytes("0xdeadF00D", ByteOrder::LittleEndian).unwrap(),
///     vec![0x0D, 0xF0, 0xAD, 0xDE]
/// );
/// ```
pub fn hex_to_bytes(input: &str, order: ByteOrder) -> Result<Vec<u8>, HexError> {
    let digits = normalize(input);
    if digits.len() % 2 != 0 {
        return Err(HexError::OddLength {
            digits: digits.len(),
        });
    }
    Ok(pack(&digits, order))
}

/// Lenient conversion: never fails.
///
/// With an odd digit count the unpaired digit is dropped: the last one for
/// big-endian (pairs start at the front), the first one for little-endian
/// (pairs start at the back).
pub fn hex_to_bytes_lenient(input: &str, order: ByteOrder) -> Vec<u8> {
    let digits = normalize(input);
    if digits.len() % 2 != 0 {
        debug!(
            "dropping unpaired hex digit ({} digits, {:?})",
            digits.len(),
            order
        );
    }
    pack(&digits, order)
}

/// Strip the prefix and map every character to its nibble value.
fn normalize(input: &str) -> Vec<u8> {
    let body = input
        .strip_prefix("0x")
        .or_else(|| input.strip_prefix("0X"))
        .unwrap_or(input);

    let mut substituted = 0usize;
    let digits = body
        .chars()
        .map(|c| match c.to_digit(16) {
            Some(nibble) => nibble as u8,
            None => {
                substituted += 1;
                0
            }
        })
        .collect();

    if substituted > 0 {
        debug!("substituted {substituted} non-hex characters with '0'");
    }
    digits
}

fn pack(digits: &[u8], order: ByteOrder) -> Vec<u8> {
    let byte = |pair: &[u8]| (pair[0] << 4) | pair[1];
    match order {
        ByteOrder::BigEndian => digits.chunks_exact(2).map(byte).collect(),
        ByteOrder::LittleEndian => digits.rchunks_exact(2).map(byte).collect(),
    }
}
