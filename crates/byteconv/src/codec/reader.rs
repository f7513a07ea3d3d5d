use super::error::DecodeError;
use crate::ByteOrder;

/// Compose up to eight bytes into an unsigned integer.
///
/// Big-endian places `window[0]` in the most significant position,
/// little-endian places the last byte there.
pub fn assemble_bits(window: &[u8], order: ByteOrder) -> u64 {
    debug_assert!(window.len() <= 8, "window wider than 64 bits");
    let shift_in = |acc: u64, byte: &u8| (acc << 8) | u64::from(*byte);
    match order {
        ByteOrder::BigEndian => window.iter().fold(0, shift_in),
        ByteOrder::LittleEndian => window.iter().rev().fold(0, shift_in),
    }
}

/// Return `bytes[offset..offset + width]`, or a length error when the span
/// does not fit (including when `offset + width` overflows).
pub fn read_window(bytes: &[u8], offset: usize, width: usize) -> Result<&[u8], DecodeError> {
    offset
        .checked_add(width)
        .and_then(|end| bytes.get(offset..end))
        .ok_or(DecodeError::TooShort {
            width,
            actual: bytes.len(),
            offset,
        })
}

/// Decides what happens before a fixed-width window is decoded.
///
/// [`Checked`] validates the span and wraps the value in a `Result`;
/// [`Unchecked`] hands the value back directly.
pub trait BoundsPolicy {
    type Output<T>;

    /// Decode the `width` bytes starting at `offset`.
    fn window<T>(
        bytes: &[u8],
        offset: usize,
        width: usize,
        decode: impl FnOnce(&[u8]) -> T,
    ) -> Self::Output<T>;

    /// Decode at `*offset`, then move `*offset` past the window.
    fn advance<T>(
        bytes: &[u8],
        offset: &mut usize,
        width: usize,
        decode: impl FnOnce(&[u8]) -> T,
    ) -> Self::Output<T>;
}

/// Validates `offset + width <= len` before touching any byte.
#[derive(Debug, Clone, Copy, Default)]
pub struct Checked;

/// Skips validation; the caller guarantees the span fits.
///
/// A span that does not fit is outside the contract. In this crate it panics
/// on slice indexing, it never reads out of bounds; do not rely on either.
#[derive(Debug, Clone, Copy, Default)]
pub struct Unchecked;

impl BoundsPolicy for Checked {
    type Output<T> = Result<T, DecodeError>;

    fn window<T>(
        bytes: &[u8],
        offset: usize,
        width: usize,
        decode: impl FnOnce(&[u8]) -> T,
    ) -> Result<T, DecodeError> {
        let window = read_window(bytes, offset, width)?;
        Ok(decode(window))
    }

    fn advance<T>(
        bytes: &[u8],
        offset: &mut usize,
        width: usize,
        decode: impl FnOnce(&[u8]) -> T,
    ) -> Result<T, DecodeError> {
        let value = Self::window(bytes, *offset, width, decode)?;
        *offset += width;
        Ok(value)
    }
}

impl BoundsPolicy for Unchecked {
    type Output<T> = T;

    fn window<T>(
        bytes: &[u8],
        offset: usize,
        width: usize,
        decode: impl FnOnce(&[u8]) -> T,
    ) -> T {
        decode(&bytes[offset..offset + width])
    }

    fn advance<T>(
        bytes: &[u8],
        offset: &mut usize,
        width: usize,
        decode: impl FnOnce(&[u8]) -> T,
    ) -> T {
        let value = Self::window(bytes, *offset, width, decode);
        *offset += width;
        value
    }
}

#[cfg(test)]
mod tests {
    use super::{BoundsPolicy, Checked, Unchecked, assemble_bits, read_window};
    use crate::ByteOrder;
    use crate::codec::error::DecodeError;

    #[test]
    fn assemble_big_endian() {
        let bits = assemble_bits(&[0xDE, 0xAD, 0xBE, 0xEF], ByteOrder::BigEndian);
        assert_eq!(bits, 0xDEAD_BEEF);
    }

    #[test]
    fn assemble_little_endian() {
        let bits = assemble_bits(&[0xDE, 0xAD, 0xBE, 0xEF], ByteOrder::LittleEndian);
        assert_eq!(bits, 0xEFBE_ADDE);
    }

    #[test]
    fn assemble_full_width_keeps_top_bit() {
        let bits = assemble_bits(&[0xFF; 8], ByteOrder::BigEndian);
        assert_eq!(bits, u64::MAX);
    }

    #[test]
    fn read_window_exact_fit() {
        let bytes = [1, 2, 3, 4];
        assert_eq!(read_window(&bytes, 2, 2).unwrap(), &[3, 4]);
    }

    #[test]
    fn read_window_too_short() {
        let bytes = [1, 2, 3];
        let err = read_window(&bytes, 1, 4).unwrap_err();
        assert_eq!(
            err,
            DecodeError::TooShort {
                width: 4,
                actual: 3,
                offset: 1
            }
        );
    }

    #[test]
    fn read_window_offset_overflow() {
        let bytes = [0u8; 4];
        let err = read_window(&bytes, usize::MAX, 2).unwrap_err();
        assert!(matches!(err, DecodeError::TooShort { width: 2, .. }));
    }

    #[test]
    fn checked_advance_keeps_offset_on_error() {
        let bytes = [1u8, 2, 3];
        let mut offset = 2;
        let result = Checked::advance(&bytes, &mut offset, 2, |w| w.len());
        assert!(result.is_err());
        assert_eq!(offset, 2);
    }

    #[test]
    fn unchecked_advance_moves_offset() {
        let bytes = [1u8, 2, 3];
        let mut offset = 1;
        let first = Unchecked::advance(&bytes, &mut offset, 2, |w| w[0]);
        assert_eq!(first, 2);
        assert_eq!(offset, 3);
    }

    #[test]
    #[should_panic]
    fn unchecked_short_input_panics() {
        let bytes = [1u8, 2, 3];
        let _ = Unchecked::window(&bytes, 0, 4, |w| w.len());
    }
}
