//! Decoders that validate `offset + width <= bytes.len()` first.
//!
//! Every function returns [`DecodeError::TooShort`] instead of decoding when
//! the span does not fit. Single-byte decoders take no byte order.
//!
//! # Examples
//! ```
//! use byteconv::ByteOrder;
//! use byteconv::checked;
//!
//! let bytes = [0xDE, 0xAD, 0xBE, 0xEF];
//! assert_eq!(checked::decode_uint16(&bytes, 0, ByteOrder::BigEndian), Ok(0xDEAD));
//! assert_eq!(checked::decode_uint16(&bytes, 2, ByteOrder::LittleEndian), Ok(0xEFBE));
//! assert!(checked::decode_uint32(&bytes, 1, ByteOrder::BigEndian).is_err());
//! ```

use crate::ByteOrder;
use crate::codec::error::DecodeError;
use crate::codec::parser::{self, decode};
use crate::codec::primitive::{
    Float16, Float32, Float64, Int8, Int16, Int32, Uint8, Uint16, Uint32, Uint64,
};
use crate::codec::reader::Checked;

/// Unsigned 8-bit integer.
pub fn decode_uint8(bytes: &[u8], offset: usize) -> Result<u8, DecodeError> {
    decode::<Uint8, Checked>(bytes, offset, ByteOrder::BigEndian)
}

/// Unsigned 16-bit integer.
pub fn decode_uint16(bytes: &[u8], offset: usize, order: ByteOrder) -> Result<u16, DecodeError> {
    decode::<Uint16, Checked>(bytes, offset, order)
}

/// Unsigned 32-bit integer.
pub fn decode_uint32(bytes: &[u8], offset: usize, order: ByteOrder) -> Result<u32, DecodeError> {
    decode::<Uint32, Checked>(bytes, offset, order)
}

/// Unsigned 64-bit integer, exact over the full range.
pub fn decode_uint64(bytes: &[u8], offset: usize, order: ByteOrder) -> Result<u64, DecodeError> {
    decode::<Uint64, Checked>(bytes, offset, order)
}

/// Signed 8-bit integer (two's complement).
pub fn decode_int8(bytes: &[u8], offset: usize) -> Result<i8, DecodeError> {
    decode::<Int8, Checked>(bytes, offset, ByteOrder::BigEndian)
}

/// Signed 16-bit integer (two's complement).
pub fn decode_int16(bytes: &[u8], offset: usize, order: ByteOrder) -> Result<i16, DecodeError> {
    decode::<Int16, Checked>(bytes, offset, order)
}

/// Signed 32-bit integer (two's complement).
pub fn decode_int32(bytes: &[u8], offset: usize, order: ByteOrder) -> Result<i32, DecodeError> {
    decode::<Int32, Checked>(bytes, offset, order)
}

/// IEEE-754 half precision, widened to `f64` without loss.
pub fn decode_float16(bytes: &[u8], offset: usize, order: ByteOrder) -> Result<f64, DecodeError> {
    decode::<Float16, Checked>(bytes, offset, order)
}

/// IEEE-754 single precision.
pub fn decode_float32(bytes: &[u8], offset: usize, order: ByteOrder) -> Result<f32, DecodeError> {
    decode::<Float32, Checked>(bytes, offset, order)
}

/// IEEE-754 double precision.
pub fn decode_float64(bytes: &[u8], offset: usize, order: ByteOrder) -> Result<f64, DecodeError> {
    decode::<Float64, Checked>(bytes, offset, order)
}

/// Legacy unsigned 64-bit decode through `f64`; exact only up to `2^53 - 1`.
pub fn decode_uint64_lossy(bytes: &[u8], offset: usize, order: ByteOrder) -> Result<f64, DecodeError> {
    parser::decode_uint64_lossy::<Checked>(bytes, offset, order)
}
