//! Decoders without bounds validation.
//!
//! The caller guarantees `offset + width <= bytes.len()`. Input that is too
//! short is outside the contract: these functions currently panic on slice
//! indexing rather than read out of bounds, but callers must not rely on
//! any particular outcome.

use crate::ByteOrder;
use crate::codec::parser::{self, decode};
use crate::codec::primitive::{
    Float16, Float32, Float64, Int8, Int16, Int32, Uint8, Uint16, Uint32, Uint64,
};
use crate::codec::reader::Unchecked;

/// Unsigned 8-bit integer.
pub fn decode_uint8(bytes: &[u8], offset: usize) -> u8 {
    decode::<Uint8, Unchecked>(bytes, offset, ByteOrder::BigEndian)
}

/// Unsigned 16-bit integer.
pub fn decode_uint16(bytes: &[u8], offset: usize, order: ByteOrder) -> u16 {
    decode::<Uint16, Unchecked>(bytes, offset, order)
}

/// Unsigned 32-bit integer.
pub fn decode_uint32(bytes: &[u8], offset: usize, order: ByteOrder) -> u32 {
    decode::<Uint32, Unchecked>(bytes, offset, order)
}

/// Unsigned 64-bit integer, exact over the full range.
pub fn decode_uint64(bytes: &[u8], offset: usize, order: ByteOrder) -> u64 {
    decode::<Uint64, Unchecked>(bytes, offset, order)
}

/// Signed 8-bit integer (two's complement).
pub fn decode_int8(bytes: &[u8], offset: usize) -> i8 {
    decode::<Int8, Unchecked>(bytes, offset, ByteOrder::BigEndian)
}

/// Signed 16-bit integer (two's complement).
pub fn decode_int16(bytes: &[u8], offset: usize, order: ByteOrder) -> i16 {
    decode::<Int16, Unchecked>(bytes, offset, order)
}

/// Signed 32-bit integer (two's complement).
pub fn decode_int32(bytes: &[u8], offset: usize, order: ByteOrder) -> i32 {
    decode::<Int32, Unchecked>(bytes, offset, order)
}

/// IEEE-754 half precision, widened to `f64` without loss.
pub fn decode_float16(bytes: &[u8], offset: usize, order: ByteOrder) -> f64 {
    decode::<Float16, Unchecked>(bytes, offset, order)
}

/// IEEE-754 single precision.
pub fn decode_float32(bytes: &[u8], offset: usize, order: ByteOrder) -> f32 {
    decode::<Float32, Unchecked>(bytes, offset, order)
}

/// IEEE-754 double precision.
pub fn decode_float64(bytes: &[u8], offset: usize, order: ByteOrder) -> f64 {
    decode::<Float64, Unchecked>(bytes, offset, order)
}

/// Legacy unsigned 64-bit decode through `f64`; exact only up to `2^53 - 1`.
pub fn decode_uint64_lossy(bytes: &[u8], offset: usize, order: ByteOrder) -> f64 {
    parser::decode_uint64_lossy::<Unchecked>(bytes, offset, order)
}
