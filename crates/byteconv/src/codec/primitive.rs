//! Per-type decoding of an already validated window.
//!
//! Each marker type pairs a [`NumericKind`] with its width and the Rust type
//! it decodes to. Integers go through the shared bit assembler; signed kinds
//! are reinterpreted with two's complement. Float16 goes through the IEEE-754
//! reconstructor, float32/float64 through the native bit view.

use super::ieee754;
use super::layout;
use super::reader::assemble_bits;
use super::value::NumericKind;
use crate::ByteOrder;

/// A fixed-width numeric type that can be decoded from a byte window.
pub trait Primitive {
    type Value: Copy;

    const KIND: NumericKind;
    const WIDTH: usize;

    /// Decode exactly `Self::WIDTH` bytes.
    fn from_window(window: &[u8], order: ByteOrder) -> Self::Value;
}

#[derive(Debug, Clone, Copy)]
pub struct Uint8;
#[derive(Debug, Clone, Copy)]
pub struct Uint16;
#[derive(Debug, Clone, Copy)]
pub struct Uint32;
#[derive(Debug, Clone, Copy)]
pub struct Uint64;
#[derive(Debug, Clone, Copy)]
pub struct Int8;
#[derive(Debug, Clone, Copy)]
pub struct Int16;
#[derive(Debug, Clone, Copy)]
pub struct Int32;
#[derive(Debug, Clone, Copy)]
pub struct Float16;
#[derive(Debug, Clone, Copy)]
pub struct Float32;
#[derive(Debug, Clone, Copy)]
pub struct Float64;

/// Reinterpret the low `bits` of `raw` as a two's-complement integer.
pub fn twos_complement(raw: u64, bits: u32) -> i64 {
    debug_assert!((1..=32).contains(&bits));
    let max_signed = (1u64 << (bits - 1)) - 1;
    if raw > max_signed {
        raw as i64 - (1i64 << bits)
    } else {
        raw as i64
    }
}

impl Primitive for Uint8 {
    type Value = u8;
    const KIND: NumericKind = NumericKind::Uint8;
    const WIDTH: usize = layout::UINT8_WIDTH;

    fn from_window(window: &[u8], _order: ByteOrder) -> u8 {
        window[0]
    }
}

impl Primitive for Uint16 {
    type Value = u16;
    const KIND: NumericKind = NumericKind::Uint16;
    const WIDTH: usize = layout::UINT16_WIDTH;

    fn from_window(window: &[u8], order: ByteOrder) -> u16 {
        assemble_bits(window, order) as u16
    }
}

impl Primitive for Uint32 {
    type Value = u32;
    const KIND: NumericKind = NumericKind::Uint32;
    const WIDTH: usize = layout::UINT32_WIDTH;

    fn from_window(window: &[u8], order: ByteOrder) -> u32 {
        assemble_bits(window, order) as u32
    }
}

impl Primitive for Uint64 {
    type Value = u64;
    const KIND: NumericKind = NumericKind::Uint64;
    const WIDTH: usize = layout::UINT64_WIDTH;

    fn from_window(window: &[u8], order: ByteOrder) -> u64 {
        assemble_bits(window, order)
    }
}

impl Primitive for Int8 {
    type Value = i8;
    const KIND: NumericKind = NumericKind::Int8;
    const WIDTH: usize = layout::UINT8_WIDTH;

    fn from_window(window: &[u8], _order: ByteOrder) -> i8 {
        twos_complement(u64::from(window[0]), 8) as i8
    }
}

impl Primitive for Int16 {
    type Value = i16;
    const KIND: NumericKind = NumericKind::Int16;
    const WIDTH: usize = layout::UINT16_WIDTH;

    fn from_window(window: &[u8], order: ByteOrder) -> i16 {
        twos_complement(assemble_bits(window, order), 16) as i16
    }
}

impl Primitive for Int32 {
    type Value = i32;
    const KIND: NumericKind = NumericKind::Int32;
    const WIDTH: usize = layout::UINT32_WIDTH;

    fn from_window(window: &[u8], order: ByteOrder) -> i32 {
        twos_complement(assemble_bits(window, order), 32) as i32
    }
}

impl Primitive for Float16 {
    type Value = f64;
    const KIND: NumericKind = NumericKind::Float16;
    const WIDTH: usize = layout::FLOAT16_WIDTH;

    fn from_window(window: &[u8], order: ByteOrder) -> f64 {
        ieee754::reconstruct(assemble_bits(window, order), &layout::BINARY16)
    }
}

impl Primitive for Float32 {
    type Value = f32;
    const KIND: NumericKind = NumericKind::Float32;
    const WIDTH: usize = layout::FLOAT32_WIDTH;

    fn from_window(window: &[u8], order: ByteOrder) -> f32 {
        let value = f32::from_bits(assemble_bits(window, order) as u32);
        // same NaN policy as the reconstructor: payload dropped
        if value.is_nan() { f32::NAN } else { value }
    }
}

impl Primitive for Float64 {
    type Value = f64;
    const KIND: NumericKind = NumericKind::Float64;
    const WIDTH: usize = layout::FLOAT64_WIDTH;

    fn from_window(window: &[u8], order: ByteOrder) -> f64 {
        let value = f64::from_bits(assemble_bits(window, order));
        if value.is_nan() { f64::NAN } else { value }
    }
}
