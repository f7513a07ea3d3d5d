use serde::{Deserialize, Serialize};

use super::layout;

/// Supported fixed-width numeric types.
///
/// Serialized as lowercase names (`"uint8"`, `"float32"`, ...) so a record
/// layout can be kept in a config file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NumericKind {
    Uint8,
    Uint16,
    Uint32,
    Uint64,
    Int8,
    Int16,
    Int32,
    Float16,
    Float32,
    Float64,
}

impl NumericKind {
    /// Encoded width in bytes.
    pub const fn width(self) -> usize {
        match self {
            NumericKind::Uint8 | NumericKind::Int8 => layout::UINT8_WIDTH,
            NumericKind::Uint16 | NumericKind::Int16 => layout::UINT16_WIDTH,
            NumericKind::Uint32 | NumericKind::Int32 => layout::UINT32_WIDTH,
            NumericKind::Uint64 => layout::UINT64_WIDTH,
            NumericKind::Float16 => layout::FLOAT16_WIDTH,
            NumericKind::Float32 => layout::FLOAT32_WIDTH,
            NumericKind::Float64 => layout::FLOAT64_WIDTH,
        }
    }
}

/// A decoded value tagged with its kind.
///
/// # Examples
/// ```
/// use byteconv::{NumericKind, Value};
///
/// let value = Value::Int16(-256);
/// assert_eq!(value.kind(), NumericKind::Int16);
/// assert_eq!(value.as_f64(), -256.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum Value {
    Uint8(u8),
    Uint16(u16),
    Uint32(u32),
    Uint64(u64),
    Int8(i8),
    Int16(i16),
    Int32(i32),
    /// Half precision, widened to `f64` without loss.
    Float16(f64),
    Float32(f32),
    Float64(f64),
}

impl Value {
    pub fn kind(&self) -> NumericKind {
        match self {
            Value::Uint8(_) => NumericKind::Uint8,
            Value::Uint16(_) => NumericKind::Uint16,
            Value::Uint32(_) => NumericKind::Uint32,
            Value::Uint64(_) => NumericKind::Uint64,
            Value::Int8(_) => NumericKind::Int8,
            Value::Int16(_) => NumericKind::Int16,
            Value::Int32(_) => NumericKind::Int32,
            Value::Float16(_) => NumericKind::Float16,
            Value::Float32(_) => NumericKind::Float32,
            Value::Float64(_) => NumericKind::Float64,
        }
    }

    /// Widen to `f64`. Exact for every kind except `Uint64` above `2^53`.
    pub fn as_f64(&self) -> f64 {
        match *self {
            Value::Uint8(v) => f64::from(v),
            Value::Uint16(v) => f64::from(v),
            Value::Uint32(v) => f64::from(v),
            Value::Uint64(v) => v as f64,
            Value::Int8(v) => f64::from(v),
            Value::Int16(v) => f64::from(v),
            Value::Int32(v) => f64::from(v),
            Value::Float16(v) | Value::Float64(v) => v,
            Value::Float32(v) => f64::from(v),
        }
    }
}
