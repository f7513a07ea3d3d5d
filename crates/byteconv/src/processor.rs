//! Sequential reader over a borrowed buffer.
//!
//! A [`Processor`] keeps the buffer, a byte order and a read offset. Every
//! `read_next_*` call decodes at the current offset and moves past the value;
//! there is no seek, rewind or peek. The byte order can be changed between
//! reads and only affects later reads.
//!
//! The bounds policy is a type parameter: the default [`Checked`] processor
//! returns `Result` and leaves the offset untouched when a read does not
//! fit; an [`Unchecked`] processor returns bare values and panics instead.
//! Reads take `&mut self`, so a processor has exactly one reader at a time.

use std::marker::PhantomData;

use log::{debug, trace};

use crate::ByteOrder;
use crate::codec::error::DecodeError;
use crate::codec::primitive::{
    Float16, Float32, Float64, Int8, Int16, Int32, Primitive, Uint8, Uint16, Uint32, Uint64,
};
use crate::codec::reader::{BoundsPolicy, Checked, Unchecked};
use crate::codec::value::{NumericKind, Value};

/// Stateful cursor that consumes fixed-width values front to back.
///
/// # Examples
/// ```
/// use byteconv::{ByteOrder, Processor};
///
/// let data = [0x80, 0xDE, 0xAD, 0xFF];
/// let mut processor = Processor::new(&data, ByteOrder::BigEndian);
/// assert_eq!(processor.read_next_uint8()?, 128);
/// assert_eq!(processor.read_next_uint16()?, 0xDEAD);
/// assert_eq!(processor.read_next_int8()?, -1);
/// assert_eq!(processor.offset(), 4);
/// assert!(processor.read_next_uint8().is_err());
/// # Ok::<(), byteconv::DecodeError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Processor<'a, P: BoundsPolicy = Checked> {
    bytes: &'a [u8],
    offset: usize,
    order: ByteOrder,
    policy: PhantomData<P>,
}

impl<'a> Processor<'a, Checked> {
    pub fn new(bytes: &'a [u8], order: ByteOrder) -> Self {
        Self::with_policy(bytes, order)
    }

    /// Read one value whose kind is only known at runtime.
    pub fn read_value(&mut self, kind: NumericKind) -> Result<Value, DecodeError> {
        match kind {
            NumericKind::Uint8 => self.read_next_uint8().map(Value::Uint8),
            NumericKind::Uint16 => self.read_next_uint16().map(Value::Uint16),
            NumericKind::Uint32 => self.read_next_uint32().map(Value::Uint32),
            NumericKind::Uint64 => self.read_next_uint64().map(Value::Uint64),
            NumericKind::Int8 => self.read_next_int8().map(Value::Int8),
            NumericKind::Int16 => self.read_next_int16().map(Value::Int16),
            NumericKind::Int32 => self.read_next_int32().map(Value::Int32),
            NumericKind::Float16 => self.read_next_float16().map(Value::Float16),
            NumericKind::Float32 => self.read_next_float32().map(Value::Float32),
            NumericKind::Float64 => self.read_next_float64().map(Value::Float64),
        }
    }

    /// Read a record described by `kinds`, in order.
    ///
    /// Stops at the first value that does not fit; values read before it are
    /// consumed and the offset stays after the last successful read.
    pub fn read_values(&mut self, kinds: &[NumericKind]) -> Result<Vec<Value>, DecodeError> {
        kinds.iter().map(|&kind| self.read_value(kind)).collect()
    }
}

impl<'a> Processor<'a, Unchecked> {
    /// Processor without bounds validation. See [`Unchecked`].
    pub fn new_unchecked(bytes: &'a [u8], order: ByteOrder) -> Self {
        Self::with_policy(bytes, order)
    }
}

impl<'a, P: BoundsPolicy> Processor<'a, P> {
    pub fn with_policy(bytes: &'a [u8], order: ByteOrder) -> Self {
        Self {
            bytes,
            offset: 0,
            order,
            policy: PhantomData,
        }
    }

    /// Bytes consumed so far.
    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn order(&self) -> ByteOrder {
        self.order
    }

    pub fn set_order(&mut self, order: ByteOrder) {
        if order != self.order {
            debug!("byte order changed to {:?} at offset {}", order, self.offset);
        }
        self.order = order;
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Bytes left after the current offset (zero once past the end).
    pub fn remaining(&self) -> usize {
        self.bytes.len().saturating_sub(self.offset)
    }

    /// Decode a `K` at the current offset and advance by its width.
    pub fn read_next<K: Primitive>(&mut self) -> P::Output<K::Value> {
        trace!(
            "read {:?} at offset {} ({:?})",
            K::KIND,
            self.offset,
            self.order
        );
        let order = self.order;
        P::advance(self.bytes, &mut self.offset, K::WIDTH, |window| {
            K::from_window(window, order)
        })
    }

    pub fn read_next_uint8(&mut self) -> P::Output<u8> {
        self.read_next::<Uint8>()
    }

    pub fn read_next_uint16(&mut self) -> P::Output<u16> {
        self.read_next::<Uint16>()
    }

    pub fn read_next_uint32(&mut self) -> P::Output<u32> {
        self.read_next::<Uint32>()
    }

    pub fn read_next_uint64(&mut self) -> P::Output<u64> {
        self.read_next::<Uint64>()
    }

    pub fn read_next_int8(&mut self) -> P::Output<i8> {
        self.read_next::<Int8>()
    }

    pub fn read_next_int16(&mut self) -> P::Output<i16> {
        self.read_next::<Int16>()
    }

    pub fn read_next_int32(&mut self) -> P::Output<i32> {
        self.read_next::<Int32>()
    }

    /// Half precision, widened to `f64`.
    pub fn read_next_float16(&mut self) -> P::Output<f64> {
        self.read_next::<Float16>()
    }

    pub fn read_next_float32(&mut self) -> P::Output<f32> {
        self.read_next::<Float32>()
    }

    pub fn read_next_float64(&mut self) -> P::Output<f64> {
        self.read_next::<Float64>()
    }
}

#[cfg(test)]
mod tests {
    use super::Processor;
    use crate::ByteOrder;
    use crate::codec::error::DecodeError;
    use crate::codec::value::{NumericKind, Value};

    #[test]
    fn failed_read_keeps_offset() {
        let data = [1u8, 2, 3];
        let mut processor = Processor::new(&data, ByteOrder::BigEndian);
        assert_eq!(processor.read_next_uint16(), Ok(0x0102));
        let err = processor.read_next_uint16().unwrap_err();
        assert_eq!(
            err,
            DecodeError::TooShort {
                width: 2,
                actual: 3,
                offset: 2
            }
        );
        assert_eq!(processor.offset(), 2);
        assert_eq!(processor.remaining(), 1);
        assert_eq!(processor.read_next_uint8(), Ok(3));
        assert_eq!(processor.remaining(), 0);
    }

    #[test]
    fn order_switch_affects_later_reads_only() {
        let data = [0x01, 0x02, 0x01, 0x02];
        let mut processor = Processor::new(&data, ByteOrder::BigEndian);
        assert_eq!(processor.read_next_uint16(), Ok(0x0102));
        processor.set_order(ByteOrder::LittleEndian);
        assert_eq!(processor.order(), ByteOrder::LittleEndian);
        assert_eq!(processor.read_next_uint16(), Ok(0x0201));
    }

    #[test]
    fn unchecked_reads_advance() {
        let data = [0xFF, 0x00, 0x3C, 0x00];
        let mut processor = Processor::new_unchecked(&data, ByteOrder::BigEndian);
        assert_eq!(processor.read_next_int16(), -256);
        assert_eq!(processor.read_next_float16(), 1.0);
        assert_eq!(processor.offset(), 4);
    }

    #[test]
    #[should_panic]
    fn unchecked_exhausted_panics() {
        let data = [0u8; 1];
        let mut processor = Processor::new_unchecked(&data, ByteOrder::BigEndian);
        let _ = processor.read_next_uint32();
    }

    #[test]
    fn read_values_by_kind() {
        let data = [0x80, 0x00, 0x01, 0x3F, 0x80, 0x00, 0x00];
        let mut processor = Processor::new(&data, ByteOrder::BigEndian);
        let values = processor
            .read_values(&[NumericKind::Int8, NumericKind::Uint16, NumericKind::Float32])
            .unwrap();
        assert_eq!(
            values,
            vec![Value::Int8(-128), Value::Uint16(1), Value::Float32(1.0)]
        );
        assert_eq!(processor.offset(), data.len());
    }

    #[test]
    fn read_values_stops_at_first_short_value() {
        let data = [0x01, 0x02, 0x03];
        let mut processor = Processor::new(&data, ByteOrder::BigEndian);
        let result = processor.read_values(&[NumericKind::Uint16, NumericKind::Uint16]);
        assert!(result.is_err());
        assert_eq!(processor.offset(), 2);
    }

    #[test]
    fn empty_buffer() {
        let mut processor = Processor::new(&[], ByteOrder::LittleEndian);
        assert!(processor.is_empty());
        assert_eq!(processor.len(), 0);
        assert!(processor.read_next_uint8().is_err());
    }
}
