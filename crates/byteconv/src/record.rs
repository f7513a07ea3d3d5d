use crate::ByteOrder;
use crate::Error;
use crate::codec::value::{NumericKind, Value};
use crate::hex::hex_to_bytes;
use crate::processor::Processor;

/// Decode a hex-encoded record laid out as `kinds`.
///
/// The hex string is parsed strictly in big-endian digit order (the wire
/// order of the record); `order` applies to the multi-byte fields. Trailing
/// bytes beyond the layout are ignored.
///
/// # Examples
/// ```
/// use byteconv::{ByteOrder, NumericKind, Value, read_hex_record};
///
/// let values = read_hex_record("0x80dead", ByteOrder::BigEndian, &[
///     NumericKind::Int8,
///     NumericKind::Uint16,
/// ])?;
/// assert_eq!(values, vec![Value::Int8(-128), Value::Uint16(0xDEAD)]);
/// # Ok::<(), byteconv::Error>(())
/// ```
pub fn read_hex_record(
    input: &str,
    order: ByteOrder,
    kinds: &[NumericKind],
) -> Result<Vec<Value>, Error> {
    let bytes = hex_to_bytes(input, ByteOrder::BigEndian)?;
    let mut processor = Processor::new(&bytes, order);
    Ok(processor.read_values(kinds)?)
}
