use super::layout;
use super::primitive::{Primitive, Uint32};
use super::reader::BoundsPolicy;
use crate::ByteOrder;

/// Decode a `K` at `offset` under the bounds policy `P`.
///
/// # Examples
/// ```
/// use byteconv::ByteOrder;
/// use byteconv::codec::parser::decode;
/// use byteconv::codec::primitive::Int16;
/// use byteconv::codec::reader::{Checked, Unchecked};
///
/// let bytes = [0x00, 0xFF, 0x00];
/// assert_eq!(decode::<Int16, Checked>(&bytes, 1, ByteOrder::BigEndian), Ok(-256));
/// assert_eq!(decode::<Int16, Unchecked>(&bytes, 0, ByteOrder::LittleEndian), -256);
/// ```
pub fn decode<K: Primitive, P: BoundsPolicy>(
    bytes: &[u8],
    offset: usize,
    order: ByteOrder,
) -> P::Output<K::Value> {
    P::window(bytes, offset, K::WIDTH, |window| {
        K::from_window(window, order)
    })
}

/// Legacy unsigned 64-bit decode accumulated in `f64` as
/// `high32 * 2^32 + low32`.
///
/// Exact only while the value stays at or below `2^53 - 1`
/// (`[0x00, 0x1F, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF]` big-endian); larger
/// values round to the nearest `f64`. Prefer the exact `u64` decoders.
pub fn decode_uint64_lossy<P: BoundsPolicy>(
    bytes: &[u8],
    offset: usize,
    order: ByteOrder,
) -> P::Output<f64> {
    P::window(bytes, offset, layout::UINT64_WIDTH, |window| {
        let (first, second) = window.split_at(layout::UINT32_WIDTH);
        let (high, low) = match order {
            ByteOrder::BigEndian => (first, second),
            ByteOrder::LittleEndian => (second, first),
        };
        f64::from(Uint32::from_window(high, order)) * layout::TWO_POW_32
            + f64::from(Uint32::from_window(low, order))
    })
}
