//! IEEE-754 reconstruction from raw bits.
//!
//! The value is rebuilt arithmetically from its fields instead of through a
//! native bit view:
//!
//! `value = sign * mantissa * 2^(exponent - bias - mantissa_bits)`
//!
//! Subnormals use the effective exponent `1 - bias` and no implicit bit. An
//! all-ones exponent yields ±infinity for a zero mantissa and NaN otherwise;
//! NaN payloads are not preserved. The power of two is built exactly, so
//! every finite result (including `-0.0` and the smallest binary64
//! subnormal) is bit-identical to the native conversion.

use super::layout::{BINARY16, FloatFormat};

const F64_MANTISSA_BITS: u32 = 52;
const F64_BIAS: i32 = 1023;
const F64_MIN_NORMAL_EXP: i32 = 1 - F64_BIAS;
const F64_MIN_SUBNORMAL_EXP: i32 = F64_MIN_NORMAL_EXP - F64_MANTISSA_BITS as i32;

/// Reconstruct the value encoded by the low `format.total_bits` of `bits`.
///
/// # Examples
/// ```
/// use byteconv::codec::ieee754::reconstruct;
/// use byteconv::codec::layout::{BINARY16, BINARY64};
///
/// assert_eq!(reconstruct(0x3C00, &BINARY16), 1.0);
/// assert_eq!(reconstruct(0x4248, &BINARY16), 3.140625);
/// assert_eq!(reconstruct(0x4009_21FB_5444_2D18, &BINARY64), std::f64::consts::PI);
/// ```
pub fn reconstruct(bits: u64, format: &FloatFormat) -> f64 {
    let sign = if (bits >> (format.total_bits - 1)) & 1 == 0 {
        1.0
    } else {
        -1.0
    };
    let exponent = (bits >> format.mantissa_bits) & format.exponent_max();
    let mantissa = bits & format.mantissa_mask();

    let (mantissa, exponent) = if exponent == 0 {
        (mantissa, 1 - format.bias)
    } else if exponent == format.exponent_max() {
        return if mantissa == 0 {
            sign * f64::INFINITY
        } else {
            f64::NAN
        };
    } else {
        (
            mantissa + format.implicit_bit(),
            exponent as i32 - format.bias,
        )
    };

    // mantissa < 2^53, so the conversion and both products are exact
    sign * mantissa as f64 * exp2(exponent - format.mantissa_bits as i32)
}

/// Half precision widened to `f64`. Every binary16 value is exact in `f64`.
pub fn reconstruct_binary16(bits: u16) -> f64 {
    reconstruct(u64::from(bits), &BINARY16)
}

/// Exact `2^power` for `power` in the binary64 range, subnormals included.
fn exp2(power: i32) -> f64 {
    debug_assert!((F64_MIN_SUBNORMAL_EXP..=F64_BIAS).contains(&power));
    if power >= F64_MIN_NORMAL_EXP {
        f64::from_bits(((power + F64_BIAS) as u64) << F64_MANTISSA_BITS)
    } else {
        f64::from_bits(1u64 << (power - F64_MIN_SUBNORMAL_EXP))
    }
}
