pub const UINT8_WIDTH: usize = 1;
pub const UINT16_WIDTH: usize = 2;
pub const UINT32_WIDTH: usize = 4;
pub const UINT64_WIDTH: usize = 8;

pub const FLOAT16_WIDTH: usize = 2;
pub const FLOAT32_WIDTH: usize = 4;
pub const FLOAT64_WIDTH: usize = 8;

/// `2^32`, used when two 32-bit halves are combined in floating point.
pub const TWO_POW_32: f64 = 4_294_967_296.0;

/// Field widths of an IEEE-754 binary interchange format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FloatFormat {
    pub total_bits: u32,
    pub mantissa_bits: u32,
    pub exponent_bits: u32,
    pub bias: i32,
}

impl FloatFormat {
    pub const fn width(&self) -> usize {
        (self.total_bits / 8) as usize
    }

    /// All-ones exponent field (infinity / NaN).
    pub const fn exponent_max(&self) -> u64 {
        (1 << self.exponent_bits) - 1
    }

    pub const fn mantissa_mask(&self) -> u64 {
        (1 << self.mantissa_bits) - 1
    }

    /// Value of the implicit leading bit of a normal mantissa.
    pub const fn implicit_bit(&self) -> u64 {
        1 << self.mantissa_bits
    }
}

pub const BINARY16: FloatFormat = FloatFormat {
    total_bits: 16,
    mantissa_bits: 10,
    exponent_bits: 5,
    bias: 15,
};

pub const BINARY32: FloatFormat = FloatFormat {
    total_bits: 32,
    mantissa_bits: 23,
    exponent_bits: 8,
    bias: 127,
};

pub const BINARY64: FloatFormat = FloatFormat {
    total_bits: 64,
    mantissa_bits: 52,
    exponent_bits: 11,
    bias: 1023,
};
