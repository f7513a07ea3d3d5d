//! Hex string to byte array conversion.
//!
//! An optional `0x`/`0X` prefix is stripped. Characters outside
//! `[0-9a-fA-F]` are read as the digit `0` rather than rejected. The strict
//! parser fails on an odd digit count; the lenient parser drops the digit
//! left without a partner.
//!
//! Big-endian output takes the first two digits as byte 0, little-endian
//! output takes the last two digits as byte 0.

pub mod error;
pub mod parser;

pub use error::HexError;
pub use parser::{HexMode, hex_to_bytes, hex_to_bytes_lenient, parse_hex};
