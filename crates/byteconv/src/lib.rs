//! byteconv: manual binary codec for fixed-width numeric values.
//!
//! This crate decodes unsigned/signed integers (8/16/32/64 bits) and IEEE-754
//! half/single/double floats from a byte slice at a given offset and byte
//! order, parses hex strings into bytes, and provides a sequential
//! [`Processor`] that consumes values front to back. Everything is pure and
//! synchronous; the processor's offset is the only mutable state.
//!
//! Two decoder families share one implementation, selected by a
//! [`BoundsPolicy`]:
//! - [`checked`]: validates `offset + width <= len` and returns
//!   [`DecodeError`] otherwise.
//! - [`unchecked`]: no validation; short input is outside the contract.
//!
//! Invariants:
//! - A decode of an N-byte type at offset `o` reads exactly `[o, o + N)`.
//! - Half precision is rebuilt from its fields bit-exactly (signed zero,
//!   subnormals, infinities); NaN payloads are not preserved.
//! - Unsigned 64-bit decoding is exact; the `f64` accumulation is kept only
//!   as `decode_uint64_lossy`.
//!
//! Version française (résumé):
//! Cette crate décode des entiers et flottants à largeur fixe depuis un
//! tableau d'octets (ordre big/little endian), convertit des chaînes hexa en
//! octets et fournit un lecteur séquentiel. Deux familles de fonctions :
//! `checked` (vérifie les bornes) et `unchecked` (sans vérification).
//!
//! # Examples
//! ```
//! use byteconv::{ByteOrder, Processor, checked, hex};
//!
//! let bytes = hex::hex_to_bytes("400921fb54442d18", ByteOrder::BigEndian)?;
//! let pi = checked::decode_float64(&bytes, 0, ByteOrder::BigEndian)?;
//! assert_eq!(pi, std::f64::consts::PI);
//!
//! let mut processor = Processor::new(&bytes, ByteOrder::BigEndian);
//! assert_eq!(processor.read_next_uint32()?, 0x4009_21FB);
//! assert_eq!(processor.remaining(), 4);
//! # Ok::<(), byteconv::Error>(())
//! ```

pub mod checked;
pub mod codec;
pub mod hex;
mod order;
mod processor;
mod record;
pub mod unchecked;

pub use codec::error::DecodeError;
pub use codec::reader::{BoundsPolicy, Checked, Unchecked};
pub use codec::value::{NumericKind, Value};
pub use hex::HexError;
pub use order::ByteOrder;
pub use processor::Processor;
pub use record::read_hex_record;

/// Any error produced by this crate.
///
/// # Examples
/// ```
/// use byteconv::{DecodeError, Error};
///
/// let err: Error = DecodeError::TooShort { width: 4, actual: 3, offset: 0 }.into();
/// assert!(err.to_string().contains("not enough bytes"));
/// ```
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Decode(#[from] DecodeError),
    #[error(transparent)]
    Hex(#[from] HexError),
}
