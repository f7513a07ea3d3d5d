use serde::{Deserialize, Serialize};

/// Byte order of a multi-byte field.
///
/// Defaults to big-endian, which is also what callers get when they pass a
/// `false` little-endian flag.
///
/// # Examples
/// ```
/// use byteconv::ByteOrder;
///
/// assert_eq!(ByteOrder::default(), ByteOrder::BigEndian);
/// assert_eq!(ByteOrder::from_little_endian(true), ByteOrder::LittleEndian);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ByteOrder {
    /// Byte 0 is the most significant.
    #[default]
    #[serde(rename = "big")]
    BigEndian,
    /// The last byte of the field is the most significant.
    #[serde(rename = "little")]
    LittleEndian,
}

impl ByteOrder {
    pub fn from_little_endian(little_endian: bool) -> Self {
        if little_endian {
            ByteOrder::LittleEndian
        } else {
            ByteOrder::BigEndian
        }
    }

    pub fn is_little_endian(self) -> bool {
        self == ByteOrder::LittleEndian
    }
}
