use core::{fmt, str::FromStr};

use crate::error::BeleError;

/// The order in which the bytes of a multi-byte value are laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ByteOrder {
    /// Most significant byte first, also known as network order.
    BigEndian,
    /// Least significant byte first.
    LittleEndian,
}

impl fmt::Display for ByteOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ByteOrder::BigEndian => write!(f, "big-endian"),
            ByteOrder::LittleEndian => write!(f, "little-endian"),
        }
    }
}

impl FromStr for ByteOrder {
    type Err = BeleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "be" | "big" | "big-endian" => Ok(ByteOrder::BigEndian),
            "le" | "little" | "little-endian" => Ok(ByteOrder::LittleEndian),
            _ => Err(BeleError::UnknownByteOrder(s.to_string())),
        }
    }
}
