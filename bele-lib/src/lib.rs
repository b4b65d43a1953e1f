//! Byte order helpers for binary formats that mix big and little endian fields.
//!
//! Decoders read the leading bytes of a slice, buffer encoders overwrite the leading bytes of a
//! slice, and stream encoders append to any [`std::io::Write`]. The [`mem::be`] and [`mem::le`]
//! modules offer the same operations with the byte order fixed.

pub mod error;
pub mod mem;
pub mod order;
pub mod stream;

use std::io::{self, Write};

pub use error::BeleError;
pub use order::ByteOrder;
pub use stream::{write_to_stream, StreamWord};

pub type BeleResult<T> = Result<T, BeleError>;

pub const UINT16_SIZE: usize = 2;
pub const UINT24_SIZE: usize = 3;
pub const UINT32_SIZE: usize = 4;
pub const UINT64_SIZE: usize = 8;
pub const FLOAT64_SIZE: usize = 8;

/// Largest value representable in 24 bits.
pub const UINT24_MAX: u32 = 0x00FF_FFFF;

pub fn read_uint16(bytes: &[u8], order: ByteOrder) -> BeleResult<u16> {
    match order {
        ByteOrder::BigEndian => mem::be::read_uint16(bytes),
        ByteOrder::LittleEndian => mem::le::read_uint16(bytes),
    }
}

/// Reads a 24 bit unsigned integer into the low bits of a `u32`.
pub fn read_uint24(bytes: &[u8], order: ByteOrder) -> BeleResult<u32> {
    match order {
        ByteOrder::BigEndian => mem::be::read_uint24(bytes),
        ByteOrder::LittleEndian => mem::le::read_uint24(bytes),
    }
}

pub fn read_uint32(bytes: &[u8], order: ByteOrder) -> BeleResult<u32> {
    match order {
        ByteOrder::BigEndian => mem::be::read_uint32(bytes),
        ByteOrder::LittleEndian => mem::le::read_uint32(bytes),
    }
}

pub fn read_uint64(bytes: &[u8], order: ByteOrder) -> BeleResult<u64> {
    match order {
        ByteOrder::BigEndian => mem::be::read_uint64(bytes),
        ByteOrder::LittleEndian => mem::le::read_uint64(bytes),
    }
}

/// Reads 8 bytes and reinterprets them bit for bit as an IEEE-754 double.
pub fn read_float64(bytes: &[u8], order: ByteOrder) -> BeleResult<f64> {
    match order {
        ByteOrder::BigEndian => mem::be::read_float64(bytes),
        ByteOrder::LittleEndian => mem::le::read_float64(bytes),
    }
}

pub fn put_uint16(bytes: &mut [u8], value: u16, order: ByteOrder) -> BeleResult<()> {
    match order {
        ByteOrder::BigEndian => mem::be::put_uint16(bytes, value),
        ByteOrder::LittleEndian => mem::le::put_uint16(bytes, value),
    }
}

/// Writes the low 24 bits of `value` into `bytes[0..3]`.
pub fn put_uint24(bytes: &mut [u8], value: u32, order: ByteOrder) -> BeleResult<()> {
    match order {
        ByteOrder::BigEndian => mem::be::put_uint24(bytes, value),
        ByteOrder::LittleEndian => mem::le::put_uint24(bytes, value),
    }
}

pub fn put_uint32(bytes: &mut [u8], value: u32, order: ByteOrder) -> BeleResult<()> {
    match order {
        ByteOrder::BigEndian => mem::be::put_uint32(bytes, value),
        ByteOrder::LittleEndian => mem::le::put_uint32(bytes, value),
    }
}

pub fn put_uint64(bytes: &mut [u8], value: u64, order: ByteOrder) -> BeleResult<()> {
    match order {
        ByteOrder::BigEndian => mem::be::put_uint64(bytes, value),
        ByteOrder::LittleEndian => mem::le::put_uint64(bytes, value),
    }
}

/// Appends the low 24 bits of `value` to `writer` as exactly 3 bytes.
pub fn write_uint24_to_stream<W: Write + ?Sized>(
    writer: &mut W,
    value: u32,
    order: ByteOrder,
) -> io::Result<()> {
    match order {
        ByteOrder::BigEndian => mem::be::write_uint24(writer, value),
        ByteOrder::LittleEndian => mem::le::write_uint24(writer, value),
    }
}
