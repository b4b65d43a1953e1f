//! Fixed byte order primitives.
//!
//! Every buffer-form function looks only at the leading bytes of the slice it is given and fails
//! with [`BeleError::InsufficientBuffer`] when there are fewer than the value's width. Encoders
//! leave the buffer untouched on failure and never write past the width.

use log::debug;

use crate::{error::BeleError, BeleResult};

fn leading<const N: usize>(bytes: &[u8], operation: &'static str) -> BeleResult<[u8; N]> {
    bytes
        .first_chunk::<N>()
        .copied()
        .ok_or_else(|| insufficient(operation, N, bytes.len()))
}

fn leading_mut<'a, const N: usize>(
    bytes: &'a mut [u8],
    operation: &'static str,
) -> BeleResult<&'a mut [u8; N]> {
    let received_size = bytes.len();
    bytes
        .first_chunk_mut::<N>()
        .ok_or_else(|| insufficient(operation, N, received_size))
}

fn insufficient(operation: &'static str, expected_size: usize, received_size: usize) -> BeleError {
    debug!("{operation}: rejecting buffer of {received_size} bytes, need {expected_size}");
    BeleError::InsufficientBuffer {
        operation,
        expected_size,
        received_size,
    }
}

pub mod be {
    use std::io::{self, Write};

    use super::{leading, leading_mut};
    use crate::BeleResult;

    /// Reads the first 2 bytes of `bytes` as a big endian `u16`.
    ///
    /// ```text
    /// bytes[0] << 8 | bytes[1]
    /// ```
    pub fn read_uint16(bytes: &[u8]) -> BeleResult<u16> {
        leading(bytes, "read_uint16").map(u16::from_be_bytes)
    }

    /// The result always fits in the low 24 bits.
    pub fn read_uint24(bytes: &[u8]) -> BeleResult<u32> {
        let [b0, b1, b2] = leading::<3>(bytes, "read_uint24")?;
        Ok(u32::from_be_bytes([0, b0, b1, b2]))
    }

    pub fn read_uint32(bytes: &[u8]) -> BeleResult<u32> {
        leading(bytes, "read_uint32").map(u32::from_be_bytes)
    }

    pub fn read_uint64(bytes: &[u8]) -> BeleResult<u64> {
        leading(bytes, "read_uint64").map(u64::from_be_bytes)
    }

    /// Reinterprets the first 8 bytes as the bits of an IEEE-754 double.
    pub fn read_float64(bytes: &[u8]) -> BeleResult<f64> {
        leading(bytes, "read_float64")
            .map(u64::from_be_bytes)
            .map(f64::from_bits)
    }

    pub fn put_uint16(bytes: &mut [u8], value: u16) -> BeleResult<()> {
        *leading_mut(bytes, "put_uint16")? = value.to_be_bytes();
        Ok(())
    }

    /// Writes the low 24 bits of `value` into `bytes[0..3]`, the top byte is ignored.
    pub fn put_uint24(bytes: &mut [u8], value: u32) -> BeleResult<()> {
        let [_, b0, b1, b2] = value.to_be_bytes();
        *leading_mut(bytes, "put_uint24")? = [b0, b1, b2];
        Ok(())
    }

    pub fn put_uint32(bytes: &mut [u8], value: u32) -> BeleResult<()> {
        *leading_mut(bytes, "put_uint32")? = value.to_be_bytes();
        Ok(())
    }

    pub fn put_uint64(bytes: &mut [u8], value: u64) -> BeleResult<()> {
        *leading_mut(bytes, "put_uint64")? = value.to_be_bytes();
        Ok(())
    }

    pub fn write_uint24<W: Write + ?Sized>(writer: &mut W, value: u32) -> io::Result<()> {
        let [_, b0, b1, b2] = value.to_be_bytes();
        crate::stream::write_bytes(writer, &[b0, b1, b2])
    }

}

pub mod le {
    use std::io::{self, Write};

    use super::{leading, leading_mut};
    use crate::BeleResult;

    /// Reads the first 2 bytes of `bytes` as a little endian `u16`.
    ///
    /// ```text
    /// bytes[0] | bytes[1] << 8
    /// ```
    pub fn read_uint16(bytes: &[u8]) -> BeleResult<u16> {
        leading(bytes, "read_uint16").map(u16::from_le_bytes)
    }

    pub fn read_uint24(bytes: &[u8]) -> BeleResult<u32> {
        let [b0, b1, b2] = leading::<3>(bytes, "read_uint24")?;
        Ok(u32::from_le_bytes([b0, b1, b2, 0]))
    }

    pub fn read_uint32(bytes: &[u8]) -> BeleResult<u32> {
        leading(bytes, "read_uint32").map(u32::from_le_bytes)
    }

    pub fn read_uint64(bytes: &[u8]) -> BeleResult<u64> {
        leading(bytes, "read_uint64").map(u64::from_le_bytes)
    }

    pub fn read_float64(bytes: &[u8]) -> BeleResult<f64> {
        leading(bytes, "read_float64")
            .map(u64::from_le_bytes)
            .map(f64::from_bits)
    }

    pub fn put_uint16(bytes: &mut [u8], value: u16) -> BeleResult<()> {
        *leading_mut(bytes, "put_uint16")? = value.to_le_bytes();
        Ok(())
    }

    pub fn put_uint24(bytes: &mut [u8], value: u32) -> BeleResult<()> {
        let [b0, b1, b2, _] = value.to_le_bytes();
        *leading_mut(bytes, "put_uint24")? = [b0, b1, b2];
        Ok(())
    }

    pub fn put_uint32(bytes: &mut [u8], value: u32) -> BeleResult<()> {
        *leading_mut(bytes, "put_uint32")? = value.to_le_bytes();
        Ok(())
    }

    pub fn put_uint64(bytes: &mut [u8], value: u64) -> BeleResult<()> {
        *leading_mut(bytes, "put_uint64")? = value.to_le_bytes();
        Ok(())
    }

    pub fn write_uint24<W: Write + ?Sized>(writer: &mut W, value: u32) -> io::Result<()> {
        let [b0, b1, b2, _] = value.to_le_bytes();
        crate::stream::write_bytes(writer, &[b0, b1, b2])
    }

}
