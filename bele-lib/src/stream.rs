use std::io::{self, Write};

use log::debug;

use crate::order::ByteOrder;

mod sealed {
    pub trait Sealed {}

    impl Sealed for u32 {}
    impl Sealed for u64 {}
}

/// An unsigned integer that [`write_to_stream`] knows how to encode.
///
/// Implemented for `u32` and `u64` only.
pub trait StreamWord: sealed::Sealed + Copy {
    /// Number of bytes written for a value of this type.
    const WIDTH: usize;

    type Bytes: AsRef<[u8]>;

    fn be_bytes(self) -> Self::Bytes;

    fn le_bytes(self) -> Self::Bytes;
}

impl StreamWord for u32 {
    const WIDTH: usize = 4;

    type Bytes = [u8; 4];

    fn be_bytes(self) -> Self::Bytes {
        self.to_be_bytes()
    }

    fn le_bytes(self) -> Self::Bytes {
        self.to_le_bytes()
    }
}

impl StreamWord for u64 {
    const WIDTH: usize = 8;

    type Bytes = [u8; 8];

    fn be_bytes(self) -> Self::Bytes {
        self.to_be_bytes()
    }

    fn le_bytes(self) -> Self::Bytes {
        self.to_le_bytes()
    }
}

/// Appends `value` to `writer` in the given byte order, `T::WIDTH` bytes in a single write.
///
/// Errors from the writer are returned as is. On success every byte has been accepted.
pub fn write_to_stream<W, T>(writer: &mut W, value: T, order: ByteOrder) -> io::Result<()>
where
    W: Write + ?Sized,
    T: StreamWord,
{
    let bytes = match order {
        ByteOrder::BigEndian => value.be_bytes(),
        ByteOrder::LittleEndian => value.le_bytes(),
    };
    write_bytes(writer, bytes.as_ref())
}

pub(crate) fn write_bytes<W: Write + ?Sized>(writer: &mut W, bytes: &[u8]) -> io::Result<()> {
    writer
        .write_all(bytes)
        .inspect_err(|e| debug!("stream write of {} bytes failed: {e}", bytes.len()))
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use test_log::test;

    /// A writer whose sink is always closed.
    pub struct ClosedWriter;

    impl Write for ClosedWriter {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    /// Accepts at most one byte per call.
    struct TrickleWriter(Vec<u8>);

    impl Write for TrickleWriter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            match buf.first() {
                Some(b) => {
                    self.0.push(*b);
                    Ok(1)
                }
                None => Ok(0),
            }
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    /// Stops accepting bytes once `0` is full.
    struct FullWriter(usize);

    impl Write for FullWriter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            let n = buf.len().min(self.0);
            self.0 -= n;
            Ok(n)
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn write_u32() {
        let mut out = Vec::new();
        write_to_stream(&mut out, 1u32, ByteOrder::BigEndian).unwrap();
        assert_eq!(vec![0, 0, 0, 1], out);

        let mut out = Vec::new();
        write_to_stream(&mut out, 1u32, ByteOrder::LittleEndian).unwrap();
        assert_eq!(vec![1, 0, 0, 0], out);
    }

    #[test]
    fn write_u64() {
        let mut out = Vec::new();
        write_to_stream(&mut out, 1u64, ByteOrder::BigEndian).unwrap();
        assert_eq!(vec![0, 0, 0, 0, 0, 0, 0, 1], out);

        let mut out = Vec::new();
        write_to_stream(&mut out, 1u64, ByteOrder::LittleEndian).unwrap();
        assert_eq!(vec![1, 0, 0, 0, 0, 0, 0, 0], out);
    }

    #[test]
    fn write_appends() {
        let mut out = vec![0xAA];
        write_to_stream(&mut out, 0x0102_0304u32, ByteOrder::BigEndian).unwrap();
        write_to_stream(&mut out, 0x0102_0304u32, ByteOrder::LittleEndian).unwrap();
        assert_eq!(vec![0xAA, 1, 2, 3, 4, 4, 3, 2, 1], out);
    }

    #[test]
    fn write_through_trait_object() {
        let mut out = Vec::new();
        let writer: &mut dyn Write = &mut out;
        write_to_stream(writer, u64::MAX, ByteOrder::BigEndian).unwrap();
        assert_eq!(vec![0xFF; u64::WIDTH], out);
    }

    #[test]
    fn short_writes_complete() {
        let mut writer = TrickleWriter(Vec::new());
        write_to_stream(&mut writer, 0x0102_0304_0506_0708u64, ByteOrder::LittleEndian).unwrap();
        assert_eq!(vec![8, 7, 6, 5, 4, 3, 2, 1], writer.0);
    }

    #[test]
    fn stream_error_is_passed_through() {
        let error = write_to_stream(&mut ClosedWriter, 1u32, ByteOrder::BigEndian).unwrap_err();
        assert_eq!(io::ErrorKind::BrokenPipe, error.kind());
        assert_eq!("closed", error.to_string());
    }

    #[test]
    fn full_stream_is_an_error() {
        let error = write_to_stream(&mut FullWriter(2), 1u32, ByteOrder::BigEndian).unwrap_err();
        assert_eq!(io::ErrorKind::WriteZero, error.kind());
    }
}
