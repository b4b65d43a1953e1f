use core::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BeleError {
    /// The slice handed to a buffer-form operation is shorter than the value's width.
    InsufficientBuffer {
        operation: &'static str,
        expected_size: usize,
        received_size: usize,
    },
    UnknownByteOrder(String),
}

impl fmt::Display for BeleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BeleError::InsufficientBuffer {
                operation,
                expected_size,
                received_size,
            } => write!(
                f,
                "{operation} needs a buffer of at least {expected_size} bytes, received {received_size} bytes"
            ),
            BeleError::UnknownByteOrder(o) => write!(
                f,
                "unknown byte order \"{o}\", expected one of: be, big-endian, le, little-endian"
            ),
        }
    }
}

impl std::error::Error for BeleError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_insufficient_buffer() {
        let error = BeleError::InsufficientBuffer {
            operation: "read_uint32",
            expected_size: 4,
            received_size: 3,
        };
        assert_eq!(
            "read_uint32 needs a buffer of at least 4 bytes, received 3 bytes",
            error.to_string()
        );
    }
}
