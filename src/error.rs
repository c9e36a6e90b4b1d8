use std::io;

use thiserror::Error;

/// Error flag carried by a [`HugeUint`](crate::HugeUint).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum NumberError {
    /// Digit storage could not be allocated or grown.
    #[error("memory error: digit storage could not be allocated")]
    Memory,
    /// A subtraction would have produced a negative value.
    #[error("underflow: result of the subtraction is negative")]
    Underflow,
}

/// Reasons a call to [`load`](crate::loader::load) can fail.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("invalid character {:?} in the input", as_char(.0))]
    InvalidCharacter(u8),
    #[error("IO error while loading numbers: {0}")]
    Io(#[from] io::Error),
    #[error("memory error while loading numbers")]
    Memory,
}

fn as_char(byte: &u8) -> char {
    char::from(*byte)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            NumberError::Underflow.to_string(),
            "underflow: result of the subtraction is negative"
        );
        assert_eq!(
            LoadError::InvalidCharacter(b'g').to_string(),
            "invalid character 'g' in the input"
        );
    }

    #[test]
    fn test_io_error_converts() {
        let err: LoadError = io::Error::new(io::ErrorKind::Other, "disk gone").into();
        assert!(matches!(err, LoadError::Io(_)));
    }
}
