use std::fmt::Display;

/// The error type of the crate.
#[derive(Debug)]
pub enum Error {
    /// Order or memory limit outside the accepted range.
    InvalidParameter,
    /// The input does not fit the 32-bit length field of the stream.
    InputTooLarge(u64),
    /// The compressed stream ended before the expected number of bytes
    /// could be decoded.
    TruncatedStream,
    /// IO error.
    Io(std::io::Error),
}

impl From<std::io::Error> for Error {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Debug::fmt(&self, f)
    }
}

impl std::error::Error for Error {}
