use alloc::string::String;

/// Errors raised at the fallible edges of the crate.
///
/// Classification, normalization and block counting never fail; these
/// variants cover converting external input (text sizes, numeric kind
/// codes, token files) into the types those operations take.
#[derive(Debug)]
pub enum Error {
    /// A byte count that is not a non-negative integer.
    InvalidByteCount(String),
    /// A numeric value-kind code outside the known range.
    InvalidKindCode(u8),
    /// An I/O error from the standard library.
    #[cfg(feature = "std")]
    Io(std::io::Error),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = core::result::Result<T, Error>;

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::InvalidByteCount(s) => write!(f, "invalid byte count: {s:?}"),
            Error::InvalidKindCode(c) => write!(f, "invalid value kind code: {c}"),
            #[cfg(feature = "std")]
            Error::Io(e) => write!(f, "I/O error: {e}"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(e) => Some(e),
            _ => None,
        }
    }
}

#[cfg(feature = "std")]
impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::Io(e)
    }
}
