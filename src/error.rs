use alloc::string::String;
use core::fmt;

/// Error type for the library.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Error {
    /// A general error, usually the result of failing to parse a decimal from text.
    ErrorString(String),
    /// The decimal has a non-zero digit past the configured scale.
    ScaleMismatch { expected: u32, actual: u32 },
    /// The unscaled value needs more bytes than the configured maximum width.
    PrecisionOverflow { width: usize, max_width: usize },
    /// The buffer ended before `field` could be read in full.
    TruncatedBuffer {
        field: &'static str,
        needed: usize,
        remaining: usize,
    },
    /// Every field was read but the buffer still holds this many bytes.
    TrailingBytes(usize),
    /// A builder was asked to build without a required field being set.
    MissingField(&'static str),
    /// A length-prefixed decimal field declared zero bytes. Every unscaled value, zero
    /// included, takes at least one byte.
    EmptyValue(&'static str),
}

impl<S> From<S> for Error
where
    S: Into<String>,
{
    #[inline]
    fn from(from: S) -> Self {
        Self::ErrorString(from.into())
    }
}

#[cold]
pub(crate) fn tail_error(from: &'static str) -> Result<crate::Decimal, Error> {
    Err(from.into())
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::ErrorString(ref err) => f.pad(err),
            Self::ScaleMismatch { expected, actual } => write!(
                f,
                "Cannot encode decimal with scale {} as scale {}",
                actual, expected
            ),
            Self::PrecisionOverflow { width, max_width } => write!(
                f,
                "Unscaled value exceeds maximum width that can be represented: {} bytes > {}",
                width, max_width
            ),
            Self::TruncatedBuffer {
                field,
                needed,
                remaining,
            } => write!(
                f,
                "Buffer truncated while reading `{}`: needed {} bytes, {} remaining",
                field, needed, remaining
            ),
            Self::TrailingBytes(count) => write!(f, "Buffer has {} trailing bytes after the last field", count),
            Self::MissingField(field) => write!(f, "Required field `{}` has not been set", field),
            Self::EmptyValue(field) => write!(f, "Field `{}` has a zero-length value", field),
        }
    }
}
