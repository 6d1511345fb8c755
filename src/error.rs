/*!
Error types.
*/
use std::fmt;

/**
Errors reported when a text handle cannot be read.

None of these are transient.  Retrying the same operation on the same handle will produce the same error.
*/
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum AccessError {
    /// The handle's canonical representation has not been materialised yet.
    NotReady,
    /// The index is past the end of the buffer.
    OutOfBounds { index: usize, len: usize },
    /// The profile provides no storage access at all.
    Unsupported { profile: &'static str },
    /// A raw kind tag did not name a known kind.
    UnknownTag(u8),
}

impl fmt::Display for AccessError {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            AccessError::NotReady => write!(fmt, "text handle is not ready"),
            AccessError::OutOfBounds { index, len } => write!(fmt, "index {} out of bounds for length {}", index, len),
            AccessError::Unsupported { profile } => write!(fmt, "profile {} has no storage access", profile),
            AccessError::UnknownTag(tag) => write!(fmt, "unknown storage kind tag {}", tag),
        }
    }
}

impl ::std::error::Error for AccessError {}

/// Result type for text access.
pub type Result<T> = ::std::result::Result<T, AccessError>;
