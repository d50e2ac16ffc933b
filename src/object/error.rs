use std::io;

use thiserror::Error;

/// Describes why stored object bytes could not be decoded.
#[derive(Debug, Error)]
pub enum Error {
    /// The framed bytes have no NUL terminator, or the header has no
    /// `<type> <size>` separator.
    #[error("malformed object header")]
    MalformedHeader,

    /// The header's size field is not a non-negative decimal integer.
    #[error("object header declares invalid size `{0}`")]
    InvalidSize(String),

    /// The zlib layer rejected the stored bytes (bad header, truncated
    /// stream, or checksum mismatch).
    #[error("corrupt zlib stream: {0}")]
    CorruptStream(#[source] io::Error),

    /// A tree entry has no space between its mode and name, or its mode is
    /// not a run of octal digits.
    #[error("malformed tree entry at byte {offset}")]
    MalformedEntry { offset: usize },

    /// A tree entry ends before its 20-byte object ID is complete.
    #[error("truncated tree entry at byte {offset}")]
    TruncatedEntry { offset: usize },
}

/// A specialized `Result` type for object decoding.
pub type Result<T> = std::result::Result<T, Error>;
