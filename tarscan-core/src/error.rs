//! Error types for tarscan operations.
//!
//! Every variant is terminal for the scan that produced it: a tar stream has
//! no reliable resynchronization point, so nothing here is retried.

use std::io;
use thiserror::Error;

/// The main error type for tarscan operations.
#[derive(Debug, Error)]
pub enum TarError {
    /// The underlying stream could not be opened.
    #[error("failed to open tar file - {identifier}: {source}")]
    Open {
        /// Identifier (usually a path) of the stream that failed to open.
        identifier: String,
        /// The OS-level reason.
        #[source]
        source: io::Error,
    },

    /// Operation attempted on a closed archive handle.
    #[error("archive is closed")]
    Closed,

    /// The stream ended before a full block could be read.
    #[error("Short read on {identifier}: expected {expected}, got {actual}")]
    ShortRead {
        /// Identifier of the archive being scanned.
        identifier: String,
        /// Number of bytes required.
        expected: usize,
        /// Number of bytes actually returned.
        actual: usize,
    },

    /// A header block failed its checksum.
    #[error("Checksum failure at offset {offset}: stored {stored}, computed {computed}")]
    ChecksumFailure {
        /// Archive offset of the offending header block.
        offset: u64,
        /// Checksum decoded from the header's checksum field.
        stored: u64,
        /// Checksum recomputed from the header bytes.
        computed: u64,
    },

    /// Offset arithmetic left the representable range.
    #[error("Offset overflow after {offset}")]
    OffsetOverflow {
        /// Last offset that was still representable.
        offset: u64,
    },

    /// I/O error from the underlying stream (other than a short read).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Result type alias for tarscan operations.
pub type Result<T> = std::result::Result<T, TarError>;

impl TarError {
    /// Create an open failure.
    pub fn open(identifier: impl Into<String>, source: io::Error) -> Self {
        Self::Open {
            identifier: identifier.into(),
            source,
        }
    }

    /// Create a short read error.
    pub fn short_read(identifier: impl Into<String>, expected: usize, actual: usize) -> Self {
        Self::ShortRead {
            identifier: identifier.into(),
            expected,
            actual,
        }
    }

    /// Create a checksum failure.
    pub fn checksum(offset: u64, stored: u64, computed: u64) -> Self {
        Self::ChecksumFailure {
            offset,
            stored,
            computed,
        }
    }

    /// Create an offset overflow error.
    pub fn offset_overflow(offset: u64) -> Self {
        Self::OffsetOverflow { offset }
    }

    /// Check whether this error came from a closed handle.
    pub fn is_closed(&self) -> bool {
        matches!(self, Self::Closed)
    }
}

impl From<TarError> for io::Error {
    fn from(err: TarError) -> Self {
        let kind = match &err {
            TarError::Io(e) | TarError::Open { source: e, .. } => e.kind(),
            TarError::ShortRead { .. } => io::ErrorKind::UnexpectedEof,
            _ => io::ErrorKind::Other,
        };
        match err {
            TarError::Io(e) => e,
            other => io::Error::new(kind, other),
        }
    }
}
