// libntag/src/error.rs

use thiserror::Error;

/// Fault reported by a page reader for a single page transaction.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PageFault {
    #[error("transport failure: {0}")]
    Transport(String),

    #[error("transceive timed out")]
    Timeout,

    #[error("crc mismatch: expected {expected:#06x}, got {actual:#06x}")]
    ChecksumMismatch { expected: u16, actual: u16 },

    #[error("unexpected response length: expected {expected}, got {actual}")]
    UnexpectedLength { expected: usize, actual: usize },

    #[error("page {page} is outside tag memory")]
    OutOfRange { page: u8 },
}

/// Common error type
#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("reading page {page} failed: {fault}")]
    PageReadFailed {
        page: u8,
        #[source]
        fault: PageFault,
    },

    #[error("no NDEF message TLV found")]
    NotFound,

    #[error("could not allocate {requested} bytes for the NDEF message")]
    AllocationFailed { requested: usize },

    #[error("malformed NDEF message at offset {offset}: {reason}")]
    MalformedMessage { offset: usize, reason: &'static str },
}

pub type Result<T> = std::result::Result<T, Error>;
