// libntag/src/ndef/mod.rs

//! NDEF message decoding.
//!
//! Decoding is a pure function over a byte buffer. The records it returns
//! borrow that buffer, so the buffer must outlive them:
//!
//! ```
//! let raw = vec![0xD1, 0x01, 0x08, b'T', 0x02, b'e', b'n', b'H', b'e', b'l', b'l', b'o'];
//! let records = libntag::ndef::decode(&raw).unwrap();
//! assert_eq!(records[0].text().as_deref(), Some("Hello"));
//! ```

pub mod decoder;
pub mod header;
pub mod parser;
pub mod record;

pub use decoder::decode;
pub use header::{NdefHeader, TypeNameFormat};
pub use record::{NdefRecord, TextEncoding};
