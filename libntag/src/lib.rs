// libntag/src/lib.rs

//! libntag
//!
//! Pure Rust NDEF reader for page-addressed NFC Forum Type 2 tags
//! (NTAG213/215/216 and compatibles). Tag memory is reached one 4-byte
//! page at a time through [`PageReader`]; on top of it sit byte-range
//! reads, the TLV chain walk and the NDEF record decoder.

pub mod constants;
pub mod error;
pub mod ndef;
pub mod prelude;
pub mod protocol;
pub mod tag;
pub mod test_support;
pub mod transport;
pub mod types;
pub mod utils;

// Re-export common types at crate root so `crate::Error`, `crate::Result`
// and the newtypes in `types` are available to consumers and the prelude.
pub use crate::error::*;
pub use crate::types::*;

pub use crate::tag::read_ndef_message;
pub use crate::transport::{PageReader, Transceiver};
