//! Small helpers shared across the crate: hex formatting for log output
//! and fixtures, and transceive timeout defaults.

pub mod hex;
pub mod timeout;

pub use hex::*;
pub use timeout::*;
