// libntag/src/protocol/mod.rs

pub mod checksum;
pub mod commands;
pub mod frame;
pub mod responses;

pub use checksum::{crc_a, crc_a_bytes};
pub use commands::Command;
pub use frame::Frame;
pub use responses::decode_read;
