// libntag/src/protocol/commands.rs

use crate::constants::NTAG_READ_CMD;
use crate::protocol::Frame;

/// NTAG commands this crate issues. Write commands are not modelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// READ: 16 bytes starting at `page`, wrapping at the end of memory
    Read { page: u8 },
}

impl Command {
    pub fn command_code(&self) -> u8 {
        match self {
            Command::Read { .. } => NTAG_READ_CMD,
        }
    }

    /// Encode the command payload without CRC_A
    pub fn encode(&self) -> Vec<u8> {
        match self {
            Command::Read { page } => vec![NTAG_READ_CMD, *page],
        }
    }

    /// Encode the full frame including CRC_A
    pub fn encode_frame(&self) -> Vec<u8> {
        Frame::encode(&self.encode())
    }
}
