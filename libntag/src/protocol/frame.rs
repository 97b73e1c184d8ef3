// libntag/src/protocol/frame.rs

use crate::constants::CRC_A_LEN;
use crate::error::PageFault;
use crate::protocol::checksum::{crc_a, crc_a_bytes};

/// ISO/IEC 14443-A standard frame helper.
/// Format: [Payload(n)] [CRC_A lsb] [CRC_A msb]
pub struct Frame;

impl Frame {
    /// Append CRC_A to a payload
    pub fn encode(payload: &[u8]) -> Vec<u8> {
        let mut out = Vec::with_capacity(payload.len() + CRC_A_LEN);
        out.extend_from_slice(payload);
        out.extend_from_slice(&crc_a_bytes(payload));
        out
    }

    /// Verify the CRC_A trailer and return the payload without it.
    /// `expected_payload_len` pins the exact payload size the caller wants.
    pub fn decode(frame: &[u8], expected_payload_len: usize) -> Result<&[u8], PageFault> {
        let expected = expected_payload_len + CRC_A_LEN;
        if frame.len() != expected {
            return Err(PageFault::UnexpectedLength {
                expected,
                actual: frame.len(),
            });
        }

        let (payload, trailer) = frame.split_at(expected_payload_len);
        let actual = u16::from_le_bytes([trailer[0], trailer[1]]);
        let computed = crc_a(payload);
        if actual != computed {
            return Err(PageFault::ChecksumMismatch {
                expected: computed,
                actual,
            });
        }

        Ok(payload)
    }
}
