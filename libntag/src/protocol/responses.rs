// libntag/src/protocol/responses.rs

use crate::constants::NTAG_READ_RESPONSE_LEN;
use crate::error::PageFault;
use crate::protocol::Frame;

/// Decode a READ response.
/// Layout: data(16) + CRC_A(2)
pub fn decode_read(frame: &[u8]) -> Result<[u8; NTAG_READ_RESPONSE_LEN], PageFault> {
    let payload = Frame::decode(frame, NTAG_READ_RESPONSE_LEN)?;
    let mut data = [0u8; NTAG_READ_RESPONSE_LEN];
    data.copy_from_slice(payload);
    Ok(data)
}
