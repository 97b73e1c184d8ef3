// libntag/src/protocol/checksum.rs

use crate::constants::CRC_A_PRESET;

/// Compute ISO/IEC 14443-3 CRC_A over `data`.
/// Preset 0x6363, reflected polynomial x^16 + x^12 + x^5 + 1.
pub fn crc_a(data: &[u8]) -> u16 {
    data.iter().fold(CRC_A_PRESET, |crc, &b| {
        let mut bb = b ^ (crc & 0x00ff) as u8;
        bb ^= bb << 4;
        let bb = bb as u16;
        (crc >> 8) ^ (bb << 8) ^ (bb << 3) ^ (bb >> 4)
    })
}

/// CRC_A as transmitted on the wire: least significant byte first.
pub fn crc_a_bytes(data: &[u8]) -> [u8; 2] {
    crc_a(data).to_le_bytes()
}
