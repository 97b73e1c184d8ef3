// libntag/src/constants.rs
//! Tag memory layout, command opcodes and TLV tag values shared across the crate

/// Size of one tag memory page in bytes
pub const PAGE_SIZE: usize = 4;

/// Number of pages addressable by the one-byte READ page argument
pub const MAX_PAGES: usize = 256;

/// Total byte-addressable space reachable through page reads
pub const ADDRESSABLE_BYTES: usize = MAX_PAGES * PAGE_SIZE;

/// First page of user memory (capability container occupies page 3)
pub const USER_MEMORY_FIRST_PAGE: u8 = 4;

/// Byte address where the TLV chain starts: first byte of user memory
pub const TLV_BASE_ADDRESS: usize = USER_MEMORY_FIRST_PAGE as usize * PAGE_SIZE;

/// NTAG READ command: returns 16 bytes (four pages) starting at the given page
pub const NTAG_READ_CMD: u8 = 0x30;

/// Data bytes returned by one READ command
pub const NTAG_READ_RESPONSE_LEN: usize = 16;

/// Length of the CRC_A trailer appended to frames
pub const CRC_A_LEN: usize = 2;

/// ISO/IEC 14443-3 CRC_A preset value
pub const CRC_A_PRESET: u16 = 0x6363;

/// TLV tag values (NFC Forum Type 2 Tag)
pub const TLV_NULL: u8 = 0x00;
pub const TLV_LOCK_CONTROL: u8 = 0x01;
pub const TLV_MEMORY_CONTROL: u8 = 0x02;
pub const TLV_NDEF_MESSAGE: u8 = 0x03;
pub const TLV_PROPRIETARY: u8 = 0xFD;
pub const TLV_TERMINATOR: u8 = 0xFE;

/// Marker in the first length byte announcing a 3-byte length field
pub const TLV_EXTENDED_LENGTH: u8 = 0xFF;

/// Size of the lookahead window read at each TLV position
pub const TLV_LOOKAHEAD: usize = 4;

/// NDEF header flag bits
pub const NDEF_FLAG_MB: u8 = 0x80;
pub const NDEF_FLAG_ME: u8 = 0x40;
pub const NDEF_FLAG_CF: u8 = 0x20;
pub const NDEF_FLAG_SR: u8 = 0x10;
pub const NDEF_FLAG_IL: u8 = 0x08;
pub const NDEF_TNF_MASK: u8 = 0x07;

/// Well-known record type names
pub const RTD_TEXT: &[u8] = b"T";
pub const RTD_URI: &[u8] = b"U";
