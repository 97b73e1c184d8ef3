// libntag/src/ndef/header.rs

use crate::constants::{
    NDEF_FLAG_CF, NDEF_FLAG_IL, NDEF_FLAG_MB, NDEF_FLAG_ME, NDEF_FLAG_SR, NDEF_TNF_MASK,
};
use derive_more::Display;

/// Type Name Format: how the record type field is to be interpreted
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TypeNameFormat {
    #[display(fmt = "empty")]
    Empty = 0,
    #[display(fmt = "well-known")]
    WellKnown = 1,
    #[display(fmt = "mime")]
    Mime = 2,
    #[display(fmt = "absolute-uri")]
    AbsoluteUri = 3,
    #[display(fmt = "external")]
    External = 4,
    #[display(fmt = "unknown")]
    Unknown = 5,
    #[display(fmt = "unchanged")]
    Unchanged = 6,
    #[display(fmt = "reserved")]
    Reserved = 7,
}

impl TypeNameFormat {
    /// Map the low three bits of a header byte. Higher bits are ignored.
    pub fn from_bits(bits: u8) -> Self {
        match bits & NDEF_TNF_MASK {
            0 => Self::Empty,
            1 => Self::WellKnown,
            2 => Self::Mime,
            3 => Self::AbsoluteUri,
            4 => Self::External,
            5 => Self::Unknown,
            6 => Self::Unchanged,
            _ => Self::Reserved,
        }
    }
}

/// NDEF record header flags, decoded from the first byte of a record.
///
/// Bit layout, most significant first: MB ME CF SR IL TNF(3).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NdefHeader {
    pub message_begin: bool,
    pub message_end: bool,
    pub chunk_flag: bool,
    pub short_record: bool,
    pub id_length_present: bool,
    pub type_name_format: TypeNameFormat,
}

impl NdefHeader {
    pub fn from_byte(byte: u8) -> Self {
        Self {
            message_begin: byte & NDEF_FLAG_MB != 0,
            message_end: byte & NDEF_FLAG_ME != 0,
            chunk_flag: byte & NDEF_FLAG_CF != 0,
            short_record: byte & NDEF_FLAG_SR != 0,
            id_length_present: byte & NDEF_FLAG_IL != 0,
            type_name_format: TypeNameFormat::from_bits(byte),
        }
    }

    pub fn to_byte(&self) -> u8 {
        let mut byte = self.type_name_format as u8;
        if self.message_begin {
            byte |= NDEF_FLAG_MB;
        }
        if self.message_end {
            byte |= NDEF_FLAG_ME;
        }
        if self.chunk_flag {
            byte |= NDEF_FLAG_CF;
        }
        if self.short_record {
            byte |= NDEF_FLAG_SR;
        }
        if self.id_length_present {
            byte |= NDEF_FLAG_IL;
        }
        byte
    }
}

impl From<u8> for NdefHeader {
    fn from(byte: u8) -> Self {
        Self::from_byte(byte)
    }
}

impl From<NdefHeader> for u8 {
    fn from(header: NdefHeader) -> Self {
        header.to_byte()
    }
}
