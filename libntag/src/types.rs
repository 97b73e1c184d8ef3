// libntag/src/types.rs

use crate::constants::{
    ADDRESSABLE_BYTES, PAGE_SIZE, TLV_BASE_ADDRESS, TLV_LOCK_CONTROL, TLV_MEMORY_CONTROL,
    TLV_NDEF_MESSAGE, TLV_NULL, TLV_PROPRIETARY, TLV_TERMINATOR,
};
use crate::Error;
use derive_more::{Display, From, Into};

/// Page - Newtype Pattern (4 bytes)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, From, Into)]
pub struct Page([u8; PAGE_SIZE]);

impl Page {
    pub fn from_bytes(bytes: [u8; PAGE_SIZE]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; PAGE_SIZE] {
        &self.0
    }

    pub fn to_hex(&self) -> String {
        crate::utils::bytes_to_hex_spaced(self.as_bytes())
    }
}

impl TryFrom<&[u8]> for Page {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        let arr: [u8; PAGE_SIZE] = bytes.try_into().map_err(|_| {
            Error::InvalidArgument(format!(
                "page must be {} bytes, got {}",
                PAGE_SIZE,
                bytes.len()
            ))
        })?;
        Ok(Self(arr))
    }
}

/// Location of one TLV value region in tag byte-address space.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TlvInfo {
    pub tag_type: u8,
    pub value_length: usize,
    pub value_start_address: usize,
}

impl TlvInfo {
    pub fn new(tag_type: u8, value_length: usize, value_start_address: usize) -> Self {
        Self {
            tag_type,
            value_length,
            value_start_address,
        }
    }

    pub fn tlv_type(&self) -> TlvType {
        TlvType::from(self.tag_type)
    }

    /// First byte address after the value region.
    pub fn value_end_address(&self) -> usize {
        self.value_start_address + self.value_length
    }
}

/// Named view over a TLV tag byte
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TlvType {
    #[display(fmt = "NULL")]
    Null,
    #[display(fmt = "Lock Control")]
    LockControl,
    #[display(fmt = "Memory Control")]
    MemoryControl,
    #[display(fmt = "NDEF Message")]
    NdefMessage,
    #[display(fmt = "Proprietary")]
    Proprietary,
    #[display(fmt = "Terminator")]
    Terminator,
    #[display(fmt = "Unknown({:#04x})", _0)]
    Unknown(u8),
}

impl From<u8> for TlvType {
    fn from(tag: u8) -> Self {
        match tag {
            TLV_NULL => Self::Null,
            TLV_LOCK_CONTROL => Self::LockControl,
            TLV_MEMORY_CONTROL => Self::MemoryControl,
            TLV_NDEF_MESSAGE => Self::NdefMessage,
            TLV_PROPRIETARY => Self::Proprietary,
            TLV_TERMINATOR => Self::Terminator,
            other => Self::Unknown(other),
        }
    }
}

/// Tag family member. Decides where user memory ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TagModel {
    Ntag213,
    Ntag215,
    Ntag216,
    /// Unknown Type 2 tag: scan up to the end of addressable memory
    #[default]
    Generic,
}

impl TagModel {
    /// User memory size in bytes, starting at page 4.
    pub fn user_memory_bytes(&self) -> usize {
        match self {
            Self::Ntag213 => 144,
            Self::Ntag215 => 504,
            Self::Ntag216 => 888,
            Self::Generic => ADDRESSABLE_BYTES - TLV_BASE_ADDRESS,
        }
    }

    /// First byte address past user memory.
    pub fn user_memory_end(&self) -> usize {
        TLV_BASE_ADDRESS + self.user_memory_bytes()
    }

    /// Match the capability container data-area size byte (CC byte 2).
    pub fn from_cc_size(size: u8) -> Self {
        match size {
            0x12 => Self::Ntag213,
            0x3E => Self::Ntag215,
            0x6D => Self::Ntag216,
            _ => Self::Generic,
        }
    }
}
