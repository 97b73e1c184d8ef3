//! Test support helpers intended for use by unit and integration tests.
//!
//! These helpers build NDEF messages and tag images so tests across the
//! crate and the tests/ directory encode fixtures the same way.
#![allow(dead_code)]

use crate::constants::{
    ADDRESSABLE_BYTES, TLV_BASE_ADDRESS, TLV_EXTENDED_LENGTH, TLV_NDEF_MESSAGE, TLV_TERMINATOR,
};
use crate::ndef::{NdefHeader, TypeNameFormat};
use crate::transport::MemoryTag;

/// Encode one record in the layout the decoder reads:
/// header, type length, payload length (1 byte when `short_record`, else
/// 4 bytes big-endian), type, optional id length and id, payload.
#[doc(hidden)]
pub fn record_bytes(
    header: NdefHeader,
    record_type: &[u8],
    id: Option<&[u8]>,
    payload: &[u8],
) -> Vec<u8> {
    let header = NdefHeader {
        id_length_present: id.is_some(),
        ..header
    };
    let mut out = vec![header.to_byte(), record_type.len() as u8];
    if header.short_record {
        out.push(payload.len() as u8);
    } else {
        out.extend_from_slice(&(payload.len() as u32).to_be_bytes());
    }
    out.extend_from_slice(record_type);
    if let Some(id) = id {
        out.push(id.len() as u8);
        out.extend_from_slice(id);
    }
    out.extend_from_slice(payload);
    out
}

/// Header of a short, unchunked record.
#[doc(hidden)]
pub fn short_header(tnf: TypeNameFormat, first: bool, last: bool) -> NdefHeader {
    NdefHeader {
        message_begin: first,
        message_end: last,
        chunk_flag: false,
        short_record: true,
        id_length_present: false,
        type_name_format: tnf,
    }
}

/// Text record payload: language code length, language code, UTF-8 text.
#[doc(hidden)]
pub fn text_payload(lang: &str, text: &str) -> Vec<u8> {
    let mut out = vec![lang.len() as u8];
    out.extend_from_slice(lang.as_bytes());
    out.extend_from_slice(text.as_bytes());
    out
}

/// A complete short well-known text record.
#[doc(hidden)]
pub fn text_record_bytes(lang: &str, text: &str, first: bool, last: bool) -> Vec<u8> {
    record_bytes(
        short_header(TypeNameFormat::WellKnown, first, last),
        b"T",
        None,
        &text_payload(lang, text),
    )
}

/// A complete short well-known URI record with the given prefix code.
#[doc(hidden)]
pub fn uri_record_bytes(prefix: u8, rest: &str, first: bool, last: bool) -> Vec<u8> {
    let mut payload = vec![prefix];
    payload.extend_from_slice(rest.as_bytes());
    record_bytes(
        short_header(TypeNameFormat::WellKnown, first, last),
        b"U",
        None,
        &payload,
    )
}

/// Wrap `message` in an NDEF message TLV followed by a terminator TLV.
/// Lengths of 255 and above use the 3-byte form.
#[doc(hidden)]
pub fn ndef_tlv(message: &[u8]) -> Vec<u8> {
    let mut out = vec![TLV_NDEF_MESSAGE];
    if message.len() < TLV_EXTENDED_LENGTH as usize {
        out.push(message.len() as u8);
    } else {
        out.push(TLV_EXTENDED_LENGTH);
        out.extend_from_slice(&(message.len() as u16).to_be_bytes());
    }
    out.extend_from_slice(message);
    out.push(TLV_TERMINATOR);
    out
}

/// Full 1024-byte tag image with `user_data` at the TLV base address.
#[doc(hidden)]
pub fn tag_with_user_data(user_data: &[u8]) -> MemoryTag {
    let mut memory = vec![0u8; TLV_BASE_ADDRESS];
    memory.extend_from_slice(user_data);
    if memory.len() < ADDRESSABLE_BYTES {
        memory.resize(ADDRESSABLE_BYTES, 0);
    }
    MemoryTag::new(memory)
}

/// Full tag image holding `message` as its only NDEF message TLV.
#[doc(hidden)]
pub fn ndef_tag_image(message: &[u8]) -> MemoryTag {
    tag_with_user_data(&ndef_tlv(message))
}
