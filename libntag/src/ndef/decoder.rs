// libntag/src/ndef/decoder.rs

use log::{debug, trace, warn};

use crate::ndef::header::NdefHeader;
use crate::ndef::parser::Cursor;
use crate::ndef::record::{NdefRecord, is_text_type};
use crate::{Error, Result};

/// Decode an NDEF message into its records, in message order.
///
/// Decoding stops after the first record flagged Message End, or when the
/// buffer holds no further header byte. Any field that would extend past
/// the buffer fails the whole decode with `Error::MalformedMessage`; no
/// partial sequence is returned. Chunked records are returned one record
/// per chunk.
pub fn decode(buffer: &[u8]) -> Result<Vec<NdefRecord<'_>>> {
    let mut cursor = Cursor::new(buffer);
    let mut records = Vec::new();

    while !cursor.is_empty() {
        let record = decode_record(&mut cursor)?;
        let last = record.header.message_end;
        records.push(record);
        if last {
            break;
        }
    }

    if cursor.remaining() > 0 {
        trace!(
            "ndef: {} trailing bytes after message end ignored",
            cursor.remaining()
        );
    }
    debug!("ndef: decoded {} record(s) from {} bytes", records.len(), buffer.len());
    Ok(records)
}

/// Decode one record at the cursor position.
/// Layout: header(1) type_len(1) payload_len(1|4) type(n) [id_len(1) id(n)] [lang_len(1) lang(n)] payload(n)
///
/// The whole language length byte is the length; no bits are reserved.
pub fn decode_record<'a>(cursor: &mut Cursor<'a>) -> Result<NdefRecord<'a>> {
    let start = cursor.position();
    let header = NdefHeader::from_byte(cursor.u8("record header")?);
    let type_length = cursor.u8("type length")? as usize;

    let mut payload_length = if header.short_record {
        cursor.u8("payload length")? as u32
    } else {
        cursor.be_u32("payload length")?
    };

    let record_type = cursor.take(type_length, "record type")?;

    let id = if header.id_length_present {
        let id_length = cursor.u8("id length")? as usize;
        Some(cursor.take(id_length, "record id")?)
    } else {
        None
    };

    let mut language_code = None;
    if is_text_type(header.type_name_format, record_type) {
        let lang_offset = cursor.position();
        let lang_length = cursor.u8("language code length")?;
        language_code = Some(cursor.take(lang_length as usize, "language code")?);
        payload_length = payload_length
            .checked_sub(lang_length as u32 + 1)
            .ok_or(Error::MalformedMessage {
                offset: lang_offset,
                reason: "text payload shorter than its language code",
            })?;
    }

    let payload = cursor.take(payload_length as usize, "payload")?;

    let record = NdefRecord {
        header,
        payload_length,
        record_type,
        id,
        language_code,
        payload,
    };

    if header.chunk_flag {
        warn!("ndef: chunked record at offset {} is not reassembled", start);
    }
    debug!("ndef: record at offset {}: {}", start, record);
    Ok(record)
}
