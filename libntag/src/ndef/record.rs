// libntag/src/ndef/record.rs

use std::borrow::Cow;
use std::fmt;

use crate::constants::{RTD_TEXT, RTD_URI};
use crate::ndef::header::{NdefHeader, TypeNameFormat};

/// URI identifier codes (NFC Forum URI RTD), indexed by the first payload byte
const URI_PREFIXES: [&str; 36] = [
    "",
    "http://www.",
    "https://www.",
    "http://",
    "https://",
    "tel:",
    "mailto:",
    "ftp://anonymous:anonymous@",
    "ftp://ftp.",
    "ftps://",
    "sftp://",
    "smb://",
    "nfs://",
    "ftp://",
    "dav://",
    "news:",
    "telnet://",
    "imap:",
    "rtsp://",
    "urn:",
    "pop:",
    "sip:",
    "sips:",
    "tftp:",
    "btspp://",
    "btl2cap://",
    "btgoep://",
    "tcpobex://",
    "irdaobex://",
    "file://",
    "urn:epc:id:",
    "urn:epc:tag:",
    "urn:epc:pat:",
    "urn:epc:raw:",
    "urn:epc:",
    "urn:nfc:",
];

/// Character encoding of a well-known text record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TextEncoding {
    Utf8,
    Utf16,
}

/// One decoded NDEF record. All byte fields borrow the message buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NdefRecord<'a> {
    pub header: NdefHeader,
    /// Length of `payload`. For text records this excludes the language length byte
    /// and language code.
    pub payload_length: u32,
    pub record_type: &'a [u8],
    pub id: Option<&'a [u8]>,
    /// Only set for well-known text records
    pub language_code: Option<&'a [u8]>,
    pub payload: &'a [u8],
}

/// Whether a TNF/type pair names the well-known text record type.
pub(crate) fn is_text_type(tnf: TypeNameFormat, record_type: &[u8]) -> bool {
    tnf == TypeNameFormat::WellKnown && record_type == RTD_TEXT
}

impl<'a> NdefRecord<'a> {
    pub fn type_name_format(&self) -> TypeNameFormat {
        self.header.type_name_format
    }

    pub fn is_text(&self) -> bool {
        is_text_type(self.type_name_format(), self.record_type)
    }

    pub fn is_uri(&self) -> bool {
        self.type_name_format() == TypeNameFormat::WellKnown && self.record_type == RTD_URI
    }

    /// Record type as printable text
    pub fn record_type_str(&self) -> Cow<'a, str> {
        String::from_utf8_lossy(self.record_type)
    }

    pub fn language_code_str(&self) -> Option<Cow<'a, str>> {
        self.language_code.map(String::from_utf8_lossy)
    }

    /// Text of a well-known text record as UTF-8. Invalid sequences are replaced.
    pub fn text(&self) -> Option<Cow<'a, str>> {
        self.text_as(TextEncoding::Utf8)
    }

    /// Text of a well-known text record in a caller-chosen encoding.
    /// UTF-16 honours a leading byte order mark and defaults to big endian.
    pub fn text_as(&self, encoding: TextEncoding) -> Option<Cow<'a, str>> {
        if !self.is_text() {
            return None;
        }
        match encoding {
            TextEncoding::Utf8 => Some(String::from_utf8_lossy(self.payload)),
            TextEncoding::Utf16 => Some(Cow::Owned(decode_utf16(self.payload))),
        }
    }

    /// Full URI of a well-known URI record, with the identifier code expanded.
    pub fn uri(&self) -> Option<String> {
        if !self.is_uri() {
            return None;
        }
        let (&code, rest) = self.payload.split_first()?;
        // RFU codes carry no prefix
        let prefix = URI_PREFIXES.get(code as usize).copied().unwrap_or("");
        let mut uri = String::with_capacity(prefix.len() + rest.len());
        uri.push_str(prefix);
        uri.push_str(&String::from_utf8_lossy(rest));
        Some(uri)
    }
}

impl fmt::Display for NdefRecord<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}{}] tnf={} type={:?} payload={}B",
            if self.header.message_begin { "MB" } else { "--" },
            if self.header.message_end { "ME" } else { "--" },
            self.type_name_format(),
            self.record_type_str(),
            self.payload_length
        )?;
        if let Some(id) = self.id {
            write!(f, " id={}", crate::utils::bytes_to_hex(id))?;
        }
        if let Some(lang) = self.language_code_str() {
            write!(f, " lang={}", lang)?;
        }
        Ok(())
    }
}

fn decode_utf16(bytes: &[u8]) -> String {
    let (little_endian, body) = match bytes {
        [0xFF, 0xFE, rest @ ..] => (true, rest),
        [0xFE, 0xFF, rest @ ..] => (false, rest),
        _ => (false, bytes),
    };
    let units = body.chunks_exact(2).map(|pair| {
        if little_endian {
            u16::from_le_bytes([pair[0], pair[1]])
        } else {
            u16::from_be_bytes([pair[0], pair[1]])
        }
    });
    char::decode_utf16(units)
        .map(|c| c.unwrap_or(char::REPLACEMENT_CHARACTER))
        .collect()
}
