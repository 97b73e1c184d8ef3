use libntag::ndef::{NdefHeader, TextEncoding, TypeNameFormat, decode};
use libntag::test_support::{record_bytes, short_header, uri_record_bytes};

#[test]
fn uri_prefix_codes() {
    let cases = [
        (0x00u8, "urn:x", "urn:x"),
        (0x03, "example.com", "http://example.com"),
        (0x04, "example.com", "https://example.com"),
        (0x05, "+123", "tel:+123"),
        (0x06, "a@b.c", "mailto:a@b.c"),
        (0x23, "nfc:ext", "urn:nfc:nfc:ext"),
        (0x24, "raw", "raw"),
    ];
    for (code, rest, expected) in cases {
        let bytes = uri_record_bytes(code, rest, true, true);
        let records = decode(&bytes).unwrap();
        assert_eq!(records[0].uri().as_deref(), Some(expected), "code {:#04x}", code);
    }
}

#[test]
fn utf16_text_record() {
    // language length 2, then BOM and "hi" big endian
    let payload = [0x02, b'e', b'n', 0xFE, 0xFF, 0x00, b'h', 0x00, b'i'];
    let bytes = record_bytes(
        short_header(TypeNameFormat::WellKnown, true, true),
        b"T",
        None,
        &payload,
    );
    let records = decode(&bytes).unwrap();
    assert_eq!(records[0].language_code, Some(&b"en"[..]));
    assert_eq!(records[0].payload_length, 6);
    assert_eq!(records[0].text_as(TextEncoding::Utf16).as_deref(), Some("hi"));
}

#[test]
fn language_length_byte_with_high_bits_is_a_plain_length() {
    // 0x45 = 69 language bytes; only 2 follow
    let bytes = record_bytes(
        short_header(TypeNameFormat::WellKnown, true, true),
        b"T",
        None,
        &[0x45, b'e', b'n', b'h', b'i'],
    );
    assert!(matches!(
        decode(&bytes),
        Err(libntag::Error::MalformedMessage { offset: 5, .. })
    ));
}

#[test]
fn header_byte_round_trips() {
    let header = NdefHeader::from_byte(0xD1);
    assert!(header.message_begin && header.message_end && header.short_record);
    assert!(!header.chunk_flag && !header.id_length_present);
    assert_eq!(header.type_name_format, TypeNameFormat::WellKnown);
    assert_eq!(u8::from(header), 0xD1);
}

#[test]
fn display_summarises_record() {
    let bytes = uri_record_bytes(0x04, "example.com", true, true);
    let records = decode(&bytes).unwrap();
    let s = records[0].to_string();
    assert!(s.contains("MBME"));
    assert!(s.contains("well-known"));
}
