#[path = "../common/mod.rs"]
mod common;

use libntag::prelude::*;
use libntag::test_support::{ndef_tag_image, tag_with_user_data, text_record_bytes};

#[test]
fn fixture_dump_reads_hello() -> anyhow::Result<()> {
    common::init_logger();
    let mut tag = common::fixtures::ntag213_hello();
    let mut buffer = Vec::new();
    let records = read_ndef_message(&mut tag, &mut buffer)?;

    assert_eq!(records.len(), 1);
    let record = &records[0];
    assert!(record.is_text());
    assert_eq!(record.language_code_str().as_deref(), Some("en"));
    assert_eq!(record.text().as_deref(), Some("Hello"));
    drop(records);
    assert_eq!(buffer, common::fixtures::HELLO_MESSAGE.to_vec());
    Ok(())
}

#[test]
fn two_record_message_in_order() -> anyhow::Result<()> {
    let mut tag = ndef_tag_image(&common::fixtures::uri_then_text_message());
    let mut buffer = Vec::new();
    let records = read_ndef_message(&mut tag, &mut buffer)?;

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].uri().as_deref(), Some("https://www.example.com"));
    assert_eq!(records[1].text().as_deref(), Some("hi"));
    assert_eq!(records[1].language_code, Some(&b"de"[..]));
    Ok(())
}

#[test]
fn extended_length_tlv_message() -> anyhow::Result<()> {
    let text = "a".repeat(300);
    let header = NdefHeader {
        message_begin: true,
        message_end: true,
        chunk_flag: false,
        short_record: false,
        id_length_present: false,
        type_name_format: TypeNameFormat::WellKnown,
    };
    let message = libntag::test_support::record_bytes(
        header,
        b"T",
        None,
        &libntag::test_support::text_payload("en", &text),
    );
    let mut tag = Tag::new(ndef_tag_image(&message));
    assert_eq!(tag.locate_ndef_message()?.value_start_address, 20);

    let mut buffer = Vec::new();
    let records = tag.read_ndef_message(&mut buffer)?;
    assert_eq!(records[0].payload_length, 300);
    assert_eq!(records[0].text().map(|t| t.len()), Some(300));
    Ok(())
}

#[test]
fn buffer_is_reused_between_reads() -> anyhow::Result<()> {
    let mut buffer = Vec::with_capacity(64);

    let mut first = ndef_tag_image(&text_record_bytes("en", "first", true, true));
    let count = read_ndef_message(&mut first, &mut buffer)?.len();
    assert_eq!(count, 1);

    let mut second = ndef_tag_image(&text_record_bytes("fr", "deux", true, true));
    let records = read_ndef_message(&mut second, &mut buffer)?;
    assert_eq!(records[0].text().as_deref(), Some("deux"));
    Ok(())
}

#[test]
fn tlv_length_beyond_ntag213_memory_is_malformed() {
    // TLV claims 200 bytes but an NTAG213 ends at byte 160
    let mut user = vec![0x03, 0xC8, 0xD1];
    user.resize(220, 0);
    let mut tag = TagBuilder::new()
        .model(TagModel::Ntag213)
        .build_with_reader(tag_with_user_data(&user))
        .unwrap();
    let mut buffer = Vec::new();
    assert!(matches!(
        tag.read_ndef_message(&mut buffer),
        Err(Error::MalformedMessage { offset: 18, .. })
    ));
}

#[test]
fn truncated_message_is_malformed() {
    // payload length says 9 bytes, TLV value ends after 5
    let mut tag = ndef_tag_image(&[0xD1, 0x01, 0x09, b'T', 0x02]);
    let mut buffer = Vec::new();
    assert!(matches!(
        read_ndef_message(&mut tag, &mut buffer),
        Err(Error::MalformedMessage { .. })
    ));
}

#[test]
fn page_fault_in_value_names_the_page() {
    let message = text_record_bytes("en", "a longer text spanning pages", true, true);
    let mut tag = ndef_tag_image(&message).fail_on(10, PageFault::Transport("rf field lost".into()));
    let mut buffer = Vec::new();
    match read_ndef_message(&mut tag, &mut buffer) {
        Err(Error::PageReadFailed {
            page: 10,
            fault: PageFault::Transport(msg),
        }) => assert_eq!(msg, "rf field lost"),
        other => panic!("expected page 10 failure, got: {:?}", other),
    }
}

#[test]
fn blank_tag_is_not_found() {
    // all-zero user memory is NULL padding up to the scan limit
    let mut tag = tag_with_user_data(&[]);
    let mut buffer = Vec::new();
    assert!(matches!(
        read_ndef_message(&mut tag, &mut buffer),
        Err(Error::NotFound)
    ));
}
