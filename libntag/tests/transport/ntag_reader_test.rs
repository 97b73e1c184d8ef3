#[path = "../common/mod.rs"]
mod common;

use libntag::protocol::Frame;
use libntag::tag::NtagReader;
use libntag::transport::{MockTransceiver, PageReader};
use libntag::{Error, PageFault, read_ndef_message};

/// Serve READ commands from `image` the way a tag does: 16 bytes from the
/// requested page, wrapping at the end of memory.
fn queue_reads(mock: &mut MockTransceiver, image: &[u8], pages: &[u8]) {
    for &page in pages {
        let data: Vec<u8> = (0..16)
            .map(|i| image[(page as usize * 4 + i) % image.len()])
            .collect();
        mock.push_response(Frame::encode(&data));
    }
}

#[test]
fn reads_ndef_message_over_read_commands() -> anyhow::Result<()> {
    common::init_logger();
    let image = common::fixtures::dump_bytes(common::fixtures::NTAG213_HELLO_DUMP);

    let mut mock = MockTransceiver::new();
    // TLV walk and value fetch touch pages 4..=8: two READs
    queue_reads(&mut mock, &image, &[4, 8]);
    let mut reader = NtagReader::new(mock);

    let mut buffer = Vec::new();
    let records = read_ndef_message(&mut reader, &mut buffer)?;
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].text().as_deref(), Some("Hello"));
    drop(records);

    let mock = reader.into_inner();
    let pages: Vec<u8> = mock.sent.iter().map(|frame| frame[1]).collect();
    assert_eq!(pages, vec![4, 8]);
    assert!(mock.timeouts.iter().all(|&t| t == 1000));
    Ok(())
}

#[test]
fn tag_swapped_between_reads_is_read_afresh() -> anyhow::Result<()> {
    common::init_logger();
    let image = common::fixtures::dump_bytes(common::fixtures::NTAG213_HELLO_DUMP);
    let mut blank = image.clone();
    blank[16] = 0xFE;

    let mut mock = MockTransceiver::new();
    queue_reads(&mut mock, &image, &[4, 8]);
    queue_reads(&mut mock, &blank, &[4]);
    let mut reader = NtagReader::new(mock);

    let mut buffer = Vec::new();
    assert_eq!(read_ndef_message(&mut reader, &mut buffer)?.len(), 1);
    assert!(matches!(
        read_ndef_message(&mut reader, &mut buffer),
        Err(Error::NotFound)
    ));

    let mut mock = reader.into_inner();
    assert_eq!(mock.pop_sent(), Some(vec![0x30, 0x04, 0x26, 0xEE]));
    assert_eq!(mock.sent.len(), 2);
    Ok(())
}

#[test]
fn corrupted_read_response_surfaces_as_page_read_failure() {
    common::init_logger();
    let mut mock = MockTransceiver::new();
    let mut frame = Frame::encode(&[0x03; 16]);
    frame[17] ^= 0xFF;
    mock.push_response(frame);
    let mut reader = NtagReader::new(mock);

    let mut buffer = Vec::new();
    match read_ndef_message(&mut reader, &mut buffer) {
        Err(Error::PageReadFailed {
            page: 4,
            fault: PageFault::ChecksumMismatch { .. },
        }) => {}
        other => panic!("expected checksum failure on page 4, got: {:?}", other),
    }
}

#[test]
fn timeout_is_reported_per_page() {
    let mut reader = NtagReader::with_timeout(MockTransceiver::new(), 50);
    assert_eq!(reader.read_page(9), Err(PageFault::Timeout));
    assert_eq!(reader.transceiver().timeouts, vec![50]);
}

#[test]
fn clear_cache_forces_a_new_read() {
    let image: Vec<u8> = (0u8..64).collect();
    let mut mock = MockTransceiver::new();
    queue_reads(&mut mock, &image, &[1, 1]);
    let mut reader = NtagReader::new(mock);

    assert_eq!(reader.read_page(1).unwrap().as_bytes(), &[4, 5, 6, 7]);
    reader.clear_cache();
    assert_eq!(reader.read_page(1).unwrap().as_bytes(), &[4, 5, 6, 7]);
    assert_eq!(reader.transceiver().sent.len(), 2);
}
