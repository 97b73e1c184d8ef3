#[path = "../common/mod.rs"]
mod common;

use libntag::prelude::*;
use libntag::tag::tlv::{TlvStep, locate_ndef_message, read_tlv_at, scan_tlvs};
use libntag::test_support::{ndef_tlv, tag_with_user_data};

#[test]
fn fixture_chain() {
    let mut tag = common::fixtures::ntag213_hello();
    let blocks = scan_tlvs(&mut tag, 16, TagModel::Ntag213.user_memory_end()).unwrap();
    let types: Vec<TlvType> = blocks.iter().map(TlvInfo::tlv_type).collect();
    assert_eq!(types, vec![TlvType::LockControl, TlvType::NdefMessage]);
    assert_eq!(blocks[1], TlvInfo::new(0x03, 12, 23));
}

#[test]
fn first_ndef_tlv_wins() {
    let mut user = ndef_tlv(&[0xD0, 0x00, 0x00]);
    user.pop();
    user.extend(ndef_tlv(&[0xD0, 0x00, 0x00, 0x00]));
    let mut tag = tag_with_user_data(&user);

    let info = locate_ndef_message(&mut tag, 16, 1024).unwrap();
    assert_eq!(info.value_length, 3);
    assert_eq!(scan_tlvs(&mut tag, 16, 1024).unwrap().len(), 2);
}

#[test]
fn chain_without_ndef_or_terminator_is_not_found() {
    // Proprietary TLVs fill user memory without a terminator
    let mut user = Vec::new();
    while user.len() < 144 {
        user.extend_from_slice(&[0xFD, 0x02, 0xAA, 0xBB]);
    }
    let mut tag = tag_with_user_data(&user);
    assert!(matches!(
        locate_ndef_message(&mut tag, 16, TagModel::Ntag213.user_memory_end()),
        Err(Error::NotFound)
    ));
}

#[test]
fn step_reports_next_address() {
    let mut tag = tag_with_user_data(&[0x00, 0x01, 0x03, 0xA0, 0x10, 0x44, 0xFE]);
    assert_eq!(read_tlv_at(&mut tag, 16).unwrap(), (TlvStep::Null, 17));
    assert_eq!(
        read_tlv_at(&mut tag, 17).unwrap(),
        (TlvStep::Block(TlvInfo::new(0x01, 3, 19)), 22)
    );
    assert_eq!(read_tlv_at(&mut tag, 22).unwrap(), (TlvStep::Terminator, 23));
}

#[test]
fn tlv_header_at_end_of_memory_is_not_found() {
    let mut image = vec![0u8; 1024];
    image[16] = 0xFD;
    image[17] = 0xFF;
    image[18] = 0x03;
    image[19] = 0xEB; // 1003 bytes: next TLV at 1023
    image[1023] = 0x03;
    let mut tag = MemoryTag::new(image);
    assert!(matches!(
        locate_ndef_message(&mut tag, 16, 1024),
        Err(Error::NotFound)
    ));
}
