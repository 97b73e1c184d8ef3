//! Decode the NDEF message of a tag from a page dump.
//!
//! The dump is hex text, one or more pages per line, starting at page 0
//! (`04 8e 2b 2f`, `04:8E:2B:2F` and `048e2b2f` are all accepted).
//!
//! Usage:
//!   cargo run -p libntag --example read_dump -- tag.txt
//!   RUST_LOG=libntag=debug cargo run -p libntag --example read_dump -- tag.txt

use std::env;
use std::fs;

use anyhow::{Context, bail};
use libntag::prelude::*;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let Some(path) = env::args().nth(1) else {
        bail!("usage: read_dump <dump-file>");
    };
    let text = fs::read_to_string(&path).with_context(|| format!("reading {}", path))?;
    let image = parse_hex(&text).map_err(anyhow::Error::msg)?;

    let mut mem = MemoryTag::new(image);
    let model = match mem.read_page(3) {
        Ok(cc) => TagModel::from_cc_size(cc.as_bytes()[2]),
        Err(_) => TagModel::Generic,
    };
    println!("{} pages, model {:?}", mem.page_count(), model);

    let mut tag = TagBuilder::new().model(model).build_with_reader(mem)?;
    for tlv in tag.scan_tlvs()? {
        println!(
            "TLV {} at {}: {} byte(s)",
            tlv.tlv_type(),
            tlv.value_start_address,
            tlv.value_length
        );
    }

    let mut buffer = Vec::new();
    let records = tag.read_ndef_message(&mut buffer)?;
    println!("{} record(s)", records.len());
    for (i, record) in records.iter().enumerate() {
        println!("#{} {}", i, record);
        if let Some(text) = record.text() {
            println!("   text: {}", text);
        } else if let Some(uri) = record.uri() {
            println!("   uri:  {}", uri);
        } else {
            println!("   data: {}", bytes_to_hex_spaced(record.payload));
        }
    }
    Ok(())
}
