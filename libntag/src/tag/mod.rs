// libntag/src/tag/mod.rs

use log::debug;

use crate::ndef::{self, NdefRecord};
use crate::transport::{PageReader, Transceiver};
use crate::types::TlvInfo;
use crate::{Error, Result};

pub mod builder;
pub mod range;
pub mod reader;
pub mod tlv;

pub use builder::{TagBuilder, TagConfig};
pub use reader::NtagReader;

/// A page-addressed tag reached through a `PageReader`.
pub struct Tag<R> {
    reader: R,
    config: TagConfig,
}

impl<R: PageReader> Tag<R> {
    pub fn new(reader: R) -> Self {
        Self::with_config(reader, TagConfig::default())
    }

    pub fn with_config(reader: R, config: TagConfig) -> Self {
        Self { reader, config }
    }

    pub fn config(&self) -> &TagConfig {
        &self.config
    }

    pub fn reader(&self) -> &R {
        &self.reader
    }

    pub fn reader_mut(&mut self) -> &mut R {
        &mut self.reader
    }

    pub fn into_inner(self) -> R {
        self.reader
    }

    /// Read `length` bytes of tag memory starting at byte `address`.
    pub fn read_range(&mut self, address: usize, length: usize) -> Result<Vec<u8>> {
        self.reader.begin();
        range::read_range(&mut self.reader, address, length)
    }

    pub fn read_range_into(&mut self, address: usize, out: &mut [u8]) -> Result<()> {
        self.reader.begin();
        range::read_range_into(&mut self.reader, address, out)
    }

    /// Find the NDEF message TLV in user memory.
    pub fn locate_ndef_message(&mut self) -> Result<TlvInfo> {
        self.reader.begin();
        tlv::locate_ndef_message(
            &mut self.reader,
            self.config.tlv_base_address,
            self.config.scan_limit(),
        )
    }

    /// All TLV blocks in user memory, in chain order.
    pub fn scan_tlvs(&mut self) -> Result<Vec<TlvInfo>> {
        self.reader.begin();
        tlv::scan_tlvs(
            &mut self.reader,
            self.config.tlv_base_address,
            self.config.scan_limit(),
        )
    }

    /// Raw bytes of the NDEF message TLV value.
    pub fn read_ndef_bytes(&mut self) -> Result<Vec<u8>> {
        let mut buffer = Vec::new();
        fetch_ndef_message(&mut self.reader, &self.config, &mut buffer)?;
        Ok(buffer)
    }

    /// Locate, fetch and decode the NDEF message. The records borrow
    /// `buffer`, which is cleared and refilled with the raw message.
    pub fn read_ndef_message<'buf>(
        &mut self,
        buffer: &'buf mut Vec<u8>,
    ) -> Result<Vec<NdefRecord<'buf>>> {
        fetch_ndef_message(&mut self.reader, &self.config, buffer)?;
        let buffer: &'buf Vec<u8> = buffer;
        ndef::decode(buffer)
    }
}

impl<T: Transceiver> Tag<NtagReader<T>> {
    /// Tag read with NTAG READ commands over `transceiver`, using the
    /// configured timeout.
    pub fn over_transceiver(transceiver: T, config: TagConfig) -> Self {
        Self::with_config(
            NtagReader::with_timeout(transceiver, config.timeout_ms),
            config,
        )
    }
}

/// Locate the NDEF message TLV and copy its value into `buffer`.
/// Starts a fresh reader operation, so no page data from earlier calls is reused.
fn fetch_ndef_message<R: PageReader + ?Sized>(
    reader: &mut R,
    config: &TagConfig,
    buffer: &mut Vec<u8>,
) -> Result<()> {
    reader.begin();
    let info = tlv::locate_ndef_message(reader, config.tlv_base_address, config.scan_limit())?;
    buffer.clear();

    if info.value_length == 0 {
        debug!("tag: NDEF message TLV is empty");
        return Ok(());
    }
    if info.value_end_address() > config.scan_limit() {
        return Err(Error::MalformedMessage {
            offset: info.value_start_address,
            reason: "NDEF message TLV extends past user memory",
        });
    }

    buffer
        .try_reserve_exact(info.value_length)
        .map_err(|_| Error::AllocationFailed {
            requested: info.value_length,
        })?;
    buffer.resize(info.value_length, 0);
    range::read_range_into(reader, info.value_start_address, buffer)?;
    debug!(
        "tag: fetched {} byte NDEF message from {}",
        info.value_length, info.value_start_address
    );
    Ok(())
}

/// Read and decode the NDEF message of a tag with the default layout
/// (TLVs from byte 16, scan up to the end of addressable memory).
///
/// The caller owns `buffer`; the returned records borrow it and cannot
/// outlive it.
pub fn read_ndef_message<'buf, R: PageReader + ?Sized>(
    reader: &mut R,
    buffer: &'buf mut Vec<u8>,
) -> Result<Vec<NdefRecord<'buf>>> {
    fetch_ndef_message(reader, &TagConfig::default(), buffer)?;
    let buffer: &'buf Vec<u8> = buffer;
    ndef::decode(buffer)
}
