// libntag/src/tag/reader.rs

use log::debug;

use crate::constants::{NTAG_READ_RESPONSE_LEN, PAGE_SIZE};
use crate::error::PageFault;
use crate::protocol::{Command, decode_read};
use crate::transport::{PageReader, Transceiver};
use crate::types::Page;
use crate::utils::DEFAULT_TRANSCEIVE_TIMEOUT_MS;

const PAGES_PER_READ: usize = NTAG_READ_RESPONSE_LEN / PAGE_SIZE;

/// Page reader speaking the NTAG READ command over a `Transceiver`.
///
/// One READ returns four consecutive pages; the last response is kept so
/// that sequential page reads cost one transaction per four pages. The
/// kept response lives until the next `begin`, so it never outlasts one
/// tag operation.
pub struct NtagReader<T> {
    transceiver: T,
    timeout_ms: u64,
    cache: Option<(u8, [u8; NTAG_READ_RESPONSE_LEN])>,
}

impl<T: Transceiver> NtagReader<T> {
    pub fn new(transceiver: T) -> Self {
        Self::with_timeout(transceiver, DEFAULT_TRANSCEIVE_TIMEOUT_MS)
    }

    pub fn with_timeout(transceiver: T, timeout_ms: u64) -> Self {
        Self {
            transceiver,
            timeout_ms,
            cache: None,
        }
    }

    pub fn timeout_ms(&self) -> u64 {
        self.timeout_ms
    }

    /// Drop the cached READ response, e.g. after the tag left the field.
    pub fn clear_cache(&mut self) {
        self.cache = None;
    }

    pub fn transceiver(&self) -> &T {
        &self.transceiver
    }

    pub fn into_inner(self) -> T {
        self.transceiver
    }

    fn cached(&self, page: u8) -> Option<Page> {
        let (first, data) = self.cache.as_ref()?;
        let index = (page as usize).checked_sub(*first as usize)?;
        if index >= PAGES_PER_READ {
            return None;
        }
        let start = index * PAGE_SIZE;
        let mut arr = [0u8; PAGE_SIZE];
        arr.copy_from_slice(&data[start..start + PAGE_SIZE]);
        Some(Page::from_bytes(arr))
    }
}

impl<T: Transceiver> PageReader for NtagReader<T> {
    fn read_page(&mut self, page: u8) -> Result<Page, PageFault> {
        if let Some(hit) = self.cached(page) {
            return Ok(hit);
        }

        let frame = Command::Read { page }.encode_frame();
        let raw = self.transceiver.transceive(&frame, self.timeout_ms)?;
        let data = decode_read(&raw)?;
        debug!(
            "ntag: READ page {} -> {}",
            page,
            crate::utils::bytes_to_hex_spaced(&data)
        );

        self.cache = Some((page, data));
        self.cached(page).ok_or(PageFault::UnexpectedLength {
            expected: NTAG_READ_RESPONSE_LEN,
            actual: data.len(),
        })
    }

    fn begin(&mut self) {
        self.clear_cache();
    }
}
