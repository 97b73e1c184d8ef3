// libntag/src/transport/mock.rs

use crate::constants::PAGE_SIZE;
use crate::error::PageFault;
use crate::transport::traits::{PageReader, Transceiver};
use crate::types::Page;

/// Mock transceiver for unit tests. It records sent frames and returns queued responses.
#[derive(Debug, Default)]
pub struct MockTransceiver {
    pub sent: Vec<Vec<u8>>,
    pub responses: Vec<Vec<u8>>,
    /// Testing hook: number of transceive calls that should fail with Timeout
    pub failures: usize,
    /// Timeouts passed with each call, in order
    pub timeouts: Vec<u64>,
}

impl MockTransceiver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set how many subsequent transceive calls should fail (for tests).
    pub fn set_failures(&mut self, n: usize) {
        self.failures = n;
    }

    pub fn push_response(&mut self, resp: Vec<u8>) {
        self.responses.push(resp);
    }

    pub fn pop_sent(&mut self) -> Option<Vec<u8>> {
        self.sent.pop()
    }
}

impl Transceiver for MockTransceiver {
    fn transceive(&mut self, frame: &[u8], timeout_ms: u64) -> Result<Vec<u8>, PageFault> {
        self.sent.push(frame.to_vec());
        self.timeouts.push(timeout_ms);
        if self.failures > 0 {
            self.failures -= 1;
            return Err(PageFault::Timeout);
        }
        if self.responses.is_empty() {
            Err(PageFault::Timeout)
        } else {
            Ok(self.responses.remove(0))
        }
    }
}

/// In-memory tag image served page by page.
///
/// Pages past the end of the image fail with `OutOfRange`. A single page
/// can be configured to fail with an arbitrary fault, and every requested
/// page index is logged so tests can assert on access patterns.
#[derive(Debug, Clone, Default)]
pub struct MemoryTag {
    memory: Vec<u8>,
    fault: Option<(u8, PageFault)>,
    reads: Vec<u8>,
}

impl MemoryTag {
    /// Wrap a flat memory image. The image is zero-padded to a whole number of pages.
    pub fn new(mut memory: Vec<u8>) -> Self {
        let rem = memory.len() % PAGE_SIZE;
        if rem != 0 {
            memory.resize(memory.len() + PAGE_SIZE - rem, 0);
        }
        Self {
            memory,
            fault: None,
            reads: Vec::new(),
        }
    }

    /// Build an image with `user_data` placed at page 4, after a zeroed
    /// header area (UID, lock bytes, capability container).
    pub fn with_user_data(user_data: &[u8]) -> Self {
        let mut memory = vec![0u8; crate::constants::TLV_BASE_ADDRESS];
        memory.extend_from_slice(user_data);
        Self::new(memory)
    }

    /// Make every read of `page` fail with `fault`.
    pub fn fail_on(mut self, page: u8, fault: PageFault) -> Self {
        self.fault = Some((page, fault));
        self
    }

    pub fn memory(&self) -> &[u8] {
        &self.memory
    }

    /// Page indices requested so far, in order.
    pub fn reads(&self) -> &[u8] {
        &self.reads
    }

    pub fn page_count(&self) -> usize {
        self.memory.len() / PAGE_SIZE
    }
}

impl PageReader for MemoryTag {
    fn read_page(&mut self, page: u8) -> Result<Page, PageFault> {
        self.reads.push(page);
        if let Some((bad, fault)) = &self.fault {
            if *bad == page {
                return Err(fault.clone());
            }
        }
        let start = page as usize * PAGE_SIZE;
        let bytes = self
            .memory
            .get(start..start + PAGE_SIZE)
            .ok_or(PageFault::OutOfRange { page })?;
        let mut arr = [0u8; PAGE_SIZE];
        arr.copy_from_slice(bytes);
        Ok(Page::from_bytes(arr))
    }
}
