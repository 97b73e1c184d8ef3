// libntag/src/transport/traits.rs

use crate::error::PageFault;
use crate::types::Page;

/// Page reader abstracts single-page tag memory access away from the
/// range/TLV/NDEF logic.
pub trait PageReader {
    /// Read exactly one 4-byte page at `page`.
    fn read_page(&mut self, page: u8) -> Result<Page, PageFault>;

    /// Called once before each tag-level operation. Readers that keep page
    /// data between calls must drop it here; the tag in the field may have
    /// changed since the last operation.
    fn begin(&mut self) {}
}

impl<R: PageReader + ?Sized> PageReader for &mut R {
    fn read_page(&mut self, page: u8) -> Result<Page, PageFault> {
        (**self).read_page(page)
    }

    fn begin(&mut self) {
        (**self).begin()
    }
}

impl<R: PageReader + ?Sized> PageReader for Box<R> {
    fn read_page(&mut self, page: u8) -> Result<Page, PageFault> {
        (**self).read_page(page)
    }

    fn begin(&mut self) {
        (**self).begin()
    }
}

/// Transceiver abstracts the PCD/PICC exchange. Responses are returned
/// with their CRC_A trailer intact.
pub trait Transceiver {
    /// Send a raw frame to the PICC and return its raw response, waiting at
    /// most `timeout_ms` milliseconds.
    fn transceive(&mut self, frame: &[u8], timeout_ms: u64) -> Result<Vec<u8>, PageFault>;
}

impl<T: Transceiver + ?Sized> Transceiver for Box<T> {
    fn transceive(&mut self, frame: &[u8], timeout_ms: u64) -> Result<Vec<u8>, PageFault> {
        (**self).transceive(frame, timeout_ms)
    }
}
