// libntag/src/tag/range.rs

use log::trace;

use crate::constants::{ADDRESSABLE_BYTES, PAGE_SIZE};
use crate::transport::PageReader;
use crate::{Error, Result};

/// Allocate a zeroed buffer of `length` bytes, reporting allocator failure
/// as `Error::AllocationFailed` instead of aborting.
pub fn alloc_buffer(length: usize) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    buf.try_reserve_exact(length)
        .map_err(|_| Error::AllocationFailed { requested: length })?;
    buf.resize(length, 0);
    Ok(buf)
}

/// Read `length` bytes starting at byte `address`, assembling them from
/// as many page reads as the range touches.
pub fn read_range<R: PageReader + ?Sized>(
    reader: &mut R,
    address: usize,
    length: usize,
) -> Result<Vec<u8>> {
    if length == 0 {
        return Err(Error::InvalidArgument(
            "range length must be greater than zero".into(),
        ));
    }
    let mut out = alloc_buffer(length)?;
    read_range_into(reader, address, &mut out)?;
    Ok(out)
}

/// Fill `out` with the bytes at `[address, address + out.len())`.
///
/// The first page contributes from `address % 4` onwards, middle pages
/// contribute whole pages and the last page only the remaining tail. The
/// first failing page read aborts the call; `out` is then left partially
/// written.
pub fn read_range_into<R: PageReader + ?Sized>(
    reader: &mut R,
    address: usize,
    out: &mut [u8],
) -> Result<()> {
    let length = out.len();
    if length == 0 {
        return Err(Error::InvalidArgument(
            "range length must be greater than zero".into(),
        ));
    }
    match address.checked_add(length) {
        Some(end) if end <= ADDRESSABLE_BYTES => {}
        _ => {
            return Err(Error::InvalidArgument(format!(
                "range {}+{} exceeds {} addressable bytes",
                address, length, ADDRESSABLE_BYTES
            )));
        }
    }

    let mut page_index = address / PAGE_SIZE;
    let mut offset = address % PAGE_SIZE;
    let mut written = 0usize;

    while written < length {
        let page = u8::try_from(page_index).map_err(|_| {
            Error::InvalidArgument(format!("page {} is not addressable", page_index))
        })?;
        let data = reader
            .read_page(page)
            .map_err(|fault| Error::PageReadFailed { page, fault })?;

        let count = (PAGE_SIZE - offset).min(length - written);
        out[written..written + count].copy_from_slice(&data.as_bytes()[offset..offset + count]);
        trace!(
            "range: page {} offset {} -> {} byte(s) at {}",
            page, offset, count, written
        );

        written += count;
        offset = 0;
        page_index += 1;
    }

    Ok(())
}
