// libntag/src/ndef/parser.rs

use crate::{Error, Result};

/// Return a subslice with bounds checking. `None` when `idx + len`
/// overflows or runs past the end of `data`.
pub fn slice_at(data: &[u8], idx: usize, len: usize) -> Option<&[u8]> {
    let end = idx.checked_add(len)?;
    data.get(idx..end)
}

/// Bounds-checked forward cursor over an NDEF message buffer.
///
/// Every read either yields bytes that lie inside the buffer or fails with
/// `Error::MalformedMessage` carrying the offset of the failed read and the
/// field being read. Returned slices borrow the underlying buffer, not the
/// cursor.
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }

    pub fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    /// Take `len` bytes, `what` names the field for error reporting.
    pub fn take(&mut self, len: usize, what: &'static str) -> Result<&'a [u8]> {
        let data: &'a [u8] = self.data;
        let slice = slice_at(data, self.pos, len).ok_or(Error::MalformedMessage {
            offset: self.pos,
            reason: what,
        })?;
        self.pos += len;
        Ok(slice)
    }

    pub fn u8(&mut self, what: &'static str) -> Result<u8> {
        Ok(self.take(1, what)?[0])
    }

    pub fn be_u32(&mut self, what: &'static str) -> Result<u32> {
        let b = self.take(4, what)?;
        Ok(u32::from_be_bytes([b[0], b[1], b[2], b[3]]))
    }
}
