// libntag/src/tag/tlv.rs

use log::{debug, trace, warn};

use crate::constants::{
    ADDRESSABLE_BYTES, TLV_EXTENDED_LENGTH, TLV_LOOKAHEAD, TLV_NDEF_MESSAGE, TLV_NULL,
    TLV_TERMINATOR,
};
use crate::tag::range::read_range;
use crate::transport::PageReader;
use crate::types::{TlvInfo, TlvType};
use crate::{Error, Result};

/// Outcome of decoding the TLV that starts at one scan position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TlvStep {
    /// Single padding byte, no length field
    Null,
    /// End of the TLV chain
    Terminator,
    Block(TlvInfo),
}

/// Decode the TLV at `address` from a 4-byte lookahead window.
///
/// Returns the step and the address of the next TLV. The window is clamped
/// to the end of addressable memory; a length field cut off by that clamp
/// means the chain ran off the tag.
pub fn read_tlv_at<R: PageReader + ?Sized>(
    reader: &mut R,
    address: usize,
) -> Result<(TlvStep, usize)> {
    let window_len = TLV_LOOKAHEAD.min(ADDRESSABLE_BYTES.saturating_sub(address));
    if window_len == 0 {
        return Err(Error::NotFound);
    }
    let window = read_range(reader, address, window_len)?;
    let tag = window[0];

    match tag {
        TLV_NULL => return Ok((TlvStep::Null, address + 1)),
        TLV_TERMINATOR => return Ok((TlvStep::Terminator, address + 1)),
        _ => {}
    }

    let (value_length, header_len) = match window[1..] {
        [TLV_EXTENDED_LENGTH, hi, lo, ..] => (u16::from_be_bytes([hi, lo]) as usize, 4),
        [TLV_EXTENDED_LENGTH, ..] | [] => {
            warn!("tlv: length field of {:#04x} at {} runs off the tag", tag, address);
            return Err(Error::NotFound);
        }
        [short, ..] => (short as usize, 2),
    };

    let info = TlvInfo::new(tag, value_length, address + header_len);
    Ok((TlvStep::Block(info), info.value_end_address()))
}

/// Walk the TLV chain from `base_address` and return the NDEF message TLV.
///
/// Fails with `Error::NotFound` when the terminator TLV is reached first or
/// the cursor reaches `scan_limit`.
pub fn locate_ndef_message<R: PageReader + ?Sized>(
    reader: &mut R,
    base_address: usize,
    scan_limit: usize,
) -> Result<TlvInfo> {
    let mut cursor = base_address;

    while cursor < scan_limit {
        let (step, next) = read_tlv_at(reader, cursor)?;
        match step {
            TlvStep::Block(info) if info.tag_type == TLV_NDEF_MESSAGE => {
                debug!(
                    "tlv: NDEF message at {}, {} byte(s)",
                    info.value_start_address, info.value_length
                );
                return Ok(info);
            }
            TlvStep::Block(info) => {
                trace!(
                    "tlv: skipping {} at {}, {} byte(s)",
                    info.tlv_type(),
                    cursor,
                    info.value_length
                );
            }
            TlvStep::Null => trace!("tlv: NULL at {}", cursor),
            TlvStep::Terminator => {
                debug!("tlv: terminator at {} before any NDEF message", cursor);
                return Err(Error::NotFound);
            }
        }
        cursor = next;
    }

    warn!("tlv: scan reached limit {} without a terminator", scan_limit);
    Err(Error::NotFound)
}

/// Collect every TLV block (NULL padding excluded) up to the terminator or
/// `scan_limit`, including ones after the NDEF message.
pub fn scan_tlvs<R: PageReader + ?Sized>(
    reader: &mut R,
    base_address: usize,
    scan_limit: usize,
) -> Result<Vec<TlvInfo>> {
    let mut cursor = base_address;
    let mut blocks = Vec::new();

    while cursor < scan_limit {
        let (step, next) = read_tlv_at(reader, cursor)?;
        match step {
            TlvStep::Block(info) => blocks.push(info),
            TlvStep::Null => {}
            TlvStep::Terminator => break,
        }
        cursor = next;
    }

    trace!(
        "tlv: scanned {:?}",
        blocks.iter().map(TlvInfo::tlv_type).collect::<Vec<TlvType>>()
    );
    Ok(blocks)
}
