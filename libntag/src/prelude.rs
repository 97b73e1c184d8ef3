// libntag/src/prelude.rs

pub use crate::ndef::{NdefHeader, NdefRecord, TextEncoding, TypeNameFormat, decode};
pub use crate::tag::{NtagReader, Tag, TagBuilder, TagConfig, read_ndef_message};
pub use crate::transport::{MemoryTag, PageReader, Transceiver};
pub use crate::{Error, Page, PageFault, Result, TagModel, TlvInfo, TlvType};

// Small utilities for convenience
pub use crate::utils::{
    bytes_to_hex, bytes_to_hex_spaced, default_transceive_timeout, ms, parse_hex, timeout_ms,
};
