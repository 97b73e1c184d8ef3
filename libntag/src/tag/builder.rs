// libntag/src/tag/builder.rs

use std::time::Duration;

use crate::constants::{ADDRESSABLE_BYTES, TLV_BASE_ADDRESS};
use crate::tag::Tag;
use crate::transport::PageReader;
use crate::types::TagModel;
use crate::utils::{self, DEFAULT_TRANSCEIVE_TIMEOUT_MS};
use crate::{Error, Result};

/// Where to look for TLVs and how long to wait on the link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TagConfig {
    pub model: TagModel,
    pub tlv_base_address: usize,
    pub timeout_ms: u64,
}

impl TagConfig {
    /// First address the TLV scan never reaches.
    pub fn scan_limit(&self) -> usize {
        self.model.user_memory_end().min(ADDRESSABLE_BYTES)
    }

    pub fn timeout(&self) -> Duration {
        utils::ms(self.timeout_ms)
    }
}

impl Default for TagConfig {
    fn default() -> Self {
        Self {
            model: TagModel::Generic,
            tlv_base_address: TLV_BASE_ADDRESS,
            timeout_ms: DEFAULT_TRANSCEIVE_TIMEOUT_MS,
        }
    }
}

/// Helper to construct a validated `TagConfig` or a `Tag`.
#[derive(Debug, Clone, Default)]
pub struct TagBuilder {
    model: Option<TagModel>,
    tlv_base_address: Option<usize>,
    timeout_ms: Option<u64>,
}

impl TagBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn model(mut self, model: TagModel) -> Self {
        self.model = Some(model);
        self
    }

    pub fn tlv_base_address(mut self, address: usize) -> Self {
        self.tlv_base_address = Some(address);
        self
    }

    pub fn timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = Some(timeout_ms);
        self
    }

    pub fn timeout(self, timeout: Duration) -> Self {
        self.timeout_ms(utils::timeout_ms(timeout))
    }

    /// Consume the builder and return the configuration. Unset fields take
    /// their defaults; the base address must lie inside user memory.
    pub fn build(self) -> Result<TagConfig> {
        let defaults = TagConfig::default();
        let config = TagConfig {
            model: self.model.unwrap_or(defaults.model),
            tlv_base_address: self.tlv_base_address.unwrap_or(defaults.tlv_base_address),
            timeout_ms: self.timeout_ms.unwrap_or(defaults.timeout_ms),
        };

        if config.tlv_base_address >= config.scan_limit() {
            return Err(Error::InvalidArgument(format!(
                "tlv base address {} is outside user memory (ends at {})",
                config.tlv_base_address,
                config.scan_limit()
            )));
        }
        if config.timeout_ms == 0 {
            return Err(Error::InvalidArgument("timeout must be non-zero".into()));
        }
        Ok(config)
    }

    /// Build the configuration and attach it to `reader`.
    pub fn build_with_reader<R: PageReader>(self, reader: R) -> Result<Tag<R>> {
        Ok(Tag::with_config(reader, self.build()?))
    }
}
