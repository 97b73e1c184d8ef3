//! Transceive timeout helpers. `Transceiver` takes whole milliseconds;
//! callers may prefer to configure a `Duration`.

use std::time::Duration;

/// Default per-command transceive timeout in milliseconds, used when a
/// caller doesn't configure one.
pub const DEFAULT_TRANSCEIVE_TIMEOUT_MS: u64 = 1000;

/// Convert milliseconds to Duration.
pub fn ms(ms: u64) -> Duration {
    Duration::from_millis(ms)
}

pub fn default_transceive_timeout() -> Duration {
    ms(DEFAULT_TRANSCEIVE_TIMEOUT_MS)
}

/// Whole milliseconds of `timeout`, saturating at `u64::MAX`.
/// Sub-millisecond durations round up so a non-zero timeout never becomes 0.
pub fn timeout_ms(timeout: Duration) -> u64 {
    let whole = u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX);
    if whole == 0 && !timeout.is_zero() { 1 } else { whole }
}
