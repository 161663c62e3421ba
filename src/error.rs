//! Unified error type for btn2ble.
//!
//! We avoid `alloc` - all error variants carry only fixed-size data.
//! Implements `defmt::Format` for efficient on-target logging.
//!
//! The taxonomy is deliberately small: a trigger observed while no
//! peer is connected is *not* an error (it is silently dropped), and a
//! notification that races a disconnect is best-effort - the failure
//! is logged and swallowed at the call site.

use defmt::Format;

/// Top-level error type used across the application.
#[derive(Debug, Format)]
pub enum Error {
    /// The SoftDevice returned a BLE-level error.
    Ble(BleError),
}

/// Subset of BLE errors we propagate (keeps the enum `Copy`-friendly).
#[derive(Debug, Clone, Copy, Format)]
pub enum BleError {
    /// Advertising could not be started.
    AdvertiseFailed,
    /// Characteristic notify failed (peer gone or not subscribed).
    NotifyFailed,
}

// Convenience conversions

impl From<BleError> for Error {
    fn from(e: BleError) -> Self {
        Error::Ble(e)
    }
}
