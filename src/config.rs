//! Application-wide constants and compile-time configuration.
//!
//! All hardware pin assignments, timing parameters, and protocol
//! constants live here so they can be tuned in one place.  The device
//! has no other configuration surface - no CLI, no files, no
//! persisted settings.

// BLE

/// GAP device name advertised to peers.
pub const DEVICE_NAME: &str = "btn2ble";

/// Trigger service UUID, little-endian byte order as the SoftDevice
/// advertisement builder expects it.
///
/// Canonical form: `12345678-1234-1234-1234-123456789abc`.  This value
/// is an opaque constant and must match the paired application.
pub const TRIGGER_SERVICE_UUID: [u8; 16] = [
    0xBC, 0x9A, 0x78, 0x56, 0x34, 0x12, 0x34, 0x12, //
    0x34, 0x12, 0x34, 0x12, 0x78, 0x56, 0x34, 0x12,
];

/// Value written to the press characteristic on every trigger.
///
/// The payload is a fixed opaque token - no framing, no sequence
/// numbers, no timestamps.  Constructed fresh per event, never queued.
pub const NOTIFY_PAYLOAD: &[u8] = b"button";

// GPIO pin assignments (nRF52840-DK defaults)
//
// These are logical names; actual `embassy_nrf::peripherals::*` pins
// are selected in `main.rs`.  Adjust for your custom PCB.
//
//   Button input   → P0.11  (active-low, internal pull-up)
//   Indicator LED  → P0.06  (active-high)

// Timing

/// How long the indicator LED stays lit after a trigger (ms).
///
/// The hold deliberately blocks the polling loop - a trigger arriving
/// inside this window is missed.  See `notifier` module docs.
pub const INDICATOR_PULSE_MS: u64 = 200;

/// Idle delay between polling iterations (ms).
pub const LOOP_IDLE_MS: u64 = 10;
