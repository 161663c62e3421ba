//! Test-only library interface for btn2ble.
//!
//! This module re-exports the pure logic modules that can be tested
//! on the host (no embedded hardware required).
//!
//! Usage: `cargo test`
//!
//! Note: The embedded binary uses main.rs with #![no_std] and #![no_main].
//! This lib.rs provides a separate entry point for host-based testing.

#![cfg_attr(not(test), no_std)]

// ═══════════════════════════════════════════════════════════════════════════
// Trigger Module Re-exports
// ═══════════════════════════════════════════════════════════════════════════

pub mod trigger {
    /// One detected activation edge.
    ///
    /// Carries no data: the device relays the *fact* of a trigger, not
    /// which button or which remote code produced it.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct TriggerEvent;

    /// A pollable trigger input, invoked once per loop iteration.
    pub trait TriggerSource {
        /// Returns an event only for a new activation edge - never for
        /// a held level or a repeated sample.
        fn poll(&mut self) -> Option<TriggerEvent>;
    }

    pub mod edge {
        pub use crate::trigger_edge_impl::EdgeDetector;
    }

    pub mod ir {
        pub use crate::trigger_ir_impl::{IrReceiver, IrTrigger};
    }
}

pub mod ble {
    pub mod connection {
        pub use crate::ble_connection_impl::ConnectionFlag;
    }
}

pub mod notify_logic {
    pub use crate::notify_logic_impl::should_fire;
}

pub mod config {
    pub use crate::config_impl::*;
}

// Internal module paths for the actual implementations
#[path = "ble/connection.rs"]
mod ble_connection_impl;
#[path = "config.rs"]
mod config_impl;
#[path = "notify_logic.rs"]
mod notify_logic_impl;
#[path = "trigger/edge.rs"]
mod trigger_edge_impl;
#[path = "trigger/ir.rs"]
mod trigger_ir_impl;

// ═══════════════════════════════════════════════════════════════════════════
// Unit Tests
// ═══════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::ble::connection::ConnectionFlag;
    use super::config;
    use super::notify_logic::should_fire;
    use super::trigger::edge::EdgeDetector;

    // ════════════════════════════════════════════════════════════════════════
    // Notification Gating Tests
    // ════════════════════════════════════════════════════════════════════════

    #[test]
    fn fire_requires_connection_and_edge() {
        assert!(should_fire(true, true));
        assert!(!should_fire(true, false));
        assert!(!should_fire(false, true));
        assert!(!should_fire(false, false));
    }

    #[test]
    fn disconnected_edge_is_suppressed_not_deferred() {
        let mut edge = EdgeDetector::new();

        // Edge lands while disconnected: fully suppressed.
        let e = edge.update(true);
        assert!(e);
        assert!(!should_fire(false, e));

        // Peer connects while the button is still held: the consumed
        // edge must not fire late.
        assert!(!should_fire(true, edge.update(true)));
    }

    #[test]
    fn connected_edge_fires_exactly_once() {
        let mut edge = EdgeDetector::new();
        let fired: usize = [true, true, true, false, false]
            .into_iter()
            .filter(|&pressed| should_fire(true, edge.update(pressed)))
            .count();
        assert_eq!(fired, 1);
    }

    // ════════════════════════════════════════════════════════════════════════
    // Connection Flag Tests
    // ════════════════════════════════════════════════════════════════════════

    #[test]
    fn connection_flag_boots_disconnected() {
        let flag = ConnectionFlag::new();
        assert!(!flag.is_connected());
    }

    #[test]
    fn connection_flag_last_callback_wins() {
        let flag = ConnectionFlag::new();
        flag.on_connect();
        flag.on_disconnect();
        flag.on_connect();
        assert!(flag.is_connected());

        flag.on_disconnect();
        flag.on_connect();
        flag.on_disconnect();
        assert!(!flag.is_connected());
    }

    #[test]
    fn connection_flag_callbacks_are_idempotent() {
        let flag = ConnectionFlag::new();
        flag.on_connect();
        flag.on_connect();
        assert!(flag.is_connected());

        flag.on_disconnect();
        flag.on_disconnect();
        assert!(!flag.is_connected());
    }

    // ════════════════════════════════════════════════════════════════════════
    // Protocol Constant Tests
    // ════════════════════════════════════════════════════════════════════════

    #[test]
    fn payload_is_exactly_the_button_token() {
        assert_eq!(config::NOTIFY_PAYLOAD, b"button");
        assert_eq!(config::NOTIFY_PAYLOAD.len(), 6);
    }

    #[test]
    fn service_uuid_is_canonical_value_in_little_endian() {
        // 12345678-1234-1234-1234-123456789abc, reversed for the
        // SoftDevice advertisement builder.
        let mut big_endian = config::TRIGGER_SERVICE_UUID;
        big_endian.reverse();
        assert_eq!(
            big_endian,
            [
                0x12, 0x34, 0x56, 0x78, 0x12, 0x34, 0x12, 0x34, //
                0x12, 0x34, 0x12, 0x34, 0x56, 0x78, 0x9A, 0xBC,
            ]
        );
    }

    #[test]
    fn timing_constants_match_device_behaviour() {
        // 200 ms LED hold, 10 ms idle cadence.
        assert_eq!(config::INDICATOR_PULSE_MS, 200);
        assert_eq!(config::LOOP_IDLE_MS, 10);
    }
}
