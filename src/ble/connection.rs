//! Connection state shared across scheduling contexts.
//!
//! The SoftDevice reports connect/disconnect on its own (interrupt)
//! context while the polling loop reads the state from thread mode, so
//! the flag must be a single-word atomic - a torn read is unacceptable
//! even for a boolean.

use core::sync::atomic::{AtomicBool, Ordering};

/// Whether a wireless peer is currently associated.
///
/// Written only by the connect/disconnect pair, read by the polling
/// loop.  Boots disconnected; never persisted.
pub struct ConnectionFlag(AtomicBool);

impl ConnectionFlag {
    pub const fn new() -> Self {
        Self(AtomicBool::new(false))
    }

    pub fn on_connect(&self) {
        self.0.store(true, Ordering::Release);
    }

    pub fn on_disconnect(&self) {
        self.0.store(false, Ordering::Release);
    }

    pub fn is_connected(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}

impl Default for ConnectionFlag {
    fn default() -> Self {
        Self::new()
    }
}
