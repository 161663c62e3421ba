//! Visible feedback - a single status LED.
//!
//! The pulse *blocks the polling loop* for its full hold duration, so
//! a trigger arriving inside the ~200 ms window is missed.  That is a
//! deliberate simplicity tradeoff carried over from the device's
//! design, not an accident; making the off-edge a deferred timer
//! action would change which triggers the device reports.

use embassy_time::{Duration, Timer};
use embedded_hal::digital::OutputPin;

/// Status LED driver (active-high).
pub struct Indicator<P: OutputPin> {
    led: P,
}

impl<P: OutputPin> Indicator<P> {
    pub fn new(led: P) -> Self {
        Self { led }
    }

    /// Light the LED, hold, then switch it off.  Blocks the caller for
    /// the whole hold.
    pub async fn pulse(&mut self, hold: Duration) {
        let _ = self.led.set_high();
        Timer::after(hold).await;
        let _ = self.led.set_low();
    }
}
