//! Infrared trigger variant.
//!
//! The IR demodulation itself (carrier detection, protocol timing,
//! decode into a numeric code) lives in an external decoder driver;
//! this module only consumes its narrow surface through the
//! [`IrReceiver`] trait.
//!
//! The one hard requirement is the resume contract: a decoder that is
//! read but never resumed stops producing results permanently.
//! [`IrTrigger`] makes that failure mode structurally impossible by
//! resuming inside `poll()` on every consumed decode, including codes
//! it discards unread.

use crate::trigger::{TriggerEvent, TriggerSource};

/// Narrow interface to an infrared decoder driver.
pub trait IrReceiver {
    /// Start listening.  Called once when the trigger source is built.
    fn enable(&mut self);

    /// Non-blocking check for a completed decode; returns the decoded
    /// code and consumes it.
    fn decoded(&mut self) -> Option<u32>;

    /// Re-arm the decoder for the next signal.  Must be called after
    /// every consumed decode.
    fn resume(&mut self);
}

/// Trigger source backed by an IR decoder.
///
/// Stateless beyond the receiver itself: unlike the button variant
/// there is no level to edge-detect, each decode is already one
/// discrete event.
pub struct IrTrigger<R: IrReceiver> {
    rx: R,
}

impl<R: IrReceiver> IrTrigger<R> {
    pub fn new(mut rx: R) -> Self {
        rx.enable();
        Self { rx }
    }

    pub fn receiver(&self) -> &R {
        &self.rx
    }
}

impl<R: IrReceiver> TriggerSource for IrTrigger<R> {
    fn poll(&mut self) -> Option<TriggerEvent> {
        // Any decodable signal triggers; the code value is not
        // interpreted.
        let _code = self.rx.decoded()?;
        self.rx.resume();
        Some(TriggerEvent)
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Unit Tests (run on host, not embedded)
// ═══════════════════════════════════════════════════════════════════════════
