//! Trigger input subsystem.
//!
//! Two interchangeable sources can produce the single semantic event
//! the device cares about:
//!
//! - **Button** - a polled active-low GPIO pin with internal pull-up,
//!   edge-detected so one physical press yields one event no matter
//!   how long it is held.
//! - **Infrared** - any decoder driver implementing the `IrReceiver`
//!   trait (see `ir.rs`, exported through the library interface);
//!   every successfully decoded signal counts as one discrete event
//!   (the decoded value itself is ignored).
//!
//! Both are polled once per main-loop iteration; neither blocks.

pub mod button;
pub mod edge;

/// One detected activation edge.
///
/// Carries no data: the device relays the *fact* of a trigger, not
/// which button or which remote code produced it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TriggerEvent;

/// A pollable trigger input, invoked once per loop iteration.
pub trait TriggerSource {
    /// Returns an event only for a new activation edge - never for a
    /// held level or a repeated sample.
    fn poll(&mut self) -> Option<TriggerEvent>;
}
