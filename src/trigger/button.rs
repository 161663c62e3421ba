//! GPIO button trigger - polled, active-low with internal pull-up.
//!
//! The pull-up biasing means an open circuit reads high (released);
//! pressing the button pulls the pin to ground.  Sampling happens at
//! the main loop cadence, edge detection turns the sampled level into
//! at most one event per press.

use crate::trigger::edge::EdgeDetector;
use crate::trigger::{TriggerEvent, TriggerSource};
use embedded_hal::digital::InputPin;

/// Trigger source backed by a digital input pin.
pub struct ButtonTrigger<P: InputPin> {
    pin: P,
    edge: EdgeDetector,
}

impl<P: InputPin> ButtonTrigger<P> {
    pub fn new(pin: P) -> Self {
        Self {
            pin,
            edge: EdgeDetector::new(),
        }
    }
}

impl<P: InputPin> TriggerSource for ButtonTrigger<P> {
    fn poll(&mut self) -> Option<TriggerEvent> {
        // Active-low: logically pressed when the pin reads low.
        let pressed = self.pin.is_low().unwrap_or(false);
        self.edge.update(pressed).then_some(TriggerEvent)
    }
}
