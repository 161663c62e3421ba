//! Level-to-edge conversion for polled inputs.
//!
//! The physical button is sampled, not interrupt-driven, so debouncing
//! is done by edge detection: an event is produced only on the sample
//! where the level transitions from released to pressed.  Sustained
//! "pressed" samples and release transitions produce nothing.

/// Tracks the previously observed level of a sampled input.
///
/// Starts in the released state, so a button already held at boot
/// produces one event on the first pressed sample.
#[derive(Clone, Copy, Debug, Default)]
pub struct EdgeDetector {
    last_pressed: bool,
}

impl EdgeDetector {
    pub const fn new() -> Self {
        Self {
            last_pressed: false,
        }
    }

    /// Feed one sample; returns `true` only on a released→pressed
    /// transition.
    pub fn update(&mut self, pressed: bool) -> bool {
        let edge = pressed && !self.last_pressed;
        self.last_pressed = pressed;
        edge
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Unit Tests (run on host, not embedded)
// ═══════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_press_yields_single_edge() {
        let mut edge = EdgeDetector::new();
        assert!(!edge.update(false));
        assert!(edge.update(true));
        assert!(!edge.update(true)); // held
        assert!(!edge.update(false)); // released
    }

    #[test]
    fn release_and_repress_yields_second_edge() {
        let mut edge = EdgeDetector::new();
        assert!(edge.update(true));
        assert!(!edge.update(false));
        assert!(edge.update(true));
    }

    #[test]
    fn long_hold_never_repeats() {
        let mut edge = EdgeDetector::new();
        assert!(edge.update(true));
        for _ in 0..100 {
            assert!(!edge.update(true));
        }
    }

    #[test]
    fn idle_input_never_fires() {
        let mut edge = EdgeDetector::new();
        for _ in 0..100 {
            assert!(!edge.update(false));
        }
    }

    #[test]
    fn edge_count_equals_press_transition_count() {
        // Arbitrary sample sequence: events must match exactly the
        // number of released→pressed transitions (initial state is
        // released).
        let samples = [
            false, true, true, false, true, false, false, true, true, true, false, true,
        ];

        let mut edge = EdgeDetector::new();
        let detected = samples.iter().filter(|&&s| edge.update(s)).count();

        let mut last = false;
        let mut expected = 0;
        for &s in &samples {
            if s && !last {
                expected += 1;
            }
            last = s;
        }

        assert_eq!(detected, expected);
        assert_eq!(detected, 4);
    }
}
