// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/gesture.rs
//
// Raw input interpretation: double-tap detection and rotary detents.

use std::time::{Duration, Instant};

/// Recognises two taps within a time window.
#[derive(Debug, Clone)]
pub struct TapDetector {
    window: Duration,
    last_tap: Option<Instant>,
}

impl TapDetector {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            last_tap: None,
        }
    }

    /// Register a tap at `now`. Returns `true` when it completes a double-tap.
    /// A completed double-tap is consumed, so a third tap starts over.
    pub fn register(&mut self, now: Instant) -> bool {
        match self.last_tap.take() {
            Some(previous) if now.saturating_duration_since(previous) <= self.window => true,
            _ => {
                self.last_tap = Some(now);
                false
            }
        }
    }
}

/// Raw rotary movement as reported by the windowing system.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RotaryDelta {
    Lines(f32),
    Pixels(f32),
}

/// Converts continuous rotary movement into whole detents, carrying the
/// remainder over to the next report.
#[derive(Debug, Clone)]
pub struct RotaryAccumulator {
    pixels_per_step: f32,
    pending: f32,
}

impl RotaryAccumulator {
    pub fn new(pixels_per_step: f32) -> Self {
        Self {
            pixels_per_step: if pixels_per_step > 0.0 {
                pixels_per_step
            } else {
                1.0
            },
            pending: 0.0,
        }
    }

    /// Feed a movement and return the number of whole detents crossed.
    #[allow(clippy::cast_possible_truncation)]
    pub fn feed(&mut self, delta: RotaryDelta) -> i32 {
        let steps = match delta {
            RotaryDelta::Lines(lines) => lines,
            RotaryDelta::Pixels(pixels) => pixels / self.pixels_per_step,
        };
        if !steps.is_finite() {
            return 0;
        }

        self.pending += steps;
        let whole = self.pending.trunc();
        self.pending -= whole;

        whole as i32
    }

    pub fn reset(&mut self) {
        self.pending = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WINDOW: Duration = Duration::from_millis(350);

    #[test]
    fn two_quick_taps_make_a_double_tap() {
        let mut taps = TapDetector::new(WINDOW);
        let start = Instant::now();

        assert!(!taps.register(start));
        assert!(taps.register(start + Duration::from_millis(200)));
    }

    #[test]
    fn slow_taps_do_not_combine() {
        let mut taps = TapDetector::new(WINDOW);
        let start = Instant::now();

        assert!(!taps.register(start));
        assert!(!taps.register(start + Duration::from_millis(400)));
        assert!(taps.register(start + Duration::from_millis(500)));
    }

    #[test]
    fn third_tap_starts_a_new_gesture() {
        let mut taps = TapDetector::new(WINDOW);
        let start = Instant::now();

        assert!(!taps.register(start));
        assert!(taps.register(start + Duration::from_millis(100)));
        assert!(!taps.register(start + Duration::from_millis(200)));
    }

    #[test]
    fn lines_map_to_detents() {
        let mut rotary = RotaryAccumulator::new(40.0);
        assert_eq!(rotary.feed(RotaryDelta::Lines(1.0)), 1);
        assert_eq!(rotary.feed(RotaryDelta::Lines(-3.0)), -3);
    }

    #[test]
    fn pixels_accumulate_until_a_detent() {
        let mut rotary = RotaryAccumulator::new(40.0);
        assert_eq!(rotary.feed(RotaryDelta::Pixels(25.0)), 0);
        assert_eq!(rotary.feed(RotaryDelta::Pixels(25.0)), 1);
        assert_eq!(rotary.feed(RotaryDelta::Pixels(-10.0)), 0);
        assert_eq!(rotary.feed(RotaryDelta::Pixels(-40.0)), -1);
    }

    #[test]
    fn reset_discards_partial_movement() {
        let mut rotary = RotaryAccumulator::new(40.0);
        assert_eq!(rotary.feed(RotaryDelta::Pixels(39.0)), 0);
        rotary.reset();
        assert_eq!(rotary.feed(RotaryDelta::Pixels(1.0)), 0);
    }
}
