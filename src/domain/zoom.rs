// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/zoom.rs
//
// Zoom state and its reducer.

use crate::constant::{
    DEFAULT_MAX_SCALE, DEFAULT_MIN_SCALE, DEFAULT_SCALE_STEP, NEUTRAL_SCALE, PRESET_EPSILON,
    ZOOM_PRESETS,
};

/// Allowed zoom range and rotary step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomBounds {
    min: f32,
    max: f32,
    step: f32,
}

impl Default for ZoomBounds {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_SCALE, DEFAULT_MAX_SCALE, DEFAULT_SCALE_STEP)
    }
}

impl ZoomBounds {
    /// Build bounds, swapping an inverted range. Non-finite or non-positive
    /// values fall back to the defaults.
    pub fn new(min: f32, max: f32, step: f32) -> Self {
        let min = positive_or(min, DEFAULT_MIN_SCALE);
        let max = positive_or(max, DEFAULT_MAX_SCALE);
        let (min, max) = if min <= max { (min, max) } else { (max, min) };
        let step = positive_or(step, DEFAULT_SCALE_STEP);
        Self { min, max, step }
    }

    pub fn min(&self) -> f32 {
        self.min
    }

    pub fn max(&self) -> f32 {
        self.max
    }

    pub fn clamp(&self, value: f32) -> f32 {
        if value.is_nan() {
            return self.min;
        }
        value.clamp(self.min, self.max)
    }

    /// Snap to the step grid anchored at `min`, then clamp.
    fn snap(&self, value: f32) -> f32 {
        let steps = ((value - self.min) / self.step).round();
        self.clamp(self.min + steps * self.step)
    }
}

fn positive_or(value: f32, fallback: f32) -> f32 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        fallback
    }
}

/// Inputs that can change the zoom state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ZoomEvent {
    /// Rotary input moved by whole detents (positive zooms in).
    Rotate(i32),
    /// Double-tap: jump to the next preset.
    CyclePreset,
    /// Zoom mode button.
    ToggleMode,
}

/// Immutable zoom snapshot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomState {
    scale: f32,
    enabled: bool,
    bounds: ZoomBounds,
}

impl Default for ZoomState {
    fn default() -> Self {
        Self::new(ZoomBounds::default())
    }
}

impl ZoomState {
    /// Fresh state: neutral scale, zoom mode off.
    pub fn new(bounds: ZoomBounds) -> Self {
        Self {
            scale: bounds.clamp(NEUTRAL_SCALE),
            enabled: false,
            bounds,
        }
    }

    /// Stored scale, kept while zoom mode is off.
    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Scale actually applied to the page column.
    pub fn effective_scale(&self) -> f32 {
        if self.enabled {
            self.scale
        } else {
            self.bounds.clamp(NEUTRAL_SCALE)
        }
    }

    /// Indicator text, e.g. `2.5x`.
    pub fn label(&self) -> String {
        format!("{:.1}x", self.scale)
    }

    /// Apply an event. Rotary and preset input are ignored while zoom mode is off.
    #[must_use]
    pub fn reduce(self, event: ZoomEvent) -> Self {
        match event {
            ZoomEvent::ToggleMode => Self {
                enabled: !self.enabled,
                ..self
            },
            _ if !self.enabled => self,
            ZoomEvent::Rotate(detents) => {
                #[allow(clippy::cast_precision_loss)]
                let target = self.scale + detents as f32 * self.bounds.step;
                Self {
                    scale: self.bounds.snap(target),
                    ..self
                }
            }
            ZoomEvent::CyclePreset => Self {
                scale: self
                    .bounds
                    .clamp(next_preset(self.scale, &ZOOM_PRESETS, PRESET_EPSILON)),
                ..self
            },
        }
    }

    /// Whether moving from `self` to `next` changed the stored scale.
    pub fn scale_changed(&self, next: &Self) -> bool {
        (self.scale - next.scale).abs() > f32::EPSILON
    }
}

/// Preset following `value` in the cyclic list `presets`.
///
/// A value within `epsilon` of a preset advances to the one after it
/// (wrapping); any other value jumps to the smallest preset above it, or
/// wraps to the first preset when none is larger.
pub fn next_preset(value: f32, presets: &[f32], epsilon: f32) -> f32 {
    let Some(&first) = presets.first() else {
        return value;
    };

    if let Some(index) = presets.iter().position(|p| (value - p).abs() < epsilon) {
        return presets[(index + 1) % presets.len()];
    }

    presets
        .iter()
        .copied()
        .filter(|p| *p > value)
        .reduce(f32::min)
        .unwrap_or(first)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn enabled() -> ZoomState {
        ZoomState::default().reduce(ZoomEvent::ToggleMode)
    }

    fn at(scale: f32) -> ZoomState {
        ZoomState { scale, ..enabled() }
    }

    fn assert_close(actual: f32, expected: f32) {
        assert!(
            (actual - expected).abs() < 1e-4,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn presets_advance_from_exact_matches() {
        assert_eq!(next_preset(1.0, &ZOOM_PRESETS, PRESET_EPSILON), 1.5);
        assert_eq!(next_preset(2.0, &ZOOM_PRESETS, PRESET_EPSILON), 2.5);
    }

    #[test]
    fn last_preset_wraps_to_first() {
        assert_eq!(next_preset(2.5, &ZOOM_PRESETS, PRESET_EPSILON), 1.0);
    }

    #[test]
    fn presets_tolerate_small_drift() {
        assert_eq!(next_preset(1.005, &ZOOM_PRESETS, PRESET_EPSILON), 1.5);
        assert_eq!(next_preset(2.49, &ZOOM_PRESETS, PRESET_EPSILON), 1.0);
    }

    #[test]
    fn off_preset_values_jump_to_next_larger() {
        assert_eq!(next_preset(1.8, &ZOOM_PRESETS, PRESET_EPSILON), 2.0);
        assert_eq!(next_preset(1.2, &ZOOM_PRESETS, PRESET_EPSILON), 1.5);
        assert_eq!(next_preset(0.5, &ZOOM_PRESETS, PRESET_EPSILON), 1.0);
    }

    #[test]
    fn values_beyond_last_preset_wrap() {
        assert_eq!(next_preset(3.0, &ZOOM_PRESETS, PRESET_EPSILON), 1.0);
        assert_eq!(next_preset(5.0, &ZOOM_PRESETS, PRESET_EPSILON), 1.0);
    }

    #[test]
    fn empty_preset_list_keeps_value() {
        assert_eq!(next_preset(1.7, &[], PRESET_EPSILON), 1.7);
    }

    #[test]
    fn double_tap_cycles_through_all_presets() {
        let mut state = enabled();
        let mut seen = Vec::new();
        for _ in 0..5 {
            state = state.reduce(ZoomEvent::CyclePreset);
            seen.push(state.scale());
        }
        assert_eq!(seen, vec![1.5, 2.0, 2.5, 1.0, 1.5]);
    }

    #[test]
    fn rotary_steps_snap_to_grid() {
        let state = enabled().reduce(ZoomEvent::Rotate(3));
        assert_close(state.scale(), 1.3);

        let state = at(1.52).reduce(ZoomEvent::Rotate(1));
        assert_close(state.scale(), 1.6);
    }

    #[test]
    fn step_grid_starts_at_lower_bound() {
        let bounds = ZoomBounds::new(1.05, 5.0, 0.1);
        let state = ZoomState::new(bounds).reduce(ZoomEvent::ToggleMode);
        assert_close(state.scale(), 1.05);

        let state = state.reduce(ZoomEvent::Rotate(1));
        assert_close(state.scale(), 1.15);
        let state = state.reduce(ZoomEvent::Rotate(2));
        assert_close(state.scale(), 1.35);
    }

    #[test]
    fn unusable_bounds_fall_back_to_defaults() {
        let bounds = ZoomBounds::new(f32::NAN, 5.0, 0.1);
        assert_eq!((bounds.min(), bounds.max()), (1.0, 5.0));

        let bounds = ZoomBounds::new(2.0, f32::INFINITY, f32::NAN);
        assert_eq!((bounds.min(), bounds.max()), (2.0, 5.0));

        let bounds = ZoomBounds::new(-1.0, 0.0, -0.5);
        assert_eq!(bounds, ZoomBounds::default());
    }

    #[test]
    fn nan_configured_bound_does_not_break_zoom() {
        let state = ZoomState::new(ZoomBounds::new(f32::NAN, 5.0, 0.1));
        assert_eq!(state.effective_scale(), 1.0);

        let state = state
            .reduce(ZoomEvent::ToggleMode)
            .reduce(ZoomEvent::Rotate(2))
            .reduce(ZoomEvent::CyclePreset);
        assert_close(state.scale(), 1.5);
    }

    #[test]
    fn rotary_input_is_clamped() {
        let state = enabled().reduce(ZoomEvent::Rotate(-10));
        assert_eq!(state.scale(), 1.0);

        let state = enabled().reduce(ZoomEvent::Rotate(1000));
        assert_eq!(state.scale(), 5.0);
    }

    #[test]
    fn effective_scale_stays_within_bounds() {
        let bounds = ZoomBounds::new(1.0, 10.0, 0.5);
        let mut state = ZoomState::new(bounds).reduce(ZoomEvent::ToggleMode);
        for detents in [3, 40, -7, -100, 12, 1, 1, 1] {
            state = state.reduce(ZoomEvent::Rotate(detents));
            let scale = state.effective_scale();
            assert!((bounds.min()..=bounds.max()).contains(&scale));
        }
    }

    #[test]
    fn disabled_mode_ignores_input_and_applies_neutral_scale() {
        let state = ZoomState::default();
        assert_eq!(state.reduce(ZoomEvent::Rotate(5)), state);
        assert_eq!(state.reduce(ZoomEvent::CyclePreset), state);

        let zoomed = at(2.5).reduce(ZoomEvent::ToggleMode);
        assert!(!zoomed.is_enabled());
        assert_eq!(zoomed.effective_scale(), 1.0);
        assert_eq!(zoomed.scale(), 2.5);
    }

    #[test]
    fn re_enabling_restores_stored_scale() {
        let state = at(2.0)
            .reduce(ZoomEvent::ToggleMode)
            .reduce(ZoomEvent::ToggleMode);
        assert_eq!(state.effective_scale(), 2.0);
    }

    #[test]
    fn neutral_scale_is_clamped_into_custom_range() {
        let state = ZoomState::new(ZoomBounds::new(2.0, 4.0, 0.1));
        assert_eq!(state.effective_scale(), 2.0);
    }

    #[test]
    fn label_uses_one_decimal() {
        assert_eq!(at(2.5).label(), "2.5x");
        assert_eq!(at(1.0).label(), "1.0x");
        assert_eq!(at(1.26).label(), "1.3x");
    }

    #[test]
    fn scale_changes_are_detected() {
        let start = enabled();
        assert!(start.scale_changed(&start.reduce(ZoomEvent::CyclePreset)));
        assert!(!start.scale_changed(&start.reduce(ZoomEvent::Rotate(-1))));
        assert!(!start.scale_changed(&start.reduce(ZoomEvent::ToggleMode)));
    }
}
