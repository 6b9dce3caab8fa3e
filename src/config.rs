// SPDX-License-Identifier: GPL-3.0-or-later
// src/config.rs
//
// Global configuration for the application with cosmic-config support.

use cosmic::cosmic_config::{self, CosmicConfigEntry, cosmic_config_derive::CosmicConfigEntry};
use std::path::PathBuf;
use std::time::Duration;

use crate::constant::{DEFAULT_MAX_SCALE, DEFAULT_MIN_SCALE, DEFAULT_SCALE_STEP};
use crate::domain::zoom::ZoomBounds;

/// Global configuration for the application.
#[derive(Debug, Clone, CosmicConfigEntry, PartialEq)]
#[version = 1]
pub struct AppConfig {
    /// Optional directory whose top-level PDFs replace the embedded bundle.
    pub documents_dir: Option<PathBuf>,
    /// Minimum zoom scale.
    pub min_scale: f32,
    /// Maximum zoom scale.
    pub max_scale: f32,
    /// Scale change per rotary detent.
    pub scale_step: f32,
    /// Pixel scroll distance that counts as one rotary detent (touchpads).
    pub rotary_pixels_per_step: f32,
    /// How long the zoom indicator stays visible after a change.
    pub hud_duration_ms: u64,
    /// Maximum interval between the two taps of a double-tap.
    pub double_tap_ms: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            documents_dir: None,
            min_scale: DEFAULT_MIN_SCALE,
            max_scale: DEFAULT_MAX_SCALE,
            scale_step: DEFAULT_SCALE_STEP,
            rotary_pixels_per_step: 40.0,
            hud_duration_ms: 1000,
            double_tap_ms: 350,
        }
    }
}

impl AppConfig {
    /// Zoom bounds derived from the configured range.
    pub fn zoom_bounds(&self) -> ZoomBounds {
        ZoomBounds::new(self.min_scale, self.max_scale, self.scale_step)
    }

    pub fn hud_duration(&self) -> Duration {
        Duration::from_millis(self.hud_duration_ms)
    }

    pub fn double_tap_window(&self) -> Duration {
        Duration::from_millis(self.double_tap_ms)
    }
}
