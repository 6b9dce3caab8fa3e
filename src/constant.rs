// SPDX-License-Identifier: GPL-3.0-or-later
// src/constant.rs
//
// Application constants that should not be changed by the user.

/// Render scale for PDF pages (2.0 = double the media box size).
pub const PDF_RENDER_SCALE: f64 = 2.0;

/// Minimum bitmap edge in pixels (prevents 0x0 surfaces for degenerate pages).
pub const MIN_PIXMAP_SIZE: u32 = 1;

/// File extension of bundled documents (matched case-insensitively).
pub const PDF_EXTENSION: &str = "pdf";

/// Zoom levels cycled by the double-tap gesture, in order.
pub const ZOOM_PRESETS: [f32; 4] = [1.0, 1.5, 2.0, 2.5];

/// Tolerance for matching the current scale against a preset.
pub const PRESET_EPSILON: f32 = 0.011;

/// Scale applied while zoom mode is off.
pub const NEUTRAL_SCALE: f32 = 1.0;

/// Vertical gap between rendered pages in logical pixels.
pub const PAGE_SPACING: u16 = 4;

/// Zoom range and step used when the configured values are unusable.
pub const DEFAULT_MIN_SCALE: f32 = 1.0;
pub const DEFAULT_MAX_SCALE: f32 = 5.0;
pub const DEFAULT_SCALE_STEP: f32 = 0.1;
