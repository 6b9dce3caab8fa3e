// SPDX-License-Identifier: GPL-3.0-or-later
// src/ui/model.rs
//
// Application state.

use cosmic::widget::image::Handle as ImageHandle;

use crate::config::AppConfig;
use crate::constant::PDF_RENDER_SCALE;
use crate::domain::document::core::document::{DocumentRef, RenderedPage};
use crate::domain::gesture::{RotaryAccumulator, TapDetector};
use crate::domain::hud::HudTimer;
use crate::domain::zoom::ZoomState;

// =============================================================================
// Pages
// =============================================================================

/// A rendered page ready for display.
#[derive(Debug, Clone)]
pub struct PageView {
    pub number: usize,
    pub width: u32,
    pub height: u32,
    pub handle: ImageHandle,
}

impl From<RenderedPage> for PageView {
    fn from(page: RenderedPage) -> Self {
        let (width, height) = page.dimensions();
        let pixels = page.image.into_raw();
        Self {
            number: page.number,
            width,
            height,
            handle: ImageHandle::from_rgba(width, height, pixels),
        }
    }
}

impl PageView {
    /// Display size at zoom 1.0: the media box size in logical pixels.
    #[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
    pub fn logical_size(&self) -> (f32, f32) {
        let scale = PDF_RENDER_SCALE as f32;
        (self.width as f32 / scale, self.height as f32 / scale)
    }
}

// =============================================================================
// Viewer
// =============================================================================

/// State of an open document. Dropped as a whole when the viewer closes.
pub struct ViewerState {
    pub document: DocumentRef,
    pub pages: Vec<PageView>,
    pub zoom: ZoomState,
    pub hud: HudTimer,
    pub taps: TapDetector,
    pub rotary: RotaryAccumulator,
}

impl ViewerState {
    pub fn new(document: DocumentRef, config: &AppConfig) -> Self {
        Self {
            document,
            pages: Vec::new(),
            zoom: ZoomState::new(config.zoom_bounds()),
            hud: HudTimer::default(),
            taps: TapDetector::new(config.double_tap_window()),
            rotary: RotaryAccumulator::new(config.rotary_pixels_per_step),
        }
    }

    /// Whether wheel input drives zoom instead of scrolling the pages.
    pub fn captures_wheel(&self) -> bool {
        self.zoom.is_enabled()
    }

    /// Still waiting for pages (or never getting any).
    pub fn is_loading(&self) -> bool {
        self.pages.is_empty()
    }
}

// =============================================================================
// Model
// =============================================================================

pub enum Screen {
    Library,
    Viewer(ViewerState),
}

pub struct AppModel {
    // Library.
    pub documents: Vec<DocumentRef>,
    /// Document requested on the command line, opened once the library loads.
    pub pending_open: Option<DocumentRef>,

    // Navigation.
    pub screen: Screen,
}

impl AppModel {
    pub fn new(pending_open: Option<DocumentRef>) -> Self {
        Self {
            documents: Vec::new(),
            pending_open,
            screen: Screen::Library,
        }
    }

    pub fn viewer(&self) -> Option<&ViewerState> {
        match &self.screen {
            Screen::Viewer(viewer) => Some(viewer),
            Screen::Library => None,
        }
    }

    pub fn viewer_mut(&mut self) -> Option<&mut ViewerState> {
        match &mut self.screen {
            Screen::Viewer(viewer) => Some(viewer),
            Screen::Library => None,
        }
    }
}
