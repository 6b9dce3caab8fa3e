// SPDX-License-Identifier: GPL-3.0-or-later
// src/ui/update.rs
//
// Message handling. Pure with respect to the runtime: side effects are
// returned as `UpdateResult` and turned into tasks by the application.

use std::time::{Duration, Instant};

use super::message::AppMessage;
use super::model::{AppModel, PageView, Screen, ViewerState};
use crate::config::AppConfig;
use crate::constant::PDF_RENDER_SCALE;
use crate::domain::document::operations::raster::render_document;
use crate::domain::hud::HideToken;
use crate::domain::library::{DocumentBundle, list_documents};
use crate::domain::zoom::ZoomEvent;

/// Follow-up work requested by `update`.
#[derive(Debug)]
pub enum UpdateResult {
    None,
    /// Dispatch this message on the next cycle.
    Defer(AppMessage),
    /// Hide the zoom indicator after `delay`, replacing any pending hide.
    HideHudAfter { token: HideToken, delay: Duration },
}

pub fn update(
    model: &mut AppModel,
    bundle: &dyn DocumentBundle,
    config: &AppConfig,
    message: &AppMessage,
) -> UpdateResult {
    match message {
        AppMessage::LoadLibrary => {
            model.documents = list_documents(bundle);

            if let Some(requested) = model.pending_open.take() {
                if model.documents.contains(&requested) {
                    return UpdateResult::Defer(AppMessage::OpenDocument(requested));
                }
                log::error!("Requested document {requested} is not bundled");
            }
        }

        AppMessage::OpenDocument(document) => {
            log::info!("Opening {document}");
            model.screen = Screen::Viewer(ViewerState::new(document.clone(), config));
            // Render after the loading state has been shown once.
            return UpdateResult::Defer(AppMessage::RenderPages);
        }

        AppMessage::CloseDocument => {
            model.screen = Screen::Library;
        }

        AppMessage::RenderPages => {
            if let Some(viewer) = model.viewer_mut() {
                render_pages(viewer, bundle);
            }
        }

        AppMessage::ToggleZoomMode => {
            if let Some(viewer) = model.viewer_mut() {
                viewer.rotary.reset();
                return apply_zoom(viewer, ZoomEvent::ToggleMode, config);
            }
        }

        AppMessage::Rotary(delta) => {
            if let Some(viewer) = model.viewer_mut() {
                let detents = viewer.rotary.feed(*delta);
                if detents != 0 {
                    return apply_zoom(viewer, ZoomEvent::Rotate(detents), config);
                }
            }
        }

        AppMessage::ZoomStep(detents) => {
            if let Some(viewer) = model.viewer_mut() {
                return apply_zoom(viewer, ZoomEvent::Rotate(*detents), config);
            }
        }

        AppMessage::Tap => {
            if let Some(viewer) = model.viewer_mut()
                && viewer.zoom.is_enabled()
                && viewer.taps.register(Instant::now())
            {
                return apply_zoom(viewer, ZoomEvent::CyclePreset, config);
            }
        }

        AppMessage::CyclePreset => {
            if let Some(viewer) = model.viewer_mut() {
                return apply_zoom(viewer, ZoomEvent::CyclePreset, config);
            }
        }

        AppMessage::HideHud(token) => {
            if let Some(viewer) = model.viewer_mut() {
                viewer.hud.expire(*token);
            }
        }
    }

    UpdateResult::None
}

/// Open the viewer's document and rasterize all of its pages.
/// Failures are logged only; the viewer then stays in its loading state.
fn render_pages(viewer: &mut ViewerState, bundle: &dyn DocumentBundle) {
    if !viewer.pages.is_empty() {
        return;
    }

    let document = match bundle.open(&viewer.document) {
        Ok(document) => document,
        Err(e) => {
            log::error!("{e}");
            return;
        }
    };

    viewer.pages = render_document(document.as_ref(), PDF_RENDER_SCALE)
        .into_iter()
        .map(PageView::from)
        .collect();

    log::info!(
        "Rendered {} of {} page(s) from {}",
        viewer.pages.len(),
        document.page_count(),
        viewer.document
    );
}

/// Run the zoom reducer and schedule the indicator when the scale moved.
fn apply_zoom(viewer: &mut ViewerState, event: ZoomEvent, config: &AppConfig) -> UpdateResult {
    let next = viewer.zoom.reduce(event);
    let changed = viewer.zoom.scale_changed(&next);
    log::debug!("Zoom {event:?}: {} -> {}", viewer.zoom.label(), next.label());
    viewer.zoom = next;

    if !changed {
        return UpdateResult::None;
    }

    UpdateResult::HideHudAfter {
        token: viewer.hud.show(),
        delay: config.hud_duration(),
    }
}
