// SPDX-License-Identifier: GPL-3.0-or-later
// src/ui/views/mod.rs
//
// View composition: one view per screen plus header controls.

pub mod header;
mod hud;
mod library;
mod viewer;

use cosmic::Element;

use crate::ui::message::AppMessage;
use crate::ui::model::{AppModel, Screen};

/// Render the main window content for the current screen.
pub fn view(model: &AppModel) -> Element<'_, AppMessage> {
    match &model.screen {
        Screen::Library => library::view(&model.documents),
        Screen::Viewer(viewer) => viewer::view(viewer),
    }
}
