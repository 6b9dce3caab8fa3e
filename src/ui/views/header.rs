// SPDX-License-Identifier: GPL-3.0-or-later
// src/ui/views/header.rs
//
// Header bar controls.

use cosmic::widget::button;
use cosmic::Element;

use crate::fl;
use crate::ui::message::AppMessage;
use crate::ui::model::AppModel;

/// Left side: close button while a document is open.
pub fn start(model: &AppModel) -> Vec<Element<'_, AppMessage>> {
    if model.viewer().is_none() {
        return Vec::new();
    }

    vec![
        button::text(fl!("close"))
            .on_press(AppMessage::CloseDocument)
            .into(),
    ]
}

/// Right side: zoom mode toggle while a document is open.
pub fn end(model: &AppModel) -> Vec<Element<'_, AppMessage>> {
    let Some(viewer) = model.viewer() else {
        return Vec::new();
    };

    let toggle = if viewer.zoom.is_enabled() {
        button::suggested(fl!("zoom-mode-on"))
    } else {
        button::standard(fl!("zoom-mode-off"))
    };

    vec![toggle.on_press(AppMessage::ToggleZoomMode).into()]
}
