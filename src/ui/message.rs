// SPDX-License-Identifier: GPL-3.0-or-later
// src/ui/message.rs
//
// Application messages: events, user actions, and internal signals.

use crate::domain::document::core::document::DocumentRef;
use crate::domain::gesture::RotaryDelta;
use crate::domain::hud::HideToken;

#[derive(Debug, Clone)]
pub enum AppMessage {
    // Library.
    LoadLibrary,
    OpenDocument(DocumentRef),
    CloseDocument,

    // Viewer.
    RenderPages,

    // Zoom.
    ToggleZoomMode,
    Rotary(RotaryDelta),
    ZoomStep(i32),
    Tap,
    CyclePreset,
    HideHud(HideToken),
}
