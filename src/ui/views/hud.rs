// SPDX-License-Identifier: GPL-3.0-or-later
// src/ui/views/hud.rs
//
// Transient zoom level indicator.

use cosmic::iced::{Alignment, Length};
use cosmic::widget::{container, text};
use cosmic::Element;

use crate::domain::zoom::ZoomState;
use crate::ui::message::AppMessage;

pub fn view(zoom: &ZoomState) -> Element<'_, AppMessage> {
    let badge = container(text::title3(zoom.label()))
        .padding([4, 12])
        .class(cosmic::theme::Container::Card);

    container(badge)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(12)
        .align_x(Alignment::Center)
        .align_y(Alignment::Start)
        .into()
}
