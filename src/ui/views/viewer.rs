// SPDX-License-Identifier: GPL-3.0-or-later
// src/ui/views/viewer.rs
//
// Render the page column of the open document.

use cosmic::iced::mouse::ScrollDelta;
use cosmic::iced::widget::mouse_area;
use cosmic::iced::widget::scrollable::{Direction, Scrollbar};
use cosmic::iced::{Alignment, Length};
use cosmic::iced_widget::stack;
use cosmic::widget::{column, container, image, scrollable, text};
use cosmic::Element;

use super::hud;
use crate::constant::PAGE_SPACING;
use crate::domain::gesture::RotaryDelta;
use crate::fl;
use crate::ui::message::AppMessage;
use crate::ui::model::ViewerState;

pub fn view(viewer: &ViewerState) -> Element<'_, AppMessage> {
    if viewer.is_loading() {
        return container(text::body(fl!("loading-pdf")))
            .width(Length::Fill)
            .height(Length::Fill)
            .center(Length::Fill)
            .into();
    }

    let scale = viewer.zoom.effective_scale();

    let pages = viewer.pages.iter().fold(
        column().spacing(PAGE_SPACING).align_x(Alignment::Center),
        |pages, page| {
            let (width, height) = page.logical_size();
            pages.push(
                image(page.handle.clone())
                    .width(Length::Fixed(width * scale))
                    .height(Length::Fixed(height * scale)),
            )
        },
    );

    let mut pages = mouse_area(pages).on_press(AppMessage::Tap);
    // In zoom mode the wheel is captured here, before the scrollable sees it.
    if viewer.captures_wheel() {
        pages = pages.on_scroll(|delta| AppMessage::Rotary(rotary_delta(delta)));
    }

    let canvas = scrollable(pages)
        .direction(Direction::Both {
            vertical: Scrollbar::default(),
            horizontal: Scrollbar::default(),
        })
        .width(Length::Fill)
        .height(Length::Fill);

    if viewer.hud.is_visible() {
        stack![canvas, hud::view(&viewer.zoom)].into()
    } else {
        canvas.into()
    }
}

/// Vertical wheel movement as rotary input.
fn rotary_delta(delta: ScrollDelta) -> RotaryDelta {
    match delta {
        ScrollDelta::Lines { y, .. } => RotaryDelta::Lines(y),
        ScrollDelta::Pixels { y, .. } => RotaryDelta::Pixels(y),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wheel_maps_vertical_movement() {
        assert_eq!(
            rotary_delta(ScrollDelta::Lines { x: 3.0, y: -1.0 }),
            RotaryDelta::Lines(-1.0)
        );
        assert_eq!(
            rotary_delta(ScrollDelta::Pixels { x: 0.0, y: 24.0 }),
            RotaryDelta::Pixels(24.0)
        );
    }
}
