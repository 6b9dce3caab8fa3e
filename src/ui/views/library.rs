// SPDX-License-Identifier: GPL-3.0-or-later
// src/ui/views/library.rs
//
// Bundled document list.

use cosmic::iced::{Alignment, Length};
use cosmic::widget::{button, column, container, icon, scrollable, text};
use cosmic::Element;

use crate::domain::document::core::document::DocumentRef;
use crate::fl;
use crate::ui::message::AppMessage;

const DOCUMENT_ICON: &str = "x-office-document-symbolic";

pub fn view(documents: &[DocumentRef]) -> Element<'_, AppMessage> {
    let heading = column()
        .spacing(8)
        .align_x(Alignment::Center)
        .push(icon::from_name(DOCUMENT_ICON).size(48).icon())
        .push(text::title3(fl!("app-title")));

    // An empty bundle keeps showing the searching state.
    if documents.is_empty() {
        let content = heading.push(text::body(fl!("loading-library")));
        return container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .center(Length::Fill)
            .into();
    }

    let list = documents.iter().fold(
        column().spacing(4).width(Length::Fill),
        |list, document| {
            list.push(
                button::text(document.name())
                    .on_press(AppMessage::OpenDocument(document.clone()))
                    .width(Length::Fill),
            )
        },
    );

    let content = column()
        .spacing(16)
        .padding(16)
        .align_x(Alignment::Center)
        .push(heading)
        .push(text::heading(fl!("open-pdf")))
        .push(list);

    scrollable(content).into()
}
