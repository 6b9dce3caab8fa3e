// SPDX-License-Identifier: GPL-3.0-or-later
// src/ui/app.rs
//
// COSMIC application wiring and main app struct.

use super::message::AppMessage;
use super::model::AppModel;
use super::update::{self, UpdateResult};
use crate::ui::views;

use std::time::Duration;

use cosmic::app::Core;
use cosmic::cosmic_config::{self, CosmicConfigEntry};
use cosmic::iced::keyboard::{self, Key, Modifiers, key::Named};
use cosmic::iced::{Subscription, task, window};
use cosmic::{Action, ApplicationExt, Element, Task};

use crate::Args;
use crate::config::AppConfig;
use crate::domain::document::core::document::DocumentRef;
use crate::domain::hud::HideToken;
use crate::domain::library::{DirectoryBundle, DocumentBundle, EmbeddedBundle};
use crate::fl;

/// Flags passed from `main` into the application.
#[derive(Debug, Clone)]
pub enum Flags {
    Args(Args),
}

/// Main application type.
pub struct FolhetoApp {
    core: Core,
    pub model: AppModel,
    pub config: AppConfig,
    bundle: Box<dyn DocumentBundle>,
    /// Pending zoom indicator hide, aborted when superseded.
    hud_task: Option<task::Handle>,
}

impl cosmic::Application for FolhetoApp {
    type Executor = cosmic::SingleThreadExecutor;
    type Flags = Flags;
    type Message = AppMessage;

    const APP_ID: &'static str = "org.codeberg.folheto.Folheto";

    fn core(&self) -> &Core {
        &self.core
    }

    fn core_mut(&mut self) -> &mut Core {
        &mut self.core
    }

    fn init(core: Core, flags: Self::Flags) -> (Self, Task<Action<Self::Message>>) {
        // Load persisted config.
        let config = match cosmic_config::Config::new(Self::APP_ID, AppConfig::VERSION) {
            Ok(handler) => AppConfig::get_entry(&handler).unwrap_or_else(|(errors, config)| {
                for error in errors {
                    log::warn!("Invalid config entry: {error}");
                }
                config
            }),
            Err(e) => {
                log::warn!("Config unavailable, using defaults: {e}");
                AppConfig::default()
            }
        };

        let Flags::Args(args) = flags;

        // CLI directory takes priority over the configured one; fall back to
        // the documents compiled into the binary.
        let bundle: Box<dyn DocumentBundle> =
            match args.documents.or_else(|| config.documents_dir.clone()) {
                Some(dir) => {
                    log::info!("Reading documents from {}", dir.display());
                    Box::new(DirectoryBundle::new(dir))
                }
                None => Box::new(EmbeddedBundle),
            };

        let model = AppModel::new(args.document.map(DocumentRef::new));

        let mut app = Self {
            core,
            model,
            config,
            bundle,
            hud_task: None,
        };
        app.set_header_title(fl!("app-title"));

        (app, Task::done(Action::App(AppMessage::LoadLibrary)))
    }

    fn update(&mut self, message: Self::Message) -> Task<Action<Self::Message>> {
        if matches!(message, AppMessage::CloseDocument) {
            self.cancel_hud_hide();
        }

        let result = update::update(&mut self.model, self.bundle.as_ref(), &self.config, &message);
        self.refresh_header_title();

        match result {
            UpdateResult::None => Task::none(),
            UpdateResult::Defer(next) => Task::done(Action::App(next)),
            UpdateResult::HideHudAfter { token, delay } => self.schedule_hud_hide(token, delay),
        }
    }

    fn header_start(&self) -> Vec<Element<'_, Self::Message>> {
        views::header::start(&self.model)
    }

    fn header_end(&self) -> Vec<Element<'_, Self::Message>> {
        views::header::end(&self.model)
    }

    fn view(&self) -> Element<'_, Self::Message> {
        views::view(&self.model)
    }

    fn on_close_requested(&self, _id: window::Id) -> Option<Self::Message> {
        None
    }

    fn subscription(&self) -> Subscription<Self::Message> {
        keyboard::on_key_press(handle_key_press)
    }
}

impl FolhetoApp {
    /// Replace any pending indicator hide with one firing after `delay`.
    fn schedule_hud_hide(
        &mut self,
        token: HideToken,
        delay: Duration,
    ) -> Task<Action<AppMessage>> {
        self.cancel_hud_hide();

        let (hide, handle) = Task::perform(tokio::time::sleep(delay), move |()| {
            Action::App(AppMessage::HideHud(token))
        })
        .abortable();

        self.hud_task = Some(handle);
        hide
    }

    fn cancel_hud_hide(&mut self) {
        if let Some(handle) = self.hud_task.take() {
            handle.abort();
        }
    }

    fn refresh_header_title(&mut self) {
        let title = match self.model.viewer() {
            Some(viewer) => format!("{} · {}", fl!("document-title"), viewer.document),
            None => fl!("app-title"),
        };
        self.set_header_title(title);
    }
}

/// Map raw key presses + modifiers into high-level application messages.
fn handle_key_press(key: Key, modifiers: Modifiers) -> Option<AppMessage> {
    use AppMessage::{CloseDocument, CyclePreset, ToggleZoomMode, ZoomStep};

    // Ignore key presses when command-style modifiers are pressed.
    if modifiers.command() || modifiers.alt() || modifiers.logo() || modifiers.control() {
        return None;
    }

    match key.as_ref() {
        Key::Named(Named::Escape) => Some(CloseDocument),

        // Zoom.
        Key::Character(ch) if ch.eq_ignore_ascii_case("z") => Some(ToggleZoomMode),
        Key::Character(ch) if ch.eq_ignore_ascii_case("d") => Some(CyclePreset),
        Key::Character("+" | "=") => Some(ZoomStep(1)),
        Key::Character("-") => Some(ZoomStep(-1)),

        _ => None,
    }
}
