// SPDX-License-Identifier: GPL-3.0-or-later
// src/main.rs
//
// Entry point: command line, logging, localization and the COSMIC runtime.

mod config;
mod constant;
mod domain;
mod i18n;
mod ui;

use std::path::PathBuf;

use clap::Parser;

use crate::ui::{Flags, FolhetoApp};

/// Browse and zoom the PDF documents bundled with Folheto.
#[derive(Parser, Debug, Clone)]
#[command(version, about)]
pub struct Args {
    /// Bundled document to open directly (e.g. `documento.pdf`).
    pub document: Option<String>,

    /// Read documents from this directory instead of the built-in bundle.
    #[arg(long, value_name = "DIR")]
    pub documents: Option<PathBuf>,
}

fn main() -> cosmic::iced::Result {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn,folheto=info"))
        .init();

    let args = Args::parse();

    let requested_languages = i18n_embed::DesktopLanguageRequester::requested_languages();
    i18n::init(&requested_languages);

    let settings = cosmic::app::Settings::default()
        .size(cosmic::iced::Size::new(420.0, 640.0));

    cosmic::app::run::<FolhetoApp>(settings, Flags::Args(args))
}
