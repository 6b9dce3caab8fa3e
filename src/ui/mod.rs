// SPDX-License-Identifier: GPL-3.0-or-later
// src/ui/mod.rs
//
// COSMIC user interface: application, state, messages and views.

pub mod app;
pub mod message;
pub mod model;
pub mod update;
pub mod views;

pub use app::{Flags, FolhetoApp};
pub use message::AppMessage;
