// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/mod.rs
//
// UI-independent logic: documents, bundles, zoom and input state.

pub mod document;
pub mod gesture;
pub mod hud;
pub mod library;
pub mod zoom;
