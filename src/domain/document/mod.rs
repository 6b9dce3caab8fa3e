// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/document/mod.rs
//
// Document module root: traits, backends and rasterization.

pub mod core;
pub mod operations;
pub mod types;
