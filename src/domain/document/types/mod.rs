// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/document/types/mod.rs

pub mod portable;
