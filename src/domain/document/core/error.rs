// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/document/core/error.rs
//
// Document error taxonomy.

use thiserror::Error;

/// Errors raised while opening or paging through a document.
///
/// Neither variant is shown to the user: callers log and omit.
#[derive(Error, Debug)]
pub enum DocumentError {
    /// The resource is missing from the bundle or cannot be parsed as a PDF.
    #[error("document {name} unavailable: {reason}")]
    ResourceUnavailable { name: String, reason: String },

    /// A single page could not be resolved.
    #[error("page {number} unavailable")]
    PageUnavailable { number: usize },
}

impl DocumentError {
    pub fn resource<N: Into<String>, R: ToString>(name: N, reason: R) -> Self {
        Self::ResourceUnavailable {
            name: name.into(),
            reason: reason.to_string(),
        }
    }
}
