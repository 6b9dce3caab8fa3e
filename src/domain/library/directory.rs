// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/library/directory.rs
//
// Documents read from a directory on disk (no subdirectory traversal).

use std::fs;
use std::path::PathBuf;

use super::{DocumentBundle, is_top_level_pdf};
use crate::domain::document::core::document::{DocResult, DocumentRef, PdfDocument};
use crate::domain::document::core::error::DocumentError;
use crate::domain::document::types::portable::PortableDocument;

/// Bundle backed by the top-level PDFs of a directory.
#[derive(Debug, Clone)]
pub struct DirectoryBundle {
    root: PathBuf,
}

impl DirectoryBundle {
    pub fn new<P: Into<PathBuf>>(root: P) -> Self {
        Self { root: root.into() }
    }
}

impl DocumentBundle for DirectoryBundle {
    fn resources(&self) -> Vec<DocumentRef> {
        let entries = match fs::read_dir(&self.root) {
            Ok(entries) => entries,
            Err(e) => {
                log::error!("Failed to read {}: {}", self.root.display(), e);
                return Vec::new();
            }
        };

        entries
            .filter_map(Result::ok)
            .filter(|entry| entry.file_type().is_ok_and(|t| t.is_file()))
            .filter_map(|entry| entry.file_name().into_string().ok())
            .filter(|name| is_top_level_pdf(name))
            .map(DocumentRef::new)
            .collect()
    }

    fn open(&self, document: &DocumentRef) -> DocResult<Box<dyn PdfDocument>> {
        if !is_top_level_pdf(document.name()) {
            return Err(DocumentError::resource(document.name(), "not a bundled PDF"));
        }

        let portable = PortableDocument::open(&self.root.join(document.name()))?;
        Ok(Box::new(portable))
    }
}
