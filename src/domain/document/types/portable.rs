// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/document/types/portable.rs
//
// Portable documents (PDF) with poppler backend.

use std::path::Path;

use cairo::Context;
use poppler::{PopplerDocument, PopplerPage};

use crate::domain::document::core::document::{DocResult, PdfDocument, PdfPage};
use crate::domain::document::core::error::DocumentError;

/// Represents a portable document (PDF).
pub struct PortableDocument {
    /// The parsed PDF document.
    document: PopplerDocument,
    /// Backing bytes for documents parsed from memory.
    /// Declared after `document` so the parser is dropped first.
    _data: Option<Vec<u8>>,
    /// Total number of pages.
    num_pages: usize,
}

impl PortableDocument {
    /// Open a PDF document from disk.
    pub fn open(path: &Path) -> DocResult<Self> {
        let name = path.display().to_string();
        if !path.is_file() {
            return Err(DocumentError::resource(name, "file not found"));
        }

        let document = PopplerDocument::new_from_file(path, None)
            .map_err(|e| DocumentError::resource(name, format!("failed to parse PDF: {e}")))?;

        Ok(Self::from_parts(document, None))
    }

    /// Parse a PDF document held in memory.
    pub fn from_bytes(name: &str, bytes: Vec<u8>) -> DocResult<Self> {
        let mut data = bytes;
        let document = PopplerDocument::new_from_data(&mut data, None)
            .map_err(|e| DocumentError::resource(name, format!("failed to parse PDF: {e}")))?;

        Ok(Self::from_parts(document, Some(data)))
    }

    fn from_parts(document: PopplerDocument, data: Option<Vec<u8>>) -> Self {
        let num_pages = document.get_n_pages();
        Self {
            document,
            _data: data,
            num_pages,
        }
    }
}

impl PdfDocument for PortableDocument {
    fn page_count(&self) -> usize {
        self.num_pages
    }

    fn page(&self, number: usize) -> Option<Box<dyn PdfPage + '_>> {
        let index = number.checked_sub(1)?;
        let page = self.document.get_page(index)?;
        Some(Box::new(PortablePage { page }))
    }
}

/// A single poppler page.
struct PortablePage {
    page: PopplerPage,
}

impl PdfPage for PortablePage {
    fn media_box(&self) -> (f64, f64) {
        self.page.get_size()
    }

    fn draw(&self, context: &Context) {
        self.page.render(context);
    }
}
