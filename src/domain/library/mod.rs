// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/library/mod.rs
//
// Bundled document discovery.

mod directory;
mod embedded;

pub use directory::DirectoryBundle;
pub use embedded::EmbeddedBundle;

use std::path::Path;

use crate::constant::PDF_EXTENSION;
use crate::domain::document::core::document::{DocResult, DocumentRef, PdfDocument};

/// A flat collection of PDF resources shipped with the application.
pub trait DocumentBundle {
    /// Every PDF resource at the bundle root, in no particular order.
    fn resources(&self) -> Vec<DocumentRef>;

    /// Open a resource by name.
    fn open(&self, document: &DocumentRef) -> DocResult<Box<dyn PdfDocument>>;
}

/// List the bundle's documents sorted lexicographically by filename.
pub fn list_documents(bundle: &dyn DocumentBundle) -> Vec<DocumentRef> {
    let mut documents = bundle.resources();
    documents.sort();
    log::debug!("Found {} bundled document(s)", documents.len());
    documents
}

/// Whether a resource name denotes a top-level PDF file.
fn is_top_level_pdf(name: &str) -> bool {
    if name.contains('/') || name.contains('\\') {
        return false;
    }

    Path::new(name)
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case(PDF_EXTENSION))
}
