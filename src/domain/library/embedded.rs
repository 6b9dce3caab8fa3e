// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/library/embedded.rs
//
// Documents compiled into the binary.

use rust_embed::RustEmbed;

use super::{DocumentBundle, is_top_level_pdf};
use crate::domain::document::core::document::{DocResult, DocumentRef, PdfDocument};
use crate::domain::document::core::error::DocumentError;
use crate::domain::document::types::portable::PortableDocument;

#[derive(RustEmbed)]
#[folder = "resources/documents/"]
struct Documents;

/// Bundle backed by the PDFs in `resources/documents/`.
#[derive(Debug, Default, Clone, Copy)]
pub struct EmbeddedBundle;

impl DocumentBundle for EmbeddedBundle {
    fn resources(&self) -> Vec<DocumentRef> {
        Documents::iter()
            .filter(|name| is_top_level_pdf(name))
            .map(|name| DocumentRef::new(name.into_owned()))
            .collect()
    }

    fn open(&self, document: &DocumentRef) -> DocResult<Box<dyn PdfDocument>> {
        let file = Documents::get(document.name())
            .ok_or_else(|| DocumentError::resource(document.name(), "not bundled"))?;

        let portable = PortableDocument::from_bytes(document.name(), file.data.into_owned())?;
        Ok(Box::new(portable))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constant::PDF_RENDER_SCALE;
    use crate::domain::document::operations::raster::render_document;
    use crate::domain::library::list_documents;

    #[test]
    fn sample_document_is_bundled() {
        let documents = list_documents(&EmbeddedBundle);
        assert!(documents.contains(&DocumentRef::new("documento.pdf")));
    }

    #[test]
    fn sample_document_opens() {
        let document = EmbeddedBundle
            .open(&DocumentRef::new("documento.pdf"))
            .unwrap();
        assert_eq!(document.page_count(), 2);
    }

    #[test]
    fn sample_document_renders_at_double_scale() {
        let document = EmbeddedBundle
            .open(&DocumentRef::new("documento.pdf"))
            .unwrap();
        let pages = render_document(document.as_ref(), PDF_RENDER_SCALE);

        assert_eq!(pages.len(), 2);
        assert_eq!(pages[0].dimensions(), (1224, 1584));
        // Top-left corner is background.
        assert_eq!(pages[0].image.get_pixel(0, 0).0, [255, 255, 255, 255]);
    }

    #[test]
    fn missing_resource_is_unavailable() {
        let result = EmbeddedBundle.open(&DocumentRef::new("nope.pdf"));
        assert!(matches!(
            result,
            Err(DocumentError::ResourceUnavailable { .. })
        ));
    }
}
