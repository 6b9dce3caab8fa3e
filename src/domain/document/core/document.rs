// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/document/core/document.rs
//
// Core document traits and value types shared by backends and the UI.

use std::fmt;

use cairo::Context;
use image::RgbaImage;

use super::error::DocumentError;

/// Result alias for document operations.
pub type DocResult<T> = Result<T, DocumentError>;

/// Filename of a bundled PDF resource.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DocumentRef(String);

impl DocumentRef {
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self(name.into())
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DocumentRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A single page that can be drawn onto a cairo context.
pub trait PdfPage {
    /// Size of the media box in page units (width, height).
    fn media_box(&self) -> (f64, f64);

    /// Draw the page content in page units onto `context`.
    fn draw(&self, context: &Context);
}

/// An opened PDF document.
pub trait PdfDocument {
    /// Total number of pages.
    fn page_count(&self) -> usize;

    /// Resolve a page by its 1-based number.
    /// Returns `None` if the page cannot be resolved.
    fn page(&self, number: usize) -> Option<Box<dyn PdfPage + '_>>;
}

/// A page rasterized into a flat RGBA bitmap.
#[derive(Debug, Clone)]
pub struct RenderedPage {
    /// 1-based page number in the source document.
    pub number: usize,
    /// Non-premultiplied 8-bit RGBA pixels.
    pub image: RgbaImage,
}

impl RenderedPage {
    #[must_use]
    pub fn dimensions(&self) -> (u32, u32) {
        self.image.dimensions()
    }
}
