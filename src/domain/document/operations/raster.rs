// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/document/operations/raster.rs
//
// Page rasterization: media box -> flat RGBA bitmap.

use std::io::Cursor;

use cairo::{Context, Format, ImageSurface};
use image::{ImageReader, RgbaImage};

use crate::constant::MIN_PIXMAP_SIZE;
use crate::domain::document::core::document::{PdfDocument, PdfPage, RenderedPage};
use crate::domain::document::core::error::DocumentError;

/// Affine mapping from page units into bitmap pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageTransform {
    pub scale: f64,
    pub offset_x: f64,
    pub offset_y: f64,
}

impl PageTransform {
    pub const IDENTITY: Self = Self {
        scale: 1.0,
        offset_x: 0.0,
        offset_y: 0.0,
    };

    fn apply(&self, context: &Context) {
        context.translate(self.offset_x, self.offset_y);
        context.scale(self.scale, self.scale);
    }
}

/// Bitmap size for a media box at the given scale (truncated, never below 1x1).
#[must_use]
pub fn target_size(media_box: (f64, f64), scale: f64) -> (u32, u32) {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let width = (media_box.0 * scale) as u32;
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let height = (media_box.1 * scale) as u32;

    (width.max(MIN_PIXMAP_SIZE), height.max(MIN_PIXMAP_SIZE))
}

/// Aspect-preserving fit of `media_box` into a `target` rectangle, centred.
#[must_use]
pub fn fit_transform(media_box: (f64, f64), target: (u32, u32)) -> PageTransform {
    let (width, height) = media_box;
    if width <= 0.0 || height <= 0.0 {
        return PageTransform::IDENTITY;
    }

    let target_width = f64::from(target.0);
    let target_height = f64::from(target.1);
    let scale = (target_width / width).min(target_height / height);

    PageTransform {
        scale,
        offset_x: (target_width - width * scale) / 2.0,
        offset_y: (target_height - height * scale) / 2.0,
    }
}

/// Rasterize a single page at `scale` times its media box.
pub fn rasterize_page(page: &dyn PdfPage, scale: f64) -> anyhow::Result<RgbaImage> {
    let media_box = page.media_box();
    let (width, height) = target_size(media_box, scale);

    let surface = ImageSurface::create(Format::ARgb32, width as i32, height as i32)
        .map_err(|e| anyhow::anyhow!("Failed to create Cairo surface: {e}"))?;

    let context = Context::new(&surface)
        .map_err(|e| anyhow::anyhow!("Failed to create Cairo context: {e}"))?;

    // Fill with white background.
    context.set_source_rgb(1.0, 1.0, 1.0);
    context
        .paint()
        .map_err(|e| anyhow::anyhow!("Failed to paint background: {e}"))?;

    fit_transform(media_box, (width, height)).apply(&context);
    page.draw(&context);

    drop(context);
    surface.flush();

    // The PNG round-trip un-premultiplies cairo's native ARGB32 layout.
    let mut png_data: Vec<u8> = Vec::new();
    surface
        .write_to_png(&mut png_data)
        .map_err(|e| anyhow::anyhow!("Failed to write PNG: {e}"))?;

    let image = ImageReader::new(Cursor::new(png_data))
        .with_guessed_format()
        .map_err(|e| anyhow::anyhow!("Failed to read PNG format: {e}"))?
        .decode()
        .map_err(|e| anyhow::anyhow!("Failed to decode PNG: {e}"))?;

    Ok(image.to_rgba8())
}

/// Rasterize every page of `document` in order.
///
/// Pages that fail to resolve or render are logged and omitted, so the
/// result may be shorter than the page count but is never reordered.
pub fn render_document(document: &dyn PdfDocument, scale: f64) -> Vec<RenderedPage> {
    let page_count = document.page_count();
    let mut pages = Vec::with_capacity(page_count);

    for number in 1..=page_count {
        let Some(page) = document.page(number) else {
            log::warn!("{}", DocumentError::PageUnavailable { number });
            continue;
        };

        match rasterize_page(page.as_ref(), scale) {
            Ok(image) => pages.push(RenderedPage { number, image }),
            Err(e) => log::warn!("Failed to render page {number}: {e}"),
        }
    }

    pages
}
