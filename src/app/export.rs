// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/export.rs
//
// Export of the cropped region as encoded raster bytes.

use std::io::Cursor;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use image::{DynamicImage, ImageFormat};

use super::surface::ImageSurface;
use super::view::Canvas;
use crate::domain::CropResult;
use crate::domain::crop::Square;

/// A cropped image serialized into a self-contained payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedImage {
    pub width: u32,
    pub height: u32,
    pub format: ImageFormat,
    /// Encoded bytes; empty for a zero-area crop.
    pub bytes: Vec<u8>,
}

impl ExportedImage {
    fn empty(format: ImageFormat) -> Self {
        Self {
            width: 0,
            height: 0,
            format,
            bytes: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn mime_type(&self) -> &'static str {
        self.format.to_mime_type()
    }

    /// Encode as a `data:` URL; a zero-area crop yields `data:,`.
    pub fn to_data_url(&self) -> String {
        if self.is_empty() {
            return "data:,".to_string();
        }
        format!(
            "data:{};base64,{}",
            self.mime_type(),
            STANDARD.encode(&self.bytes)
        )
    }
}

/// Copy the region under `square` out of the source image, unscaled.
///
/// Pixels outside the source stay transparent. The square is not checked
/// against the image bounds.
pub fn export(
    surface: &ImageSurface,
    square: Square,
    format: ImageFormat,
) -> CropResult<ExportedImage> {
    let side = square.side.floor();
    if !(side >= 1.0) {
        log::debug!("Exporting empty image for side {}", square.side);
        return Ok(ExportedImage::empty(format));
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let side = side as u32;

    let mut canvas = Canvas::new(side, side)?;
    canvas.draw_pixmap(surface.source(), -square.x as f32, -square.y as f32);

    let mut image = canvas.to_image();
    if format == ImageFormat::Jpeg {
        // JPEG has no alpha channel.
        image = DynamicImage::ImageRgb8(image.to_rgb8());
    }

    let mut bytes = Vec::new();
    image.write_to(&mut Cursor::new(&mut bytes), format)?;

    log::info!(
        "Exported {}x{} crop at ({}, {}) as {}",
        side,
        side,
        square.x,
        square.y,
        format.to_mime_type()
    );

    Ok(ExportedImage {
        width: side,
        height: side,
        format,
        bytes,
    })
}
