// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/surface.rs
//
// Source image loading and the decoded surface a cropper draws from.

use std::io::Cursor;
use std::path::PathBuf;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use image::{DynamicImage, GenericImageView, ImageReader, Rgba, RgbaImage};
use resvg::tiny_skia::{ColorU8, IntSize, Pixmap, PixmapRef};

use super::view::Canvas;
use crate::domain::{CropError, CropResult};

/// Where the raw image bytes come from.
#[derive(Debug, Clone)]
pub enum ImageSource {
    /// Encoded image bytes (PNG, JPEG, GIF, ...).
    Bytes(Vec<u8>),
    /// A file on disk.
    Path(PathBuf),
    /// A `data:<mime>;base64,<payload>` URL, as produced by a file reader.
    DataUrl(String),
}

impl ImageSource {
    /// Read the encoded bytes behind this source.
    pub fn read(self) -> CropResult<Vec<u8>> {
        match self {
            Self::Bytes(bytes) => Ok(bytes),
            Self::Path(path) => Ok(std::fs::read(path)?),
            Self::DataUrl(url) => decode_data_url(&url),
        }
    }

    /// Read and decode the source into a surface.
    pub fn load(self) -> CropResult<ImageSurface> {
        let bytes = self.read()?;
        ImageSurface::decode(&bytes)
    }
}

fn decode_data_url(url: &str) -> CropResult<Vec<u8>> {
    let rest = url
        .strip_prefix("data:")
        .ok_or_else(|| CropError::InvalidDataUrl("missing `data:` scheme".into()))?;
    let (meta, payload) = rest
        .split_once(',')
        .ok_or_else(|| CropError::InvalidDataUrl("missing `,` separator".into()))?;

    if !meta.ends_with(";base64") {
        return Err(CropError::InvalidDataUrl(
            "only base64 payloads are supported".into(),
        ));
    }

    Ok(STANDARD.decode(payload.trim())?)
}

/// A decoded source image plus the offscreen canvas sized to it.
///
/// Dimensions are fixed once decoded.
pub struct ImageSurface {
    /// Decoded source pixels (premultiplied).
    source: Pixmap,
    /// Drawing surface the editor composition is rendered into.
    canvas: Canvas,
}

impl ImageSurface {
    /// Decode encoded image bytes.
    pub fn decode(bytes: &[u8]) -> CropResult<Self> {
        let image = ImageReader::new(Cursor::new(bytes))
            .with_guessed_format()?
            .decode()?;
        Self::from_image(&image)
    }

    pub fn from_image(image: &DynamicImage) -> CropResult<Self> {
        let source = image_to_pixmap(image)?;
        let canvas = Canvas::new(source.width(), source.height())?;

        Ok(Self { source, canvas })
    }

    /// Returns the natural pixel dimensions (width, height).
    pub fn dimensions(&self) -> (u32, u32) {
        (self.source.width(), self.source.height())
    }

    pub fn natural_width(&self) -> u32 {
        self.source.width()
    }

    pub fn natural_height(&self) -> u32 {
        self.source.height()
    }

    pub fn source(&self) -> PixmapRef<'_> {
        self.source.as_ref()
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    /// Borrow the source for reading and the canvas for drawing at once.
    pub(crate) fn split_mut(&mut self) -> (PixmapRef<'_>, &mut Canvas) {
        (self.source.as_ref(), &mut self.canvas)
    }
}

impl std::fmt::Debug for ImageSurface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (width, height) = self.dimensions();
        write!(f, "ImageSurface({width}x{height})")
    }
}

/// Convert a decoded image into a premultiplied pixmap.
pub(crate) fn image_to_pixmap(image: &DynamicImage) -> CropResult<Pixmap> {
    let (width, height) = image.dimensions();
    let size = IntSize::from_wh(width, height).ok_or(CropError::Surface { width, height })?;

    let rgba = image.to_rgba8();
    let mut data = Vec::with_capacity(rgba.as_raw().len());
    for pixel in rgba.pixels() {
        let [r, g, b, a] = pixel.0;
        let premultiplied = ColorU8::from_rgba(r, g, b, a).premultiply();
        data.extend_from_slice(&[
            premultiplied.red(),
            premultiplied.green(),
            premultiplied.blue(),
            premultiplied.alpha(),
        ]);
    }

    Pixmap::from_vec(data, size).ok_or(CropError::Surface { width, height })
}

/// Convert a tiny_skia pixmap to a `DynamicImage`.
pub(crate) fn pixmap_to_image(pixmap: &Pixmap) -> DynamicImage {
    let mut image = RgbaImage::new(pixmap.width(), pixmap.height());

    // tiny_skia stores premultiplied alpha, the image crate expects straight alpha.
    for (dst, src) in image.pixels_mut().zip(pixmap.pixels()) {
        let color = src.demultiply();
        *dst = Rgba([color.red(), color.green(), color.blue(), color.alpha()]);
    }

    DynamicImage::ImageRgba8(image)
}
