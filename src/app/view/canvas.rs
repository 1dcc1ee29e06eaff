// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/view/canvas.rs
//
// Offscreen drawing surface with a scoped coordinate frame.

use std::ops::{Deref, DerefMut};

use image::DynamicImage;
use resvg::tiny_skia::{
    Color, FillRule, Paint, Path, PathBuilder, Pixmap, PixmapPaint, PixmapRef, Transform,
};

use crate::domain::{CropError, CropResult};

/// A pixmap plus the transform applied to everything drawn on it.
pub struct Canvas {
    pixmap: Pixmap,
    transform: Transform,
}

impl Canvas {
    pub fn new(width: u32, height: u32) -> CropResult<Self> {
        let pixmap = Pixmap::new(width, height).ok_or(CropError::Surface { width, height })?;

        Ok(Self {
            pixmap,
            transform: Transform::identity(),
        })
    }

    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    pub fn pixmap(&self) -> &Pixmap {
        &self.pixmap
    }

    /// Current user-space to device-space transform.
    pub fn transform(&self) -> Transform {
        self.transform
    }

    /// Enter a local coordinate frame.
    ///
    /// The returned guard restores the current transform when dropped, so
    /// every exit path of the drawing code leaves the canvas in its prior
    /// frame.
    pub fn enter_frame(&mut self) -> Frame<'_> {
        let saved = self.transform;
        Frame {
            canvas: self,
            saved,
        }
    }

    pub fn translate(&mut self, tx: f32, ty: f32) {
        self.transform = self.transform.pre_translate(tx, ty);
    }

    /// Clear the whole surface regardless of the current frame.
    pub fn clear(&mut self) {
        self.pixmap.fill(Color::TRANSPARENT);
    }

    /// Draw `source` with its top-left corner at `(x, y)` in the current frame.
    pub fn draw_pixmap(&mut self, source: PixmapRef<'_>, x: f32, y: f32) {
        self.pixmap.draw_pixmap(
            0,
            0,
            source,
            &PixmapPaint::default(),
            self.transform.pre_translate(x, y),
            None,
        );
    }

    pub fn fill_path(&mut self, path: &Path, color: [u8; 4], fill_rule: FillRule) {
        let paint = solid_paint(color);
        self.pixmap
            .fill_path(path, &paint, fill_rule, self.transform, None);
    }

    pub fn fill_circle(&mut self, cx: f32, cy: f32, radius: f32, color: [u8; 4]) {
        if let Some(circle) = PathBuilder::from_circle(cx, cy, radius) {
            self.fill_path(&circle, color, FillRule::Winding);
        }
    }

    /// Rasterize a parsed SVG tree in the current frame.
    #[cfg(feature = "label")]
    pub fn render_tree(&mut self, tree: &resvg::usvg::Tree) {
        let transform = self.transform;
        resvg::render(tree, transform, &mut self.pixmap.as_mut());
    }

    /// Copy the surface out as a straight-alpha image.
    pub fn to_image(&self) -> DynamicImage {
        crate::app::surface::pixmap_to_image(&self.pixmap)
    }
}

fn solid_paint(color: [u8; 4]) -> Paint<'static> {
    let [r, g, b, a] = color;
    let mut paint = Paint::default();
    paint.set_color_rgba8(r, g, b, a);
    paint.anti_alias = true;
    paint
}

/// Scoped coordinate frame; restores the canvas transform on drop.
pub struct Frame<'a> {
    canvas: &'a mut Canvas,
    saved: Transform,
}

impl Deref for Frame<'_> {
    type Target = Canvas;

    fn deref(&self) -> &Canvas {
        self.canvas
    }
}

impl DerefMut for Frame<'_> {
    fn deref_mut(&mut self) -> &mut Canvas {
        self.canvas
    }
}

impl Drop for Frame<'_> {
    fn drop(&mut self) {
        self.canvas.transform = self.saved;
    }
}
