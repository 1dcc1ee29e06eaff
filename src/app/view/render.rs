// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/view/render.rs
//
// Redraw pipeline for the crop editor: image, mask, size label and the
// dotted border.

use resvg::tiny_skia::{FillRule, PathBuilder};

use super::canvas::Canvas;
use super::label::{SizeLabel, size_text};
use crate::app::surface::ImageSurface;
use crate::config::CropperConfig;
use crate::domain::crop::perimeter::{Bounds, walk_border_within};
use crate::domain::crop::{Coordinate, DotPattern, Square};

/// Draws the editor composition for a surface and a crop square.
///
/// Holds only styling; the same inputs always produce the same pixels.
pub struct Renderer {
    pattern: DotPattern,
    border_color: [u8; 4],
    mask_color: [u8; 4],
    label: Option<SizeLabel>,
}

impl Renderer {
    pub fn new(config: &CropperConfig) -> Self {
        let label = config
            .show_label
            .then(|| SizeLabel::new(config.label_font_size, config.label_color));

        Self {
            pattern: config.dot_pattern(),
            border_color: config.border_color,
            mask_color: config.mask_color,
            label,
        }
    }

    pub fn pattern(&self) -> DotPattern {
        self.pattern
    }

    /// Run one full redraw of the surface's canvas.
    pub fn render(&self, surface: &mut ImageSurface, square: Square) {
        let (natural_width, natural_height) = surface.dimensions();
        let (source, canvas) = surface.split_mut();
        let width = canvas.width() as f32;
        let height = canvas.height() as f32;

        canvas.clear();

        // Origin at the canvas center; the crop square is centered on it.
        let mut frame = canvas.enter_frame();
        frame.translate(width / 2.0, height / 2.0);

        let center = square.center();
        frame.draw_pixmap(source, -center.x as f32, -center.y as f32);

        self.draw_mask(&mut frame, width, height, square.side as f32);

        if let Some(label) = &self.label {
            let top = -square.side / 2.0;
            let baseline = top - self.pattern.line_weight - label.font_size() / 2.0;
            let visible = f64::from(height) / 2.0 + label.font_size();
            if baseline.abs() <= visible {
                label.draw(
                    &mut frame,
                    &size_text(natural_width, natural_height),
                    0.0,
                    baseline,
                );
            }
        }

        self.draw_border(&mut frame, width, height, square.side);
    }

    /// Darken everything but the crop square with a single even/odd fill.
    fn draw_mask(&self, canvas: &mut Canvas, width: f32, height: f32, side: f32) {
        let mut pb = PathBuilder::new();
        push_outline(&mut pb, -width / 2.0, -height / 2.0, width, height);
        push_outline(&mut pb, -side / 2.0, -side / 2.0, side, side);

        match pb.finish() {
            Some(path) => canvas.fill_path(&path, self.mask_color, FillRule::EvenOdd),
            None => log::debug!("Skipping mask for degenerate outline"),
        }
    }

    fn draw_border(&self, canvas: &mut Canvas, width: f32, height: f32, side: f64) {
        let top_left = Coordinate::new(-side / 2.0, -side / 2.0);
        let (half_width, half_height) = (f64::from(width) / 2.0, f64::from(height) / 2.0);
        let visible = Bounds::new(
            Coordinate::new(-half_width, -half_height),
            Coordinate::new(half_width, half_height),
        );
        let radius = self.pattern.radius() as f32;
        let color = self.border_color;

        walk_border_within(top_left, side, &self.pattern, &visible, |dot| {
            canvas.fill_circle(dot.x as f32, dot.y as f32, radius, color);
        });
    }
}

/// Clockwise rectangle outline; both mask outlines share this winding.
fn push_outline(pb: &mut PathBuilder, x: f32, y: f32, width: f32, height: f32) {
    pb.move_to(x, y);
    pb.line_to(x + width, y);
    pb.line_to(x + width, y + height);
    pb.line_to(x, y + height);
    pb.close();
}
