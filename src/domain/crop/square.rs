// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/crop/square.rs
//
// Crop geometry domain model.

/// Square crop region in image pixel space.
///
/// `(x, y)` is the top-left corner relative to the source image origin.
/// Values are never clamped here; bounds are the caller's business.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Square {
    pub x: f64,
    pub y: f64,
    pub side: f64,
}

impl Square {
    pub fn new(x: f64, y: f64, side: f64) -> Self {
        Self { x, y, side }
    }

    /// Square centered on a `width x height` image, sized as `ratio` of the
    /// shorter image side.
    pub fn centered(width: u32, height: u32, ratio: f64) -> Self {
        let width = f64::from(width);
        let height = f64::from(height);
        let side = width.min(height) * ratio;

        Self {
            x: width / 2.0 - side / 2.0,
            y: height / 2.0 - side / 2.0,
            side,
        }
    }

    pub fn as_tuple(&self) -> (f64, f64, f64) {
        (self.x, self.y, self.side)
    }

    /// Center point of the square.
    pub fn center(&self) -> Coordinate {
        Coordinate::new(self.x + self.side / 2.0, self.y + self.side / 2.0)
    }

    /// Check that the square has a positive side and lies inside the image.
    pub fn fits_within(&self, width: u32, height: u32) -> bool {
        self.side > 0.0
            && self.x >= 0.0
            && self.y >= 0.0
            && self.x + self.side <= f64::from(width)
            && self.y + self.side <= f64::from(height)
    }
}

/// Pointer position snapshot taken during a drag gesture.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Coordinate {
    pub x: f64,
    pub y: f64,
}

impl Coordinate {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl std::ops::Sub for Coordinate {
    type Output = Coordinate;

    fn sub(self, rhs: Coordinate) -> Coordinate {
        Coordinate::new(self.x - rhs.x, self.y - rhs.y)
    }
}
