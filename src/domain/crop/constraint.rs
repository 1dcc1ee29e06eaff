// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/crop/constraint.rs
//
// The mutable crop constraint owned by a cropper instance.

use super::square::Square;

/// Current crop region plus its mutation contract.
///
/// Every field update is accepted as-is. Range validation lives in the
/// coordinate form, not here.
#[derive(Debug, Clone, PartialEq)]
pub struct CropConstraint {
    square: Square,
}

impl CropConstraint {
    pub fn new(square: Square) -> Self {
        Self { square }
    }

    /// Default constraint for a freshly loaded image.
    pub fn centered(width: u32, height: u32, ratio: f64) -> Self {
        Self::new(Square::centered(width, height, ratio))
    }

    /// Read-only snapshot of the current region.
    pub fn get(&self) -> Square {
        self.square
    }

    /// Overwrite only the supplied fields.
    pub fn set(&mut self, x: Option<f64>, y: Option<f64>, side: Option<f64>) {
        if let Some(x) = x {
            self.square.x = x;
        }
        if let Some(y) = y {
            self.square.y = y;
        }
        if let Some(side) = side {
            self.square.side = side;
        }
    }

    /// Shift the region; missing deltas count as zero.
    pub fn shift(&mut self, dx: Option<f64>, dy: Option<f64>, dside: Option<f64>) {
        let current = self.square;
        self.set(
            Some(current.x + dx.unwrap_or(0.0)),
            Some(current.y + dy.unwrap_or(0.0)),
            Some(current.side + dside.unwrap_or(0.0)),
        );
    }
}
