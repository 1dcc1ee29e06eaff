// SPDX-License-Identifier: GPL-3.0-or-later
// src/ui/form.rs
//
// Numeric coordinate form kept in sync with a cropper.

use image::ImageFormat;

use crate::app::{Cropper, CropperEvent, ExportedImage};
use crate::constant::FORM_ERROR_MESSAGE;
use crate::domain::crop::Square;
use crate::domain::{CropError, CropResult};

/// The `x`, `y` and `side` fields shown next to the editor.
///
/// The form owns range validation: the cropper accepts any values, the form
/// refuses to submit while they fall outside the image.
#[derive(Debug, Clone, PartialEq)]
pub struct CoordinateForm {
    x: f64,
    y: f64,
    side: f64,
    image_width: u32,
    image_height: u32,
}

impl CoordinateForm {
    pub fn new(image_width: u32, image_height: u32) -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            side: 0.0,
            image_width,
            image_height,
        }
    }

    /// Form bound to a ready cropper, showing its current constraint.
    pub fn for_cropper(cropper: &Cropper) -> CropResult<Self> {
        let (width, height) = cropper.dimensions()?;
        let mut form = Self::new(width, height);
        form.sync_from(cropper.get_constraint()?);
        Ok(form)
    }

    /// Displayed values, truncated to whole pixels.
    pub fn values(&self) -> Square {
        Square::new(self.x, self.y, self.side)
    }

    pub fn sync_from(&mut self, square: Square) {
        self.x = square.x.floor();
        self.y = square.y.floor();
        self.side = square.side.floor();
    }

    /// React to a cropper notification.
    pub fn on_event(&mut self, event: CropperEvent, cropper: &Cropper) -> CropResult<()> {
        if event == CropperEvent::ConstraintChanged {
            self.sync_from(cropper.get_constraint()?);
        }
        Ok(())
    }

    /// Apply a user edit and write all three fields back to the cropper.
    pub fn edit(
        &mut self,
        x: Option<f64>,
        y: Option<f64>,
        side: Option<f64>,
        cropper: &mut Cropper,
    ) -> CropResult<()> {
        if let Some(x) = x {
            self.x = x;
        }
        if let Some(y) = y {
            self.y = y;
        }
        if let Some(side) = side {
            self.side = side;
        }

        if !self.is_valid() {
            log::warn!("Crop values out of range: {:?}", self.values());
        }
        cropper.set_constraint(Some(self.x), Some(self.y), Some(self.side))
    }

    pub fn is_valid(&self) -> bool {
        self.values()
            .fits_within(self.image_width, self.image_height)
    }

    /// Whether the submit control is enabled.
    pub fn submit_enabled(&self) -> bool {
        self.is_valid()
    }

    pub fn error_message(&self) -> Option<&'static str> {
        (!self.is_valid()).then_some(FORM_ERROR_MESSAGE)
    }

    /// Export the crop as PNG, refusing while the values are out of range.
    pub fn submit(&self, cropper: &Cropper) -> CropResult<ExportedImage> {
        self.submit_as(cropper, ImageFormat::Png)
    }

    pub fn submit_as(&self, cropper: &Cropper, format: ImageFormat) -> CropResult<ExportedImage> {
        if !self.is_valid() {
            let Square { x, y, side } = self.values();
            return Err(CropError::InvalidForm(format!(
                "x={x}, y={y}, side={side} does not fit {}x{}",
                self.image_width, self.image_height
            )));
        }
        cropper.export_image_as(format)
    }
}
