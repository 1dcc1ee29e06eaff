// SPDX-License-Identifier: GPL-3.0-or-later
// src/ui/app.rs
//
// Headless crop session wiring a cropper, its host and the coordinate form.

use std::path::{Path, PathBuf};

use anyhow::{Context, anyhow};
use image::{DynamicImage, ImageFormat};
use tokio::sync::mpsc;

use super::form::CoordinateForm;
use crate::app::{
    Container, Cropper, CropperEvent, EventTarget, ExportedImage, ImageSource, PointerEvent,
};
use crate::config::AppConfig;
use crate::constant::{EXPORT_EXT, EXPORT_SUFFIX};
use crate::domain::CropResult;
use crate::domain::crop::Coordinate;

/// One upload-and-crop session.
pub struct CropApp {
    pub config: AppConfig,
    cropper: Cropper,
    host: Container,
    events: mpsc::UnboundedReceiver<CropperEvent>,
    form: Option<CoordinateForm>,
}

impl CropApp {
    /// Create the cropper and mount it right away; the image keeps decoding
    /// in the background.
    pub fn new(source: ImageSource, config: AppConfig) -> anyhow::Result<Self> {
        let mut cropper = Cropper::with_config(source, config.cropper.clone());
        let events = cropper.subscribe();

        let mut host = Container::with_elements(["resize-controls", "resize-fwd"]);
        cropper.attach(&mut host)?;

        Ok(Self {
            config,
            cropper,
            host,
            events,
            form: None,
        })
    }

    /// Wait for the image, bind the form and draw the first frame.
    pub async fn wait_ready(&mut self) -> anyhow::Result<()> {
        let timeout = self.config.load_timeout;
        tokio::time::timeout(timeout, self.cropper.ready())
            .await
            .map_err(|_| anyhow!("image did not become ready within {timeout:?}"))??;

        self.form = Some(CoordinateForm::for_cropper(&self.cropper)?);
        self.pump()?;
        Ok(())
    }

    /// One scheduling tick: run the pending render and deliver notifications.
    pub fn pump(&mut self) -> CropResult<bool> {
        let rendered = self.cropper.frame()?;

        while let Ok(event) = self.events.try_recv() {
            log::debug!("Cropper event: {:?}", event);
            if let Some(form) = &mut self.form {
                form.on_event(event, &self.cropper)?;
            }
        }

        Ok(rendered)
    }

    /// Type values into the form, as a user would.
    pub fn edit(
        &mut self,
        x: Option<f64>,
        y: Option<f64>,
        side: Option<f64>,
    ) -> anyhow::Result<()> {
        let form = self
            .form
            .as_mut()
            .context("coordinate form is not available before the image is ready")?;
        form.edit(x, y, side, &mut self.cropper)?;
        self.pump()?;
        Ok(())
    }

    /// Press on the surface at `from`, move to `to` and release.
    pub fn drag(&mut self, from: Coordinate, to: Coordinate) -> CropResult<()> {
        self.cropper.dispatch(&PointerEvent::press(from.x, from.y))?;
        self.cropper
            .dispatch(&PointerEvent::moved(to.x, to.y, EventTarget::Viewport))?;
        self.cropper
            .dispatch(&PointerEvent::release(to.x, to.y, EventTarget::Viewport))?;
        self.pump()?;
        Ok(())
    }

    pub fn cropper(&self) -> &Cropper {
        &self.cropper
    }

    pub fn form(&self) -> Option<&CoordinateForm> {
        self.form.as_ref()
    }

    /// The last rendered editor composition.
    pub fn preview(&self) -> CropResult<DynamicImage> {
        Ok(self.cropper.canvas()?.to_image())
    }

    /// Submit the form; fails while its values are out of range.
    pub fn submit(&self, format: ImageFormat) -> anyhow::Result<ExportedImage> {
        let form = self
            .form
            .as_ref()
            .context("coordinate form is not available before the image is ready")?;
        Ok(form.submit_as(&self.cropper, format)?)
    }

    /// Tear the cropper down and unmount it.
    pub fn close(mut self) {
        self.cropper.remove(&mut self.host);
    }
}

/// Where to write the exported crop for `input`.
///
/// An explicit path wins, then the configured output directory, then the
/// input's own directory.
pub fn output_path(input: &Path, explicit: Option<&Path>, config: &AppConfig) -> PathBuf {
    if let Some(path) = explicit {
        return path.to_path_buf();
    }

    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("image");
    let file_name = format!("{stem}{EXPORT_SUFFIX}.{EXPORT_EXT}");

    match &config.output_dir {
        Some(dir) => dir.join(file_name),
        None => input.with_file_name(file_name),
    }
}

/// Pick the export format from an output path; PNG when unknown.
pub fn format_for(path: &Path) -> ImageFormat {
    match ImageFormat::from_path(path) {
        Ok(format @ (ImageFormat::Png | ImageFormat::Jpeg | ImageFormat::WebP | ImageFormat::Bmp)) => {
            format
        }
        Ok(other) => {
            log::warn!("Cannot export as {:?}, falling back to PNG", other);
            ImageFormat::Png
        }
        Err(_) => ImageFormat::Png,
    }
}
