// SPDX-License-Identifier: GPL-3.0-or-later
// src/lib.rs
//
// Kadr: an interactive square-crop editor for photo uploads.

pub mod app;
pub mod config;
pub mod constant;
pub mod domain;
pub mod ui;

pub use app::{Cropper, CropperEvent, ExportedImage, ImageSource, ImageSurface};
pub use config::{AppConfig, CropperConfig};
pub use domain::crop::{Coordinate, Square};
pub use domain::{CropError, CropResult};
