// SPDX-License-Identifier: GPL-3.0-or-later
// src/config.rs
//
// Per-instance cropper settings and CLI-level configuration.

use std::path::PathBuf;
use std::time::Duration;

use crate::constant::{
    BORDER_COLOR, DOT_GAP, DOT_LINE_WEIGHT, INITIAL_SIDE_RATIO, LABEL_COLOR, LABEL_FONT_SIZE,
    LOAD_TIMEOUT_MS, MASK_COLOR,
};
use crate::domain::crop::DotPattern;

/// Drawing and sizing settings owned by a single cropper.
#[derive(Debug, Clone, PartialEq)]
pub struct CropperConfig {
    /// Initial crop side as a fraction of the shorter image side.
    pub initial_side_ratio: f64,
    /// Border dot diameter.
    pub line_weight: f64,
    /// Space between border dots.
    pub gap: f64,
    /// RGBA colour of the border dots.
    pub border_color: [u8; 4],
    /// RGBA colour of the darkened area outside the crop square.
    pub mask_color: [u8; 4],
    /// RGBA colour of the size label.
    pub label_color: [u8; 4],
    /// Size label font size in pixels.
    pub label_font_size: f64,
    /// Whether the "W x H" label is drawn above the crop square.
    pub show_label: bool,
}

impl CropperConfig {
    pub fn dot_pattern(&self) -> DotPattern {
        DotPattern::new(self.line_weight, self.gap)
    }
}

impl Default for CropperConfig {
    fn default() -> Self {
        Self {
            initial_side_ratio: INITIAL_SIDE_RATIO,
            line_weight: DOT_LINE_WEIGHT,
            gap: DOT_GAP,
            border_color: BORDER_COLOR,
            mask_color: MASK_COLOR,
            label_color: LABEL_COLOR,
            label_font_size: LABEL_FONT_SIZE,
            show_label: cfg!(feature = "label"),
        }
    }
}

/// Global configuration for the command line application.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Directory exported crops are written to when no output is given.
    pub output_dir: Option<PathBuf>,
    /// How long to wait for the source image to become ready.
    pub load_timeout: Duration,
    /// Settings handed to each cropper.
    pub cropper: CropperConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            output_dir: dirs::picture_dir().or_else(dirs::home_dir),
            load_timeout: Duration::from_millis(LOAD_TIMEOUT_MS),
            cropper: CropperConfig::default(),
        }
    }
}
