// SPDX-License-Identifier: GPL-3.0-or-later
// src/constant.rs
//
// Constants that should not be changed by the user.

/// Default crop side as a fraction of the shorter image side.
pub const INITIAL_SIDE_RATIO: f64 = 0.75;

/// Border dot diameter in pixels.
pub const DOT_LINE_WEIGHT: f64 = 6.0;

/// Free space between two border dots in pixels.
pub const DOT_GAP: f64 = 7.0;

/// Border dot colour (#ffe753).
pub const BORDER_COLOR: [u8; 4] = [0xff, 0xe7, 0x53, 0xff];

/// Mask colour outside the crop square, rgba(0, 0, 0, 0.8).
pub const MASK_COLOR: [u8; 4] = [0, 0, 0, 204];

/// Size label colour.
pub const LABEL_COLOR: [u8; 4] = [0xff, 0xff, 0xff, 0xff];

/// Size label font size in pixels.
pub const LABEL_FONT_SIZE: f64 = 20.0;

/// Font family used for the size label.
pub const LABEL_FONT_FAMILY: &str = "sans-serif";

/// Default time to wait for the source image to decode.
pub const LOAD_TIMEOUT_MS: u64 = 10_000;

/// Suffix appended to the input file stem for exported crops.
pub const EXPORT_SUFFIX: &str = "-crop";

/// Extension used when no output path is given.
pub const EXPORT_EXT: &str = "png";

/// Message shown by the coordinate form while its values are out of range.
pub const FORM_ERROR_MESSAGE: &str = "Check the entered crop values";
