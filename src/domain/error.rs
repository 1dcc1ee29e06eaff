// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/error.rs
//
// Error types shared by the cropper and its collaborators.

use thiserror::Error;

/// Errors that can occur while operating a cropper.
#[derive(Error, Debug)]
pub enum CropError {
    /// The source image has not finished decoding yet.
    #[error("cropper is not ready: image has not been loaded")]
    NotReady,

    /// The cropper was torn down with `remove()`.
    #[error("cropper has been released")]
    Released,

    /// `attach` was given a host while the surface is mounted elsewhere.
    #[error("surface is already mounted in another host")]
    MountedElsewhere,

    /// The surface is not mounted in the host it was asked to leave.
    #[error("surface is not mounted in this host")]
    NotMounted,

    /// IO error while reading a source file.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Source bytes could not be decoded, or export could not be encoded.
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),

    /// A `data:` URL did not have the expected shape.
    #[error("invalid data URL: {0}")]
    InvalidDataUrl(String),

    /// A base64 payload could not be decoded.
    #[error("base64 decode error: {0}")]
    Base64(#[from] base64::DecodeError),

    /// A drawing surface of the requested size could not be allocated.
    #[error("cannot allocate a {width}x{height} drawing surface")]
    Surface { width: u32, height: u32 },

    /// The coordinate form holds values outside the image bounds.
    #[error("invalid crop values: {0}")]
    InvalidForm(String),
}

/// Result type alias for cropper operations.
pub type CropResult<T> = Result<T, CropError>;
