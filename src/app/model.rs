// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/model.rs
//
// Cropper lifecycle state.

use tokio::sync::oneshot;

use super::surface::ImageSurface;
use crate::domain::crop::CropConstraint;
use crate::domain::{CropError, CropResult};

/// State a cropper holds once its image has decoded.
#[derive(Debug)]
pub struct ReadyModel {
    pub surface: ImageSurface,
    pub constraint: CropConstraint,
}

/// Two-phase construction made explicit, plus teardown.
#[derive(Debug)]
pub enum Lifecycle {
    /// Waiting for the decoder. `None` once decoding failed for good.
    Unloaded {
        pending: Option<oneshot::Receiver<ImageSurface>>,
    },
    Ready(ReadyModel),
    /// Torn down by `remove()`; the surface has been dropped.
    Released,
}

impl Lifecycle {
    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready(_))
    }

    pub fn ready(&self) -> CropResult<&ReadyModel> {
        match self {
            Self::Ready(model) => Ok(model),
            Self::Unloaded { .. } => Err(CropError::NotReady),
            Self::Released => Err(CropError::Released),
        }
    }

    pub fn ready_mut(&mut self) -> CropResult<&mut ReadyModel> {
        match self {
            Self::Ready(model) => Ok(model),
            Self::Unloaded { .. } => Err(CropError::NotReady),
            Self::Released => Err(CropError::Released),
        }
    }
}
