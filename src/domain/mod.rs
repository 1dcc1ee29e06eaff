// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/mod.rs
//
// Pure domain layer: geometry, state machines and errors.

pub mod crop;
pub mod error;

pub use error::{CropError, CropResult};
