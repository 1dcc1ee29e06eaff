// SPDX-License-Identifier: GPL-3.0-or-later
// src/ui/mod.rs
//
// Host-side collaborators: the coordinate form and the crop session.

pub mod app;
pub mod form;

pub use app::CropApp;
pub use form::CoordinateForm;
