// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/crop/mod.rs
//
// Crop domain: square region, its mutation contract, drag gestures and
// the dotted border walk. No drawing happens here.

mod constraint;
mod drag;
pub mod perimeter;
mod square;

pub use constraint::CropConstraint;
pub use drag::{DragController, DragState, PressOutcome};
pub use perimeter::DotPattern;
pub use square::{Coordinate, Square};
