// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/view/mod.rs
//
// Drawing: the offscreen canvas, the editor redraw pipeline and its label.

mod canvas;
pub mod label;
mod render;

pub use canvas::{Canvas, Frame};
pub use render::Renderer;
