// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/mod.rs
//
// Cropper component: image surface, drawing, scheduling, input and export.

mod cropper;
pub mod events;
pub mod export;
pub mod host;
pub mod message;
mod model;
pub mod scheduler;
pub mod surface;
pub mod view;

pub use cropper::Cropper;
pub use events::{EventTarget, Listener, PointerEvent, PointerKind};
pub use export::ExportedImage;
pub use host::{Container, Host, HostId, Node, SurfaceId};
pub use message::CropperEvent;
pub use surface::{ImageSource, ImageSurface};
