// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/message.rs
//
// Notifications a cropper sends to its host.

/// Events emitted by a [`Cropper`](super::Cropper).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CropperEvent {
    /// The source image finished decoding. Sent exactly once.
    Ready,
    /// A render pass completed; the constraint may have changed.
    ConstraintChanged,
}
