// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/crop/drag.rs
//
// Drag state machine that turns cursor motion into constraint deltas.

use super::square::Coordinate;

/// Drag gesture state.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging {
        /// Cursor position at the previous motion event.
        last_cursor: Coordinate,
    },
}

/// Result of feeding a pointer press into the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PressOutcome {
    /// Idle -> Dragging; the caller must start viewport-wide tracking.
    Started,
    /// A gesture is already in progress.
    Ignored,
}

/// Pointer-driven panning of the crop window.
///
/// Motion yields `last - current`: moving the cursor right slides the
/// photograph right under a fixed window, so the window's recorded
/// position moves left.
#[derive(Debug, Clone, Default)]
pub struct DragController {
    state: DragState,
}

impl DragController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> DragState {
        self.state
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging { .. })
    }

    pub fn press(&mut self, at: Coordinate) -> PressOutcome {
        match self.state {
            DragState::Idle => {
                self.state = DragState::Dragging { last_cursor: at };
                PressOutcome::Started
            }
            DragState::Dragging { .. } => PressOutcome::Ignored,
        }
    }

    /// Returns the constraint delta for a cursor move, if dragging.
    pub fn motion(&mut self, at: Coordinate) -> Option<Coordinate> {
        let DragState::Dragging { last_cursor } = self.state else {
            return None;
        };

        self.state = DragState::Dragging { last_cursor: at };
        Some(last_cursor - at)
    }

    /// Dragging -> Idle. Returns `true` if a gesture was actually ended.
    pub fn release(&mut self) -> bool {
        let was_dragging = self.is_dragging();
        self.state = DragState::Idle;
        was_dragging
    }
}
