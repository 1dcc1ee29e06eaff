// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/events.rs
//
// Pointer events and the listener registrations that route them.

use std::collections::HashSet;

use crate::domain::crop::Coordinate;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerKind {
    Press,
    Move,
    Release,
}

/// Element a pointer event was delivered to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventTarget {
    /// The cropper's drawing surface.
    Surface,
    /// Anywhere else in the viewport.
    Viewport,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub kind: PointerKind,
    /// Cursor position in viewport coordinates.
    pub position: Coordinate,
    pub target: EventTarget,
}

impl PointerEvent {
    pub fn press(x: f64, y: f64) -> Self {
        Self {
            kind: PointerKind::Press,
            position: Coordinate::new(x, y),
            target: EventTarget::Surface,
        }
    }

    pub fn moved(x: f64, y: f64, target: EventTarget) -> Self {
        Self {
            kind: PointerKind::Move,
            position: Coordinate::new(x, y),
            target,
        }
    }

    pub fn release(x: f64, y: f64, target: EventTarget) -> Self {
        Self {
            kind: PointerKind::Release,
            position: Coordinate::new(x, y),
            target,
        }
    }
}

/// A registered pointer listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Listener {
    /// Press on the drawing surface; starts a drag.
    SurfacePress,
    /// Motion anywhere in the viewport while dragging.
    ViewportMove,
    /// Release anywhere in the viewport while dragging.
    ViewportRelease,
}

impl Listener {
    /// Viewport listeners see events from every target, as they bubble up.
    pub fn accepts(&self, event: &PointerEvent) -> bool {
        match self {
            Self::SurfacePress => {
                event.kind == PointerKind::Press && event.target == EventTarget::Surface
            }
            Self::ViewportMove => event.kind == PointerKind::Move,
            Self::ViewportRelease => event.kind == PointerKind::Release,
        }
    }
}

/// Set of currently registered listeners.
#[derive(Debug, Default, Clone)]
pub struct Listeners {
    registered: HashSet<Listener>,
}

impl Listeners {
    pub fn add(&mut self, listener: Listener) {
        self.registered.insert(listener);
    }

    pub fn remove(&mut self, listener: Listener) {
        self.registered.remove(&listener);
    }

    pub fn contains(&self, listener: Listener) -> bool {
        self.registered.contains(&listener)
    }

    pub fn clear(&mut self) {
        self.registered.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.registered.is_empty()
    }

    pub fn len(&self) -> usize {
        self.registered.len()
    }

    /// The registered listener that handles `event`, if any.
    pub fn route(&self, event: &PointerEvent) -> Option<Listener> {
        [
            Listener::SurfacePress,
            Listener::ViewportMove,
            Listener::ViewportRelease,
        ]
        .into_iter()
        .find(|listener| self.contains(*listener) && listener.accepts(event))
    }
}
