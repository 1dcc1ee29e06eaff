// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/host.rs
//
// Host elements a cropper's drawing surface is mounted into.

use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_ID: AtomicU64 = AtomicU64::new(1);

fn next_id() -> u64 {
    NEXT_ID.fetch_add(1, Ordering::Relaxed)
}

/// Identity of a cropper's drawing surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SurfaceId(u64);

impl SurfaceId {
    pub fn next() -> Self {
        Self(next_id())
    }
}

/// Identity of a host element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HostId(u64);

impl HostId {
    pub fn next() -> Self {
        Self(next_id())
    }
}

/// An element that can hold a cropper's drawing surface.
pub trait Host {
    fn id(&self) -> HostId;

    /// Insert the surface ahead of any existing children.
    fn insert_first(&mut self, surface: SurfaceId);

    fn remove_child(&mut self, surface: SurfaceId);
}

/// Child of a [`Container`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Surface(SurfaceId),
    /// Any other element, identified by name.
    Element(String),
}

/// In-process host element with an ordered child list.
#[derive(Debug, Clone)]
pub struct Container {
    id: HostId,
    children: Vec<Node>,
}

impl Container {
    pub fn new() -> Self {
        Self {
            id: HostId::next(),
            children: Vec::new(),
        }
    }

    /// Container that already holds named child elements.
    pub fn with_elements<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut container = Self::new();
        container.children = names
            .into_iter()
            .map(|name| Node::Element(name.into()))
            .collect();
        container
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    pub fn contains(&self, surface: SurfaceId) -> bool {
        self.children.contains(&Node::Surface(surface))
    }
}

impl Default for Container {
    fn default() -> Self {
        Self::new()
    }
}

impl Host for Container {
    fn id(&self) -> HostId {
        self.id
    }

    fn insert_first(&mut self, surface: SurfaceId) {
        // A node has a single parent position.
        self.remove_child(surface);
        self.children.insert(0, Node::Surface(surface));
    }

    fn remove_child(&mut self, surface: SurfaceId) {
        self.children.retain(|node| *node != Node::Surface(surface));
    }
}
