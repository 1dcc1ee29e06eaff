// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/scheduler.rs
//
// Coalescing render scheduler: at most one pending render per tick.

/// Pending-render flag consumed by the frame callback.
#[derive(Debug, Default, Clone)]
pub struct RenderScheduler {
    pending: bool,
    passes: u64,
}

impl RenderScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a render as needed. Returns `true` if none was pending yet.
    pub fn request(&mut self) -> bool {
        !std::mem::replace(&mut self.pending, true)
    }

    /// Consume the pending flag on a frame tick.
    pub fn take(&mut self) -> bool {
        std::mem::take(&mut self.pending)
    }

    /// Drop a pending render without running it.
    pub fn cancel(&mut self) {
        self.pending = false;
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    pub fn record_pass(&mut self) {
        self.passes += 1;
    }

    /// Number of completed render passes.
    pub fn passes(&self) -> u64 {
        self.passes
    }
}
