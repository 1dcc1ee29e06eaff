// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/cropper.rs
//
// The square-crop editor component: lifecycle, constraint API, pointer
// dragging, coalesced redraws and export.

use image::ImageFormat;
use tokio::sync::{mpsc, oneshot};

use super::events::{Listener, Listeners, PointerEvent};
use super::export::{self, ExportedImage};
use super::host::{Host, HostId, SurfaceId};
use super::message::CropperEvent;
use super::model::{Lifecycle, ReadyModel};
use super::scheduler::RenderScheduler;
use super::surface::{ImageSource, ImageSurface};
use super::view::{Canvas, Renderer};
use crate::config::CropperConfig;
use crate::domain::crop::{CropConstraint, DragController, DragState, PressOutcome, Square};
use crate::domain::{CropError, CropResult};

/// Interactive square-crop editor over a single source image.
///
/// Single-threaded: all calls happen on the host's UI task. Constraint
/// mutations only mark a render as pending; the host's frame callback
/// ([`Cropper::frame`]) runs at most one render per tick and then sends
/// [`CropperEvent::ConstraintChanged`].
pub struct Cropper {
    id: SurfaceId,
    config: CropperConfig,
    renderer: Renderer,
    lifecycle: Lifecycle,
    scheduler: RenderScheduler,
    drag: DragController,
    listeners: Listeners,
    host: Option<HostId>,
    subscribers: Vec<mpsc::UnboundedSender<CropperEvent>>,
}

impl Cropper {
    pub fn new(source: ImageSource) -> Self {
        Self::with_config(source, CropperConfig::default())
    }

    /// Start decoding `source` in the background.
    ///
    /// Uses the current tokio runtime's blocking pool when there is one.
    /// If decoding fails the cropper never becomes ready.
    pub fn with_config(source: ImageSource, config: CropperConfig) -> Self {
        let (tx, rx) = oneshot::channel();

        let job = move || match source.load() {
            Ok(surface) => {
                log::debug!("Decoded {:?}", surface);
                if tx.send(surface).is_err() {
                    log::debug!("Cropper dropped before its image finished decoding");
                }
            }
            Err(e) => log::error!("Failed to decode source image: {}", e),
        };

        match tokio::runtime::Handle::try_current() {
            Ok(handle) => {
                handle.spawn_blocking(job);
            }
            Err(_) => {
                std::thread::spawn(job);
            }
        }

        Self::unloaded(rx, config)
    }

    /// Cropper over an already decoded surface. Still becomes ready through
    /// [`Cropper::poll_ready`] or [`Cropper::ready`], like any other.
    pub fn from_surface(surface: ImageSurface, config: CropperConfig) -> Self {
        let (tx, rx) = oneshot::channel();
        if tx.send(surface).is_err() {
            log::debug!("Surface receiver dropped before construction finished");
        }
        Self::unloaded(rx, config)
    }

    fn unloaded(pending: oneshot::Receiver<ImageSurface>, config: CropperConfig) -> Self {
        Self {
            id: SurfaceId::next(),
            renderer: Renderer::new(&config),
            config,
            lifecycle: Lifecycle::Unloaded {
                pending: Some(pending),
            },
            scheduler: RenderScheduler::new(),
            drag: DragController::new(),
            listeners: Listeners::default(),
            host: None,
            subscribers: Vec::new(),
        }
    }

    pub fn surface_id(&self) -> SurfaceId {
        self.id
    }

    pub fn config(&self) -> &CropperConfig {
        &self.config
    }

    // =========================================================================
    // Readiness
    // =========================================================================

    /// Receive lifecycle and change notifications.
    ///
    /// Subscribers only see events sent after they subscribed.
    pub fn subscribe(&mut self) -> mpsc::UnboundedReceiver<CropperEvent> {
        let (tx, rx) = mpsc::unbounded_channel();
        self.subscribers.push(tx);
        rx
    }

    pub fn is_ready(&self) -> bool {
        self.lifecycle.is_ready()
    }

    /// Non-blocking readiness check for frame-driven hosts.
    pub fn poll_ready(&mut self) -> bool {
        let Lifecycle::Unloaded { pending } = &mut self.lifecycle else {
            return self.lifecycle.is_ready();
        };
        let Some(receiver) = pending else {
            return false;
        };

        match receiver.try_recv() {
            Ok(surface) => {
                self.become_ready(surface);
                true
            }
            Err(oneshot::error::TryRecvError::Empty) => false,
            Err(oneshot::error::TryRecvError::Closed) => {
                log::warn!("Image never became ready: decoder gave up");
                *pending = None;
                false
            }
        }
    }

    /// Wait until the image has decoded.
    ///
    /// Never completes if decoding failed; wrap it in a timeout.
    pub async fn ready(&mut self) -> CropResult<()> {
        let received = match &mut self.lifecycle {
            Lifecycle::Ready(_) => return Ok(()),
            Lifecycle::Released => return Err(CropError::Released),
            Lifecycle::Unloaded {
                pending: Some(receiver),
            } => receiver.await,
            Lifecycle::Unloaded { pending: None } => std::future::pending().await,
        };

        match received {
            Ok(surface) => {
                self.become_ready(surface);
                Ok(())
            }
            Err(_) => {
                log::warn!("Image never became ready: decoder gave up");
                self.lifecycle = Lifecycle::Unloaded { pending: None };
                std::future::pending().await
            }
        }
    }

    fn become_ready(&mut self, surface: ImageSurface) {
        let (width, height) = surface.dimensions();
        let constraint = CropConstraint::centered(width, height, self.config.initial_side_ratio);
        log::info!(
            "Image ready: {}x{}, initial crop {:?}",
            width,
            height,
            constraint.get()
        );

        self.lifecycle = Lifecycle::Ready(ReadyModel {
            surface,
            constraint,
        });
        self.schedule_render();
        self.emit(CropperEvent::Ready);
    }

    /// Natural dimensions of the loaded image.
    pub fn dimensions(&self) -> CropResult<(u32, u32)> {
        Ok(self.lifecycle.ready()?.surface.dimensions())
    }

    // =========================================================================
    // Hosting
    // =========================================================================

    /// Mount the drawing surface as the first child of `host` and start
    /// listening for presses on it. Allowed before the image is ready.
    ///
    /// A surface lives in one host at a time: use [`Cropper::move_to`] to
    /// remount it elsewhere.
    pub fn attach(&mut self, host: &mut dyn Host) -> CropResult<()> {
        if matches!(self.lifecycle, Lifecycle::Released) {
            return Err(CropError::Released);
        }
        match self.host {
            Some(current) if current == host.id() => return Ok(()),
            Some(current) => {
                log::warn!(
                    "Surface {:?} is mounted in {:?}, not attaching to {:?}",
                    self.id,
                    current,
                    host.id()
                );
                return Err(CropError::MountedElsewhere);
            }
            None => {}
        }

        host.insert_first(self.id);
        self.host = Some(host.id());
        self.listeners.add(Listener::SurfacePress);
        log::debug!("Mounted surface {:?} into host {:?}", self.id, host.id());
        Ok(())
    }

    /// Move the mounted surface from `from` to the front of `to`.
    pub fn move_to(&mut self, from: &mut dyn Host, to: &mut dyn Host) -> CropResult<()> {
        if matches!(self.lifecycle, Lifecycle::Released) {
            return Err(CropError::Released);
        }
        if self.host != Some(from.id()) {
            return Err(CropError::NotMounted);
        }

        from.remove_child(self.id);
        self.host = None;
        self.attach(to)
    }

    /// Tear the cropper down: unmount, drop every listener and any pending
    /// render, and release the drawing surface.
    pub fn remove(&mut self, host: &mut dyn Host) {
        if self.host == Some(host.id()) {
            host.remove_child(self.id);
        } else {
            log::warn!("Surface {:?} is not mounted in host {:?}", self.id, host.id());
        }

        self.host = None;
        self.listeners.clear();
        self.drag.release();
        self.scheduler.cancel();
        self.subscribers.clear();
        self.lifecycle = Lifecycle::Released;
        log::debug!("Released cropper {:?}", self.id);
    }

    pub fn host(&self) -> Option<HostId> {
        self.host
    }

    pub fn listeners(&self) -> &Listeners {
        &self.listeners
    }

    // =========================================================================
    // Constraint
    // =========================================================================

    pub fn get_constraint(&self) -> CropResult<Square> {
        Ok(self.lifecycle.ready()?.constraint.get())
    }

    /// Overwrite the supplied fields; no range checks are made.
    pub fn set_constraint(
        &mut self,
        x: Option<f64>,
        y: Option<f64>,
        side: Option<f64>,
    ) -> CropResult<()> {
        self.lifecycle.ready_mut()?.constraint.set(x, y, side);
        self.schedule_render();
        Ok(())
    }

    /// Shift the constraint; missing deltas count as zero.
    pub fn move_constraint(
        &mut self,
        dx: Option<f64>,
        dy: Option<f64>,
        dside: Option<f64>,
    ) -> CropResult<()> {
        self.lifecycle.ready_mut()?.constraint.shift(dx, dy, dside);
        self.schedule_render();
        Ok(())
    }

    // =========================================================================
    // Pointer input
    // =========================================================================

    /// Feed a pointer event from the host. Returns whether a registered
    /// listener handled it.
    pub fn dispatch(&mut self, event: &PointerEvent) -> CropResult<bool> {
        let Some(listener) = self.listeners.route(event) else {
            return Ok(false);
        };

        match listener {
            Listener::SurfacePress => {
                if !self.lifecycle.is_ready() {
                    log::debug!("Ignoring press before the image is ready");
                    return Ok(false);
                }
                if self.drag.press(event.position) == PressOutcome::Started {
                    // Track the whole viewport so fast drags leaving the
                    // surface keep working.
                    self.listeners.add(Listener::ViewportMove);
                    self.listeners.add(Listener::ViewportRelease);
                    log::debug!("Drag started at {:?}", event.position);
                }
            }
            Listener::ViewportMove => {
                if let Some(delta) = self.drag.motion(event.position) {
                    self.move_constraint(Some(delta.x), Some(delta.y), None)?;
                }
            }
            Listener::ViewportRelease => self.end_drag(),
        }

        Ok(true)
    }

    fn end_drag(&mut self) {
        if self.drag.release() {
            log::debug!("Drag ended");
        }
        self.listeners.remove(Listener::ViewportMove);
        self.listeners.remove(Listener::ViewportRelease);
    }

    pub fn drag_state(&self) -> DragState {
        self.drag.state()
    }

    // =========================================================================
    // Rendering
    // =========================================================================

    fn schedule_render(&mut self) {
        if self.scheduler.request() {
            log::trace!("Render scheduled");
        }
    }

    /// Frame callback: run the pending render, if any, then notify.
    ///
    /// Returns whether a render pass ran.
    pub fn frame(&mut self) -> CropResult<bool> {
        let model = self.lifecycle.ready_mut()?;
        if !self.scheduler.take() {
            return Ok(false);
        }

        self.renderer
            .render(&mut model.surface, model.constraint.get());
        self.scheduler.record_pass();
        self.emit(CropperEvent::ConstraintChanged);
        Ok(true)
    }

    pub fn is_render_pending(&self) -> bool {
        self.scheduler.is_pending()
    }

    /// Number of completed render passes.
    pub fn render_passes(&self) -> u64 {
        self.scheduler.passes()
    }

    /// The drawing surface holding the last rendered composition.
    pub fn canvas(&self) -> CropResult<&Canvas> {
        Ok(self.lifecycle.ready()?.surface.canvas())
    }

    fn emit(&mut self, event: CropperEvent) {
        self.subscribers.retain(|tx| tx.send(event).is_ok());
    }

    // =========================================================================
    // Export
    // =========================================================================

    /// Export the current crop as PNG bytes.
    pub fn export_image(&self) -> CropResult<ExportedImage> {
        self.export_image_as(ImageFormat::Png)
    }

    pub fn export_image_as(&self, format: ImageFormat) -> CropResult<ExportedImage> {
        let model = self.lifecycle.ready()?;
        export::export(&model.surface, model.constraint.get(), format)
    }
}
