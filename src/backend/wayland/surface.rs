//! Layer-surface sizing and the shared-memory pool backing each frame.

use anyhow::{Context, Result};
use log::info;
use smithay_client_toolkit::{
    shell::wlr_layer::LayerSurface,
    shm::{Shm, slot::SlotPool},
};

/// Bytes per ARGB8888 pixel.
const BYTES_PER_PIXEL: u32 = 4;

/// Tracks the layer surface, its buffer pool and the configured size.
pub struct SurfaceState {
    layer_surface: Option<LayerSurface>,
    pool: Option<SlotPool>,
    width: u32,
    height: u32,
    configured: bool,
    frame_callback_pending: bool,
}

impl SurfaceState {
    pub fn new() -> Self {
        Self {
            layer_surface: None,
            pool: None,
            width: 0,
            height: 0,
            configured: false,
            frame_callback_pending: false,
        }
    }

    pub fn set_layer_surface(&mut self, surface: LayerSurface) {
        self.layer_surface = Some(surface);
    }

    pub fn layer_surface(&self) -> Option<&LayerSurface> {
        self.layer_surface.as_ref()
    }

    /// Records a new size from a configure event, returning `true` if it changed.
    ///
    /// A size change drops the pool; buffers are reallocated on the next render.
    pub fn update_dimensions(&mut self, width: u32, height: u32) -> bool {
        let changed = self.width != width || self.height != height;
        self.width = width;
        self.height = height;
        if changed {
            self.pool = None;
        }
        changed
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Row length of one buffer in bytes.
    pub fn stride(&self) -> i32 {
        (self.width * BYTES_PER_PIXEL) as i32
    }

    fn buffer_size(&self) -> usize {
        self.width as usize * self.height as usize * BYTES_PER_PIXEL as usize
    }

    pub fn set_configured(&mut self, configured: bool) {
        self.configured = configured;
    }

    /// Whether the compositor has sent a usable (non-empty) configure.
    pub fn is_configured(&self) -> bool {
        self.configured && self.width > 0 && self.height > 0
    }

    pub fn set_frame_callback_pending(&mut self, pending: bool) {
        self.frame_callback_pending = pending;
    }

    pub fn frame_callback_pending(&self) -> bool {
        self.frame_callback_pending
    }

    /// Ensures a pool large enough for `buffer_count` full-surface buffers.
    pub fn ensure_pool(&mut self, shm: &Shm, buffer_count: usize) -> Result<&mut SlotPool> {
        if self.pool.is_none() {
            let pool_size = self.buffer_size() * buffer_count;
            info!(
                "Creating new SlotPool ({}x{}, {} bytes, {} buffers)",
                self.width, self.height, pool_size, buffer_count
            );
            let pool = SlotPool::new(pool_size, shm).context("Failed to create slot pool")?;
            self.pool = Some(pool);
        }

        self.pool
            .as_mut()
            .context("Buffer pool not initialized despite previous check")
    }
}
