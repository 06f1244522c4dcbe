//! Recompute-on-measurement orchestration for a glass header surface.
//!
//! The host environment's layout observer reports pixel sizes on mount
//! and resize; the surface recomputes its displacement map and encoded
//! image only when the size actually changed. Very large surfaces are
//! computed at a downsampled resolution and scaled back up by the
//! rendering layer, keeping the per-frame cost bounded.

use tracing::{debug, trace};

use crate::displacement::{compute_displacement_with, DisplacementMap, GlassParams};
use crate::encode::encode_as_image;
use crate::errors::GlassError;

/// Default cap on computed pixels (512 * 512).
pub const DEFAULT_MAX_PIXELS: u32 = 262_144;

pub struct GlassSurface {
    params: GlassParams,
    max_pixels: u32,
    /// Last measured size, as reported. None until the first
    /// measurement arrives.
    measured: Option<(i32, i32)>,
    map: DisplacementMap,
    image_uri: Option<String>,
}

impl GlassSurface {
    pub fn new(params: GlassParams) -> Self {
        Self {
            params,
            max_pixels: DEFAULT_MAX_PIXELS,
            measured: None,
            map: DisplacementMap::empty(),
            image_uri: None,
        }
    }

    pub fn with_max_pixels(mut self, max_pixels: u32) -> Self {
        self.max_pixels = max_pixels.max(1);
        self
    }

    pub fn map(&self) -> &DisplacementMap {
        &self.map
    }

    pub fn image_uri(&self) -> Option<&str> {
        self.image_uri.as_deref()
    }

    /// Feeds one layout measurement. Recomputes the map and encoded
    /// image only when the size changed; returns whether it did.
    /// Zero or negative measurements clear to the empty state without
    /// error, since layout may transiently report zero around
    /// mount/unmount.
    pub fn resize(&mut self, width: i32, height: i32) -> Result<bool, GlassError> {
        if self.measured == Some((width, height)) {
            trace!(width, height, "size unchanged, keeping cached map");
            return Ok(false);
        }
        self.measured = Some((width, height));

        let (cw, ch) = self.compute_size(width, height);
        self.map = compute_displacement_with(cw, ch, &self.params);
        self.image_uri = if self.map.is_empty() {
            None
        } else {
            Some(encode_as_image(&self.map)?)
        };
        debug!(
            width,
            height,
            computed_width = cw,
            computed_height = ch,
            "recomputed glass surface"
        );
        Ok(true)
    }

    /// Downsampled compute resolution, preserving aspect ratio.
    fn compute_size(&self, width: i32, height: i32) -> (i32, i32) {
        if width <= 0 || height <= 0 {
            return (0, 0);
        }
        let pixels = (width as u64) * (height as u64);
        if pixels <= self.max_pixels as u64 {
            return (width, height);
        }
        let scale = ((self.max_pixels as f64) / (pixels as f64)).sqrt();
        let cw = ((width as f64 * scale).floor() as i32).max(1);
        let ch = ((height as f64 * scale).floor() as i32).max(1);
        (cw, ch)
    }
}
