//! # Glass Displacement Calculator
//!
//! Pure per-pixel computation of the refraction field for a convex
//! glass surface. The output buffer feeds the rendering layer as a
//! displacement-filter input.
//!
//! ## Responsibilities
//! - **Displacement Field**: radial refraction vector per pixel.
//! - **Specular Field**: light-direction highlight scalar per pixel.
//!
//! ## Key Types
//! - `DisplacementMap`: row-major (dx, dy, intensity) grid.
//! - `LensProfile`: the shaping function of the lens surface.
//! - `LightSource`: direction the simulated light arrives from.

use glam::Vec2;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// Default lateral refraction magnitude at the lens rim, in
/// normalized units of the displacement channel range.
pub const DEFAULT_REFRACTION_STRENGTH: f32 = 0.35;

/// Sharpness of the specular falloff away from the light point.
const SPECULAR_EXPONENT: f32 = 2.0;

/// The shaping function of the lens surface.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LensProfile {
    /// Hemispherical bulge: height `sqrt(1 - d^2)` over the
    /// normalized radial distance `d` from the centre.
    Convex,
}

impl LensProfile {
    /// Surface height at normalized radial distance `d` in `[0, 1)`.
    fn height(self, d: f32) -> f32 {
        match self {
            LensProfile::Convex => (1.0 - d * d).max(0.0).sqrt(),
        }
    }
}

/// Direction the simulated light arrives from, in degrees.
/// 0 is to the right, angles grow clockwise in screen space.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LightSource {
    pub angle_deg: f32,
}

impl Default for LightSource {
    fn default() -> Self {
        // Upper-left, the usual UI highlight direction.
        Self { angle_deg: -135.0 }
    }
}

impl LightSource {
    fn direction(&self) -> Vec2 {
        let rad = self.angle_deg.to_radians();
        Vec2::new(rad.cos(), rad.sin())
    }
}

/// Full parameter set for a glass surface computation.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GlassParams {
    pub profile: LensProfile,
    pub light: LightSource,
    pub refraction_strength: f32,
}

impl Default for GlassParams {
    fn default() -> Self {
        Self {
            profile: LensProfile::Convex,
            light: LightSource::default(),
            refraction_strength: DEFAULT_REFRACTION_STRENGTH,
        }
    }
}

/// One cell of the displacement grid. `dx`/`dy` are in `[-1, 1]`,
/// `intensity` in `[0, 1]`.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct DisplacementPixel {
    pub dx: f32,
    pub dy: f32,
    pub intensity: f32,
}

/// Row-major grid of displacement pixels. Immutable once computed
/// for a given size; recomputed from scratch when the measured
/// surface size changes.
#[derive(Clone, Debug, PartialEq)]
pub struct DisplacementMap {
    width: u32,
    height: u32,
    pixels: Vec<DisplacementPixel>,
}

impl DisplacementMap {
    pub fn empty() -> Self {
        Self {
            width: 0,
            height: 0,
            pixels: Vec::new(),
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    pub fn pixels(&self) -> &[DisplacementPixel] {
        &self.pixels
    }

    pub fn get(&self, x: u32, y: u32) -> Option<&DisplacementPixel> {
        if x < self.width && y < self.height {
            self.pixels.get((y * self.width + x) as usize)
        } else {
            None
        }
    }

    /// Centre of the lens footprint in pixel coordinates.
    fn centre(&self) -> Vec2 {
        Vec2::new(self.width as f32, self.height as f32) * 0.5
    }

    /// Radius of the lens footprint in pixels.
    fn radius(&self) -> f32 {
        (self.width.min(self.height) as f32) * 0.5
    }
}

/// Computes the displacement map for a `width` x `height` surface
/// with default light and strength.
///
/// Deterministic: identical inputs always yield an identical buffer.
/// Dimensions `<= 0` yield the empty map; layout observers report
/// zero sizes transiently around mount and that must not be an error.
pub fn compute_displacement(width: i32, height: i32, profile: LensProfile) -> DisplacementMap {
    compute_displacement_with(
        width,
        height,
        &GlassParams {
            profile,
            ..GlassParams::default()
        },
    )
}

/// Computes the displacement map with explicit parameters.
pub fn compute_displacement_with(width: i32, height: i32, params: &GlassParams) -> DisplacementMap {
    if width <= 0 || height <= 0 {
        tracing::trace!(width, height, "degenerate surface size, returning empty map");
        return DisplacementMap::empty();
    }

    let w = width as u32;
    let h = height as u32;
    let mut map = DisplacementMap {
        width: w,
        height: h,
        pixels: vec![DisplacementPixel::default(); (w as usize) * (h as usize)],
    };

    let centre = map.centre();
    let radius = map.radius();
    let strength = params.refraction_strength;
    let profile = params.profile;

    // Each pixel depends only on its own coordinates, so rows can be
    // filled in parallel without affecting determinism.
    map.pixels
        .par_chunks_mut(w as usize)
        .enumerate()
        .for_each(|(y, row)| {
            for (x, pixel) in row.iter_mut().enumerate() {
                let p = Vec2::new(x as f32 + 0.5, y as f32 + 0.5);
                let v = p - centre;
                let dist = v.length();
                if dist >= radius {
                    // No refraction outside the lens footprint.
                    continue;
                }
                if dist > 0.0 {
                    let d = dist / radius;
                    let bulge = 1.0 - profile.height(d);
                    let offset = (v / dist) * (bulge * strength);
                    pixel.dx = offset.x.clamp(-1.0, 1.0);
                    pixel.dy = offset.y.clamp(-1.0, 1.0);
                }
            }
        });

    let specular = compute_refraction_specular(&map, params.light);
    for (pixel, s) in map.pixels.iter_mut().zip(specular) {
        pixel.intensity = s;
    }

    map
}

/// Per-pixel specular scalar for the given displacement field and
/// light direction.
///
/// The simulated light source sits on the lens rim toward
/// `light.angle_deg`; the scalar decays monotonically with distance
/// from that point and is zero everywhere outside the refracting
/// footprint.
pub fn compute_refraction_specular(map: &DisplacementMap, light: LightSource) -> Vec<f32> {
    if map.is_empty() {
        return Vec::new();
    }

    let centre = map.centre();
    let radius = map.radius();
    let light_point = centre + light.direction() * radius;
    // Farthest footprint point from the light sits on the opposite rim.
    let falloff_range = 2.0 * radius;
    let w = map.width as usize;

    let mut out = vec![0.0f32; map.pixels.len()];
    out.par_chunks_mut(w).enumerate().for_each(|(y, row)| {
        for (x, s) in row.iter_mut().enumerate() {
            let p = Vec2::new(x as f32 + 0.5, y as f32 + 0.5);
            if (p - centre).length() >= radius {
                continue;
            }
            let falloff = (1.0 - p.distance(light_point) / falloff_range).clamp(0.0, 1.0);
            *s = falloff.powf(SPECULAR_EXPONENT);
        }
    });

    out
}
