//! # liquid-glass
//!
//! Presentation-layer utilities for a decorative "liquid glass" header
//! and scroll-triggered reveal animations.
//!
//! Two independent pieces live here:
//! - `reveal`: a per-region one-shot visibility animator driven by an
//!   external intersection provider.
//! - `displacement`/`encode`/`surface`: a pure displacement-map
//!   computation for a convex glass surface, encoded as a PNG data URI
//!   for consumption as a displacement-filter input.
//!
//! The host rendering environment supplies intersection judgements and
//! layout measurements and applies the resulting styles and filter
//! inputs; nothing here performs I/O or holds shared state.

pub mod displacement;
pub mod easing;
pub mod encode;
pub mod errors;
pub mod reveal;
pub mod surface;

pub use displacement::{
    compute_displacement, compute_displacement_with, compute_refraction_specular, DisplacementMap,
    DisplacementPixel, GlassParams, LensProfile, LightSource,
};
pub use easing::EasingType;
pub use encode::encode_as_image;
pub use errors::GlassError;
pub use reveal::{IntersectionEvent, ObserverOptions, Reveal, RevealConfig, RevealShape, RevealStyle};
pub use surface::GlassSurface;
