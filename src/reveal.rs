//! # Reveal System
//!
//! One-shot visibility animation for page regions. A `Reveal` consumes
//! in-view judgements from the host environment's intersection provider
//! and interpolates a rendered style from a shape's initial
//! configuration to the final one.
//!
//! ## Responsibilities
//! - **State Machine**: strict one-shot unrevealed -> revealed transition.
//! - **Style Interpolation**: eased opacity/offset/scale over a delay
//!   and duration.
//! - **Degraded Environments**: reduced motion and missing intersection
//!   support both resolve to the final style, never to hidden content.
//!
//! ## Key Types
//! - `RevealShape`: Fade, Slide, Scale, FadeSlide variants.
//! - `Reveal`: per-region animator instance, exclusively owned.
//! - `RevealStyle`: the {opacity, offset_y, scale} handed to rendering.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use crate::easing::EasingType;

/// Vertical travel of the slide shapes, in CSS pixel units.
pub const SLIDE_DISTANCE: f32 = 30.0;
/// Starting scale of the scale shape.
pub const SCALE_FROM: f32 = 0.95;
/// Default transition duration in seconds.
pub const DEFAULT_DURATION: f64 = 0.6;
/// Default fraction of the region that must be visible to trigger.
pub const DEFAULT_THRESHOLD: f32 = 0.15;
/// Default bottom root margin in pixels. Negative so the trigger
/// fires slightly before the region reaches the viewport's bottom edge.
pub const DEFAULT_ROOT_MARGIN_BOTTOM: f32 = -80.0;

/// The animation shape of a revealed region.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RevealShape {
    Fade,
    Slide,
    Scale,
    FadeSlide,
}

impl RevealShape {
    /// Rendered configuration before the region has been revealed.
    pub fn initial(self) -> RevealStyle {
        match self {
            RevealShape::Fade => RevealStyle {
                opacity: 0.0,
                ..RevealStyle::FINAL
            },
            RevealShape::Slide => RevealStyle {
                offset_y: SLIDE_DISTANCE,
                ..RevealStyle::FINAL
            },
            RevealShape::Scale => RevealStyle {
                scale: SCALE_FROM,
                ..RevealStyle::FINAL
            },
            RevealShape::FadeSlide => RevealStyle {
                opacity: 0.0,
                offset_y: SLIDE_DISTANCE,
                scale: 1.0,
            },
        }
    }
}

/// The values the rendering layer applies to the region.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RevealStyle {
    pub opacity: f32,
    pub offset_y: f32,
    pub scale: f32,
}

impl RevealStyle {
    /// Every shape converges on the same final configuration.
    pub const FINAL: RevealStyle = RevealStyle {
        opacity: 1.0,
        offset_y: 0.0,
        scale: 1.0,
    };

    fn lerp(self, other: RevealStyle, t: f32) -> RevealStyle {
        let lerp = |a: f32, b: f32| a + (b - a) * t;
        RevealStyle {
            opacity: lerp(self.opacity, other.opacity),
            offset_y: lerp(self.offset_y, other.offset_y),
            scale: lerp(self.scale, other.scale),
        }
    }
}

/// Animation parameters for one region. Declarable from content data.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RevealConfig {
    pub shape: RevealShape,
    /// Seconds to wait after the reveal trigger before animating.
    pub delay: f64,
    /// Transition length in seconds.
    pub duration: f64,
    pub easing: EasingType,
    /// Hard override: skip interpolation and render the final
    /// configuration from the very first frame.
    pub reduced_motion: bool,
    /// Visible fraction of the region required to trigger.
    pub threshold: f32,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            shape: RevealShape::Fade,
            delay: 0.0,
            duration: DEFAULT_DURATION,
            easing: EasingType::EaseOut,
            reduced_motion: false,
            threshold: DEFAULT_THRESHOLD,
        }
    }
}

impl RevealConfig {
    /// Derives the delay for the `index`-th entry of a sequentially
    /// revealed list, `step` seconds apart.
    pub fn staggered(mut self, index: usize, step: f64) -> Self {
        self.delay = index as f64 * step.max(0.0);
        self
    }
}

/// Subscription parameters handed to the external intersection
/// provider. The animator never computes intersection geometry itself.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ObserverOptions {
    pub threshold: f32,
    pub root_margin_bottom: f32,
}

impl Default for ObserverOptions {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            root_margin_bottom: DEFAULT_ROOT_MARGIN_BOTTOM,
        }
    }
}

/// One notification from the intersection provider. The provider has
/// already applied the threshold; the animator only consumes the
/// judgement.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct IntersectionEvent {
    pub in_view: bool,
    pub intersection_ratio: f32,
}

#[derive(Copy, Clone, Debug, PartialEq)]
enum RevealPhase {
    Unrevealed,
    Revealed { at: f64 },
}

/// Per-region reveal animator. Owns its state exclusively; nothing is
/// shared between region instances.
#[derive(Clone, Debug)]
pub struct Reveal {
    config: RevealConfig,
    phase: RevealPhase,
}

impl Reveal {
    pub fn new(config: RevealConfig) -> Self {
        Self {
            config,
            phase: RevealPhase::Unrevealed,
        }
    }

    pub fn config(&self) -> &RevealConfig {
        &self.config
    }

    pub fn observer_options(&self) -> ObserverOptions {
        ObserverOptions {
            threshold: self.config.threshold,
            ..ObserverOptions::default()
        }
    }

    pub fn is_revealed(&self) -> bool {
        matches!(self.phase, RevealPhase::Revealed { .. })
    }

    /// Feeds one intersection notification at timestamp `now`
    /// (seconds). Returns true iff this event caused the single
    /// unrevealed -> revealed transition. Once revealed, every later
    /// event is ignored, including exit-from-view.
    pub fn observe(&mut self, event: IntersectionEvent, now: f64) -> bool {
        match self.phase {
            RevealPhase::Unrevealed if event.in_view => {
                debug!(
                    now,
                    ratio = event.intersection_ratio,
                    "region revealed"
                );
                self.phase = RevealPhase::Revealed { at: now };
                true
            }
            _ => {
                trace!(in_view = event.in_view, "intersection event ignored");
                false
            }
        }
    }

    /// Fail-open path for environments without intersection support:
    /// the region is treated as visible since forever, so `style`
    /// returns the final configuration immediately. Silently failing
    /// closed would hide content permanently.
    pub fn mark_unsupported(&mut self) {
        if !self.is_revealed() {
            warn!("no intersection support, revealing region immediately");
            self.phase = RevealPhase::Revealed {
                at: f64::NEG_INFINITY,
            };
        }
    }

    /// Rendered configuration at timestamp `now` (seconds, same clock
    /// as `observe`).
    pub fn style(&self, now: f64) -> RevealStyle {
        if self.config.reduced_motion {
            return RevealStyle::FINAL;
        }
        let initial = self.config.shape.initial();
        match self.phase {
            RevealPhase::Unrevealed => initial,
            RevealPhase::Revealed { at } => {
                let elapsed = now - at - self.config.delay;
                if elapsed <= 0.0 {
                    return initial;
                }
                let progress = if self.config.duration > 0.0 {
                    (elapsed / self.config.duration).min(1.0)
                } else {
                    1.0
                };
                initial.lerp(RevealStyle::FINAL, self.config.easing.eval(progress as f32))
            }
        }
    }
}
