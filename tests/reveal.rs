use liquid_glass::{
    EasingType, IntersectionEvent, Reveal, RevealConfig, RevealShape, RevealStyle,
};

fn in_view(ratio: f32) -> IntersectionEvent {
    IntersectionEvent {
        in_view: true,
        intersection_ratio: ratio,
    }
}

fn out_of_view() -> IntersectionEvent {
    IntersectionEvent {
        in_view: false,
        intersection_ratio: 0.0,
    }
}

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-4
}

#[test]
fn transitions_exactly_once() {
    let mut reveal = Reveal::new(RevealConfig::default());
    assert!(!reveal.is_revealed());

    assert!(!reveal.observe(out_of_view(), 0.5));
    assert!(!reveal.is_revealed());

    assert!(reveal.observe(in_view(0.4), 1.0));
    assert!(reveal.is_revealed());

    // Later events never cause another transition or a revert.
    assert!(!reveal.observe(out_of_view(), 2.0));
    assert!(!reveal.observe(in_view(0.9), 3.0));
    assert!(reveal.is_revealed());
}

#[test]
fn fade_slide_scenario() {
    // shape=fadeSlide, delay=0.2s, threshold=0.15
    let config = RevealConfig {
        shape: RevealShape::FadeSlide,
        delay: 0.2,
        threshold: 0.15,
        ..RevealConfig::default()
    };
    let mut reveal = Reveal::new(config);

    // Before any intersection notification: initial configuration.
    let style = reveal.style(0.0);
    assert_eq!(style.opacity, 0.0);
    assert_eq!(style.offset_y, 30.0);
    assert_eq!(style.scale, 1.0);

    reveal.observe(in_view(0.2), 1.0);

    // Still within the delay window.
    let style = reveal.style(1.1);
    assert_eq!(style.opacity, 0.0);
    assert_eq!(style.offset_y, 30.0);

    // Mid-transition: strictly between initial and final.
    let style = reveal.style(1.5);
    assert!(style.opacity > 0.0 && style.opacity < 1.0);
    assert!(style.offset_y > 0.0 && style.offset_y < 30.0);

    // Past delay + duration: final configuration.
    let style = reveal.style(2.0);
    assert!(approx(style.opacity, 1.0));
    assert!(approx(style.offset_y, 0.0));

    // Exit-from-view leaves the revealed state unchanged.
    reveal.observe(out_of_view(), 2.5);
    let style = reveal.style(2.5);
    assert!(approx(style.opacity, 1.0));
    assert!(approx(style.offset_y, 0.0));
}

#[test]
fn reduced_motion_renders_final_immediately() {
    let config = RevealConfig {
        shape: RevealShape::FadeSlide,
        delay: 0.5,
        reduced_motion: true,
        ..RevealConfig::default()
    };
    let reveal = Reveal::new(config);

    // Final configuration on the very first render, before any
    // intersection notification and with no delay applied.
    assert_eq!(reveal.style(0.0), RevealStyle::FINAL);
}

#[test]
fn missing_intersection_support_fails_open() {
    let mut reveal = Reveal::new(RevealConfig {
        shape: RevealShape::Fade,
        delay: 1.0,
        ..RevealConfig::default()
    });
    reveal.mark_unsupported();

    assert!(reveal.is_revealed());
    let style = reveal.style(0.0);
    assert!(approx(style.opacity, 1.0));
}

#[test]
fn shape_initial_configurations() {
    assert_eq!(RevealShape::Fade.initial().opacity, 0.0);
    assert_eq!(RevealShape::Fade.initial().offset_y, 0.0);
    assert_eq!(RevealShape::Slide.initial().offset_y, 30.0);
    assert_eq!(RevealShape::Slide.initial().opacity, 1.0);
    assert_eq!(RevealShape::Scale.initial().scale, 0.95);
    assert_eq!(RevealShape::FadeSlide.initial().opacity, 0.0);
    assert_eq!(RevealShape::FadeSlide.initial().offset_y, 30.0);
}

#[test]
fn zero_duration_jumps_to_final() {
    let mut reveal = Reveal::new(RevealConfig {
        duration: 0.0,
        ..RevealConfig::default()
    });
    reveal.observe(in_view(1.0), 1.0);
    assert!(approx(reveal.style(1.001).opacity, 1.0));
}

#[test]
fn observer_options_carry_threshold_and_negative_margin() {
    let reveal = Reveal::new(RevealConfig {
        threshold: 0.3,
        ..RevealConfig::default()
    });
    let options = reveal.observer_options();
    assert_eq!(options.threshold, 0.3);
    assert!(options.root_margin_bottom < 0.0);
}

#[test]
fn staggered_delays_scale_with_index() {
    let base = RevealConfig {
        shape: RevealShape::FadeSlide,
        ..RevealConfig::default()
    };
    assert_eq!(base.staggered(0, 0.1).delay, 0.0);
    assert_eq!(base.staggered(3, 0.1).delay, 0.1 * 3.0);
    // Negative steps are clamped rather than scheduling in the past.
    assert_eq!(base.staggered(2, -0.5).delay, 0.0);
}

#[test]
fn config_round_trips_through_serde() {
    let config = RevealConfig {
        shape: RevealShape::Scale,
        delay: 0.25,
        duration: 0.8,
        easing: EasingType::EaseInOut,
        reduced_motion: false,
        threshold: 0.2,
    };
    let json = serde_json::to_string(&config).unwrap();
    let back: RevealConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(back, config);

    // Content data can omit fields and get the defaults.
    let sparse: RevealConfig = serde_json::from_str(r#"{"shape":"fadeSlide"}"#).unwrap();
    assert_eq!(sparse.shape, RevealShape::FadeSlide);
    assert_eq!(sparse.duration, 0.6);
    assert_eq!(sparse.threshold, 0.15);
}
