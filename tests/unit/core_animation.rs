use std::time::{Duration, Instant};

use super::{AnimatedScalar, Easing};

#[test]
fn easing_endpoints_are_exact() {
    for easing in [Easing::Linear, Easing::EaseOutQuad, Easing::EaseOutQuart] {
        assert_eq!(easing.apply(0.0), 0.0);
        assert_eq!(easing.apply(1.0), 1.0);
    }
}

#[test]
fn ease_out_runs_ahead_of_linear() {
    assert!(Easing::EaseOutQuad.apply(0.3) > 0.3);
    assert!(Easing::EaseOutQuart.apply(0.3) > Easing::EaseOutQuad.apply(0.3));
}

#[test]
fn easing_input_is_clamped() {
    assert_eq!(Easing::Linear.apply(-1.0), 0.0);
    assert_eq!(Easing::EaseOutQuart.apply(2.0), 1.0);
}

#[test]
fn set_writes_immediately() {
    let mut scalar = AnimatedScalar::new(0.0);
    scalar.set(0.7);
    assert_eq!(scalar.value(Instant::now()), 0.7);
    assert!(!scalar.is_animating());
}

#[test]
fn animate_to_samples_along_the_curve() {
    let start = Instant::now();
    let mut scalar = AnimatedScalar::new(1.0);
    scalar.animate_to(0.0, Duration::from_millis(100), Easing::Linear, start);

    let halfway = scalar.value(start + Duration::from_millis(50));
    assert!((halfway - 0.5).abs() < 1e-4);
    assert_eq!(scalar.value(start + Duration::from_millis(100)), 0.0);
    assert_eq!(scalar.value(start + Duration::from_millis(500)), 0.0);
}

#[test]
fn tick_reports_completion_exactly_once() {
    let start = Instant::now();
    let mut scalar = AnimatedScalar::new(1.0);
    scalar.animate_to(0.0, Duration::from_millis(40), Easing::EaseOutQuad, start);

    assert!(!scalar.tick(start + Duration::from_millis(10)));
    assert!(scalar.is_animating());
    assert!(scalar.tick(start + Duration::from_millis(40)));
    assert!(!scalar.is_animating());
    assert!(!scalar.tick(start + Duration::from_millis(50)));
}

#[test]
fn set_cancels_a_running_animation() {
    let start = Instant::now();
    let mut scalar = AnimatedScalar::new(0.0);
    scalar.animate_to(1.0, Duration::from_millis(100), Easing::Linear, start);
    scalar.set(0.25);
    assert!(!scalar.is_animating());
    assert_eq!(scalar.value(start + Duration::from_millis(200)), 0.25);
}

#[test]
fn zero_duration_jumps_to_target() {
    let start = Instant::now();
    let mut scalar = AnimatedScalar::new(0.3);
    scalar.animate_to(1.0, Duration::ZERO, Easing::Linear, start);
    assert_eq!(scalar.value(start), 1.0);
    assert!(scalar.tick(start));
}

#[test]
fn retargeting_starts_from_the_sampled_value() {
    let start = Instant::now();
    let mut scalar = AnimatedScalar::new(0.0);
    scalar.animate_to(1.0, Duration::from_millis(100), Easing::Linear, start);

    let mid = start + Duration::from_millis(50);
    scalar.animate_to(0.0, Duration::from_millis(100), Easing::Linear, mid);
    let just_after = scalar.value(mid);
    assert!((just_after - 0.5).abs() < 1e-4);
}
