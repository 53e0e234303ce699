use super::*;

use decal_core::Runtime;

const FRAME_NANOS: u64 = 16_666_667; // ~60 FPS

/// Pump frames until the animatable settles, collecting each sample.
fn pump_until_settled(runtime: &Runtime, animatable: &Animatable<f32>) -> Vec<f32> {
    let handle = runtime.handle();
    let mut frame_time = 0u64;
    let mut samples = Vec::new();
    for _ in 0..600 {
        if !animatable.is_animating() {
            break;
        }
        frame_time += FRAME_NANOS;
        handle.drain_frame_callbacks(frame_time);
        samples.push(animatable.value().get());
    }
    assert!(
        !animatable.is_animating(),
        "spring should settle within the frame budget"
    );
    samples
}

#[test]
fn spring_interpolates_and_settles_at_target() {
    let runtime = Runtime::new();
    let animatable = Animatable::new(100.0f32, runtime.handle());

    animatable.animate_to(200.0, SpringSpec::default());
    let samples = pump_until_settled(&runtime, &animatable);

    assert!(
        samples.iter().any(|v| *v > 100.0 && *v < 200.0),
        "spring should report intermediate values, got {:?}",
        samples
    );
    assert_eq!(animatable.value().get(), 200.0, "settle writes the exact target");
    assert_eq!(animatable.target(), 200.0);
}

#[test]
fn critically_damped_spring_does_not_overshoot() {
    let runtime = Runtime::new();
    let animatable = Animatable::new(100.0f32, runtime.handle());

    animatable.animate_to(200.0, SpringSpec::default());
    let samples = pump_until_settled(&runtime, &animatable);

    for sample in &samples {
        assert!(
            *sample <= 200.0 + 0.01,
            "critically damped spring overshot: {}",
            sample
        );
    }
}

#[test]
fn bouncy_spring_overshoots_the_target() {
    let runtime = Runtime::new();
    let animatable = Animatable::new(100.0f32, runtime.handle());

    animatable.animate_to(200.0, SpringSpec::bouncy());
    let samples = pump_until_settled(&runtime, &animatable);

    assert!(
        samples.iter().any(|v| *v > 200.5),
        "under-damped spring should overshoot, got max {:?}",
        samples.iter().cloned().fold(f32::MIN, f32::max)
    );
    assert_eq!(animatable.value().get(), 200.0);
}

#[test]
fn snap_to_skips_animation() {
    let runtime = Runtime::new();
    let animatable = Animatable::new(100.0f32, runtime.handle());

    animatable.snap_to(200.0);
    assert_eq!(animatable.value().get(), 200.0);
    assert!(!animatable.is_animating());
}

#[test]
fn retarget_mid_flight_stays_continuous() {
    let runtime = Runtime::new();
    let handle = runtime.handle();
    let animatable = Animatable::new(0.0f32, runtime.handle());

    animatable.animate_to(100.0, SpringSpec::default());
    let mut frame_time = 0u64;
    for _ in 0..6 {
        frame_time += FRAME_NANOS;
        handle.drain_frame_callbacks(frame_time);
    }
    let mid_flight = animatable.value().get();
    assert!(mid_flight > 0.0 && mid_flight < 100.0);

    animatable.animate_to(0.0, SpringSpec::default());
    assert_eq!(
        animatable.value().get(),
        mid_flight,
        "retargeting must not jump the current value"
    );

    let samples = pump_until_settled(&runtime, &animatable);
    assert_eq!(*samples.last().unwrap(), 0.0);
}

#[test]
fn dropping_the_animatable_cancels_its_frame_callback() {
    let runtime = Runtime::new();
    let handle = runtime.handle();
    let animatable = Animatable::new(0.0f32, runtime.handle());
    animatable.animate_to(1.0, SpringSpec::default());
    drop(animatable);

    // Must not panic: the weak upgrade fails and the callback is inert.
    handle.drain_frame_callbacks(FRAME_NANOS);
}

#[test]
fn spring_spec_default_is_critically_damped() {
    let spec = SpringSpec::default();
    assert_eq!(spec.damping_ratio, 1.0);
}

#[test]
fn spring_spec_bouncy_is_under_damped() {
    let spec = SpringSpec::bouncy();
    assert!(spec.damping_ratio < 1.0);
}

#[test]
fn spring_spec_stiff_is_faster_than_default() {
    assert!(SpringSpec::stiff().stiffness > SpringSpec::default().stiffness);
}
