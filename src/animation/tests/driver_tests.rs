//! Tests for the frame drivers

extern crate std;

use std::time::Duration;

use super::test_utils::{counting_animator, horizontal_route, one_second_config};
use crate::animation::{AnimationConfig, AnimationPhase, FixedStepDriver, RealtimeDriver};

#[test]
fn test_fixed_step_runs_to_completion() {
    let (mut animator, counters) = counting_animator();
    animator.start(horizontal_route(), &one_second_config()).unwrap();

    let report = FixedStepDriver::new(50.0).run(&mut animator);

    std::assert_eq!(report.phase, AnimationPhase::Completed);
    std::assert_eq!(report.frames, 21);
    std::assert_eq!(report.elapsed_ms, 1000.0);
    std::assert_eq!(counters.completed.get(), 1);
}

#[test]
fn test_fixed_step_respects_frame_limit() {
    let (mut animator, counters) = counting_animator();
    animator.start(horizontal_route(), &one_second_config()).unwrap();

    let driver = FixedStepDriver { max_frames: 5, ..FixedStepDriver::new(50.0) };
    let report = driver.run(&mut animator);

    std::assert_eq!(report.frames, 5);
    std::assert_eq!(report.phase, AnimationPhase::Running);
    std::assert_eq!(counters.completed.get(), 0);
}

#[test]
fn test_driver_without_animation_does_nothing() {
    let (mut animator, _) = counting_animator();
    let report = FixedStepDriver::new(16.0).run(&mut animator);

    std::assert_eq!(report.frames, 0);
    std::assert_eq!(report.phase, AnimationPhase::Idle);
}

#[test]
fn test_realtime_driver_completes() {
    let (mut animator, counters) = counting_animator();
    let config = AnimationConfig { duration_ms: 30.0, ..one_second_config() };
    animator.start(horizontal_route(), &config).unwrap();

    let driver = RealtimeDriver { frame_interval: Duration::from_millis(2), max_frames: 10_000 };
    let report = driver.run(&mut animator);

    std::assert_eq!(report.phase, AnimationPhase::Completed);
    std::assert!(report.elapsed_ms >= 30.0);
    std::assert_eq!(counters.completed.get(), 1);
}
