//! Tests for the route animator state machine

extern crate std;

use super::test_utils::{counting_animator, deliver, horizontal_route, one_second_config, waypoints};
use crate::animation::{
    AnimationConfig, AnimationPhase, FrameOutcome, ManualScheduler, RecordingRenderer, RouteAnimator,
};
use crate::coordinate::Point;
use crate::curve::PathCurveBuilder;
use crate::errors::AnimError;
use crate::route::Route;

#[test]
fn test_starts_idle() {
    let (animator, _) = counting_animator();
    std::assert_eq!(animator.phase(), AnimationPhase::Idle);
    std::assert!(animator.route().is_none());
    std::assert!(animator.pending_frame().is_none());
}

#[test]
fn test_halfway_frame_position() {
    let (mut animator, _) = counting_animator();
    animator.start(horizontal_route(), &one_second_config()).unwrap();
    std::assert_eq!(animator.phase(), AnimationPhase::Running);

    // First frame only captures the start timestamp
    std::assert_eq!(deliver(&mut animator, 0.0), FrameOutcome::Continued { progress: 0.0 });
    std::assert_eq!(animator.state().start_timestamp, Some(0.0));

    std::assert_eq!(deliver(&mut animator, 500.0), FrameOutcome::Continued { progress: 0.5 });
    let state = animator.state();
    std::assert_eq!(state.sample_index, 5);
    std::assert!(state.current.unwrap().approx_eq(&Point::new(5.0, 1.0), 1e-9));

    let frame = animator.renderer().last_frame().unwrap();
    std::assert_eq!(frame.index, 5);
    std::assert_eq!(frame.path_len, 6);
}

#[test]
fn test_start_timestamp_is_relative() {
    let (mut animator, _) = counting_animator();
    animator.start(horizontal_route(), &one_second_config()).unwrap();

    deliver(&mut animator, 10_000.0);
    deliver(&mut animator, 10_250.0);

    std::assert_eq!(animator.state().progress, 0.25);
    std::assert_eq!(animator.state().sample_index, 2);
}

#[test]
fn test_completion_fires_exactly_once() {
    let (mut animator, counters) = counting_animator();
    animator.start(horizontal_route(), &one_second_config()).unwrap();

    let mut now = 0.0;
    let mut outcome = deliver(&mut animator, now);
    while outcome != FrameOutcome::Completed {
        std::assert_eq!(counters.completed.get(), 0);
        now += 16.0;
        outcome = deliver(&mut animator, now);
    }

    std::assert!(now >= 1000.0 && now < 1016.0);
    std::assert_eq!(counters.completed.get(), 1);
    std::assert_eq!(counters.cancelled.get(), 0);
    std::assert_eq!(animator.phase(), AnimationPhase::Completed);
    std::assert_eq!(animator.scheduler().pending(), 0);

    let last = animator.renderer().last_frame().unwrap();
    std::assert_eq!(last.progress, 1.0);
    std::assert_eq!(last.index, 10);
    std::assert_eq!(last.path_len, 11);
    std::assert_eq!(animator.renderer().settles.len(), 1);

    // Nothing more happens afterwards
    std::assert!(!animator.cancel());
    std::assert_eq!(counters.completed.get(), 1);
    std::assert_eq!(counters.cancelled.get(), 0);
}

#[test]
fn test_follow_stops_at_threshold() {
    let (mut animator, _) = counting_animator();
    animator.start(horizontal_route(), &one_second_config()).unwrap();

    let mut now = 0.0;
    while deliver(&mut animator, now) != FrameOutcome::Completed {
        now += 10.0;
    }

    let renderer = animator.renderer();
    let below_threshold = renderer.frames.iter().filter(|f| f.progress < 0.95).count();
    std::assert_eq!(renderer.follows.len(), below_threshold);
    std::assert!(below_threshold > 0 && below_threshold < renderer.frames.len());

    // Follow requests are centred on the marker
    let first = renderer.follows[0];
    std::assert_eq!(first.center, Point::new(0.0, 0.0));
    std::assert_eq!(first.zoom, 14.0);
}

#[test]
fn test_cancel_is_idempotent() {
    let (mut animator, counters) = counting_animator();
    animator.start(horizontal_route(), &one_second_config()).unwrap();
    deliver(&mut animator, 0.0);

    let stale = animator.pending_frame().unwrap();
    std::assert!(animator.cancel());
    std::assert!(!animator.cancel());

    std::assert_eq!(animator.phase(), AnimationPhase::Cancelled);
    std::assert_eq!(counters.cancelled.get(), 1);
    std::assert_eq!(counters.completed.get(), 0);
    std::assert_eq!(animator.scheduler().pending(), 0);
    std::assert_eq!(animator.scheduler().cancelled_count(), 1);

    // A frame that was already in flight does nothing
    std::assert_eq!(animator.on_frame(stale, 2000.0), FrameOutcome::Ignored);
    std::assert_eq!(counters.completed.get(), 0);
}

#[test]
fn test_cancel_when_idle_does_nothing() {
    let (mut animator, counters) = counting_animator();
    std::assert!(!animator.cancel());
    std::assert_eq!(animator.phase(), AnimationPhase::Idle);
    std::assert_eq!(counters.cancelled.get(), 0);
}

#[test]
fn test_single_waypoint_is_rejected() {
    let (mut animator, _) = counting_animator();
    let err = animator
        .start_waypoints(&waypoints(&[(0.0, 0.0)]), &PathCurveBuilder::default(), &one_second_config())
        .unwrap_err();

    std::assert!(matches!(err, AnimError::InvalidInput(_)));
    std::assert_eq!(animator.phase(), AnimationPhase::Idle);
    std::assert_eq!(animator.scheduler().requested_count(), 0);
}

#[test]
fn test_short_route_is_rejected() {
    let (mut animator, _) = counting_animator();
    let err = animator
        .start(Route::from_samples(vec![Point::new(1.0, 1.0)]), &one_second_config())
        .unwrap_err();

    std::assert!(err.is_invalid_input());
    std::assert_eq!(animator.phase(), AnimationPhase::Idle);
}

#[test]
fn test_invalid_config_leaves_running_animation_alone() {
    let (mut animator, counters) = counting_animator();
    animator.start(horizontal_route(), &one_second_config()).unwrap();
    deliver(&mut animator, 0.0);

    let bad = AnimationConfig { duration_ms: 0.0, ..one_second_config() };
    std::assert!(animator.start(horizontal_route(), &bad).is_err());

    let bad = AnimationConfig { follow_threshold: 1.5, ..one_second_config() };
    std::assert!(animator.start(horizontal_route(), &bad).is_err());

    std::assert_eq!(animator.phase(), AnimationPhase::Running);
    std::assert_eq!(counters.cancelled.get(), 0);
    std::assert_eq!(animator.scheduler().pending(), 1);
}

#[test]
fn test_restart_cancels_previous_run() {
    let (mut animator, counters) = counting_animator();
    animator.start(horizontal_route(), &one_second_config()).unwrap();
    deliver(&mut animator, 0.0);
    deliver(&mut animator, 300.0);
    let stale = animator.pending_frame().unwrap();

    let second = Route::from_waypoints(
        &waypoints(&[(0.0, 0.0), (0.0, 10.0)]),
        &PathCurveBuilder::default(),
        11,
        true,
    ).unwrap();
    animator.start(second, &one_second_config()).unwrap();

    std::assert_eq!(counters.cancelled.get(), 1);
    std::assert_eq!(counters.completed.get(), 0);
    std::assert_eq!(animator.phase(), AnimationPhase::Running);
    std::assert_eq!(animator.state().progress, 0.0);
    std::assert_eq!(animator.state().start_timestamp, None);
    std::assert_eq!(animator.scheduler().pending(), 1);
    std::assert_eq!(animator.on_frame(stale, 400.0), FrameOutcome::Ignored);

    // The new run starts its own clock
    deliver(&mut animator, 5000.0);
    deliver(&mut animator, 6000.0);
    std::assert_eq!(animator.phase(), AnimationPhase::Completed);
    std::assert_eq!(counters.completed.get(), 1);
    std::assert_eq!(animator.state().current, Some(Point::new(0.0, 10.0)));
}

#[test]
fn test_restart_after_completion() {
    let (mut animator, counters) = counting_animator();
    animator.start(horizontal_route(), &one_second_config()).unwrap();
    deliver(&mut animator, 0.0);
    deliver(&mut animator, 1000.0);
    std::assert_eq!(counters.completed.get(), 1);

    animator.start(horizontal_route(), &one_second_config()).unwrap();
    deliver(&mut animator, 0.0);
    deliver(&mut animator, 2000.0);

    std::assert_eq!(counters.completed.get(), 2);
    std::assert_eq!(counters.cancelled.get(), 0);
}

#[test]
fn test_progress_never_decreases() {
    let (mut animator, _) = counting_animator();
    animator.start(horizontal_route(), &one_second_config()).unwrap();

    deliver(&mut animator, 100.0);
    deliver(&mut animator, 700.0);
    deliver(&mut animator, 400.0);

    std::assert_eq!(animator.state().progress, 0.6);
    std::assert_eq!(animator.state().sample_index, 6);
}

#[test]
fn test_frame_cap_throttles_rendering() {
    let (mut animator, _) = counting_animator();
    let config = AnimationConfig { max_fps: Some(10.0), ..one_second_config() };
    animator.start(horizontal_route(), &config).unwrap();

    let mut now = 0.0;
    let mut delivered = 1;
    while deliver(&mut animator, now) != FrameOutcome::Completed {
        now += 20.0;
        delivered += 1;
    }

    let rendered = animator.renderer().frames.len();
    std::assert!(rendered < delivered);
    std::assert!(rendered >= 10);
    std::assert_eq!(animator.renderer().last_frame().unwrap().progress, 1.0);
}

#[test]
fn test_reset_returns_to_idle() {
    let (mut animator, counters) = counting_animator();
    animator.start(horizontal_route(), &one_second_config()).unwrap();
    deliver(&mut animator, 0.0);

    animator.reset();
    std::assert_eq!(animator.phase(), AnimationPhase::Idle);
    std::assert!(animator.route().is_none());
    std::assert_eq!(animator.scheduler().pending(), 0);
    std::assert_eq!(counters.cancelled.get(), 1);
}

#[test]
fn test_drop_cancels_pending_frame() {
    let mut scheduler = ManualScheduler::new();
    {
        let mut animator = RouteAnimator::new(&mut scheduler, RecordingRenderer::new());
        animator.start(horizontal_route(), &one_second_config()).unwrap();
    }
    std::assert_eq!(scheduler.requested_count(), 1);
    std::assert_eq!(scheduler.pending(), 0);
}

#[test]
fn test_multi_segment_route_reaches_final_waypoint() {
    let (mut animator, counters) = counting_animator();
    let list = waypoints(&[(76.3083, 10.0261), (76.3210, 10.0500), (76.3516, 10.1004)]);
    animator
        .start_waypoints(&list, &PathCurveBuilder::default(), &one_second_config())
        .unwrap();

    std::assert_eq!(animator.route().unwrap().len(), 21);

    deliver(&mut animator, 0.0);
    deliver(&mut animator, 500.0);
    std::assert_eq!(animator.state().sample_index, 10);
    std::assert_eq!(animator.state().current, Some(Point::new(76.3210, 10.0500)));

    deliver(&mut animator, 1000.0);
    std::assert_eq!(counters.completed.get(), 1);
    std::assert_eq!(animator.state().current, Some(Point::new(76.3516, 10.1004)));
}
