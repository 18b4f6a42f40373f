// Host-side tests for the demo tour sequencer.

use proptest::prelude::*;
use showcase_core::{
    DemoSequencer, Hint, HintSurface, Icon, Phase, PhaseEnd, PhaseKind, PhaseSchedule, Stepping,
    NAV_ICONS, ZOOM_ICONS,
};
use std::collections::HashSet;
use std::f32::consts::PI;
use std::time::Duration;

#[derive(Default)]
struct RecordingHints {
    visible: Vec<Hint>,
    highlighted: HashSet<Icon>,
    calls: usize,
}

impl HintSurface for RecordingHints {
    fn show_hint(&mut self, hint: Hint) {
        self.calls += 1;
        if !self.visible.contains(&hint) {
            self.visible.push(hint);
        }
    }
    fn hide_hint(&mut self, hint: Hint) {
        self.calls += 1;
        self.visible.retain(|h| *h != hint);
    }
    fn highlight(&mut self, icon: Icon) {
        self.calls += 1;
        self.highlighted.insert(icon);
    }
    fn unhighlight(&mut self, icon: Icon) {
        self.calls += 1;
        self.highlighted.remove(&icon);
    }
}

const FRAME: Duration = Duration::from_millis(10);
const SIXTY_HZ: Duration = Duration::from_micros(16_667);

fn ready(schedule: PhaseSchedule, stepping: Stepping) -> DemoSequencer {
    let mut seq = DemoSequencer::new(schedule, stepping);
    seq.on_object_ready(0.0, 6.0, &mut RecordingHints::default());
    seq
}

/// Tick until the sequencer reaches `kind`; returns the number of ticks taken.
fn run_until(
    seq: &mut DemoSequencer,
    hints: &mut RecordingHints,
    dt: Duration,
    kind: PhaseKind,
) -> usize {
    for n in 1..=5_000 {
        seq.tick(dt, hints);
        if seq.phase_kind() == kind {
            return n;
        }
    }
    panic!("never reached {:?}, stuck in {:?}", kind, seq.phase_kind());
}

fn assert_at_rest(seq: &DemoSequencer) {
    let state = seq.state().expect("object ready");
    assert_eq!(state.rotation, state.initial_rotation);
    assert_eq!(state.camera_distance, state.initial_camera_distance);
}

fn assert_ui_clear(hints: &RecordingHints) {
    assert!(hints.visible.is_empty(), "hints still visible: {:?}", hints.visible);
    assert!(
        hints.highlighted.is_empty(),
        "icons still highlighted: {:?}",
        hints.highlighted
    );
}

#[test]
fn full_tour_runs_in_order_and_ends_at_rest() {
    let mut seq = ready(PhaseSchedule::until_complete(), Stepping::PerTick);
    let mut hints = RecordingHints::default();

    for _ in 0..99 {
        assert_eq!(seq.tick(FRAME, &mut hints), None);
    }
    assert_eq!(seq.phase_kind(), PhaseKind::Idle);
    assert!(hints.visible.is_empty());

    // 100 * 10ms = 1000ms
    seq.tick(FRAME, &mut hints);
    assert_eq!(seq.phase_kind(), PhaseKind::Rotating);
    assert_eq!(hints.visible, vec![Hint::Drag]);
    for icon in NAV_ICONS {
        assert!(hints.highlighted.contains(&icon));
    }

    run_until(&mut seq, &mut hints, FRAME, PhaseKind::Zooming);
    let state = seq.state().copied().unwrap();
    assert!((state.rotation - PI).abs() < 1e-6);
    assert_eq!(hints.visible, vec![Hint::Zoom]);
    for icon in NAV_ICONS {
        assert!(!hints.highlighted.contains(&icon));
    }
    for icon in ZOOM_ICONS {
        assert!(hints.highlighted.contains(&icon));
    }

    run_until(&mut seq, &mut hints, FRAME, PhaseKind::ReturningToRest);
    assert_ui_clear(&hints);

    run_until(&mut seq, &mut hints, FRAME, PhaseKind::Done);
    let state = seq.state().copied().unwrap();
    assert_eq!(state.rotation, 0.0);
    assert_eq!(state.camera_distance, 6.0);

    // terminal: nothing moves any more
    for _ in 0..100 {
        assert_eq!(seq.tick(FRAME, &mut hints), None);
    }
    assert_eq!(seq.phase_kind(), PhaseKind::Done);
}

#[test]
fn rotation_is_offset_from_initial_and_capped_at_half_turn() {
    let mut seq = DemoSequencer::new(PhaseSchedule::until_complete(), Stepping::PerTick);
    seq.on_object_ready(0.5, 6.0, &mut RecordingHints::default());
    let mut hints = RecordingHints::default();
    run_until(&mut seq, &mut hints, FRAME, PhaseKind::Rotating);

    let mut last = 0.5;
    while seq.phase_kind() == PhaseKind::Rotating {
        let pose = seq.tick(FRAME, &mut hints).expect("rotating moves the model");
        assert!(pose.rotation >= last);
        assert!(pose.rotation - 0.5 <= PI + 1e-6);
        if let Phase::Rotating { delta, .. } = seq.phase() {
            assert!(*delta <= PI);
        }
        last = pose.rotation;
    }
    assert!((last - (0.5 + PI)).abs() < 1e-5);
}

#[test]
fn first_rotating_tick_moves_by_one_step() {
    let mut seq = ready(PhaseSchedule::until_complete(), Stepping::PerTick);
    let mut hints = RecordingHints::default();
    run_until(&mut seq, &mut hints, FRAME, PhaseKind::Rotating);
    let pose = seq.tick(FRAME, &mut hints).unwrap();
    assert!((pose.rotation - 0.015).abs() < 1e-6);
    assert_eq!(pose.camera_distance, 6.0);
}

#[test]
fn zoom_dips_toward_model_and_comes_back() {
    let mut seq = ready(PhaseSchedule::until_complete(), Stepping::PerTick);
    let mut hints = RecordingHints::default();
    run_until(&mut seq, &mut hints, FRAME, PhaseKind::Zooming);

    let mut closest = f32::MAX;
    let mut last = 6.0;
    while seq.phase_kind() == PhaseKind::Zooming {
        let pose = seq.tick(FRAME, &mut hints).unwrap();
        closest = closest.min(pose.camera_distance);
        last = pose.camera_distance;
    }
    assert!((closest - 4.0).abs() < 1e-3, "closest approach {closest}");
    assert!((last - 6.0).abs() < 1e-5, "ended at {last}");
}

#[test]
fn default_schedule_leaves_motion_phases_after_their_windows() {
    let mut seq = ready(PhaseSchedule::default(), Stepping::default());
    let mut hints = RecordingHints::default();

    let idle_ticks = run_until(&mut seq, &mut hints, SIXTY_HZ, PhaseKind::Rotating);
    assert_eq!(idle_ticks, 60);

    let rotate_ticks = run_until(&mut seq, &mut hints, SIXTY_HZ, PhaseKind::Zooming);
    assert_eq!(rotate_ticks, 120);
    // about 1.8 rad after two seconds; the half turn is not reached
    let rotation = seq.state().unwrap().rotation;
    assert!(rotation > 1.7 && rotation < 1.9, "rotation {rotation}");

    let zoom_ticks = run_until(&mut seq, &mut hints, SIXTY_HZ, PhaseKind::ReturningToRest);
    assert_eq!(zoom_ticks, 120);

    let return_ticks = run_until(&mut seq, &mut hints, SIXTY_HZ, PhaseKind::Done);
    assert!((49..=51).contains(&return_ticks), "return took {return_ticks}");
    assert_at_rest(&seq);
}

#[test]
fn motion_holds_when_complete_before_window_ends() {
    let schedule = PhaseSchedule {
        idle: Duration::ZERO,
        rotating: PhaseEnd::After(Duration::from_secs(10)),
        zooming: PhaseEnd::OnCompletion,
    };
    let mut seq = ready(schedule, Stepping::PerTick);
    let mut hints = RecordingHints::default();
    run_until(&mut seq, &mut hints, FRAME, PhaseKind::Rotating);
    for _ in 0..400 {
        seq.tick(FRAME, &mut hints);
    }
    assert_eq!(seq.phase_kind(), PhaseKind::Rotating);
    assert!((seq.state().unwrap().rotation - PI).abs() < 1e-6);
}

#[test]
fn elapsed_stepping_is_independent_of_frame_rate() {
    let run = |dt: Duration| {
        let mut seq = ready(PhaseSchedule::until_complete(), Stepping::default());
        let mut hints = RecordingHints::default();
        run_until(&mut seq, &mut hints, dt, PhaseKind::Rotating);
        let mut elapsed = Duration::ZERO;
        while seq.phase_kind() == PhaseKind::Rotating {
            seq.tick(dt, &mut hints);
            elapsed += dt;
        }
        elapsed.as_secs_f32()
    };
    let at_60 = run(SIXTY_HZ);
    let at_144 = run(Duration::from_micros(6_944));
    // π / (0.015 * 60) ≈ 3.49 s either way
    assert!((at_60 - 3.49).abs() < 0.05, "60 Hz took {at_60}");
    assert!((at_144 - 3.49).abs() < 0.05, "144 Hz took {at_144}");
}

#[test]
fn return_eases_monotonically_to_rest() {
    let mut seq = ready(PhaseSchedule::default(), Stepping::PerTick);
    let mut hints = RecordingHints::default();
    run_until(&mut seq, &mut hints, FRAME, PhaseKind::ReturningToRest);

    let start = seq.state().copied().unwrap();
    let mut gap_rot = (start.rotation - start.initial_rotation).abs();
    let mut gap_dist = (start.camera_distance - start.initial_camera_distance).abs();
    while seq.phase_kind() == PhaseKind::ReturningToRest {
        let pose = seq.tick(FRAME, &mut hints).unwrap();
        let g_rot = (pose.rotation - start.initial_rotation).abs();
        let g_dist = (pose.camera_distance - start.initial_camera_distance).abs();
        assert!(g_rot <= gap_rot + 1e-6);
        assert!(g_dist <= gap_dist + 1e-6);
        gap_rot = g_rot;
        gap_dist = g_dist;
    }
    assert!(gap_rot < 1e-6 && gap_dist < 1e-6);
    assert_at_rest(&seq);
}

#[test]
fn interrupt_mid_zoom_snaps_back_and_clears_ui() {
    let mut seq = ready(PhaseSchedule::until_complete(), Stepping::PerTick);
    let mut hints = RecordingHints::default();
    run_until(&mut seq, &mut hints, FRAME, PhaseKind::Zooming);
    while seq.state().unwrap().camera_distance > 4.3 {
        seq.tick(FRAME, &mut hints);
    }
    assert_eq!(seq.phase_kind(), PhaseKind::Zooming);

    let pose = seq.on_user_interaction_start(&mut hints).expect("tour interrupted");
    assert_eq!(pose.camera_distance, 6.0);
    assert_eq!(pose.rotation, 0.0);
    assert_eq!(seq.phase_kind(), PhaseKind::UserControlled);
    assert_at_rest(&seq);
    assert_ui_clear(&hints);
}

#[test]
fn interrupt_from_every_phase_yields_rest_pose() {
    for target in [
        PhaseKind::Idle,
        PhaseKind::Rotating,
        PhaseKind::Zooming,
        PhaseKind::ReturningToRest,
        PhaseKind::Done,
    ] {
        let mut seq = ready(PhaseSchedule::until_complete(), Stepping::PerTick);
        let mut hints = RecordingHints::default();
        if target != PhaseKind::Idle {
            run_until(&mut seq, &mut hints, FRAME, target);
        }
        // move a bit inside the phase
        for _ in 0..5 {
            seq.tick(FRAME, &mut hints);
        }
        seq.on_user_interaction_start(&mut hints);
        assert_eq!(seq.phase_kind(), PhaseKind::UserControlled, "from {target:?}");
        assert_at_rest(&seq);
        assert_ui_clear(&hints);
    }
}

#[test]
fn interrupt_is_idempotent() {
    let mut seq = ready(PhaseSchedule::until_complete(), Stepping::PerTick);
    let mut hints = RecordingHints::default();
    run_until(&mut seq, &mut hints, FRAME, PhaseKind::Rotating);
    seq.tick(FRAME, &mut hints);

    assert!(seq.on_user_interaction_start(&mut hints).is_some());
    let once = (*seq.phase(), seq.state().copied());
    assert!(seq.on_user_interaction_start(&mut hints).is_none());
    let twice = (*seq.phase(), seq.state().copied());
    assert_eq!(once, twice);
    assert_ui_clear(&hints);
}

#[test]
fn user_control_is_terminal_until_restart() {
    let mut seq = ready(PhaseSchedule::until_complete(), Stepping::PerTick);
    let mut hints = RecordingHints::default();
    seq.on_user_interaction_start(&mut hints);
    for _ in 0..500 {
        assert_eq!(seq.tick(FRAME, &mut hints), None);
    }
    assert_eq!(seq.phase_kind(), PhaseKind::UserControlled);

    seq.restart(&mut hints);
    assert_eq!(seq.phase_kind(), PhaseKind::Idle);
    run_until(&mut seq, &mut hints, FRAME, PhaseKind::Rotating);
    assert_eq!(hints.visible, vec![Hint::Drag]);
}

#[test]
fn ready_again_mid_tour_clears_hints_and_restarts_idle() {
    let mut seq = ready(PhaseSchedule::default(), Stepping::PerTick);
    let mut hints = RecordingHints::default();
    run_until(&mut seq, &mut hints, FRAME, PhaseKind::Rotating);
    for _ in 0..10 {
        seq.tick(FRAME, &mut hints);
    }
    assert_eq!(hints.visible, vec![Hint::Drag]);

    seq.on_object_ready(0.0, 6.0, &mut hints);
    assert_eq!(seq.phase_kind(), PhaseKind::Idle);
    assert_ui_clear(&hints);
}

#[test]
fn first_ready_touches_no_ui() {
    let mut seq = DemoSequencer::new(PhaseSchedule::default(), Stepping::PerTick);
    let mut hints = RecordingHints::default();
    seq.on_object_ready(0.0, 6.0, &mut hints);
    assert_eq!(hints.calls, 0);
    assert_eq!(seq.phase_kind(), PhaseKind::Idle);
}

#[test]
fn operations_without_object_are_noops() {
    let mut seq = DemoSequencer::default();
    let mut hints = RecordingHints::default();

    assert_eq!(seq.tick(Duration::from_secs(5), &mut hints), None);
    seq.enter_rotating(&mut hints);
    seq.enter_zooming(&mut hints);
    seq.enter_returning_to_rest(&mut hints);
    seq.restart(&mut hints);
    assert_eq!(seq.on_user_interaction_start(&mut hints), None);

    assert_eq!(seq.phase_kind(), PhaseKind::Idle);
    assert!(seq.state().is_none());
    assert!(!seq.is_running());
    assert_eq!(hints.calls, 0);
}

#[test]
fn explicit_phase_entry_switches_ui() {
    let mut seq = ready(PhaseSchedule::default(), Stepping::PerTick);
    let mut hints = RecordingHints::default();
    seq.enter_rotating(&mut hints);
    assert_eq!(hints.visible, vec![Hint::Drag]);
    seq.enter_zooming(&mut hints);
    assert_eq!(hints.visible, vec![Hint::Zoom]);
    assert_eq!(hints.highlighted.len(), ZOOM_ICONS.len());
    seq.enter_returning_to_rest(&mut hints);
    assert_ui_clear(&hints);
    assert!(seq.is_running());
}

fn stepping_strategy() -> impl Strategy<Value = Stepping> {
    prop_oneof![
        Just(Stepping::PerTick),
        (30.0f32..240.0).prop_map(|reference_hz| Stepping::Elapsed { reference_hz }),
    ]
}

fn schedule_strategy() -> impl Strategy<Value = PhaseSchedule> {
    prop_oneof![
        Just(PhaseSchedule::default()),
        Just(PhaseSchedule::until_complete()),
    ]
}

proptest! {
    #[test]
    fn interrupt_after_any_run_snaps_to_rest(
        schedule in schedule_strategy(),
        stepping in stepping_strategy(),
        initial_rotation in -3.0f32..3.0,
        initial_distance in 3.0f32..10.0,
        frames in prop::collection::vec(1u64..50, 0..800),
    ) {
        let mut seq = DemoSequencer::new(schedule, stepping);
        seq.on_object_ready(
            initial_rotation,
            initial_distance,
            &mut RecordingHints::default(),
        );
        let mut hints = RecordingHints::default();
        for ms in frames {
            seq.tick(Duration::from_millis(ms), &mut hints);
        }
        seq.on_user_interaction_start(&mut hints);
        prop_assert_eq!(seq.phase_kind(), PhaseKind::UserControlled);
        let state = seq.state().copied().unwrap();
        prop_assert_eq!(state.rotation, initial_rotation);
        prop_assert_eq!(state.camera_distance, initial_distance);
        prop_assert!(hints.visible.is_empty());
        prop_assert!(hints.highlighted.is_empty());

        seq.on_user_interaction_start(&mut hints);
        prop_assert_eq!(seq.state().copied().unwrap(), state);
    }

    #[test]
    fn phases_only_move_forward(
        schedule in schedule_strategy(),
        stepping in stepping_strategy(),
        frames in prop::collection::vec(1u64..60, 1..1500),
    ) {
        let mut seq = DemoSequencer::new(schedule, stepping);
        seq.on_object_ready(0.0, 6.0, &mut RecordingHints::default());
        let mut hints = RecordingHints::default();
        let mut last = seq.phase_kind();
        for ms in frames {
            seq.tick(Duration::from_millis(ms), &mut hints);
            let kind = seq.phase_kind();
            prop_assert!(kind >= last, "{:?} after {:?}", kind, last);
            prop_assert!(kind != PhaseKind::UserControlled);
            // at most one hint at a time
            prop_assert!(hints.visible.len() <= 1);
            if let Phase::Rotating { delta, .. } = seq.phase() {
                prop_assert!(*delta <= PI);
            }
            last = kind;
        }
    }
}
