//! Scripted introduction tour for the product viewer.
//!
//! Once a model is ready the sequencer waits, spins the model half a turn
//! while the drag hint is up, pulses the camera in and out while the zoom
//! hint is up, then eases everything back to where it started. Any user
//! interaction stops the tour immediately and snaps the pose back to rest.
//!
//! The sequencer is driven from the render loop through [`DemoSequencer::tick`]
//! and talks to the page only through the [`HintSurface`] trait, so it runs
//! unchanged on the host in tests.

use crate::constants::{
    DEMO_IDLE_DELAY, DEMO_RETURN_STEP, DEMO_ROTATE_SPAN, DEMO_ROTATE_STEP, DEMO_ROTATE_WINDOW,
    DEMO_ZOOM_CYCLE, DEMO_ZOOM_STEP, DEMO_ZOOM_WINDOW, REFERENCE_HZ,
};
use crate::easing::{ease_out_cubic, lerp, zoom_offset};
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Hint {
    Drag,
    Zoom,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Icon {
    Prev,
    Next,
    ChevronUp,
    ChevronDown,
    ZoomIn,
    ZoomOut,
}

pub const NAV_ICONS: [Icon; 4] = [Icon::Prev, Icon::Next, Icon::ChevronUp, Icon::ChevronDown];
pub const ZOOM_ICONS: [Icon; 2] = [Icon::ZoomIn, Icon::ZoomOut];

/// Page-side capability the sequencer uses to show hints and highlight icons.
pub trait HintSurface {
    fn show_hint(&mut self, hint: Hint);
    fn hide_hint(&mut self, hint: Hint);
    fn highlight(&mut self, icon: Icon);
    fn unhighlight(&mut self, icon: Icon);
}

/// Model yaw and camera distance, the two values the tour animates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pose {
    pub rotation: f32,
    pub camera_distance: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewerState {
    pub rotation: f32,
    pub camera_distance: f32,
    pub initial_rotation: f32,
    pub initial_camera_distance: f32,
}

impl ViewerState {
    pub fn new(initial_rotation: f32, initial_camera_distance: f32) -> Self {
        Self {
            rotation: initial_rotation,
            camera_distance: initial_camera_distance,
            initial_rotation,
            initial_camera_distance,
        }
    }

    pub fn pose(&self) -> Pose {
        Pose {
            rotation: self.rotation,
            camera_distance: self.camera_distance,
        }
    }

    pub fn rest_pose(&self) -> Pose {
        Pose {
            rotation: self.initial_rotation,
            camera_distance: self.initial_camera_distance,
        }
    }

    pub fn snap_to_rest(&mut self) {
        self.rotation = self.initial_rotation;
        self.camera_distance = self.initial_camera_distance;
    }
}

/// When a motion phase hands over to the next one.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PhaseEnd {
    /// Leave after a fixed window; the motion holds once it completes.
    After(Duration),
    /// Leave as soon as the motion completes.
    OnCompletion,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PhaseSchedule {
    pub idle: Duration,
    pub rotating: PhaseEnd,
    pub zooming: PhaseEnd,
}

impl Default for PhaseSchedule {
    fn default() -> Self {
        Self {
            idle: DEMO_IDLE_DELAY,
            rotating: PhaseEnd::After(DEMO_ROTATE_WINDOW),
            zooming: PhaseEnd::After(DEMO_ZOOM_WINDOW),
        }
    }
}

impl PhaseSchedule {
    /// Each motion runs to completion: a full half turn, a full zoom cycle.
    pub fn until_complete() -> Self {
        Self {
            idle: DEMO_IDLE_DELAY,
            rotating: PhaseEnd::OnCompletion,
            zooming: PhaseEnd::OnCompletion,
        }
    }
}

/// How per-frame motion steps relate to elapsed time.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Stepping {
    /// One fixed step per tick; speed follows the display refresh rate.
    PerTick,
    /// Steps scaled by `dt * reference_hz`.
    Elapsed { reference_hz: f32 },
}

impl Default for Stepping {
    fn default() -> Self {
        Stepping::Elapsed {
            reference_hz: REFERENCE_HZ,
        }
    }
}

impl Stepping {
    #[inline]
    pub fn scale(&self, dt: Duration) -> f32 {
        match self {
            Stepping::PerTick => 1.0,
            Stepping::Elapsed { reference_hz } => dt.as_secs_f32() * reference_hz,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ReturnTween {
    pub start: Pose,
    pub progress: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Phase {
    Idle { waited: Duration },
    Rotating { delta: f32, elapsed: Duration },
    Zooming { param: f32, elapsed: Duration },
    ReturningToRest(ReturnTween),
    /// Tour finished; the pose rests at its initial values.
    Done,
    UserControlled,
}

/// Fieldless mirror of [`Phase`], ordered along the tour.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum PhaseKind {
    Idle,
    Rotating,
    Zooming,
    ReturningToRest,
    Done,
    UserControlled,
}

impl Phase {
    pub fn kind(&self) -> PhaseKind {
        match self {
            Phase::Idle { .. } => PhaseKind::Idle,
            Phase::Rotating { .. } => PhaseKind::Rotating,
            Phase::Zooming { .. } => PhaseKind::Zooming,
            Phase::ReturningToRest(_) => PhaseKind::ReturningToRest,
            Phase::Done => PhaseKind::Done,
            Phase::UserControlled => PhaseKind::UserControlled,
        }
    }

    /// True while the tour still owns the pose.
    pub fn is_scripted(&self) -> bool {
        !matches!(self, Phase::Done | Phase::UserControlled)
    }
}

#[inline]
fn phase_over(end: PhaseEnd, elapsed: Duration, motion_complete: bool) -> bool {
    match end {
        PhaseEnd::After(window) => elapsed >= window,
        PhaseEnd::OnCompletion => motion_complete,
    }
}

fn clear_all(hints: &mut impl HintSurface) {
    hints.hide_hint(Hint::Drag);
    hints.hide_hint(Hint::Zoom);
    for icon in NAV_ICONS.iter().chain(ZOOM_ICONS.iter()) {
        hints.unhighlight(*icon);
    }
}

pub struct DemoSequencer {
    state: Option<ViewerState>,
    phase: Phase,
    schedule: PhaseSchedule,
    stepping: Stepping,
}

impl Default for DemoSequencer {
    fn default() -> Self {
        Self::new(PhaseSchedule::default(), Stepping::default())
    }
}

impl DemoSequencer {
    pub fn new(schedule: PhaseSchedule, stepping: Stepping) -> Self {
        Self {
            state: None,
            phase: Phase::Idle {
                waited: Duration::ZERO,
            },
            schedule,
            stepping,
        }
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn phase_kind(&self) -> PhaseKind {
        self.phase.kind()
    }

    pub fn state(&self) -> Option<&ViewerState> {
        self.state.as_ref()
    }

    pub fn pose(&self) -> Option<Pose> {
        self.state.as_ref().map(ViewerState::pose)
    }

    pub fn schedule(&self) -> &PhaseSchedule {
        &self.schedule
    }

    /// True when a model is ready and the tour still owns the pose.
    pub fn is_running(&self) -> bool {
        self.state.is_some() && self.phase.is_scripted()
    }

    /// Record the rest pose of a freshly loaded model and start waiting.
    pub fn on_object_ready(
        &mut self,
        initial_rotation: f32,
        initial_camera_distance: f32,
        hints: &mut impl HintSurface,
    ) {
        // a model swapped in mid-tour must not leave its hint behind
        if self.state.is_some()
            && matches!(self.phase_kind(), PhaseKind::Rotating | PhaseKind::Zooming)
        {
            clear_all(hints);
        }
        self.state = Some(ViewerState::new(initial_rotation, initial_camera_distance));
        self.phase = Phase::Idle {
            waited: Duration::ZERO,
        };
        log::info!(
            "[demo] object ready rotation={:.3} distance={:.3}",
            initial_rotation,
            initial_camera_distance
        );
    }

    /// Start the tour over from `Idle` for the current model.
    pub fn restart(&mut self, hints: &mut impl HintSurface) {
        let Some(state) = self.state.as_mut() else {
            return;
        };
        clear_all(hints);
        state.snap_to_rest();
        self.phase = Phase::Idle {
            waited: Duration::ZERO,
        };
        log::info!("[demo] restart");
    }

    pub fn enter_rotating(&mut self, hints: &mut impl HintSurface) {
        if self.state.is_none() {
            return;
        }
        clear_all(hints);
        hints.show_hint(Hint::Drag);
        for icon in NAV_ICONS {
            hints.highlight(icon);
        }
        self.phase = Phase::Rotating {
            delta: 0.0,
            elapsed: Duration::ZERO,
        };
        log::debug!("[demo] phase -> Rotating");
    }

    pub fn enter_zooming(&mut self, hints: &mut impl HintSurface) {
        if self.state.is_none() {
            return;
        }
        clear_all(hints);
        hints.show_hint(Hint::Zoom);
        for icon in ZOOM_ICONS {
            hints.highlight(icon);
        }
        self.phase = Phase::Zooming {
            param: 0.0,
            elapsed: Duration::ZERO,
        };
        log::debug!("[demo] phase -> Zooming");
    }

    pub fn enter_returning_to_rest(&mut self, hints: &mut impl HintSurface) {
        let Some(state) = self.state.as_ref() else {
            return;
        };
        clear_all(hints);
        self.phase = Phase::ReturningToRest(ReturnTween {
            start: state.pose(),
            progress: 0.0,
        });
        log::debug!("[demo] phase -> ReturningToRest");
    }

    /// Stop the tour from any phase and snap the pose back to rest.
    ///
    /// Returns the rest pose when a scripted phase was interrupted so the
    /// caller can apply it; afterwards the pose belongs to direct input.
    pub fn on_user_interaction_start(&mut self, hints: &mut impl HintSurface) -> Option<Pose> {
        let state = self.state.as_mut()?;
        let interrupted = self.phase.is_scripted();
        clear_all(hints);
        state.snap_to_rest();
        self.phase = Phase::UserControlled;
        if interrupted {
            log::info!("[demo] interrupted by user input");
            Some(state.rest_pose())
        } else {
            None
        }
    }

    /// Advance the active phase by one frame.
    ///
    /// Returns the pose to apply before rendering when the tour moved it.
    /// A phase that finishes during this tick hands over at the end of it,
    /// so the next phase starts moving on the following tick.
    pub fn tick(&mut self, dt: Duration, hints: &mut impl HintSurface) -> Option<Pose> {
        let state = self.state.as_mut()?;
        let scale = self.stepping.scale(dt);

        let (finished, moved) = match &mut self.phase {
            Phase::Idle { waited } => {
                *waited += dt;
                (*waited >= self.schedule.idle, false)
            }
            Phase::Rotating { delta, elapsed } => {
                *elapsed += dt;
                *delta = (*delta + DEMO_ROTATE_STEP * scale).min(DEMO_ROTATE_SPAN);
                state.rotation = state.initial_rotation + *delta;
                let complete = *delta >= DEMO_ROTATE_SPAN;
                (phase_over(self.schedule.rotating, *elapsed, complete), true)
            }
            Phase::Zooming { param, elapsed } => {
                *elapsed += dt;
                *param = (*param + DEMO_ZOOM_STEP * scale).min(DEMO_ZOOM_CYCLE);
                state.camera_distance = state.initial_camera_distance - zoom_offset(*param);
                let complete = *param >= DEMO_ZOOM_CYCLE;
                (phase_over(self.schedule.zooming, *elapsed, complete), true)
            }
            Phase::ReturningToRest(tween) => {
                tween.progress += DEMO_RETURN_STEP * scale;
                if tween.progress >= 1.0 {
                    state.snap_to_rest();
                    (true, true)
                } else {
                    let eased = ease_out_cubic(tween.progress);
                    state.rotation = lerp(tween.start.rotation, state.initial_rotation, eased);
                    state.camera_distance = lerp(
                        tween.start.camera_distance,
                        state.initial_camera_distance,
                        eased,
                    );
                    (false, true)
                }
            }
            Phase::Done | Phase::UserControlled => return None,
        };
        let pose = moved.then(|| state.pose());

        if finished {
            self.advance(hints);
        }
        pose
    }

    fn advance(&mut self, hints: &mut impl HintSurface) {
        match self.phase.kind() {
            PhaseKind::Idle => self.enter_rotating(hints),
            PhaseKind::Rotating => self.enter_zooming(hints),
            PhaseKind::Zooming => self.enter_returning_to_rest(hints),
            PhaseKind::ReturningToRest => {
                self.phase = Phase::Done;
                log::info!("[demo] tour complete");
            }
            PhaseKind::Done | PhaseKind::UserControlled => {}
        }
    }
}
