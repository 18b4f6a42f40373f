use crate::config::ViewerConfig;
use crate::hints::DomHints;
use glam::{Mat4, Vec3};
use showcase_core::page::ViewerControl;
use showcase_core::{Camera, DemoSequencer, OrbitCamera, Pose, CAMERA_Z};
use std::time::Duration;

/// Model yaw, orbit camera and the demo tour, shared between the frame loop
/// and the DOM handlers.
pub struct Viewer {
    pub sequencer: DemoSequencer,
    pub orbit: OrbitCamera,
    pub camera: Camera,
    hints: DomHints,
    yaw: f32,
    ready: bool,
}

impl Viewer {
    pub fn new(config: &ViewerConfig, hints: DomHints, aspect: f32) -> Self {
        Self {
            sequencer: DemoSequencer::new(config.schedule, config.stepping),
            orbit: OrbitCamera::new(CAMERA_Z),
            camera: Camera::viewer(Vec3::new(0.0, 0.0, CAMERA_Z), aspect),
            hints,
            yaw: 0.0,
            ready: false,
        }
    }

    pub fn is_ready(&self) -> bool {
        self.ready
    }

    /// A model is on screen: remember its rest pose and start the tour.
    pub fn object_ready(&mut self) {
        self.ready = true;
        self.orbit.reset(CAMERA_Z);
        self.sequencer
            .on_object_ready(self.yaw, self.orbit.distance, &mut self.hints);
    }

    fn apply(&mut self, pose: Pose) {
        self.yaw = pose.rotation;
        self.orbit.set_distance(pose.camera_distance);
    }

    fn pose(&self) -> Pose {
        Pose {
            rotation: self.yaw,
            camera_distance: self.orbit.distance,
        }
    }

    /// Any direct manipulation stops the tour and snaps back to rest.
    pub fn user_interaction(&mut self) {
        if let Some(pose) = self.sequencer.on_user_interaction_start(&mut self.hints) {
            self.apply(pose);
        }
    }

    pub fn control(&mut self, control: ViewerControl) {
        if !self.ready {
            return;
        }
        self.user_interaction();
        let pose = control.apply(self.pose());
        log::debug!(
            "[viewer] {:?} -> rotation={:.3} distance={:.3}",
            control,
            pose.rotation,
            pose.camera_distance
        );
        self.apply(pose);
    }

    /// Put the camera back at its starting point in front of the model.
    pub fn reset_camera(&mut self) {
        self.orbit.reset(CAMERA_Z);
    }

    /// Advance damping and the tour by one frame.
    pub fn tick(&mut self, dt: Duration) {
        if !self.ready {
            return;
        }
        self.orbit.update();
        if let Some(pose) = self.sequencer.tick(dt, &mut self.hints) {
            self.apply(pose);
        }
        self.camera.eye = self.orbit.eye();
    }

    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_rotation_y(self.yaw)
    }
}
