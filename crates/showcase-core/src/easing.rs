//! Interpolation helpers used by the demo sequencer.

use crate::constants::{DEMO_ZOOM_AMPLITUDE, DEMO_ZOOM_CYCLE};
use std::f32::consts::PI;

#[inline]
pub fn lerp(from: f32, to: f32, t: f32) -> f32 {
    from + (to - from) * t
}

/// Cubic ease-out: fast start, settles gently as `t` approaches 1.
#[inline]
pub fn ease_out_cubic(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

/// Camera offset toward the model for a zoom parameter in `[0, 2π]`.
///
/// The first half zooms in along a sine arc; the second half mirrors it so
/// that `t` and `2π - t` give the same offset.
#[inline]
pub fn zoom_offset(t: f32) -> f32 {
    let t = t.clamp(0.0, DEMO_ZOOM_CYCLE);
    if t <= PI {
        t.sin() * DEMO_ZOOM_AMPLITUDE
    } else {
        let out_progress = (t - PI) / PI;
        (PI - out_progress * PI).sin() * DEMO_ZOOM_AMPLITUDE
    }
}
