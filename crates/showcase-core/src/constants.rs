use std::f32::consts::PI;
use std::time::Duration;

// Shared viewer/page tuning constants used by the web frontend and the tests.

// Demo sequence timing
pub const DEMO_IDLE_DELAY: Duration = Duration::from_millis(1000); // still model before the tour
pub const DEMO_ROTATE_WINDOW: Duration = Duration::from_millis(2000); // drag hint on screen
pub const DEMO_ZOOM_WINDOW: Duration = Duration::from_millis(2000); // zoom hint on screen

// Demo motion, expressed per reference frame
pub const DEMO_ROTATE_STEP: f32 = 0.015; // radians
pub const DEMO_ROTATE_SPAN: f32 = PI; // half turn
pub const DEMO_ZOOM_STEP: f32 = 0.02; // zoom phase parameter
pub const DEMO_ZOOM_CYCLE: f32 = 2.0 * PI; // one full in/out cycle
pub const DEMO_ZOOM_AMPLITUDE: f32 = 2.0; // world units toward the model at peak
pub const DEMO_RETURN_STEP: f32 = 0.02; // ease-back progress

// Frame rate the per-frame steps were tuned for
pub const REFERENCE_HZ: f32 = 60.0;

// Camera
pub const CAMERA_Z: f32 = 6.0;
pub const CAMERA_FOVY_DEG: f32 = 50.0;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 1000.0;

// Orbit controls
pub const ORBIT_DAMPING: f32 = 0.05;
pub const ORBIT_MIN_DISTANCE: f32 = 3.0;
pub const ORBIT_MAX_DISTANCE: f32 = 10.0;
pub const ORBIT_MIN_POLAR: f32 = PI / 6.0;
pub const ORBIT_MAX_POLAR: f32 = PI - PI / 6.0;
pub const ORBIT_ROTATE_SPEED: f32 = 1.0; // full canvas height drag = 2π
pub const ORBIT_ZOOM_SCALE: f32 = 0.95; // per wheel notch

// Viewer control buttons
pub const CONTROL_ROTATE_STEP: f32 = PI / 4.0;
pub const CONTROL_ZOOM_STEP: f32 = 0.5;
pub const CONTROL_MIN_DISTANCE: f32 = 2.0;
pub const CONTROL_MAX_DISTANCE: f32 = 8.0;

// Loaded model placement
pub const MODEL_SCALE: f32 = 15.0;
pub const MODEL_OFFSET: [f32; 3] = [0.0, -0.1, 0.0];
pub const SUBSTITUTE_SCALE: f32 = 0.7;

// Lighting
pub const CLEAR_COLOR: [f32; 3] = [0.973, 0.973, 0.973]; // #f8f8f8
pub const AMBIENT_COLOR: [f32; 3] = [0.251, 0.251, 0.251]; // #404040
pub const AMBIENT_INTENSITY: f32 = 0.8;
pub const SUN_INTENSITY: f32 = 0.6;
pub const SUN_POSITION: [f32; 3] = [5.0, 5.0, 5.0];

// Product page
pub const QUANTITY_MIN: u32 = 1;
pub const QUANTITY_MAX: u32 = 10;
pub const CART_ADDING: Duration = Duration::from_millis(1000);
pub const CART_ADDED: Duration = Duration::from_millis(2000);
pub const PRESS_FEEDBACK: Duration = Duration::from_millis(150);
pub const THUMB_SCROLL_PX: f64 = 100.0;
