//! Product page state: options, quantity, gallery, cart feedback, wishlist,
//! viewer control buttons and keyboard shortcuts.
//!
//! Only plain data lives here; the web crate maps these results onto DOM
//! classes, styles and labels.

use crate::constants::{
    CART_ADDED, CART_ADDING, CONTROL_MAX_DISTANCE, CONTROL_MIN_DISTANCE, CONTROL_ROTATE_STEP,
    CONTROL_ZOOM_STEP, QUANTITY_MAX, QUANTITY_MIN,
};
use crate::sequencer::Pose;
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProductColor {
    Black,
    White,
    Blue,
    Red,
}

impl ProductColor {
    pub const ALL: [ProductColor; 4] = [
        ProductColor::Black,
        ProductColor::White,
        ProductColor::Blue,
        ProductColor::Red,
    ];

    /// Parse the `data-color` attribute of a colour swatch.
    pub fn from_data(value: &str) -> Option<Self> {
        match value {
            "black" => Some(ProductColor::Black),
            "white" => Some(ProductColor::White),
            "blue" => Some(ProductColor::Blue),
            "red" => Some(ProductColor::Red),
            _ => None,
        }
    }

    pub fn image_url(self) -> &'static str {
        match self {
            ProductColor::Black => "https://placehold.co/500x500/e5e5e5/333333?text=iPhone+13+Black",
            ProductColor::White => "https://placehold.co/500x500/e5e5e5/333333?text=iPhone+13+White",
            ProductColor::Blue => "https://placehold.co/500x500/e5e5e5/333333?text=iPhone+13+Blue",
            ProductColor::Red => "https://placehold.co/500x500/e5e5e5/333333?text=iPhone+13+Red",
        }
    }
}

/// Next quantity after a stepper press, or `None` when the input text is not
/// a number or the value would leave `[1, 10]`.
pub fn step_quantity(current: &str, up: bool) -> Option<u32> {
    let value: u32 = current.trim().parse().ok()?;
    if up && value < QUANTITY_MAX {
        Some(value + 1)
    } else if !up && value > QUANTITY_MIN {
        Some(value - 1)
    } else {
        None
    }
}

pub const GALLERY_IMAGES: [&str; 5] = [
    "https://placehold.co/500x500/e5e5e5/333333?text=Premium+Wireless+Headphones",
    "https://placehold.co/500x500/f0f0f0/666666?text=Side+View",
    "https://placehold.co/500x500/e8e8e8/999999?text=Video+Preview",
    "https://placehold.co/500x500/e5f3ff/4285f4?text=Blue+Version",
    "https://placehold.co/500x500/f5f5f5/333333?text=Detail+View",
];

/// Single-selection thumbnail strip.
#[derive(Clone, Debug, Default)]
pub struct Gallery {
    active: usize,
    len: usize,
}

impl Gallery {
    pub fn new(len: usize) -> Self {
        Self { active: 0, len }
    }

    pub fn active(&self) -> usize {
        self.active
    }

    /// Activate thumbnail `index`; returns the main image URL when one is mapped.
    pub fn select(&mut self, index: usize) -> Option<&'static str> {
        if index >= self.len {
            return None;
        }
        self.active = index;
        GALLERY_IMAGES.get(index).copied()
    }

    pub fn previous(&self) -> Option<usize> {
        self.active.checked_sub(1)
    }

    pub fn next(&self) -> Option<usize> {
        (self.active + 1 < self.len).then_some(self.active + 1)
    }
}

/// Opacity of the (previous, next) scroll buttons for a thumbnail strip.
pub fn thumb_nav_opacity(scroll_left: f64, max_scroll: f64) -> (&'static str, &'static str) {
    let prev = if scroll_left > 0.0 { "1" } else { "0.5" };
    let next = if scroll_left < max_scroll { "1" } else { "0.5" };
    (prev, next)
}

/// What the add-to-cart button should look like after a state change.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CartView {
    Adding,
    Added,
    Ready,
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum CartStage {
    Ready,
    Adding(Duration),
    Added(Duration),
}

/// Simulated add-to-cart feedback: busy, then confirmed, then back to normal.
#[derive(Clone, Debug)]
pub struct CartButton {
    stage: CartStage,
}

impl Default for CartButton {
    fn default() -> Self {
        Self {
            stage: CartStage::Ready,
        }
    }
}

impl CartButton {
    pub fn is_ready(&self) -> bool {
        self.stage == CartStage::Ready
    }

    pub fn click(&mut self) -> Option<CartView> {
        if !self.is_ready() {
            return None;
        }
        self.stage = CartStage::Adding(Duration::ZERO);
        Some(CartView::Adding)
    }

    /// Advance by `dt`; returns the new view when the stage changed.
    pub fn tick(&mut self, dt: Duration) -> Option<CartView> {
        match &mut self.stage {
            CartStage::Ready => None,
            CartStage::Adding(elapsed) => {
                *elapsed += dt;
                if *elapsed >= CART_ADDING {
                    self.stage = CartStage::Added(*elapsed - CART_ADDING);
                    Some(CartView::Added)
                } else {
                    None
                }
            }
            CartStage::Added(elapsed) => {
                *elapsed += dt;
                if *elapsed >= CART_ADDED {
                    self.stage = CartStage::Ready;
                    Some(CartView::Ready)
                } else {
                    None
                }
            }
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WishlistLook {
    pub icon_add: &'static str,
    pub icon_remove: &'static str,
    pub color: &'static str,
    pub border: &'static str,
}

/// Toggle the wishlist heart given whether its icon is currently outlined.
pub fn toggle_wishlist(outlined: bool) -> WishlistLook {
    if outlined {
        WishlistLook {
            icon_add: "fas",
            icon_remove: "far",
            color: "#ff4444",
            border: "#ff4444",
        }
    } else {
        WishlistLook {
            icon_add: "far",
            icon_remove: "fas",
            color: "#666666",
            border: "#e5e5e5",
        }
    }
}

/// Icon markup for the image zoom button after toggling to `zoomed`.
pub fn zoom_button_icon(zoomed: bool) -> &'static str {
    if zoomed {
        r#"<i class="fas fa-compress"></i>"#
    } else {
        r#"<i class="fas fa-expand"></i>"#
    }
}

pub fn fullscreen_label(active: bool) -> &'static str {
    if active {
        "Exit Fullscreen"
    } else {
        "Enter Fullscreen"
    }
}

/// DOM names of one flavour of the Fullscreen API.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FullscreenApi {
    /// Document property, truthy when fullscreen may be requested.
    pub enabled: &'static str,
    /// Document property holding the fullscreen element, null otherwise.
    pub element: &'static str,
    /// Element method entering fullscreen.
    pub request: &'static str,
    /// Document method leaving fullscreen.
    pub exit: &'static str,
    pub change_event: &'static str,
}

/// Standard names first, then the prefixed ones older engines expose.
pub const FULLSCREEN_APIS: [FullscreenApi; 4] = [
    FullscreenApi {
        enabled: "fullscreenEnabled",
        element: "fullscreenElement",
        request: "requestFullscreen",
        exit: "exitFullscreen",
        change_event: "fullscreenchange",
    },
    FullscreenApi {
        enabled: "webkitFullscreenEnabled",
        element: "webkitFullscreenElement",
        request: "webkitRequestFullscreen",
        exit: "webkitExitFullscreen",
        change_event: "webkitfullscreenchange",
    },
    FullscreenApi {
        enabled: "mozFullScreenEnabled",
        element: "mozFullScreenElement",
        request: "mozRequestFullScreen",
        exit: "mozCancelFullScreen",
        change_event: "mozfullscreenchange",
    },
    FullscreenApi {
        enabled: "msFullscreenEnabled",
        element: "msFullscreenElement",
        request: "msRequestFullscreen",
        exit: "msExitFullscreen",
        change_event: "MSFullscreenChange",
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewerControl {
    RotateLeft,
    RotateRight,
    ZoomIn,
    ZoomOut,
}

impl ViewerControl {
    pub fn apply(self, pose: Pose) -> Pose {
        match self {
            ViewerControl::RotateLeft => Pose {
                rotation: pose.rotation - CONTROL_ROTATE_STEP,
                ..pose
            },
            ViewerControl::RotateRight => Pose {
                rotation: pose.rotation + CONTROL_ROTATE_STEP,
                ..pose
            },
            ViewerControl::ZoomIn => Pose {
                camera_distance: (pose.camera_distance - CONTROL_ZOOM_STEP)
                    .max(CONTROL_MIN_DISTANCE),
                ..pose
            },
            ViewerControl::ZoomOut => Pose {
                camera_distance: (pose.camera_distance + CONTROL_ZOOM_STEP)
                    .min(CONTROL_MAX_DISTANCE),
                ..pose
            },
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageKey {
    PreviousThumbnail,
    NextThumbnail,
    QuantityUp,
    QuantityDown,
    ToggleFullscreen,
}

impl PageKey {
    /// Keys that edit page state are ignored while typing into an input.
    pub fn allowed_in_input(self) -> bool {
        matches!(self, PageKey::ToggleFullscreen)
    }
}

#[inline]
pub fn page_key(key: &str, ctrl: bool, alt: bool, meta: bool) -> Option<PageKey> {
    match key {
        "ArrowLeft" => Some(PageKey::PreviousThumbnail),
        "ArrowRight" => Some(PageKey::NextThumbnail),
        "+" | "=" => Some(PageKey::QuantityUp),
        "-" => Some(PageKey::QuantityDown),
        "f" | "F" if !ctrl && !alt && !meta => Some(PageKey::ToggleFullscreen),
        _ => None,
    }
}

/// Items waiting for a fixed delay to pass, e.g. pressed buttons that spring
/// back after a short scale-down.
#[derive(Clone, Debug)]
pub struct Countdowns<T> {
    pending: Vec<(T, Duration)>,
}

impl<T> Default for Countdowns<T> {
    fn default() -> Self {
        Self {
            pending: Vec::new(),
        }
    }
}

impl<T> Countdowns<T> {
    pub fn push(&mut self, item: T, delay: Duration) {
        self.pending.push((item, delay));
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Advance by `dt` and drain the items whose delay has passed.
    pub fn tick(&mut self, dt: Duration) -> Vec<T> {
        let mut due = Vec::new();
        let mut keep = Vec::with_capacity(self.pending.len());
        for (item, remaining) in self.pending.drain(..) {
            match remaining.checked_sub(dt) {
                Some(left) if !left.is_zero() => keep.push((item, left)),
                _ => due.push(item),
            }
        }
        self.pending = keep;
        due
    }
}
