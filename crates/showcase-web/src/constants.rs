// DOM names the page markup provides

// Viewer
pub const MODEL_CONTAINER_ID: &str = "model-container";
pub const MODEL_LOADER_ID: &str = "model-loader";
pub const DRAG_HINT_ID: &str = "interaction-hint";
pub const ZOOM_HINT_ID: &str = "zoom-hint";
pub const PREV_BTN_ID: &str = "prev-btn";
pub const NEXT_BTN_ID: &str = "next-btn";
pub const ZOOM_IN_ICON: &str = ".fa-search-plus"; // highlighted element is the icon's parent
pub const ZOOM_OUT_ICON: &str = ".fa-search-minus";
pub const CHEVRON_UP_ICON: &str = ".fa-chevron-up";
pub const CHEVRON_DOWN_ICON: &str = ".fa-chevron-down";

// Container data attributes
pub const MODEL_URL_ATTR: &str = "data-model-url";
pub const DEMO_SCHEDULE_ATTR: &str = "data-demo-schedule";
pub const DEFAULT_MODEL_URL: &str = "./models/iPhone13.glb";

// Product page
pub const MAIN_IMAGE_ID: &str = "main-image";
pub const FULLSCREEN_BTN_ID: &str = "fullscreen-btn";
pub const COLOR_OPTIONS: &str = ".color-option";
pub const SIZE_OPTIONS: &str = ".size-option";
pub const QTY_INPUT: &str = ".qty-input";
pub const QTY_MINUS: &str = ".qty-btn.minus";
pub const QTY_PLUS: &str = ".qty-btn.plus";
pub const THUMBNAILS: &str = ".thumbnail";
pub const THUMB_STRIP: &str = ".thumbnails";
pub const PREV_THUMB: &str = ".prev-thumb";
pub const NEXT_THUMB: &str = ".next-thumb";
pub const ADD_TO_CART: &str = ".add-to-cart-btn";
pub const WISHLIST_BTN: &str = ".wishlist-btn";
pub const ZOOM_BTN: &str = ".zoom-btn";
pub const MAIN_IMAGE_CONTAINER: &str = ".main-image-container";
pub const CONTROL_BTNS: &str = ".control-btn";
pub const ICON_BTNS: &str = ".icon-btn";
pub const PAGE_CONTAINER: &str = ".container";

// Classes
pub const CLASS_SHOW: &str = "show";
pub const CLASS_HIGHLIGHT: &str = "highlight-icon";
pub const CLASS_ACTIVE: &str = "active";
pub const CLASS_LOADED: &str = "loaded";
pub const CLASS_ZOOMED: &str = "zoomed";
pub const CLASS_FULLSCREEN: &str = "fullscreen";

// Labels and styles
pub const CART_LABEL_ADDING: &str = "Adding...";
pub const CART_LABEL_ADDED: &str = "Added to Cart!";
pub const CART_COLOR_ADDED: &str = "#4caf50";
pub const CART_COLOR_READY: &str = "#4285f4";
pub const FULLSCREEN_UNSUPPORTED: &str = "Fullscreen not supported";
pub const PRESSED_SCALE: &str = "scale(0.95)";
pub const RELEASED_SCALE: &str = "scale(1)";
pub const HOVER_SCALE: &str = "scale(1.05)";
