pub mod keyboard;
pub mod pointer;

pub use keyboard::wire_page_keydown;
pub use pointer::{wire_input_handlers, DragState, InputWiring};
