use crate::constants::{QTY_MINUS, QTY_PLUS};
use crate::dom;
use crate::page::{self, PageState};
use showcase_core::page::{page_key, PageKey};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

fn typing_into_input(ev: &web::KeyboardEvent) -> bool {
    ev.target()
        .and_then(|t| t.dyn_into::<web::Element>().ok())
        .is_some_and(|el| el.tag_name().eq_ignore_ascii_case("input"))
}

pub fn handle_page_keydown(
    ev: &web::KeyboardEvent,
    document: &web::Document,
    page: &Rc<RefCell<PageState>>,
) {
    let Some(key) = page_key(&ev.key(), ev.ctrl_key(), ev.alt_key(), ev.meta_key()) else {
        return;
    };
    if typing_into_input(ev) && !key.allowed_in_input() {
        return;
    }
    if key == PageKey::ToggleFullscreen && !page::fullscreen_supported(document) {
        return;
    }
    ev.prevent_default();
    match key {
        PageKey::PreviousThumbnail => page::step_thumbnail(document, page, false),
        PageKey::NextThumbnail => page::step_thumbnail(document, page, true),
        PageKey::QuantityUp => {
            if let Some(button) = dom::query(document, QTY_PLUS) {
                button.click();
            }
        }
        PageKey::QuantityDown => {
            if let Some(button) = dom::query(document, QTY_MINUS) {
                button.click();
            }
        }
        PageKey::ToggleFullscreen => page::toggle_fullscreen(document),
    }
}

pub fn wire_page_keydown(document: &web::Document, page: Rc<RefCell<PageState>>) {
    let doc = document.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
        handle_page_keydown(&ev, &doc, &page);
    }) as Box<dyn FnMut(_)>);
    _ = document.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
    closure.forget();
}
