use crate::viewer::Viewer;
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Default)]
pub struct DragState {
    pub active: bool,
    pub last: Vec2,
}

pub struct InputWiring {
    pub canvas: web::HtmlCanvasElement,
    pub viewer: Rc<RefCell<Viewer>>,
    pub drag_state: Rc<RefCell<DragState>>,
}

pub fn wire_input_handlers(w: InputWiring) {
    wire_pointerdown(&w);
    wire_pointermove(&w);
    wire_pointerup(&w);
    wire_wheel(&w);
}

fn wire_pointerdown(w: &InputWiring) {
    let viewer = w.viewer.clone();
    let drag = w.drag_state.clone();
    let canvas_target = w.canvas.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        if !viewer.borrow().is_ready() {
            return;
        }
        viewer.borrow_mut().user_interaction();
        {
            let mut ds = drag.borrow_mut();
            ds.active = true;
            ds.last = Vec2::new(ev.client_x() as f32, ev.client_y() as f32);
        }
        log::debug!("[mouse] begin orbit drag");
        _ = canvas_target.set_pointer_capture(ev.pointer_id());
        ev.prevent_default();
    }) as Box<dyn FnMut(_)>);
    _ = w
        .canvas
        .add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointermove(w: &InputWiring) {
    let viewer = w.viewer.clone();
    let drag = w.drag_state.clone();
    let canvas = w.canvas.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let mut ds = drag.borrow_mut();
        if !ds.active {
            return;
        }
        let pos = Vec2::new(ev.client_x() as f32, ev.client_y() as f32);
        let delta = pos - ds.last;
        ds.last = pos;
        let height = canvas.client_height().max(1) as f32;
        viewer
            .borrow_mut()
            .orbit
            .rotate_by_pixels(delta.x, delta.y, height);
    }) as Box<dyn FnMut(_)>);
    _ = w
        .canvas
        .add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointerup(w: &InputWiring) {
    for event in ["pointerup", "pointercancel"] {
        let drag = w.drag_state.clone();
        let canvas_target = w.canvas.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
            if drag.borrow().active {
                drag.borrow_mut().active = false;
                _ = canvas_target.release_pointer_capture(ev.pointer_id());
            }
        }) as Box<dyn FnMut(_)>);
        _ = w
            .canvas
            .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

fn wire_wheel(w: &InputWiring) {
    let viewer = w.viewer.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::WheelEvent| {
        if !viewer.borrow().is_ready() {
            return;
        }
        ev.prevent_default();
        let mut viewer = viewer.borrow_mut();
        viewer.user_interaction();
        viewer.orbit.zoom_wheel(ev.delta_y() as f32);
    }) as Box<dyn FnMut(_)>);
    _ = w
        .canvas
        .add_event_listener_with_callback("wheel", closure.as_ref().unchecked_ref());
    closure.forget();
}
