use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn query(document: &web::Document, selector: &str) -> Option<web::HtmlElement> {
    document
        .query_selector(selector)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
}

/// All elements matching `selector`, in document order.
pub fn query_all(document: &web::Document, selector: &str) -> Vec<web::HtmlElement> {
    let Ok(list) = document.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<web::HtmlElement>().ok())
        .collect()
}

#[inline]
pub fn by_id(document: &web::Document, id: &str) -> Option<web::HtmlElement> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
}

/// Parent of the first element matching `selector`; icon fonts put the
/// clickable button one level up.
pub fn icon_parent(document: &web::Document, selector: &str) -> Option<web::HtmlElement> {
    document
        .query_selector(selector)
        .ok()
        .flatten()
        .and_then(|icon| icon.parent_element())
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
}

/// Attach `handler` for `event` on `target` for the lifetime of the page.
pub fn listen(target: &web::EventTarget, event: &str, mut handler: impl FnMut() + 'static) {
    let closure = Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
    _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

pub fn set_style(el: &web::HtmlElement, property: &str, value: &str) {
    _ = el.style().set_property(property, value);
}

pub fn set_class(el: &web::Element, class: &str, on: bool) {
    let list = el.class_list();
    _ = if on { list.add_1(class) } else { list.remove_1(class) };
}

/// Match the canvas backing store to its container's CSS size.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement, container: &web::Element) {
    if let Some(w) = web::window() {
        let dpr = w.device_pixel_ratio();
        let w_px = (container.client_width() as f64 * dpr) as u32;
        let h_px = (container.client_height() as f64 * dpr) as u32;
        canvas.set_width(w_px.max(1));
        canvas.set_height(h_px.max(1));
    }
}
