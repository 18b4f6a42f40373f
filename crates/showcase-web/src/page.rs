use crate::constants::*;
use crate::dom;
use crate::viewer::Viewer;
use showcase_core::page::{
    fullscreen_label, step_quantity, thumb_nav_opacity, toggle_wishlist, zoom_button_icon,
    CartButton, CartView, Countdowns, Gallery, ProductColor, ViewerControl, FULLSCREEN_APIS,
};
use showcase_core::{PRESS_FEEDBACK, THUMB_SCROLL_PX};
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// Product page state that outlives a single event: the active thumbnail,
/// the cart button feedback and buttons waiting to spring back.
#[derive(Default)]
pub struct PageState {
    pub gallery: Gallery,
    cart: CartButton,
    cart_button: Option<web::HtmlButtonElement>,
    cart_label: String,
    pressed: Countdowns<web::HtmlElement>,
}

impl PageState {
    fn press(&mut self, el: &web::HtmlElement) {
        dom::set_style(el, "transform", PRESSED_SCALE);
        self.pressed.push(el.clone(), PRESS_FEEDBACK);
    }

    fn show_cart(&self, view: CartView) {
        let Some(button) = &self.cart_button else {
            return;
        };
        match view {
            CartView::Adding => {
                button.set_text_content(Some(CART_LABEL_ADDING));
                button.set_disabled(true);
            }
            CartView::Added => {
                button.set_text_content(Some(CART_LABEL_ADDED));
                dom::set_style(button, "background-color", CART_COLOR_ADDED);
            }
            CartView::Ready => {
                button.set_text_content(Some(&self.cart_label));
                dom::set_style(button, "background-color", CART_COLOR_READY);
                button.set_disabled(false);
            }
        }
    }

    /// Advance time-based feedback; called once per animation frame.
    pub fn tick(&mut self, dt: Duration) {
        for el in self.pressed.tick(dt) {
            dom::set_style(&el, "transform", RELEASED_SCALE);
        }
        if let Some(view) = self.cart.tick(dt) {
            log::debug!("[page] cart -> {:?}", view);
            self.show_cart(view);
        }
    }
}

pub fn wire_page(
    document: &web::Document,
    page: &Rc<RefCell<PageState>>,
    viewer: Option<Rc<RefCell<Viewer>>>,
) {
    wire_options(document, COLOR_OPTIONS, true);
    wire_options(document, SIZE_OPTIONS, false);
    wire_quantity(document);
    wire_gallery(document, page);
    wire_thumb_scroll(document);
    wire_cart(document, page);
    wire_wishlist(document);
    wire_zoom_button(document, viewer.clone());
    wire_control_buttons(document, page, viewer);
    wire_icon_buttons(document, page);
    wire_images(document);
    wire_container_hover(document);
    wire_fullscreen(document);
    log::info!("[page] product page wired");
}

fn main_image(document: &web::Document) -> Option<web::HtmlImageElement> {
    dom::by_id(document, MAIN_IMAGE_ID).and_then(|el| el.dyn_into::<web::HtmlImageElement>().ok())
}

fn select_one(all: &[web::HtmlElement], chosen: usize) {
    for (i, el) in all.iter().enumerate() {
        dom::set_class(el, CLASS_ACTIVE, i == chosen);
    }
}

/// Single-choice option group; colour swatches also switch the main image.
fn wire_options(document: &web::Document, selector: &str, swaps_image: bool) {
    let options = dom::query_all(document, selector);
    let image = if swaps_image {
        main_image(document)
    } else {
        None
    };
    for (index, option) in options.iter().enumerate() {
        let all = options.clone();
        let this = option.clone();
        let image = image.clone();
        dom::listen(option, "click", move || {
            select_one(&all, index);
            let color = this
                .get_attribute("data-color")
                .and_then(|value| ProductColor::from_data(&value));
            if let (Some(color), Some(img)) = (color, &image) {
                img.set_src(color.image_url());
            }
        });
    }
}

fn wire_quantity(document: &web::Document) {
    let Some(input) = document
        .query_selector(QTY_INPUT)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<web::HtmlInputElement>().ok())
    else {
        return;
    };
    for (selector, up) in [(QTY_MINUS, false), (QTY_PLUS, true)] {
        if let Some(button) = dom::query(document, selector) {
            let input = input.clone();
            dom::listen(&button, "click", move || {
                if let Some(value) = step_quantity(&input.value(), up) {
                    input.set_value(&value.to_string());
                }
            });
        }
    }
}

fn wire_gallery(document: &web::Document, page: &Rc<RefCell<PageState>>) {
    let thumbs = dom::query_all(document, THUMBNAILS);
    {
        let mut state = page.borrow_mut();
        state.gallery = Gallery::new(thumbs.len());
        if let Some(active) = thumbs
            .iter()
            .position(|t| t.class_list().contains(CLASS_ACTIVE))
        {
            state.gallery.select(active);
        }
    }
    let image = main_image(document);
    for (index, thumb) in thumbs.iter().enumerate() {
        let all = thumbs.clone();
        let page = page.clone();
        let image = image.clone();
        dom::listen(thumb, "click", move || {
            let url = page.borrow_mut().gallery.select(index);
            select_one(&all, index);
            if let (Some(url), Some(img)) = (url, &image) {
                img.set_src(url);
            }
        });
    }
}

/// Click the neighbouring thumbnail, as the keyboard arrows do.
pub fn step_thumbnail(document: &web::Document, page: &Rc<RefCell<PageState>>, forward: bool) {
    let target = {
        let state = page.borrow();
        if forward {
            state.gallery.next()
        } else {
            state.gallery.previous()
        }
    };
    if let Some(thumb) = target.and_then(|i| dom::query_all(document, THUMBNAILS).into_iter().nth(i)) {
        thumb.click();
    }
}

fn update_thumb_nav(strip: &web::HtmlElement, prev: &web::HtmlElement, next: &web::HtmlElement) {
    let max_scroll = (strip.scroll_width() - strip.client_width()) as f64;
    let (prev_opacity, next_opacity) = thumb_nav_opacity(strip.scroll_left() as f64, max_scroll);
    dom::set_style(prev, "opacity", prev_opacity);
    dom::set_style(next, "opacity", next_opacity);
}

fn wire_thumb_scroll(document: &web::Document) {
    let (Some(strip), Some(prev), Some(next)) = (
        dom::query(document, THUMB_STRIP),
        dom::query(document, PREV_THUMB),
        dom::query(document, NEXT_THUMB),
    ) else {
        return;
    };
    for (button, dx) in [(&prev, -THUMB_SCROLL_PX), (&next, THUMB_SCROLL_PX)] {
        let strip = strip.clone();
        dom::listen(button, "click", move || {
            let opts = web::ScrollToOptions::new();
            opts.set_left(dx);
            opts.set_behavior(web::ScrollBehavior::Smooth);
            strip.scroll_by_with_scroll_to_options(&opts);
        });
    }
    update_thumb_nav(&strip, &prev, &next);
    let target = strip.clone();
    dom::listen(&target, "scroll", move || update_thumb_nav(&strip, &prev, &next));
}

fn wire_cart(document: &web::Document, page: &Rc<RefCell<PageState>>) {
    let Some(button) = dom::query(document, ADD_TO_CART)
        .and_then(|el| el.dyn_into::<web::HtmlButtonElement>().ok())
    else {
        return;
    };
    {
        let mut state = page.borrow_mut();
        state.cart_label = button.text_content().unwrap_or_default();
        state.cart_button = Some(button.clone());
    }
    let page = page.clone();
    dom::listen(&button, "click", move || {
        let mut state = page.borrow_mut();
        if let Some(view) = state.cart.click() {
            log::info!("[page] add to cart");
            state.show_cart(view);
        }
    });
}

fn wire_wishlist(document: &web::Document) {
    let Some(button) = dom::query(document, WISHLIST_BTN) else {
        return;
    };
    let target = button.clone();
    dom::listen(&target, "click", move || {
        let Some(icon) = button.query_selector("i").ok().flatten() else {
            return;
        };
        let look = toggle_wishlist(icon.class_list().contains("far"));
        _ = icon.class_list().remove_1(look.icon_remove);
        _ = icon.class_list().add_1(look.icon_add);
        dom::set_style(&button, "color", look.color);
        dom::set_style(&button, "border-color", look.border);
    });
}

fn wire_zoom_button(document: &web::Document, viewer: Option<Rc<RefCell<Viewer>>>) {
    let Some(button) = dom::query(document, ZOOM_BTN) else {
        return;
    };
    let doc = document.clone();
    let target = button.clone();
    dom::listen(&target, "click", move || {
        let Some(container) = dom::query(&doc, MAIN_IMAGE_CONTAINER) else {
            return;
        };
        let zoomed = !container.class_list().contains(CLASS_ZOOMED);
        dom::set_class(&container, CLASS_ZOOMED, zoomed);
        button.set_inner_html(zoom_button_icon(zoomed));
        if let Some(viewer) = &viewer {
            viewer.borrow_mut().reset_camera();
        }
    });
}

fn control_for(button: &web::HtmlElement) -> Option<ViewerControl> {
    let has = |selector: &str| matches!(button.query_selector(selector), Ok(Some(_)));
    match button.id().as_str() {
        PREV_BTN_ID => Some(ViewerControl::RotateLeft),
        NEXT_BTN_ID => Some(ViewerControl::RotateRight),
        _ if has(ZOOM_IN_ICON) => Some(ViewerControl::ZoomIn),
        _ if has(ZOOM_OUT_ICON) => Some(ViewerControl::ZoomOut),
        _ => None,
    }
}

fn wire_control_buttons(
    document: &web::Document,
    page: &Rc<RefCell<PageState>>,
    viewer: Option<Rc<RefCell<Viewer>>>,
) {
    for button in dom::query_all(document, CONTROL_BTNS) {
        let control = control_for(&button);
        let page = page.clone();
        let viewer = viewer.clone();
        let this = button.clone();
        dom::listen(&button, "click", move || {
            page.borrow_mut().press(&this);
            if let (Some(control), Some(viewer)) = (control, &viewer) {
                viewer.borrow_mut().control(control);
            }
        });
    }
}

fn wire_icon_buttons(document: &web::Document, page: &Rc<RefCell<PageState>>) {
    for button in dom::query_all(document, ICON_BTNS) {
        let page = page.clone();
        let this = button.clone();
        dom::listen(&button, "click", move || page.borrow_mut().press(&this));
    }
}

fn wire_images(document: &web::Document) {
    let images = dom::query_all(document, "img")
        .into_iter()
        .filter_map(|el| el.dyn_into::<web::HtmlImageElement>().ok());
    for img in images {
        let loaded = img.clone();
        dom::listen(&img, "load", move || dom::set_class(&loaded, CLASS_LOADED, true));
        let failed = img.clone();
        dom::listen(&img, "error", move || {
            dom::set_style(&failed, "opacity", "0.5");
            log::warn!("[page] failed to load image: {}", failed.src());
        });
        if img.complete() {
            dom::set_class(&img, CLASS_LOADED, true);
        }
    }
}

fn wire_container_hover(document: &web::Document) {
    let Some(container) = dom::query(document, PAGE_CONTAINER) else {
        return;
    };
    let enter = container.clone();
    dom::listen(&container, "mouseenter", move || {
        dom::set_style(&enter, "transform", HOVER_SCALE)
    });
    let leave = container.clone();
    dom::listen(&container, "mouseleave", move || {
        dom::set_style(&leave, "transform", RELEASED_SCALE)
    });
}

fn js_prop(target: &JsValue, name: &str) -> JsValue {
    js_sys::Reflect::get(target, &JsValue::from_str(name)).unwrap_or(JsValue::UNDEFINED)
}

/// Call the first of `methods` that `target` implements.
fn call_first<'a>(target: &JsValue, methods: impl IntoIterator<Item = &'a str>) -> bool {
    for name in methods {
        if let Ok(method) = js_prop(target, name).dyn_into::<js_sys::Function>() {
            _ = method.call0(target);
            return true;
        }
    }
    false
}

pub fn fullscreen_supported(document: &web::Document) -> bool {
    FULLSCREEN_APIS
        .iter()
        .any(|api| js_prop(document, api.enabled).is_truthy())
}

fn is_fullscreen(document: &web::Document) -> bool {
    FULLSCREEN_APIS.iter().any(|api| {
        let el = js_prop(document, api.element);
        !el.is_null() && !el.is_undefined()
    })
}

pub fn toggle_fullscreen(document: &web::Document) {
    if !fullscreen_supported(document) {
        return;
    }
    let called = if is_fullscreen(document) {
        call_first(document, FULLSCREEN_APIS.iter().map(|api| api.exit))
    } else {
        document.body().is_some_and(|body| {
            call_first(&body, FULLSCREEN_APIS.iter().map(|api| api.request))
        })
    };
    if !called {
        log::warn!("[page] no fullscreen method available");
    }
}

fn wire_fullscreen(document: &web::Document) {
    let Some(button) = dom::by_id(document, FULLSCREEN_BTN_ID)
        .and_then(|el| el.dyn_into::<web::HtmlButtonElement>().ok())
    else {
        return;
    };
    if !fullscreen_supported(document) {
        button.set_text_content(Some(FULLSCREEN_UNSUPPORTED));
        button.set_disabled(true);
        log::warn!("[page] fullscreen not supported");
        return;
    }
    let doc = document.clone();
    dom::listen(&button, "click", move || toggle_fullscreen(&doc));
    for api in FULLSCREEN_APIS {
        let doc = document.clone();
        let button = button.clone();
        dom::listen(document, api.change_event, move || {
            let active = is_fullscreen(&doc);
            if let Some(body) = doc.body() {
                dom::set_class(&body, CLASS_FULLSCREEN, active);
            }
            button.set_text_content(Some(fullscreen_label(active)));
        });
    }
}
