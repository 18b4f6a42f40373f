use crate::constants::{
    CHEVRON_DOWN_ICON, CHEVRON_UP_ICON, CLASS_HIGHLIGHT, CLASS_SHOW, DRAG_HINT_ID, NEXT_BTN_ID,
    PREV_BTN_ID, ZOOM_HINT_ID, ZOOM_IN_ICON, ZOOM_OUT_ICON,
};
use crate::dom;
use showcase_core::{Hint, HintSurface, Icon};
use web_sys as web;

/// Hint overlays and highlightable toolbar buttons of the viewer.
///
/// Elements missing from the markup are skipped silently.
pub struct DomHints {
    drag_hint: Option<web::HtmlElement>,
    zoom_hint: Option<web::HtmlElement>,
    prev: Option<web::HtmlElement>,
    next: Option<web::HtmlElement>,
    chevron_up: Option<web::HtmlElement>,
    chevron_down: Option<web::HtmlElement>,
    zoom_in: Option<web::HtmlElement>,
    zoom_out: Option<web::HtmlElement>,
}

impl DomHints {
    pub fn from_document(document: &web::Document) -> Self {
        Self {
            drag_hint: dom::by_id(document, DRAG_HINT_ID),
            zoom_hint: dom::by_id(document, ZOOM_HINT_ID),
            prev: dom::by_id(document, PREV_BTN_ID),
            next: dom::by_id(document, NEXT_BTN_ID),
            chevron_up: dom::icon_parent(document, CHEVRON_UP_ICON),
            chevron_down: dom::icon_parent(document, CHEVRON_DOWN_ICON),
            zoom_in: dom::icon_parent(document, ZOOM_IN_ICON),
            zoom_out: dom::icon_parent(document, ZOOM_OUT_ICON),
        }
    }

    fn hint(&self, hint: Hint) -> Option<&web::HtmlElement> {
        match hint {
            Hint::Drag => self.drag_hint.as_ref(),
            Hint::Zoom => self.zoom_hint.as_ref(),
        }
    }

    fn icon(&self, icon: Icon) -> Option<&web::HtmlElement> {
        match icon {
            Icon::Prev => self.prev.as_ref(),
            Icon::Next => self.next.as_ref(),
            Icon::ChevronUp => self.chevron_up.as_ref(),
            Icon::ChevronDown => self.chevron_down.as_ref(),
            Icon::ZoomIn => self.zoom_in.as_ref(),
            Icon::ZoomOut => self.zoom_out.as_ref(),
        }
    }
}

impl HintSurface for DomHints {
    fn show_hint(&mut self, hint: Hint) {
        if let Some(el) = self.hint(hint) {
            _ = el.style().remove_property("display");
            dom::set_class(el, CLASS_SHOW, true);
        }
    }

    fn hide_hint(&mut self, hint: Hint) {
        if let Some(el) = self.hint(hint) {
            dom::set_class(el, CLASS_SHOW, false);
            dom::set_style(el, "display", "none");
        }
    }

    fn highlight(&mut self, icon: Icon) {
        if let Some(el) = self.icon(icon) {
            dom::set_class(el, CLASS_HIGHLIGHT, true);
        }
    }

    fn unhighlight(&mut self, icon: Icon) {
        if let Some(el) = self.icon(icon) {
            dom::set_class(el, CLASS_HIGHLIGHT, false);
        }
    }
}
