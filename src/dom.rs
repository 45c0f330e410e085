use crate::anchor::OffsetNode;
use crate::motion::{StyleUpdate, Viewport};
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

// Live scroll state; read at frame time, never snapshotted at schedule time.
pub fn viewport(window: &web::Window) -> Viewport {
    let scroll_y = window.scroll_y().unwrap_or(0.0);
    let height = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    Viewport { scroll_y, height }
}

#[inline]
pub fn apply_style(element: &web::HtmlElement, update: &StyleUpdate) -> Result<(), JsValue> {
    element.style().set_property(update.property(), update.value())
}

impl OffsetNode for web::HtmlElement {
    fn offset_top(&self) -> f64 {
        web::HtmlElement::offset_top(self) as f64
    }

    fn offset_height(&self) -> f64 {
        web::HtmlElement::offset_height(self) as f64
    }

    fn offset_parent(&self) -> Option<Self> {
        // non-HTML offset parents (e.g. SVG) end the walk
        web::HtmlElement::offset_parent(self).and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
    }
}
