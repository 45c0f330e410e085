#![cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod anchor;
mod batch;
mod constants;
mod controller;
mod dom;
mod gate;
mod lifecycle;
mod motion;
mod options;
mod parallax;

pub use constants::{PARALLAX_ATTRIBUTE, PARALLAX_CUSTOM_PROPERTY};
pub use options::{parse_motion_options, ConfigParseError, MotionOptions};
pub use parallax::{Parallax, ParallaxError};

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("parallax module loaded");
    Ok(())
}

/// Bind a controller to every element in `document` carrying `attribute`.
///
/// An element whose attribute does not parse is logged and skipped; the others
/// are still bound. Controllers keep running when the returned handles are
/// dropped; call [`Parallax::destroy`] to stop one.
pub fn bind_all(document: &web::Document, attribute: &str) -> anyhow::Result<Vec<Parallax>> {
    let nodes = document
        .query_selector_all(&constants::attribute_selector(attribute))
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    let bound = batch::bind_each((0..nodes.length()).filter_map(|i| nodes.item(i)), |node| {
        let element = node
            .dyn_into::<web::HtmlElement>()
            .map_err(|_| anyhow::anyhow!("not an HTML element"))?;
        Parallax::with_attribute(element, attribute)
    });
    log::info!("[parallax] bound {} of {} elements", bound.len(), nodes.length());
    Ok(bound)
}

#[wasm_bindgen]
pub fn bind() -> Result<js_sys::Array, JsValue> {
    bind_with(PARALLAX_ATTRIBUTE)
}

#[wasm_bindgen(js_name = bindWith)]
pub fn bind_with(attribute: &str) -> Result<js_sys::Array, JsValue> {
    let document = dom::window_document().ok_or_else(|| JsValue::from_str("no document"))?;
    let bound = bind_all(&document, attribute)
        .map_err(|e| JsValue::from(js_sys::Error::new(&format!("{:#}", e))))?;
    Ok(bound.into_iter().map(JsValue::from).collect())
}
