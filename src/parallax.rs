use crate::anchor;
use crate::controller::{GateAction, MotionController};
use crate::dom;
use crate::gate::Visibility;
use crate::lifecycle::{KeepAlive, Subscription};
use crate::motion::StyleUpdate;
use crate::options::{parse_motion_options, ConfigParseError};
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use thiserror::Error;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Debug, Error)]
pub enum ParallaxError {
    #[error("element has no {0} attribute")]
    MissingAttribute(String),
    #[error(transparent)]
    Config(#[from] ConfigParseError),
}

// Closures handed to the browser. They only hold a weak reference back; the
// controller's own `KeepAlive` is what keeps it running.
struct Listeners {
    scroll: Closure<dyn FnMut()>,
    resize: Closure<dyn FnMut()>,
    frame: Closure<dyn FnMut()>,
    intersection: Closure<dyn FnMut(js_sys::Array)>,
}

impl Listeners {
    fn new(weak: &Weak<RefCell<Inner>>) -> Self {
        let w = weak.clone();
        let scroll = Closure::wrap(Box::new(move || {
            if let Some(inner) = w.upgrade() {
                inner.borrow_mut().on_scroll();
            }
        }) as Box<dyn FnMut()>);

        let w = weak.clone();
        let resize = Closure::wrap(Box::new(move || {
            if let Some(inner) = w.upgrade() {
                inner.borrow_mut().on_resize();
            }
        }) as Box<dyn FnMut()>);

        let w = weak.clone();
        let frame = Closure::wrap(Box::new(move || {
            if let Some(inner) = w.upgrade() {
                inner.borrow_mut().on_frame();
            }
        }) as Box<dyn FnMut()>);

        let w = weak.clone();
        let intersection = Closure::wrap(Box::new(move |entries: js_sys::Array| {
            if let Some(inner) = w.upgrade() {
                let released = inner.borrow_mut().on_intersection(&entries);
                drop(released);
            }
        }) as Box<dyn FnMut(js_sys::Array)>);

        Self {
            scroll,
            resize,
            frame,
            intersection,
        }
    }
}

struct Inner {
    element: web::HtmlElement,
    window: web::Window,
    document: web::Document,
    controller: MotionController,
    listeners: Listeners,
    observer: Option<web::IntersectionObserver>,
    frame_id: Option<i32>,
    subscription: Subscription,
    keep_alive: KeepAlive<RefCell<Inner>>,
}

impl Inner {
    // Returns the self-reference once the element has left the document.
    fn on_intersection(&mut self, entries: &js_sys::Array) -> Option<Rc<RefCell<Inner>>> {
        for entry in entries.iter() {
            let entry: web::IntersectionObserverEntry = entry.unchecked_into();
            let viewport = dom::viewport(&self.window);
            let element = &self.element;
            let action = self.controller.on_intersection(
                entry.is_intersecting(),
                || anchor::anchor_y(element),
                viewport,
            );
            match action {
                GateAction::Subscribe(update) => {
                    log::debug!(
                        "[parallax] visible anchor_y={:.1}",
                        self.controller.anchor_y()
                    );
                    self.subscribe();
                    self.apply(&update);
                }
                GateAction::Unsubscribe => {
                    log::debug!("[parallax] hidden");
                    self.unsubscribe();
                }
                GateAction::None => {}
            }
        }
        if !self.element.is_connected() {
            log::debug!("[parallax] element removed from document");
            return self.teardown();
        }
        None
    }

    fn on_scroll(&mut self) {
        if self.controller.on_scroll() {
            self.schedule_frame();
        }
    }

    fn on_resize(&mut self) {
        let anchor_y = anchor::anchor_y(&self.element);
        if self.controller.on_resize(anchor_y) {
            self.schedule_frame();
        }
    }

    fn on_frame(&mut self) {
        self.frame_id = None;
        let viewport = dom::viewport(&self.window);
        if let Some(update) = self.controller.on_frame(viewport) {
            self.apply(&update);
        }
    }

    fn refresh(&mut self) {
        let anchor_y = anchor::anchor_y(&self.element);
        if self.controller.refresh(anchor_y) {
            self.schedule_frame();
        }
    }

    fn schedule_frame(&mut self) {
        match self
            .window
            .request_animation_frame(self.listeners.frame.as_ref().unchecked_ref())
        {
            Ok(id) => self.frame_id = Some(id),
            Err(e) => {
                log::warn!("[parallax] requestAnimationFrame failed: {:?}", e);
                self.controller.abandon_frame();
            }
        }
    }

    fn apply(&self, update: &StyleUpdate) {
        if let Err(e) = dom::apply_style(&self.element, update) {
            log::warn!("[parallax] style write {} failed: {:?}", update.property(), e);
        }
    }

    fn subscribe(&mut self) {
        let scroll: &js_sys::Function = self.listeners.scroll.as_ref().unchecked_ref();
        let resize: &js_sys::Function = self.listeners.resize.as_ref().unchecked_ref();
        let (document, window) = (&self.document, &self.window);
        let attached = self.subscription.attach(|| {
            document.add_event_listener_with_callback("scroll", scroll)?;
            if let Err(e) = window.add_event_listener_with_callback("resize", resize) {
                _ = document.remove_event_listener_with_callback("scroll", scroll);
                return Err(e);
            }
            Ok(())
        });
        if let Err(e) = attached {
            log::warn!("[parallax] scroll/resize listeners failed: {:?}", e);
        }
    }

    fn unsubscribe(&mut self) {
        let scroll: &js_sys::Function = self.listeners.scroll.as_ref().unchecked_ref();
        let resize: &js_sys::Function = self.listeners.resize.as_ref().unchecked_ref();
        let (document, window) = (&self.document, &self.window);
        self.subscription.detach(|| {
            _ = document.remove_event_listener_with_callback("scroll", scroll);
            _ = window.remove_event_listener_with_callback("resize", resize);
        });
    }

    // Detach from the browser and hand back the self-reference; the caller drops
    // it once its borrow of `Inner` has ended.
    fn teardown(&mut self) -> Option<Rc<RefCell<Inner>>> {
        self.unsubscribe();
        if let Some(observer) = self.observer.take() {
            observer.disconnect();
        }
        if let Some(id) = self.frame_id.take() {
            _ = self.window.cancel_animation_frame(id);
            self.controller.abandon_frame();
        }
        self.keep_alive.release()
    }
}

/// Scroll-driven motion for one element.
///
/// The controller keeps itself alive: dropping the handle (or calling `free()`
/// from JavaScript) leaves the effect running. It stops when `destroy` is called
/// or when the element is found removed from the document.
#[wasm_bindgen]
pub struct Parallax {
    inner: Rc<RefCell<Inner>>,
}

#[wasm_bindgen]
impl Parallax {
    #[wasm_bindgen(constructor)]
    pub fn new(element: web::HtmlElement) -> Result<Parallax, JsValue> {
        Self::with_attribute(element, crate::constants::PARALLAX_ATTRIBUTE)
            .map_err(|e| js_sys::Error::new(&format!("{:#}", e)).into())
    }

    #[wasm_bindgen(getter, js_name = verticalFactor)]
    pub fn vertical_factor(&self) -> f64 {
        self.inner.borrow().controller.options().vertical_factor
    }

    #[wasm_bindgen(getter, js_name = horizontalFactor)]
    pub fn horizontal_factor(&self) -> f64 {
        self.inner.borrow().controller.options().horizontal_factor
    }

    #[wasm_bindgen(getter, js_name = rotationFactor)]
    pub fn rotation_factor(&self) -> f64 {
        self.inner.borrow().controller.options().rotation_factor
    }

    #[wasm_bindgen(getter, js_name = useCustomProperty)]
    pub fn use_custom_property(&self) -> bool {
        self.inner.borrow().controller.options().use_custom_property
    }

    #[wasm_bindgen(getter, js_name = anchorY)]
    pub fn anchor_y(&self) -> f64 {
        self.inner.borrow().controller.anchor_y()
    }

    #[wasm_bindgen(getter, js_name = isVisible)]
    pub fn is_visible(&self) -> bool {
        self.inner.borrow().controller.visibility() == Visibility::Visible
    }

    /// Re-measure the element, e.g. after content above it was inserted.
    pub fn refresh(&self) {
        self.inner.borrow_mut().refresh();
    }

    /// Detach every listener, disconnect the observer and let the controller go.
    pub fn destroy(&self) {
        let released = self.inner.borrow_mut().teardown();
        drop(released);
    }
}

impl Parallax {
    pub fn with_attribute(element: web::HtmlElement, attribute: &str) -> anyhow::Result<Self> {
        let raw = element
            .get_attribute(attribute)
            .ok_or_else(|| ParallaxError::MissingAttribute(attribute.to_string()))?;
        let options = parse_motion_options(&raw).map_err(ParallaxError::from)?;

        let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| anyhow::anyhow!("no document"))?;

        let controller = MotionController::new(options, anchor::anchor_y(&element));
        let inner = Rc::new_cyclic(|weak| {
            RefCell::new(Inner {
                element: element.clone(),
                window,
                document,
                controller,
                listeners: Listeners::new(weak),
                observer: None,
                frame_id: None,
                subscription: Subscription::default(),
                keep_alive: KeepAlive::default(),
            })
        });

        let observer = {
            let i = inner.borrow();
            web::IntersectionObserver::new(i.listeners.intersection.as_ref().unchecked_ref())
                .map_err(|e| anyhow::anyhow!("IntersectionObserver: {:?}", e))?
        };
        observer.observe(&element);
        {
            let mut i = inner.borrow_mut();
            i.observer = Some(observer);
            i.keep_alive.hold(inner.clone());
        }

        Ok(Self { inner })
    }
}
