#![cfg(target_arch = "wasm32")]
//! Browser host for the heart-trail overlay.
//!
//! The page creates a [`HeartTrail`], attaches it to an anchor element and either forwards
//! motion itself (`on_motion_event`) or lets the overlay follow the pointer.

use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod constants;
mod dom;
mod events;
mod frame;
mod overlay;
mod viewport;

use frame::{HeartLoop, RafScheduler};
use hearts_core::AnimationLoop;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("hearts-web starting");
    Ok(())
}

fn to_js(e: anyhow::Error) -> JsValue {
    log::error!("{:?}", e);
    JsValue::from_str(&e.to_string())
}

/// Heart particles trailing a moving point, drawn on a transparent full-viewport overlay.
#[wasm_bindgen]
pub struct HeartTrail {
    engine: Rc<RefCell<HeartLoop>>,
    resize_listener: Option<dom::WindowListener>,
    pointer_listener: Option<dom::WindowListener>,
}

#[wasm_bindgen]
impl HeartTrail {
    #[wasm_bindgen(constructor)]
    pub fn new() -> HeartTrail {
        let seed: u64 = rand::random();
        let engine = Rc::new_cyclic(|weak| {
            RefCell::new(AnimationLoop::new(RafScheduler::new(weak.clone()), seed))
        });
        HeartTrail {
            engine,
            resize_listener: None,
            pointer_listener: None,
        }
    }

    /// Mount the overlay inside `anchor` and start following viewport resizes.
    pub fn attach(&mut self, anchor: &web::HtmlElement) -> Result<(), JsValue> {
        self.try_attach(anchor).map_err(to_js)
    }

    /// Unmount the overlay. Pending frames become no-ops and no new ones are requested.
    pub fn detach(&mut self) {
        self.resize_listener = None;
        self.pointer_listener = None;
        let surface = self.engine.borrow_mut().detach();
        if let Some(surface) = surface {
            surface.destroy();
        }
    }

    /// Motion entry point for hosts that track their own cursor, in overlay pixels.
    /// Returns whether the event passed the spawn rate limit.
    pub fn on_motion_event(&self, x: f32, y: f32) -> bool {
        match self.engine.try_borrow_mut() {
            Ok(mut e) => e.on_motion_event(instant::Instant::now(), x, y),
            Err(_) => false,
        }
    }

    /// Spawn hearts wherever the pointer moves over the window.
    pub fn follow_pointer(&mut self) -> Result<(), JsValue> {
        let listener =
            events::wire_pointermove(Rc::downgrade(&self.engine)).map_err(to_js)?;
        self.pointer_listener = Some(listener);
        Ok(())
    }

    pub fn particle_count(&self) -> usize {
        self.engine.borrow().particles().len()
    }
}

impl HeartTrail {
    fn try_attach(&mut self, anchor: &web::HtmlElement) -> anyhow::Result<()> {
        let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
        let (width, height) =
            dom::viewport_size().ok_or_else(|| anyhow::anyhow!("viewport size unavailable"))?;

        let surface = overlay::CanvasSurface::create(&document, anchor, width, height)?;
        let previous = self.engine.borrow_mut().attach(surface);
        if let Some(previous) = previous {
            previous.destroy();
        }

        let engine = Rc::downgrade(&self.engine);
        self.resize_listener = Some(dom::WindowListener::add("resize", move |_| {
            let (Some(engine), Some((w, h))) = (engine.upgrade(), dom::viewport_size()) else {
                return;
            };
            if let Ok(mut e) = engine.try_borrow_mut() {
                e.resize(w, h);
            }
        })?);
        Ok(())
    }
}

impl Default for HeartTrail {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for HeartTrail {
    fn drop(&mut self) {
        self.detach();
    }
}
