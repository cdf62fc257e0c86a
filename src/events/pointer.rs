use crate::dom::WindowListener;
use crate::frame::HeartLoop;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Weak;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Forward window `pointermove` to the loop's motion entry point, in overlay pixels.
pub fn wire_pointermove(engine: Weak<RefCell<HeartLoop>>) -> anyhow::Result<WindowListener> {
    WindowListener::add("pointermove", move |ev: web::Event| {
        let Some(ev) = ev.dyn_ref::<web::MouseEvent>() else {
            return;
        };
        let Some(engine) = engine.upgrade() else {
            return;
        };
        let Ok(mut e) = engine.try_borrow_mut() else {
            return;
        };
        let Some(pos) = e.surface().map(|s| s.client_to_canvas(ev)) else {
            return;
        };
        e.on_motion_event(Instant::now(), pos.x, pos.y);
    })
}
