use crate::overlay::CanvasSurface;
use glam::Vec2;
use hearts_core::{AnimationLoop, FrameScheduler};
use std::cell::RefCell;
use std::rc::Weak;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub type HeartLoop = AnimationLoop<CanvasSurface, RafScheduler>;

/// `requestAnimationFrame`-backed scheduler.
///
/// Holds only a weak handle to the loop, so dropping the loop drops the frame closure and
/// cancels whatever frame is still pending.
pub struct RafScheduler {
    engine: Weak<RefCell<HeartLoop>>,
    tick: Closure<dyn FnMut()>,
    pending: Option<i32>,
}

impl RafScheduler {
    pub fn new(engine: Weak<RefCell<HeartLoop>>) -> Self {
        let engine_tick = engine.clone();
        let tick = Closure::wrap(Box::new(move || {
            let Some(engine) = engine_tick.upgrade() else {
                return;
            };
            match engine.try_borrow_mut() {
                Ok(mut e) => e.frame(),
                Err(_) => log::warn!("[frame] loop busy; frame skipped"),
            };
        }) as Box<dyn FnMut()>);
        Self {
            engine,
            tick,
            pending: None,
        }
    }
}

impl FrameScheduler for RafScheduler {
    fn request_frame(&mut self) {
        let Some(w) = web::window() else {
            return;
        };
        match w.request_animation_frame(self.tick.as_ref().unchecked_ref()) {
            Ok(id) => self.pending = Some(id),
            Err(e) => log::error!("requestAnimationFrame failed: {:?}", e),
        }
    }

    fn request_spawn(&mut self, at: Vec2) {
        let engine = self.engine.clone();
        let spawn = Closure::once_into_js(move || {
            if let Some(engine) = engine.upgrade() {
                if let Ok(mut e) = engine.try_borrow_mut() {
                    e.spawn_particles(at);
                }
            }
        });
        if let Some(w) = web::window() {
            _ = w.request_animation_frame(spawn.unchecked_ref());
        }
    }
}

impl Drop for RafScheduler {
    fn drop(&mut self) {
        if let (Some(id), Some(w)) = (self.pending.take(), web::window()) {
            _ = w.cancel_animation_frame(id);
        }
    }
}
