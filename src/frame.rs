use crate::surface::Canvas2dSurface;
use canvas_core::{FrameScheduler, FrameToken, ReactiveCanvas, Surface};
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;
pub type SharedCanvas = Rc<RefCell<ReactiveCanvas<RafScheduler>>>;
pub type SharedSurface = Rc<RefCell<Option<Canvas2dSurface>>>;

/// `requestAnimationFrame` scheduler. The callback slot is filled by
/// [`install_frame_callback`] once the canvas it drives exists.
pub struct RafScheduler {
    window: web::Window,
    callback: FrameCallback,
}

impl RafScheduler {
    pub fn new(window: web::Window, callback: FrameCallback) -> Self {
        Self { window, callback }
    }
}

impl FrameScheduler for RafScheduler {
    fn request_frame(&mut self) -> Option<FrameToken> {
        let slot = self.callback.borrow();
        let closure = slot.as_ref()?;
        self.window
            .request_animation_frame(closure.as_ref().unchecked_ref())
            .ok()
            .map(|id| id as FrameToken)
    }

    fn cancel_frame(&mut self, token: FrameToken) {
        _ = self.window.cancel_animation_frame(token as i32);
    }
}

/// Run `f` with the drawable surface, or `None` when there is no context or
/// the canvas has been detached.
pub fn with_surface<R>(surface: &SharedSurface, f: impl FnOnce(Option<&mut dyn Surface>) -> R) -> R {
    let mut slot = surface.borrow_mut();
    let drawable = slot
        .as_mut()
        .filter(|s| s.is_attached())
        .map(|s| s as &mut dyn Surface);
    f(drawable)
}

/// Put the per-frame closure into `callback`. The closure holds the canvas
/// weakly so dropping the mount ends the loop.
pub fn install_frame_callback(callback: &FrameCallback, canvas: &SharedCanvas, surface: &SharedSurface) {
    let canvas: Weak<RefCell<ReactiveCanvas<RafScheduler>>> = Rc::downgrade(canvas);
    let surface = surface.clone();
    *callback.borrow_mut() = Some(Closure::wrap(Box::new(move |timestamp_ms: f64| {
        let Some(canvas) = canvas.upgrade() else {
            return;
        };
        let Ok(mut canvas) = canvas.try_borrow_mut() else {
            log::warn!("[frame] canvas busy, dropping frame");
            return;
        };
        with_surface(&surface, |s| canvas.frame(timestamp_ms, s));
    }) as Box<dyn FnMut(f64)>));
}
