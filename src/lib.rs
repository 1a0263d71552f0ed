#![cfg(target_arch = "wasm32")]
use anyhow::anyhow;
use canvas_core::{CanvasConfig, ReactiveCanvas};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod dom;
mod events;
mod frame;
mod surface;

use frame::{FrameCallback, RafScheduler, SharedCanvas, SharedSurface};

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("reactive-canvas-web starting");
    Ok(())
}

fn to_js(e: anyhow::Error) -> JsValue {
    JsValue::from_str(&format!("{e:#}"))
}

/// Everything owned by one mounted background. Dropping it stops the loop,
/// clears the glitch timer, removes the listeners and restores the cursor.
struct Mounted {
    canvas: SharedCanvas,
    callback: FrameCallback,
    _listeners: Vec<dom::EventListener>,
    _glitch_timer: Option<dom::IntervalTimer>,
    _cursor: Option<dom::CursorOverride>,
}

impl Drop for Mounted {
    fn drop(&mut self) {
        if let Ok(mut canvas) = self.canvas.try_borrow_mut() {
            canvas.stop();
        }
        self.callback.borrow_mut().take();
    }
}

/// Pointer-reactive animated background bound to a container element and
/// the canvas that fills it.
#[wasm_bindgen]
pub struct ReactiveBackground {
    mounted: Option<Mounted>,
}

#[wasm_bindgen]
impl ReactiveBackground {
    /// Start animating `canvas` inside `container`. `options` is an optional
    /// JSON object, see `CanvasConfig`.
    pub fn mount(
        container: web::HtmlElement,
        canvas: web::HtmlCanvasElement,
        options: Option<String>,
    ) -> Result<ReactiveBackground, JsValue> {
        mount_inner(container.into(), canvas, options.as_deref().unwrap_or(""))
            .map(|mounted| ReactiveBackground {
                mounted: Some(mounted),
            })
            .map_err(|e| {
                log::error!("[mount] {e:#}");
                to_js(e)
            })
    }

    #[wasm_bindgen(js_name = mountById)]
    pub fn mount_by_id(
        container_id: &str,
        canvas_id: &str,
        options: Option<String>,
    ) -> Result<ReactiveBackground, JsValue> {
        let document = dom::window_document()
            .ok_or_else(|| anyhow!("no document"))
            .map_err(to_js)?;
        let container: web::HtmlElement =
            dom::element_by_id(&document, container_id).map_err(to_js)?;
        let canvas: web::HtmlCanvasElement =
            dom::element_by_id(&document, canvas_id).map_err(to_js)?;
        Self::mount(container, canvas, options)
    }

    /// Stop the loop and release every listener and timer. Safe to call
    /// more than once.
    pub fn unmount(&mut self) {
        if self.mounted.take().is_some() {
            log::info!("[mount] unmounted");
        }
    }

    #[wasm_bindgen(getter, js_name = isRunning)]
    pub fn is_running(&self) -> bool {
        self.mounted
            .as_ref()
            .and_then(|m| m.canvas.try_borrow().ok().map(|c| c.render_loop().is_running()))
            .unwrap_or(false)
    }

    #[wasm_bindgen(getter)]
    pub fn variant(&self) -> Option<String> {
        let m = self.mounted.as_ref()?;
        let c = m.canvas.try_borrow().ok()?;
        Some(c.variant().to_string())
    }
}

fn mount_inner(
    container: web::Element,
    canvas_el: web::HtmlCanvasElement,
    options: &str,
) -> anyhow::Result<Mounted> {
    let window = web::window().ok_or_else(|| anyhow!("no window"))?;
    let config = CanvasConfig::from_json(options)?;
    log::set_max_level(config.log_level().to_level_filter());

    let variant = config.variant;
    let glitch_period = config.glitch.map(|g| g.interval_ms);

    let surface: SharedSurface = Rc::new(RefCell::new(
        match surface::Canvas2dSurface::new(canvas_el) {
            Ok(s) => Some(s),
            Err(e) => {
                log::warn!("[mount] drawing disabled: {e:#}");
                None
            }
        },
    ));

    let callback: FrameCallback = Rc::new(RefCell::new(None));
    let scheduler = RafScheduler::new(window.clone(), callback.clone());
    let rect = dom::container_rect(&container);
    let canvas: SharedCanvas = Rc::new(RefCell::new(ReactiveCanvas::new(config, scheduler, rect)));
    frame::install_frame_callback(&callback, &canvas, &surface);

    {
        let mut c = canvas.borrow_mut();
        frame::with_surface(&surface, |s| c.on_resize(rect, dom::now_ms(), s));
    }

    let (target, leave_target): (web::EventTarget, web::EventTarget) = if variant.tracks_window() {
        let root = dom::window_document()
            .and_then(|d| d.document_element())
            .ok_or_else(|| anyhow!("no document element"))?;
        (window.clone().into(), root.into())
    } else {
        (container.clone().into(), container.clone().into())
    };
    let mut listeners = events::wire_pointer_handlers(events::PointerWiring {
        target,
        leave_target,
        container: container.clone(),
        canvas: canvas.clone(),
    })?;
    listeners.push(events::wire_resize(
        &window,
        container,
        canvas.clone(),
        surface,
    )?);

    let glitch_timer = match glitch_period {
        Some(period) => {
            let c = canvas.clone();
            Some(dom::IntervalTimer::new(period, move || {
                if let Ok(mut canvas) = c.try_borrow_mut() {
                    canvas.on_glitch_tick(Instant::now());
                }
            })?)
        }
        None => None,
    };

    // the trail overlay replaces the native cursor
    let cursor = if variant.tracks_window() {
        let body = dom::window_document()
            .and_then(|d| d.body())
            .ok_or_else(|| anyhow!("no document body"))?;
        Some(dom::CursorOverride::new(&body, "none")?)
    } else {
        None
    };

    canvas.borrow_mut().start()?;
    log::info!("[mount] {} background mounted", variant);

    Ok(Mounted {
        canvas,
        callback,
        _listeners: listeners,
        _glitch_timer: glitch_timer,
        _cursor: cursor,
    })
}
