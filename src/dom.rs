use anyhow::anyhow;
use canvas_core::ContainerRect;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Milliseconds on the same clock as `requestAnimationFrame` timestamps.
#[inline]
pub fn now_ms() -> f64 {
    web::window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or_else(js_sys::Date::now)
}

#[inline]
pub fn device_pixel_ratio() -> f64 {
    web::window()
        .map(|w| w.device_pixel_ratio())
        .filter(|dpr| *dpr > 0.0)
        .unwrap_or(1.0)
}

pub fn container_rect(el: &web::Element) -> ContainerRect {
    let r = el.get_bounding_client_rect();
    ContainerRect::new(
        r.left() as f32,
        r.top() as f32,
        r.width() as f32,
        r.height() as f32,
    )
}

pub fn element_by_id<T: JsCast>(document: &web::Document, id: &str) -> anyhow::Result<T> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| anyhow!("missing #{id}"))?
        .dyn_into::<T>()
        .map_err(|e| anyhow!("#{id} has the wrong element type: {:?}", e))
}

/// Set the canvas backing store to `width`×`height` CSS pixels times the
/// device pixel ratio. Returns the ratio used.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement, width: u32, height: u32) -> f64 {
    let dpr = device_pixel_ratio();
    let w_px = (width as f64 * dpr) as u32;
    let h_px = (height as f64 * dpr) as u32;
    canvas.set_width(w_px.max(1));
    canvas.set_height(h_px.max(1));
    dpr
}

/// Event listener that unregisters itself when dropped.
pub struct EventListener {
    target: web::EventTarget,
    kind: &'static str,
    closure: Closure<dyn FnMut(web::Event)>,
}

impl EventListener {
    pub fn new(
        target: &web::EventTarget,
        kind: &'static str,
        handler: impl FnMut(web::Event) + 'static,
    ) -> anyhow::Result<Self> {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
        target
            .add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref())
            .map_err(|e| anyhow!("add {kind} listener: {:?}", e))?;
        Ok(Self {
            target: target.clone(),
            kind,
            closure,
        })
    }
}

impl Drop for EventListener {
    fn drop(&mut self) {
        _ = self
            .target
            .remove_event_listener_with_callback(self.kind, self.closure.as_ref().unchecked_ref());
    }
}

/// `setInterval` handle that clears itself when dropped.
pub struct IntervalTimer {
    window: web::Window,
    handle: i32,
    _closure: Closure<dyn FnMut()>,
}

impl IntervalTimer {
    pub fn new(period_ms: u32, handler: impl FnMut() + 'static) -> anyhow::Result<Self> {
        let window = web::window().ok_or_else(|| anyhow!("no window"))?;
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut()>);
        let handle = window
            .set_interval_with_callback_and_timeout_and_arguments_0(
                closure.as_ref().unchecked_ref(),
                period_ms.min(i32::MAX as u32) as i32,
            )
            .map_err(|e| anyhow!("setInterval: {:?}", e))?;
        Ok(Self {
            window,
            handle,
            _closure: closure,
        })
    }
}

impl Drop for IntervalTimer {
    fn drop(&mut self) {
        self.window.clear_interval_with_handle(self.handle);
    }
}

/// Overrides the `cursor` style of an element and puts the previous value
/// back when dropped.
pub struct CursorOverride {
    style: web::CssStyleDeclaration,
    previous: String,
}

impl CursorOverride {
    pub fn new(el: &web::HtmlElement, cursor: &str) -> anyhow::Result<Self> {
        let style = el.style();
        let previous = style.get_property_value("cursor").unwrap_or_default();
        style
            .set_property("cursor", cursor)
            .map_err(|e| anyhow!("set cursor: {:?}", e))?;
        Ok(Self { style, previous })
    }
}

impl Drop for CursorOverride {
    fn drop(&mut self) {
        _ = if self.previous.is_empty() {
            self.style.remove_property("cursor").map(|_| ())
        } else {
            self.style.set_property("cursor", &self.previous)
        };
    }
}
