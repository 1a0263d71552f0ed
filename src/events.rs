use crate::dom::{self, EventListener};
use crate::frame::{with_surface, SharedCanvas, SharedSurface};
use glam::Vec2;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Elements that switch the cursor overlay to its hover look.
const CLICKABLE_SELECTOR: &str = "a, button, [role=button]";

pub struct PointerWiring {
    /// Receives move/down/up.
    pub target: web::EventTarget,
    /// Receives `pointerleave`.
    pub leave_target: web::EventTarget,
    /// Bounds are read from here on every move.
    pub container: web::Element,
    pub canvas: SharedCanvas,
}

fn client_position(ev: &web::Event) -> Option<Vec2> {
    let ev = ev.dyn_ref::<web::MouseEvent>()?;
    Some(Vec2::new(ev.client_x() as f32, ev.client_y() as f32))
}

fn is_over_clickable(ev: &web::Event) -> bool {
    let Some(el) = ev.target().and_then(|t| t.dyn_into::<web::Element>().ok()) else {
        return false;
    };
    if matches!(el.closest(CLICKABLE_SELECTOR), Ok(Some(_))) {
        return true;
    }
    web::window()
        .and_then(|w| w.get_computed_style(&el).ok().flatten())
        .and_then(|style| style.get_property_value("cursor").ok())
        .is_some_and(|cursor| cursor == "pointer")
}

pub fn wire_pointer_handlers(w: PointerWiring) -> anyhow::Result<Vec<EventListener>> {
    let PointerWiring {
        target,
        leave_target,
        container,
        canvas,
    } = w;
    let mut listeners = Vec::with_capacity(4);

    let c = canvas.clone();
    listeners.push(EventListener::new(&target, "pointermove", move |ev| {
        let Some(p) = client_position(&ev) else {
            return;
        };
        let rect = dom::container_rect(&container);
        let mut canvas = c.borrow_mut();
        canvas.on_pointer_move(p, rect);
        canvas.set_hovering(is_over_clickable(&ev));
    })?);

    let c = canvas.clone();
    listeners.push(EventListener::new(&leave_target, "pointerleave", move |_| {
        let mut canvas = c.borrow_mut();
        canvas.on_pointer_leave();
        canvas.set_hovering(false);
    })?);

    let c = canvas.clone();
    listeners.push(EventListener::new(&target, "pointerdown", move |_| {
        c.borrow_mut().on_pointer_down();
    })?);

    let c = canvas;
    listeners.push(EventListener::new(&target, "pointerup", move |_| {
        c.borrow_mut().on_pointer_up();
    })?);

    Ok(listeners)
}

/// Feed container bounds to the canvas on every window resize.
pub fn wire_resize(
    window: &web::Window,
    container: web::Element,
    canvas: SharedCanvas,
    surface: SharedSurface,
) -> anyhow::Result<EventListener> {
    EventListener::new(window, "resize", move |_| {
        let rect = dom::container_rect(&container);
        let now = dom::now_ms();
        let mut canvas = canvas.borrow_mut();
        with_surface(&surface, |s| canvas.on_resize(rect, now, s));
    })
}
