use crate::dom;
use canvas_core::{ColorStop, Rgba, Surface};
use glam::Vec2;
use std::f64::consts::TAU;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Canvas 2D implementation of [`Surface`]. Scenes draw in CSS pixels; the
/// base transform scales them to the device-pixel backing store.
pub struct Canvas2dSurface {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
    dpr: f64,
    width: f64,
    height: f64,
}

impl Canvas2dSurface {
    pub fn new(canvas: web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| anyhow::anyhow!("getContext: {:?}", e))?
            .ok_or_else(|| anyhow::anyhow!("2d context unavailable"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        Ok(Self {
            canvas,
            ctx,
            dpr: dom::device_pixel_ratio(),
            width: 0.0,
            height: 0.0,
        })
    }

    /// False once the canvas element has left the document.
    #[inline]
    pub fn is_attached(&self) -> bool {
        self.canvas.is_connected()
    }

    fn apply_transform(&self, offset: Vec2) {
        _ = self.ctx.set_transform(
            self.dpr,
            0.0,
            0.0,
            self.dpr,
            self.dpr * offset.x as f64,
            self.dpr * offset.y as f64,
        );
    }

    fn add_stops(gradient: &web::CanvasGradient, stops: &[ColorStop]) {
        for stop in stops {
            _ = gradient.add_color_stop(stop.offset.clamp(0.0, 1.0), &stop.color.css());
        }
    }

    fn circle_path(&self, center: Vec2, radius: f32) {
        self.ctx.begin_path();
        _ = self.ctx.arc(
            center.x as f64,
            center.y as f64,
            radius.max(0.0) as f64,
            0.0,
            TAU,
        );
    }
}

impl Surface for Canvas2dSurface {
    fn resize(&mut self, width: u32, height: u32) {
        self.dpr = dom::sync_canvas_backing_size(&self.canvas, width, height);
        self.width = width as f64;
        self.height = height as f64;
        self.apply_transform(Vec2::ZERO);
    }

    fn clear(&mut self) {
        self.ctx.save();
        _ = self.ctx.set_transform(1.0, 0.0, 0.0, 1.0, 0.0, 0.0);
        self.ctx.clear_rect(
            0.0,
            0.0,
            self.canvas.width() as f64,
            self.canvas.height() as f64,
        );
        self.ctx.restore();
    }

    fn fill_vertical_gradient(&mut self, stops: &[ColorStop]) {
        let gradient = self.ctx.create_linear_gradient(0.0, 0.0, 0.0, self.height);
        Self::add_stops(&gradient, stops);
        self.ctx.set_fill_style_canvas_gradient(&gradient);
        self.ctx.fill_rect(0.0, 0.0, self.width, self.height);
    }

    fn fill_radial_gradient(&mut self, center: Vec2, radius: f32, stops: &[ColorStop]) {
        let (cx, cy) = (center.x as f64, center.y as f64);
        let Ok(gradient) =
            self.ctx
                .create_radial_gradient(cx, cy, 0.0, cx, cy, radius.max(0.0) as f64)
        else {
            return;
        };
        Self::add_stops(&gradient, stops);
        self.ctx.set_fill_style_canvas_gradient(&gradient);
        self.ctx.fill_rect(0.0, 0.0, self.width, self.height);
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba) {
        self.circle_path(center, radius);
        self.ctx.set_fill_style_str(&color.css());
        self.ctx.fill();
    }

    fn fill_glow(&mut self, center: Vec2, inner: f32, outer: f32, color: Rgba) {
        let (cx, cy) = (center.x as f64, center.y as f64);
        let inner = inner.max(0.0);
        let outer = outer.max(inner);
        let Ok(gradient) =
            self.ctx
                .create_radial_gradient(cx, cy, inner as f64, cx, cy, outer as f64)
        else {
            return;
        };
        Self::add_stops(
            &gradient,
            &[ColorStop::new(0.0, color), ColorStop::new(1.0, color.alpha(0.0))],
        );
        self.circle_path(center, outer);
        self.ctx.set_fill_style_canvas_gradient(&gradient);
        self.ctx.fill();
    }

    fn stroke_circle(&mut self, center: Vec2, radius: f32, width: f32, color: Rgba) {
        self.circle_path(center, radius);
        self.ctx.set_line_width(width as f64);
        self.ctx.set_stroke_style_str(&color.css());
        self.ctx.stroke();
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, width: f32, color: Rgba) {
        self.ctx.begin_path();
        self.ctx.move_to(from.x as f64, from.y as f64);
        self.ctx.line_to(to.x as f64, to.y as f64);
        self.ctx.set_line_width(width as f64);
        self.ctx.set_stroke_style_str(&color.css());
        self.ctx.stroke();
    }

    fn stroke_faded_line(&mut self, from: Vec2, to: Vec2, width: f32, color: Rgba) {
        let gradient = self.ctx.create_linear_gradient(
            from.x as f64,
            from.y as f64,
            to.x as f64,
            to.y as f64,
        );
        Self::add_stops(
            &gradient,
            &[
                ColorStop::new(0.0, color.alpha(0.0)),
                ColorStop::new(0.5, color),
                ColorStop::new(1.0, color.alpha(0.0)),
            ],
        );
        self.ctx.begin_path();
        self.ctx.move_to(from.x as f64, from.y as f64);
        self.ctx.line_to(to.x as f64, to.y as f64);
        self.ctx.set_line_width(width as f64);
        self.ctx.set_stroke_style_canvas_gradient(&gradient);
        self.ctx.stroke();
    }

    fn set_offset(&mut self, offset: Vec2) {
        self.apply_transform(offset);
    }

    fn reset_offset(&mut self) {
        self.apply_transform(Vec2::ZERO);
    }
}
