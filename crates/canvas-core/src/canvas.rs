//! One mounted background: pointer tracker, scene, render loop, resize
//! debounce and optional glitch, wired together behind host callbacks.

use crate::config::CanvasConfig;
use crate::error::Result;
use crate::field::Size;
use crate::glitch::GlitchState;
use crate::pointer::{ContainerRect, PointerTracker};
use crate::render_loop::{FrameScheduler, LoopState, RenderLoop};
use crate::resize::ResizeHandler;
use crate::rng::SimRng;
use crate::scenes::{build_scene, FrameInput, Scene, Variant};
use crate::surface::Surface;
use glam::Vec2;
use instant::Instant;

pub struct ReactiveCanvas<S: FrameScheduler> {
    config: CanvasConfig,
    tracker: PointerTracker,
    scene: Box<dyn Scene>,
    render_loop: RenderLoop<S>,
    resize: ResizeHandler,
    glitch: Option<GlitchState>,
    rng: SimRng,
    size: Option<Size>,
}

impl<S: FrameScheduler> ReactiveCanvas<S> {
    pub fn new(config: CanvasConfig, scheduler: S, rect: ContainerRect) -> Self {
        let variant = config.variant;
        log::info!(
            "[canvas] {} variant, seed {:?}, debounce {}ms",
            variant,
            config.seed,
            config.resize_debounce_ms
        );
        Self {
            tracker: PointerTracker::new(variant.pointer_mode(), config.spring(), rect),
            scene: build_scene(variant, config.density),
            render_loop: RenderLoop::new(scheduler),
            resize: ResizeHandler::new(config.resize_debounce_ms),
            glitch: config.glitch.map(GlitchState::new),
            rng: SimRng::new(config.seed),
            size: None,
            config,
        }
    }

    #[inline]
    pub fn variant(&self) -> Variant {
        self.config.variant
    }

    #[inline]
    pub fn config(&self) -> &CanvasConfig {
        &self.config
    }

    #[inline]
    pub fn tracker(&self) -> &PointerTracker {
        &self.tracker
    }

    #[inline]
    pub fn scene(&self) -> &dyn Scene {
        self.scene.as_ref()
    }

    /// Size the scene is currently populated for.
    #[inline]
    pub fn size(&self) -> Option<Size> {
        self.size
    }

    #[inline]
    pub fn state(&self) -> LoopState {
        self.render_loop.state()
    }

    #[inline]
    pub fn render_loop(&self) -> &RenderLoop<S> {
        &self.render_loop
    }

    #[inline]
    pub fn glitch(&self) -> Option<&GlitchState> {
        self.glitch.as_ref()
    }

    pub fn start(&mut self) -> Result<()> {
        self.render_loop.start()
    }

    /// Cancel the pending frame. No callback paints after this returns.
    pub fn stop(&mut self) {
        self.render_loop.stop();
    }

    /// Pointer sample in client coordinates, mapped against `rect` as it
    /// is now. Scrolling moves the container without a resize, so the host
    /// reads the bounds on every move.
    pub fn on_pointer_move(&mut self, client: Vec2, rect: ContainerRect) {
        self.tracker.on_move_within(client, rect);
    }

    pub fn on_pointer_leave(&mut self) {
        self.tracker.on_leave();
    }

    pub fn on_pointer_down(&mut self) {
        self.scene.set_pressed(true);
    }

    pub fn on_pointer_up(&mut self) {
        self.scene.set_pressed(false);
    }

    pub fn set_hovering(&mut self, hovering: bool) {
        self.scene.set_hovering(hovering);
    }

    /// Container bounds changed at `now_ms`. When `surface` is given and the
    /// new size is already due (first size, or no debounce) it is applied
    /// right away; otherwise it waits for a later frame.
    pub fn on_resize(
        &mut self,
        rect: ContainerRect,
        now_ms: f64,
        surface: Option<&mut dyn Surface>,
    ) {
        self.tracker.set_rect(rect);
        let size = Size::new(rect.width.round() as u32, rect.height.round() as u32);
        if !self.resize.notify(size, now_ms) {
            return;
        }
        if let Some(surface) = surface {
            self.apply_resize(now_ms, surface);
        }
    }

    /// Glitch timer tick. Returns true when a glitch started.
    pub fn on_glitch_tick(&mut self, now: Instant) -> bool {
        match self.glitch.as_mut() {
            Some(g) => g.tick(now, &mut self.rng),
            None => false,
        }
    }

    /// Frame callback at `timestamp_ms`. Returns true when something was
    /// painted. The pointer spring advances on every frame. Without a
    /// surface, or before the first size is known, painting is skipped but
    /// the next frame is still requested.
    pub fn frame(&mut self, timestamp_ms: f64, surface: Option<&mut dyn Surface>) -> bool {
        let Some(dt_ms) = self.render_loop.begin_frame(timestamp_ms) else {
            return false;
        };
        self.tracker.advance(dt_ms / 1000.0);
        let painted = match surface {
            Some(surface) => self.paint(dt_ms, timestamp_ms, surface),
            None => false,
        };
        self.render_loop.end_frame();
        painted
    }

    fn paint(&mut self, dt_ms: f32, timestamp_ms: f64, surface: &mut dyn Surface) -> bool {
        self.apply_resize(timestamp_ms, surface);
        let Some(size) = self.size else {
            return false;
        };

        let dims = size.as_vec2();
        let input = FrameInput {
            dt_ms,
            time_ms: timestamp_ms,
            size,
            pointer: self.tracker.position(),
            pointer_px: self.tracker.position_px(dims.x, dims.y),
            target: self.tracker.target(),
        };
        self.scene.update(&input, &mut self.rng);

        let offset = match &self.glitch {
            Some(g) => g.offset(Instant::now(), &mut self.rng),
            None => Vec2::ZERO,
        };
        if offset != Vec2::ZERO {
            surface.set_offset(offset);
        }
        self.scene.draw(&input, surface);
        if offset != Vec2::ZERO {
            surface.reset_offset();
        }
        true
    }

    fn apply_resize(&mut self, now_ms: f64, surface: &mut dyn Surface) {
        let Some(size) = self.resize.take_ready(now_ms) else {
            return;
        };
        match self.scene.resize(size, &mut self.rng) {
            Ok(()) => {
                surface.resize(size.width, size.height);
                self.size = Some(size);
                log::debug!("[canvas] resized to {}x{}", size.width, size.height);
            }
            Err(e) => log::warn!("[canvas] resize skipped: {e}"),
        }
    }
}

impl<S: FrameScheduler> Drop for ReactiveCanvas<S> {
    fn drop(&mut self) {
        self.render_loop.stop();
    }
}
