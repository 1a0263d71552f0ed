// Host-side stand-ins for the browser's requestAnimationFrame and canvas.
#![allow(dead_code)]

use canvas_core::{ColorStop, FrameScheduler, FrameToken, Rgba, Surface};
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Default, Debug)]
pub struct SchedulerLog {
    pub requested: u64,
    pub cancelled: Vec<FrameToken>,
}

/// Hands out increasing tokens and records every request and cancel.
#[derive(Clone, Default)]
pub struct MockScheduler(pub Rc<RefCell<SchedulerLog>>);

impl MockScheduler {
    pub fn requested(&self) -> u64 {
        self.0.borrow().requested
    }

    pub fn cancelled(&self) -> Vec<FrameToken> {
        self.0.borrow().cancelled.clone()
    }
}

impl FrameScheduler for MockScheduler {
    fn request_frame(&mut self) -> Option<FrameToken> {
        let mut log = self.0.borrow_mut();
        log.requested += 1;
        Some(log.requested)
    }

    fn cancel_frame(&mut self, token: FrameToken) {
        self.0.borrow_mut().cancelled.push(token);
    }
}

/// Counts drawing calls instead of drawing.
#[derive(Default, Debug)]
pub struct RecordingSurface {
    pub resizes: Vec<(u32, u32)>,
    pub clears: usize,
    pub fills: usize,
    pub strokes: usize,
    pub offsets: Vec<Vec2>,
    pub resets: usize,
}

impl RecordingSurface {
    pub fn draw_calls(&self) -> usize {
        self.clears + self.fills + self.strokes
    }
}

impl Surface for RecordingSurface {
    fn resize(&mut self, width: u32, height: u32) {
        self.resizes.push((width, height));
    }

    fn clear(&mut self) {
        self.clears += 1;
    }

    fn fill_vertical_gradient(&mut self, _stops: &[ColorStop]) {
        self.fills += 1;
    }

    fn fill_radial_gradient(&mut self, _center: Vec2, _radius: f32, _stops: &[ColorStop]) {
        self.fills += 1;
    }

    fn fill_circle(&mut self, _center: Vec2, _radius: f32, _color: Rgba) {
        self.fills += 1;
    }

    fn fill_glow(&mut self, _center: Vec2, _inner: f32, _outer: f32, _color: Rgba) {
        self.fills += 1;
    }

    fn stroke_circle(&mut self, _center: Vec2, _radius: f32, _width: f32, _color: Rgba) {
        self.strokes += 1;
    }

    fn stroke_line(&mut self, _from: Vec2, _to: Vec2, _width: f32, _color: Rgba) {
        self.strokes += 1;
    }

    fn stroke_faded_line(&mut self, _from: Vec2, _to: Vec2, _width: f32, _color: Rgba) {
        self.strokes += 1;
    }

    fn set_offset(&mut self, offset: Vec2) {
        self.offsets.push(offset);
    }

    fn reset_offset(&mut self) {
        self.resets += 1;
    }
}
