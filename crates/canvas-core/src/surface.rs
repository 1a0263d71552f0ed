//! Abstract 2D drawing target.
//!
//! The host owns the real surface (a canvas element on the web); scenes only
//! issue these calls. Coordinates are CSS pixels.

use crate::color::Rgba;
use glam::Vec2;

/// One color stop of a gradient, `offset` in [0, 1].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColorStop {
    pub offset: f32,
    pub color: Rgba,
}

impl ColorStop {
    pub const fn new(offset: f32, color: Rgba) -> Self {
        Self { offset, color }
    }
}

pub trait Surface {
    /// Resize the backing buffer to `width`×`height` CSS pixels.
    fn resize(&mut self, width: u32, height: u32);

    /// Clear everything to transparent.
    fn clear(&mut self);

    /// Fill the whole surface with a top-to-bottom gradient.
    fn fill_vertical_gradient(&mut self, stops: &[ColorStop]);

    /// Fill the whole surface with a radial gradient around `center`.
    fn fill_radial_gradient(&mut self, center: Vec2, radius: f32, stops: &[ColorStop]);

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba);

    /// Disc of `outer` radius fading from `color` at `inner` to transparent.
    fn fill_glow(&mut self, center: Vec2, inner: f32, outer: f32, color: Rgba);

    fn stroke_circle(&mut self, center: Vec2, radius: f32, width: f32, color: Rgba);

    fn stroke_line(&mut self, from: Vec2, to: Vec2, width: f32, color: Rgba);

    /// Line fading in from `from`, peaking at the midpoint, fading out at `to`.
    fn stroke_faded_line(&mut self, from: Vec2, to: Vec2, width: f32, color: Rgba);

    /// Offset every following call by `offset` until [`reset_offset`].
    ///
    /// [`reset_offset`]: Surface::reset_offset
    fn set_offset(&mut self, offset: Vec2);

    fn reset_offset(&mut self);
}
