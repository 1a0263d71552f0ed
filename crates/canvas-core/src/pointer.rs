use crate::spring::{Spring2, SpringConfig};
use glam::Vec2;

/// Container bounds in client (CSS) pixels, as reported by
/// `getBoundingClientRect`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ContainerRect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl ContainerRect {
    pub const fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    #[inline]
    pub fn has_area(&self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width * 0.5, self.height * 0.5)
    }
}

/// Coordinate space the tracker reports in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerMode {
    /// [0,1]×[0,1] across the container; neutral is (0.5, 0.5).
    Normalized,
    /// Pixels from the container's top-left; neutral is the center.
    Absolute,
    /// Pixels from the container's center; neutral is (0, 0).
    CenterOffset,
}

impl PointerMode {
    /// Convert a client-space sample. `None` for a container without area.
    pub fn map(self, client: Vec2, rect: &ContainerRect) -> Option<Vec2> {
        if !rect.has_area() {
            return None;
        }
        let local = client - Vec2::new(rect.left, rect.top);
        Some(match self {
            PointerMode::Normalized => local / Vec2::new(rect.width, rect.height),
            PointerMode::Absolute => local,
            PointerMode::CenterOffset => local - rect.center(),
        })
    }

    pub fn neutral(self, rect: &ContainerRect) -> Vec2 {
        match self {
            PointerMode::Normalized => Vec2::splat(0.5),
            PointerMode::Absolute => rect.center(),
            PointerMode::CenterOffset => Vec2::ZERO,
        }
    }
}

/// Raw pointer samples in, spring-smoothed position out.
///
/// Nothing here triggers rendering; the render loop calls [`advance`] and
/// reads [`position`] once per frame.
///
/// [`advance`]: PointerTracker::advance
/// [`position`]: PointerTracker::position
#[derive(Clone, Debug)]
pub struct PointerTracker {
    mode: PointerMode,
    rect: ContainerRect,
    sample: Option<Vec2>,
    spring: Spring2,
}

impl PointerTracker {
    pub fn new(mode: PointerMode, spring: SpringConfig, rect: ContainerRect) -> Self {
        let neutral = mode.neutral(&rect);
        Self {
            mode,
            rect,
            sample: None,
            spring: Spring2::new(spring, neutral),
        }
    }

    #[inline]
    pub fn mode(&self) -> PointerMode {
        self.mode
    }

    /// Update the container bounds. While the pointer is outside, the target
    /// follows the new neutral value.
    pub fn set_rect(&mut self, rect: ContainerRect) {
        let was_neutral = self.sample.is_none();
        self.rect = rect;
        if was_neutral {
            self.spring.set_target(self.mode.neutral(&rect));
        }
    }

    pub fn on_move(&mut self, client: Vec2) {
        if let Some(p) = self.mode.map(client, &self.rect) {
            self.sample = Some(p);
            self.spring.set_target(p);
        }
    }

    /// Map `client` against fresh container bounds.
    pub fn on_move_within(&mut self, client: Vec2, rect: ContainerRect) {
        self.rect = rect;
        self.on_move(client);
    }

    /// Reset the target to neutral; the smoothed value eases there.
    pub fn on_leave(&mut self) {
        self.sample = None;
        self.spring.set_target(self.mode.neutral(&self.rect));
    }

    #[inline]
    pub fn advance(&mut self, dt_sec: f32) {
        self.spring.advance(dt_sec);
    }

    /// Smoothed position in the tracker's coordinate space.
    #[inline]
    pub fn position(&self) -> Vec2 {
        self.spring.position()
    }

    /// Current target (latest sample, or neutral after leave).
    #[inline]
    pub fn target(&self) -> Vec2 {
        self.spring.target()
    }

    #[inline]
    pub fn is_inside(&self) -> bool {
        self.sample.is_some()
    }

    /// Smoothed position converted to surface pixels for a `width`×`height`
    /// drawing surface.
    pub fn position_px(&self, width: f32, height: f32) -> Vec2 {
        let p = self.position();
        match self.mode {
            PointerMode::Normalized => p * Vec2::new(width, height),
            PointerMode::Absolute => p,
            PointerMode::CenterOffset => p + Vec2::new(width, height) * 0.5,
        }
    }
}
