//! Frame-driven loop state machine: `Idle → Running → Stopped`.
//!
//! The loop never calls the frame body itself. The host's scheduler invokes
//! the callback; the callback brackets its work with [`RenderLoop::begin_frame`]
//! and [`RenderLoop::end_frame`], and `end_frame` asks for the next one.

use crate::constants::MAX_FRAME_DT_MS;
use crate::error::{CanvasError, Result};

/// Opaque handle for one scheduled callback.
pub type FrameToken = u64;

/// The environment's per-refresh scheduling primitive
/// (`requestAnimationFrame` on the web).
pub trait FrameScheduler {
    /// Ask for one callback at the next display refresh. `None` when the
    /// environment cannot schedule.
    fn request_frame(&mut self) -> Option<FrameToken>;

    /// Cancel a callback that has not fired yet.
    fn cancel_frame(&mut self, token: FrameToken);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoopState {
    Idle,
    Running,
    Stopped,
}

pub struct RenderLoop<S: FrameScheduler> {
    scheduler: S,
    state: LoopState,
    pending: Option<FrameToken>,
    last_timestamp: Option<f64>,
    frames: u64,
}

impl<S: FrameScheduler> RenderLoop<S> {
    pub fn new(scheduler: S) -> Self {
        Self {
            scheduler,
            state: LoopState::Idle,
            pending: None,
            last_timestamp: None,
            frames: 0,
        }
    }

    #[inline]
    pub fn state(&self) -> LoopState {
        self.state
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.state == LoopState::Running
    }

    /// Frames processed since start.
    #[inline]
    pub fn frames(&self) -> u64 {
        self.frames
    }

    #[inline]
    pub fn pending(&self) -> Option<FrameToken> {
        self.pending
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    /// Enter `Running` and schedule the first frame. Starting twice is a
    /// no-op; a stopped loop cannot be restarted.
    pub fn start(&mut self) -> Result<()> {
        match self.state {
            LoopState::Idle => {
                self.state = LoopState::Running;
                self.schedule();
                log::info!("[loop] started");
                Ok(())
            }
            LoopState::Running => Ok(()),
            LoopState::Stopped => {
                log::warn!("[loop] start refused: already stopped");
                Err(CanvasError::AlreadyStopped)
            }
        }
    }

    /// Enter `Stopped` and cancel the pending callback, if any.
    pub fn stop(&mut self) {
        if let Some(token) = self.pending.take() {
            self.scheduler.cancel_frame(token);
        }
        if self.state != LoopState::Stopped {
            log::info!("[loop] stopped after {} frames", self.frames);
        }
        self.state = LoopState::Stopped;
    }

    /// Open a frame at `timestamp_ms`. Returns the elapsed milliseconds since
    /// the previous frame (0 for the first, clamped to a maximum), or `None`
    /// when the loop is not running and the callback must do nothing.
    pub fn begin_frame(&mut self, timestamp_ms: f64) -> Option<f32> {
        if self.state != LoopState::Running {
            return None;
        }
        self.pending = None;
        let dt = self
            .last_timestamp
            .map(|last| (timestamp_ms - last).clamp(0.0, MAX_FRAME_DT_MS))
            .unwrap_or(0.0);
        self.last_timestamp = Some(timestamp_ms);
        self.frames += 1;
        Some(dt as f32)
    }

    /// Close the frame and schedule the next one while running.
    pub fn end_frame(&mut self) {
        if self.state == LoopState::Running && self.pending.is_none() {
            self.schedule();
        }
    }

    fn schedule(&mut self) {
        self.pending = self.scheduler.request_frame();
        if self.pending.is_none() {
            log::warn!("[loop] scheduler refused a frame request");
        }
    }
}
