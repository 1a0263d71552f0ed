use crate::field::Size;

/// Collapses bursts of resize notifications into one regeneration.
///
/// The first valid size is ready immediately; later ones become ready once
/// no newer notification has arrived for `debounce_ms`.
#[derive(Clone, Debug)]
pub struct ResizeHandler {
    debounce_ms: f64,
    current: Option<Size>,
    pending: Option<(Size, f64)>,
}

impl ResizeHandler {
    pub fn new(debounce_ms: f64) -> Self {
        Self {
            debounce_ms: debounce_ms.max(0.0),
            current: None,
            pending: None,
        }
    }

    /// Size most recently handed out by [`take_ready`](Self::take_ready).
    #[inline]
    pub fn current(&self) -> Option<Size> {
        self.current
    }

    #[inline]
    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Record a notification at `now_ms`. Zero-area sizes are dropped and
    /// the previous size stays in effect.
    pub fn notify(&mut self, size: Size, now_ms: f64) -> bool {
        if !size.is_valid() {
            log::debug!(
                "[resize] ignoring {}x{}, keeping previous population",
                size.width,
                size.height
            );
            return false;
        }
        let at = if self.current.is_none() || self.debounce_ms <= 0.0 {
            f64::NEG_INFINITY
        } else {
            now_ms
        };
        self.pending = Some((size, at));
        true
    }

    /// The size to apply now, if the quiet period has passed. Repeats of the
    /// current size are swallowed.
    pub fn take_ready(&mut self, now_ms: f64) -> Option<Size> {
        let (size, at) = self.pending?;
        if now_ms - at < self.debounce_ms {
            return None;
        }
        self.pending = None;
        if self.current == Some(size) {
            return None;
        }
        self.current = Some(size);
        Some(size)
    }
}
