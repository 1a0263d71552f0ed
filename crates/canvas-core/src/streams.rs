//! Falling vertical "data" segments drawn behind the floating particles.

use crate::constants::*;
use crate::field::Size;
use crate::rng::SimRng;

#[derive(Clone, Debug)]
pub struct StreamSegment {
    pub y: f32,
    pub length: f32,
    pub speed: f32,
    pub opacity: f32,
}

#[derive(Clone, Debug)]
pub struct Stream {
    pub x: f32,
    pub segments: Vec<StreamSegment>,
}

#[derive(Default)]
pub struct DataStreams {
    streams: Vec<Stream>,
    height: f32,
}

impl DataStreams {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn streams(&self) -> &[Stream] {
        &self.streams
    }

    /// One column per ~100 px of width; every segment of a column shares its
    /// speed.
    pub fn regenerate(&mut self, size: Size, rng: &mut SimRng) {
        let (w, h) = (size.width as f32, size.height as f32);
        let columns = (size.width / STREAM_SPACING) as usize;
        self.height = h;
        self.streams = (0..columns)
            .map(|_| {
                let x = rng.unit() * w;
                let speed = rng.range(1.0, 3.0);
                let count = rng.between(STREAM_MIN_SEGMENTS, STREAM_MAX_SEGMENTS);
                Stream {
                    x,
                    segments: (0..count)
                        .map(|_| StreamSegment {
                            y: rng.unit() * h,
                            length: rng.range(10.0, 40.0),
                            speed,
                            opacity: rng.range(0.3, 1.0),
                        })
                        .collect(),
                }
            })
            .collect();
    }

    /// Segments that fall past the bottom restart just above the top with a
    /// fresh opacity.
    pub fn step(&mut self, dt_ms: f32, rng: &mut SimRng) {
        let h = self.height;
        for seg in self.streams.iter_mut().flat_map(|s| s.segments.iter_mut()) {
            seg.y += seg.speed * dt_ms * STREAM_SPEED_SCALE;
            if seg.y > h {
                seg.y = -seg.length;
                seg.opacity = rng.range(0.3, 1.0);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn column_count_follows_width() {
        let mut s = DataStreams::new();
        s.regenerate(Size::new(850, 400), &mut SimRng::seeded(5));
        assert_eq!(s.streams().len(), 8);
        for stream in s.streams() {
            let n = stream.segments.len();
            assert!((STREAM_MIN_SEGMENTS..=STREAM_MAX_SEGMENTS).contains(&n));
        }
    }

    #[test]
    fn segments_restart_above_top() {
        let mut s = DataStreams::new();
        let mut rng = SimRng::seeded(9);
        s.regenerate(Size::new(200, 100), &mut rng);
        // long enough for every segment to pass the bottom at least once
        s.step(2_000.0, &mut rng);
        for seg in s.streams().iter().flat_map(|c| c.segments.iter()) {
            assert!(seg.y <= 100.0);
        }
    }
}
