//! Frame rate statistics averaged over one-second windows.
//!
//! Counts frames and, once per second, reports the average frames per second
//! and milliseconds per frame for display in the window title.

use std::time::Instant;

/// A completed one-second measurement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameSample {
    /// Average frames per second over the window.
    pub fps: f32,
    /// Average milliseconds per frame over the window.
    pub mspf: f32,
}

/// Accumulates frame counts and emits a [`FrameSample`] once per second.
pub struct FrameStats {
    frame_count: u32,
    window_start: Instant,
}

impl Default for FrameStats {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameStats {
    /// Creates a new `FrameStats` with an empty measurement window.
    #[must_use]
    pub fn new() -> Self {
        Self {
            frame_count: 0,
            window_start: Instant::now(),
        }
    }

    /// Record a frame. Returns a [`FrameSample`] when a full second has
    /// elapsed since the window started, then resets the window.
    pub fn on_frame(&mut self) -> Option<FrameSample> {
        self.sample_at(Instant::now())
    }

    fn sample_at(&mut self, now: Instant) -> Option<FrameSample> {
        self.frame_count += 1;

        let elapsed = now.duration_since(self.window_start).as_secs_f32();
        if elapsed < 1.0 {
            return None;
        }

        let fps = self.frame_count as f32 / elapsed;
        let mspf = 1000.0 / fps;

        self.frame_count = 0;
        self.window_start = now;

        Some(FrameSample { fps, mspf })
    }
}

/// Format a window title with the given stats appended.
#[must_use]
pub fn title_with_stats(title: &str, sample: &FrameSample) -> String {
    format!(
        "{title}    fps: {:.0}   mspf: {:.2}",
        sample.fps, sample.mspf
    )
}
