/// Frame-rate counter.
///
/// Accumulates frame deltas and recomputes the rate every
/// `update_interval` seconds, so the reported value is stable enough to
/// display.

#[derive(Debug, Clone)]
pub struct FpsCounter {
    frame_count: u32,
    elapsed: f32,
    fps: f32,
    /// Seconds between recomputations
    pub update_interval: f32,
}

impl FpsCounter {
    pub const DEFAULT_UPDATE_INTERVAL: f32 = 0.5;

    pub fn new() -> Self {
        Self::with_interval(Self::DEFAULT_UPDATE_INTERVAL)
    }

    pub fn with_interval(update_interval: f32) -> Self {
        Self {
            frame_count: 0,
            elapsed: 0.0,
            fps: 0.0,
            update_interval,
        }
    }

    /// Count one frame that took `delta_seconds`.
    ///
    /// Returns true when the reported rate was recomputed.
    pub fn update(&mut self, delta_seconds: f32) -> bool {
        self.elapsed += delta_seconds;
        self.frame_count += 1;

        if self.elapsed >= self.update_interval {
            self.fps = self.frame_count as f32 / self.elapsed;
            self.frame_count = 0;
            self.elapsed = 0.0;
            true
        } else {
            false
        }
    }

    /// Last computed frames per second (0 until the first interval elapses)
    pub fn fps(&self) -> f32 {
        self.fps
    }
}

impl Default for FpsCounter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "fps_counter_tests.rs"]
mod tests;
