/// Wall-clock accumulator for the render loop.
/// Turns variable frame deltas into elapsed scene seconds.
#[derive(Debug, Clone, Default)]
pub struct SceneClock {
    /// Seconds since the scene started.
    elapsed: f64,
    /// Frames seen, including ones with a rejected delta.
    frame: u64,
}

impl SceneClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one frame's delta. Negative or non-finite deltas only count the frame.
    /// Returns the new elapsed time.
    pub fn advance(&mut self, frame_dt: f64) -> f64 {
        self.frame += 1;
        if frame_dt.is_finite() && frame_dt >= 0.0 {
            self.elapsed += frame_dt;
        }
        self.elapsed
    }

    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn reset(&mut self) {
        self.elapsed = 0.0;
        self.frame = 0;
    }
}
