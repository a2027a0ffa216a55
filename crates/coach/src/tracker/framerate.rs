use std::time::Duration;

// how often the reported rate is refreshed
const WINDOW: Duration = Duration::from_secs(1);

/// Frames-per-second estimate refreshed about once a second.
#[derive(Debug, Clone, Default)]
pub struct FrameRate {
    window_start: Option<Duration>,
    frames: u32,
    fps: f32,
}

impl FrameRate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a frame seen at `now` and return the current estimate.
    pub fn tick(&mut self, now: Duration) -> f32 {
        let Some(start) = self.window_start else {
            self.window_start = Some(now);
            return self.fps;
        };
        self.frames += 1;
        let elapsed = now.saturating_sub(start);
        if elapsed >= WINDOW {
            self.fps = self.frames as f32 / elapsed.as_secs_f32();
            self.frames = 0;
            self.window_start = Some(now);
        }
        self.fps
    }

    pub fn fps(&self) -> f32 {
        self.fps
    }
}
