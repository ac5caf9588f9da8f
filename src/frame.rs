/// Update rate the animation ratio is normalised against
pub const REFERENCE_RATE: f32 = 60.0;

/// Frame metadata - carries frame number and timing info
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameInfo {
    pub number: u64,
    /// Seconds since the first frame
    pub time: f32,
    /// Seconds since the previous frame
    pub delta: f32,
}

impl FrameInfo {
    pub fn new(number: u64, time: f32, delta: f32) -> Self {
        Self { number, time, delta }
    }

    /// Frame built from a fixed delta, for scripted runs and tests
    pub fn fixed(number: u64, delta: f32) -> Self {
        Self::new(number, number as f32 * delta, delta)
    }

    /// Frame delta in units of the 60 Hz reference frame (1.0 at exactly 60 fps)
    pub fn animation_ratio(&self) -> f32 {
        self.delta * REFERENCE_RATE
    }
}

/// Deterministic frames with a constant delta
pub struct FixedFrames {
    delta: f32,
    next: u64,
}

impl FixedFrames {
    pub fn new(delta: f32) -> Self {
        Self { delta, next: 0 }
    }
}

impl Iterator for FixedFrames {
    type Item = FrameInfo;

    fn next(&mut self) -> Option<FrameInfo> {
        let info = FrameInfo::fixed(self.next, self.delta);
        self.next += 1;
        Some(info)
    }
}
