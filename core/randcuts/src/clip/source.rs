use std::fmt;

use timebase::{FrameSpan, SampleClock};

/// Something clips can be cut from.
/// Implemented by `AudioTimeline`.
pub trait ClipSource: fmt::Debug {
    fn sample_clock(&self) -> SampleClock;

    /// Copy the stereo frames covered by `span`.
    /// Frames past the end are not returned, so the result may be shorter.
    fn read_samples(&self, span: FrameSpan) -> Vec<(f32, f32)>;
}

#[cfg(test)]
#[derive(Debug)]
pub struct ConstOneSource {
    pub clock: SampleClock,
}

#[cfg(test)]
impl ClipSource for ConstOneSource {
    fn sample_clock(&self) -> SampleClock {
        self.clock
    }

    fn read_samples(&self, span: FrameSpan) -> Vec<(f32, f32)> {
        vec![(1.0, 1.0); span.frame_count as usize]
    }
}
