use crate::clock::SampleClock;

/// A contiguous run of frames inside a longer buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameSpan {
    pub start_frame: u64,
    pub frame_count: u64,
}

impl FrameSpan {
    /// Maps a millisecond window onto frames.
    ///
    /// Both edges are floored independently, so adjacent windows share a
    /// boundary frame exactly and a window ending at or before
    /// `clock.frames_to_ms(total)` never reaches past `total`.
    pub fn from_ms(clock: &SampleClock, start_ms: u64, duration_ms: u64) -> Self {
        let start_frame = clock.ms_to_frames(start_ms);
        let end_frame = clock.ms_to_frames(start_ms.saturating_add(duration_ms));
        Self {
            start_frame,
            frame_count: end_frame - start_frame,
        }
    }

    pub fn end_frame(&self) -> u64 {
        self.start_frame + self.frame_count
    }
}
