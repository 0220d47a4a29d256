use std::fmt;

use log::debug;
use timebase::FrameSpan;

use crate::clip::{fades::Fader, source::ClipSource};

pub mod fades;
pub mod request;
pub mod source;

/// Where a clip sits in the source, chosen before any samples are read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClipWindow {
    /// Position in the request list.
    pub index: usize,
    pub start_ms: u64,
    pub duration_ms: u64,
}

impl ClipWindow {
    pub fn end_ms(&self) -> u64 {
        self.start_ms + self.duration_ms
    }

    /// Two windows overlap when they share at least one millisecond.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start_ms < other.end_ms() && other.start_ms < self.end_ms()
    }
}

/// What was cut for one request. Returned to the caller, never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClipMetadata {
    pub index: usize,
    pub start_ms: u64,
    pub duration_ms: u64,
    /// Fade actually applied to each end, at most half of `duration_ms`.
    pub fade_ms: u64,
}

impl ClipMetadata {
    pub fn end_ms(&self) -> u64 {
        self.start_ms + self.duration_ms
    }
}

impl fmt::Display for ClipMetadata {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Clip {}: dur={} ms | start={} ms | fade={} ms",
            self.index, self.duration_ms, self.start_ms, self.fade_ms
        )
    }
}

/// A faded copy of one window of the source.
#[derive(Debug, Clone, PartialEq)]
pub struct Clip {
    pub metadata: ClipMetadata,
    frames: Vec<(f32, f32)>,
}

impl Clip {
    /// Copies `window` out of `source` and applies the fader's envelope.
    pub fn extract<S: ClipSource + ?Sized>(source: &S, window: ClipWindow, fader: &Fader) -> Self {
        let clock = source.sample_clock();
        let span = FrameSpan::from_ms(&clock, window.start_ms, window.duration_ms);
        let mut frames = source.read_samples(span);

        let fade = fader.fade_for(&clock, window.duration_ms);
        fade.apply(&mut frames);

        let metadata = ClipMetadata {
            index: window.index,
            start_ms: window.start_ms,
            duration_ms: window.duration_ms,
            fade_ms: fader.effective_ms(window.duration_ms),
        };
        debug!(
            "cut clip {} at frame {} ({} frames, fade {} frames)",
            metadata.index,
            span.start_frame,
            frames.len(),
            fade.length_frames
        );

        Self { metadata, frames }
    }

    pub fn frames(&self) -> &[(f32, f32)] {
        &self.frames
    }
}
