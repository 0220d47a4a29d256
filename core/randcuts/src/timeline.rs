use std::path::{Path, PathBuf};

use timebase::{FrameSpan, SampleClock};

use crate::{
    clip::source::ClipSource,
    codec,
    error::{ExportError, LoadError},
};

/// Channel layout of the decoded source, kept so exports match the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelLayout {
    Mono,
    Stereo,
}

impl ChannelLayout {
    pub const fn from_count(channels: u16) -> Option<Self> {
        match channels {
            1 => Some(Self::Mono),
            2 => Some(Self::Stereo),
            _ => None,
        }
    }

    pub const fn count(self) -> u16 {
        match self {
            Self::Mono => 1,
            Self::Stereo => 2,
        }
    }
}

/// `AudioTimeline` is an in-memory, stereo-normalized PCM buffer.
///
/// Mono input is duplicated into both sides of each frame; the original
/// [`ChannelLayout`] is remembered so the WAV encoder can fold it back.
/// Reads copy, so a loaded timeline is never modified by the pipeline.
///
/// # Example
/// ```no_run
/// use randcuts::timeline::AudioTimeline;
///
/// let source = AudioTimeline::load("assets/wav/piano.wav").unwrap();
/// println!("{} ms", source.duration_ms());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct AudioTimeline {
    frames: Vec<(f32, f32)>,
    clock: SampleClock,
    layout: ChannelLayout,
}

impl AudioTimeline {
    pub fn new(frames: Vec<(f32, f32)>, clock: SampleClock, layout: ChannelLayout) -> Self {
        Self {
            frames,
            clock,
            layout,
        }
    }

    /// Builds a timeline from interleaved samples as produced by decoders.
    /// A trailing partial frame is dropped.
    pub fn from_interleaved(samples: &[f32], clock: SampleClock, layout: ChannelLayout) -> Self {
        let frames = match layout {
            ChannelLayout::Mono => samples.iter().map(|&s| (s, s)).collect(),
            ChannelLayout::Stereo => samples
                .chunks_exact(2)
                .map(|chunk| (chunk[0], chunk[1]))
                .collect(),
        };
        Self::new(frames, clock, layout)
    }

    pub fn silent(clock: SampleClock, layout: ChannelLayout, duration_ms: u64) -> Self {
        let frame_count = clock.ms_to_frames(duration_ms);
        Self::new(vec![(0.0, 0.0); frame_count as usize], clock, layout)
    }

    /// Decodes `path`, picking the decoder from the file extension.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, LoadError> {
        codec::load(path.as_ref())
    }

    /// Encodes the timeline to `path` and returns the path written.
    pub fn export<P: AsRef<Path>>(&self, path: P) -> Result<PathBuf, ExportError> {
        codec::export(self, path.as_ref())
    }

    pub fn frames(&self) -> &[(f32, f32)] {
        &self.frames
    }

    pub fn frame_count(&self) -> u64 {
        self.frames.len() as u64
    }

    pub const fn clock(&self) -> SampleClock {
        self.clock
    }

    pub const fn sample_rate(&self) -> u32 {
        self.clock.sample_rate()
    }

    pub const fn layout(&self) -> ChannelLayout {
        self.layout
    }

    pub const fn channels(&self) -> u16 {
        self.layout.count()
    }

    /// Whole milliseconds covered by the timeline, rounded down so every
    /// millisecond window inside it maps onto existing frames.
    pub fn duration_ms(&self) -> u64 {
        self.clock.frames_to_ms(self.frame_count())
    }

    /// Appends `other` after the last frame.
    pub fn append(&mut self, other: &[(f32, f32)]) {
        self.frames.extend_from_slice(other);
    }
}

impl ClipSource for AudioTimeline {
    fn sample_clock(&self) -> SampleClock {
        self.clock
    }

    fn read_samples(&self, span: FrameSpan) -> Vec<(f32, f32)> {
        let len = self.frames.len();
        let start = usize::try_from(span.start_frame).unwrap_or(len).min(len);
        let end = usize::try_from(span.end_frame()).unwrap_or(len).min(len);
        self.frames[start..end].to_vec()
    }
}

#[cfg(test)]
mod timeline_tests {
    use super::*;

    fn clock_8k() -> SampleClock {
        SampleClock::new(8_000).unwrap()
    }

    fn ramp(frame_count: usize) -> AudioTimeline {
        let frames = (0..frame_count)
            .map(|i| (i as f32, -(i as f32)))
            .collect::<Vec<_>>();
        AudioTimeline::new(frames, clock_8k(), ChannelLayout::Stereo)
    }

    #[test]
    fn test_mono_interleaved_expands_to_stereo() {
        let timeline =
            AudioTimeline::from_interleaved(&[0.25, -0.5], clock_8k(), ChannelLayout::Mono);
        assert_eq!(timeline.frames(), &[(0.25, 0.25), (-0.5, -0.5)]);
        assert_eq!(timeline.channels(), 1);
    }

    #[test]
    fn test_stereo_interleaved_drops_partial_frame() {
        let timeline =
            AudioTimeline::from_interleaved(&[0.1, 0.2, 0.3], clock_8k(), ChannelLayout::Stereo);
        assert_eq!(timeline.frames(), &[(0.1, 0.2)]);
    }

    #[test]
    fn test_duration_rounds_down_to_whole_ms() {
        // 8 frames per ms at 8 kHz
        assert_eq!(ramp(8_000).duration_ms(), 1_000);
        assert_eq!(ramp(8_007).duration_ms(), 1_000);
        assert_eq!(ramp(8_008).duration_ms(), 1_001);
    }

    #[test]
    fn test_read_copies_without_touching_source() {
        let source = ramp(100);
        let mut copy = source.read_samples(FrameSpan {
            start_frame: 10,
            frame_count: 5,
        });
        assert_eq!(copy[0], (10.0, -10.0));
        assert_eq!(copy.len(), 5);

        copy[0] = (0.0, 0.0);
        assert_eq!(source.frame_count(), 100);
        assert_eq!(source.frames()[10], (10.0, -10.0));
    }

    #[test]
    fn test_read_past_end_is_clamped() {
        let source = ramp(10);
        let tail = source.read_samples(FrameSpan {
            start_frame: 8,
            frame_count: 5,
        });
        assert_eq!(tail.len(), 2);

        let empty = source.read_samples(FrameSpan {
            start_frame: 50,
            frame_count: 5,
        });
        assert!(empty.is_empty());
    }

    #[test]
    fn test_append_extends_in_place() {
        let mut timeline = AudioTimeline::silent(clock_8k(), ChannelLayout::Stereo, 0);
        timeline.append(&[(0.5, -0.5)]);
        timeline.append(&[(0.25, -0.25)]);
        assert_eq!(timeline.frames(), &[(0.5, -0.5), (0.25, -0.25)]);
    }

    #[test]
    fn test_silent_timeline_has_requested_length() {
        let silent = AudioTimeline::silent(clock_8k(), ChannelLayout::Mono, 250);
        assert_eq!(silent.frame_count(), 2_000);
        assert!(silent.frames().iter().all(|&(l, r)| l == 0.0 && r == 0.0));
    }
}
