use timebase::SampleClock;

use crate::{
    clip::{Clip, ClipMetadata},
    timeline::{AudioTimeline, ChannelLayout},
};

/// Holds faded clips and joins them end to end.
/// No cross-fade is added between neighbours; each clip's own fade does that job.
#[derive(Debug)]
pub struct Concatenator {
    clock: SampleClock,
    layout: ChannelLayout,
    clips: Vec<Clip>,
}

impl Concatenator {
    /// The output takes the sample rate and layout of the source.
    pub fn new(clock: SampleClock, layout: ChannelLayout) -> Self {
        Self {
            clock,
            layout,
            clips: Vec::new(),
        }
    }

    pub fn add_clip(&mut self, clip: Clip) {
        self.clips.push(clip);
    }

    /// Appends the clips in the order they were added.
    ///
    /// With no clips the result is a zero-length timeline that still carries
    /// the source's rate and layout.
    pub fn concat(self) -> (AudioTimeline, Vec<ClipMetadata>) {
        let mut output = AudioTimeline::silent(self.clock, self.layout, 0);

        let mut metadata = Vec::with_capacity(self.clips.len());
        for clip in &self.clips {
            output.append(clip.frames());
            metadata.push(clip.metadata);
        }

        (output, metadata)
    }
}
