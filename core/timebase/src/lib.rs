//! Millisecond/frame arithmetic shared by the audio pipeline.

pub mod clock;
pub mod timeline;

pub use clock::SampleClock;
pub use timeline::FrameSpan;
