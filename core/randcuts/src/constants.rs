/// Tolerance used when comparing decoded `f32` samples.
pub const AUDIO_SAMPLE_EPSILON: f32 = 1e-4;

/// Nominal fade applied to each end of a clip before it is capped at half the clip.
pub const DEFAULT_FADE_MS: u64 = 300;

pub const DEFAULT_OUTPUT_PATH: &str = "out.wav";

/// Extensions the WAV encoder/decoder accepts, compared case-insensitively.
pub const WAV_EXTENSIONS: [&str; 2] = ["wav", "wave"];

/// Bit depth of exported PCM.
pub const EXPORT_BITS_PER_SAMPLE: u16 = 16;
