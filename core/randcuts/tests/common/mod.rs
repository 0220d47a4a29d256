use std::error::Error;
use std::path::Path;

use hound::{SampleFormat, WavSpec, WavWriter};

/// Write a sine tone WAV so tests never depend on committed audio assets.
pub fn write_test_tone<P: AsRef<Path>>(
    path: P,
    sample_rate: u32,
    channels: u16,
    duration_ms: u64,
) -> Result<(), Box<dyn Error>> {
    let spec = WavSpec {
        channels,
        sample_rate,
        bits_per_sample: 16,
        sample_format: SampleFormat::Int,
    };
    let mut writer = WavWriter::create(path, spec)?;
    let total_frames = u64::from(sample_rate) * duration_ms / 1_000;

    for n in 0..total_frames {
        let theta = (n as f32 / sample_rate as f32) * 2.0 * std::f32::consts::PI * 440.0;
        let sample = (theta.sin() * 0.8 * f32::from(i16::MAX)) as i16;
        for _ in 0..channels {
            writer.write_sample(sample)?;
        }
    }
    writer.finalize()?;
    Ok(())
}
