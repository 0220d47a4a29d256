use std::{
    fs::File,
    io::{BufWriter, Read, Seek, Write},
    path::Path,
};

use hound::{SampleFormat, WavReader, WavSpec, WavWriter};
use log::debug;
use timebase::SampleClock;

use crate::{
    constants::EXPORT_BITS_PER_SAMPLE,
    error::{ExportError, LoadError},
    timeline::{AudioTimeline, ChannelLayout},
};

/// Decodes a WAV file into an [`AudioTimeline`].
///
/// Supports:
/// - Mono and Stereo files (mono is duplicated into both channels)
/// - 8 to 32-bit integer or 32-bit float samples (converted to `f32`)
///
/// Does NOT support more than 2 channels.
pub fn read_file<P: AsRef<Path>>(path: P) -> Result<AudioTimeline, LoadError> {
    let reader = WavReader::open(path)?;
    from_reader(reader)
}

pub fn read_stream<R: Read>(stream: R) -> Result<AudioTimeline, LoadError> {
    let reader = WavReader::new(stream)?;
    from_reader(reader)
}

fn from_reader<R: Read>(reader: WavReader<R>) -> Result<AudioTimeline, LoadError> {
    let spec = reader.spec();
    let layout = ChannelLayout::from_count(spec.channels)
        .ok_or(LoadError::UnsupportedChannels(spec.channels))?;
    let clock = SampleClock::new(spec.sample_rate).ok_or(LoadError::MissingSampleRate)?;

    debug!(
        "wav spec: {} ch, {} Hz, {} bit {:?}",
        spec.channels, spec.sample_rate, spec.bits_per_sample, spec.sample_format
    );

    let samples = decode_pcm_samples(reader)?;
    Ok(AudioTimeline::from_interleaved(&samples, clock, layout))
}

fn decode_pcm_samples<R: Read>(reader: WavReader<R>) -> Result<Vec<f32>, LoadError> {
    let spec = reader.spec();
    let samples = match spec.sample_format {
        SampleFormat::Int => {
            let full_scale = ((1_i64 << (spec.bits_per_sample.clamp(1, 32) - 1)) - 1).max(1) as f32;
            reader
                .into_samples::<i32>()
                .map(|sample| sample.map(|s| s as f32 / full_scale))
                .collect::<Result<Vec<f32>, _>>()?
        }
        SampleFormat::Float => reader
            .into_samples::<f32>()
            .collect::<Result<Vec<f32>, _>>()?,
    };
    Ok(samples)
}

/// Encodes `timeline` as 16-bit PCM, keeping its sample rate and layout.
pub fn write_file<P: AsRef<Path>>(timeline: &AudioTimeline, path: P) -> Result<(), ExportError> {
    let file = BufWriter::new(File::create(path)?);
    write_stream(timeline, file)
}

pub fn write_stream<W: Write + Seek>(timeline: &AudioTimeline, stream: W) -> Result<(), ExportError> {
    let spec = WavSpec {
        channels: timeline.channels(),
        sample_rate: timeline.sample_rate(),
        bits_per_sample: EXPORT_BITS_PER_SAMPLE,
        sample_format: SampleFormat::Int,
    };
    let mut writer = WavWriter::new(stream, spec)?;

    for &(l, r) in timeline.frames() {
        match timeline.layout() {
            ChannelLayout::Mono => writer.write_sample(to_pcm16(l))?,
            ChannelLayout::Stereo => {
                writer.write_sample(to_pcm16(l))?;
                writer.write_sample(to_pcm16(r))?;
            }
        }
    }

    writer.finalize()?;
    Ok(())
}

fn to_pcm16(sample: f32) -> i16 {
    (sample.clamp(-1.0, 1.0) * f32::from(i16::MAX)).round() as i16
}
