use std::{fs::File, io::ErrorKind, path::Path};

use log::{debug, warn};
use symphonia::{
    core::{
        audio::SampleBuffer,
        codecs::{CODEC_TYPE_NULL, CodecParameters, DecoderOptions},
        errors::Error as SymphoniaError,
        formats::FormatOptions,
        io::{MediaSourceStream, MediaSourceStreamOptions},
        meta::MetadataOptions,
        probe::Hint,
    },
    default::{get_codecs, get_probe},
};
use timebase::SampleClock;

use crate::{
    error::LoadError,
    timeline::{AudioTimeline, ChannelLayout},
};

/// Gapless mode trims encoder delay and padding, so MP3/AAC timelines match
/// the audible length.
fn format_options() -> FormatOptions {
    FormatOptions {
        enable_gapless: true,
        ..Default::default()
    }
}

/// Checks that a track seen after a stream reset can be appended to what was
/// already decoded.
fn ensure_same_stream(
    params: &CodecParameters,
    clock: SampleClock,
    channels: Option<usize>,
) -> Result<(), LoadError> {
    if params.codec == CODEC_TYPE_NULL {
        return Err(LoadError::UnsupportedCodec);
    }
    if params.sample_rate != Some(clock.sample_rate()) {
        return Err(LoadError::StreamChanged);
    }
    match (channels, params.channels.map(|channels| channels.count())) {
        (Some(expected), Some(found)) if expected != found => Err(LoadError::StreamChanged),
        _ => Ok(()),
    }
}

/// Decodes any container/codec pair `symphonia` can probe.
///
/// The extension is only a hint; files without one are identified by content.
/// Packets that fail to decode are skipped, matching how players treat
/// corrupt frames. Chained streams (e.g. linked Ogg files) are decoded
/// through as long as every link keeps the sample rate and channel count.
pub fn decode_file(path: &Path) -> Result<AudioTimeline, LoadError> {
    let mut hint = Hint::new();
    if let Some(extension) = path.extension().and_then(|ext| ext.to_str()) {
        hint.with_extension(extension);
    }

    let file = File::open(path)?;
    let mss = MediaSourceStream::new(Box::new(file), MediaSourceStreamOptions::default());

    let probed = get_probe().format(
        &hint,
        mss,
        &format_options(),
        &MetadataOptions::default(),
    )?;
    let mut reader = probed.format;

    let track = reader
        .default_track()
        .ok_or(LoadError::MissingDefaultTrack)?;
    if track.codec_params.codec == CODEC_TYPE_NULL {
        return Err(LoadError::UnsupportedCodec);
    }

    let mut track_id = track.id;
    let clock = track
        .codec_params
        .sample_rate
        .and_then(SampleClock::new)
        .ok_or(LoadError::MissingSampleRate)?;
    let mut channels = track
        .codec_params
        .channels
        .map(|channels| channels.count());

    let mut decoder = get_codecs().make(&track.codec_params, &DecoderOptions::default())?;
    let mut samples = Vec::new();

    loop {
        let packet = match reader.next_packet() {
            Ok(packet) => packet,
            Err(SymphoniaError::IoError(ref err)) if err.kind() == ErrorKind::UnexpectedEof => {
                break;
            }
            Err(SymphoniaError::ResetRequired) => {
                let track = reader
                    .default_track()
                    .ok_or(LoadError::MissingDefaultTrack)?;
                ensure_same_stream(&track.codec_params, clock, channels)?;
                warn!(
                    "stream in '{}' was reset at {} samples; restarting the decoder",
                    path.display(),
                    samples.len()
                );
                track_id = track.id;
                decoder = get_codecs().make(&track.codec_params, &DecoderOptions::default())?;
                continue;
            }
            Err(err) => return Err(err.into()),
        };

        if packet.track_id() != track_id {
            continue;
        }

        match decoder.decode(&packet) {
            Ok(decoded) => {
                let spec = *decoded.spec();
                channels.get_or_insert(spec.channels.count());
                let mut buffer = SampleBuffer::<f32>::new(decoded.capacity() as u64, spec);
                buffer.copy_interleaved_ref(decoded);
                samples.extend_from_slice(buffer.samples());
            }
            Err(SymphoniaError::DecodeError(err)) => {
                warn!("skipping undecodable packet in '{}': {err}", path.display());
            }
            Err(err) => return Err(err.into()),
        }
    }

    let channel_count = u16::try_from(channels.unwrap_or(0)).unwrap_or(u16::MAX);
    let layout = ChannelLayout::from_count(channel_count)
        .ok_or(LoadError::UnsupportedChannels(channel_count))?;

    debug!(
        "decoded {} samples from '{}' ({channel_count} ch, {} Hz)",
        samples.len(),
        path.display(),
        clock.sample_rate()
    );

    Ok(AudioTimeline::from_interleaved(&samples, clock, layout))
}
