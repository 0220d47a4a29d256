use std::path::{Path, PathBuf};

use log::{debug, info};
use rand::Rng;

use crate::{
    clip::{Clip, ClipMetadata, request::ClipRequest},
    concat::Concatenator,
    config::Config,
    error::{ExportError, RandCutsError},
    selector::ClipSelector,
    timeline::AudioTimeline,
};

/// Output of one run: the source, the stitched clips and where each came from.
///
/// Nothing is written to disk until [`RandomCuts::export`] is called, and a
/// failed export leaves the value intact for another attempt.
#[derive(Debug, Clone)]
pub struct RandomCuts {
    source: AudioTimeline,
    concatenated: AudioTimeline,
    clips: Vec<ClipMetadata>,
}

impl RandomCuts {
    pub fn source(&self) -> &AudioTimeline {
        &self.source
    }

    pub fn concatenated(&self) -> &AudioTimeline {
        &self.concatenated
    }

    /// One entry per requested duration, in request order.
    pub fn clips(&self) -> &[ClipMetadata] {
        &self.clips
    }

    /// Writes the concatenated audio; the extension picks the format.
    pub fn export<P: AsRef<Path>>(&self, output_path: P) -> Result<PathBuf, ExportError> {
        self.concatenated.export(output_path)
    }
}

/// Cuts one random clip per duration (seconds) from `source_path` and joins them.
///
/// The same `seed` always yields the same placements for the same source.
pub fn generate<P: AsRef<Path>>(
    source_path: P,
    durations: &[f64],
    seed: Option<u64>,
) -> Result<RandomCuts, RandCutsError> {
    let config = Config::builder().seed(seed).build();
    generate_with(source_path, durations, &config)
}

/// [`generate`] with explicit fade settings.
///
/// Every duration is validated before any samples are cut, so a bad entry
/// never leaves partial output behind.
pub fn generate_with<P: AsRef<Path>>(
    source_path: P,
    durations: &[f64],
    config: &Config,
) -> Result<RandomCuts, RandCutsError> {
    if durations.is_empty() {
        return Err(RandCutsError::EmptyRequest);
    }
    let requests = ClipRequest::from_secs_list(durations)?;

    let source = AudioTimeline::load(source_path)?;
    let mut rng = config.rng();
    let (concatenated, clips) = cut_and_concat(&source, &requests, &mut rng, config)?;

    Ok(RandomCuts {
        source,
        concatenated,
        clips,
    })
}

/// Runs selection, fading and concatenation on an already decoded source.
///
/// Unlike [`generate`], an empty `durations` list is allowed and produces a
/// zero-length timeline in the source's format.
pub fn build_random_clips<R: Rng + ?Sized>(
    source: &AudioTimeline,
    durations: &[f64],
    rng: &mut R,
    config: &Config,
) -> Result<(AudioTimeline, Vec<ClipMetadata>), RandCutsError> {
    let requests = ClipRequest::from_secs_list(durations)?;
    cut_and_concat(source, &requests, rng, config)
}

fn cut_and_concat<R: Rng + ?Sized>(
    source: &AudioTimeline,
    requests: &[ClipRequest],
    rng: &mut R,
    config: &Config,
) -> Result<(AudioTimeline, Vec<ClipMetadata>), RandCutsError> {
    let windows = ClipSelector::new(rng, source.duration_ms()).select_all(requests)?;

    let fader = config.fader();
    let mut concatenator = Concatenator::new(source.clock(), source.layout());
    for window in windows {
        let clip = Clip::extract(source, window, &fader);
        debug!("{}", clip.metadata);
        concatenator.add_clip(clip);
    }

    let (concatenated, clips) = concatenator.concat();
    info!(
        "joined {} clip(s) into {} ms of audio",
        clips.len(),
        concatenated.duration_ms()
    );
    Ok((concatenated, clips))
}
