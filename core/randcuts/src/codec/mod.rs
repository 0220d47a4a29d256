//! Thin layer over the third-party codecs: `hound` for WAV, `symphonia` for
//! everything else it can probe.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use log::info;

use crate::{
    constants::WAV_EXTENSIONS,
    error::{ExportError, LoadError},
    timeline::AudioTimeline,
};

pub mod decode;
pub mod wav;

fn is_wav_extension(extension: &str) -> bool {
    WAV_EXTENSIONS
        .iter()
        .any(|candidate| candidate.eq_ignore_ascii_case(extension))
}

/// Decodes `path` into an [`AudioTimeline`].
///
/// WAV files go through `hound`; anything else, including files without an
/// extension, is probed by `symphonia`. A path that exists but is not a
/// regular file is an I/O error, not [`LoadError::NotFound`].
pub fn load(path: &Path) -> Result<AudioTimeline, LoadError> {
    let metadata = match fs::metadata(path) {
        Ok(metadata) => metadata,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            return Err(LoadError::NotFound(path.to_path_buf()));
        }
        Err(err) => return Err(err.into()),
    };
    if !metadata.is_file() {
        return Err(LoadError::Io(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("'{}' is not a regular file", path.display()),
        )));
    }

    let timeline = match path.extension().and_then(|ext| ext.to_str()) {
        Some(extension) if is_wav_extension(extension) => wav::read_file(path)?,
        _ => decode::decode_file(path)?,
    };

    info!(
        "loaded '{}' ({} ms, {} ch, {} Hz)",
        path.display(),
        timeline.duration_ms(),
        timeline.channels(),
        timeline.sample_rate()
    );
    Ok(timeline)
}

/// Encodes `timeline` to `path`, creating missing parent directories.
///
/// The format is taken from the extension; only WAV can be written.
pub fn export(timeline: &AudioTimeline, path: &Path) -> Result<PathBuf, ExportError> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .filter(|ext| !ext.is_empty())
        .ok_or_else(|| ExportError::MissingExtension(path.to_path_buf()))?;
    if !is_wav_extension(extension) {
        return Err(ExportError::UnsupportedFormat(extension.to_lowercase()));
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    wav::write_file(timeline, path)?;
    info!(
        "exported {} ms of audio to '{}'",
        timeline.duration_ms(),
        path.display()
    );
    Ok(path.to_path_buf())
}
