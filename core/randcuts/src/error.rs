use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by [`generate`](crate::pipeline::generate) and friends.
#[derive(Debug, Error)]
pub enum RandCutsError {
    /// A requested clip length cannot be cut from the source.
    #[error("duration at position {index} {reason}")]
    InvalidDuration { index: usize, reason: DurationError },

    /// No clip durations were supplied.
    #[error("at least one clip duration is required")]
    EmptyRequest,

    /// The source recording could not be read or decoded.
    #[error("failed to load source audio")]
    SourceLoad(#[from] LoadError),

    /// The concatenated recording could not be written.
    #[error("failed to export audio")]
    Export(#[from] ExportError),
}

/// Why a single duration was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum DurationError {
    #[error("must be greater than 0 (got {0})")]
    NotPositive(f64),

    #[error("must be a finite number of seconds (got {0})")]
    NotFinite(f64),

    #[error("is too small after rounding; must be at least 1 ms (got {0})")]
    TooShort(f64),

    #[error("({duration_ms} ms) exceeds source length ({source_ms} ms)")]
    ExceedsSource { duration_ms: u64, source_ms: u64 },
}

/// Errors produced while decoding a source file.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("source file does not exist: {}", .0.display())]
    NotFound(PathBuf),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("failed to decode WAV data")]
    Wav(#[from] hound::Error),

    #[error("failed to decode audio stream")]
    Decode(#[from] symphonia::core::errors::Error),

    #[error("input stream does not provide a default track")]
    MissingDefaultTrack,

    #[error("input stream does not advertise a sample rate")]
    MissingSampleRate,

    #[error("unsupported codec")]
    UnsupportedCodec,

    #[error("stream changed sample rate or channel count partway through")]
    StreamChanged,

    #[error("only mono or stereo sources are supported (got {0} channels)")]
    UnsupportedChannels(u16),
}

/// Errors produced while encoding the output file.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error(
        "output path must include a file extension to infer format: {}",
        .0.display()
    )]
    MissingExtension(PathBuf),

    #[error("unsupported output format '{0}' (only wav is supported)")]
    UnsupportedFormat(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("failed to encode WAV data")]
    Wav(#[from] hound::Error),
}
