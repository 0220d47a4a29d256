//! Cut random windows out of a recording, fade each one and join them.
//!
//! ```no_run
//! let cuts = randcuts::generate("source.wav", &[3.5, 1.25, 2.0], Some(42))?;
//! for clip in cuts.clips() {
//!     println!("{clip}");
//! }
//! cuts.export("out.wav")?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod clip;
pub mod codec;
pub mod concat;
pub mod config;
pub mod constants;
pub mod error;
pub mod pipeline;
pub mod selector;
pub mod timeline;

pub use clip::{ClipMetadata, fades::FadeCurve};
pub use config::Config;
pub use error::{DurationError, ExportError, LoadError, RandCutsError};
pub use pipeline::{RandomCuts, build_random_clips, generate, generate_with};
pub use timeline::AudioTimeline;
