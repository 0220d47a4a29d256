use crate::error::{DurationError, RandCutsError};

/// One requested clip length, in whole milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClipRequest {
    duration_ms: u64,
}

impl ClipRequest {
    /// Converts a length in seconds to milliseconds, rounding to nearest.
    ///
    /// `index` is the request's position and only feeds the error.
    pub fn from_secs(index: usize, secs: f64) -> Result<Self, RandCutsError> {
        let invalid = |reason| RandCutsError::InvalidDuration { index, reason };

        if !secs.is_finite() {
            return Err(invalid(DurationError::NotFinite(secs)));
        }
        if secs <= 0.0 {
            return Err(invalid(DurationError::NotPositive(secs)));
        }

        let duration_ms = (secs * 1000.0).round() as u64;
        if duration_ms == 0 {
            return Err(invalid(DurationError::TooShort(secs)));
        }

        Ok(Self { duration_ms })
    }

    /// Converts every duration, failing on the first bad one.
    pub fn from_secs_list(durations: &[f64]) -> Result<Vec<Self>, RandCutsError> {
        durations
            .iter()
            .enumerate()
            .map(|(index, &secs)| Self::from_secs(index, secs))
            .collect()
    }

    pub const fn from_millis(duration_ms: u64) -> Option<Self> {
        if duration_ms == 0 {
            return None;
        }
        Some(Self { duration_ms })
    }

    pub const fn duration_ms(&self) -> u64 {
        self.duration_ms
    }

    pub fn check_fits(&self, index: usize, source_ms: u64) -> Result<(), RandCutsError> {
        if self.duration_ms > source_ms {
            return Err(RandCutsError::InvalidDuration {
                index,
                reason: DurationError::ExceedsSource {
                    duration_ms: self.duration_ms,
                    source_ms,
                },
            });
        }
        Ok(())
    }
}
