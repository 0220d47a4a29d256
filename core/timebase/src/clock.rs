const MS_PER_SECOND: u128 = 1_000;

/// Converts between milliseconds and sample frames at a fixed sample rate.
///
/// All arithmetic is done on integers and rounds towards zero, so the same
/// millisecond value maps to the same frame on every call and a converted
/// position never lies past the exact one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SampleClock {
    sample_rate: u32,
}

/// `numerator / denominator`, saturating at `u64::MAX`.
fn floor_div(numerator: u128, denominator: u128) -> u64 {
    debug_assert!(denominator > 0, "division by a zero-length grid");
    u64::try_from(numerator / denominator).unwrap_or(u64::MAX)
}

impl SampleClock {
    /// Returns `None` for a zero sample rate.
    pub const fn new(sample_rate: u32) -> Option<Self> {
        if sample_rate == 0 {
            return None;
        }
        Some(Self { sample_rate })
    }

    pub const fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    pub fn ms_to_frames(&self, ms: u64) -> u64 {
        floor_div(u128::from(ms) * u128::from(self.sample_rate), MS_PER_SECOND)
    }

    pub fn frames_to_ms(&self, frames: u64) -> u64 {
        floor_div(u128::from(frames) * MS_PER_SECOND, u128::from(self.sample_rate))
    }
}
