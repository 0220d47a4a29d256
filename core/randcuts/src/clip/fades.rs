use std::{f32::consts::FRAC_PI_2, fmt, str::FromStr};

use timebase::SampleClock;

use crate::constants::DEFAULT_FADE_MS;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FadeCurve {
    #[default]
    Linear,
    /// Quarter sine/cosine; keeps perceived loudness steadier than linear.
    EqualPower,
}

impl FadeCurve {
    /// Gain at `position` in `[0, 1]`, where 0 is silence and 1 is full level.
    pub fn gain(self, position: f32) -> f32 {
        let position = position.clamp(0.0, 1.0);
        match self {
            Self::Linear => position,
            Self::EqualPower => (position * FRAC_PI_2).sin(),
        }
    }
}

impl fmt::Display for FadeCurve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Linear => f.write_str("linear"),
            Self::EqualPower => f.write_str("equal-power"),
        }
    }
}

impl FromStr for FadeCurve {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "linear" => Ok(Self::Linear),
            "equal-power" | "equal_power" | "equalpower" => Ok(Self::EqualPower),
            other => Err(format!(
                "unknown fade curve '{other}' (expected 'linear' or 'equal-power')"
            )),
        }
    }
}

/// A symmetric fade-in/fade-out envelope, in frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fade {
    pub length_frames: u64,
    pub curve: FadeCurve,
}

impl Fade {
    pub const fn none() -> Self {
        Self {
            length_frames: 0,
            curve: FadeCurve::Linear,
        }
    }

    /// Ramps the first frames up from silence and the last frames down to it.
    ///
    /// The ramp is capped at half the buffer so the two ends never overlap.
    pub fn apply(&self, frames: &mut [(f32, f32)]) {
        let len = frames.len();
        let n = usize::try_from(self.length_frames)
            .unwrap_or(usize::MAX)
            .min(len / 2);
        if n == 0 {
            return;
        }

        let steps = n as f32;
        for i in 0..n {
            let fade_in = self.curve.gain(i as f32 / steps);
            let fade_out = self.curve.gain((n - 1 - i) as f32 / steps);

            let head = &mut frames[i];
            head.0 *= fade_in;
            head.1 *= fade_in;

            let tail = &mut frames[len - n + i];
            tail.0 *= fade_out;
            tail.1 *= fade_out;
        }
    }
}

/// Decides how long each clip's fades are.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fader {
    nominal_ms: u64,
    curve: FadeCurve,
}

impl Default for Fader {
    fn default() -> Self {
        Self::new(DEFAULT_FADE_MS, FadeCurve::default())
    }
}

impl Fader {
    pub const fn new(nominal_ms: u64, curve: FadeCurve) -> Self {
        Self { nominal_ms, curve }
    }

    /// Fade length actually used for a clip: never more than half of it.
    pub fn effective_ms(&self, duration_ms: u64) -> u64 {
        self.nominal_ms.min(duration_ms / 2)
    }

    pub fn fade_for(&self, clock: &SampleClock, duration_ms: u64) -> Fade {
        let length_frames = clock.ms_to_frames(self.effective_ms(duration_ms));
        if length_frames == 0 {
            return Fade::none();
        }
        Fade {
            length_frames,
            curve: self.curve,
        }
    }
}

#[cfg(test)]
mod fade_tests {
    use super::*;
    use crate::constants::AUDIO_SAMPLE_EPSILON;

    fn ones(len: usize) -> Vec<(f32, f32)> {
        vec![(1.0, 1.0); len]
    }

    #[test]
    fn test_effective_fade_is_capped_at_half_the_clip() {
        let fader = Fader::new(300, FadeCurve::Linear);
        assert_eq!(fader.effective_ms(10_000), 300);
        assert_eq!(fader.effective_ms(500), 250);
        assert_eq!(fader.effective_ms(1), 0);
    }

    #[test]
    fn test_linear_fade_ramps_both_ends() {
        let mut frames = ones(10);
        Fade {
            length_frames: 4,
            curve: FadeCurve::Linear,
        }
        .apply(&mut frames);

        let left: Vec<f32> = frames.iter().map(|f| f.0).collect();
        assert_eq!(
            left,
            vec![0.0, 0.25, 0.5, 0.75, 1.0, 1.0, 0.75, 0.5, 0.25, 0.0]
        );
    }

    #[test]
    fn test_fade_longer_than_half_is_capped() {
        let mut frames = ones(4);
        Fade {
            length_frames: 100,
            curve: FadeCurve::Linear,
        }
        .apply(&mut frames);

        let left: Vec<f32> = frames.iter().map(|f| f.0).collect();
        assert_eq!(left, vec![0.0, 0.5, 0.5, 0.0]);
    }

    #[test]
    fn test_no_fade_leaves_samples_untouched() {
        let mut frames = ones(8);
        Fade::none().apply(&mut frames);
        assert_eq!(frames, ones(8));
    }

    #[test]
    fn test_equal_power_curve_endpoints() {
        let curve = FadeCurve::EqualPower;
        assert!(curve.gain(0.0).abs() < AUDIO_SAMPLE_EPSILON);
        assert!((curve.gain(1.0) - 1.0).abs() < AUDIO_SAMPLE_EPSILON);
        // louder than linear half-way through
        assert!(curve.gain(0.5) > FadeCurve::Linear.gain(0.5));
    }

    #[test]
    fn test_fade_for_converts_to_frames() {
        let clock = SampleClock::new(8_000).unwrap();
        let fade = Fader::new(100, FadeCurve::EqualPower).fade_for(&clock, 1_000);
        assert_eq!(fade.length_frames, 800);
        assert_eq!(fade.curve, FadeCurve::EqualPower);

        let disabled = Fader::new(0, FadeCurve::EqualPower).fade_for(&clock, 1_000);
        assert_eq!(disabled, Fade::none());
    }

    #[test]
    fn test_curve_parses_from_cli_names() {
        assert_eq!("linear".parse::<FadeCurve>(), Ok(FadeCurve::Linear));
        assert_eq!("Equal-Power".parse::<FadeCurve>(), Ok(FadeCurve::EqualPower));
        assert!("cubic".parse::<FadeCurve>().is_err());
    }
}
