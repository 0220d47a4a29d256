use rand::{SeedableRng, rngs::StdRng};

use crate::{
    clip::fades::{FadeCurve, Fader},
    constants::DEFAULT_FADE_MS,
};

/// Knobs for one [`generate_with`](crate::pipeline::generate_with) call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Fixes clip placement; `None` seeds from the OS.
    pub seed: Option<u64>,
    /// Nominal fade per clip end, before capping at half the clip.
    pub fade_ms: u64,
    pub fade_curve: FadeCurve,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed: None,
            fade_ms: DEFAULT_FADE_MS,
            fade_curve: FadeCurve::default(),
        }
    }
}

impl Config {
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// A fresh generator for one run.
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }

    pub const fn fader(&self) -> Fader {
        Fader::new(self.fade_ms, self.fade_curve)
    }
}

#[derive(Debug, Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    pub fn seed(mut self, seed: Option<u64>) -> Self {
        self.config.seed = seed;
        self
    }

    pub fn fade_ms(mut self, fade_ms: u64) -> Self {
        self.config.fade_ms = fade_ms;
        self
    }

    pub fn fade_curve(mut self, curve: FadeCurve) -> Self {
        self.config.fade_curve = curve;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
