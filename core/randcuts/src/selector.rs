use log::debug;
use rand::Rng;

use crate::{
    clip::{ClipWindow, request::ClipRequest},
    error::RandCutsError,
};

/// Picks a random window of the source for each clip request.
///
/// The random source is borrowed from the caller, so a seeded generator
/// gives the same placements on every run. Windows may overlap.
#[derive(Debug)]
pub struct ClipSelector<'a, R: Rng + ?Sized> {
    rng: &'a mut R,
    /// Length of the source, in whole milliseconds.
    source_ms: u64,
}

impl<'a, R: Rng + ?Sized> ClipSelector<'a, R> {
    pub fn new(rng: &'a mut R, source_ms: u64) -> Self {
        Self { rng, source_ms }
    }

    /// Draws a start uniformly from `[0, source_ms - duration_ms]`.
    ///
    /// A request that fills the whole source starts at 0 without drawing.
    pub fn select(
        &mut self,
        index: usize,
        request: ClipRequest,
    ) -> Result<ClipWindow, RandCutsError> {
        request.check_fits(index, self.source_ms)?;

        let duration_ms = request.duration_ms();
        let max_start = self.source_ms - duration_ms;
        let start_ms = if max_start > 0 {
            self.rng.gen_range(0..=max_start)
        } else {
            0
        };

        Ok(ClipWindow {
            index,
            start_ms,
            duration_ms,
        })
    }

    /// Places every request in order.
    ///
    /// All requests are checked against the source before the first draw,
    /// so a bad entry anywhere in the list consumes no randomness.
    pub fn select_all(
        &mut self,
        requests: &[ClipRequest],
    ) -> Result<Vec<ClipWindow>, RandCutsError> {
        for (index, request) in requests.iter().enumerate() {
            request.check_fits(index, self.source_ms)?;
        }

        let mut windows: Vec<ClipWindow> = Vec::with_capacity(requests.len());
        for (index, &request) in requests.iter().enumerate() {
            let window = self.select(index, request)?;
            if let Some(earlier) = windows.iter().find(|w| w.overlaps(&window)) {
                debug!(
                    "clip {} overlaps clip {} in the source",
                    window.index, earlier.index
                );
            }
            windows.push(window);
        }
        Ok(windows)
    }
}
