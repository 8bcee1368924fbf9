use serde::{Deserialize, Serialize};

use super::error::InvalidDataset;

/// Slack used when deciding whether a grid is uniform or how many steps fit
/// into a range. Far below any spacing used by measured spectral data.
pub const SHAPE_TOLERANCE: f64 = 1e-9;

/// Upper bound on the number of wavelengths a shape may describe.
pub const MAX_SHAPE_SAMPLES: usize = 1 << 24;

/// A uniformly spaced wavelength grid: `start`, `start + interval`, … `end`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpectralShape {
    pub start: f64,
    pub end: f64,
    pub interval: f64,
}

// A valid shape always holds `start`, so there is no empty shape.
#[allow(clippy::len_without_is_empty)]
impl SpectralShape {
    /// Fails with [`InvalidDataset::InvalidShape`] for non-finite bounds, a
    /// non-positive interval, `end < start`, or more than
    /// [`MAX_SHAPE_SAMPLES`] wavelengths.
    pub fn new(start: f64, end: f64, interval: f64) -> Result<Self, InvalidDataset> {
        let invalid = || InvalidDataset::InvalidShape {
            start,
            end,
            interval,
        };
        let valid = start.is_finite()
            && end.is_finite()
            && interval.is_finite()
            && interval > 0.0
            && end >= start;
        if !valid {
            return Err(invalid());
        }

        let steps = step_count(start, end, interval);
        if !steps.is_finite() || steps >= MAX_SHAPE_SAMPLES as f64 {
            return Err(invalid());
        }

        Ok(Self {
            start,
            end,
            interval,
        })
    }

    /// Number of wavelengths on the grid. A range that is not a whole number
    /// of intervals stops at the last step that still fits.
    pub fn len(&self) -> usize {
        step_count(self.start, self.end, self.interval) as usize + 1
    }

    /// Wavelengths of the grid, computed as `start + i * interval` so that
    /// rounding errors do not accumulate. Points never exceed `end`.
    pub fn wavelengths(&self) -> impl Iterator<Item = f64> + '_ {
        (0..self.len()).map(move |i| (self.start + i as f64 * self.interval).min(self.end))
    }
}

fn step_count(start: f64, end: f64, interval: f64) -> f64 {
    ((end - start) / interval + SHAPE_TOLERANCE).floor()
}
