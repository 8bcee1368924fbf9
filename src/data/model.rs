use std::fmt;

use super::error::{InvalidDataset, SpectralError};
use super::interpolate::{Bracket, bracket, lerp_rows};
use super::shape::{SHAPE_TOLERANCE, SpectralShape};

/// Labels given to three-channel tables unless the caller supplies others.
pub const RGB_LABELS: [&str; 3] = ["red", "green", "blue"];

fn default_labels(channels: usize) -> Vec<String> {
    if channels == RGB_LABELS.len() {
        RGB_LABELS.iter().map(|l| l.to_string()).collect()
    } else {
        (0..channels).map(|i| format!("channel {i}")).collect()
    }
}

// ---------------------------------------------------------------------------
// SpectralSensitivityTable – immutable wavelength → channel values mapping
// ---------------------------------------------------------------------------

/// Named, immutable spectral sensitivities of a capture device.
///
/// Wavelengths are in nanometres and stored strictly increasing. Every
/// wavelength maps to the same number of channel values. Spacing between
/// wavelengths does not have to be uniform.
#[derive(Debug, Clone, PartialEq)]
pub struct SpectralSensitivityTable {
    name: String,
    labels: Vec<String>,
    channels: usize,
    /// Sorted wavelength axis (x).
    wavelengths: Vec<f64>,
    /// Row-major values, `channels` per wavelength.
    values: Vec<f64>,
}

impl SpectralSensitivityTable {
    /// Build a table from `(wavelength, values)` pairs in any order.
    ///
    /// Fails with [`SpectralError::InvalidDataset`] when `samples` is empty,
    /// when rows disagree on their channel count, or when a wavelength is
    /// repeated or any number is NaN or infinite.
    pub fn new<I, R>(name: impl Into<String>, samples: I) -> Result<Self, SpectralError>
    where
        I: IntoIterator<Item = (f64, R)>,
        R: AsRef<[f64]>,
    {
        let name = name.into();
        let mut rows: Vec<(f64, R)> = samples.into_iter().collect();

        let channels = match rows.first() {
            None => return Err(InvalidDataset::Empty.into()),
            Some((_, row)) => row.as_ref().len(),
        };
        if channels == 0 {
            return Err(InvalidDataset::NoChannels.into());
        }

        for (wavelength, row) in &rows {
            let wavelength = *wavelength;
            if !wavelength.is_finite() {
                return Err(InvalidDataset::NonFiniteWavelength(wavelength).into());
            }
            let row = row.as_ref();
            if row.len() != channels {
                return Err(InvalidDataset::ArityMismatch {
                    wavelength,
                    expected: channels,
                    found: row.len(),
                }
                .into());
            }
            if let Some(channel) = row.iter().position(|v| !v.is_finite()) {
                return Err(InvalidDataset::NonFiniteValue {
                    wavelength,
                    channel,
                }
                .into());
            }
        }

        rows.sort_by(|a, b| a.0.total_cmp(&b.0));
        if let Some(pair) = rows.windows(2).find(|pair| pair[0].0 == pair[1].0) {
            return Err(InvalidDataset::DuplicateWavelength(pair[1].0).into());
        }

        let mut wavelengths = Vec::with_capacity(rows.len());
        let mut values = Vec::with_capacity(rows.len() * channels);
        for (wavelength, row) in &rows {
            wavelengths.push(*wavelength);
            values.extend_from_slice(row.as_ref());
        }

        log::debug!(
            "built spectral table '{name}': {} samples, {channels} channels",
            wavelengths.len()
        );

        Ok(Self {
            name,
            labels: default_labels(channels),
            channels,
            wavelengths,
            values,
        })
    }

    /// Replace the default channel labels.
    pub fn with_labels<I, S>(mut self, labels: I) -> Result<Self, SpectralError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let labels: Vec<String> = labels.into_iter().map(Into::into).collect();
        if labels.len() != self.channels {
            return Err(InvalidDataset::LabelCount {
                expected: self.channels,
                found: labels.len(),
            }
            .into());
        }
        self.labels = labels;
        Ok(self)
    }

    // -- Lookup --

    /// Channel values at `wavelength`.
    ///
    /// Stored wavelengths return their row unchanged. Wavelengths between two
    /// stored keys are linearly interpolated channel by channel. Anything
    /// outside [`domain`](Self::domain) is an [`SpectralError::OutOfDomain`].
    pub fn value_at(&self, wavelength: f64) -> Result<Vec<f64>, SpectralError> {
        match bracket(&self.wavelengths, wavelength) {
            Some(Bracket::Exact(i)) => Ok(self.row_values(i).to_vec()),
            Some(Bracket::Between { lo, hi }) => Ok(lerp_rows(
                (self.wavelengths[lo], self.row_values(lo)),
                (self.wavelengths[hi], self.row_values(hi)),
                wavelength,
            )),
            None => {
                let (min, max) = self.domain();
                Err(SpectralError::OutOfDomain {
                    wavelength,
                    min,
                    max,
                })
            }
        }
    }

    /// Closed wavelength interval `(min, max)` covered by the table.
    pub fn domain(&self) -> (f64, f64) {
        // Construction guarantees at least one wavelength.
        let last = self.wavelengths.len() - 1;
        (self.wavelengths[0], self.wavelengths[last])
    }

    /// Number of values per wavelength.
    pub fn channel_count(&self) -> usize {
        self.channels
    }

    // -- Accessors --

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn wavelengths(&self) -> &[f64] {
        &self.wavelengths
    }

    /// Number of stored wavelengths.
    pub fn len(&self) -> usize {
        self.wavelengths.len()
    }

    /// Always false for a constructed table.
    pub fn is_empty(&self) -> bool {
        self.wavelengths.is_empty()
    }

    /// The `index`-th stored sample.
    pub fn row(&self, index: usize) -> Option<(f64, &[f64])> {
        let wavelength = *self.wavelengths.get(index)?;
        Some((wavelength, self.row_values(index)))
    }

    /// Stored samples in increasing wavelength order.
    pub fn rows(&self) -> impl ExactSizeIterator<Item = (f64, &[f64])> + '_ {
        self.wavelengths
            .iter()
            .copied()
            .zip(self.values.chunks_exact(self.channels))
    }

    /// Every stored value of one channel, in wavelength order.
    pub fn channel(&self, index: usize) -> Option<Vec<f64>> {
        if index >= self.channels {
            return None;
        }
        Some(self.rows().map(|(_, row)| row[index]).collect())
    }

    pub fn channel_by_label(&self, label: &str) -> Option<Vec<f64>> {
        let index = self.labels.iter().position(|l| l == label)?;
        self.channel(index)
    }

    /// Wavelength and value of a channel's maximum. Ties keep the shortest
    /// wavelength.
    pub fn peak(&self, channel: usize) -> Option<(f64, f64)> {
        if channel >= self.channels {
            return None;
        }
        self.rows()
            .map(|(wavelength, row)| (wavelength, row[channel]))
            .fold(None, |best, (wavelength, value)| match best {
                Some((_, best_value)) if best_value >= value => best,
                _ => Some((wavelength, value)),
            })
    }

    // -- Sampling grid --

    /// The uniform grid the wavelengths lie on, if there is one.
    ///
    /// Tables with a single wavelength or with uneven spacing return `None`.
    pub fn shape(&self) -> Option<SpectralShape> {
        let (start, end) = self.domain();
        let interval = *self.wavelengths.get(1)? - start;
        let uniform = self
            .wavelengths
            .windows(2)
            .all(|pair| ((pair[1] - pair[0]) - interval).abs() <= SHAPE_TOLERANCE);
        if !uniform {
            return None;
        }
        SpectralShape::new(start, end, interval).ok()
    }

    /// A new table sampled on `shape`, keeping name and labels.
    ///
    /// Every grid wavelength must lie inside the domain. Grid points are
    /// never extrapolated.
    pub fn resample(&self, shape: &SpectralShape) -> Result<Self, SpectralError> {
        let samples = shape
            .wavelengths()
            .map(|wavelength| self.value_at(wavelength).map(|row| (wavelength, row)))
            .collect::<Result<Vec<_>, _>>()?;

        Self::new(self.name.clone(), samples)?.with_labels(self.labels.iter().cloned())
    }

    fn row_values(&self, index: usize) -> &[f64] {
        let start = index * self.channels;
        &self.values[start..start + self.channels]
    }
}

impl fmt::Display for SpectralSensitivityTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (min, max) = self.domain();
        write!(
            f,
            "{} ({} samples, {min}-{max} nm, channels: {})",
            self.name,
            self.len(),
            self.labels.join(", ")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn small_table() -> SpectralSensitivityTable {
        SpectralSensitivityTable::new(
            "test",
            vec![
                (500.0, vec![0.2, 0.4, 0.0]),
                (400.0, vec![0.0, 1.0, 0.5]),
                (450.0, vec![0.1, 0.6, 0.25]),
            ],
        )
        .unwrap()
    }

    fn invalid(result: Result<SpectralSensitivityTable, SpectralError>) -> InvalidDataset {
        match result {
            Err(SpectralError::InvalidDataset(reason)) => reason,
            other => panic!("expected InvalidDataset, got {other:?}"),
        }
    }

    #[test]
    fn test_rows_are_sorted() {
        let table = small_table();
        assert_eq!(table.wavelengths(), &[400.0, 450.0, 500.0]);
        assert_eq!(table.row(0), Some((400.0, &[0.0, 1.0, 0.5][..])));
        assert_eq!(table.row(3), None);
        assert_eq!(table.domain(), (400.0, 500.0));
        assert_eq!(table.channel_count(), 3);
        assert_eq!(table.len(), 3);
        assert!(!table.is_empty());
    }

    #[test]
    fn test_exact_lookup_is_verbatim() {
        let table = small_table();
        assert_eq!(table.value_at(450.0).unwrap(), vec![0.1, 0.6, 0.25]);
    }

    #[test]
    fn test_interpolated_lookup() {
        let table = small_table();
        let v = table.value_at(425.0).unwrap();
        assert_relative_eq!(v[0], 0.05, epsilon = 1e-12);
        assert_relative_eq!(v[1], 0.8, epsilon = 1e-12);
        assert_relative_eq!(v[2], 0.375, epsilon = 1e-12);
    }

    #[test]
    fn test_out_of_domain() {
        let table = small_table();
        assert_eq!(
            table.value_at(399.0),
            Err(SpectralError::OutOfDomain {
                wavelength: 399.0,
                min: 400.0,
                max: 500.0
            })
        );
        assert!(matches!(
            table.value_at(500.5),
            Err(SpectralError::OutOfDomain { .. })
        ));
        assert!(matches!(
            table.value_at(f64::NAN),
            Err(SpectralError::OutOfDomain { .. })
        ));
    }

    #[test]
    fn test_lookup_is_repeatable() {
        let table = small_table();
        let first = table.value_at(433.3).unwrap();
        for _ in 0..10 {
            assert_eq!(table.value_at(433.3).unwrap(), first);
        }
    }

    #[test]
    fn test_empty_rejected() {
        let samples: Vec<(f64, Vec<f64>)> = Vec::new();
        assert_eq!(
            invalid(SpectralSensitivityTable::new("empty", samples)),
            InvalidDataset::Empty
        );
    }

    #[test]
    fn test_zero_channels_rejected() {
        let samples = vec![(400.0, Vec::<f64>::new())];
        assert_eq!(
            invalid(SpectralSensitivityTable::new("none", samples)),
            InvalidDataset::NoChannels
        );
    }

    #[test]
    fn test_mixed_arity_rejected() {
        let samples = vec![(400.0, vec![0.1, 0.2]), (401.0, vec![0.1, 0.2, 0.3])];
        assert_eq!(
            invalid(SpectralSensitivityTable::new("mixed", samples)),
            InvalidDataset::ArityMismatch {
                wavelength: 401.0,
                expected: 2,
                found: 3
            }
        );
    }

    #[test]
    fn test_non_finite_rejected() {
        let samples = vec![(400.0, vec![0.1, f64::NAN]), (401.0, vec![0.1, 0.2])];
        assert_eq!(
            invalid(SpectralSensitivityTable::new("nan", samples)),
            InvalidDataset::NonFiniteValue {
                wavelength: 400.0,
                channel: 1
            }
        );

        let samples = vec![(400.0, vec![f64::INFINITY])];
        assert!(matches!(
            invalid(SpectralSensitivityTable::new("inf", samples)),
            InvalidDataset::NonFiniteValue { .. }
        ));

        let samples = vec![(f64::NAN, vec![0.1])];
        assert!(matches!(
            invalid(SpectralSensitivityTable::new("nan key", samples)),
            InvalidDataset::NonFiniteWavelength(_)
        ));
    }

    #[test]
    fn test_duplicate_wavelength_rejected() {
        let samples = vec![(400.0, [0.1]), (401.0, [0.2]), (400.0, [0.3])];
        assert_eq!(
            invalid(SpectralSensitivityTable::new("dup", samples)),
            InvalidDataset::DuplicateWavelength(400.0)
        );
    }

    #[test]
    fn test_signed_zero_keys_are_duplicates() {
        let samples = vec![(0.0, [1.0]), (-0.0, [2.0])];
        assert!(matches!(
            invalid(SpectralSensitivityTable::new("zeros", samples)),
            InvalidDataset::DuplicateWavelength(w) if w == 0.0
        ));
    }

    #[test]
    fn test_single_sample_table() {
        let table = SpectralSensitivityTable::new("one", [(555.0, [1.0, 2.0])]).unwrap();
        assert_eq!(table.domain(), (555.0, 555.0));
        assert_eq!(table.value_at(555.0).unwrap(), vec![1.0, 2.0]);
        assert!(table.value_at(555.1).is_err());
        assert_eq!(table.shape(), None);
        assert_eq!(table.labels(), &["channel 0", "channel 1"]);
    }

    #[test]
    fn test_labels() {
        let table = small_table();
        assert_eq!(table.labels(), &["red", "green", "blue"]);
        assert_eq!(table.channel_by_label("green"), Some(vec![1.0, 0.6, 0.4]));

        let table = table.with_labels(["r", "g", "b"]).unwrap();
        assert_eq!(table.channel_by_label("b"), Some(vec![0.5, 0.25, 0.0]));
        assert_eq!(table.channel_by_label("green"), None);

        let err = small_table().with_labels(["only", "two"]).unwrap_err();
        assert_eq!(
            err,
            SpectralError::InvalidDataset(InvalidDataset::LabelCount {
                expected: 3,
                found: 2
            })
        );
    }

    #[test]
    fn test_channel_and_peak() {
        let table = small_table();
        assert_eq!(table.channel(0), Some(vec![0.0, 0.1, 0.2]));
        assert_eq!(table.channel(3), None);
        assert_eq!(table.peak(0), Some((500.0, 0.2)));
        assert_eq!(table.peak(1), Some((400.0, 1.0)));
        assert_eq!(table.peak(7), None);
    }

    #[test]
    fn test_peak_keeps_first_tie() {
        let table =
            SpectralSensitivityTable::new("flat", [(400.0, [0.5]), (410.0, [0.5])]).unwrap();
        assert_eq!(table.peak(0), Some((400.0, 0.5)));
    }

    #[test]
    fn test_shape_and_resample() {
        let table = small_table();
        let shape = table.shape().unwrap();
        assert_eq!(shape, SpectralShape::new(400.0, 500.0, 50.0).unwrap());

        let fine = table
            .resample(&SpectralShape::new(400.0, 500.0, 25.0).unwrap())
            .unwrap();
        assert_eq!(fine.len(), 5);
        assert_eq!(fine.name(), "test");
        assert_eq!(fine.value_at(450.0).unwrap(), vec![0.1, 0.6, 0.25]);
        assert_relative_eq!(fine.value_at(475.0).unwrap()[0], 0.15, epsilon = 1e-12);

        // The source table is untouched.
        assert_eq!(table.len(), 3);
    }

    #[test]
    fn test_resample_reaches_domain_end() {
        let table = SpectralSensitivityTable::new("edge", [(360.0, [0.0]), (499.7, [1.0])]).unwrap();
        let shape = SpectralShape::new(360.0, 499.7, 1.1).unwrap();
        let resampled = table.resample(&shape).unwrap();
        assert_eq!(resampled.len(), 128);
        assert_eq!(resampled.domain(), (360.0, 499.7));
        assert_eq!(resampled.value_at(499.7).unwrap(), vec![1.0]);
    }

    #[test]
    fn test_resample_past_domain_fails() {
        let table = small_table();
        let shape = SpectralShape::new(390.0, 500.0, 10.0).unwrap();
        assert!(matches!(
            table.resample(&shape),
            Err(SpectralError::OutOfDomain { wavelength, .. }) if wavelength == 390.0
        ));
    }

    #[test]
    fn test_non_uniform_has_no_shape() {
        let table =
            SpectralSensitivityTable::new("uneven", [(400.0, [0.0]), (410.0, [1.0]), (430.0, [2.0])])
                .unwrap();
        assert_eq!(table.shape(), None);
        assert_relative_eq!(table.value_at(420.0).unwrap()[0], 1.5, epsilon = 1e-12);
    }

    #[test]
    fn test_display() {
        assert_eq!(
            small_table().to_string(),
            "test (3 samples, 400-500 nm, channels: red, green, blue)"
        );
    }
}
