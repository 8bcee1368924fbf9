// ---------------------------------------------------------------------------
// Locating a wavelength on a sorted axis
// ---------------------------------------------------------------------------

/// Where a query wavelength falls relative to the stored keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bracket {
    /// The query equals the key at this index.
    Exact(usize),
    /// The query lies strictly between the keys at `lo` and `hi = lo + 1`.
    Between { lo: usize, hi: usize },
}

/// Find the keys surrounding `wavelength` in a strictly increasing axis.
///
/// Returns `None` when the axis is empty or the query lies outside
/// `[first, last]` (NaN included). Binary search, O(log n).
pub fn bracket(wavelengths: &[f64], wavelength: f64) -> Option<Bracket> {
    let (first, last) = (*wavelengths.first()?, *wavelengths.last()?);
    if !(first..=last).contains(&wavelength) {
        return None;
    }

    let idx = wavelengths.partition_point(|&w| w < wavelength);
    if wavelengths.get(idx) == Some(&wavelength) {
        return Some(Bracket::Exact(idx));
    }
    // first < wavelength < last here, so 1 <= idx < len.
    Some(Bracket::Between { lo: idx - 1, hi: idx })
}

// ---------------------------------------------------------------------------
// Linear interpolation
// ---------------------------------------------------------------------------

/// Interpolate every channel independently between two rows:
/// `v = v_lo + (v_hi - v_lo) * (w - wl_lo) / (wl_hi - wl_lo)`.
pub fn lerp_rows(
    (wl_lo, row_lo): (f64, &[f64]),
    (wl_hi, row_hi): (f64, &[f64]),
    wavelength: f64,
) -> Vec<f64> {
    let t = (wavelength - wl_lo) / (wl_hi - wl_lo);
    row_lo
        .iter()
        .zip(row_hi)
        .map(|(&lo, &hi)| lo + (hi - lo) * t)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const AXIS: [f64; 4] = [400.0, 410.0, 450.0, 500.0];

    #[test]
    fn test_exact_hits() {
        assert_eq!(bracket(&AXIS, 400.0), Some(Bracket::Exact(0)));
        assert_eq!(bracket(&AXIS, 450.0), Some(Bracket::Exact(2)));
        assert_eq!(bracket(&AXIS, 500.0), Some(Bracket::Exact(3)));
    }

    #[test]
    fn test_between_non_uniform_keys() {
        assert_eq!(
            bracket(&AXIS, 405.0),
            Some(Bracket::Between { lo: 0, hi: 1 })
        );
        assert_eq!(
            bracket(&AXIS, 449.999),
            Some(Bracket::Between { lo: 1, hi: 2 })
        );
        assert_eq!(
            bracket(&AXIS, 499.0),
            Some(Bracket::Between { lo: 2, hi: 3 })
        );
    }

    #[test]
    fn test_outside_axis() {
        assert_eq!(bracket(&AXIS, 399.999), None);
        assert_eq!(bracket(&AXIS, 500.001), None);
        assert_eq!(bracket(&AXIS, f64::NAN), None);
        assert_eq!(bracket(&[], 400.0), None);
    }

    #[test]
    fn test_single_key_axis() {
        assert_eq!(bracket(&[555.0], 555.0), Some(Bracket::Exact(0)));
        assert_eq!(bracket(&[555.0], 555.5), None);
    }

    #[test]
    fn test_lerp_rows() {
        let out = lerp_rows((400.0, &[0.0, 1.0][..]), (410.0, &[1.0, 0.0][..]), 402.5);
        assert_relative_eq!(out[0], 0.25, epsilon = 1e-12);
        assert_relative_eq!(out[1], 0.75, epsilon = 1e-12);
    }
}
