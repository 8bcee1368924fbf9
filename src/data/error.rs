use thiserror::Error;

// ---------------------------------------------------------------------------
// Construction-time failures
// ---------------------------------------------------------------------------

/// Reasons a table (or a sampling grid) is rejected at construction.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InvalidDataset {
    #[error("no samples were supplied")]
    Empty,

    #[error("samples must carry at least one channel")]
    NoChannels,

    #[error("sample at {wavelength} nm has {found} channels, expected {expected}")]
    ArityMismatch {
        wavelength: f64,
        expected: usize,
        found: usize,
    },

    #[error("wavelength {0} is not finite")]
    NonFiniteWavelength(f64),

    #[error("wavelength {0} nm appears more than once")]
    DuplicateWavelength(f64),

    #[error("channel {channel} at {wavelength} nm is not finite")]
    NonFiniteValue { wavelength: f64, channel: usize },

    #[error("{found} labels supplied for {expected} channels")]
    LabelCount { expected: usize, found: usize },

    #[error("invalid spectral shape: start={start}, end={end}, interval={interval}")]
    InvalidShape { start: f64, end: f64, interval: f64 },
}

// ---------------------------------------------------------------------------
// Top-level error
// ---------------------------------------------------------------------------

/// Errors raised by [`SpectralSensitivityTable`](super::model::SpectralSensitivityTable).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SpectralError {
    #[error("invalid dataset: {0}")]
    InvalidDataset(#[from] InvalidDataset),

    /// The table never clamps or extrapolates; callers that need to must do
    /// so themselves.
    #[error("wavelength {wavelength} nm is outside the domain [{min}, {max}] nm")]
    OutOfDomain { wavelength: f64, min: f64, max: f64 },
}
