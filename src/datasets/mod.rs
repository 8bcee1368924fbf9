//! Embedded reference datasets and a name lookup over them.

use crate::data::model::SpectralSensitivityTable;

pub mod aces_it;

pub use aces_it::{ACES_RICD, ACES_RICD_DATA, ACES_RICD_NAME};

/// Every embedded dataset, by registered name.
fn registry() -> [(&'static str, &'static SpectralSensitivityTable); 1] {
    [(ACES_RICD_NAME, &*ACES_RICD)]
}

/// Names of the embedded datasets.
pub fn names() -> Vec<&'static str> {
    registry().iter().map(|(name, _)| *name).collect()
}

/// Look up an embedded dataset. Names compare case-insensitively.
pub fn lookup(name: &str) -> Option<&'static SpectralSensitivityTable> {
    registry()
        .into_iter()
        .find(|(registered, _)| registered.eq_ignore_ascii_case(name.trim()))
        .map(|(_, table)| table)
}
