//! Spectral sensitivities of reference capture devices.
//!
//! The crate ships the *ACES Reference Input Capture Device* (RICD)
//! sensitivities, 360–830 nm at 1 nm, as an immutable
//! [`SpectralSensitivityTable`]:
//!
//! ```
//! use camera_sensitivities::{ACES_RICD, SpectralError};
//!
//! assert_eq!(ACES_RICD.domain(), (360.0, 830.0));
//! assert_eq!(ACES_RICD.channel_count(), 3);
//! assert_eq!(
//!     ACES_RICD.value_at(555.0).unwrap(),
//!     vec![0.0047920, 0.0107425, 0.0000538]
//! );
//! assert!(matches!(
//!     ACES_RICD.value_at(830.001),
//!     Err(SpectralError::OutOfDomain { .. })
//! ));
//! ```

pub mod data;
pub mod datasets;

pub use data::error::{InvalidDataset, SpectralError};
pub use data::model::SpectralSensitivityTable;
pub use data::shape::SpectralShape;
pub use datasets::{ACES_RICD, ACES_RICD_DATA};
