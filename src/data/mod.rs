//! Data layer: the table type, lookup, and text interchange.
//!
//! Architecture:
//! ```text
//!  (wavelength, values) pairs        JSON / CSV text
//!        │                                 │
//!        │                                 ▼
//!        │                           ┌──────────┐
//!        │                           │  loader  │  parse text → samples
//!        │                           └──────────┘
//!        ▼                                 │
//!   ┌─────────────────────────┐            │
//!   │ SpectralSensitivityTable│ ◄──────────┘
//!   └─────────────────────────┘
//!        │
//!        ▼
//!   ┌─────────────┐
//!   │ interpolate │  bracket query → exact row or linear blend
//!   └─────────────┘
//! ```

pub mod error;
pub mod interpolate;
pub mod loader;
pub mod model;
pub mod shape;
