use std::thread;

use approx::assert_relative_eq;
use camera_sensitivities::data::loader::{self, Format};
use camera_sensitivities::datasets;
use camera_sensitivities::{
    ACES_RICD, ACES_RICD_DATA, InvalidDataset, SpectralError, SpectralSensitivityTable,
    SpectralShape,
};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn test_every_stored_wavelength_passes_through() {
    init_logging();
    for (wavelength, row) in ACES_RICD_DATA.iter() {
        assert_eq!(ACES_RICD.value_at(*wavelength).unwrap(), row.to_vec());
    }
    assert_eq!(
        ACES_RICD.value_at(555.0).unwrap(),
        vec![0.0047920, 0.0107425, 0.0000538]
    );
}

#[test]
fn test_domain_boundaries() {
    assert_eq!(ACES_RICD.domain(), (360.0, 830.0));
    assert_eq!(ACES_RICD.value_at(360.0).unwrap(), vec![1.20e-06, 0.0, 5.70e-06]);
    assert_eq!(ACES_RICD.value_at(830.0).unwrap(), vec![0.0, 0.0, 0.0]);

    for wavelength in [359.999, 830.001] {
        assert_eq!(
            ACES_RICD.value_at(wavelength),
            Err(SpectralError::OutOfDomain {
                wavelength,
                min: 360.0,
                max: 830.0
            })
        );
    }
}

#[test]
fn test_half_nanometre_is_midpoint() {
    let lo = ACES_RICD.value_at(500.0).unwrap();
    let hi = ACES_RICD.value_at(501.0).unwrap();
    let mid = ACES_RICD.value_at(500.5).unwrap();
    for channel in 0..3 {
        assert_relative_eq!(
            mid[channel],
            (lo[channel] + hi[channel]) / 2.0,
            epsilon = 1e-9
        );
    }
}

#[test]
fn test_reference_metadata() {
    assert_eq!(ACES_RICD.name(), "ACES RICD");
    assert_eq!(ACES_RICD.channel_count(), 3);
    assert_eq!(ACES_RICD.len(), 471);
    assert_eq!(ACES_RICD.labels(), &["red", "green", "blue"]);
    assert_eq!(
        ACES_RICD.shape(),
        Some(SpectralShape::new(360.0, 830.0, 1.0).unwrap())
    );
}

#[test]
fn test_channel_peaks_are_ordered_blue_green_red() {
    let (blue, _) = ACES_RICD.peak(2).unwrap();
    let (green, _) = ACES_RICD.peak(1).unwrap();
    let (red, _) = ACES_RICD.peak(0).unwrap();
    assert!(blue < green && green < red);
}

#[test]
fn test_resample_to_five_nanometres() {
    let shape = SpectralShape::new(360.0, 830.0, 5.0).unwrap();
    let coarse = ACES_RICD.resample(&shape).unwrap();
    assert_eq!(coarse.len(), 95);
    assert_eq!(coarse.name(), ACES_RICD.name());
    for (wavelength, row) in coarse.rows() {
        assert_eq!(row, &ACES_RICD.value_at(wavelength).unwrap()[..]);
    }

    let too_wide = SpectralShape::new(350.0, 830.0, 5.0).unwrap();
    assert!(matches!(
        ACES_RICD.resample(&too_wide),
        Err(SpectralError::OutOfDomain { .. })
    ));
}

#[test]
fn test_concurrent_reads_agree() {
    let expected = ACES_RICD.value_at(612.25).unwrap();
    let handles: Vec<_> = (0..4)
        .map(|_| thread::spawn(|| ACES_RICD.value_at(612.25).unwrap()))
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}

#[test]
fn test_registry_returns_the_singleton() {
    let table = datasets::lookup("ACES RICD").unwrap();
    assert!(std::ptr::eq(table, &*ACES_RICD));
}

#[test]
fn test_text_round_trips_preserve_reference_values() {
    init_logging();
    let json = loader::to_json(&ACES_RICD).unwrap();
    let from_json = loader::parse_str(&json, Format::Json, "unused").unwrap();
    assert_eq!(from_json, *ACES_RICD);

    let csv = loader::to_csv(&ACES_RICD).unwrap();
    let from_csv = loader::parse_str(&csv, Format::Csv, "ACES RICD").unwrap();
    assert_eq!(from_csv, *ACES_RICD);
}

#[test]
fn test_invalid_tables() {
    let mixed = vec![(400.0, vec![0.1, 0.2]), (401.0, vec![0.1, 0.2, 0.3])];
    assert!(matches!(
        SpectralSensitivityTable::new("mixed", mixed),
        Err(SpectralError::InvalidDataset(InvalidDataset::ArityMismatch { .. }))
    ));

    let empty: [(f64, [f64; 3]); 0] = [];
    assert_eq!(
        SpectralSensitivityTable::new("empty", empty),
        Err(SpectralError::InvalidDataset(InvalidDataset::Empty))
    );
}
