//! File-level round trips through the codec, plus randomized buffer
//! properties with proptest.

use proptest::prelude::*;
use sygnal_core::{Complex64, Error, Metadata, Signal};
use sygnal_io::{decode, encode, load, save};

#[test]
fn test_save_load_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("signal.bin");

    let metadata = Metadata::new(1.5, 500.0, 5).tagged("filtering_frequency", 50);
    let signal = Signal::Real(vec![0.0, 0.25, -0.5, 1.0, f64::EPSILON]);

    save(&path, &metadata, &signal).unwrap();
    let (back_meta, back_signal) = load(&path).unwrap();

    assert_eq!(back_meta, metadata);
    assert_eq!(back_signal, signal);
}

#[test]
fn test_load_truncated_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("short.bin");

    let metadata = Metadata::new(0.0, 10.0, 8);
    let signal = Signal::Real((0..8).map(f64::from).collect());
    let bytes = encode(&metadata, &signal).unwrap();
    std::fs::write(&path, &bytes[..bytes.len() - 8]).unwrap();

    assert!(matches!(load(&path), Err(Error::CorruptFile { .. })));
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    /// Any real signal and consistent metadata survive encode/decode
    /// bit-exactly.
    #[test]
    fn roundtrip_real(
        samples in prop::collection::vec(prop::num::f64::NORMAL | prop::num::f64::ZERO, 0..128),
        start_time in -1e3f64..1e3f64,
        sampling_freq in 1e-3f64..1e6f64,
    ) {
        let metadata = Metadata::new(start_time, sampling_freq, samples.len());
        let signal = Signal::Real(samples);

        let bytes = encode(&metadata, &signal).unwrap();
        let (back_meta, back_signal) = decode(&bytes).unwrap();
        prop_assert_eq!(back_meta, metadata);
        prop_assert_eq!(back_signal, signal);
    }

    /// Complex signals round-trip as well, interleaved real/imaginary.
    #[test]
    fn roundtrip_complex(
        pairs in prop::collection::vec((prop::num::f64::NORMAL, prop::num::f64::NORMAL), 0..64),
    ) {
        let samples: Vec<Complex64> =
            pairs.into_iter().map(|(re, im)| Complex64::new(re, im)).collect();
        let metadata = Metadata::new_complex(0.0, 1000.0, samples.len());
        let signal = Signal::Complex(samples);

        let bytes = encode(&metadata, &signal).unwrap();
        let (back_meta, back_signal) = decode(&bytes).unwrap();
        prop_assert_eq!(back_meta, metadata);
        prop_assert_eq!(back_signal, signal);
    }

    /// Every strict prefix of an encoded real signal with at least one
    /// sample fails to decode cleanly.
    #[test]
    fn truncation_never_panics(
        samples in prop::collection::vec(-1.0f64..1.0f64, 1..32),
        cut in 0usize..usize::MAX,
    ) {
        let metadata = Metadata::new(0.0, 10.0, samples.len());
        let signal = Signal::Real(samples);
        let bytes = encode(&metadata, &signal).unwrap();

        let cut = cut % bytes.len();
        prop_assert!(decode(&bytes[..cut]).is_err());
    }
}
