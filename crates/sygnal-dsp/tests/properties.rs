//! Property-based tests for the processing engines.

use proptest::prelude::*;
use sygnal_core::{Metadata, Signal};
use sygnal_dsp::{Window, apply_filter, convolve_full, design_lowpass, downsample, quantize};

fn finite_signal(max_len: usize) -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(-1e3f64..1e3f64, 1..max_len)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Filtering never changes the signal length, whatever the tap count.
    #[test]
    fn apply_filter_preserves_length(
        samples in finite_signal(128),
        half_taps in 0usize..20,
        k in 2.0f64..32.0f64,
    ) {
        let num_taps = 2 * half_taps + 1;
        let coeffs = design_lowpass(num_taps, k, Window::Hann).unwrap();
        let out = apply_filter(&samples, &coeffs);
        prop_assert_eq!(out.len(), samples.len());
    }

    /// Full convolution has length N+M-1 and is commutative.
    #[test]
    fn convolve_full_length_and_symmetry(
        a in finite_signal(48),
        b in finite_signal(48),
    ) {
        let ab = convolve_full(&a, &b);
        let ba = convolve_full(&b, &a);
        prop_assert_eq!(ab.len(), a.len() + b.len() - 1);
        for (x, y) in ab.iter().zip(&ba) {
            prop_assert!((x - y).abs() <= 1e-6 * x.abs().max(1.0));
        }
    }

    /// Downsampling by an integer factor keeps every stride-th sample and
    /// patches the metadata consistently.
    #[test]
    fn downsample_strides_exactly(
        samples in finite_signal(256),
        factor in 1usize..8,
    ) {
        // divisible by every factor so target and stride are exact
        let fs = 840.0;
        let metadata = Metadata::new(0.0, fs, samples.len());
        let target = fs / factor as f64;

        let (out, out_meta) = downsample(&Signal::Real(samples.clone()), &metadata, target).unwrap();
        let Signal::Real(out) = out else { panic!("expected real") };

        let expected: Vec<f64> = samples.iter().copied().step_by(factor).collect();
        prop_assert_eq!(&out, &expected);
        prop_assert_eq!(out_meta.num_samples, expected.len());
        prop_assert_eq!(out_meta.sampling_freq, target);
    }

    /// Every quantized sample sits within half a step of its input and the
    /// length never changes.
    #[test]
    fn quantize_error_bounded_by_half_step(
        samples in finite_signal(128),
        num_levels in 2usize..64,
    ) {
        let metadata = Metadata::new(0.0, 100.0, samples.len());
        let (out, out_meta) = quantize(&Signal::Real(samples.clone()), &metadata, num_levels).unwrap();
        let Signal::Real(out) = out else { panic!("expected real") };

        prop_assert_eq!(out.len(), samples.len());
        let step = out_meta.extra["step_size"].as_f64().unwrap();
        for (x, q) in samples.iter().zip(&out) {
            prop_assert!((x - q).abs() <= step / 2.0 + 1e-9);
        }
    }
}
