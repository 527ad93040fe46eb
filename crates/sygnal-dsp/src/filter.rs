//! Windowed-sinc FIR filter design and application.
//!
//! Lowpass design follows the classic window method: a symmetric truncated
//! sinc with the center tap pinned to `2/K`, where `K = fs / cutoff` sets
//! the cutoff as a fraction of the sampling rate. Highpass is the spectral
//! inversion of the same lowpass - negate every tap and add a unit impulse
//! at the center - so `lowpass + highpass` reconstructs a pure delay.
//!
//! [`apply_filter`] convolves in full and keeps the central window, which
//! cancels the linear-phase group delay: output and input stay time-aligned
//! and equally long.

use crate::correlate::convolve_full;
use std::f64::consts::PI;
use sygnal_core::{Error, Metadata, Result, Signal};

/// Lowpass or highpass design.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterKind {
    /// Windowed-sinc lowpass.
    Lowpass,
    /// Spectral inversion of the lowpass.
    Highpass,
}

/// Window applied to the designed taps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Window {
    /// No windowing.
    Rectangular,
    /// Hann window, `0.5 - 0.5·cos(2πn/M)`.
    Hann,
}

/// Design an `num_taps`-tap windowed-sinc lowpass.
///
/// `num_taps` must be odd so the filter is symmetric around its center;
/// `k` is the sampling-to-cutoff frequency ratio. The center tap is `2/k`,
/// every other tap `n` is `sin(2π(n - c)/k) / (π(n - c))` with `c` the
/// center index.
pub fn design_lowpass(num_taps: usize, k: f64, window: Window) -> Result<Vec<f64>> {
    if num_taps % 2 == 0 {
        return Err(Error::InvalidTapCount(num_taps));
    }

    let center = (num_taps - 1) / 2;
    let mut taps: Vec<f64> = (0..num_taps)
        .map(|n| {
            if n == center {
                2.0 / k
            } else {
                let offset = n as f64 - center as f64;
                (2.0 * PI * offset / k).sin() / (PI * offset)
            }
        })
        .collect();

    if window == Window::Hann {
        let m = num_taps as f64;
        for (n, tap) in taps.iter_mut().enumerate() {
            *tap *= 0.5 - 0.5 * (2.0 * PI * n as f64 / m).cos();
        }
    }

    Ok(taps)
}

/// Design a highpass by spectral inversion of [`design_lowpass`].
pub fn design_highpass(num_taps: usize, k: f64, window: Window) -> Result<Vec<f64>> {
    let mut taps = design_lowpass(num_taps, k, window)?;
    for tap in taps.iter_mut() {
        *tap = -*tap;
    }
    taps[(num_taps - 1) / 2] += 1.0;
    Ok(taps)
}

/// Convolve and keep the group-delay-aligned central window.
///
/// The output has exactly `signal.len()` samples for any tap count.
pub fn apply_filter(signal: &[f64], coeffs: &[f64]) -> Vec<f64> {
    if signal.is_empty() || coeffs.is_empty() {
        return signal.to_vec();
    }
    let full = convolve_full(signal, coeffs);
    let start = coeffs.len() / 2;
    full[start..start + signal.len()].to_vec()
}

/// Validate, design, and apply a filter to a signal/metadata pair.
///
/// The cutoff must lie strictly inside `(0, fs/2)`. The returned metadata
/// is the input's, annotated with `filtering_frequency`, `num_of_taps`,
/// and `is_hanning_window`.
pub fn filter_signal(
    signal: &Signal,
    metadata: &Metadata,
    kind: FilterKind,
    cutoff_freq: f64,
    num_taps: usize,
    window: Window,
) -> Result<(Signal, Metadata)> {
    let samples = signal.as_real().ok_or_else(|| {
        Error::UnsupportedOperation("FIR filtering of a complex signal".into())
    })?;

    let nyquist = metadata.sampling_freq / 2.0;
    let normalized = cutoff_freq / nyquist;
    if !(normalized > 0.0 && normalized < 1.0) {
        return Err(Error::InvalidCutoff {
            cutoff: cutoff_freq,
            nyquist,
        });
    }

    let k = (metadata.sampling_freq / cutoff_freq).floor();
    let taps = match kind {
        FilterKind::Lowpass => design_lowpass(num_taps, k, window)?,
        FilterKind::Highpass => design_highpass(num_taps, k, window)?,
    };

    let filtered = apply_filter(samples, &taps);
    let out_meta = metadata
        .tagged("filtering_frequency", cutoff_freq)
        .tagged("num_of_taps", num_taps)
        .tagged("is_hanning_window", window == Window::Hann);
    Ok((Signal::Real(filtered), out_meta))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowpass_center_tap() {
        // M=5, K=4, rectangular: center tap is 2/4 = 0.5
        let taps = design_lowpass(5, 4.0, Window::Rectangular).unwrap();
        assert_eq!(taps.len(), 5);
        assert_eq!(taps[2], 0.5);
    }

    #[test]
    fn test_lowpass_symmetric() {
        let taps = design_lowpass(21, 6.0, Window::Rectangular).unwrap();
        for i in 0..taps.len() / 2 {
            assert!(
                (taps[i] - taps[taps.len() - 1 - i]).abs() < 1e-12,
                "taps not symmetric at {i}"
            );
        }
    }

    #[test]
    fn test_even_tap_count_rejected() {
        assert!(matches!(
            design_lowpass(8, 4.0, Window::Rectangular),
            Err(Error::InvalidTapCount(8))
        ));
        assert!(matches!(
            design_highpass(4, 4.0, Window::Hann),
            Err(Error::InvalidTapCount(4))
        ));
    }

    #[test]
    fn test_spectral_inversion_identity() {
        // lowpass + highpass must equal a unit impulse at the center tap
        for window in [Window::Rectangular, Window::Hann] {
            let lp = design_lowpass(9, 3.0, window).unwrap();
            let hp = design_highpass(9, 3.0, window).unwrap();
            for (i, (l, h)) in lp.iter().zip(hp.iter()).enumerate() {
                let expected = if i == 4 { 1.0 } else { 0.0 };
                assert!(
                    (l + h - expected).abs() < 1e-12,
                    "tap {i}: {l} + {h} != {expected}"
                );
            }
        }
    }

    #[test]
    fn test_apply_preserves_length() {
        let signal: Vec<f64> = (0..50).map(|i| (i as f64 * 0.3).sin()).collect();
        for taps in [1usize, 3, 5, 11, 31] {
            let coeffs = design_lowpass(taps, 4.0, Window::Hann).unwrap();
            let out = apply_filter(&signal, &coeffs);
            assert_eq!(out.len(), signal.len(), "{taps} taps changed the length");
        }
    }

    #[test]
    fn test_highpass_removes_dc() {
        // steady-state response of a highpass to a constant input is the
        // filter's DC gain: small for a short design, exact once settled
        let signal = vec![1.0; 64];
        let coeffs = design_highpass(5, 4.0, Window::Rectangular).unwrap();
        let dc_gain: f64 = coeffs.iter().sum();
        assert!(dc_gain.abs() < 0.15, "DC gain too large: {dc_gain}");

        let out = apply_filter(&signal, &coeffs);
        // skip the edges where the filter is still filling
        for (i, &y) in out.iter().enumerate().skip(4).take(out.len() - 8) {
            assert!((y - dc_gain).abs() < 1e-12, "sample {i}: {y} vs {dc_gain}");
        }
    }

    #[test]
    fn test_filter_signal_validates_cutoff() {
        let metadata = Metadata::new(0.0, 100.0, 4);
        let signal = Signal::Real(vec![0.0; 4]);

        for bad in [0.0, -5.0, 50.0, 80.0] {
            assert!(
                matches!(
                    filter_signal(&signal, &metadata, FilterKind::Lowpass, bad, 5, Window::Rectangular),
                    Err(Error::InvalidCutoff { .. })
                ),
                "cutoff {bad} should be rejected"
            );
        }
    }

    #[test]
    fn test_filter_signal_annotates_metadata() {
        let metadata = Metadata::new(0.0, 100.0, 16);
        let signal = Signal::Real(vec![1.0; 16]);
        let (out, meta) =
            filter_signal(&signal, &metadata, FilterKind::Lowpass, 10.0, 7, Window::Hann)
                .unwrap();

        assert_eq!(out.len(), 16);
        assert_eq!(meta.extra["filtering_frequency"], serde_json::json!(10.0));
        assert_eq!(meta.extra["num_of_taps"], serde_json::json!(7));
        assert_eq!(meta.extra["is_hanning_window"], serde_json::json!(true));
        assert_eq!(meta.num_samples, metadata.num_samples);
    }
}
