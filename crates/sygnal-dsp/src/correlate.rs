//! Full discrete convolution and cross-correlation with metadata
//! propagation, plus the correlation-based ranging estimator.
//!
//! Both operations produce `len(a) + len(b) - 1` samples, the full overlap
//! of the two sequences. Correlation slides the second operand as the
//! reference, so `correlate_full(x, y)[k]` measures the match of `y`
//! shifted across `x`.
//!
//! The combined metadata follows the file format's conventions: start
//! times add, the sampling frequency comes from the second operand when
//! present (then the first, then 1.0), the complex flag is the OR of both
//! inputs, and count/duration are recomputed from the output length.

use sygnal_core::{Complex64, Metadata, Signal};

/// Full discrete convolution of two real sequences.
///
/// `y[n] = Σ_k a[k] · b[n-k]`, length `len(a) + len(b) - 1`.
pub fn convolve_full(a: &[f64], b: &[f64]) -> Vec<f64> {
    if a.is_empty() || b.is_empty() {
        return Vec::new();
    }
    let mut out = vec![0.0; a.len() + b.len() - 1];
    for (i, &av) in a.iter().enumerate() {
        for (j, &bv) in b.iter().enumerate() {
            out[i + j] += av * bv;
        }
    }
    out
}

fn convolve_full_complex(a: &[Complex64], b: &[Complex64]) -> Vec<Complex64> {
    if a.is_empty() || b.is_empty() {
        return Vec::new();
    }
    let mut out = vec![Complex64::new(0.0, 0.0); a.len() + b.len() - 1];
    for (i, &av) in a.iter().enumerate() {
        for (j, &bv) in b.iter().enumerate() {
            out[i + j] += av * bv;
        }
    }
    out
}

/// Full cross-correlation of two real sequences, `b` as the sliding
/// reference.
///
/// Equivalent to convolving `a` with `b` reversed; same length convention
/// as [`convolve_full`].
pub fn correlate_full(a: &[f64], b: &[f64]) -> Vec<f64> {
    let reversed: Vec<f64> = b.iter().rev().copied().collect();
    convolve_full(a, &reversed)
}

fn correlate_full_complex(a: &[Complex64], b: &[Complex64]) -> Vec<Complex64> {
    // complex correlation conjugates the reference
    let reversed: Vec<Complex64> = b.iter().rev().map(|c| c.conj()).collect();
    convolve_full_complex(a, &reversed)
}

/// Convolve two signals and derive the combined metadata.
pub fn convolve(
    a: &Signal,
    b: &Signal,
    meta_a: Option<&Metadata>,
    meta_b: Option<&Metadata>,
) -> (Signal, Metadata) {
    let out = match (a, b) {
        (Signal::Real(x), Signal::Real(y)) => Signal::Real(convolve_full(x, y)),
        _ => Signal::Complex(convolve_full_complex(&a.to_complex(), &b.to_complex())),
    };
    let metadata = combined_metadata(&out, meta_a, meta_b);
    (out, metadata)
}

/// Cross-correlate two signals and derive the combined metadata.
pub fn correlate(
    a: &Signal,
    b: &Signal,
    meta_a: Option<&Metadata>,
    meta_b: Option<&Metadata>,
) -> (Signal, Metadata) {
    let out = match (a, b) {
        (Signal::Real(x), Signal::Real(y)) => Signal::Real(correlate_full(x, y)),
        _ => Signal::Complex(correlate_full_complex(&a.to_complex(), &b.to_complex())),
    };
    let metadata = combined_metadata(&out, meta_a, meta_b);
    (out, metadata)
}

fn combined_metadata(
    out: &Signal,
    meta_a: Option<&Metadata>,
    meta_b: Option<&Metadata>,
) -> Metadata {
    let start_time = meta_a.map_or(0.0, |m| m.start_time) + meta_b.map_or(0.0, |m| m.start_time);
    let sampling_freq = meta_b
        .map(|m| m.sampling_freq)
        .or_else(|| meta_a.map(|m| m.sampling_freq))
        .unwrap_or(1.0);
    let is_complex =
        out.is_complex() || meta_a.is_some_and(|m| m.is_complex) || meta_b.is_some_and(|m| m.is_complex);

    let mut metadata = Metadata::new(start_time, sampling_freq, out.len());
    metadata.is_complex = is_complex;
    metadata
}

/// Result of one correlation-based distance measurement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RangingEstimate {
    /// One-way distance to the reflector, in the velocity's length unit.
    pub distance: f64,
    /// Lag of the correlation peak within the causal half, in samples.
    pub lag_samples: usize,
    /// Round-trip delay corresponding to the peak, in seconds.
    pub time_delay: f64,
}

/// Estimate the distance to a reflector from a transmit/receive pair.
///
/// Correlates the received buffer against the transmitted one, finds the
/// peak in the causal half of the full correlation (lags at or after the
/// center), and converts the peak lag into a one-way distance using the
/// propagation velocity. An empty buffer yields a zero estimate.
pub fn estimate_distance(
    tx: &[f64],
    rx: &[f64],
    sampling_freq: f64,
    velocity: f64,
) -> RangingEstimate {
    let correlation = correlate_full(rx, tx);
    let center = correlation.len() / 2;

    let lag_samples = correlation[center..]
        .iter()
        .enumerate()
        .max_by(|(_, x), (_, y)| x.partial_cmp(y).unwrap_or(std::cmp::Ordering::Equal))
        .map_or(0, |(i, _)| i);

    let time_delay = lag_samples as f64 / sampling_freq;
    RangingEstimate {
        // the peak lag spans the round trip, so halve it
        distance: velocity * time_delay / 2.0,
        lag_samples,
        time_delay,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convolve_reference_values() {
        assert_eq!(convolve_full(&[1.0, 1.0], &[1.0, 1.0]), vec![1.0, 2.0, 1.0]);
        assert_eq!(
            convolve_full(&[1.0, 2.0, 3.0], &[0.0, 1.0, 0.5]),
            vec![0.0, 1.0, 2.5, 4.0, 1.5]
        );
    }

    #[test]
    fn test_correlate_reference_values() {
        assert_eq!(
            correlate_full(&[1.0, 2.0, 3.0], &[0.0, 1.0, 0.0]),
            vec![0.0, 1.0, 2.0, 3.0, 0.0]
        );
    }

    #[test]
    fn test_convolve_commutative() {
        let a = [1.0, -2.0, 0.5, 3.0];
        let b = [0.25, 1.0, -1.0];
        assert_eq!(convolve_full(&a, &b), convolve_full(&b, &a));
    }

    #[test]
    fn test_empty_operand() {
        assert!(convolve_full(&[], &[1.0]).is_empty());
        assert!(correlate_full(&[1.0, 2.0], &[]).is_empty());
    }

    #[test]
    fn test_metadata_combination_rule() {
        let meta_a = Metadata::new(1.0, 40.0, 3);
        let mut meta_b = Metadata::new(0.5, 100.0, 3);
        meta_b.is_complex = true;

        let a = Signal::Real(vec![1.0, 0.0, 0.0]);
        let b = Signal::Real(vec![0.0, 1.0, 0.0]);
        let (out, meta) = convolve(&a, &b, Some(&meta_a), Some(&meta_b));

        assert_eq!(out.len(), 5);
        assert_eq!(meta.start_time, 1.5);
        assert_eq!(meta.sampling_freq, 100.0); // second operand wins
        assert!(meta.is_complex);
        assert_eq!(meta.num_samples, 5);
        assert_eq!(meta.duration, 5.0 / 100.0);
    }

    #[test]
    fn test_metadata_fallbacks() {
        let meta_a = Metadata::new(2.0, 40.0, 2);
        let a = Signal::Real(vec![1.0, 1.0]);
        let b = Signal::Real(vec![1.0, 1.0]);

        let (_, meta) = convolve(&a, &b, Some(&meta_a), None);
        assert_eq!(meta.start_time, 2.0);
        assert_eq!(meta.sampling_freq, 40.0); // falls back to the first

        let (_, meta) = convolve(&a, &b, None, None);
        assert_eq!(meta.start_time, 0.0);
        assert_eq!(meta.sampling_freq, 1.0); // final fallback
    }

    #[test]
    fn test_complex_correlation_conjugates_reference() {
        let a = vec![Complex64::new(0.0, 1.0)];
        let b = vec![Complex64::new(0.0, 1.0)];
        // i * conj(i) = 1: a signal correlates positively with itself
        assert_eq!(
            correlate_full_complex(&a, &b),
            vec![Complex64::new(1.0, 0.0)]
        );
    }

    #[test]
    fn test_ranging_recovers_delay() {
        // wideband probe so the correlation peak is sharp
        let mut state = 0x2545_f491_4f6c_dd1du64;
        let mut noise = || {
            state ^= state << 13;
            state ^= state >> 17;
            state ^= state << 5;
            (state >> 11) as f64 / (1u64 << 53) as f64 * 2.0 - 1.0
        };
        let n = 1024;
        let probe: Vec<f64> = (0..n).map(|_| noise()).collect();

        // echo delayed by the round trip to a reflector 45 m away
        let fs = 1e9;
        let velocity = 3e8;
        let true_distance = 45.0;
        let delay = (2.0 * true_distance / velocity * fs) as usize;
        let mut rx = vec![0.0; n];
        rx[delay..].copy_from_slice(&probe[..n - delay]);

        let estimate = estimate_distance(&probe, &rx, fs, velocity);
        assert_eq!(estimate.lag_samples, delay);
        assert!(
            (estimate.distance - true_distance).abs() < velocity / fs,
            "estimated {} m, wanted {} m",
            estimate.distance,
            true_distance
        );
    }
}
