//! Sampling-rate conversion and quantization.
//!
//! Four rate-conversion modes share one contract: they take a signal, its
//! metadata, and a target frequency, and return a new pair whose metadata
//! is a copy of the input with `sampling_freq` and `num_samples` patched.
//! The `duration` field is carried over unchanged - the output re-covers
//! the same time window at a different rate.
//!
//! - [`downsample`] - stride selection, no anti-aliasing filter. Aliasing
//!   above the new Nyquist is an accepted limitation of the format, not a
//!   bug.
//! - [`extrapolate`] - zero-order hold (nearest sample at or before each
//!   target time).
//! - [`interpolate`] - piecewise-linear between original sample times.
//! - [`reconstruct`] - ideal sinc interpolation,
//!   `x(t) = Σ_n x[n] · sinc((t - nT) / T)`. O(N·M) in the original and
//!   target lengths; fine for the signal sizes this toolkit targets, too
//!   slow for long captures without a truncated-kernel variant.
//!
//! [`quantize`] is the odd one out: it keeps the rate and count, mapping
//! samples onto uniformly spaced levels over the signal's own range.

use std::f64::consts::PI;
use sygnal_core::{Error, Metadata, Result, Signal};

/// Closed dispatch over the four rate-conversion modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResampleMode {
    /// Stride selection to a lower rate.
    Downsample,
    /// Zero-order hold.
    Extrapolate,
    /// Piecewise-linear interpolation.
    Interpolate,
    /// Ideal sinc reconstruction.
    Reconstruct,
}

/// Run the requested rate-conversion mode.
pub fn resample(
    signal: &Signal,
    metadata: &Metadata,
    target_freq: f64,
    mode: ResampleMode,
) -> Result<(Signal, Metadata)> {
    match mode {
        ResampleMode::Downsample => downsample(signal, metadata, target_freq),
        ResampleMode::Extrapolate => extrapolate(signal, metadata, target_freq),
        ResampleMode::Interpolate => interpolate(signal, metadata, target_freq),
        ResampleMode::Reconstruct => reconstruct(signal, metadata, target_freq),
    }
}

fn check_frequencies(metadata: &Metadata, target_freq: f64) -> Result<f64> {
    let original = metadata.sampling_freq;
    if !(original > 0.0) || !(target_freq > 0.0) {
        return Err(Error::InvalidFrequency {
            target: target_freq,
            original,
        });
    }
    Ok(original)
}

/// Keep every `floor(original / target)`-th sample.
///
/// The target must not exceed the original rate; `target == original` is a
/// stride of 1 and returns the signal unchanged.
pub fn downsample(
    signal: &Signal,
    metadata: &Metadata,
    target_freq: f64,
) -> Result<(Signal, Metadata)> {
    let original = check_frequencies(metadata, target_freq)?;
    if target_freq > original {
        return Err(Error::InvalidFrequency {
            target: target_freq,
            original,
        });
    }

    let step = (original / target_freq) as usize;
    let out = match signal {
        Signal::Real(v) => Signal::Real(v.iter().step_by(step).copied().collect()),
        Signal::Complex(v) => Signal::Complex(v.iter().step_by(step).copied().collect()),
    };
    let out_meta = metadata.resampled(target_freq, out.len());
    Ok((out, out_meta))
}

/// Number of output samples covering `duration` at `target_freq`.
fn target_count(metadata: &Metadata, target_freq: f64) -> usize {
    (metadata.duration * target_freq) as usize
}

/// Zero-order hold: each target time takes the most recent original sample.
///
/// Works on both domains since it only reindexes samples. The nearest-below
/// lookup clips to the valid index range, so target times before the first
/// sample hold the first sample.
pub fn extrapolate(
    signal: &Signal,
    metadata: &Metadata,
    target_freq: f64,
) -> Result<(Signal, Metadata)> {
    let source = check_frequencies(metadata, target_freq)?;
    let count = target_count(metadata, target_freq);

    if signal.is_empty() {
        let out = match signal {
            Signal::Real(_) => Signal::Real(Vec::new()),
            Signal::Complex(_) => Signal::Complex(Vec::new()),
        };
        return Ok((out, metadata.resampled(target_freq, 0)));
    }

    let times: Vec<f64> = (0..signal.len())
        .map(|k| metadata.start_time + k as f64 / source)
        .collect();
    let indices: Vec<usize> = (0..count)
        .map(|m| {
            let t = metadata.start_time + m as f64 / target_freq;
            nearest_below(&times, t)
        })
        .collect();

    let out = match signal {
        Signal::Real(v) => Signal::Real(indices.iter().map(|&i| v[i]).collect()),
        Signal::Complex(v) => Signal::Complex(indices.iter().map(|&i| v[i]).collect()),
    };
    let out_meta = metadata.resampled(target_freq, count);
    Ok((out, out_meta))
}

/// Index of the last timestamp at or before `t`, clipped to the range.
fn nearest_below(times: &[f64], t: f64) -> usize {
    let after = times.partition_point(|&ts| ts <= t);
    after.saturating_sub(1)
}

/// Piecewise-linear interpolation at uniformly spaced target times.
///
/// Target times outside the original span clamp to the endpoint values.
/// Real signals only.
pub fn interpolate(
    signal: &Signal,
    metadata: &Metadata,
    target_freq: f64,
) -> Result<(Signal, Metadata)> {
    let source = check_frequencies(metadata, target_freq)?;
    let samples = require_real(signal, "linear interpolation")?;
    let count = target_count(metadata, target_freq);

    if samples.is_empty() {
        return Ok((Signal::Real(Vec::new()), metadata.resampled(target_freq, 0)));
    }

    let period = 1.0 / source;
    let last = samples.len() - 1;
    let out: Vec<f64> = (0..count)
        .map(|m| {
            // target time relative to start_time, in units of the source period
            let pos = (m as f64 / target_freq) / period;
            let k = pos.floor() as usize;
            if pos <= 0.0 {
                samples[0]
            } else if k >= last {
                samples[last]
            } else {
                let frac = pos - k as f64;
                samples[k] + (samples[k + 1] - samples[k]) * frac
            }
        })
        .collect();

    let out_meta = metadata.resampled(target_freq, count);
    Ok((Signal::Real(out), out_meta))
}

/// Ideal sinc reconstruction sampled at the target rate.
///
/// Evaluates `x(t) = Σ_n x[n] · sinc((t - nT) / T)` with `T` the original
/// sample period. Real signals only.
pub fn reconstruct(
    signal: &Signal,
    metadata: &Metadata,
    target_freq: f64,
) -> Result<(Signal, Metadata)> {
    let source = check_frequencies(metadata, target_freq)?;
    let samples = require_real(signal, "sinc reconstruction")?;
    let count = target_count(metadata, target_freq);

    let period = 1.0 / source;
    let out: Vec<f64> = (0..count)
        .map(|m| {
            let t = m as f64 / target_freq;
            samples
                .iter()
                .enumerate()
                .map(|(n, &x)| x * sinc((t - n as f64 * period) / period))
                .sum()
        })
        .collect();

    let out_meta = metadata.resampled(target_freq, count);
    Ok((Signal::Real(out), out_meta))
}

/// Normalized sinc, `sin(πx) / (πx)` with `sinc(0) = 1`.
fn sinc(x: f64) -> f64 {
    if x == 0.0 { 1.0 } else { (PI * x).sin() / (PI * x) }
}

/// Map samples onto `num_levels` uniform levels over `[min, max]`.
///
/// The step is `(max - min) / (num_levels - 1)`. A constant signal has a
/// zero-width range and passes through unchanged. Real signals only.
/// Metadata gains the `quantization levels`, `min_value`, `max_value`, and
/// `step_size` provenance keys.
pub fn quantize(
    signal: &Signal,
    metadata: &Metadata,
    num_levels: usize,
) -> Result<(Signal, Metadata)> {
    if num_levels < 2 {
        return Err(Error::InvalidLevelCount(num_levels));
    }
    let samples = require_real(signal, "quantization")?;

    let min = samples.iter().copied().fold(f64::INFINITY, f64::min);
    let max = samples.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let (min, max) = if samples.is_empty() { (0.0, 0.0) } else { (min, max) };

    let levels = (num_levels - 1) as f64;
    let step = (max - min) / levels;

    let out: Vec<f64> = if max == min {
        // zero-width range: every sample already sits on the single level
        samples.to_vec()
    } else {
        samples
            .iter()
            .map(|&x| {
                let normalized = (x - min) / (max - min);
                (normalized * levels).round() / levels * (max - min) + min
            })
            .collect()
    };

    let out_meta = metadata
        .tagged("quantization levels", num_levels)
        .tagged("min_value", min)
        .tagged("max_value", max)
        .tagged("step_size", step);
    Ok((Signal::Real(out), out_meta))
}

fn require_real<'a>(signal: &'a Signal, operation: &str) -> Result<&'a [f64]> {
    signal.as_real().ok_or_else(|| {
        Error::UnsupportedOperation(format!("{operation} of a complex signal"))
    })
}
