//! Comparison metrics between an original and a reconstructed signal.
//!
//! All four metrics are magnitude-based scalar reductions, so they are
//! defined for real and complex signals alike. `SNR` and `PSNR` return
//! `f64::INFINITY` for a perfect reconstruction instead of failing.

use crate::error::{Error, Result};
use crate::signal::Signal;

/// All four metrics of one comparison.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Comparison {
    /// Mean squared error, `mean(|a - b|^2)`.
    pub mse: f64,
    /// Signal-to-noise ratio in dB; infinite when the noise power is 0.
    pub snr_db: f64,
    /// Peak signal-to-noise ratio in dB; infinite when the MSE is 0.
    pub psnr_db: f64,
    /// Largest per-sample deviation, `max(|a - b|)`.
    pub max_difference: f64,
}

/// Compute every metric at once.
pub fn compare(original: &Signal, reconstructed: &Signal) -> Result<Comparison> {
    Ok(Comparison {
        mse: mse(original, reconstructed)?,
        snr_db: snr_db(original, reconstructed)?,
        psnr_db: psnr_db(original, reconstructed)?,
        max_difference: max_difference(original, reconstructed)?,
    })
}

/// Mean squared error between two equal-length signals.
pub fn mse(original: &Signal, reconstructed: &Signal) -> Result<f64> {
    let diff = difference_magnitudes(original, reconstructed)?;
    Ok(mean(diff.iter().map(|d| d * d)))
}

/// Signal-to-noise ratio in dB, treating `reconstructed` as the noisy copy.
pub fn snr_db(original: &Signal, reconstructed: &Signal) -> Result<f64> {
    let noise_power = mse(original, reconstructed)?;
    let signal_power = mean(original.magnitudes().iter().map(|m| m * m));

    if noise_power == 0.0 {
        return Ok(f64::INFINITY);
    }
    Ok(10.0 * (signal_power / noise_power).log10())
}

/// Peak signal-to-noise ratio in dB.
pub fn psnr_db(original: &Signal, reconstructed: &Signal) -> Result<f64> {
    let mse = mse(original, reconstructed)?;
    let peak = original.magnitudes().into_iter().fold(0.0f64, f64::max);

    if mse == 0.0 {
        return Ok(f64::INFINITY);
    }
    Ok(10.0 * (peak * peak / mse).log10())
}

/// Largest per-sample magnitude of the difference.
pub fn max_difference(original: &Signal, reconstructed: &Signal) -> Result<f64> {
    let diff = difference_magnitudes(original, reconstructed)?;
    Ok(diff.into_iter().fold(0.0f64, f64::max))
}

/// `|a[i] - b[i]|` per sample, after validating lengths.
fn difference_magnitudes(a: &Signal, b: &Signal) -> Result<Vec<f64>> {
    if a.len() != b.len() {
        return Err(Error::LengthMismatch {
            left: a.len(),
            right: b.len(),
        });
    }
    let x = a.to_complex();
    let y = b.to_complex();
    Ok(x.iter().zip(y.iter()).map(|(&xv, &yv)| (xv - yv).norm()).collect())
}

fn mean(values: impl Iterator<Item = f64>) -> f64 {
    let mut sum = 0.0;
    let mut count = 0usize;
    for v in values {
        sum += v;
        count += 1;
    }
    if count == 0 { 0.0 } else { sum / count as f64 }
}
