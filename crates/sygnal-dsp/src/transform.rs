//! Frequency-domain and wavelet-domain transform dispatch.
//!
//! The Fourier path uses `rustfft` on the full buffer and always produces
//! a complex signal. The wavelet path delegates to [`crate::wavelet`] and
//! stays real. Either way the output gets fresh metadata derived from the
//! input's timing, since the transformed samples no longer share the
//! input's per-sample interpretation.

use rustfft::FftPlanner;
use sygnal_core::{Complex64, Metadata, Result, Signal};

use crate::wavelet::{Wavelet, wavelet_transform};

/// Which transform to apply to a signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transform {
    /// Discrete Fourier transform over the whole buffer.
    Fourier,
    /// Multi-level discrete wavelet decomposition.
    Wavelet(Wavelet),
}

/// Apply the selected transform, returning the output and its metadata.
pub fn transform(
    kind: Transform,
    signal: &Signal,
    metadata: &Metadata,
) -> Result<(Signal, Metadata)> {
    match kind {
        Transform::Fourier => Ok(fft_transform(signal, metadata)),
        Transform::Wavelet(wavelet) => wavelet_transform(wavelet, signal, metadata),
    }
}

/// Forward DFT of the signal, real or complex.
pub fn fft_transform(signal: &Signal, metadata: &Metadata) -> (Signal, Metadata) {
    let mut buffer = signal.to_complex();
    if !buffer.is_empty() {
        let fft = FftPlanner::new().plan_fft_forward(buffer.len());
        fft.process(&mut buffer);
    }
    let out_meta = Metadata::new_complex(metadata.start_time, metadata.sampling_freq, buffer.len());
    (Signal::Complex(buffer), out_meta)
}
