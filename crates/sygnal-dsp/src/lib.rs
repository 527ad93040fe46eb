//! Sygnal DSP - processing operations over signal/metadata pairs
//!
//! This crate provides the numeric engines of the toolkit:
//!
//! - [`resample`] - downsampling, quantization, zero-order hold,
//!   linear interpolation, and ideal sinc reconstruction
//! - [`filter`] - windowed-sinc FIR design and same-length application
//! - [`correlate`] - full discrete convolution and cross-correlation with
//!   metadata propagation, plus correlation-based ranging
//! - [`transform`] - FFT spectrum and multi-level Daubechies wavelet
//!   decomposition
//!
//! Every operation is a synchronous pure function: it borrows its inputs
//! and returns a freshly built signal/metadata pair (or a typed
//! [`sygnal_core::Error`]), so calls are independent and safe to run from
//! any thread. Long operations - sinc reconstruction is O(N·M), large
//! convolutions O(N·M) - block until done; there are no cancellation
//! points.
//!
//! # Example
//!
//! ```rust
//! use sygnal_core::{Metadata, Signal};
//! use sygnal_dsp::resample::{ResampleMode, resample};
//!
//! let metadata = Metadata::new(0.0, 8.0, 8);
//! let signal = Signal::Real((0..8).map(f64::from).collect());
//!
//! let (out, meta) = resample(&signal, &metadata, 4.0, ResampleMode::Downsample).unwrap();
//! assert_eq!(out, Signal::Real(vec![0.0, 2.0, 4.0, 6.0]));
//! assert_eq!(meta.sampling_freq, 4.0);
//! ```

pub mod correlate;
pub mod filter;
pub mod resample;
pub mod transform;
pub mod wavelet;

pub use correlate::{RangingEstimate, convolve, convolve_full, correlate, correlate_full, estimate_distance};
pub use filter::{FilterKind, Window, apply_filter, design_highpass, design_lowpass, filter_signal};
pub use resample::{ResampleMode, downsample, extrapolate, interpolate, quantize, reconstruct, resample};
pub use transform::{Transform, fft_transform, transform};
pub use wavelet::{Wavelet, wavedec, wavelet_transform};
