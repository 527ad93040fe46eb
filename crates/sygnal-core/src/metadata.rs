//! The [`Metadata`] record accompanying every signal.
//!
//! Metadata is an immutable value: derived records are built by cloning the
//! source and patching the changed fields ([`Metadata::resampled`],
//! [`Metadata::tagged`]), never by mutating a record another owner may hold.
//!
//! `duration` is deliberately an independent field. Producers may set it to
//! something other than `num_samples / sampling_freq` and chained operations
//! preserve it as given, so it must never be used as an authority over the
//! other two fields.

use crate::error::{Error, Result};
use crate::signal::Signal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Descriptive record for a sampled signal.
///
/// The five named fields are required by the file format; any additional
/// flat provenance keys an operation appends (filter parameters, wavelet
/// name, quantization range) live in `extra` and serialize inline next to
/// the required keys.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metadata {
    /// Timestamp of sample 0, in seconds.
    pub start_time: f64,
    /// Sampling frequency in Hz; the inverse of the sample spacing.
    pub sampling_freq: f64,
    /// Selects the 16-byte complex sample layout in the codec.
    pub is_complex: bool,
    /// Sample count; must equal the signal length for a valid pair.
    pub num_samples: usize,
    /// Nominal duration in seconds. Caller-supplied and non-authoritative.
    pub duration: f64,
    /// Flat operation-specific provenance keys.
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl Metadata {
    /// Build a real-signal record with `duration` derived from the sample
    /// count and rate.
    pub fn new(start_time: f64, sampling_freq: f64, num_samples: usize) -> Self {
        Self {
            start_time,
            sampling_freq,
            is_complex: false,
            num_samples,
            duration: if sampling_freq != 0.0 {
                num_samples as f64 / sampling_freq
            } else {
                0.0
            },
            extra: BTreeMap::new(),
        }
    }

    /// Same as [`Metadata::new`] with the complex flag set.
    pub fn new_complex(start_time: f64, sampling_freq: f64, num_samples: usize) -> Self {
        Self {
            is_complex: true,
            ..Self::new(start_time, sampling_freq, num_samples)
        }
    }

    /// Copy of this record with `sampling_freq` and `num_samples` replaced.
    ///
    /// `duration` is carried over unchanged: resampling re-covers the same
    /// time window at a different rate.
    pub fn resampled(&self, sampling_freq: f64, num_samples: usize) -> Self {
        Self {
            sampling_freq,
            num_samples,
            ..self.clone()
        }
    }

    /// Copy of this record with one provenance key appended.
    pub fn tagged(&self, key: &str, value: impl Into<serde_json::Value>) -> Self {
        let mut derived = self.clone();
        derived.extra.insert(key.to_owned(), value.into());
        derived
    }

    /// Check the `len(signal) == num_samples` invariant.
    pub fn validate(&self, signal: &Signal) -> Result<()> {
        if signal.len() != self.num_samples {
            return Err(Error::MalformedMetadata(format!(
                "num_samples is {} but the signal holds {} samples",
                self.num_samples,
                signal.len()
            )));
        }
        Ok(())
    }
}
