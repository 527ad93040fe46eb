//! Thin file wrappers around the byte codec.

use crate::codec;
use std::fmt::Write as _;
use std::path::Path;
use sygnal_core::{Metadata, Result, Signal};

/// Read and decode a signal file.
pub fn load<P: AsRef<Path>>(path: P) -> Result<(Metadata, Signal)> {
    let bytes = std::fs::read(path.as_ref())?;
    let (metadata, signal) = codec::decode(&bytes)?;
    tracing::debug!(
        path = %path.as_ref().display(),
        num_samples = metadata.num_samples,
        is_complex = metadata.is_complex,
        "loaded signal"
    );
    Ok((metadata, signal))
}

/// Encode and write a signal file.
pub fn save<P: AsRef<Path>>(path: P, metadata: &Metadata, signal: &Signal) -> Result<()> {
    let bytes = codec::encode(metadata, signal)?;
    std::fs::write(path.as_ref(), &bytes)?;
    tracing::debug!(
        path = %path.as_ref().display(),
        bytes = bytes.len(),
        "saved signal"
    );
    Ok(())
}

/// Human-readable listing of a metadata/signal pair.
///
/// Metadata keys come first, one per line, followed by every sample.
/// Complex samples are split into their real and imaginary parts.
pub fn text_representation(metadata: &Metadata, signal: &Signal) -> String {
    let mut text = String::from("Signal Metadata:\n");
    let _ = writeln!(text, "start_time: {}", metadata.start_time);
    let _ = writeln!(text, "sampling_freq: {}", metadata.sampling_freq);
    let _ = writeln!(text, "is_complex: {}", metadata.is_complex);
    let _ = writeln!(text, "num_samples: {}", metadata.num_samples);
    let _ = writeln!(text, "duration: {}", metadata.duration);
    for (key, value) in &metadata.extra {
        let _ = writeln!(text, "{key}: {value}");
    }

    text.push_str("\nSignal Data:\n");
    match signal {
        Signal::Real(samples) => {
            for (i, value) in samples.iter().enumerate() {
                let _ = writeln!(text, "Sample {i}: {value}");
            }
        }
        Signal::Complex(samples) => {
            for (i, value) in samples.iter().enumerate() {
                let _ = writeln!(
                    text,
                    "Sample {i}: Real={}, Imaginary={}",
                    value.re, value.im
                );
            }
        }
    }

    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use sygnal_core::Complex64;

    #[test]
    fn test_text_representation_real() {
        let metadata = Metadata::new(0.0, 2.0, 2).tagged("num_of_taps", 5);
        let signal = Signal::Real(vec![1.0, -2.5]);
        let text = text_representation(&metadata, &signal);

        assert!(text.contains("sampling_freq: 2"));
        assert!(text.contains("num_of_taps: 5"));
        assert!(text.contains("Sample 0: 1"));
        assert!(text.contains("Sample 1: -2.5"));
    }

    #[test]
    fn test_text_representation_complex() {
        let metadata = Metadata::new_complex(0.0, 1.0, 1);
        let signal = Signal::Complex(vec![Complex64::new(0.5, -0.25)]);
        let text = text_representation(&metadata, &signal);
        assert!(text.contains("Sample 0: Real=0.5, Imaginary=-0.25"));
    }
}
