//! Error taxonomy shared by every signal operation.
//!
//! Operations either return a complete result or fail fast with one of these
//! variants; there are no partial results. Each variant carries the offending
//! value so a caller can render a precise message. The documented numeric
//! fallbacks (the `1e-10` divide guard, zero-order-hold index clipping, the
//! constant-signal quantization case) are defined behaviors, not errors.

/// Typed failure of a codec or processing operation.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Metadata JSON could not be parsed or is missing a required field.
    #[error("malformed metadata: {0}")]
    MalformedMetadata(String),

    /// The sample payload is shorter than `num_samples` requires.
    #[error("corrupt file: payload needs {needed} bytes, only {available} remain")]
    CorruptFile {
        /// Bytes required by `num_samples` and the sample width.
        needed: usize,
        /// Bytes actually present after the metadata block.
        available: usize,
    },

    /// A binary operation or comparison received signals of unequal length.
    #[error("signal length mismatch: {left} vs {right} samples")]
    LengthMismatch {
        /// Length of the first operand.
        left: usize,
        /// Length of the second operand.
        right: usize,
    },

    /// A resampling target frequency is invalid for the input signal.
    ///
    /// The input's rate is stored as `original`, not `source`, which
    /// thiserror reserves for error chaining.
    #[error("invalid target frequency {target} Hz for signal sampled at {original} Hz")]
    InvalidFrequency {
        /// Requested target sampling frequency.
        target: f64,
        /// Sampling frequency of the input signal.
        original: f64,
    },

    /// Quantization was requested with fewer than two levels.
    #[error("quantization needs at least 2 levels, got {0}")]
    InvalidLevelCount(usize),

    /// A symmetric FIR design was requested with an even tap count.
    #[error("FIR tap count must be odd, got {0}")]
    InvalidTapCount(usize),

    /// A filter cutoff frequency lies outside the open (0, Nyquist) interval.
    #[error("cutoff {cutoff} Hz outside (0, {nyquist}) Hz")]
    InvalidCutoff {
        /// Requested cutoff frequency.
        cutoff: f64,
        /// Nyquist frequency of the input signal (fs / 2).
        nyquist: f64,
    },

    /// An operation, transform, window, or wavelet name was not recognized,
    /// or an operation was applied to a signal domain it does not support.
    #[error("unsupported operation: {0}")]
    UnsupportedOperation(String),

    /// Underlying file I/O failure from the thin load/save wrappers.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience result type for signal operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_carry_context() {
        let err = Error::LengthMismatch { left: 4, right: 7 };
        assert_eq!(err.to_string(), "signal length mismatch: 4 vs 7 samples");

        let err = Error::InvalidCutoff {
            cutoff: 600.0,
            nyquist: 500.0,
        };
        assert!(err.to_string().contains("600"));
        assert!(err.to_string().contains("500"));
    }

    #[test]
    fn test_invalid_frequency_has_no_chained_source() {
        // the input's rate is plain data, not a wrapped error
        let err = Error::InvalidFrequency {
            target: 200.0,
            original: 100.0,
        };
        assert!(std::error::Error::source(&err).is_none());
        assert!(err.to_string().contains("200"));
        assert!(err.to_string().contains("100"));
    }
}
