//! The [`Signal`] sample container.

pub use num_complex::Complex64;

/// An ordered, homogeneous sequence of samples.
///
/// A signal is entirely real or entirely complex, never mixed. Values are
/// double precision throughout; the codec writes them bit-exactly, so a
/// signal survives an encode/decode round trip unchanged.
#[derive(Debug, Clone, PartialEq)]
pub enum Signal {
    /// Real-valued samples.
    Real(Vec<f64>),
    /// Complex samples (real, imaginary) pairs.
    Complex(Vec<Complex64>),
}

impl Signal {
    /// Number of samples.
    pub fn len(&self) -> usize {
        match self {
            Signal::Real(v) => v.len(),
            Signal::Complex(v) => v.len(),
        }
    }

    /// True if the signal holds no samples.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// True for the complex variant.
    pub fn is_complex(&self) -> bool {
        matches!(self, Signal::Complex(_))
    }

    /// Real samples, or `None` for a complex signal.
    pub fn as_real(&self) -> Option<&[f64]> {
        match self {
            Signal::Real(v) => Some(v),
            Signal::Complex(_) => None,
        }
    }

    /// Complex samples, or `None` for a real signal.
    pub fn as_complex(&self) -> Option<&[Complex64]> {
        match self {
            Signal::Real(_) => None,
            Signal::Complex(v) => Some(v),
        }
    }

    /// Samples widened to complex, real signals gaining a zero imaginary part.
    pub fn to_complex(&self) -> Vec<Complex64> {
        match self {
            Signal::Real(v) => v.iter().map(|&x| Complex64::new(x, 0.0)).collect(),
            Signal::Complex(v) => v.clone(),
        }
    }

    /// Per-sample magnitude: `|x|` for real samples, modulus for complex ones.
    pub fn magnitudes(&self) -> Vec<f64> {
        match self {
            Signal::Real(v) => v.iter().map(|x| x.abs()).collect(),
            Signal::Complex(v) => v.iter().map(|c| c.norm()).collect(),
        }
    }
}

impl From<Vec<f64>> for Signal {
    fn from(samples: Vec<f64>) -> Self {
        Signal::Real(samples)
    }
}

impl From<Vec<Complex64>> for Signal {
    fn from(samples: Vec<Complex64>) -> Self {
        Signal::Complex(samples)
    }
}
