//! Element-wise binary operations between two equal-length signals.
//!
//! Mixed real/complex operands promote to complex, matching the numeric
//! widening of the arrays the file format stores. The result carries no
//! metadata; the caller derives a record if the result is persisted.

use crate::error::{Error, Result};
use crate::signal::{Complex64, Signal};

/// Divisor substituted for exact zeros in [`BinaryOp::Divide`].
///
/// A deliberate tolerance rather than IEEE-754 infinity propagation: results
/// near zero divisors are approximate, not exact.
pub const DIVIDE_EPSILON: f64 = 1e-10;

/// The four element-wise operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    /// `a[i] + b[i]`
    Add,
    /// `a[i] - b[i]`
    Subtract,
    /// `a[i] * b[i]`
    Multiply,
    /// `a[i] / b[i]`, with zero divisors replaced by [`DIVIDE_EPSILON`].
    Divide,
}

/// Combine two equal-length signals element by element.
///
/// Fails with [`Error::LengthMismatch`] when the lengths differ.
pub fn combine(a: &Signal, b: &Signal, op: BinaryOp) -> Result<Signal> {
    if a.len() != b.len() {
        return Err(Error::LengthMismatch {
            left: a.len(),
            right: b.len(),
        });
    }

    match (a, b) {
        (Signal::Real(x), Signal::Real(y)) => Ok(Signal::Real(
            x.iter()
                .zip(y.iter())
                .map(|(&xv, &yv)| apply_real(xv, yv, op))
                .collect(),
        )),
        _ => {
            let x = a.to_complex();
            let y = b.to_complex();
            Ok(Signal::Complex(
                x.iter()
                    .zip(y.iter())
                    .map(|(&xv, &yv)| apply_complex(xv, yv, op))
                    .collect(),
            ))
        }
    }
}

fn apply_real(x: f64, y: f64, op: BinaryOp) -> f64 {
    match op {
        BinaryOp::Add => x + y,
        BinaryOp::Subtract => x - y,
        BinaryOp::Multiply => x * y,
        BinaryOp::Divide => {
            let divisor = if y == 0.0 { DIVIDE_EPSILON } else { y };
            x / divisor
        }
    }
}

fn apply_complex(x: Complex64, y: Complex64, op: BinaryOp) -> Complex64 {
    match op {
        BinaryOp::Add => x + y,
        BinaryOp::Subtract => x - y,
        BinaryOp::Multiply => x * y,
        BinaryOp::Divide => {
            let divisor = if y == Complex64::new(0.0, 0.0) {
                Complex64::new(DIVIDE_EPSILON, 0.0)
            } else {
                y
            };
            x / divisor
        }
    }
}
