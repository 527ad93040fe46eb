//! Sygnal Core - signal and metadata value types
//!
//! This crate provides the foundational types shared by the whole workspace:
//!
//! - [`Signal`] - an immutable real or complex sample sequence
//! - [`Metadata`] - the descriptive record travelling with every signal
//! - [`Error`] - the single error taxonomy for all signal operations
//! - [`algebra`] - element-wise binary operations between two signals
//! - [`compare`] - MSE / SNR / PSNR / max-difference comparison metrics
//!
//! # Ownership Model
//!
//! A signal/metadata pair is a value: every processing operation consumes
//! references and produces a brand-new pair. Metadata is copy-then-patch -
//! derived records start from a clone of the input and overwrite what the
//! operation changed, so no operation ever mutates a caller-owned record.
//!
//! # Example
//!
//! ```rust
//! use sygnal_core::{Metadata, Signal, algebra::{self, BinaryOp}};
//!
//! let a = Signal::Real(vec![1.0, 2.0, 3.0]);
//! let b = Signal::Real(vec![4.0, 5.0, 6.0]);
//! let sum = algebra::combine(&a, &b, BinaryOp::Add).unwrap();
//! assert_eq!(sum, Signal::Real(vec![5.0, 7.0, 9.0]));
//!
//! let meta = Metadata::new(0.0, 1000.0, 3);
//! assert_eq!(meta.duration, 3.0 / 1000.0);
//! ```

pub mod algebra;
pub mod compare;
pub mod error;
pub mod metadata;
pub mod signal;

pub use algebra::{BinaryOp, combine};
pub use compare::{Comparison, compare, max_difference, mse, psnr_db, snr_db};
pub use error::{Error, Result};
pub use metadata::Metadata;
pub use signal::{Complex64, Signal};
