//! Signal file I/O for the Sygnal DSP toolkit.
//!
//! This crate provides:
//!
//! - **Byte codec**: [`encode`] and [`decode`] for the length-prefixed
//!   binary signal format (pure byte-buffer transformations)
//! - **File wrappers**: [`load`] and [`save`] for reading/writing the
//!   encoded buffer to disk
//! - **Text dump**: [`text_representation`] for a human-readable listing
//!
//! ## Wire Format
//!
//! ```text
//! [4-byte little-endian u32: metadata length]
//! [UTF-8 JSON metadata of that length]
//! [num_samples x 8-byte doubles        (real signal)]
//! [num_samples x (8 + 8)-byte pairs    (complex signal, real then imaginary)]
//! ```
//!
//! Doubles are always little-endian IEEE-754, independent of the host, so a
//! file round-trips bit-exactly across platforms.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use sygnal_core::{Metadata, Signal};
//! use sygnal_io::{load, save};
//!
//! let (metadata, signal) = load("input.bin")?;
//! // ... process ...
//! save("output.bin", &metadata, &signal)?;
//! ```

mod codec;
mod file;

pub use codec::{decode, encode};
pub use file::{load, save, text_representation};
