//! CLI command implementations.

pub mod combine;
pub mod compare;
pub mod convolve;
pub mod correlate;
pub mod filter;
pub mod generate;
pub mod info;
pub mod quantize;
pub mod resample;
pub mod transform;
