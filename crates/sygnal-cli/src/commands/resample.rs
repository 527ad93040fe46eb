//! Resampling command.

use clap::{Args, ValueEnum};
use std::path::PathBuf;
use sygnal_dsp::{ResampleMode, resample};
use sygnal_io::{load, save};

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum Mode {
    /// Keep every n-th sample
    Downsample,
    /// Zero-order hold at the new rate
    Extrapolate,
    /// Piecewise linear at the new rate
    Interpolate,
    /// Ideal sinc reconstruction at the new rate
    Reconstruct,
}

impl From<Mode> for ResampleMode {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Downsample => ResampleMode::Downsample,
            Mode::Extrapolate => ResampleMode::Extrapolate,
            Mode::Interpolate => ResampleMode::Interpolate,
            Mode::Reconstruct => ResampleMode::Reconstruct,
        }
    }
}

#[derive(Args)]
pub struct ResampleArgs {
    /// Input signal file
    pub input: PathBuf,

    /// Output signal file
    pub output: PathBuf,

    /// Target sampling frequency in Hz
    #[arg(long)]
    pub frequency: f64,

    /// Resampling method
    #[arg(long, value_enum, default_value_t = Mode::Downsample)]
    pub mode: Mode,
}

pub fn run(args: ResampleArgs) -> anyhow::Result<()> {
    let (metadata, signal) = load(&args.input)?;
    let (out, out_meta) = resample(&signal, &metadata, args.frequency, args.mode.into())?;
    save(&args.output, &out_meta, &out)?;
    println!(
        "Wrote {} ({} samples at {} Hz)",
        args.output.display(),
        out.len(),
        out_meta.sampling_freq
    );
    Ok(())
}
