//! Transform command.

use clap::{Args, ValueEnum};
use std::path::PathBuf;
use sygnal_dsp::{Transform, Wavelet, transform};
use sygnal_io::{load, save};

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum Domain {
    /// Discrete Fourier transform
    Fourier,
    /// Daubechies wavelet decomposition
    Wavelet,
}

#[derive(Args)]
pub struct TransformArgs {
    /// Input signal file
    pub input: PathBuf,

    /// Output signal file
    pub output: PathBuf,

    /// Target domain
    #[arg(long, value_enum, default_value_t = Domain::Fourier)]
    pub domain: Domain,

    /// Wavelet name (db4, db6 or db8)
    #[arg(long, default_value = "db4")]
    pub wavelet: String,
}

pub fn run(args: TransformArgs) -> anyhow::Result<()> {
    let (metadata, signal) = load(&args.input)?;

    let kind = match args.domain {
        Domain::Fourier => Transform::Fourier,
        Domain::Wavelet => Transform::Wavelet(args.wavelet.parse::<Wavelet>()?),
    };

    let (out, out_meta) = transform(kind, &signal, &metadata)?;
    save(&args.output, &out_meta, &out)?;
    println!("Wrote {} ({} samples)", args.output.display(), out.len());
    Ok(())
}
