//! FIR filtering command.

use clap::{Args, ValueEnum};
use std::path::PathBuf;
use sygnal_dsp::{FilterKind, Window, filter_signal};
use sygnal_io::{load, save};

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum Kind {
    Lowpass,
    Highpass,
}

#[derive(Args)]
pub struct FilterArgs {
    /// Input signal file
    pub input: PathBuf,

    /// Output signal file
    pub output: PathBuf,

    /// Filter type
    #[arg(long, value_enum, default_value_t = Kind::Lowpass)]
    pub kind: Kind,

    /// Cutoff frequency in Hz
    #[arg(long)]
    pub cutoff: f64,

    /// Number of taps (odd)
    #[arg(long, default_value = "63")]
    pub taps: usize,

    /// Apply a Hann window to the taps
    #[arg(long)]
    pub hann: bool,
}

pub fn run(args: FilterArgs) -> anyhow::Result<()> {
    let (metadata, signal) = load(&args.input)?;

    let kind = match args.kind {
        Kind::Lowpass => FilterKind::Lowpass,
        Kind::Highpass => FilterKind::Highpass,
    };
    let window = if args.hann {
        Window::Hann
    } else {
        Window::Rectangular
    };

    let (out, out_meta) = filter_signal(&signal, &metadata, kind, args.cutoff, args.taps, window)?;
    save(&args.output, &out_meta, &out)?;
    println!(
        "Wrote {} ({:?} at {} Hz, {} taps)",
        args.output.display(),
        args.kind,
        args.cutoff,
        args.taps
    );
    Ok(())
}
