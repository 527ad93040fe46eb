//! Quantization command.

use clap::Args;
use std::path::PathBuf;
use sygnal_dsp::quantize;
use sygnal_io::{load, save};

#[derive(Args)]
pub struct QuantizeArgs {
    /// Input signal file
    pub input: PathBuf,

    /// Output signal file
    pub output: PathBuf,

    /// Number of quantization levels (at least 2)
    #[arg(long, default_value = "256")]
    pub levels: usize,
}

pub fn run(args: QuantizeArgs) -> anyhow::Result<()> {
    let (metadata, signal) = load(&args.input)?;
    let (out, out_meta) = quantize(&signal, &metadata, args.levels)?;
    save(&args.output, &out_meta, &out)?;
    println!(
        "Wrote {} ({} levels)",
        args.output.display(),
        args.levels
    );
    Ok(())
}
