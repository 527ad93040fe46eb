//! Convolution command.

use clap::Args;
use std::path::PathBuf;
use sygnal_dsp::convolve;
use sygnal_io::{load, save};

#[derive(Args)]
pub struct ConvolveArgs {
    /// First operand
    pub left: PathBuf,

    /// Second operand (kernel)
    pub right: PathBuf,

    /// Output signal file
    pub output: PathBuf,
}

pub fn run(args: ConvolveArgs) -> anyhow::Result<()> {
    let (meta_left, left) = load(&args.left)?;
    let (meta_right, right) = load(&args.right)?;

    let (out, out_meta) = convolve(&left, &right, Some(&meta_left), Some(&meta_right));
    save(&args.output, &out_meta, &out)?;
    println!("Wrote {} ({} samples)", args.output.display(), out.len());
    Ok(())
}
