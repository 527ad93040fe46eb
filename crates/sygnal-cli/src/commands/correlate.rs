//! Cross-correlation command, with an optional ranging estimate.

use clap::Args;
use std::path::PathBuf;
use sygnal_dsp::{correlate, estimate_distance};
use sygnal_io::{load, save};

#[derive(Args)]
pub struct CorrelateArgs {
    /// Signal under test (e.g. the received buffer)
    pub left: PathBuf,

    /// Sliding reference (e.g. the transmitted buffer)
    pub right: PathBuf,

    /// Output signal file for the full correlation
    pub output: PathBuf,

    /// Propagation velocity; when set, also print a distance estimate
    #[arg(long)]
    pub velocity: Option<f64>,
}

pub fn run(args: CorrelateArgs) -> anyhow::Result<()> {
    let (meta_left, left) = load(&args.left)?;
    let (meta_right, right) = load(&args.right)?;

    let (out, out_meta) = correlate(&left, &right, Some(&meta_left), Some(&meta_right));
    save(&args.output, &out_meta, &out)?;
    println!("Wrote {} ({} samples)", args.output.display(), out.len());

    if let Some(velocity) = args.velocity {
        let (Some(rx), Some(tx)) = (left.as_real(), right.as_real()) else {
            anyhow::bail!("distance estimation requires real signals");
        };
        let estimate = estimate_distance(tx, rx, meta_left.sampling_freq, velocity);
        println!();
        println!("Peak Lag:    {} samples", estimate.lag_samples);
        println!("Time Delay:  {:.9} s", estimate.time_delay);
        println!("Distance:    {:.4}", estimate.distance);
    }
    Ok(())
}
