//! Display a signal file's metadata and statistics.

use clap::Args;
use std::path::PathBuf;
use sygnal_io::{load, text_representation};

#[derive(Args)]
pub struct InfoArgs {
    /// Path to the signal file
    pub file: PathBuf,

    /// Dump every sample as text
    #[arg(long)]
    pub samples: bool,
}

pub fn run(args: InfoArgs) -> anyhow::Result<()> {
    let (metadata, signal) = load(&args.file)?;

    if args.samples {
        println!("{}", text_representation(&metadata, &signal));
        return Ok(());
    }

    println!("File:           {}", args.file.display());
    println!("Start Time:     {} s", metadata.start_time);
    println!("Sampling Freq:  {} Hz", metadata.sampling_freq);
    println!("Duration:       {} s", metadata.duration);
    println!("Samples:        {}", metadata.num_samples);
    println!(
        "Domain:         {}",
        if metadata.is_complex { "complex" } else { "real" }
    );
    for (key, value) in &metadata.extra {
        println!("{key}: {value}");
    }

    // complex signals are summarized through their magnitudes
    let values = match signal.as_real() {
        Some(samples) => samples.to_vec(),
        None => signal.magnitudes(),
    };
    if values.is_empty() {
        return Ok(());
    }
    println!();
    println!("Mean:           {:.6}", mean(&values, false));
    println!("Absolute Mean:  {:.6}", mean(&values, true));
    println!("RMS:            {:.6}", power(&values).sqrt());
    println!("Variance:       {:.6}", variance(&values));
    println!("Average Power:  {:.6}", power(&values));

    Ok(())
}

fn mean(values: &[f64], absolute: bool) -> f64 {
    let sum: f64 = if absolute {
        values.iter().map(|x| x.abs()).sum()
    } else {
        values.iter().sum()
    };
    sum / values.len() as f64
}

fn power(values: &[f64]) -> f64 {
    values.iter().map(|x| x * x).sum::<f64>() / values.len() as f64
}

fn variance(values: &[f64]) -> f64 {
    let m = mean(values, false);
    values.iter().map(|x| (x - m) * (x - m)).sum::<f64>() / values.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_statistics() {
        let values = [1.0, -1.0, 3.0, -3.0];
        assert_eq!(mean(&values, false), 0.0);
        assert_eq!(mean(&values, true), 2.0);
        assert_eq!(power(&values), 5.0);
        assert_eq!(variance(&values), 5.0);
        assert!((power(&values).sqrt() - 5.0f64.sqrt()).abs() < 1e-12);
    }
}
