//! Sample-by-sample comparison of two signal files.

use clap::Args;
use std::path::PathBuf;
use sygnal_core::compare;
use sygnal_io::load;

#[derive(Args)]
pub struct CompareArgs {
    /// Reference signal file
    pub original: PathBuf,

    /// Signal file to measure against the reference
    pub candidate: PathBuf,

    /// Emit the metrics as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: CompareArgs) -> anyhow::Result<()> {
    let (_, original) = load(&args.original)?;
    let (_, candidate) = load(&args.candidate)?;

    let report = compare(&original, &candidate)?;

    if args.json {
        println!(
            "{}",
            serde_json::json!({
                "mse": report.mse,
                "snr_db": report.snr_db,
                "psnr_db": report.psnr_db,
                "max_difference": report.max_difference,
            })
        );
        return Ok(());
    }

    println!("Comparison");
    println!("==========");
    println!("  Original:  {}", args.original.display());
    println!("  Candidate: {}", args.candidate.display());
    println!();
    println!("  MSE:             {:.6e}", report.mse);
    println!("  SNR:             {:.2} dB", report.snr_db);
    println!("  PSNR:            {:.2} dB", report.psnr_db);
    println!("  Max Difference:  {:.6e}", report.max_difference);
    Ok(())
}
