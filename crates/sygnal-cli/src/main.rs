//! Sygnal CLI - command-line front end for the signal toolkit.

mod commands;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "sygnal")]
#[command(author, version, about = "Sygnal signal toolkit CLI", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a signal and save it
    Generate(commands::generate::GenerateArgs),

    /// Show a signal file's metadata and statistics
    Info(commands::info::InfoArgs),

    /// Combine two signal files element-wise
    Combine(commands::combine::CombineArgs),

    /// Resample a signal to a new sampling frequency
    Resample(commands::resample::ResampleArgs),

    /// Quantize a signal to a fixed number of levels
    Quantize(commands::quantize::QuantizeArgs),

    /// Apply a windowed-sinc FIR filter
    Filter(commands::filter::FilterArgs),

    /// Convolve two signal files
    Convolve(commands::convolve::ConvolveArgs),

    /// Cross-correlate two signal files, optionally estimating distance
    Correlate(commands::correlate::CorrelateArgs),

    /// Transform a signal to the frequency or wavelet domain
    Transform(commands::transform::TransformArgs),

    /// Compare two signal files sample by sample
    Compare(commands::compare::CompareArgs),
}

fn main() -> anyhow::Result<()> {
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate(args) => commands::generate::run(args),
        Commands::Info(args) => commands::info::run(args),
        Commands::Combine(args) => commands::combine::run(args),
        Commands::Resample(args) => commands::resample::run(args),
        Commands::Quantize(args) => commands::quantize::run(args),
        Commands::Filter(args) => commands::filter::run(args),
        Commands::Convolve(args) => commands::convolve::run(args),
        Commands::Correlate(args) => commands::correlate::run(args),
        Commands::Transform(args) => commands::transform::run(args),
        Commands::Compare(args) => commands::compare::run(args),
    }
}
