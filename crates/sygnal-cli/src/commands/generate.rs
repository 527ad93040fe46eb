//! Signal generation command.

use clap::{Args, Subcommand, ValueEnum};
use std::path::PathBuf;
use sygnal_core::{Metadata, Signal};
use sygnal_io::save;

/// Periodic waveform shapes.
#[derive(Clone, Copy, Debug, Default, ValueEnum)]
pub enum Shape {
    #[default]
    Sine,
    HalfRectified,
    FullRectified,
    Square,
    SymmetricSquare,
    Triangle,
}

/// Noise flavors.
#[derive(Clone, Copy, Debug, Default, ValueEnum)]
pub enum NoiseKind {
    #[default]
    Uniform,
    Gaussian,
    /// Binary 0/amplitude noise with a hit probability.
    Unit,
}

#[derive(Args)]
pub struct GenerateArgs {
    #[command(subcommand)]
    command: GenerateCommand,
}

#[derive(Subcommand)]
enum GenerateCommand {
    /// Generate a periodic waveform
    Wave {
        /// Output signal file
        #[arg(value_name = "OUTPUT")]
        output: PathBuf,

        /// Waveform shape
        #[arg(long, value_enum, default_value_t = Shape::Sine)]
        shape: Shape,

        /// Peak amplitude
        #[arg(long, default_value = "1.0")]
        amplitude: f64,

        /// Period in seconds
        #[arg(long, default_value = "1.0")]
        period: f64,

        /// Duty cycle for square and triangle shapes (0-1)
        #[arg(long, default_value = "0.5")]
        duty_cycle: f64,

        /// Start time in seconds
        #[arg(long, default_value = "0.0")]
        start_time: f64,

        /// Duration in seconds
        #[arg(long, default_value = "1.0")]
        duration: f64,

        /// Sampling frequency in Hz
        #[arg(long, default_value = "1000.0")]
        sampling_freq: f64,
    },

    /// Generate a unit step
    Step {
        /// Output signal file
        #[arg(value_name = "OUTPUT")]
        output: PathBuf,

        /// Step amplitude
        #[arg(long, default_value = "1.0")]
        amplitude: f64,

        /// Time of the step edge in seconds
        #[arg(long, default_value = "0.0")]
        step_time: f64,

        /// Start time in seconds
        #[arg(long, default_value = "0.0")]
        start_time: f64,

        /// Duration in seconds
        #[arg(long, default_value = "1.0")]
        duration: f64,

        /// Sampling frequency in Hz
        #[arg(long, default_value = "1000.0")]
        sampling_freq: f64,
    },

    /// Generate a unit impulse
    Impulse {
        /// Output signal file
        #[arg(value_name = "OUTPUT")]
        output: PathBuf,

        /// Impulse amplitude
        #[arg(long, default_value = "1.0")]
        amplitude: f64,

        /// Index of the first sample
        #[arg(long, default_value = "0")]
        first_sample: i64,

        /// Index of the peak sample
        #[arg(long, default_value = "0")]
        peak_sample: i64,

        /// Total number of samples
        #[arg(long, default_value = "1000")]
        num_samples: usize,

        /// Sampling frequency in Hz
        #[arg(long, default_value = "1000.0")]
        sampling_freq: f64,
    },

    /// Generate noise
    Noise {
        /// Output signal file
        #[arg(value_name = "OUTPUT")]
        output: PathBuf,

        /// Noise flavor
        #[arg(long, value_enum, default_value_t = NoiseKind::Uniform)]
        kind: NoiseKind,

        /// Peak amplitude (uniform/unit) or standard deviation scale (gaussian)
        #[arg(long, default_value = "1.0")]
        amplitude: f64,

        /// Hit probability for unit noise (0-1)
        #[arg(long, default_value = "0.5")]
        probability: f64,

        /// PRNG seed
        #[arg(long, default_value = "305419896")]
        seed: u64,

        /// Start time in seconds
        #[arg(long, default_value = "0.0")]
        start_time: f64,

        /// Duration in seconds
        #[arg(long, default_value = "1.0")]
        duration: f64,

        /// Sampling frequency in Hz
        #[arg(long, default_value = "1000.0")]
        sampling_freq: f64,
    },
}

pub fn run(args: GenerateArgs) -> anyhow::Result<()> {
    match args.command {
        GenerateCommand::Wave {
            output,
            shape,
            amplitude,
            period,
            duty_cycle,
            start_time,
            duration,
            sampling_freq,
        } => {
            anyhow::ensure!(period > 0.0, "period must be positive");
            anyhow::ensure!(sampling_freq > 0.0, "sampling frequency must be positive");

            let count = (duration * sampling_freq) as usize;
            let samples: Vec<f64> = (0..count)
                .map(|i| {
                    let t = i as f64 / sampling_freq;
                    wave_sample(shape, amplitude, period, duty_cycle, t)
                })
                .collect();

            let metadata = Metadata::new(start_time, sampling_freq, count);
            save(&output, &metadata, &Signal::Real(samples))?;
            println!("Wrote {} ({} samples)", output.display(), count);
        }

        GenerateCommand::Step {
            output,
            amplitude,
            step_time,
            start_time,
            duration,
            sampling_freq,
        } => {
            anyhow::ensure!(sampling_freq > 0.0, "sampling frequency must be positive");

            let count = (duration * sampling_freq) as usize;
            let samples: Vec<f64> = (0..count)
                .map(|i| {
                    let t = start_time + i as f64 / sampling_freq;
                    if t > step_time {
                        amplitude
                    } else if t == step_time {
                        amplitude / 2.0
                    } else {
                        0.0
                    }
                })
                .collect();

            let metadata = Metadata::new(start_time, sampling_freq, count);
            save(&output, &metadata, &Signal::Real(samples))?;
            println!("Wrote {} ({} samples)", output.display(), count);
        }

        GenerateCommand::Impulse {
            output,
            amplitude,
            first_sample,
            peak_sample,
            num_samples,
            sampling_freq,
        } => {
            anyhow::ensure!(sampling_freq > 0.0, "sampling frequency must be positive");

            let mut samples = vec![0.0; num_samples];
            let peak_offset = peak_sample - first_sample;
            if peak_offset >= 0 {
                if let Some(slot) = samples.get_mut(peak_offset as usize) {
                    *slot = amplitude;
                }
            }

            let start_time = first_sample as f64 / sampling_freq;
            let metadata = Metadata::new(start_time, sampling_freq, num_samples);
            save(&output, &metadata, &Signal::Real(samples))?;
            println!("Wrote {} ({} samples)", output.display(), num_samples);
        }

        GenerateCommand::Noise {
            output,
            kind,
            amplitude,
            probability,
            seed,
            start_time,
            duration,
            sampling_freq,
        } => {
            anyhow::ensure!(sampling_freq > 0.0, "sampling frequency must be positive");
            anyhow::ensure!(
                (0.0..=1.0).contains(&probability),
                "probability must be within [0, 1]"
            );

            let count = (duration * sampling_freq) as usize;
            let mut rng = Xorshift::new(seed);
            let samples: Vec<f64> = match kind {
                NoiseKind::Uniform => (0..count)
                    .map(|_| amplitude * (rng.next_f64() * 2.0 - 1.0))
                    .collect(),
                NoiseKind::Gaussian => (0..count)
                    .map(|_| amplitude * rng.next_gaussian())
                    .collect(),
                NoiseKind::Unit => (0..count)
                    .map(|_| {
                        if rng.next_f64() < probability {
                            amplitude
                        } else {
                            0.0
                        }
                    })
                    .collect(),
            };

            let metadata = Metadata::new(start_time, sampling_freq, count);
            save(&output, &metadata, &Signal::Real(samples))?;
            println!("Wrote {} ({} samples)", output.display(), count);
        }
    }

    Ok(())
}

fn wave_sample(shape: Shape, amplitude: f64, period: f64, duty_cycle: f64, t: f64) -> f64 {
    let phase = (t % period) / period;
    match shape {
        Shape::Sine => amplitude * (2.0 * std::f64::consts::PI * t / period).sin(),
        Shape::HalfRectified => {
            let s = (2.0 * std::f64::consts::PI * t / period).sin();
            amplitude / 2.0 * (s + s.abs())
        }
        Shape::FullRectified => amplitude * (2.0 * std::f64::consts::PI * t / period).sin().abs(),
        Shape::Square => {
            if phase <= duty_cycle {
                amplitude
            } else {
                0.0
            }
        }
        Shape::SymmetricSquare => {
            if phase <= duty_cycle {
                amplitude
            } else {
                -amplitude
            }
        }
        Shape::Triangle => amplitude * (2.0 * (2.0 * (phase - duty_cycle)).abs() - 1.0),
    }
}

/// Simple xorshift PRNG, seeded for reproducible noise buffers.
struct Xorshift {
    state: u64,
    spare_gaussian: Option<f64>,
}

impl Xorshift {
    fn new(seed: u64) -> Self {
        Self {
            state: if seed == 0 { 0x1234_5678 } else { seed },
            spare_gaussian: None,
        }
    }

    fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        self.state = x;
        x
    }

    /// Uniform in [0, 1).
    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Standard normal via Box-Muller.
    fn next_gaussian(&mut self) -> f64 {
        if let Some(z) = self.spare_gaussian.take() {
            return z;
        }
        let u1 = loop {
            let u = self.next_f64();
            if u > 0.0 {
                break u;
            }
        };
        let u2 = self.next_f64();
        let radius = (-2.0 * u1.ln()).sqrt();
        let angle = 2.0 * std::f64::consts::PI * u2;
        self.spare_gaussian = Some(radius * angle.sin());
        radius * angle.cos()
    }
}
