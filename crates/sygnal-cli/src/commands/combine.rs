//! Element-wise combination of two signals.

use clap::{Args, ValueEnum};
use std::path::PathBuf;
use sygnal_core::{BinaryOp, combine};
use sygnal_io::{load, save};

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl From<Operation> for BinaryOp {
    fn from(op: Operation) -> Self {
        match op {
            Operation::Add => BinaryOp::Add,
            Operation::Subtract => BinaryOp::Subtract,
            Operation::Multiply => BinaryOp::Multiply,
            Operation::Divide => BinaryOp::Divide,
        }
    }
}

#[derive(Args)]
pub struct CombineArgs {
    /// First operand
    pub left: PathBuf,

    /// Second operand
    pub right: PathBuf,

    /// Output signal file
    pub output: PathBuf,

    /// Element-wise operation
    #[arg(long, value_enum, default_value_t = Operation::Add)]
    pub op: Operation,
}

pub fn run(args: CombineArgs) -> anyhow::Result<()> {
    let (meta_left, left) = load(&args.left)?;
    let (_, right) = load(&args.right)?;

    let result = combine(&left, &right, args.op.into())?;

    // the first operand's timing carries over, only the domain may widen
    let mut metadata = meta_left;
    metadata.is_complex = result.is_complex();
    metadata.num_samples = result.len();

    save(&args.output, &metadata, &result)?;
    println!("Wrote {} ({} samples)", args.output.display(), result.len());
    Ok(())
}
