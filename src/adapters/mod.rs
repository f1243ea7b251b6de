pub mod cli;

use clap::Parser;

pub fn run() -> Result<(), crate::error::AppError> {
    use crate::adapters::cli::{Args, parse_inputs};
    use crate::fluid::calculator::compute_summary;

    let args = Args::parse();
    let fluid = parse_inputs(&args)?;

    let out = compute_summary(&fluid, args.validation_mode())?;

    crate::adapters::cli::print_output(&out, &args)?;

    Ok(())
}
