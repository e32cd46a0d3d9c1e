use clap::Parser;
use crate::args::*;
use crate::commands::{lane_emden, load_config, mass_radius, max_mass, stability, white_dwarf, CliError};

mod args;
mod commands;


fn run(args: &Args) -> Result<(), CliError> {
    let config = load_config(args.config.as_deref())?;
    match &args.command {
        Commands::MassRadius {
            range,
            eos_constant,
            on_failure,
            out_file,
        } => {
            mass_radius(&config, range, *eos_constant, *on_failure, out_file.as_deref())?;
        }
        Commands::Stability {
            range,
            eos_constant,
            cutoff,
        } => {
            stability(&config, range, *eos_constant, *cutoff)?;
        }
        Commands::MaxMass {
            k_start,
            k_end,
            count,
            threshold,
            out_file,
        } => {
            max_mass(&config, *k_start, *k_end, *count, *threshold, out_file.as_deref())?;
        }
        Commands::LaneEmden {
            step,
            out_file,
        } => {
            lane_emden(&config, *step, out_file.as_deref())?;
        }
        Commands::WhiteDwarf {
            file,
            cutoff,
            out_file,
        } => {
            white_dwarf(&config, file, *cutoff, out_file.as_deref())?;
        }
    }
    Ok(())
}

fn main() {
    env_logger::init();
    let args = Args::parse();
    if let Err(err) = run(&args) {
        log::error!("{}", err);
        std::process::exit(1);
    }
}
