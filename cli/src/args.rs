use std::path::PathBuf;
use clap::{Parser, Subcommand};
use clap::ValueEnum;
use stellar_core::constants::{DEFAULT_LOW_MASS_CUTOFF, EMPIRICAL_MAXIMUM_MASS};
use stellar_core::FailurePolicy;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// path to json file with solver settings
    #[arg(short = 'c', long, global = true)]
    pub config: Option<PathBuf>,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum PolicyChoose {
    /// stop at the first failed integration
    Abort,
    /// keep going and leave failed stars empty
    Record,
}

impl From<PolicyChoose> for FailurePolicy {
    fn from(policy: PolicyChoose) -> Self {
        match policy {
            PolicyChoose::Abort => FailurePolicy::Abort,
            PolicyChoose::Record => FailurePolicy::Record,
        }
    }
}

/// evenly spaced central densities
#[derive(clap::Args, Clone, Debug)]
pub struct DensityRange {
    /// first central density
    #[arg(long, default_value_t = 1e-5)]
    pub start: f64,
    /// last central density
    #[arg(long, default_value_t = 5e-2)]
    pub end: f64,
    /// number of central densities
    #[arg(short = 'n', long, default_value_t = 100)]
    pub count: usize,
}

#[derive(Subcommand)]
pub enum Commands {
    /// mass, radius and binding energy of neutron stars
    MassRadius {
        #[command(flatten)]
        range: DensityRange,
        /// equation of state constant, overrides config
        #[arg(short = 'k', long)]
        eos_constant: Option<f64>,
        /// what to do with failed integrations, overrides config
        #[arg(long, value_enum)]
        on_failure: Option<PolicyChoose>,
        /// csv file for output
        #[arg(short = 'o', long)]
        out_file: Option<PathBuf>,
    },
    /// split mass-radius curve into stable and unstable branches
    Stability {
        #[command(flatten)]
        range: DensityRange,
        /// equation of state constant, overrides config
        #[arg(short = 'k', long)]
        eos_constant: Option<f64>,
        /// index of first unstable star, heaviest star if not set
        #[arg(long)]
        cutoff: Option<usize>,
    },
    /// maximum mass as function of equation of state constant
    MaxMass {
        /// first equation of state constant
        #[arg(long, default_value_t = 100.0)]
        k_start: f64,
        /// last equation of state constant
        #[arg(long, default_value_t = 300.0)]
        k_end: f64,
        /// number of constants
        #[arg(short = 'n', long, default_value_t = 20)]
        count: usize,
        /// report first constant with maximum mass above this
        #[arg(short = 't', long, default_value_t = EMPIRICAL_MAXIMUM_MASS)]
        threshold: f64,
        /// csv file for output
        #[arg(short = 'o', long)]
        out_file: Option<PathBuf>,
    },
    /// boundary of n = 3/2 polytrope
    LaneEmden {
        /// step in xi, overrides config
        #[arg(long)]
        step: Option<f64>,
        /// csv file for theta(xi)
        #[arg(short = 'o', long)]
        out_file: Option<PathBuf>,
    },
    /// calibrate polytrope against observed white dwarfs
    WhiteDwarf {
        /// csv file with log g in second column and mass in third
        #[arg(short = 'f', long)]
        file: PathBuf,
        /// keep stars with ln(mass) below this
        #[arg(long, default_value_t = DEFAULT_LOW_MASS_CUTOFF, allow_hyphen_values = true)]
        cutoff: f64,
        /// csv file for central densities of kept stars
        #[arg(short = 'o', long)]
        out_file: Option<PathBuf>,
    },
}
