use std::path::Path;
use indicatif::ProgressBar;
use itertools::izip;
use thiserror::Error;
use stellar_core::*;
use stellar_solver::calibration::*;
use stellar_solver::lane_emden::LaneEmdenIntegrator;
use stellar_solver::sweep::*;
use stellar_solver::tov::TovIntegrator;
use stellar_solver::IntegrationError;
use crate::args::{DensityRange, PolicyChoose};

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Data(#[from] DataError),
    #[error(transparent)]
    Integration(#[from] IntegrationError),
    #[error(transparent)]
    Sweep(#[from] SweepError),
    #[error(transparent)]
    Calibration(#[from] CalibrationError),
    #[error("no star converged, stability is undefined")]
    NoPeak,
}

/// Everything the white dwarf calibration found
#[derive(Clone, Debug)]
pub struct WhiteDwarfReport {
    pub stars: Vec<WhiteDwarf>,
    pub central_densities: Vec<f64>,
    pub fit: PowerLawFit,
    pub constant: ProportionalityConstant,
    pub analytical: AnalyticalConstants,
    pub error_percent: f64,
}

pub fn load_config(path: Option<&Path>) -> Result<SolverConfig, CliError> {
    match path {
        Some(path) => Ok(SolverConfig::load_from_file(path)?),
        None => Ok(SolverConfig::default()),
    }
}

fn tov_integrator(config: &SolverConfig, eos_constant: Option<f64>) -> Result<TovIntegrator, CliError> {
    let integrator = TovIntegrator::new(&config.tov)?;
    match eos_constant {
        Some(k) => Ok(integrator.with_eos_constant(k)?),
        None => Ok(integrator),
    }
}

fn sweep(config: &SolverConfig, policy: Option<PolicyChoose>) -> Sweep {
    let sweep = Sweep::new(&config.sweep);
    match policy {
        Some(policy) => sweep.with_policy(policy.into()),
        None => sweep,
    }
}

fn run_mass_radius(config: &SolverConfig,
                   range: &DensityRange,
                   eos_constant: Option<f64>,
                   policy: Option<PolicyChoose>) -> Result<SweepResult, CliError> {
    let integrator = tov_integrator(config, eos_constant)?;
    let densities = linspace(range.start, range.end, range.count);
    let pb = ProgressBar::new(densities.len() as u64);
    let result = sweep(config, policy).mass_radius_with_progress(&integrator, &densities, || pb.inc(1))?;
    pb.finish_with_message(format!("Integrated {} stars", densities.len()));
    Ok(result)
}

pub fn mass_radius(config: &SolverConfig,
                   range: &DensityRange,
                   eos_constant: Option<f64>,
                   policy: Option<PolicyChoose>,
                   out_file: Option<&Path>) -> Result<SweepResult, CliError> {
    let result = run_mass_radius(config, range, eos_constant, policy)?;
    println!("rho_c\tmass\tradius\tbinding energy");
    for (density, mass, radius, binding) in izip!(&result.parameters,
                                                  result.masses(),
                                                  result.radii(),
                                                  result.binding_energies()) {
        println!("{:e}\t{:.6}\t{:.6}\t{:.6}", density, mass, radius, binding);
    }
    if !result.failures.is_empty() {
        println!("{} of {} integrations failed", result.failures.len(), result.parameters.len());
    }
    if let Some(out_file) = out_file {
        save_to_file(out_file, |file| write_stars(file, &result.parameters, &result.stars))?;
    }
    Ok(result)
}

pub fn stability(config: &SolverConfig,
                 range: &DensityRange,
                 eos_constant: Option<f64>,
                 cutoff: Option<usize>) -> Result<StabilityPartition, CliError> {
    let result = run_mass_radius(config, range, eos_constant, None)?;
    let masses = result.masses();
    let cutoff = match cutoff {
        Some(cutoff) => cutoff,
        None => peak_index(&masses).ok_or(CliError::NoPeak)?,
    };
    let partition = StabilityPartition::classify(&result.parameters, &masses, cutoff);
    println!("Stable stars: {}", partition.stable.len());
    println!("Unstable stars: {}", partition.unstable.len());
    match partition.critical_mass() {
        Some(mass) => println!("Highest stable M = {:.4} at rho_c = {:e}",
                               mass, partition.unstable[0].0),
        None => println!("Every star is stable"),
    }
    Ok(partition)
}

pub fn max_mass(config: &SolverConfig,
                k_start: f64,
                k_end: f64,
                count: usize,
                threshold: f64,
                out_file: Option<&Path>) -> Result<Vec<MaxMassPoint>, CliError> {
    let integrator = tov_integrator(config, None)?;
    let eos_constants = linspace(k_start, k_end, count);
    let pb = ProgressBar::new(eos_constants.len() as u64);
    let points = Sweep::new(&config.sweep)
        .max_mass_curve(&integrator, &eos_constants, default_density_grid, || pb.inc(1))?;
    pb.finish_with_message("Maximum masses calculated");
    println!("k\tmax mass");
    for point in &points {
        println!("{:.4}\t{:.6}", point.eos_constant, point.max_mass);
    }
    match first_exceeding(&points, threshold) {
        Some(point) => println!("First k with maximum mass above {}: {:.4} (M = {:.4})",
                                threshold, point.eos_constant, point.max_mass),
        None => println!("No k with maximum mass above {}", threshold),
    }
    if let Some(out_file) = out_file {
        save_to_file(out_file, |file| write_max_masses(file, &points))?;
    }
    Ok(points)
}

fn solve_lane_emden(config: &SolverConfig, step: Option<f64>) -> Result<LaneEmdenSolution, CliError> {
    let settings = LaneEmdenSettings {
        step: step.unwrap_or(config.lane_emden.step),
        ..config.lane_emden.clone()
    };
    Ok(LaneEmdenIntegrator::new(&settings)?.solve()?)
}

pub fn lane_emden(config: &SolverConfig,
                  step: Option<f64>,
                  out_file: Option<&Path>) -> Result<LaneEmdenSolution, CliError> {
    let solution = solve_lane_emden(config, step)?;
    println!("xi = {}", solution.xi);
    println!("dtheta/dxi = {}", solution.boundary_derivative);
    if let Some(out_file) = out_file {
        save_to_file(out_file, |file| write_profile(file, &solution))?;
    }
    Ok(solution)
}

pub fn white_dwarf(config: &SolverConfig,
                   file: &Path,
                   cutoff: f64,
                   out_file: Option<&Path>) -> Result<WhiteDwarfReport, CliError> {
    let stars = filter_low_mass(&read_white_dwarfs(file)?, cutoff);
    log::info!("{} white dwarfs with ln(mass) < {}", stars.len(), cutoff);
    let masses: Vec<f64> = stars.iter().map(|star| star.mass).collect();
    let radii: Vec<f64> = stars.iter().map(WhiteDwarf::radius).collect();

    let solution = solve_lane_emden(config, None)?;
    let central_densities = central_densities(&solution, &masses, &radii)?;
    if let Some(out_file) = out_file {
        save_to_file(out_file, |file| write_central_densities(file, &masses, &radii, &central_densities))?;
    }

    let fit = fit_power_law(&masses, &radii)?;
    let q = fit.polytropic_q();
    println!("Calculated value for q: {}", q);
    println!("Nearest integer value is: {}", q.round());

    let constant = proportionality_constant(fit.amplitude, &solution)?;
    println!("K in scaled units: {}", constant.scaled);
    println!("K in SI units: {}", constant.si);

    let analytical = AnalyticalConstants::compute();
    println!("Analytical values: C = {:e}, D = {:e}, K = {:e}", analytical.c, analytical.d, analytical.k);
    let error_percent = relative_error_percent(constant.si, analytical.k);
    println!("Error for K is {:.2}%", error_percent);

    Ok(WhiteDwarfReport {
        stars,
        central_densities,
        fit,
        constant,
        analytical,
        error_percent,
    })
}
