use criterion::{black_box, criterion_group, criterion_main, Criterion};
use stellar_core::{LaneEmdenSettings, TovSettings};
use stellar_solver::lane_emden::LaneEmdenIntegrator;
use stellar_solver::tov::TovIntegrator;

pub fn tov_low_density_bench(c: &mut Criterion) {
    let integrator = TovIntegrator::new(&TovSettings::default()).unwrap();
    c.bench_function("tov 1e-5", |b| b.iter(|| integrator.integrate(black_box(1e-5))));
}

pub fn tov_high_density_bench(c: &mut Criterion) {
    let integrator = TovIntegrator::new(&TovSettings::default()).unwrap();
    c.bench_function("tov 5e-2", |b| b.iter(|| integrator.integrate(black_box(5e-2))));
}

pub fn tov_surface_mass_bench(c: &mut Criterion) {
    let integrator = TovIntegrator::new(&TovSettings::default()).unwrap();
    c.bench_function("tov surface mass 5e-2", |b| b.iter(|| integrator.surface_mass(black_box(5e-2))));
}

pub fn lane_emden_bench(c: &mut Criterion) {
    let integrator = LaneEmdenIntegrator::new(&LaneEmdenSettings::default()).unwrap();
    c.bench_function("lane emden n = 1.5", |b| b.iter(|| black_box(&integrator).solve()));
}

criterion_group!(solver_benches, tov_low_density_bench, tov_high_density_bench,
    tov_surface_mass_bench, lane_emden_bench);
criterion_main!(solver_benches);
