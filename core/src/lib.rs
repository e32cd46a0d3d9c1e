mod config;
pub mod constants;
mod grid;
mod save_data;
mod star;
mod white_dwarf;
extern crate serde;

pub use config::*;
pub use grid::linspace;
pub use save_data::*;
pub use star::*;
pub use white_dwarf::*;

#[cfg(test)]
mod tests {
    use rand::Rng;
    use tempdir::TempDir;
    use crate::*;

    fn test_star() -> StarProperties {
        StarProperties {
            central_density: 1e-3,
            mass: 1.0,
            radius: 4.0,
            proper_mass: 1.25,
        }
    }

    #[test]
    fn binding_energy() {
        let star = test_star();
        assert_eq!(star.fractional_binding_energy(), 0.25);
        let mut rng = rand::thread_rng();
        for _ in 0..100 {
            let mass: f64 = rng.gen_range(0.01..3.0);
            let star = StarProperties {
                central_density: 1e-3,
                mass,
                radius: 1.0,
                proper_mass: mass * 1.1,
            };
            assert!((star.fractional_binding_energy() - 0.1).abs() < 1e-12);
        }
    }

    #[test]
    fn linspace_ends() {
        let values = linspace(1e-5, 5e-2, 100);
        assert_eq!(values.len(), 100);
        assert_eq!(values[0], 1e-5);
        assert_eq!(values[99], 5e-2);
        assert!(values.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn lane_emden_profile() {
        let solution = LaneEmdenSolution {
            samples: vec![1.0, 1.0, 0.5, -0.1],
            step: 0.5,
            xi: 1.5,
            boundary_derivative: -1.1,
        };
        let profile: Vec<(f64, f64)> = solution.profile().collect();
        assert_eq!(profile, vec![(0.0, 1.0), (0.5, 1.0), (1.0, 0.5), (1.5, -0.1)]);
    }

    #[test]
    fn config_defaults() {
        let config = SolverConfig::default();
        assert_eq!(config.tov.eos_constant, 100.0);
        assert_eq!(config.tov.step, 1e-3);
        assert_eq!(config.tov.start_radius, 1e-3);
        assert_eq!(config.tov.radius_unit, 1.5);
        assert_eq!(config.lane_emden.step, 1e-4);
        assert_eq!(config.lane_emden.polytropic_index, 1.5);
        assert_eq!(config.sweep.failure_policy, FailurePolicy::Abort);
        assert!(config.sweep.parallel);
    }

    #[test]
    fn partial_config() {
        let json = r#"{"tov": {"eos_constant": 250.0}, "sweep": {"failure_policy": "record"}}"#;
        let config: SolverConfig = serde_json::from_str(json).expect("Can't parse config");
        assert_eq!(config.tov.eos_constant, 250.0);
        assert_eq!(config.tov.step, 1e-3);
        assert_eq!(config.lane_emden, LaneEmdenSettings::default());
        assert_eq!(config.sweep.failure_policy, FailurePolicy::Record);
        assert!(config.sweep.parallel);
    }

    #[test]
    fn config_save_load() {
        let temp_dir = TempDir::new("test_dir").expect("Can't create temp directory");
        let path = temp_dir.path().join("config.json");
        let mut config = SolverConfig::default();
        config.tov.max_steps = 1000;
        config.lane_emden.step = 1e-3;
        config.save_to_file(&path).expect("Can't save config");
        let loaded = SolverConfig::load_from_file(&path).expect("Can't load config");
        assert_eq!(loaded, config);
        let missing = SolverConfig::load_from_file(&temp_dir.path().join("missing.json"));
        assert!(matches!(missing, Err(ConfigError::CantOpen { .. })));
    }

    #[test]
    fn white_dwarf_radius() {
        let star = WhiteDwarf { log_g: 8.0, mass: 0.6 };
        assert_eq!(format!("{:.8}", star.radius()), "1.40043871");
    }

    #[test]
    fn read_white_dwarf_csv() {
        let data = "name,logg,mass\n\
                    a,7.9,0.61\n\
                    b,8.2, 0.32\n\
                    c,7.5,0.45\n";
        let stars = read_white_dwarfs_from(data.as_bytes()).expect("Can't read data");
        assert_eq!(stars.len(), 3);
        assert_eq!(stars[0], WhiteDwarf { log_g: 8.2, mass: 0.32 });
        assert_eq!(stars[1], WhiteDwarf { log_g: 7.5, mass: 0.45 });
        assert_eq!(stars[2], WhiteDwarf { log_g: 7.9, mass: 0.61 });
        let low_mass = filter_low_mass(&stars, -1.1);
        assert_eq!(low_mass, vec![WhiteDwarf { log_g: 8.2, mass: 0.32 }]);
    }

    #[test]
    fn read_broken_white_dwarf_csv() {
        let data = "name,logg,mass\na,7.9\n";
        let res = read_white_dwarfs_from(data.as_bytes());
        assert!(matches!(res, Err(DataError::MissingColumn { row: 0, column: 2 })));
        let data = "name,logg,mass\na,7.9,heavy\n";
        let res = read_white_dwarfs_from(data.as_bytes());
        assert!(matches!(res, Err(DataError::InvalidNumber { row: 0, column: 2, .. })));
    }

    #[test]
    fn stars_csv() {
        let mut out = vec![];
        let star = test_star();
        write_stars(&mut out, &[1e-3, 2e-3], &[Some(star), None]).expect("Can't write stars");
        let text = String::from_utf8(out).expect("Not utf8");
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "central_density,mass,radius,proper_mass,binding_energy");
        assert_eq!(lines[1], "0.001,1.0,4.0,1.25,0.25");
        assert_eq!(lines[2], "0.002,,,,");
        let res = write_stars(vec![], &[1e-3], &[]);
        assert!(matches!(res, Err(DataError::LengthMismatch { parameters: 1, stars: 0 })));
    }

    #[test]
    fn max_masses_csv() {
        let mut out = vec![];
        write_max_masses(&mut out, &[MaxMassPoint { eos_constant: 100.0, max_mass: 1.5 }])
            .expect("Can't write max masses");
        let text = String::from_utf8(out).expect("Not utf8");
        assert_eq!(text, "eos_constant,max_mass\n100.0,1.5\n");
    }
}
