use itertools::Itertools;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stability {
    Stable,
    Unstable,
}

/// Index of the largest mass, `NaN` entries are ignored
pub fn peak_index(masses: &[f64]) -> Option<usize> {
    masses
        .iter()
        .positions(|mass| !mass.is_nan())
        .max_by(|&a, &b| masses[a].total_cmp(&masses[b]))
}

/// Static split of a mass curve into stable and unstable branches.
///
/// The split is positional: every point before `cutoff` is stable, every
/// point from `cutoff` on is unstable. Nothing is recomputed from the masses.
#[derive(Clone, Debug, PartialEq)]
pub struct StabilityPartition {
    pub cutoff: usize,
    /// `(parameter, mass)` pairs
    pub stable: Vec<(f64, f64)>,
    /// `(parameter, mass)` pairs
    pub unstable: Vec<(f64, f64)>,
}

impl StabilityPartition {
    /// `cutoff` past the end of the curve leaves the unstable branch empty
    pub fn classify(parameters: &[f64], masses: &[f64], cutoff: usize) -> Self {
        let points: Vec<(f64, f64)> = parameters.iter().copied().zip(masses.iter().copied()).collect();
        let cutoff = cutoff.min(points.len());
        let (stable, unstable) = points.split_at(cutoff);
        Self {
            cutoff,
            stable: stable.to_vec(),
            unstable: unstable.to_vec(),
        }
    }

    /// Split at the heaviest star, which opens the unstable branch
    pub fn at_peak(parameters: &[f64], masses: &[f64]) -> Option<Self> {
        peak_index(masses).map(|cutoff| Self::classify(parameters, masses, cutoff))
    }

    pub fn stability(&self, index: usize) -> Stability {
        if index < self.cutoff {
            Stability::Stable
        } else {
            Stability::Unstable
        }
    }

    /// Mass at the cutoff
    pub fn critical_mass(&self) -> Option<f64> {
        self.unstable.first().map(|(_, mass)| *mass)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn peak() {
        assert_eq!(peak_index(&[1.0, 3.0, 2.0]), Some(1));
        assert_eq!(peak_index(&[f64::NAN, 1.0, f64::NAN]), Some(1));
        assert_eq!(peak_index(&[f64::NAN]), None);
        assert_eq!(peak_index(&[]), None);
    }

    #[test]
    fn partition() {
        let parameters = [1.0, 2.0, 3.0, 4.0];
        let masses = [0.5, 0.9, 1.2, 1.1];
        let partition = StabilityPartition::classify(&parameters, &masses, 2);
        assert_eq!(partition.stable, vec![(1.0, 0.5), (2.0, 0.9)]);
        assert_eq!(partition.unstable, vec![(3.0, 1.2), (4.0, 1.1)]);
        assert_eq!(partition.stability(1), Stability::Stable);
        assert_eq!(partition.stability(2), Stability::Unstable);
        assert_eq!(partition.critical_mass(), Some(1.2));

        let partition = StabilityPartition::classify(&parameters, &masses, 10);
        assert_eq!(partition.cutoff, 4);
        assert!(partition.unstable.is_empty());
        assert_eq!(partition.critical_mass(), None);

        let partition = StabilityPartition::at_peak(&parameters, &masses).expect("No peak");
        assert_eq!(partition.cutoff, 2);
    }
}
