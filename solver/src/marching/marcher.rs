use crate::error::IntegrationError;
use crate::marching::{StopReason, Termination, Window};

/// Outcome of one step of a recurrence
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Advance<S> {
    /// Sample is inside the body, keep going
    Interior(S),
    /// Sample is past the surface and ends the run
    Boundary(S),
}

/// Fixed step recurrence that builds sample `i + 1` from samples `i - 1` and `i`
pub trait Recurrence {
    type Sample: Copy;

    /// Samples 0 and 1
    fn seed(&self) -> [Self::Sample; 2];

    /// Compute sample `index + 1`
    fn advance(&self,
               previous: &Self::Sample,
               current: &Self::Sample,
               index: usize) -> Result<Advance<Self::Sample>, IntegrationError>;
}

/// Runs a [Recurrence] outward until it reports a boundary,
/// but never longer than `max_steps` steps.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Marcher {
    max_steps: usize,
}

impl Marcher {
    pub fn new(max_steps: usize) -> Result<Self, IntegrationError> {
        if max_steps == 0 {
            return Err(IntegrationError::InvalidParameter {
                name: "max_steps",
                value: 0.0,
            });
        }
        Ok(Self { max_steps })
    }

    pub fn max_steps(&self) -> usize {
        self.max_steps
    }

    pub fn run<R: Recurrence>(&self, recurrence: &R) -> Result<Termination<R::Sample>, IntegrationError> {
        self.run_with(recurrence, |_| {})
    }

    /// Same as [Marcher::run], `observer` sees every sample in order, seed and sentinel included
    pub fn run_with<R, F>(&self, recurrence: &R, mut observer: F) -> Result<Termination<R::Sample>, IntegrationError>
        where R: Recurrence, F: FnMut(&R::Sample) {
        let seed = recurrence.seed();
        seed.iter().for_each(&mut observer);
        let mut window = Window::from_seed(seed);
        for index in 1..=self.max_steps {
            match recurrence.advance(window.previous(), window.newest(), index)? {
                Advance::Interior(next) => {
                    observer(&next);
                    window.shift(next);
                }
                Advance::Boundary(sentinel) => {
                    observer(&sentinel);
                    window.shift(sentinel);
                    return Ok(Termination {
                        window,
                        steps: index,
                        reason: StopReason::SurfaceReached,
                    });
                }
            }
        }
        Ok(Termination {
            window,
            steps: self.max_steps,
            reason: StopReason::IterationCeilingReached,
        })
    }
}

impl<S: Copy> Termination<S> {
    /// Turn a run that hit the iteration ceiling into [IntegrationError::ConvergenceFailure]
    pub fn require_surface(self) -> Result<Self, IntegrationError> {
        match self.reason {
            StopReason::SurfaceReached => Ok(self),
            StopReason::IterationCeilingReached => {
                Err(IntegrationError::ConvergenceFailure { steps: self.steps })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Fibonacci numbers, boundary once a value exceeds `limit`
    struct Fibonacci {
        limit: u64,
    }

    impl Recurrence for Fibonacci {
        type Sample = u64;

        fn seed(&self) -> [u64; 2] {
            [1, 1]
        }

        fn advance(&self, previous: &u64, current: &u64, _index: usize) -> Result<Advance<u64>, IntegrationError> {
            let next = previous + current;
            if next > self.limit {
                Ok(Advance::Boundary(next))
            } else {
                Ok(Advance::Interior(next))
            }
        }
    }

    struct Failing;

    impl Recurrence for Failing {
        type Sample = f64;

        fn seed(&self) -> [f64; 2] {
            [1.0, 1.0]
        }

        fn advance(&self, _previous: &f64, current: &f64, index: usize) -> Result<Advance<f64>, IntegrationError> {
            if index == 2 {
                return Err(IntegrationError::IntegrationDivergence { step: index, radius: *current });
            }
            Ok(Advance::Interior(current + 1.0))
        }
    }

    #[test]
    fn surface_is_second_to_last() {
        let marcher = Marcher::new(100).expect("Can't create marcher");
        let mut samples = vec![];
        let termination = marcher
            .run_with(&Fibonacci { limit: 20 }, |s| samples.push(*s))
            .expect("Can't march");
        assert_eq!(samples, vec![1, 1, 2, 3, 5, 8, 13, 21]);
        assert_eq!(termination.reason, StopReason::SurfaceReached);
        assert_eq!(termination.steps, 6);
        assert_eq!(*termination.sentinel(), 21);
        assert_eq!(*termination.surface(), 13);
        assert_eq!(*termination.before_surface(), 8);
        assert_eq!(*termination.surface(), samples[samples.len() - 2]);
    }

    #[test]
    fn first_step_boundary() {
        let marcher = Marcher::new(100).expect("Can't create marcher");
        let termination = marcher.run(&Fibonacci { limit: 1 }).expect("Can't march");
        assert_eq!(termination.steps, 1);
        assert_eq!(*termination.sentinel(), 2);
        assert_eq!(*termination.surface(), 1);
    }

    #[test]
    fn ceiling() {
        let marcher = Marcher::new(3).expect("Can't create marcher");
        let termination = marcher.run(&Fibonacci { limit: 1000 }).expect("Can't march");
        assert_eq!(termination.reason, StopReason::IterationCeilingReached);
        assert!(!termination.reached_surface());
        assert_eq!(*termination.sentinel(), 5);
        assert_eq!(*termination.surface(), 3);
        assert_eq!(*termination.before_surface(), 2);
        assert_eq!(termination.require_surface(),
                   Err(IntegrationError::ConvergenceFailure { steps: 3 }));
    }

    #[test]
    fn errors_stop_marching() {
        let marcher = Marcher::new(100).expect("Can't create marcher");
        let mut count = 0;
        let res = marcher.run_with(&Failing, |_| count += 1);
        assert_eq!(res, Err(IntegrationError::IntegrationDivergence { step: 2, radius: 2.0 }));
        assert_eq!(count, 3);
        assert!(Marcher::new(0).is_err());
    }
}
