/// Last three samples of a marching recurrence, oldest first.
///
/// Recurrences look back two samples, so nothing older is kept.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Window<S: Copy> {
    samples: [S; 3],
}

impl<S: Copy> Window<S> {
    /// Window before the first step. The oldest slot repeats `first`
    /// until a step pushes it out.
    pub fn from_seed(seed: [S; 2]) -> Self {
        let [first, second] = seed;
        Self {
            samples: [first, first, second],
        }
    }

    /// Sample before the newest one
    pub fn previous(&self) -> &S {
        &self.samples[1]
    }

    pub fn newest(&self) -> &S {
        &self.samples[2]
    }

    pub fn oldest(&self) -> &S {
        &self.samples[0]
    }

    pub fn shift(&mut self, next: S) {
        self.samples.rotate_left(1);
        self.samples[2] = next;
    }
}

/// Why marching stopped
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StopReason {
    /// The newest sample left the physical domain
    SurfaceReached,
    IterationCeilingReached,
}

/// Final state of a marching run.
///
/// Stopping is decided after a sample is produced, so when the surface is
/// reached the newest sample is an invalid sentinel and the physical surface
/// is the one before it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Termination<S: Copy> {
    pub window: Window<S>,
    /// Number of steps taken
    pub steps: usize,
    pub reason: StopReason,
}

impl<S: Copy> Termination<S> {
    /// Last physically valid sample
    pub fn surface(&self) -> &S {
        self.window.previous()
    }

    /// Sample that stopped the run
    pub fn sentinel(&self) -> &S {
        self.window.newest()
    }

    pub fn before_surface(&self) -> &S {
        self.window.oldest()
    }

    pub fn reached_surface(&self) -> bool {
        self.reason == StopReason::SurfaceReached
    }
}
