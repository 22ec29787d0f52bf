/// Indicates how a simulation run terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    /// Covered the requested duration.
    Complete,

    /// Stopped early due to an observer action.
    StoppedByObserver,
}

/// The result of [`Simulation::run`](super::Simulation::run).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunSummary {
    /// How the run terminated.
    pub status: RunStatus,

    /// Number of frames advanced during this run.
    pub frames: usize,

    /// Simulated time at the end of the run, in seconds.
    pub sim_time: f64,
}
