use thiserror::Error;

/// Errors that end a simulation run.
///
/// Integration itself never fails. These are raised by the checks the
/// simulation runs on each body after every substep, and the offending
/// state is left in place for inspection.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum SimulationError {
    #[error("pendulum {body} reached a non-finite state at t = {sim_time} s")]
    NonFinite { body: usize, sim_time: f64 },

    #[error("pendulum {body} diverged at t = {sim_time} s (theta = {theta} rad, omega = {omega} rad/s)")]
    Diverged {
        body: usize,
        sim_time: f64,
        theta: f64,
        omega: f64,
    },

    #[error("divergence bound must be finite and positive, got {0}")]
    Bound(f64),

    #[error("run duration must be finite and non-negative, got {0} s")]
    Duration(f64),
}
