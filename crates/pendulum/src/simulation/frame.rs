use crate::{geometry::Position, state::PendulumState};

/// One body's contribution to a [`Frame`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyFrame {
    pub state: PendulumState,
    /// Bob position, including the pivot offset.
    pub position: Position,
}

/// Observable output of a simulation, emitted once per frame.
///
/// Frame 0 is the initial condition. Frame `n` follows `n` calls to
/// [`Simulation::advance_frame`](super::Simulation::advance_frame).
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub index: usize,
    /// Simulated time in seconds.
    pub sim_time: f64,
    /// One entry per body, in insertion order.
    pub bodies: Vec<BodyFrame>,
}

impl Frame {
    /// Returns the state of body `index`, if present.
    #[must_use]
    pub fn state(&self, index: usize) -> Option<PendulumState> {
        self.bodies.get(index).map(|body| body.state)
    }
}
