use crate::{
    dynamics, geometry::Position, parameters::PendulumParameters, state::PendulumState,
};

/// One pendulum in a [`Simulation`](super::Simulation).
///
/// The state is only advanced by the simulation's integrator. Bodies never
/// interact.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Body {
    params: PendulumParameters,
    pivot: Position,
    state: PendulumState,
}

impl Body {
    /// Creates a body hanging from the origin.
    #[must_use]
    pub fn new(params: PendulumParameters, initial: PendulumState) -> Self {
        Self {
            params,
            pivot: Position::default(),
            state: initial,
        }
    }

    /// Moves the pivot. Only affects reported positions, not the dynamics.
    #[must_use]
    pub fn with_pivot(mut self, pivot: Position) -> Self {
        self.pivot = pivot;
        self
    }

    #[must_use]
    pub fn params(&self) -> &PendulumParameters {
        &self.params
    }

    #[must_use]
    pub fn pivot(&self) -> Position {
        self.pivot
    }

    #[must_use]
    pub fn state(&self) -> PendulumState {
        self.state
    }

    /// Advances the state by one RK4 step.
    pub(super) fn advance(&mut self, step_size: f64) {
        self.state = dynamics::step(&self.state, &self.params, step_size);
    }

    /// Returns the bob position in the shared frame of reference.
    #[must_use]
    pub fn position(&self) -> Position {
        self.pivot + self.state.bob_offset(self.params.rod_length())
    }
}
