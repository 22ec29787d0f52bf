use std::convert::Infallible;

use swing_core::{Model, OdeProblem};
use swing_solvers::transient::rk4;

use crate::{
    parameters::PendulumParameters,
    state::{PendulumState, StateDerivative},
};

/// Returns the instantaneous rate of change of `state`.
///
/// ```text
/// θ' = ω
/// ω' = -(g/L)·sin θ - c·ω
/// ```
///
/// `theta` is used as given; `sin` handles any accumulated angle.
#[must_use]
pub fn derivative(state: &PendulumState, params: &PendulumParameters) -> StateDerivative {
    StateDerivative {
        d_theta: state.omega,
        d_omega: -params.gravity_over_length() * state.theta.sin() - params.damping() * state.omega,
    }
}

/// Advances `state` by exactly one RK4 step of `step_size` seconds.
///
/// This is a pure function of its inputs. A `step_size` of zero returns the
/// input state. Non-finite input is propagated, never corrected; detecting it
/// is the caller's job.
#[must_use]
pub fn step(state: &PendulumState, params: &PendulumParameters, step_size: f64) -> PendulumState {
    let next = rk4::step(state, step_size, |stage: &PendulumState, _offset: &f64| {
        Ok::<_, Infallible>(derivative(stage, params))
    });

    match next {
        Ok(next) => next,
        Err(never) => match never {},
    }
}

/// Input to the [`Pendulum`] model: a state at a point in time.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PendulumInput {
    pub state: PendulumState,
    /// Simulated time in seconds.
    pub time: f64,
}

/// A single damped pendulum as a [`Model`] and [`OdeProblem`].
///
/// The model output is the state derivative, so the generic
/// [`rk4::solve`] can integrate it and report every step to an observer.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Pendulum {
    params: PendulumParameters,
}

impl Pendulum {
    #[must_use]
    pub fn new(params: PendulumParameters) -> Self {
        Self { params }
    }

    #[must_use]
    pub fn params(&self) -> &PendulumParameters {
        &self.params
    }
}

impl Model for Pendulum {
    type Input = PendulumInput;
    type Output = StateDerivative;
    type Error = Infallible;

    fn call(&self, input: &PendulumInput) -> Result<StateDerivative, Infallible> {
        Ok(derivative(&input.state, &self.params))
    }
}

impl OdeProblem for Pendulum {
    type Input = PendulumInput;
    type Output = StateDerivative;
    type Delta = f64;
    type State = PendulumState;
    type Error = Infallible;

    fn state(&self, input: &PendulumInput) -> Result<PendulumState, Infallible> {
        Ok(input.state)
    }

    fn derivative(
        &self,
        _input: &PendulumInput,
        output: &StateDerivative,
    ) -> Result<StateDerivative, Infallible> {
        Ok(*output)
    }

    fn build_input(
        &self,
        base: &PendulumInput,
        state: &PendulumState,
        delta: &f64,
    ) -> Result<PendulumInput, Infallible> {
        Ok(PendulumInput {
            state: *state,
            time: base.time + delta,
        })
    }
}
