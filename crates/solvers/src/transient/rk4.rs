//! Classical fourth-order Runge-Kutta (RK4) solver.
//!
//! Each step evaluates the derivative four times and combines the slopes with
//! Simpson weights:
//!
//! ```text
//! k1 = f(y_n)
//! k2 = f(y_n + dt/2 * k1)
//! k3 = f(y_n + dt/2 * k2)
//! k4 = f(y_n + dt * k3)
//!
//! y_{n+1} = y_n + dt * (k1 + 2*k2 + 2*k3 + k4) / 6
//! ```
//!
//! The step size is fixed. There is no error estimate, no step rejection and
//! no adaptivity: the local truncation error is O(dt⁵) and callers choose `dt`
//! to suit their output cadence.
//!
//! Two entry points are provided:
//!
//! - [`step`] advances a single [`StepIntegrable`] state given a derivative
//!   closure. It holds no state of its own.
//! - [`solve`] integrates a [`Model`] through an [`OdeProblem`] for a number of
//!   steps, recording history and reporting each step to an [`Observer`].
//!
//! # Example
//!
//! ```ignore
//! use swing_solvers::transient::rk4;
//!
//! let solution = rk4::solve_unobserved(&model, &problem, initial_input, dt, steps)?;
//!
//! for snapshot in &solution.history {
//!     println!("{:?} -> {:?}", snapshot.input, snapshot.output);
//! }
//! ```

mod action;
mod error;
mod event;
mod solution;

pub use action::Action;
pub use error::Error;
pub use event::Event;
pub use solution::{Solution, Status};

use std::ops::{Add, Mul};

use swing_core::{DerivativeOf, Model, Observer, OdeProblem, Snapshot, StepIntegrable};

/// Advances `state` by exactly one RK4 step of size `delta`.
///
/// The closure `f(stage_state, offset)` returns the derivative at a stage
/// state located `offset` past the start of the step. It is called four
/// times, at offsets `0`, `delta/2`, `delta/2` and `delta`, and in that order.
///
/// A `delta` of zero returns a state equal to the input.
///
/// # Errors
///
/// Returns the first error produced by `f`, unchanged.
pub fn step<S, Delta, E, F>(state: &S, delta: Delta, mut f: F) -> Result<S, E>
where
    S: StepIntegrable<Delta>,
    DerivativeOf<S, Delta>: Clone
        + Add<Output = DerivativeOf<S, Delta>>
        + Mul<f64, Output = DerivativeOf<S, Delta>>,
    Delta: Clone + Mul<f64, Output = Delta>,
    F: FnMut(&S, &Delta) -> Result<DerivativeOf<S, Delta>, E>,
{
    let k1 = f(state, &(delta.clone() * 0.0))?;
    remaining_stages(state, k1, delta, f)
}

/// Runs stages two through four given the slope at the start of the step.
fn remaining_stages<S, Delta, E, F>(
    state: &S,
    k1: DerivativeOf<S, Delta>,
    delta: Delta,
    mut f: F,
) -> Result<S, E>
where
    S: StepIntegrable<Delta>,
    DerivativeOf<S, Delta>: Clone
        + Add<Output = DerivativeOf<S, Delta>>
        + Mul<f64, Output = DerivativeOf<S, Delta>>,
    Delta: Clone + Mul<f64, Output = Delta>,
    F: FnMut(&S, &Delta) -> Result<DerivativeOf<S, Delta>, E>,
{
    let half = delta.clone() * 0.5;

    let k2 = f(&state.step(k1.clone(), half.clone()), &half)?;
    let k3 = f(&state.step(k2.clone(), half.clone()), &half)?;
    let k4 = f(&state.step(k3.clone(), delta.clone()), &delta)?;

    let weighted = (k1 + k2 * 2.0 + k3 * 2.0 + k4) * (1.0 / 6.0);
    Ok(state.step(weighted, delta))
}

/// Integrates an ODE problem using fixed-step RK4.
///
/// # Algorithm
///
/// 1. Call the model with the initial input to get the initial snapshot.
/// 2. For each step:
///    - Extract the state from the current input.
///    - Take `k1` from the current snapshot; no extra model call is needed.
///    - Evaluate `k2`, `k3` and `k4` by building stage inputs with
///      [`OdeProblem::build_input`] and calling the model.
///    - Build the next input from the combined step and finalize it.
///    - Call the model to get the next output.
///    - Emit an [`Event`] to the observer.
///    - If the observer returns `StopEarly`, terminate.
/// 3. Return the solution with the full history.
///
/// # Errors
///
/// Returns an error if the model or problem fails at any point, including
/// at an intermediate stage. The error records the step it occurred in.
pub fn solve<M, P, Obs>(
    model: &M,
    problem: &P,
    initial: M::Input,
    dt: P::Delta,
    steps: usize,
    mut observer: Obs,
) -> Result<Solution<M::Input, M::Output>, Error>
where
    M: Model,
    M::Input: Clone,
    M::Output: Clone,
    P: OdeProblem<Input = M::Input, Output = M::Output>,
    P::Delta: Clone + Mul<f64, Output = P::Delta>,
    DerivativeOf<P::State, P::Delta>: Clone
        + Add<Output = DerivativeOf<P::State, P::Delta>>
        + Mul<f64, Output = DerivativeOf<P::State, P::Delta>>,
    Obs: Observer<Event<M::Input, M::Output>, Action>,
{
    let initial_output = model.call(&initial).map_err(|err| Error::model(0, err))?;
    let initial_snapshot = Snapshot::new(initial, initial_output);

    let mut history = Vec::with_capacity(steps + 1);
    history.push(initial_snapshot.clone());

    let event = Event {
        step: 0,
        snapshot: initial_snapshot.clone(),
    };
    if let Some(Action::StopEarly) = observer.observe(&event) {
        return Ok(Solution {
            status: Status::StoppedByObserver,
            history,
            steps: 0,
        });
    }

    let mut current = initial_snapshot;

    for step in 1..=steps {
        let state = problem
            .state(&current.input)
            .map_err(|err| Error::problem(step, err))?;
        let k1 = problem
            .derivative(&current.input, &current.output)
            .map_err(|err| Error::problem(step, err))?;

        let next_state = remaining_stages(&state, k1, dt.clone(), |stage, offset| {
            let input = problem
                .build_input(&current.input, stage, offset)
                .map_err(|err| Error::problem(step, err))?;
            let output = model.call(&input).map_err(|err| Error::model(step, err))?;
            problem
                .derivative(&input, &output)
                .map_err(|err| Error::problem(step, err))
        })?;

        let next_input = problem
            .build_input(&current.input, &next_state, &dt)
            .map_err(|err| Error::problem(step, err))?;
        let next_input = problem
            .finalize_step(next_input, &current.input, &current.output, &dt)
            .map_err(|err| Error::problem(step, err))?;

        let next_output = model
            .call(&next_input)
            .map_err(|err| Error::model(step, err))?;
        let next_snapshot = Snapshot::new(next_input, next_output);

        history.push(next_snapshot.clone());

        let event = Event {
            step,
            snapshot: next_snapshot.clone(),
        };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            return Ok(Solution {
                status: Status::StoppedByObserver,
                history,
                steps: step,
            });
        }

        current = next_snapshot;
    }

    Ok(Solution {
        status: Status::Complete,
        history,
        steps,
    })
}

/// Integrates an ODE problem using RK4 without observation.
///
/// This is a convenience wrapper around [`solve`] that discards events.
///
/// # Errors
///
/// Returns an error if the model or problem returns an error at any point.
pub fn solve_unobserved<M, P>(
    model: &M,
    problem: &P,
    initial: M::Input,
    dt: P::Delta,
    steps: usize,
) -> Result<Solution<M::Input, M::Output>, Error>
where
    M: Model,
    M::Input: Clone,
    M::Output: Clone,
    P: OdeProblem<Input = M::Input, Output = M::Output>,
    P::Delta: Clone + Mul<f64, Output = P::Delta>,
    DerivativeOf<P::State, P::Delta>: Clone
        + Add<Output = DerivativeOf<P::State, P::Delta>>
        + Mul<f64, Output = DerivativeOf<P::State, P::Delta>>,
{
    solve(model, problem, initial, dt, steps, ())
}
