//! Capability traits for observers that work with both the simulation loop
//! and the generic RK4 solver.
//!
//! # Event traits
//!
//! - [`HasSimTime`] — events stamped with a simulated time
//! - [`HasPendulumStates`] — events carrying one or more pendulum states
//!
//! # Action traits
//!
//! - [`CanStopEarly`] — actions that can signal early termination
//!
//! # Example
//!
//! ```rust
//! use swing_core::Observer;
//! use swing_observers::traits::{CanStopEarly, HasPendulumStates};
//!
//! /// Stops once the first pendulum swings past horizontal.
//! struct PastHorizontal;
//!
//! impl<E: HasPendulumStates, A: CanStopEarly> Observer<E, A> for PastHorizontal {
//!     fn observe(&mut self, event: &E) -> Option<A> {
//!         let state = event.pendulum_state(0)?;
//!         (state.theta.abs() > std::f64::consts::FRAC_PI_2).then(A::stop_early)
//!     }
//! }
//! ```

use swing_pendulum::{Frame, PendulumInput, PendulumState};
use swing_solvers::transient::rk4;

/// An event stamped with a simulated time.
pub trait HasSimTime {
    /// Returns the simulated time of this event, in seconds.
    fn sim_time(&self) -> f64;
}

/// An event that carries pendulum states.
pub trait HasPendulumStates {
    /// Returns the state of pendulum `index`, or `None` if there is no such
    /// pendulum.
    fn pendulum_state(&self, index: usize) -> Option<PendulumState>;
}

/// An action type that can signal early termination.
pub trait CanStopEarly {
    /// Returns the action that stops the run early.
    fn stop_early() -> Self;
}

// --- Simulation frames ---

impl HasSimTime for Frame {
    fn sim_time(&self) -> f64 {
        self.sim_time
    }
}

impl HasPendulumStates for Frame {
    fn pendulum_state(&self, index: usize) -> Option<PendulumState> {
        self.state(index)
    }
}

// --- RK4 solver events for a single pendulum ---

impl<O> HasSimTime for rk4::Event<PendulumInput, O> {
    fn sim_time(&self) -> f64 {
        self.snapshot.input.time
    }
}

impl<O> HasPendulumStates for rk4::Event<PendulumInput, O> {
    fn pendulum_state(&self, index: usize) -> Option<PendulumState> {
        (index == 0).then_some(self.snapshot.input.state)
    }
}

// --- CanStopEarly impls ---

impl CanStopEarly for swing_pendulum::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}

impl CanStopEarly for rk4::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use swing_core::Snapshot;
    use swing_pendulum::{BodyFrame, Position, StateDerivative};

    #[test]
    fn frame_exposes_time_and_states() {
        let frame = Frame {
            index: 3,
            sim_time: 0.03,
            bodies: vec![BodyFrame {
                state: PendulumState::new(0.1, 0.2),
                position: Position::default(),
            }],
        };

        assert_eq!(frame.sim_time(), 0.03);
        assert_eq!(frame.pendulum_state(0), Some(PendulumState::new(0.1, 0.2)));
        assert_eq!(frame.pendulum_state(1), None);
    }

    #[test]
    fn solver_event_exposes_single_pendulum() {
        let event = rk4::Event {
            step: 7,
            snapshot: Snapshot::new(
                PendulumInput {
                    state: PendulumState::new(-0.4, 1.0),
                    time: 0.7,
                },
                StateDerivative::default(),
            ),
        };

        assert_eq!(event.sim_time(), 0.7);
        assert_eq!(event.pendulum_state(0), Some(PendulumState::new(-0.4, 1.0)));
        assert_eq!(event.pendulum_state(1), None);
    }

    #[test]
    fn stop_actions() {
        assert_eq!(
            <swing_pendulum::Action as CanStopEarly>::stop_early(),
            swing_pendulum::Action::StopEarly
        );
        assert_eq!(
            <rk4::Action as CanStopEarly>::stop_early(),
            rk4::Action::StopEarly
        );
    }
}
