//! Damped pendulum dynamics integrated with fixed-step RK4.
//!
//! The numeric core is two pure functions:
//!
//! - [`derivative`] — the equations of motion of a single damped pendulum,
//!   `θ' = ω`, `ω' = -(g/L)·sin θ - c·ω`
//! - [`step`] — one classical RK4 step of size `h`
//!
//! Everything else is built around them. [`PendulumParameters`] and
//! [`StepConfig`] are validated on construction, so a pendulum with a zero
//! rod length or a non-positive step size cannot be expressed.
//! [`Simulation`] owns a set of independent [`Body`]s, advances them frame by
//! frame and reports each [`Frame`] to an observer. [`Scenario`] describes a
//! run as plain data.
//!
//! # Example
//!
//! ```
//! use swing_pendulum::{PendulumParameters, PendulumState, step};
//!
//! let params = PendulumParameters::new(1.0, 9.81, 0.7).unwrap();
//! let mut state = PendulumState::from_degrees(179.0, 0.0);
//!
//! for _ in 0..1000 {
//!     state = step(&state, &params, 0.001);
//! }
//!
//! assert!(state.is_finite());
//! ```
//!
//! # Features
//!
//! - `serde` (default) — serialization for [`PendulumState`] and [`Scenario`].
//! - `parallel` — advances bodies on the `rayon` thread pool.

mod config;
mod dynamics;
mod geometry;
mod parameters;
mod scenario;
mod simulation;
mod state;

pub use config::{ConfigError, StepConfig};
pub use dynamics::{Pendulum, PendulumInput, derivative, step};
pub use geometry::Position;
pub use parameters::{ParameterError, PendulumParameters, STANDARD_GRAVITY};
pub use scenario::{PendulumSpec, Scenario, ScenarioError};
pub use simulation::{
    Action, Body, BodyFrame, Frame, RunStatus, RunSummary, Simulation, SimulationError,
};
pub use state::{PendulumState, StateDerivative};
