//! Core traits and types for the Swing integration workspace.
//!
//! This crate defines the shared abstractions that the RK4 solver, the
//! pendulum domain, and the observers build on:
//!
//! - [`Model`] — a deterministic callable mapping a typed input to a typed output
//! - [`Snapshot`] — a captured input/output pair from a model call
//! - [`Observer`] — receives solver or simulation events and optionally returns
//!   control actions
//! - [`StepIntegrable`] — a state that can be advanced by `derivative * delta`
//! - [`OdeProblem`] — adapts a model's input and output to an integrable state

mod model;
mod observer;
mod ode;
mod step;

pub use observer::Observer;
pub use ode::OdeProblem;
pub use step::{DerivativeOf, StepIntegrable};
pub use {model::Model, model::Snapshot};
