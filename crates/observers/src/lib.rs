//! Reusable observers for Swing pendulum simulations.
//!
//! This crate provides [`Observer`] implementations and capability traits that
//! work with both [`Simulation::run`] frames and the generic RK4 solver's
//! events.
//!
//! # Modules
//!
//! - [`traits`] — Capability traits for cross-solver observers
//!   ([`HasSimTime`], [`HasPendulumStates`], [`CanStopEarly`])
//!
//! # Observers
//!
//! - [`AngleHistory`] — records one pendulum's angle over time for plotting
//! - [`EnergyMonitor`] — stops a run whose energy drifts past a tolerance
//!
//! [`Observer`]: swing_core::Observer
//! [`Simulation::run`]: swing_pendulum::Simulation::run
//! [`HasSimTime`]: traits::HasSimTime
//! [`HasPendulumStates`]: traits::HasPendulumStates
//! [`CanStopEarly`]: traits::CanStopEarly

pub mod traits;

mod angle_history;
mod energy;

pub use angle_history::AngleHistory;
pub use energy::EnergyMonitor;
