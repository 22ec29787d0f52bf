//! Numerical solvers for the Swing workspace.
//!
//! - [`transient::rk4`] — classical fixed-step fourth-order Runge-Kutta

pub mod transient;
