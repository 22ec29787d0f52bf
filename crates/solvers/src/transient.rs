//! Fixed-step time integrators.

pub mod rk4;
