use std::ops::{Add, Mul};

use swing_core::StepIntegrable;

use crate::geometry::Position;

/// Instantaneous mechanical state of one simple pendulum.
///
/// `theta` is the signed angle from the downward vertical in radians and is
/// never wrapped. `omega` is the angular velocity in radians per second.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PendulumState {
    pub theta: f64,
    pub omega: f64,
}

impl PendulumState {
    /// Creates a state from an angle in radians and an angular velocity in rad/s.
    #[must_use]
    pub fn new(theta: f64, omega: f64) -> Self {
        Self { theta, omega }
    }

    /// The stable equilibrium: hanging straight down, not moving.
    #[must_use]
    pub fn at_rest() -> Self {
        Self::default()
    }

    /// Creates a state from an angle in degrees and an angular velocity in rad/s.
    #[must_use]
    pub fn from_degrees(theta_degrees: f64, omega: f64) -> Self {
        Self::new(theta_degrees.to_radians(), omega)
    }

    /// Returns the angle in degrees.
    #[must_use]
    pub fn theta_degrees(&self) -> f64 {
        self.theta.to_degrees()
    }

    /// Returns `true` if both components are finite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.theta.is_finite() && self.omega.is_finite()
    }

    /// Returns the bob position relative to the pivot for a rod of `rod_length`.
    ///
    /// `y` points up, so a pendulum at rest sits at `(0, -rod_length)`.
    #[must_use]
    pub fn bob_offset(&self, rod_length: f64) -> Position {
        Position::new(rod_length * self.theta.sin(), -rod_length * self.theta.cos())
    }
}

/// Time derivative of a [`PendulumState`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct StateDerivative {
    /// Rate of change of `theta`, rad/s.
    pub d_theta: f64,
    /// Rate of change of `omega`, rad/s².
    pub d_omega: f64,
}

impl Add for StateDerivative {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            d_theta: self.d_theta + rhs.d_theta,
            d_omega: self.d_omega + rhs.d_omega,
        }
    }
}

impl Mul<f64> for StateDerivative {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        Self {
            d_theta: self.d_theta * rhs,
            d_omega: self.d_omega * rhs,
        }
    }
}

impl StepIntegrable<f64> for PendulumState {
    type Derivative = StateDerivative;

    fn step(&self, derivative: StateDerivative, dt: f64) -> Self {
        Self {
            theta: self.theta + derivative.d_theta * dt,
            omega: self.omega + derivative.d_omega * dt,
        }
    }
}
