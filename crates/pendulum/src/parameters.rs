use std::f64::consts::TAU;

use thiserror::Error;
use uom::si::{
    acceleration::meter_per_second_squared,
    f64::{Acceleration, Frequency, Length},
    frequency::hertz,
    length::meter,
};

use crate::state::PendulumState;

/// Gravitational acceleration used when none is given, m/s².
pub const STANDARD_GRAVITY: f64 = 9.81;

/// Physical constants of one pendulum.
///
/// Parameters are validated on construction and immutable afterwards, so the
/// dynamics never divide by a zero rod length.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PendulumParameters {
    rod_length: f64,
    gravity: f64,
    damping: f64,
}

/// Errors that can occur when validating pendulum parameters.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum ParameterError {
    #[error("rod length must be finite and positive, got {0} m")]
    RodLength(f64),

    #[error("gravity must be finite and positive, got {0} m/s²")]
    Gravity(f64),

    #[error("damping coefficient must be finite and non-negative, got {0} 1/s")]
    Damping(f64),
}

impl Default for PendulumParameters {
    fn default() -> Self {
        // Known-good values, unwrap is safe
        Self::new(1.0, STANDARD_GRAVITY, 0.0).unwrap()
    }
}

impl PendulumParameters {
    /// Creates validated parameters.
    ///
    /// `damping` is the linear angular-velocity damping factor `c` in
    /// `ω' = -(g/L)·sin θ - c·ω`, in 1/s.
    ///
    /// # Errors
    ///
    /// Returns an error if `rod_length` or `gravity` is not finite and
    /// strictly positive, or if `damping` is negative or non-finite.
    pub fn new(rod_length: f64, gravity: f64, damping: f64) -> Result<Self, ParameterError> {
        if !rod_length.is_finite() || rod_length <= 0.0 {
            return Err(ParameterError::RodLength(rod_length));
        }
        if !gravity.is_finite() || gravity <= 0.0 {
            return Err(ParameterError::Gravity(gravity));
        }
        if !damping.is_finite() || damping < 0.0 {
            return Err(ParameterError::Damping(damping));
        }

        Ok(Self {
            rod_length,
            gravity,
            damping,
        })
    }

    /// Creates validated parameters from dimensioned quantities.
    ///
    /// # Errors
    ///
    /// Same as [`PendulumParameters::new`].
    pub fn from_quantities(
        rod_length: Length,
        gravity: Acceleration,
        damping: Frequency,
    ) -> Result<Self, ParameterError> {
        Self::new(
            rod_length.get::<meter>(),
            gravity.get::<meter_per_second_squared>(),
            damping.get::<hertz>(),
        )
    }

    /// Returns a copy with a different damping coefficient.
    ///
    /// # Errors
    ///
    /// Returns [`ParameterError::Damping`] if `damping` is negative or non-finite.
    pub fn with_damping(self, damping: f64) -> Result<Self, ParameterError> {
        Self::new(self.rod_length, self.gravity, damping)
    }

    /// Returns the rod length in meters.
    #[must_use]
    pub fn rod_length(&self) -> f64 {
        self.rod_length
    }

    /// Returns the gravitational acceleration in m/s².
    #[must_use]
    pub fn gravity(&self) -> f64 {
        self.gravity
    }

    /// Returns the damping coefficient in 1/s.
    #[must_use]
    pub fn damping(&self) -> f64 {
        self.damping
    }

    /// Returns `g / L`, the square of the small-angle natural frequency.
    #[must_use]
    pub fn gravity_over_length(&self) -> f64 {
        self.gravity / self.rod_length
    }

    /// Returns the undamped small-angle period `2π·sqrt(L/g)` in seconds.
    #[must_use]
    pub fn small_angle_period(&self) -> f64 {
        TAU * (self.rod_length / self.gravity).sqrt()
    }

    /// Returns the mechanical energy of `state` per unit `m·L²`.
    ///
    /// `E = ω²/2 - (g/L)·cos θ`. Constant along exact undamped trajectories,
    /// non-increasing along damped ones.
    #[must_use]
    pub fn energy(&self, state: &PendulumState) -> f64 {
        0.5 * state.omega * state.omega - self.gravity_over_length() * state.theta.cos()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{acceleration::foot_per_second_squared, length::centimeter};

    #[test]
    fn default_is_undamped_one_meter_pendulum() {
        let params = PendulumParameters::default();

        assert_eq!(params.rod_length(), 1.0);
        assert_eq!(params.gravity(), STANDARD_GRAVITY);
        assert_eq!(params.damping(), 0.0);
    }

    #[test]
    fn rejects_zero_rod_length() {
        assert_eq!(
            PendulumParameters::new(0.0, 9.81, 0.7),
            Err(ParameterError::RodLength(0.0))
        );
    }

    #[test]
    fn rejects_invalid_values() {
        assert!(matches!(
            PendulumParameters::new(-1.0, 9.81, 0.0),
            Err(ParameterError::RodLength(_))
        ));
        assert!(matches!(
            PendulumParameters::new(f64::NAN, 9.81, 0.0),
            Err(ParameterError::RodLength(_))
        ));
        assert!(matches!(
            PendulumParameters::new(1.0, 0.0, 0.0),
            Err(ParameterError::Gravity(_))
        ));
        assert!(matches!(
            PendulumParameters::new(1.0, 9.81, -0.1),
            Err(ParameterError::Damping(_))
        ));
        assert!(matches!(
            PendulumParameters::new(1.0, 9.81, f64::INFINITY),
            Err(ParameterError::Damping(_))
        ));
    }

    #[test]
    fn from_quantities_converts_units() {
        let params = PendulumParameters::from_quantities(
            Length::new::<centimeter>(50.0),
            Acceleration::new::<foot_per_second_squared>(32.174),
            Frequency::new::<hertz>(0.7),
        )
        .unwrap();

        assert_relative_eq!(params.rod_length(), 0.5, epsilon = 1e-12);
        assert_relative_eq!(params.gravity(), 9.806_635, epsilon = 1e-4);
        assert_relative_eq!(params.damping(), 0.7);
    }

    #[test]
    fn with_damping_keeps_geometry() {
        let params = PendulumParameters::default().with_damping(0.7).unwrap();

        assert_eq!(params.rod_length(), 1.0);
        assert_eq!(params.damping(), 0.7);
        assert!(PendulumParameters::default().with_damping(-1.0).is_err());
    }

    #[test]
    fn small_angle_period() {
        let params = PendulumParameters::new(1.0, 9.81, 0.0).unwrap();

        assert_relative_eq!(params.small_angle_period(), 2.006_067, epsilon = 1e-6);
    }

    #[test]
    fn energy_is_lowest_at_rest() {
        let params = PendulumParameters::new(0.5, 9.81, 0.0).unwrap();

        assert_relative_eq!(params.energy(&PendulumState::at_rest()), -19.62);
        assert!(params.energy(&PendulumState::new(0.1, 0.0)) > -19.62);
        assert!(params.energy(&PendulumState::new(0.0, 0.1)) > -19.62);
    }

    #[test]
    fn error_messages_name_the_value() {
        let err = PendulumParameters::new(0.0, 9.81, 0.0).unwrap_err();

        assert_eq!(err.to_string(), "rod length must be finite and positive, got 0 m");
    }
}
