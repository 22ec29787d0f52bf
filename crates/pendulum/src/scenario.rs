use thiserror::Error;

use crate::{
    config::{ConfigError, StepConfig},
    geometry::Position,
    parameters::{ParameterError, PendulumParameters, STANDARD_GRAVITY},
    simulation::Body,
    state::PendulumState,
};

const DEFAULT_FRAME_RATE: f64 = 100.0;
const DEFAULT_SUBSTEPS_PER_FRAME: usize = 10;
const DEFAULT_DURATION: f64 = 10.0;

/// A simulation run described as plain data.
///
/// Gravity and damping are shared by every pendulum; rod length, pivot and
/// release conditions are per pendulum. Nothing is validated until the
/// scenario is turned into bodies or a [`Simulation`](crate::Simulation).
///
/// With the `serde` feature, every field except `pendulums` may be omitted
/// and takes the value used by [`Scenario::twin`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Scenario {
    /// Gravitational acceleration, m/s².
    #[cfg_attr(feature = "serde", serde(default = "default_gravity"))]
    pub gravity: f64,

    /// Linear damping coefficient, 1/s.
    #[cfg_attr(feature = "serde", serde(default))]
    pub damping: f64,

    /// Output frames per simulated second.
    #[cfg_attr(feature = "serde", serde(default = "default_frame_rate"))]
    pub frame_rate: f64,

    /// Integration steps per output frame.
    #[cfg_attr(feature = "serde", serde(default = "default_substeps_per_frame"))]
    pub substeps_per_frame: usize,

    /// Simulated run length, s.
    #[cfg_attr(feature = "serde", serde(default = "default_duration"))]
    pub duration: f64,

    pub pendulums: Vec<PendulumSpec>,
}

/// One pendulum of a [`Scenario`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PendulumSpec {
    /// Rod length, m.
    pub rod_length: f64,

    /// Pivot location, m. Only affects reported positions.
    #[cfg_attr(feature = "serde", serde(default))]
    pub pivot: Position,

    /// Release angle from the downward vertical, degrees.
    pub initial_angle_degrees: f64,

    /// Release angular velocity, rad/s.
    #[cfg_attr(feature = "serde", serde(default))]
    pub initial_omega: f64,
}

/// Errors that can occur when building a simulation from a [`Scenario`].
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum ScenarioError {
    #[error("pendulum {index}: {source}")]
    Pendulum {
        index: usize,
        #[source]
        source: ParameterError,
    },

    #[error("pendulum {index}: initial state must be finite")]
    InitialState { index: usize },

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("run duration must be finite and non-negative, got {0} s")]
    Duration(f64),
}

impl Scenario {
    /// Two decoupled pendulums side by side, damped and released from rest.
    ///
    /// The left pendulum (pivot at `x = -1`, rod 1 m) starts at 179°, the right
    /// one (pivot at `x = +1`, rod 0.5 m) at 90°. Frames are emitted at 100 Hz
    /// with 10 substeps each, for 10 s.
    #[must_use]
    pub fn twin() -> Self {
        Self {
            gravity: STANDARD_GRAVITY,
            damping: 0.7,
            frame_rate: DEFAULT_FRAME_RATE,
            substeps_per_frame: DEFAULT_SUBSTEPS_PER_FRAME,
            duration: DEFAULT_DURATION,
            pendulums: vec![
                PendulumSpec {
                    rod_length: 1.0,
                    pivot: Position::new(-1.0, 0.0),
                    initial_angle_degrees: 179.0,
                    initial_omega: 0.0,
                },
                PendulumSpec {
                    rod_length: 0.5,
                    pivot: Position::new(1.0, 0.0),
                    initial_angle_degrees: 90.0,
                    initial_omega: 0.0,
                },
            ],
        }
    }

    /// Returns the validated step config.
    ///
    /// # Errors
    ///
    /// Returns an error if the frame rate or substep count is invalid.
    pub fn step_config(&self) -> Result<StepConfig, ConfigError> {
        StepConfig::from_frame_rate(self.frame_rate, self.substeps_per_frame)
    }

    /// Returns one validated body per pendulum, in order.
    ///
    /// # Errors
    ///
    /// Returns the first invalid pendulum, identified by its index.
    pub fn bodies(&self) -> Result<Vec<Body>, ScenarioError> {
        self.pendulums
            .iter()
            .enumerate()
            .map(|(index, spec)| {
                let params = PendulumParameters::new(spec.rod_length, self.gravity, self.damping)
                    .map_err(|source| ScenarioError::Pendulum { index, source })?;

                let initial =
                    PendulumState::from_degrees(spec.initial_angle_degrees, spec.initial_omega);
                if !initial.is_finite() {
                    return Err(ScenarioError::InitialState { index });
                }

                Ok(Body::new(params, initial).with_pivot(spec.pivot))
            })
            .collect()
    }

    /// Checks that the run duration is usable.
    ///
    /// # Errors
    ///
    /// Returns [`ScenarioError::Duration`] for a negative or non-finite duration.
    pub fn validate_duration(&self) -> Result<(), ScenarioError> {
        if !self.duration.is_finite() || self.duration < 0.0 {
            return Err(ScenarioError::Duration(self.duration));
        }
        Ok(())
    }
}

#[cfg(feature = "serde")]
fn default_gravity() -> f64 {
    STANDARD_GRAVITY
}

#[cfg(feature = "serde")]
fn default_frame_rate() -> f64 {
    DEFAULT_FRAME_RATE
}

#[cfg(feature = "serde")]
fn default_substeps_per_frame() -> usize {
    DEFAULT_SUBSTEPS_PER_FRAME
}

#[cfg(feature = "serde")]
fn default_duration() -> f64 {
    DEFAULT_DURATION
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn twin_builds_two_bodies() {
        let scenario = Scenario::twin();

        let bodies = scenario.bodies().unwrap();
        let config = scenario.step_config().unwrap();

        assert_eq!(bodies.len(), 2);
        assert_relative_eq!(bodies[0].state().theta_degrees(), 179.0, epsilon = 1e-12);
        assert_relative_eq!(bodies[1].params().rod_length(), 0.5);
        assert_relative_eq!(bodies[1].params().damping(), 0.7);
        assert_eq!(bodies[0].pivot(), Position::new(-1.0, 0.0));
        assert_relative_eq!(config.step_size(), 0.001);
        assert_eq!(config.frames_in(scenario.duration), 1000);
    }

    #[test]
    fn invalid_pendulum_is_identified() {
        let mut scenario = Scenario::twin();
        scenario.pendulums[1].rod_length = 0.0;

        assert_eq!(
            scenario.bodies(),
            Err(ScenarioError::Pendulum {
                index: 1,
                source: ParameterError::RodLength(0.0),
            })
        );
    }

    #[test]
    fn non_finite_release_is_rejected() {
        let mut scenario = Scenario::twin();
        scenario.pendulums[0].initial_omega = f64::NAN;

        assert_eq!(
            scenario.bodies(),
            Err(ScenarioError::InitialState { index: 0 })
        );
    }

    #[test]
    fn invalid_step_config_is_reported() {
        let mut scenario = Scenario::twin();
        scenario.substeps_per_frame = 0;

        assert_eq!(scenario.step_config(), Err(ConfigError::Substeps));
    }

    #[test]
    fn invalid_duration_is_reported() {
        let mut scenario = Scenario::twin();
        scenario.duration = -5.0;

        assert_eq!(
            scenario.validate_duration(),
            Err(ScenarioError::Duration(-5.0))
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserializes_with_defaults() {
        let json = r#"{
            "damping": 0.7,
            "pendulums": [
                { "rod_length": 1.0, "initial_angle_degrees": 179.0, "pivot": { "x": -1.0, "y": 0.0 } },
                { "rod_length": 0.5, "initial_angle_degrees": 90.0, "pivot": { "x": 1.0, "y": 0.0 } }
            ]
        }"#;

        let scenario: Scenario = serde_json::from_str(json).unwrap();

        assert_eq!(scenario, Scenario::twin());
    }
}
