use thiserror::Error;
use uom::si::{f64::Time, time::second};

/// Slack applied when converting a run duration into a whole number of frames.
const FRAME_COUNT_TOLERANCE: f64 = 1e-9;

/// Integration control for a simulation run.
///
/// The step size is usually derived from the output cadence rather than chosen
/// on its own: `step_size = 1 / (frame_rate * substeps_per_frame)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepConfig {
    step_size: f64,
    substeps_per_frame: usize,
}

/// Errors that can occur when validating a step config.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum ConfigError {
    #[error("step size must be finite and positive, got {0} s")]
    StepSize(f64),

    #[error("substeps per frame must be at least 1")]
    Substeps,

    #[error("frame rate must be finite and positive, got {0} Hz")]
    FrameRate(f64),
}

impl Default for StepConfig {
    fn default() -> Self {
        // 100 frames per second, 10 substeps each: h = 1 ms.
        Self::from_frame_rate(100.0, 10).unwrap()
    }
}

impl StepConfig {
    /// Creates a config from an explicit step size in seconds.
    ///
    /// # Errors
    ///
    /// Returns an error if `step_size` is not finite and positive, or if
    /// `substeps_per_frame` is zero.
    pub fn new(step_size: f64, substeps_per_frame: usize) -> Result<Self, ConfigError> {
        if !step_size.is_finite() || step_size <= 0.0 {
            return Err(ConfigError::StepSize(step_size));
        }
        if substeps_per_frame == 0 {
            return Err(ConfigError::Substeps);
        }

        Ok(Self {
            step_size,
            substeps_per_frame,
        })
    }

    /// Creates a config whose frames are emitted at `frame_rate` per second.
    ///
    /// # Errors
    ///
    /// Returns an error if `frame_rate` is not finite and positive, or if
    /// `substeps_per_frame` is zero.
    pub fn from_frame_rate(frame_rate: f64, substeps_per_frame: usize) -> Result<Self, ConfigError> {
        if !frame_rate.is_finite() || frame_rate <= 0.0 {
            return Err(ConfigError::FrameRate(frame_rate));
        }
        if substeps_per_frame == 0 {
            return Err(ConfigError::Substeps);
        }

        #[allow(clippy::cast_precision_loss)]
        let step_size = 1.0 / (frame_rate * substeps_per_frame as f64);
        Self::new(step_size, substeps_per_frame)
    }

    /// Creates a config from a dimensioned step size.
    ///
    /// # Errors
    ///
    /// Same as [`StepConfig::new`].
    pub fn from_time(step_size: Time, substeps_per_frame: usize) -> Result<Self, ConfigError> {
        Self::new(step_size.get::<second>(), substeps_per_frame)
    }

    /// Returns the integration step size `h` in seconds.
    #[must_use]
    pub fn step_size(&self) -> f64 {
        self.step_size
    }

    /// Returns the number of integration steps per output frame.
    #[must_use]
    pub fn substeps_per_frame(&self) -> usize {
        self.substeps_per_frame
    }

    /// Returns the simulated time covered by one frame, in seconds.
    #[must_use]
    pub fn frame_duration(&self) -> f64 {
        #[allow(clippy::cast_precision_loss)]
        let substeps = self.substeps_per_frame as f64;
        self.step_size * substeps
    }

    /// Returns the number of frames needed to cover `duration` seconds.
    ///
    /// Partial frames round up. A duration that is a whole number of frames,
    /// up to floating-point noise, is not rounded up again.
    #[must_use]
    pub fn frames_in(&self, duration: f64) -> usize {
        let frames = (duration / self.frame_duration() - FRAME_COUNT_TOLERANCE).ceil();
        if frames > 0.0 {
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let frames = frames as usize;
            frames
        } else {
            0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::time::millisecond;

    #[test]
    fn default_matches_hundred_frames_per_second() {
        let config = StepConfig::default();

        assert_relative_eq!(config.step_size(), 0.001);
        assert_eq!(config.substeps_per_frame(), 10);
        assert_relative_eq!(config.frame_duration(), 0.01);
    }

    #[test]
    fn from_frame_rate_derives_step_size() {
        let config = StepConfig::from_frame_rate(50.0, 4).unwrap();

        assert_relative_eq!(config.step_size(), 0.005);
        assert_relative_eq!(config.frame_duration(), 0.02);
    }

    #[test]
    fn from_time_converts_units() {
        let config = StepConfig::from_time(Time::new::<millisecond>(2.0), 5).unwrap();

        assert_relative_eq!(config.step_size(), 0.002);
        assert_eq!(config.substeps_per_frame(), 5);
    }

    #[test]
    fn rejects_invalid_values() {
        assert_eq!(StepConfig::new(0.0, 10), Err(ConfigError::StepSize(0.0)));
        assert_eq!(StepConfig::new(-0.1, 10), Err(ConfigError::StepSize(-0.1)));
        assert!(matches!(
            StepConfig::new(f64::NAN, 10),
            Err(ConfigError::StepSize(_))
        ));
        assert_eq!(StepConfig::new(0.001, 0), Err(ConfigError::Substeps));
        assert_eq!(
            StepConfig::from_frame_rate(0.0, 10),
            Err(ConfigError::FrameRate(0.0))
        );
        assert_eq!(StepConfig::from_frame_rate(100.0, 0), Err(ConfigError::Substeps));
    }

    #[test]
    fn frames_in_rounds_partial_frames_up() {
        let config = StepConfig::default();

        assert_eq!(config.frames_in(10.0), 1000);
        assert_eq!(config.frames_in(0.015), 2);
        assert_eq!(config.frames_in(0.01), 1);
        assert_eq!(config.frames_in(0.0), 0);
        assert_eq!(config.frames_in(-1.0), 0);
    }
}
