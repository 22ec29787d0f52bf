//! Frame-by-frame simulation of independent pendulums.
//!
//! A [`Simulation`] owns every body's state and the cumulative simulated
//! time. Each frame it calls the RK4 [`step`](crate::step) exactly
//! `substeps_per_frame` times per body, adds the step size to the clock after
//! each substep, checks every body, and then emits a [`Frame`].
//!
//! Bodies do not interact, so the order in which they are advanced does not
//! matter. With the `parallel` feature they are advanced on the `rayon`
//! thread pool.
//!
//! The loop never sleeps or consults the wall clock. Pacing frames for display
//! is up to the observer.

mod action;
mod body;
mod error;
mod frame;
mod summary;

pub use action::Action;
pub use body::Body;
pub use error::SimulationError;
pub use frame::{BodyFrame, Frame};
pub use summary::{RunStatus, RunSummary};

use swing_core::Observer;

use crate::{
    config::StepConfig,
    scenario::{Scenario, ScenarioError},
};

/// A run of independent pendulums advanced with fixed-step RK4.
#[derive(Debug, Clone, PartialEq)]
pub struct Simulation {
    bodies: Vec<Body>,
    config: StepConfig,
    sim_time: f64,
    frame: usize,
    divergence_bound: Option<f64>,
}

impl Simulation {
    /// Creates a simulation at `t = 0`.
    ///
    /// # Errors
    ///
    /// Returns [`SimulationError::NonFinite`] if any initial state is not finite.
    pub fn new(bodies: Vec<Body>, config: StepConfig) -> Result<Self, SimulationError> {
        let simulation = Self {
            bodies,
            config,
            sim_time: 0.0,
            frame: 0,
            divergence_bound: None,
        };
        simulation.check()?;
        Ok(simulation)
    }

    /// Creates a simulation from a scenario description.
    ///
    /// # Errors
    ///
    /// Returns an error if any part of the scenario is invalid.
    pub fn from_scenario(scenario: &Scenario) -> Result<Self, ScenarioError> {
        scenario.validate_duration()?;
        let bodies = scenario.bodies()?;
        let config = scenario.step_config()?;

        Ok(Self {
            bodies,
            config,
            sim_time: 0.0,
            frame: 0,
            divergence_bound: None,
        })
    }

    /// Treats any `|theta|` or `|omega|` above `bound` as a failed run.
    ///
    /// Fixed-step RK4 can go unstable for stiff parameter combinations.
    /// Without a bound such a run only fails once values overflow.
    ///
    /// # Errors
    ///
    /// Returns [`SimulationError::Bound`] if `bound` is not finite and positive.
    pub fn with_divergence_bound(mut self, bound: f64) -> Result<Self, SimulationError> {
        if !bound.is_finite() || bound <= 0.0 {
            return Err(SimulationError::Bound(bound));
        }
        self.divergence_bound = Some(bound);
        Ok(self)
    }

    /// Returns the simulated time in seconds.
    #[must_use]
    pub fn sim_time(&self) -> f64 {
        self.sim_time
    }

    /// Returns the index of the most recent frame.
    #[must_use]
    pub fn frame_index(&self) -> usize {
        self.frame
    }

    #[must_use]
    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    #[must_use]
    pub fn config(&self) -> &StepConfig {
        &self.config
    }

    /// Returns the current observable frame.
    #[must_use]
    pub fn frame(&self) -> Frame {
        Frame {
            index: self.frame,
            sim_time: self.sim_time,
            bodies: self
                .bodies
                .iter()
                .map(|body| BodyFrame {
                    state: body.state(),
                    position: body.position(),
                })
                .collect(),
        }
    }

    /// Advances every body by one frame and returns the new frame.
    ///
    /// # Errors
    ///
    /// Returns an error as soon as any body is non-finite or exceeds the
    /// divergence bound after a substep. The simulation is left at that
    /// substep and should not be advanced further.
    pub fn advance_frame(&mut self) -> Result<Frame, SimulationError> {
        let step_size = self.config.step_size();

        for _ in 0..self.config.substeps_per_frame() {
            advance_bodies(&mut self.bodies, step_size);
            self.sim_time += step_size;
            self.check()?;
        }

        self.frame += 1;
        Ok(self.frame())
    }

    /// Advances the simulation by `duration` seconds, reporting each frame.
    ///
    /// The current frame is reported first, followed by one frame per
    /// [`advance_frame`](Self::advance_frame). A duration that is not a whole
    /// number of frames is rounded up to the next frame.
    ///
    /// # Errors
    ///
    /// Returns [`SimulationError::Duration`] for a negative or non-finite
    /// duration, or the first error from [`advance_frame`](Self::advance_frame).
    pub fn run<O>(&mut self, duration: f64, mut observer: O) -> Result<RunSummary, SimulationError>
    where
        O: Observer<Frame, Action>,
    {
        if !duration.is_finite() || duration < 0.0 {
            return Err(SimulationError::Duration(duration));
        }
        let frames = self.config.frames_in(duration);

        if let Some(Action::StopEarly) = observer.observe(&self.frame()) {
            return Ok(self.summary(RunStatus::StoppedByObserver, 0));
        }

        for completed in 1..=frames {
            let frame = self.advance_frame()?;
            if let Some(Action::StopEarly) = observer.observe(&frame) {
                return Ok(self.summary(RunStatus::StoppedByObserver, completed));
            }
        }

        Ok(self.summary(RunStatus::Complete, frames))
    }

    fn summary(&self, status: RunStatus, frames: usize) -> RunSummary {
        RunSummary {
            status,
            frames,
            sim_time: self.sim_time,
        }
    }

    fn check(&self) -> Result<(), SimulationError> {
        for (index, body) in self.bodies.iter().enumerate() {
            let state = body.state();
            if !state.is_finite() {
                return Err(SimulationError::NonFinite {
                    body: index,
                    sim_time: self.sim_time,
                });
            }
            if let Some(bound) = self.divergence_bound {
                if state.theta.abs() > bound || state.omega.abs() > bound {
                    return Err(SimulationError::Diverged {
                        body: index,
                        sim_time: self.sim_time,
                        theta: state.theta,
                        omega: state.omega,
                    });
                }
            }
        }
        Ok(())
    }
}

#[cfg(not(feature = "parallel"))]
fn advance_bodies(bodies: &mut [Body], step_size: f64) {
    for body in bodies {
        body.advance(step_size);
    }
}

#[cfg(feature = "parallel")]
fn advance_bodies(bodies: &mut [Body], step_size: f64) {
    use rayon::prelude::*;

    bodies
        .par_iter_mut()
        .for_each(|body| body.advance(step_size));
}
