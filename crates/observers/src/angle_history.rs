use swing_core::Observer;

use crate::traits::{HasPendulumStates, HasSimTime};

/// Records the angle of one pendulum over time.
///
/// Angles are stored in degrees, ready to hand to a plotting routine. Events
/// that do not carry the tracked pendulum are ignored.
///
/// # Example
///
/// ```ignore
/// let mut history = AngleHistory::new(0);
/// simulation.run(10.0, &mut history)?;
///
/// for (t, theta) in history.points() {
///     println!("{t:.2},{theta:.3}");
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AngleHistory {
    body: usize,
    times: Vec<f64>,
    angles: Vec<f64>,
}

impl AngleHistory {
    /// Creates an empty history tracking pendulum `body`.
    #[must_use]
    pub fn new(body: usize) -> Self {
        Self {
            body,
            times: Vec::new(),
            angles: Vec::new(),
        }
    }

    /// Returns the tracked pendulum index.
    #[must_use]
    pub fn body(&self) -> usize {
        self.body
    }

    /// Records the angle of the tracked pendulum if the event carries it.
    pub fn record<E: HasSimTime + HasPendulumStates>(&mut self, event: &E) {
        if let Some(state) = event.pendulum_state(self.body) {
            self.times.push(event.sim_time());
            self.angles.push(state.theta_degrees());
        }
    }

    /// Simulated times, in seconds.
    #[must_use]
    pub fn times(&self) -> &[f64] {
        &self.times
    }

    /// Recorded angles, in degrees.
    #[must_use]
    pub fn angles_degrees(&self) -> &[f64] {
        &self.angles
    }

    /// Iterates over `(time, angle in degrees)` pairs.
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.times.iter().copied().zip(self.angles.iter().copied())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.times.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }
}

impl<E, A> Observer<E, A> for AngleHistory
where
    E: HasSimTime + HasPendulumStates,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self.record(event);
        None
    }
}

/// Allows `&mut AngleHistory` to be handed to a run that takes its observer by
/// value, so the history can be read afterwards.
impl<E, A> Observer<E, A> for &mut AngleHistory
where
    E: HasSimTime + HasPendulumStates,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self.record(event);
        None
    }
}
