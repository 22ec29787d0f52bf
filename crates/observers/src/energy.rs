use swing_core::Observer;
use swing_pendulum::PendulumParameters;

use crate::traits::{CanStopEarly, HasPendulumStates};

/// Watches the mechanical energy of one pendulum for numerical drift.
///
/// The first event that carries the pendulum sets the baseline. Drift is
/// `|E - E₀| / (g/L)`, which stays meaningful when `E₀` is near zero.
/// Once drift exceeds the tolerance the monitor asks the run to stop.
///
/// Only undamped pendulums conserve energy. With damping the monitor measures
/// dissipation, and a tolerance should be chosen accordingly.
#[derive(Debug, Clone, PartialEq)]
pub struct EnergyMonitor {
    body: usize,
    params: PendulumParameters,
    tolerance: f64,
    baseline: Option<f64>,
    max_drift: f64,
}

impl EnergyMonitor {
    /// Creates a monitor for pendulum `body` with the given parameters.
    #[must_use]
    pub fn new(body: usize, params: PendulumParameters, tolerance: f64) -> Self {
        Self {
            body,
            params,
            tolerance,
            baseline: None,
            max_drift: 0.0,
        }
    }

    /// Returns the baseline energy, once one has been observed.
    #[must_use]
    pub fn baseline(&self) -> Option<f64> {
        self.baseline
    }

    /// Returns the largest drift observed so far.
    #[must_use]
    pub fn max_drift(&self) -> f64 {
        self.max_drift
    }

    /// Returns `true` if the drift has exceeded the tolerance.
    #[must_use]
    pub fn exceeded(&self) -> bool {
        self.max_drift > self.tolerance
    }

    /// Updates the monitor and returns the drift of this event, if any.
    pub fn record<E: HasPendulumStates>(&mut self, event: &E) -> Option<f64> {
        let state = event.pendulum_state(self.body)?;
        let energy = self.params.energy(&state);
        let baseline = *self.baseline.get_or_insert(energy);

        let drift = (energy - baseline).abs() / self.params.gravity_over_length();
        // NaN drift counts as exceeded.
        self.max_drift = if drift.is_nan() {
            f64::INFINITY
        } else {
            self.max_drift.max(drift)
        };
        Some(drift)
    }
}

impl<E, A> Observer<E, A> for EnergyMonitor
where
    E: HasPendulumStates,
    A: CanStopEarly,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self.record(event);
        self.exceeded().then(A::stop_early)
    }
}

impl<E, A> Observer<E, A> for &mut EnergyMonitor
where
    E: HasPendulumStates,
    A: CanStopEarly,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        Observer::<E, A>::observe(&mut **self, event)
    }
}
