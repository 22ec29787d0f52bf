//! Physical properties of the integrated pendulum.

use approx::{assert_abs_diff_eq, assert_relative_eq};
use swing_pendulum::{
    Frame, ParameterError, PendulumParameters, PendulumState, RunStatus, Scenario, Simulation,
    StepConfig, derivative, step,
};

fn integrate(
    initial: PendulumState,
    params: &PendulumParameters,
    step_size: f64,
    steps: usize,
) -> Vec<PendulumState> {
    let mut states = Vec::with_capacity(steps + 1);
    states.push(initial);
    let mut state = initial;
    for _ in 0..steps {
        state = step(&state, params, step_size);
        states.push(state);
    }
    states
}

fn max_energy_drift(params: &PendulumParameters, step_size: f64, duration: f64) -> f64 {
    let initial = PendulumState::new(1.0, 0.0);
    let e0 = params.energy(&initial);
    let steps = (duration / step_size).round() as usize;

    integrate(initial, params, step_size, steps)
        .iter()
        .map(|state| (params.energy(state) - e0).abs())
        .fold(0.0, f64::max)
}

#[test]
fn equilibrium_never_moves() {
    let params = PendulumParameters::new(1.0, 9.81, 0.0).unwrap();

    let states = integrate(PendulumState::at_rest(), &params, 0.001, 5_000);

    assert!(states.iter().all(|s| s.theta == 0.0 && s.omega == 0.0));
    assert_eq!(
        derivative(&PendulumState::at_rest(), &params),
        Default::default()
    );
}

#[test]
fn undamped_energy_is_conserved() {
    let params = PendulumParameters::new(1.0, 9.81, 0.0).unwrap();

    let drift = max_energy_drift(&params, 0.001, 10.0);

    assert!(drift < 1e-10, "drift = {drift}");
}

#[test]
fn energy_drift_shrinks_rapidly_with_step_size() {
    let params = PendulumParameters::new(1.0, 9.81, 0.0).unwrap();

    let coarse = max_energy_drift(&params, 0.01, 10.0);
    let fine = max_energy_drift(&params, 0.005, 10.0);

    assert!(coarse / fine > 10.0, "coarse = {coarse}, fine = {fine}");
}

#[test]
fn near_inverted_release_conserves_energy_without_damping() {
    let params = PendulumParameters::new(1.0, 9.81, 0.0).unwrap();
    let initial = PendulumState::from_degrees(179.0, 0.0);
    let e0 = params.energy(&initial);

    let states = integrate(initial, &params, 0.001, 10_000);

    for state in &states {
        assert_abs_diff_eq!(params.energy(state), e0, epsilon = 1e-9);
    }
}

#[test]
fn damping_dissipates_energy() {
    let params = PendulumParameters::new(1.0, 9.81, 0.7).unwrap();

    let states = integrate(PendulumState::new(1.0, 0.0), &params, 0.001, 10_000);

    for pair in states.windows(2) {
        let before = params.energy(&pair[0]);
        let after = params.energy(&pair[1]);
        assert!(after <= before + 1e-12, "energy rose from {before} to {after}");
    }
}

#[test]
fn damped_amplitude_decreases_every_swing() {
    let params = PendulumParameters::new(1.0, 9.81, 0.7).unwrap();

    let states = integrate(PendulumState::new(1.0, 0.0), &params, 0.001, 20_000);

    // Turning points are where omega changes sign.
    let peaks: Vec<f64> = states
        .windows(2)
        .filter(|pair| (pair[0].omega > 0.0) != (pair[1].omega > 0.0))
        .map(|pair| pair[1].theta.abs())
        .collect();

    assert!(peaks.len() > 10);
    assert!(peaks.windows(2).all(|pair| pair[1] < pair[0]), "{peaks:?}");
    assert_relative_eq!(peaks[0], 0.680_85, epsilon = 1e-3);
}

#[test]
fn zero_step_size_is_identity() {
    let params = PendulumParameters::new(0.5, 9.81, 0.7).unwrap();
    let state = PendulumState::new(-2.0, 3.0);

    assert_eq!(step(&state, &params, 0.0), state);
}

#[test]
fn zero_rod_length_fails_before_integration() {
    assert_eq!(
        PendulumParameters::new(0.0, 9.81, 0.7),
        Err(ParameterError::RodLength(0.0))
    );

    let mut scenario = Scenario::twin();
    scenario.pendulums[0].rod_length = 0.0;
    assert!(Simulation::from_scenario(&scenario).is_err());
}

#[test]
fn twin_scenario_runs_to_completion() {
    let scenario = Scenario::twin();
    let mut simulation = Simulation::from_scenario(&scenario).unwrap();

    let mut last: Option<Frame> = None;
    let summary = simulation
        .run(scenario.duration, |frame: &Frame| {
            last = Some(frame.clone());
            None
        })
        .unwrap();

    assert_eq!(summary.status, RunStatus::Complete);
    assert_eq!(summary.frames, 1000);
    assert_relative_eq!(summary.sim_time, 10.0, epsilon = 1e-9);

    let last = last.unwrap();
    assert_eq!(last.index, 1000);
    assert!(last.bodies.iter().all(|body| body.state.is_finite()));

    // Both pendulums have lost most of their energy after ten seconds.
    let left = last.state(0).unwrap();
    let right = last.state(1).unwrap();
    assert_abs_diff_eq!(left.theta, 0.107_43, epsilon = 1e-4);
    assert_abs_diff_eq!(right.theta, 0.028_91, epsilon = 1e-4);
}

#[test]
fn frame_duration_follows_frame_rate() {
    let config = StepConfig::from_frame_rate(100.0, 10).unwrap();
    let params = PendulumParameters::new(1.0, 9.81, 0.7).unwrap();
    let body = swing_pendulum::Body::new(params, PendulumState::from_degrees(30.0, 0.0));
    let mut simulation = Simulation::new(vec![body], config).unwrap();

    let frame = simulation.advance_frame().unwrap();

    let expected = integrate(PendulumState::from_degrees(30.0, 0.0), &params, 0.001, 10);
    assert_eq!(frame.state(0), expected.last().copied());
    assert_relative_eq!(frame.sim_time, config.frame_duration(), epsilon = 1e-15);
}
