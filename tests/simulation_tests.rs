// tests/simulation_tests.rs

use hadamard_collapse::{
    Amplitudes, BasisLabel, Decision, DecisionSource, IterationRecord, ScriptedSource, SeededSource, SimError,
    SimulationConfig, Simulator, hadamard, measure, sample_counts,
};
use num_complex::Complex;
use num_traits::Zero;
use std::f64::consts::FRAC_1_SQRT_2;

const TEST_TOLERANCE: f64 = 1e-12;

/// Chi-square critical value for 1 degree of freedom at p = 0.001.
const CHI_SQUARE_CRITICAL_1DF: f64 = 10.828;

fn plus_state() -> Amplitudes {
    let s = Complex::new(FRAC_1_SQRT_2, 0.0);
    Amplitudes::new(s, s)
}

fn decisions(records: &[IterationRecord]) -> Vec<Decision> {
    records.iter().map(|r| r.decision).collect()
}

#[test]
fn test_initial_transform_gives_equal_probabilities() {
    let state = hadamard(&Amplitudes::ground());
    assert!(state.approx_eq(&plus_state(), TEST_TOLERANCE), "Got {}", state);
    assert!((state.probability(BasisLabel::Zero) - 0.5).abs() < TEST_TOLERANCE);
    assert!((state.probability(BasisLabel::One) - 0.5).abs() < TEST_TOLERANCE);
}

#[test]
fn test_ground_state_measurement_is_certain() -> Result<(), SimError> {
    let counts = sample_counts(&Amplitudes::ground(), 5_000, &mut SeededSource::new(17))?;
    assert_eq!(counts.count(BasisLabel::Zero), 5_000);
    assert_eq!(counts.count(BasisLabel::One), 0);
    Ok(())
}

#[test]
fn test_equal_superposition_converges_to_fifty_fifty() -> Result<(), SimError> {
    let counts = sample_counts(&plus_state(), 10_000, &mut SeededSource::new(42))?;
    let chi_square = counts.chi_square(0.5);
    assert!(
        chi_square < CHI_SQUARE_CRITICAL_1DF,
        "Observed {} rejects 50/50 (chi-square {:.3})",
        counts,
        chi_square
    );
    assert!((counts.frequency(BasisLabel::Zero) - 0.5).abs() < 0.03);
    Ok(())
}

#[test]
fn test_zero_state_measurement_fails() {
    let zero = Amplitudes::new(Complex::zero(), Complex::zero());
    let outcome = measure(&zero, &mut SeededSource::new(0));
    assert_eq!(outcome, Err(SimError::InvalidState { total_probability: 0.0 }));
}

#[test]
fn test_scripted_trace() -> Result<(), SimError> {
    // it1: T (0.2), skip (0.8) | it2: hold (0.5), skip (0.2) | it3: T (0.49), measure (0.19), sample 0.1
    let source = ScriptedSource::new([0.2, 0.8, 0.5, 0.2, 0.49, 0.19, 0.1]);
    let simulator = Simulator::new(SimulationConfig::default())?;
    let records: Vec<IterationRecord> = simulator.evolve(source).collect::<Result<_, _>>()?;

    assert_eq!(records.len(), 3);
    assert_eq!(
        decisions(&records),
        vec![Decision::Transform, Decision::Hold, Decision::Transform]
    );
    assert!(records[0].after.approx_eq(&plus_state(), TEST_TOLERANCE));
    assert_eq!(records[1].before, records[1].after);
    // Second transform returns |+> to |0>, so the sample must land on |0>
    assert!(records[2].after.approx_eq(&Amplitudes::ground(), TEST_TOLERANCE));
    assert_eq!(records[2].outcome, Some(BasisLabel::Zero));
    assert!(records[..2].iter().all(|r| !r.is_terminal()));
    Ok(())
}

#[test]
fn test_iteration_numbers_are_sequential() -> Result<(), SimError> {
    let simulator = Simulator::new(SimulationConfig::default().with_seed(31))?;
    let result = simulator.run()?;
    for (i, record) in result.records().iter().enumerate() {
        assert_eq!(record.iteration, i as u64 + 1);
    }
    for pair in result.records().windows(2) {
        assert_eq!(pair[0].after, pair[1].before, "State must carry over between iterations");
    }
    Ok(())
}

#[test]
fn test_seeded_runs_are_reproducible() -> Result<(), SimError> {
    for seed in [0, 1, 7, 1234, u64::MAX] {
        let simulator = Simulator::new(SimulationConfig::default().with_seed(seed))?;
        let first = simulator.run()?;
        let second = simulator.run()?;
        assert_eq!(first, second, "Seed {} produced diverging runs", seed);
    }
    Ok(())
}

#[test]
fn test_runs_terminate_with_a_label() -> Result<(), SimError> {
    let simulator = Simulator::default();
    let mut total_iterations = 0;
    let runs = 500;
    for seed in 0..runs {
        let result = simulator.run_with(SeededSource::new(seed))?;
        let last = result.records().last().ok_or(SimError::SourceExhausted { draws: 0 })?;
        assert!(last.is_terminal());
        assert_eq!(last.outcome, Some(result.outcome()));
        assert!(BasisLabel::ALL.contains(&result.outcome()));
        total_iterations += result.iterations();
    }
    // Expected iteration count is 1 / 0.2 = 5
    let mean = total_iterations as f64 / runs as f64;
    assert!((3.5..6.5).contains(&mean), "Mean iteration count {} far from 5", mean);
    Ok(())
}

#[test]
fn test_draw_order_per_iteration() -> Result<(), SimError> {
    // Non-measuring iterations consume exactly two draws
    let mut source = ScriptedSource::new([0.9, 0.9, 0.9, 0.9, 0.9, 0.0, 0.0]);
    let simulator = Simulator::default();
    let result = simulator.run_with(&mut source)?;
    assert_eq!(result.iterations(), 3);
    assert_eq!(source.drawn(), 7);
    assert_eq!(source.draw(), Err(SimError::SourceExhausted { draws: 7 }));
    Ok(())
}

#[test]
fn test_always_transform_alternates() -> Result<(), SimError> {
    let config = SimulationConfig::default().with_transform_probability(1.0);
    let simulator = Simulator::new(config)?;
    let result = simulator.run_with(SeededSource::new(3))?;
    for record in result.records() {
        assert_eq!(record.decision, Decision::Transform);
        let expected = if record.iteration % 2 == 1 { plus_state() } else { Amplitudes::ground() };
        assert!(record.after.approx_eq(&expected, 1e-9));
    }
    Ok(())
}
