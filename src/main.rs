//! Narrated run of the Hadamard walk: transforms at random until a random
//! measurement collapses the qubit.

use hadamard_collapse::{Amplitudes, BasisLabel, Decision, SimError, SimulationConfig, Simulator};
use tracing_subscriber::EnvFilter;

fn print_amplitudes(state: &Amplitudes, prefix: &str) {
    for label in BasisLabel::ALL {
        println!(
            "  {}: {}Amplitude = {:.4}  |  Probability = {:.4}",
            label,
            prefix,
            state.amplitude(label),
            state.probability(label)
        );
    }
}

fn main() -> Result<(), SimError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let simulator = Simulator::new(SimulationConfig::default())?;
    let config = simulator.config();
    let source = simulator.source();

    println!("--- Hadamard walk with probabilistic collapse ---");
    println!(
        "Each iteration: {:.0}% chance of a Hadamard transform, {:.0}% chance of measurement.",
        config.transform_probability * 100.0,
        config.measurement_probability * 100.0
    );
    println!("Seed: {}", source.seed());
    println!("\nInitial state: {}", Amplitudes::ground());

    for record in simulator.evolve(source) {
        let record = record?;
        println!("\n=== Iteration {} ===", record.iteration);
        println!("Current amplitudes:");
        print_amplitudes(&record.before, "");

        match record.decision {
            Decision::Transform => {
                println!("\n>> Applying the Hadamard transform.");
                print_amplitudes(&record.after, "New ");
            }
            Decision::Hold => println!("\n>> Leaving the state unchanged."),
        }

        match record.outcome {
            Some(outcome) => {
                println!("\n>> Measuring.");
                println!("Collapsed to {}", outcome);
            }
            None => println!("\n>> Measurement postponed; the state stays in superposition."),
        }
    }

    println!("\nMeasurement complete. End of simulation.");
    Ok(())
}
