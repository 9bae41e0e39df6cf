use std::io;

use mdproc_runner::{Simulation, SimulationConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Processing messages own stdout; the logger writes to stderr
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let simulation = Simulation::with_config(SimulationConfig::default())?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let results = simulation.run(&mut out)?;

    log::info!(
        "Processed {} items from {} producers",
        results.items,
        results.producers
    );
    Ok(())
}
