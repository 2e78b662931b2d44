//! Headless host: runs the simulation on its fixed cadence and logs each generation.
//!
//! Stands in for a rendering host; every delta it receives would be a material swap.

use std::time::Instant;

use tracing::info;
use voxel_life::{CellChange, CellSink, Driver, SimulationConfig};

const GENERATIONS: u64 = 50;

#[derive(Default)]
struct LoggingSink {
    births: usize,
    deaths: usize,
}

impl CellSink for LoggingSink {
    fn cell_changed(&mut self, change: CellChange) {
        if change.alive {
            self.births += 1;
        } else {
            self.deaths += 1;
        }
    }

    fn generation_finished(&mut self, generation: u64, population: usize) {
        info!(
            generation,
            population,
            births = self.births,
            deaths = self.deaths,
            "generation"
        );
        self.births = 0;
        self.deaths = 0;
    }
}

fn main() -> eyre::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("voxel_life=info".parse()?),
        )
        .init();

    let config = SimulationConfig {
        threads: std::thread::available_parallelism().map_or(1, usize::from),
        ..SimulationConfig::with_dimensions(48, 48, 48)
    };

    let mut driver = Driver::new(&config, config.rng())?;
    let mut sink = LoggingSink::default();

    driver.start(Instant::now(), &mut sink);

    while driver.engine().generation() < GENERATIONS {
        let Some(due) = driver.next_due() else {
            break;
        };
        let now = Instant::now();
        if due > now {
            std::thread::sleep(due - now);
        }
        driver.poll(Instant::now(), &mut sink);
    }

    info!(
        generation = driver.engine().generation(),
        population = driver.engine().population(),
        "simulation finished"
    );
    Ok(())
}
