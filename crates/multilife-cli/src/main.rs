//! multilife: evolve a multi-species Game of Life world from a file.

mod io;
mod render;
mod telemetry;

use anyhow::{Context, Result};
use clap::Arg;
use multilife_world::{Engine, NullObserver};
use std::path::Path;
use tracing::info;

fn main() -> Result<()> {
    telemetry::init_telemetry();

    let matches = clap::App::new("multilife")
        .about("Evolves a multi-species Game of Life world for a fixed number of generations")
        .arg(
            Arg::with_name("input")
                .long("input")
                .short("i")
                .takes_value(true)
                .required(true)
                .help("world file to load"),
        )
        .arg(
            Arg::with_name("output")
                .long("output")
                .short("o")
                .takes_value(true)
                .required(true)
                .help("where to write the final world"),
        )
        .arg(
            Arg::with_name("seed")
                .long("seed")
                .takes_value(true)
                .help("override the world file's random seed"),
        )
        .arg(
            Arg::with_name("render")
                .long("render")
                .help("draw each generation to the terminal"),
        )
        .arg(
            Arg::with_name("parallel")
                .long("parallel")
                .help("evaluate each generation's rows in parallel"),
        )
        .get_matches();

    let input = Path::new(matches.value_of("input").unwrap());
    let output = Path::new(matches.value_of("output").unwrap());

    let (mut config, grid) = io::read_world(input)
        .with_context(|| format!("failed to load world from {}", input.display()))?;

    if let Some(seed) = matches.value_of("seed") {
        config.seed = seed.parse().context("--seed must be an unsigned integer")?;
    }

    info!(
        size = config.size,
        species = config.species_count,
        generations = config.generations,
        seed = config.seed,
        "World loaded"
    );

    let mut engine = Engine::new(config.seed);
    if matches.is_present("parallel") {
        engine = engine.with_parallel();
    }

    let final_grid = if matches.is_present("render") {
        let mut renderer = render::TerminalRenderer::new();
        engine.run_with_observer(grid, config.generations, &mut renderer)
    } else {
        engine.run_with_observer(grid, config.generations, &mut NullObserver)
    };

    io::write_world(output, &final_grid)
        .with_context(|| format!("failed to write world to {}", output.display()))?;

    info!(output = %output.display(), "Final world written");
    Ok(())
}
