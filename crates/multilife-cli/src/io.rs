//! World-file input and output collaborators.
//!
//! The core only sees the `(config, grid)` tuple; the on-disk JSON
//! layout lives entirely in this module.

use multilife_core::{Result, Species, WorldConfig};
use multilife_world::Grid;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// On-disk world snapshot. `cells` is indexed by y, then x.
#[derive(Debug, Serialize, Deserialize)]
pub struct WorldFile {
    pub size: usize,
    pub species_count: u8,
    #[serde(default)]
    pub generations: u64,
    #[serde(default)]
    pub seed: u64,
    pub cells: Vec<Vec<Option<u8>>>,
}

/// Parse a world file, funneling everything through the grid's
/// validating constructor so malformed input fails before any evolution.
pub fn parse_world(raw: &str) -> Result<(WorldConfig, Grid)> {
    let file: WorldFile = serde_json::from_str(raw)?;

    let config = WorldConfig {
        size: file.size,
        species_count: file.species_count,
        generations: file.generations,
        seed: file.seed,
    };
    config.validate()?;

    let rows = file
        .cells
        .into_iter()
        .map(|row| row.into_iter().map(|c| c.map(Species)).collect())
        .collect();
    let grid = Grid::from_rows(file.size, file.species_count, rows)?;

    Ok((config, grid))
}

pub fn read_world(path: &Path) -> Result<(WorldConfig, Grid)> {
    parse_world(&fs::read_to_string(path)?)
}

fn world_to_string(grid: &Grid) -> Result<String> {
    let file = WorldFile {
        size: grid.size(),
        species_count: grid.species_count(),
        // The final snapshot has no evolution left to run
        generations: 0,
        seed: 0,
        cells: grid
            .to_rows()
            .into_iter()
            .map(|row| row.into_iter().map(|c| c.map(|s| s.0)).collect())
            .collect(),
    };
    Ok(serde_json::to_string_pretty(&file)?)
}

pub fn write_world(path: &Path, grid: &Grid) -> Result<()> {
    fs::write(path, world_to_string(grid)?)?;
    Ok(())
}
