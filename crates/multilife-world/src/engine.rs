//! Generation-stepping evolution engine.
//!
//! Each generation is a pure function of the previous one, except for
//! the uniform random tie-break when several species are birth-eligible
//! on the same cell. The random source is a seeded ChaCha8 stream owned
//! by the engine, so runs are reproducible.

use crate::grid::Grid;
use crate::observer::{GenerationObserver, NullObserver};
use multilife_core::{Cell, Position, Species};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;
use tracing::{debug, info};

pub struct Engine {
    rng: ChaCha8Rng,
    parallel: bool,
}

impl Engine {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            parallel: false,
        }
    }

    /// Evaluate each generation's rows in parallel instead of serially.
    pub fn with_parallel(mut self) -> Self {
        self.parallel = true;
        self
    }

    /// Next state of a single cell, from the previous generation's
    /// neighbor values only.
    ///
    /// Calling this off the board is a contract violation; internal
    /// iteration always stays within bounds.
    pub fn evolve_cell(&mut self, grid: &Grid, pos: Position) -> Cell {
        debug_assert!(pos.in_bounds(grid.size()), "evolve_cell off board at {pos}");
        next_cell(grid, pos, &mut self.rng)
    }

    /// Build the next generation as an entirely new grid.
    ///
    /// Cells are evaluated row-major with one RNG draw per cell that has
    /// a non-empty birth-candidate set, so the draw order is defined.
    pub fn step(&mut self, grid: &Grid) -> Grid {
        let cells = grid
            .positions()
            .map(|pos| next_cell(grid, pos, &mut self.rng))
            .collect();
        Grid::from_parts(grid.size(), grid.species_count(), cells)
    }

    /// Row-partitioned parallel variant of [`step`](Self::step).
    ///
    /// All reads target the immutable previous grid and every cell
    /// writes a disjoint slot of the new one. Each cell draws from its
    /// own ChaCha8 stream derived from a per-generation seed, so a fixed
    /// engine seed still yields a deterministic result.
    pub fn step_parallel(&mut self, grid: &Grid) -> Grid {
        let generation_seed: u64 = self.rng.gen();
        let size = grid.size();
        let cells: Vec<Cell> = (0..size)
            .into_par_iter()
            .flat_map_iter(move |y| (0..size).map(move |x| Position::new(x as i32, y as i32)))
            .map(|pos| {
                let cell_index = pos.y as u64 * size as u64 + pos.x as u64;
                let stream = generation_seed ^ cell_index.wrapping_mul(0x9e37_79b9_7f4a_7c15);
                let mut rng = ChaCha8Rng::seed_from_u64(stream);
                next_cell(grid, pos, &mut rng)
            })
            .collect();
        Grid::from_parts(size, grid.species_count(), cells)
    }

    /// Evolve the grid for the given number of generations.
    ///
    /// Zero generations returns the initial grid unchanged.
    pub fn run(&mut self, grid: Grid, generations: u64) -> Grid {
        self.run_with_observer(grid, generations, &mut NullObserver)
    }

    /// Like [`run`](Self::run), handing each completed generation to the
    /// observer before the next one starts.
    pub fn run_with_observer(
        &mut self,
        mut grid: Grid,
        generations: u64,
        observer: &mut dyn GenerationObserver,
    ) -> Grid {
        info!(
            generations,
            size = grid.size(),
            species = grid.species_count(),
            "Starting evolution"
        );

        for generation in 0..generations {
            grid = if self.parallel {
                self.step_parallel(&grid)
            } else {
                self.step(&grid)
            };
            observer.on_generation(generation, &grid);

            if generation % 100 == 0 {
                debug!(
                    generation,
                    population = grid.census().iter().sum::<usize>(),
                    "Generation complete"
                );
            }
        }

        info!(
            generations,
            final_population = grid.census().iter().sum::<usize>(),
            "Evolution complete"
        );
        grid
    }
}

/// The transition rule for one cell.
///
/// Survival: an occupied cell with 2 or 3 same-species neighbors keeps
/// its occupant. Otherwise every species with exactly 3 neighbors around
/// the cell is a birth candidate and one is chosen uniformly; with no
/// candidates the cell ends up empty. A non-surviving occupant can be
/// replaced by another species this way.
fn next_cell<R: Rng>(grid: &Grid, pos: Position, rng: &mut R) -> Cell {
    let cell = match grid.get(pos) {
        Some(cell) => cell,
        None => return None,
    };

    let mut same_species = 0u32;
    let mut neighbor_counts = vec![0u32; grid.species_count() as usize];

    for neighbor in grid.neighbors(pos) {
        // Option equality: two empty cells compare equal here, but the
        // survival check below only fires for an occupied cell, so the
        // empty-matches-empty count never changes an outcome.
        if neighbor == cell {
            same_species += 1;
        }
        if let Some(species) = neighbor {
            neighbor_counts[species.index()] += 1;
        }
    }

    if cell.is_some() && (2..=3).contains(&same_species) {
        return cell;
    }

    let candidates: Vec<Species> = neighbor_counts
        .iter()
        .enumerate()
        .filter(|&(_, &count)| count == 3)
        .map(|(index, _)| Species(index as u8))
        .collect();

    candidates.choose(rng).copied()
}
