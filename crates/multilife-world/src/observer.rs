//! Observation seam for intermediate generations.

use crate::grid::Grid;

/// Receives each completed generation, purely for presentation.
///
/// The engine exposes every intermediate grid through this trait but
/// never depends on what an implementor does with it.
pub trait GenerationObserver {
    fn on_generation(&mut self, generation: u64, grid: &Grid);
}

/// Observer that discards every generation.
pub struct NullObserver;

impl GenerationObserver for NullObserver {
    fn on_generation(&mut self, _generation: u64, _grid: &Grid) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    struct CountingObserver {
        seen: Vec<u64>,
    }

    impl GenerationObserver for CountingObserver {
        fn on_generation(&mut self, generation: u64, _grid: &Grid) {
            self.seen.push(generation);
        }
    }

    #[test]
    fn test_observer_sees_every_generation() {
        let grid = Grid::empty(3, 1).unwrap();
        let mut engine = crate::Engine::new(0);
        let mut observer = CountingObserver { seen: Vec::new() };
        engine.run_with_observer(grid, 4, &mut observer);
        assert_eq!(observer.seen, vec![0, 1, 2, 3]);
    }
}
