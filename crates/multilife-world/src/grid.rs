//! Square board of optional species occupants.

use multilife_core::{Cell, Error, Position, Result};
use serde::{Deserialize, Serialize};

/// One generation's board state.
///
/// A `Grid` is a value: the engine never mutates one in place, it builds
/// a whole new grid from the previous one, because every cell's next
/// state reads the previous generation's neighbors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    size: usize,
    species_count: u8,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create an all-empty board.
    pub fn empty(size: usize, species_count: u8) -> Result<Self> {
        if size == 0 {
            return Err(Error::InvalidSize(size));
        }
        if species_count == 0 {
            return Err(Error::InvalidSpeciesCount(species_count));
        }
        Ok(Self {
            size,
            species_count,
            cells: vec![None; size * size],
        })
    }

    /// Build a board from fully populated rows, indexed by y then x.
    ///
    /// Every precondition violation (wrong dimensions, species index out
    /// of range) is detected here, once, and is fatal for the run.
    pub fn from_rows(size: usize, species_count: u8, rows: Vec<Vec<Cell>>) -> Result<Self> {
        let mut grid = Self::empty(size, species_count)?;

        if rows.len() != size {
            return Err(Error::DimensionMismatch {
                expected: size,
                actual: rows.len(),
            });
        }

        for (y, row) in rows.into_iter().enumerate() {
            if row.len() != size {
                return Err(Error::DimensionMismatch {
                    expected: size,
                    actual: row.len(),
                });
            }
            for (x, cell) in row.into_iter().enumerate() {
                if let Some(species) = cell {
                    if species.0 >= species_count {
                        return Err(Error::SpeciesOutOfRange {
                            species: species.0,
                            species_count,
                        });
                    }
                }
                grid.cells[y * size + x] = cell;
            }
        }

        Ok(grid)
    }

    /// Internal constructor for cells produced by the engine, which
    /// already satisfy the construction invariants.
    pub(crate) fn from_parts(size: usize, species_count: u8, cells: Vec<Cell>) -> Self {
        debug_assert_eq!(cells.len(), size * size);
        Self {
            size,
            species_count,
            cells,
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn species_count(&self) -> u8 {
        self.species_count
    }

    const fn index(&self, x: usize, y: usize) -> usize {
        y * self.size + x
    }

    /// Get the cell at a position, or `None` if it is off the board.
    pub fn get(&self, pos: Position) -> Option<Cell> {
        pos.in_bounds(self.size)
            .then(|| self.cells[self.index(pos.x as usize, pos.y as usize)])
    }

    /// In-bounds Moore neighbors of a position.
    ///
    /// The board does not wrap: off-board coordinates are skipped, so
    /// interior cells see 8 neighbors, edge cells 5 and corner cells 3.
    pub fn neighbors(&self, pos: Position) -> impl Iterator<Item = Cell> + '_ {
        (-1..=1)
            .flat_map(|dy| (-1..=1).map(move |dx| (dx, dy)))
            .filter(|&(dx, dy)| dx != 0 || dy != 0)
            .filter_map(move |(dx, dy)| self.get(pos.add(dx, dy)))
    }

    /// Iterator over all positions in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        let size = self.size as i32;
        (0..size).flat_map(move |y| (0..size).map(move |x| Position::new(x, y)))
    }

    /// Iterator over all cells with their positions, row-major.
    pub fn iter(&self) -> impl Iterator<Item = (Position, Cell)> + '_ {
        self.positions().map(move |pos| {
            (pos, self.cells[self.index(pos.x as usize, pos.y as usize)])
        })
    }

    /// Occupied-cell count per species.
    pub fn census(&self) -> Vec<usize> {
        let mut counts = vec![0; self.species_count as usize];
        for cell in self.cells.iter().flatten() {
            counts[cell.index()] += 1;
        }
        counts
    }

    /// Rows indexed by y then x, for serialization collaborators.
    pub fn to_rows(&self) -> Vec<Vec<Cell>> {
        self.cells.chunks(self.size).map(<[Cell]>::to_vec).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use multilife_core::Species;

    fn row(cells: &[Option<u8>]) -> Vec<Cell> {
        cells.iter().map(|c| c.map(Species)).collect()
    }

    #[test]
    fn test_empty_grid() {
        let grid = Grid::empty(4, 2).unwrap();
        assert_eq!(grid.size(), 4);
        assert_eq!(grid.species_count(), 2);
        assert!(grid.iter().all(|(_, cell)| cell.is_none()));
    }

    #[test]
    fn test_zero_size_rejected() {
        assert!(matches!(Grid::empty(0, 1), Err(Error::InvalidSize(0))));
    }

    #[test]
    fn test_zero_species_rejected() {
        assert!(matches!(
            Grid::empty(3, 0),
            Err(Error::InvalidSpeciesCount(0))
        ));
    }

    #[test]
    fn test_from_rows() {
        let grid = Grid::from_rows(
            2,
            2,
            vec![row(&[Some(0), None]), row(&[None, Some(1)])],
        )
        .unwrap();
        assert_eq!(grid.get(Position::new(0, 0)), Some(Some(Species(0))));
        assert_eq!(grid.get(Position::new(1, 0)), Some(None));
        assert_eq!(grid.get(Position::new(1, 1)), Some(Some(Species(1))));
    }

    #[test]
    fn test_row_count_mismatch_rejected() {
        let result = Grid::from_rows(2, 1, vec![row(&[None, None])]);
        assert!(matches!(
            result,
            Err(Error::DimensionMismatch {
                expected: 2,
                actual: 1
            })
        ));
    }

    #[test]
    fn test_row_length_mismatch_rejected() {
        let result = Grid::from_rows(2, 1, vec![row(&[None, None]), row(&[None])]);
        assert!(matches!(
            result,
            Err(Error::DimensionMismatch {
                expected: 2,
                actual: 1
            })
        ));
    }

    #[test]
    fn test_species_out_of_range_rejected() {
        let result = Grid::from_rows(2, 2, vec![row(&[Some(2), None]), row(&[None, None])]);
        assert!(matches!(
            result,
            Err(Error::SpeciesOutOfRange {
                species: 2,
                species_count: 2
            })
        ));
    }

    #[test]
    fn test_get_out_of_bounds() {
        let grid = Grid::empty(3, 1).unwrap();
        assert_eq!(grid.get(Position::new(-1, 0)), None);
        assert_eq!(grid.get(Position::new(0, 3)), None);
        assert_eq!(grid.get(Position::new(1, 1)), Some(None));
    }

    #[test]
    fn test_neighbor_counts() {
        let grid = Grid::empty(5, 1).unwrap();
        // Interior cell sees all 8 neighbors
        assert_eq!(grid.neighbors(Position::new(2, 2)).count(), 8);
        // Corners see 3
        assert_eq!(grid.neighbors(Position::new(0, 0)).count(), 3);
        assert_eq!(grid.neighbors(Position::new(4, 4)).count(), 3);
        assert_eq!(grid.neighbors(Position::new(4, 0)).count(), 3);
        // Non-corner edge cells see 5
        assert_eq!(grid.neighbors(Position::new(2, 0)).count(), 5);
        assert_eq!(grid.neighbors(Position::new(0, 3)).count(), 5);
    }

    #[test]
    fn test_one_by_one_grid_has_no_neighbors() {
        let grid = Grid::empty(1, 1).unwrap();
        assert_eq!(grid.neighbors(Position::new(0, 0)).count(), 0);
    }

    #[test]
    fn test_census() {
        let grid = Grid::from_rows(
            2,
            3,
            vec![row(&[Some(0), Some(2)]), row(&[Some(0), None])],
        )
        .unwrap();
        assert_eq!(grid.census(), vec![2, 0, 1]);
    }

    #[test]
    fn test_to_rows_round_trip() {
        let rows = vec![row(&[Some(1), None]), row(&[None, Some(0)])];
        let grid = Grid::from_rows(2, 2, rows.clone()).unwrap();
        assert_eq!(grid.to_rows(), rows);
    }

    #[test]
    fn test_positions_are_row_major() {
        let grid = Grid::empty(2, 1).unwrap();
        let positions: Vec<_> = grid.positions().collect();
        assert_eq!(
            positions,
            vec![
                Position::new(0, 0),
                Position::new(1, 0),
                Position::new(0, 1),
                Position::new(1, 1),
            ]
        );
    }
}
