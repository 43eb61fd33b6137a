//! Fixed-size occupancy grid.
//!
//! The grid is the single owner of unit placement: each in-bounds cell
//! holds at most one unit. Mutations are bounds-checked and report
//! failures through [`BoardError`].

use thiserror::Error;

use super::coord::{Coord, CELL_COUNT};
use super::unit::{Player, Unit, UnitType};

/// Errors raised by grid lookups and mutations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("coordinate {0} is outside the board")]
    OutOfBounds(Coord),

    #[error("cell {0} is already occupied")]
    Occupied(Coord),

    #[error("cell {0} is empty")]
    EmptyCell(Coord),
}

/// Cell-indexed unit storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: [Option<Unit>; CELL_COUNT],
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

impl Grid {
    /// Creates an empty grid.
    pub fn new() -> Self {
        Grid {
            cells: [None; CELL_COUNT],
        }
    }

    fn checked_index(coord: Coord) -> Result<usize, BoardError> {
        if coord.in_bounds() {
            Ok(coord.index())
        } else {
            Err(BoardError::OutOfBounds(coord))
        }
    }

    /// Stores `unit` at `coord`. Fails if the cell is occupied.
    pub fn place_unit(&mut self, coord: Coord, unit: Unit) -> Result<(), BoardError> {
        let idx = Self::checked_index(coord)?;
        if self.cells[idx].is_some() {
            return Err(BoardError::Occupied(coord));
        }
        self.cells[idx] = Some(unit);
        Ok(())
    }

    /// Removes and returns the unit at `coord`. Fails if the cell is empty.
    pub fn remove_unit(&mut self, coord: Coord) -> Result<Unit, BoardError> {
        let idx = Self::checked_index(coord)?;
        self.cells[idx].take().ok_or(BoardError::EmptyCell(coord))
    }

    /// Returns the unit at `coord`, if any.
    pub fn get_unit(&self, coord: Coord) -> Result<Option<Unit>, BoardError> {
        let idx = Self::checked_index(coord)?;
        Ok(self.cells[idx])
    }

    /// Builds a unit from its type and owner and places it.
    pub fn create_and_place_unit(
        &mut self,
        coord: Coord,
        unit_type: UnitType,
        owner: Player,
    ) -> Result<Unit, BoardError> {
        let unit = Unit::new(unit_type, owner);
        self.place_unit(coord, unit)?;
        Ok(unit)
    }

    /// Lenient lookup: `None` for empty or off-board cells.
    pub fn unit_at(&self, coord: Coord) -> Option<Unit> {
        if coord.in_bounds() {
            self.cells[coord.index()]
        } else {
            None
        }
    }

    /// Iterates over occupied cells in row-major order.
    pub fn occupied(&self) -> impl Iterator<Item = (Coord, Unit)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter_map(|(idx, cell)| cell.map(|u| (Coord::from_index(idx), u)))
    }

    /// Number of units on the grid.
    pub fn count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|c| c.is_none())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::coord::{COLS, ROWS};

    fn infantry(owner: Player) -> Unit {
        Unit::new(UnitType::Infantry, owner)
    }

    #[test]
    fn empty_grid_has_no_units() {
        let grid = Grid::new();
        assert!(grid.is_empty());
        assert_eq!(grid.count(), 0);
        assert_eq!(grid.get_unit(Coord::new(3, 3)), Ok(None));
    }

    #[test]
    fn place_and_get() {
        let mut grid = Grid::new();
        let c = Coord::new(2, 7);
        grid.place_unit(c, infantry(Player::North)).unwrap();
        assert_eq!(grid.get_unit(c), Ok(Some(infantry(Player::North))));
        assert_eq!(grid.count(), 1);
    }

    #[test]
    fn place_rejects_occupied() {
        let mut grid = Grid::new();
        let c = Coord::new(0, 0);
        grid.place_unit(c, infantry(Player::North)).unwrap();
        assert_eq!(
            grid.place_unit(c, infantry(Player::South)),
            Err(BoardError::Occupied(c))
        );
        // The original occupant is untouched.
        assert_eq!(grid.unit_at(c), Some(infantry(Player::North)));
    }

    #[test]
    fn remove_returns_unit() {
        let mut grid = Grid::new();
        let c = Coord::new(5, 5);
        grid.create_and_place_unit(c, UnitType::Relay, Player::South).unwrap();
        let removed = grid.remove_unit(c).unwrap();
        assert_eq!(removed, Unit::new(UnitType::Relay, Player::South));
        assert_eq!(grid.remove_unit(c), Err(BoardError::EmptyCell(c)));
    }

    #[test]
    fn out_of_bounds_everywhere() {
        let mut grid = Grid::new();
        let bad = Coord::new(ROWS, 0);
        let bad2 = Coord::new(0, COLS);
        assert_eq!(grid.place_unit(bad, infantry(Player::North)), Err(BoardError::OutOfBounds(bad)));
        assert_eq!(grid.remove_unit(bad2), Err(BoardError::OutOfBounds(bad2)));
        assert_eq!(grid.get_unit(bad), Err(BoardError::OutOfBounds(bad)));
        assert_eq!(
            grid.create_and_place_unit(bad2, UnitType::Cannon, Player::South),
            Err(BoardError::OutOfBounds(bad2))
        );
        assert_eq!(grid.unit_at(bad), None);
    }

    #[test]
    fn occupied_iterates_row_major() {
        let mut grid = Grid::new();
        grid.place_unit(Coord::new(3, 1), infantry(Player::South)).unwrap();
        grid.place_unit(Coord::new(0, 9), infantry(Player::North)).unwrap();
        let coords: Vec<Coord> = grid.occupied().map(|(c, _)| c).collect();
        assert_eq!(coords, vec![Coord::new(0, 9), Coord::new(3, 1)]);
    }

    #[test]
    fn error_messages() {
        let e = BoardError::Occupied(Coord::new(1, 2));
        assert_eq!(e.to_string(), "cell (1, 2) is already occupied");
    }
}
