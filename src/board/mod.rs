//! Board representation.
//!
//! Contains coordinates, units, the occupancy grid, and the `Board` facade
//! that couples the grid to a cached network computation.

pub mod coord;
pub mod grid;
pub mod state;
pub mod unit;

pub use coord::{Coord, Direction, CARDINAL_DIRECTIONS, CELL_COUNT, COLS, ROWS};
pub use grid::{BoardError, Grid};
pub use state::Board;
pub use unit::{Player, Unit, UnitStats, UnitType, ALL_PLAYERS, ALL_UNIT_TYPES, UNIT_STATS};
