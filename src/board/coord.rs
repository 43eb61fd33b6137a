//! Board coordinates and grid geometry.
//!
//! The board is a fixed 20 x 25 grid. Coordinates are 0-indexed
//! `(row, col)` pairs; row 0 is the northern edge. Cells are stored
//! row-major in flat arrays, so in-bounds coordinates map to a dense index.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Number of rows on the board.
pub const ROWS: usize = 20;

/// Number of columns on the board.
pub const COLS: usize = 25;

/// Total number of cells on the board.
pub const CELL_COUNT: usize = ROWS * COLS;

/// A cell position on the board.
///
/// A `Coord` may lie outside the board; grid operations bounds-check it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

/// One of the four cardinal ray directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    South,
    East,
    West,
}

/// All cardinal directions, in ray-casting order.
pub const CARDINAL_DIRECTIONS: [Direction; 4] = [
    Direction::North,
    Direction::South,
    Direction::East,
    Direction::West,
];

/// Row/column offsets of the eight king-adjacent cells.
const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

impl Direction {
    /// Returns the `(row, col)` delta of one step in this direction.
    pub const fn delta(self) -> (isize, isize) {
        match self {
            Direction::North => (-1, 0),
            Direction::South => (1, 0),
            Direction::East => (0, 1),
            Direction::West => (0, -1),
        }
    }
}

impl Coord {
    pub const fn new(row: usize, col: usize) -> Self {
        Coord { row, col }
    }

    /// Returns true if the coordinate lies on the board.
    pub const fn in_bounds(self) -> bool {
        self.row < ROWS && self.col < COLS
    }

    /// Row-major cell index. Only meaningful for in-bounds coordinates.
    pub const fn index(self) -> usize {
        self.row * COLS + self.col
    }

    /// Inverse of [`Coord::index`].
    pub const fn from_index(idx: usize) -> Self {
        Coord {
            row: idx / COLS,
            col: idx % COLS,
        }
    }

    /// Applies a signed offset, returning `None` if the result leaves the board.
    fn offset(self, dr: isize, dc: isize) -> Option<Coord> {
        let row = self.row.checked_add_signed(dr)?;
        let col = self.col.checked_add_signed(dc)?;
        let next = Coord { row, col };
        next.in_bounds().then_some(next)
    }

    /// Moves one cell in `dir`. Returns `None` at the board edge.
    pub fn step(self, dir: Direction) -> Option<Coord> {
        let (dr, dc) = dir.delta();
        self.offset(dr, dc)
    }

    /// Iterates over the in-bounds orthogonal and diagonal neighbours.
    pub fn neighbors(self) -> impl Iterator<Item = Coord> {
        NEIGHBOR_OFFSETS
            .into_iter()
            .filter_map(move |(dr, dc)| self.offset(dr, dc))
    }

    /// Spreadsheet-style label: column letters then 1-based row, e.g. `A1`.
    pub fn label(self) -> String {
        let mut letters = Vec::new();
        let mut n = self.col + 1;
        while n > 0 {
            let rem = (n - 1) % 26;
            letters.push(b'A' + rem as u8);
            n = (n - 1) / 26;
        }
        letters.reverse();
        let mut out: String = letters.into_iter().map(char::from).collect();
        out.push_str(&(self.row + 1).to_string());
        out
    }

    /// Parses a label produced by [`Coord::label`]. Case-insensitive.
    ///
    /// Returns `None` for malformed labels or cells off the board.
    pub fn from_label(s: &str) -> Option<Coord> {
        let split = s.find(|c: char| c.is_ascii_digit())?;
        let (letters, digits) = s.split_at(split);
        if letters.is_empty() || !letters.chars().all(|c| c.is_ascii_alphabetic()) {
            return None;
        }

        let mut col = 0usize;
        for c in letters.chars() {
            let v = (c.to_ascii_uppercase() as u8 - b'A') as usize + 1;
            col = col.checked_mul(26)?.checked_add(v)?;
        }
        let row: usize = digits.parse().ok()?;
        if row == 0 {
            return None;
        }

        let coord = Coord::new(row - 1, col - 1);
        coord.in_bounds().then_some(coord)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
