//! Per-player network state.
//!
//! Membership sets are fixed-size boolean arrays indexed by cell, so
//! lookups are O(1) and a rebuild never allocates.

use crate::board::coord::{Coord, CELL_COUNT};

/// A set of board cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellSet {
    members: [bool; CELL_COUNT],
    len: usize,
}

impl Default for CellSet {
    fn default() -> Self {
        Self::new()
    }
}

impl CellSet {
    pub fn new() -> Self {
        CellSet {
            members: [false; CELL_COUNT],
            len: 0,
        }
    }

    /// Adds `coord`. Returns true if it was not already present.
    /// Off-board coordinates are ignored.
    pub fn insert(&mut self, coord: Coord) -> bool {
        if !coord.in_bounds() {
            return false;
        }
        let slot = &mut self.members[coord.index()];
        if *slot {
            return false;
        }
        *slot = true;
        self.len += 1;
        true
    }

    pub fn contains(&self, coord: Coord) -> bool {
        coord.in_bounds() && self.members[coord.index()]
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Iterates members in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = Coord> + '_ {
        self.members
            .iter()
            .enumerate()
            .filter(|&(_, &m)| m)
            .map(|(idx, _)| Coord::from_index(idx))
    }

    /// Returns true if every member of `self` is also in `other`.
    pub fn is_subset(&self, other: &CellSet) -> bool {
        self.iter().all(|c| other.contains(c))
    }
}

impl Extend<Coord> for CellSet {
    fn extend<I: IntoIterator<Item = Coord>>(&mut self, iter: I) {
        for c in iter {
            self.insert(c);
        }
    }
}

/// The computed network of one player.
///
/// `active_relays` is always a subset of `online`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NetworkState {
    pub online: CellSet,
    pub active_relays: CellSet,
}

impl NetworkState {
    /// Creates an empty network: nothing online.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_online(&self, coord: Coord) -> bool {
        self.online.contains(coord)
    }

    pub fn is_active_relay(&self, coord: Coord) -> bool {
        self.active_relays.contains(coord)
    }

    pub fn online_count(&self) -> usize {
        self.online.len()
    }

    pub fn online_cells(&self) -> impl Iterator<Item = Coord> + '_ {
        self.online.iter()
    }

    pub fn active_relay_cells(&self) -> impl Iterator<Item = Coord> + '_ {
        self.active_relays.iter()
    }
}
