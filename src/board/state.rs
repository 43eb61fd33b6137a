//! The `Board` facade.
//!
//! Owns the occupancy grid together with both players' cached networks.
//! Every mutation goes through one internal wrapper that marks the networks
//! dirty; only [`Board::enable_networks`] recomputes them. Queries read the
//! last computed networks, so they are stale between a mutation and the
//! next `enable_networks` call.

use super::coord::Coord;
use super::grid::{BoardError, Grid};
use super::unit::{Player, Unit, UnitType, ALL_PLAYERS};
use crate::network::{compute_network, NetworkConfig, NetworkState};

/// Occupancy grid plus lazily recomputed supply networks.
#[derive(Debug, Clone)]
pub struct Board {
    grid: Grid,
    networks: [NetworkState; 2],
    network_dirty: bool,
    config: NetworkConfig,
    recomputations: u64,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Creates an empty board with the default network rules.
    pub fn new() -> Self {
        Self::with_config(NetworkConfig::default())
    }

    /// Creates an empty board. The networks start dirty, so the first
    /// `enable_networks` call always computes.
    pub fn with_config(config: NetworkConfig) -> Self {
        Board {
            grid: Grid::new(),
            networks: [NetworkState::new(), NetworkState::new()],
            network_dirty: true,
            config,
            recomputations: 0,
        }
    }

    /// Applies a grid mutation, marking the networks dirty if it succeeds.
    fn mutate<T>(
        &mut self,
        f: impl FnOnce(&mut Grid) -> Result<T, BoardError>,
    ) -> Result<T, BoardError> {
        let out = f(&mut self.grid)?;
        self.network_dirty = true;
        Ok(out)
    }

    // -----------------------------------------------------------------------
    // Mutation
    // -----------------------------------------------------------------------

    pub fn place_unit(&mut self, coord: Coord, unit: Unit) -> Result<(), BoardError> {
        self.mutate(|g| g.place_unit(coord, unit))
    }

    pub fn remove_unit(&mut self, coord: Coord) -> Result<Unit, BoardError> {
        self.mutate(|g| g.remove_unit(coord))
    }

    pub fn create_and_place_unit(
        &mut self,
        coord: Coord,
        unit_type: UnitType,
        owner: Player,
    ) -> Result<Unit, BoardError> {
        self.mutate(|g| g.create_and_place_unit(coord, unit_type, owner))
    }

    /// Toggles adjacency propagation. Marks the networks dirty if the value
    /// changes.
    pub fn set_adjacency_relay_propagation(&mut self, enabled: bool) {
        if self.config.adjacency_relay_propagation != enabled {
            self.config.adjacency_relay_propagation = enabled;
            self.network_dirty = true;
        }
    }

    // -----------------------------------------------------------------------
    // Network
    // -----------------------------------------------------------------------

    /// Rebuilds both networks if dirty. Returns true if a rebuild happened.
    pub fn enable_networks(&mut self) -> bool {
        if !self.network_dirty {
            return false;
        }
        for player in ALL_PLAYERS {
            self.networks[player.index()] = compute_network(&self.grid, player, &self.config);
        }
        self.network_dirty = false;
        self.recomputations += 1;
        true
    }

    /// True if the unit at `coord` belongs to `owner` and was online at the
    /// last computation. Never fails; off-board or empty cells are offline.
    pub fn is_unit_online(&self, coord: Coord, owner: Player) -> bool {
        match self.grid.unit_at(coord) {
            Some(unit) if unit.owner == owner => self.networks[owner.index()].is_online(coord),
            _ => false,
        }
    }

    /// True if `coord` was an active relay of its current occupant's owner at
    /// the last computation.
    pub fn is_relay_online(&self, coord: Coord) -> bool {
        self.grid
            .unit_at(coord)
            .is_some_and(|unit| self.networks[unit.owner.index()].is_active_relay(coord))
    }

    // -----------------------------------------------------------------------
    // Accessors
    // -----------------------------------------------------------------------

    pub fn get_unit(&self, coord: Coord) -> Result<Option<Unit>, BoardError> {
        self.grid.get_unit(coord)
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn config(&self) -> NetworkConfig {
        self.config
    }

    pub fn is_network_dirty(&self) -> bool {
        self.network_dirty
    }

    /// The last computed network for `player`.
    pub fn network(&self, player: Player) -> &NetworkState {
        &self.networks[player.index()]
    }

    /// Number of full network rebuilds performed so far.
    pub fn recomputations(&self) -> u64 {
        self.recomputations
    }
}
