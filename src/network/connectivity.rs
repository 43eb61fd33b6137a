//! Supply-network connectivity computation.
//!
//! A player's network starts at every arsenal they own. Each source casts
//! four cardinal rays; a ray stops at the first occupied cell. A friendly
//! unit hit by a ray comes online. A friendly relay hit by a ray also becomes
//! a new source and casts its own rays from its own cell, which is how
//! chains bend around corners. Enemy units block a ray and are unaffected.
//!
//! With adjacency propagation enabled, every active relay additionally brings
//! its eight neighbouring friendly units online (one hop, no re-emission).

use std::collections::VecDeque;

use super::config::NetworkConfig;
use super::state::{CellSet, NetworkState};
use crate::board::coord::{Coord, Direction, CARDINAL_DIRECTIONS};
use crate::board::grid::Grid;
use crate::board::unit::{Player, Unit};

/// Walks from `from` in `dir` and returns the first occupied cell.
///
/// The starting cell itself is not inspected. Returns `None` if the ray
/// reaches the board edge without hitting a unit.
pub fn cast_ray(grid: &Grid, from: Coord, dir: Direction) -> Option<(Coord, Unit)> {
    let mut cur = from.step(dir)?;
    loop {
        if let Some(unit) = grid.unit_at(cur) {
            return Some((cur, unit));
        }
        cur = cur.step(dir)?;
    }
}

/// Computes `player`'s network from scratch.
///
/// Total over any grid: no arsenals yields an empty network, and relay
/// cycles terminate because each relay is enqueued at most once.
pub fn compute_network(grid: &Grid, player: Player, config: &NetworkConfig) -> NetworkState {
    let mut frontier: VecDeque<Coord> = grid
        .occupied()
        .filter(|(_, u)| u.owner == player && u.is_arsenal())
        .map(|(c, _)| c)
        .collect();

    let mut online = CellSet::new();
    online.extend(frontier.iter().copied());
    let mut visited_sources = online.clone();
    let mut active_relays = CellSet::new();

    while let Some(source) = frontier.pop_front() {
        for dir in CARDINAL_DIRECTIONS {
            let Some((hit, unit)) = cast_ray(grid, source, dir) else {
                continue;
            };
            if unit.owner != player {
                continue;
            }
            online.insert(hit);
            if unit.is_relay() && visited_sources.insert(hit) {
                active_relays.insert(hit);
                frontier.push_back(hit);
            }
        }

        if config.adjacency_relay_propagation && active_relays.contains(source) {
            for adj in source.neighbors() {
                if grid.unit_at(adj).is_some_and(|u| u.owner == player) {
                    online.insert(adj);
                }
            }
        }
    }

    NetworkState {
        online,
        active_relays,
    }
}
