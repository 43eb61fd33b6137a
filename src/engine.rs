//! Probe session state.
//!
//! Holds the current board and network configuration between commands
//! and writes protocol replies.

use std::io::{self, Write};

use serde::Serialize;

use crate::board::coord::Coord;
use crate::board::state::Board;
use crate::board::unit::{Player, UnitType};
use crate::network::{NetworkConfig, NetworkState};
use crate::protocol::parser::Command;

/// Name of the option controlling adjacency propagation.
pub const ADJACENCY_OPTION: &str = "AdjacencyRelayPropagation";

/// JSON shape of one player's network in a `dump` reply.
#[derive(Debug, Serialize)]
struct NetworkReport {
    online: Vec<String>,
    active_relays: Vec<String>,
}

impl NetworkReport {
    fn from_state(state: &NetworkState) -> Self {
        NetworkReport {
            online: state.online_cells().map(Coord::label).collect(),
            active_relays: state.active_relay_cells().map(Coord::label).collect(),
        }
    }
}

#[derive(Debug, Serialize)]
struct DumpReport {
    dirty: bool,
    north: NetworkReport,
    south: NetworkReport,
}

/// Holds the mutable state of the probe between commands.
#[derive(Debug, Clone)]
pub struct Session {
    pub board: Board,
    config: NetworkConfig,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(NetworkConfig::default())
    }
}

impl Session {
    /// Creates a session with an empty board.
    pub fn new(config: NetworkConfig) -> Self {
        Session {
            board: Board::with_config(config),
            config,
        }
    }

    /// Dispatches one command. Returns `Ok(false)` when the session should end.
    pub fn handle<W: Write>(&mut self, cmd: Command, out: &mut W) -> io::Result<bool> {
        match cmd {
            Command::IsReady => writeln!(out, "readyok")?,
            Command::SetOption { name, value } => self.set_option(&name, value.as_deref()),
            Command::NewBoard => self.new_board(),
            Command::Place {
                coord,
                owner,
                unit_type,
            } => self.place(coord, owner, unit_type, out)?,
            Command::Remove { coord } => self.remove(coord, out)?,
            Command::Enable => self.enable(out)?,
            Command::Online { coord, owner } => {
                let online = self.board.is_unit_online(coord, owner);
                writeln!(out, "online {} {}", coord.label(), online)?;
            }
            Command::Relay { coord } => {
                let online = self.board.is_relay_online(coord);
                writeln!(out, "relay {} {}", coord.label(), online)?;
            }
            Command::Dump => self.dump(out)?,
            Command::Quit => return Ok(false),
        }
        out.flush()?;
        Ok(true)
    }

    /// Replaces the board with an empty one using the current options.
    pub fn new_board(&mut self) {
        self.board = Board::with_config(self.config);
    }

    /// Applies a `setoption`. Unknown options and bad values are logged and ignored.
    pub fn set_option(&mut self, name: &str, value: Option<&str>) {
        if name != ADJACENCY_OPTION {
            eprintln!("unknown option: '{}'", name);
            return;
        }
        match value.map(str::parse::<bool>) {
            Some(Ok(enabled)) => {
                self.config.adjacency_relay_propagation = enabled;
                self.board.set_adjacency_relay_propagation(enabled);
            }
            _ => eprintln!("option {} expects true or false", ADJACENCY_OPTION),
        }
    }

    fn place<W: Write>(
        &mut self,
        coord: Coord,
        owner: Player,
        unit_type: UnitType,
        out: &mut W,
    ) -> io::Result<()> {
        if let Err(e) = self.board.create_and_place_unit(coord, unit_type, owner) {
            writeln!(out, "error {}", e)?;
        }
        Ok(())
    }

    fn remove<W: Write>(&mut self, coord: Coord, out: &mut W) -> io::Result<()> {
        if let Err(e) = self.board.remove_unit(coord) {
            writeln!(out, "error {}", e)?;
        }
        Ok(())
    }

    fn enable<W: Write>(&mut self, out: &mut W) -> io::Result<()> {
        let status = if self.board.enable_networks() {
            "recomputed"
        } else {
            "cached"
        };
        writeln!(out, "enabled {}", status)
    }

    fn dump<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let report = DumpReport {
            dirty: self.board.is_network_dirty(),
            north: NetworkReport::from_state(self.board.network(Player::North)),
            south: NetworkReport::from_state(self.board.network(Player::South)),
        };
        let json = serde_json::to_string(&report).map_err(io::Error::other)?;
        writeln!(out, "network {}", json)
    }
}
