//! Probe protocol command parser.
//!
//! Parses incoming text lines into structured `Command` variants that the
//! probe main loop dispatches on. Cells are addressed by spreadsheet-style
//! labels such as `A1` or `T5`.

use crate::board::coord::Coord;
use crate::board::unit::{Player, UnitType};

/// A parsed probe command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Synchronization ping; the probe replies `readyok`.
    IsReady,

    /// Set an option: `setoption name <id> [value <x>]`.
    SetOption { name: String, value: Option<String> },

    /// Discard the current board and start an empty one.
    NewBoard,

    /// Create a unit and place it: `place <cell> <owner> <unit_type>`.
    Place {
        coord: Coord,
        owner: Player,
        unit_type: UnitType,
    },

    /// Remove the unit at a cell: `remove <cell>`.
    Remove { coord: Coord },

    /// Recompute the networks if the board changed.
    Enable,

    /// Ask whether the unit at a cell is online for a player.
    Online { coord: Coord, owner: Player },

    /// Ask whether the unit at a cell is an active relay.
    Relay { coord: Coord },

    /// Print both players' networks as JSON.
    Dump,

    /// Terminate the probe process.
    Quit,
}

/// Parses a single line of input into a `Command`.
///
/// Returns `None` for empty lines or unrecognized commands. Malformed
/// arguments for known commands also return `None` after logging to stderr.
pub fn parse_command(line: &str) -> Option<Command> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let (&head, _) = tokens.split_first()?;

    match head {
        "isready" => Some(Command::IsReady),
        "newboard" => Some(Command::NewBoard),
        "enable" => Some(Command::Enable),
        "dump" => Some(Command::Dump),
        "quit" => Some(Command::Quit),

        "setoption" => parse_setoption(&tokens),
        "place" => parse_place(&tokens),
        "remove" => parse_remove(&tokens),
        "online" => parse_online(&tokens),
        "relay" => parse_relay(&tokens),

        other => {
            eprintln!("unknown command: {}", other);
            None
        }
    }
}

/// Parses a cell label, logging on failure.
fn parse_cell(s: &str) -> Option<Coord> {
    let coord = Coord::from_label(s);
    if coord.is_none() {
        eprintln!("invalid cell: '{}'", s);
    }
    coord
}

fn parse_player(s: &str) -> Option<Player> {
    let player = Player::from_name(s);
    if player.is_none() {
        eprintln!("unknown player: '{}'", s);
    }
    player
}

/// Parses `setoption name <id> [value <x>]`.
fn parse_setoption(tokens: &[&str]) -> Option<Command> {
    if tokens.len() < 3 || tokens[1] != "name" {
        eprintln!("malformed setoption: expected 'setoption name <id> [value <x>]'");
        return None;
    }

    let value_idx = tokens.iter().position(|&t| t == "value");

    let (name, value) = match value_idx {
        Some(vi) => {
            let name_parts = &tokens[2..vi];
            let value_parts = &tokens[vi + 1..];
            if name_parts.is_empty() {
                eprintln!("malformed setoption: empty name");
                return None;
            }
            let value = if value_parts.is_empty() {
                None
            } else {
                Some(value_parts.join(" "))
            };
            (name_parts.join(" "), value)
        }
        None => (tokens[2..].join(" "), None),
    };

    Some(Command::SetOption { name, value })
}

/// Parses `place <cell> <owner> <unit_type>`.
fn parse_place(tokens: &[&str]) -> Option<Command> {
    if tokens.len() != 4 {
        eprintln!("malformed place: expected 'place <cell> <owner> <unit_type>'");
        return None;
    }
    let coord = parse_cell(tokens[1])?;
    let owner = parse_player(tokens[2])?;
    let unit_type = match UnitType::from_name(tokens[3]) {
        Some(t) => t,
        None => {
            eprintln!("unknown unit type: '{}'", tokens[3]);
            return None;
        }
    };
    Some(Command::Place {
        coord,
        owner,
        unit_type,
    })
}

/// Parses `remove <cell>`.
fn parse_remove(tokens: &[&str]) -> Option<Command> {
    if tokens.len() != 2 {
        eprintln!("malformed remove: expected 'remove <cell>'");
        return None;
    }
    let coord = parse_cell(tokens[1])?;
    Some(Command::Remove { coord })
}

/// Parses `online <cell> <owner>`.
fn parse_online(tokens: &[&str]) -> Option<Command> {
    if tokens.len() != 3 {
        eprintln!("malformed online: expected 'online <cell> <owner>'");
        return None;
    }
    let coord = parse_cell(tokens[1])?;
    let owner = parse_player(tokens[2])?;
    Some(Command::Online { coord, owner })
}

/// Parses `relay <cell>`.
fn parse_relay(tokens: &[&str]) -> Option<Command> {
    if tokens.len() != 2 {
        eprintln!("malformed relay: expected 'relay <cell>'");
        return None;
    }
    let coord = parse_cell(tokens[1])?;
    Some(Command::Relay { coord })
}
