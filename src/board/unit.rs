//! Unit types, ownership, and combat statistics.
//!
//! A unit is a plain value: its type and owning player. Everything else
//! (attack, defense, movement, sight) is looked up from a static table
//! indexed by the `UnitType` discriminant.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the two opposing sides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Player {
    North = 0,
    South = 1,
}

/// Both players in index order.
pub const ALL_PLAYERS: [Player; 2] = [Player::North, Player::South];

impl Player {
    /// Returns the opposing player.
    pub const fn opposite(self) -> Player {
        match self {
            Player::North => Player::South,
            Player::South => Player::North,
        }
    }

    /// Array index for per-player tables.
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Lowercase name used in text protocols.
    pub const fn name(self) -> &'static str {
        match self {
            Player::North => "north",
            Player::South => "south",
        }
    }

    /// Parses a player from its name (case-insensitive).
    pub fn from_name(s: &str) -> Option<Player> {
        match s.to_ascii_lowercase().as_str() {
            "north" => Some(Player::North),
            "south" => Some(Player::South),
            _ => None,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The kind of a unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum UnitType {
    Infantry = 0,
    Cavalry = 1,
    Cannon = 2,
    Arsenal = 3,
    Relay = 4,
    SwiftCannon = 5,
    SwiftRelay = 6,
}

/// All unit types in discriminant order.
pub const ALL_UNIT_TYPES: [UnitType; 7] = [
    UnitType::Infantry,
    UnitType::Cavalry,
    UnitType::Cannon,
    UnitType::Arsenal,
    UnitType::Relay,
    UnitType::SwiftCannon,
    UnitType::SwiftRelay,
];

/// Fixed combat and movement statistics for a unit type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UnitStats {
    pub attack: u8,
    pub defense: u8,
    pub move_range: u8,
    pub sight_range: u8,
}

const fn stats(attack: u8, defense: u8, move_range: u8, sight_range: u8) -> UnitStats {
    UnitStats {
        attack,
        defense,
        move_range,
        sight_range,
    }
}

/// Stats table indexed by `UnitType as usize`.
pub const UNIT_STATS: [UnitStats; 7] = [
    stats(4, 6, 1, 2), // Infantry
    stats(4, 5, 2, 2), // Cavalry
    stats(5, 8, 1, 3), // Cannon
    stats(0, 0, 0, 0), // Arsenal
    stats(0, 1, 1, 0), // Relay
    stats(5, 8, 2, 3), // SwiftCannon
    stats(0, 1, 2, 0), // SwiftRelay
];

impl UnitType {
    /// Returns the stats row for this type.
    pub const fn stats(self) -> UnitStats {
        UNIT_STATS[self as usize]
    }

    /// Relay-class units re-emit network rays once they are reached.
    pub const fn is_relay(self) -> bool {
        matches!(self, UnitType::Relay | UnitType::SwiftRelay)
    }

    /// Arsenal-class units are the roots of a player's network.
    pub const fn is_arsenal(self) -> bool {
        matches!(self, UnitType::Arsenal)
    }

    pub const fn is_swift(self) -> bool {
        matches!(self, UnitType::SwiftCannon | UnitType::SwiftRelay)
    }

    /// Snake-case identifier used in text protocols.
    pub const fn name(self) -> &'static str {
        match self {
            UnitType::Infantry => "infantry",
            UnitType::Cavalry => "cavalry",
            UnitType::Cannon => "cannon",
            UnitType::Arsenal => "arsenal",
            UnitType::Relay => "relay",
            UnitType::SwiftCannon => "swift_cannon",
            UnitType::SwiftRelay => "swift_relay",
        }
    }

    /// Parses a unit type from its identifier (case-insensitive).
    pub fn from_name(s: &str) -> Option<UnitType> {
        let lower = s.to_ascii_lowercase();
        ALL_UNIT_TYPES.into_iter().find(|t| t.name() == lower)
    }
}

impl fmt::Display for UnitType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A unit on the board. Its identity is the cell it occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Unit {
    pub unit_type: UnitType,
    pub owner: Player,
}

impl Unit {
    pub const fn new(unit_type: UnitType, owner: Player) -> Self {
        Unit { unit_type, owner }
    }

    pub const fn stats(self) -> UnitStats {
        self.unit_type.stats()
    }

    pub const fn attack(self) -> u8 {
        self.stats().attack
    }

    pub const fn defense(self) -> u8 {
        self.stats().defense
    }

    pub const fn move_range(self) -> u8 {
        self.stats().move_range
    }

    pub const fn sight_range(self) -> u8 {
        self.stats().sight_range
    }

    pub const fn is_relay(self) -> bool {
        self.unit_type.is_relay()
    }

    pub const fn is_arsenal(self) -> bool {
        self.unit_type.is_arsenal()
    }
}
