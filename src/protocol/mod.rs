//! Probe protocol handling.
//!
//! A line-oriented text protocol for driving a `Board` from scripts:
//! placing and removing units, recomputing networks, and querying
//! online status.

pub mod parser;

pub use parser::{parse_command, Command};
