//! Kriegspiel board and supply-network engine.
//!
//! Exposes the board occupancy model, the connectivity engine, and the
//! probe protocol used by integration tests and the binary entry point.

pub mod board;
pub mod engine;
pub mod network;
pub mod protocol;
