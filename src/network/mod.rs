//! Supply/command network engine.
//!
//! Computes, per player, which units are connected to an arsenal through
//! line-of-sight rays and relay chains. The computation is a pure function
//! of the grid; caching lives in the [`Board`](crate::board::Board) facade.

pub mod config;
pub mod connectivity;
pub mod state;

pub use config::{ConfigError, NetworkConfig};
pub use connectivity::{cast_ray, compute_network};
pub use state::{CellSet, NetworkState};
