//! Command implementations for the qb-matchup CLI

pub mod aliases;
pub mod common;
pub mod players;
pub mod predict;
pub mod rank;
pub mod teams;
