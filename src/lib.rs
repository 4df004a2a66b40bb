//! Ledgewalker: a hierarchical state-machine character controller for 2D
//! platformers, with a wolf enemy and a practice room.

pub mod combat;
pub mod content;
pub mod core;
pub mod enemy;
pub mod error;
pub mod fsm;
pub mod movement;
pub mod player;
pub mod presentation;

#[cfg(test)]
mod testing;
