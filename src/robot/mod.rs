//! The robot opponent configuration space.
//!
//! A robot is defined by three independent options layered on top of each
//! other: a base decision algorithm (difficulty), a risk posture
//! (strategy), and a behavioral modifier (personality). Every distinct
//! triple is one opponent the game can field; enumerating all of them
//! yields the 105 combinations the test artifacts drive.

mod combination;
mod difficulty;
mod personality;
mod strategy;

pub use combination::*;
pub use difficulty::*;
pub use personality::*;
pub use strategy::*;
