//! Rendering and emission of the three test artifacts.
//!
//! Everything in here is pure string templating over the loaded sequence
//! document and the 105 robot combinations; the only side effects live in
//! [`Bundle::write`]. The JavaScript harness is rendered as text for a
//! human to paste into a browser console, where it drives the game's
//! global functions (`setDifficulty`, `setStrategy`, `setPersonality`,
//! `resetGame`, `submitMove`, `updateUI`).

mod bundle;
mod harness;
mod manual;
mod page;

pub use bundle::*;
pub use harness::*;
pub use manual::*;
pub use page::*;

/// Browser-console test driver.
pub const JS_FILE: &str = "optimal_sequence_test.js";
/// Standalone HTML viewer embedding the driver.
pub const HTML_FILE: &str = "optimal_sequence_test.html";
/// Markdown cheat sheet for manual play-throughs.
pub const MD_FILE: &str = "manual_testing_instructions.md";
