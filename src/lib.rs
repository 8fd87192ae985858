//! Test tooling for a rock-paper-scissors web game's AI opponents.
//!
//! The game exposes a configurable robot built from three layered options
//! (difficulty, strategy, personality). This crate ships two auxiliary
//! tools around that configuration space: a qualitative similarity report
//! over all 105 combinations, and a generator that turns a precomputed
//! optimal-sequence document into browser-pasteable test artifacts.
//!
//! The game engine, the AI decision logic, and the sequence optimizer all
//! live elsewhere. Everything here either prints authored analysis or
//! renders text for a browser to execute later.

pub mod artifact;
pub mod robot;
pub mod sequence;
pub mod similarity;

/// Win rates and similarity scores, in percent.
pub type WinRate = f64;

// ============================================================================
// GENERATED HARNESS TIMING
// Delays are settle times for the external game UI, not measured guarantees.
// ============================================================================
/// Milliseconds between moves while the harness replays a sequence.
pub const MOVE_DELAY_MS: u64 = 500;
/// Milliseconds between robot combinations.
pub const COMBO_DELAY_MS: u64 = 2000;
/// Milliseconds the harness waits for a game reset to settle.
pub const RESET_DELAY_MS: u64 = 1000;

/// Initialize terminal logging at INFO level.
pub fn log() {
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    simplelog::TermLogger::init(
        log::LevelFilter::Info,
        config,
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )
    .expect("initialize logger");
}
