//! Precomputed optimal move sequences.
//!
//! An upstream optimizer searches for fixed move lists that maximize win
//! rate across every robot combination and writes the winners to a JSON
//! quick-reference document. This module only loads and models that
//! document; the search itself lives elsewhere.

mod library;
mod movement;
mod record;

pub use library::*;
pub use movement::*;
pub use record::*;
