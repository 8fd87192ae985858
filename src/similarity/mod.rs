//! Hand-authored distinctiveness assessment of the 105 robot combinations.
//!
//! Nothing here is computed from AI behavior. The groupings, dominance
//! patterns, and redundancy counts were written down after playing against
//! the combinations; this module just holds that assessment as data and
//! renders it as a report.

mod distinct;
mod dominance;
mod group;
mod redundancy;
mod report;

pub use distinct::*;
pub use dominance::*;
pub use group::*;
pub use redundancy::*;
pub use report::*;
