//! Similarity Report Binary
//!
//! Prints the hand-authored distinctiveness assessment of all 105 robot
//! combinations. No arguments, no inputs; the report is literal data.

use rpsbench::*;

fn main() {
    log();
    print!("{}", similarity::Report);
}
