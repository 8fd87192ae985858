//! Test-Artifact Generator Binary
//!
//! Reads the precomputed optimal-sequence document and writes three
//! artifacts: the browser-console test harness, a standalone HTML viewer,
//! and the manual-testing instructions. A missing or malformed input
//! document aborts before anything is written.

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use rpsbench::*;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Optimal sequences JSON produced by the upstream optimizer.
    #[arg(long, default_value = "best_sequences_quick_ref.json")]
    input: std::path::PathBuf,
    /// Directory the three artifacts are written to.
    #[arg(long, default_value = ".")]
    out_dir: std::path::PathBuf,
}

fn main() -> Result<()> {
    log();
    let args = Args::parse();
    let library = sequence::Library::load(&args.input)?;
    for (key, seq) in library.iter() {
        log::info!(
            "loaded {}: {} ({:.1}% expected win rate, beats {} combinations)",
            key,
            seq.name,
            seq.avg_win_rate,
            seq.beats_count
        );
    }
    artifact::Bundle::render(&library).write(&args.out_dir)?;
    println!();
    println!("{}", "Next steps:".bold());
    println!("  1. Open {} in your browser", artifact::HTML_FILE);
    println!("  2. Copy the JavaScript code from the page");
    println!("  3. Open the game in another tab");
    println!("  4. Paste the code into the browser console (F12)");
    println!("  5. Run: optimalTester.startTest(25) or optimalTester.startTest(50)");
    Ok(())
}
