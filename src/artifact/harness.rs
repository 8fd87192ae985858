use crate::robot::Combination;
use crate::sequence::Library;

/// Render the browser-console test driver with the sequence document and
/// the full combination list embedded as JSON.
///
/// The driver replays one optimal sequence against every combination in
/// order, capturing each move's outcome through a one-shot interception
/// of the game's `updateUI` callback. It is strictly sequential and
/// cooperative: the only suspension points are the fixed delays and the
/// wait for each move's result.
pub fn harness(library: &Library, combinations: &[Combination]) -> String {
    TEMPLATE
        .replace("__SEQUENCES__", &embed(library))
        .replace("__COMBINATIONS__", &embed(&combinations))
        .replace("__COMBO_COUNT__", &combinations.len().to_string())
        .replace("__MOVE_DELAY__", &crate::MOVE_DELAY_MS.to_string())
        .replace("__COMBO_DELAY__", &crate::COMBO_DELAY_MS.to_string())
        .replace("__RESET_DELAY__", &crate::RESET_DELAY_MS.to_string())
}

/// Pretty-printed JSON for embedding into the rendered JavaScript.
pub fn embed<T: serde::Serialize>(value: &T) -> String {
    serde_json::to_string_pretty(value).expect("serialize embedded json")
}

const TEMPLATE: &str = r##"// Automated visual test for optimal move sequences.
// Paste this into the browser console while on the game page.

class OptimalSequenceTester {
    constructor() {
        this.sequences = __SEQUENCES__;
        this.robotCombinations = __COMBINATIONS__;
        this.results = [];
        this.moveDelay = __MOVE_DELAY__;   // ms between moves
        this.comboDelay = __COMBO_DELAY__; // ms between robot combinations
        this.resetDelay = __RESET_DELAY__; // ms for a game reset to settle
    }

    async startTest(gameLength = 25) {
        const optimal = this.sequences[`${gameLength}_moves`];
        if (!optimal) {
            console.error(`No sequence found for ${gameLength} moves`);
            return;
        }
        console.log(`Starting automated test with the ${gameLength}-move sequence: ${optimal.name}`);
        console.log(`Expected average win rate: ${optimal.avg_win_rate.toFixed(1)}%`);

        for (let i = 0; i < this.robotCombinations.length; i++) {
            const combo = this.robotCombinations[i];
            console.log(`\nTesting against ${combo.name} (${i + 1}/${this.robotCombinations.length})`);
            const result = await this.testCombination(optimal.sequence, combo);
            this.results.push({ combo: combo, result: result, sequence_name: optimal.name });
            if (i < this.robotCombinations.length - 1) {
                await this.delay(this.comboDelay);
            }
        }

        this.report(gameLength);
    }

    async testCombination(sequence, combo) {
        this.configureRobot(combo);
        await this.resetGame();

        const wins = { human: 0, robot: 0, tie: 0 };
        for (let i = 0; i < sequence.length; i++) {
            const move = sequence[i];
            console.log(`  Move ${i + 1}/${sequence.length}: playing ${move}`);
            const outcome = await this.playMove(move);
            if (outcome) {
                wins[outcome]++;
            }
            await this.delay(this.moveDelay);
        }

        const total = wins.human + wins.robot + wins.tie;
        const winRate = total > 0 ? (wins.human / total) * 100 : 0;
        console.log(`  Results: ${wins.human}W-${wins.robot}L-${wins.tie}T (${winRate.toFixed(1)}% win rate)`);
        return { wins: wins, winRate: winRate, totalMoves: total };
    }

    configureRobot(combo) {
        const settings = [
            ['difficulty', combo.difficulty, window.setDifficulty],
            ['strategy', combo.strategy, window.setStrategy],
            ['personality', combo.personality, window.setPersonality],
        ];
        for (const [id, value, apply] of settings) {
            const select = document.getElementById(id);
            if (select && typeof apply === 'function') {
                select.value = value;
                apply();
            } else {
                console.error(`cannot set ${id}: missing element or setter`);
            }
        }
        console.log(`  Robot configured: ${combo.difficulty} + ${combo.strategy} + ${combo.personality}`);
    }

    resetGame() {
        return new Promise((resolve) => {
            if (typeof resetGame === 'function') {
                resetGame();
                setTimeout(resolve, this.resetDelay);
            } else {
                console.error('resetGame function not found');
                resolve();
            }
        });
    }

    // One-shot capture: updateUI is intercepted for exactly one result and
    // restored before the returned promise settles, on every path.
    playMove(move) {
        return new Promise((resolve) => {
            if (typeof submitMove !== 'function') {
                console.error('submitMove function not found');
                resolve(null);
                return;
            }
            const original = window.updateUI;
            let settled = false;
            const settle = (outcome) => {
                if (settled) {
                    return;
                }
                settled = true;
                window.updateUI = original;
                resolve(outcome);
            };
            window.updateUI = function (data) {
                if (typeof original === 'function') {
                    original.call(this, data);
                }
                let outcome = null;
                if (data && data.result) {
                    outcome = Array.isArray(data.result) ? data.result[0] : data.result;
                }
                settle(outcome);
            };
            submitMove(move);
        });
    }

    report(gameLength) {
        const rule = '='.repeat(80);
        console.log(`\n${rule}`);
        console.log(`FINAL TEST RESULTS FOR THE ${gameLength}-MOVE SEQUENCE`);
        console.log(rule);

        const total = this.results.length;
        const avgWinRate = this.results.reduce((sum, r) => sum + r.result.winRate, 0) / total;
        const beats = this.results.filter((r) => r.result.winRate > 50).length;
        console.log(`Average win rate: ${avgWinRate.toFixed(1)}%`);
        console.log(`Beats ${beats}/${total} combinations (${((beats / total) * 100).toFixed(1)}%)`);

        const sorted = [...this.results].sort((a, b) => b.result.winRate - a.result.winRate);
        console.log('\nBest performing against:');
        sorted.slice(0, 5).forEach((r, i) => {
            console.log(`  ${i + 1}. ${r.combo.name}: ${r.result.winRate.toFixed(1)}% win rate`);
        });
        console.log('\nWorst performing against:');
        sorted.slice(-5).reverse().forEach((r, i) => {
            console.log(`  ${i + 1}. ${r.combo.name}: ${r.result.winRate.toFixed(1)}% win rate`);
        });

        this.download(gameLength);
    }

    download(gameLength) {
        const payload = {
            gameLength: gameLength,
            sequenceName: this.results.length > 0 ? this.results[0].sequence_name : 'unknown',
            timestamp: new Date().toISOString(),
            summary: {
                totalTests: this.results.length,
                avgWinRate: this.results.reduce((sum, r) => sum + r.result.winRate, 0) / this.results.length,
                beatsCount: this.results.filter((r) => r.result.winRate > 50).length,
            },
            detailedResults: this.results,
        };
        const blob = new Blob([JSON.stringify(payload, null, 2)], { type: 'application/json' });
        const url = URL.createObjectURL(blob);
        const a = document.createElement('a');
        a.href = url;
        a.download = `optimal_sequence_test_results_${gameLength}moves_${Date.now()}.json`;
        a.style.display = 'none';
        document.body.appendChild(a);
        a.click();
        document.body.removeChild(a);
        URL.revokeObjectURL(url);
        console.log('\nResults saved to download file');
    }

    delay(ms) {
        return new Promise((resolve) => setTimeout(resolve, ms));
    }
}

window.optimalTester = new OptimalSequenceTester();

console.log(`
OPTIMAL SEQUENCE TESTER LOADED

To run the test:
1. Make sure you are on the game page.
2. Run one of:

   optimalTester.startTest(25);
   optimalTester.startTest(50);

The test will configure each robot combination, play the optimal
sequence, track results, print a report, and download the full
result set as JSON.

Warning: the full run covers __COMBO_COUNT__ combinations and takes
roughly 15-20 minutes.
`);
"##;

#[cfg(test)]
mod tests {
    use super::*;

    fn library() -> Library {
        serde_json::from_str(
            r#"{
                "25_moves": {
                    "sequence": ["paper", "stone", "scissor"],
                    "name": "demo",
                    "avg_win_rate": 42.5,
                    "beats_count": 60
                },
                "50_moves": {
                    "sequence": ["stone", "paper"],
                    "name": "anti frequency",
                    "avg_win_rate": 61.0,
                    "beats_count": 88
                }
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn embeds_sequences_verbatim() {
        let library = library();
        let rendered = harness(&library, &Combination::all());
        let blob = embed(&library);
        assert!(rendered.contains(&blob));
        // and the embedded blob parses back to the same document
        let round_trip = serde_json::from_str::<Library>(&blob).unwrap();
        assert_eq!(round_trip, library);
    }

    #[test]
    fn embeds_all_combinations() {
        let rendered = harness(&library(), &Combination::all());
        // the sequence document carries no "personality" field, so each
        // occurrence is one embedded combination record
        assert_eq!(rendered.matches("\"personality\":").count(), 105);
        assert!(rendered.contains("\"name\": \"Lstm Not To Lose Mirror\""));
    }

    #[test]
    fn carries_timing_and_banner() {
        let rendered = harness(&library(), &Combination::all());
        assert!(rendered.contains("this.moveDelay = 500;"));
        assert!(rendered.contains("this.comboDelay = 2000;"));
        assert!(rendered.contains("this.resetDelay = 1000;"));
        assert!(rendered.contains("105 combinations"));
        assert!(!rendered.contains("__SEQUENCES__"));
        assert!(!rendered.contains("__COMBO_COUNT__"));
    }

    #[test]
    fn rendering_is_deterministic() {
        let library = library();
        let combinations = Combination::all();
        assert_eq!(
            harness(&library, &combinations),
            harness(&library, &combinations)
        );
    }
}
