use crate::sequence::Library;

/// Render the manual-testing cheat sheet: one section per game length
/// with the exact sequence and its expected win rate, followed by the
/// test procedure and combinations worth trying by hand.
pub fn manual(library: &Library) -> String {
    let mut text = String::from("# Manual Testing Instructions for Optimal Sequences\n");
    for (key, sequence) in library.iter() {
        let length = Library::length_of(key)
            .map(|n| n.to_string())
            .unwrap_or_else(|| key.clone());
        text.push_str(&format!(
            "\n## Best {}-Move Sequence ({})\n**Expected Win Rate: {:.1}%**\n\nSequence: {}\n",
            length,
            sequence.title(),
            sequence.avg_win_rate,
            sequence.arrows(),
        ));
    }
    text.push_str(PROCEDURE);
    text
}

const PROCEDURE: &str = "
## How to Test Manually:
1. Set game length to 25 or 50 moves
2. Configure the robot: try different difficulty/strategy/personality combinations
3. Play the sequence exactly as shown above
4. Compare your win rate to the expected rate

## Recommended Test Combinations:
### Most Vulnerable (Easy to beat):
- Random + Not to Lose + Any personality
- Frequency + Balanced + Neutral

### Most Resilient (Hardest to beat):
- Markov + Balanced + Chameleon
- Enhanced + To Win + Berserker

## Tips:
- The sequences work best when played exactly as designed
- Some combinations may still be difficult due to randomness
- Results may vary ±10% due to random elements in the AI
";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains_exact_sequence_lines() {
        let library = serde_json::from_str::<Library>(
            r#"{
                "25_moves": {
                    "sequence": ["paper", "stone", "scissor"],
                    "name": "demo",
                    "avg_win_rate": 42.5,
                    "beats_count": 60
                }
            }"#,
        )
        .unwrap();
        let rendered = manual(&library);
        assert!(rendered.contains("Sequence: paper → stone → scissor"));
        assert!(rendered.contains("**Expected Win Rate: 42.5%**"));
        assert!(rendered.contains("## Best 25-Move Sequence (Demo)"));
    }

    #[test]
    fn renders_every_entry() {
        let library = serde_json::from_str::<Library>(
            r#"{
                "25_moves": {
                    "sequence": ["paper"],
                    "name": "short",
                    "avg_win_rate": 40.0,
                    "beats_count": 50
                },
                "50_moves": {
                    "sequence": ["stone", "stone"],
                    "name": "long",
                    "avg_win_rate": 60.0,
                    "beats_count": 90
                }
            }"#,
        )
        .unwrap();
        let rendered = manual(&library);
        assert!(rendered.contains("## Best 25-Move Sequence (Short)"));
        assert!(rendered.contains("## Best 50-Move Sequence (Long)"));
        assert!(rendered.contains("**Expected Win Rate: 60.0%**"));
        assert_eq!(manual(&library), rendered);
    }
}
