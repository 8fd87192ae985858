/// A cluster of combinations expected to feel nearly identical to play
/// against, with an estimated similarity score.
pub struct SimilarGroup {
    pub name: &'static str,
    pub members: [&'static str; 3],
    /// Estimated behavioral overlap, in percent.
    pub similarity: u8,
    pub reason: &'static str,
    pub behavior: &'static str,
}

pub const SIMILAR_GROUPS: [SimilarGroup; 4] = [
    SimilarGroup {
        name: "Ultra-Random Chaos",
        members: [
            "Random + To Win + Wildcard",
            "Random + Balanced + Wildcard",
            "Random + Not to Lose + Wildcard",
        ],
        similarity: 90,
        reason: "Wildcard's 70% randomness completely dominates Random's already random behavior. Strategy becomes irrelevant.",
        behavior: "Essentially 70% pure random + 30% strategy-influenced random = very similar chaos",
    },
    SimilarGroup {
        name: "Aggressive Counter-Attackers",
        members: [
            "Frequency + To Win + Berserker",
            "Enhanced + To Win + Berserker",
            "Markov + To Win + Berserker",
        ],
        similarity: 75,
        reason: "Berserker's 80% aggressive countering + To Win's aggressive focus create similar behavior regardless of base difficulty",
        behavior: "All aggressively counter the human's most common moves with high confidence",
    },
    SimilarGroup {
        name: "Ultra-Defensive Players",
        members: [
            "Random + Not to Lose + Guardian",
            "Frequency + Not to Lose + Guardian",
            "Markov + Not to Lose + Guardian",
        ],
        similarity: 70,
        reason: "Guardian's defensive nature + Not to Lose strategy both prioritize ties and safe play",
        behavior: "All seek ties when losing, play very conservatively, avoid risks",
    },
    SimilarGroup {
        name: "Balanced Neutrals",
        members: [
            "Enhanced + Balanced + Neutral",
            "Markov + Balanced + Neutral",
            "LSTM + Balanced + Neutral",
        ],
        similarity: 65,
        reason: "When the human has no clear patterns, all of these just use their base difficulty logic without modification",
        behavior: "Pure difficulty expression: differences only visible with patterned human play",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn similarity_scores_descend() {
        let scores = SIMILAR_GROUPS
            .iter()
            .map(|g| g.similarity)
            .collect::<Vec<u8>>();
        let mut sorted = scores.clone();
        sorted.sort_unstable_by(|a, b| b.cmp(a));
        assert_eq!(scores, sorted);
    }
}
