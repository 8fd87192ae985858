/// How a single component can dominate a combination's overall behavior,
/// flattening the contribution of the other two.
pub struct DominancePattern {
    pub component: &'static str,
    pub level: &'static str,
    pub effect: &'static str,
    pub example: &'static str,
    pub exceptions: &'static str,
}

pub const DOMINANCE_PATTERNS: [DominancePattern; 5] = [
    DominancePattern {
        component: "Wildcard Personality",
        level: "Extreme (70%)",
        effect: "Overrides almost all difficulty and strategy logic",
        example: "Any difficulty + Any strategy + Wildcard ≈ 70% random chaos",
        exceptions: "None: Wildcard dominates everything",
    },
    DominancePattern {
        component: "LSTM Difficulty",
        level: "High",
        effect: "Provides such strong pattern recognition that strategy and personality matter less",
        example: "LSTM + Any strategy + Any personality = strong AI with personality flavor",
        exceptions: "Wildcard can still override with randomness",
    },
    DominancePattern {
        component: "Berserker Personality",
        level: "High",
        effect: "80% aggressive countering overrides most base AI decisions",
        example: "Any difficulty + Any strategy + Berserker ≈ aggressive counter-attacker",
        exceptions: "Random difficulty + Berserker is still somewhat unpredictable",
    },
    DominancePattern {
        component: "To Win + Berserker Combination",
        level: "Very High",
        effect: "Both components reinforce aggression, creating ultra-aggressive behavior",
        example: "Any difficulty + To Win + Berserker = maximum aggression",
        exceptions: "Wildcard personality can still add chaos",
    },
    DominancePattern {
        component: "Random Difficulty",
        level: "Medium",
        effect: "Baseline randomness limits how sophisticated the other components can be",
        example: "Random + Any strategy + Any personality = enhanced randomness",
        exceptions: "Strong personalities (Berserker, Guardian, Chameleon) can still show through",
    },
];
