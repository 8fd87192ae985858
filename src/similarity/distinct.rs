/// Two combinations guaranteed to feel different, with the behavior each
/// one exhibits.
pub struct DistinctPair {
    pub first: &'static str,
    pub second: &'static str,
    pub difference: &'static str,
    pub first_behavior: &'static str,
    pub second_behavior: &'static str,
}

pub const DISTINCT_PAIRS: [DistinctPair; 5] = [
    DistinctPair {
        first: "LSTM + To Win + Berserker",
        second: "Random + Not to Lose + Guardian",
        difference: "Maximum intelligence + aggression vs. unpredictable + defensive",
        first_behavior: "Ruthlessly exploits patterns with 95% aggression",
        second_behavior: "Unpredictable but safe, often forces ties",
    },
    DistinctPair {
        first: "Enhanced + Balanced + Chameleon",
        second: "Frequency + To Win + Wildcard",
        difference: "Adaptive intelligence vs. chaotic counter-attacks",
        first_behavior: "Smart adaptation based on performance tracking",
        second_behavior: "Simple counters mixed with 70% pure chaos",
    },
    DistinctPair {
        first: "Markov + Not to Lose + Mirror",
        second: "LSTM + To Win + Professor",
        difference: "Defensive copying vs. analytical aggression",
        first_behavior: "Learns patterns to copy the human's style defensively",
        second_behavior: "Deep analysis to find complex patterns and exploit them",
    },
    DistinctPair {
        first: "Random + Balanced + Neutral",
        second: "LSTM + To Win + Berserker",
        difference: "Pure randomness vs. maximum AI sophistication",
        first_behavior: "Completely random moves, no learning",
        second_behavior: "Advanced pattern recognition + ruthless exploitation",
    },
    DistinctPair {
        first: "Enhanced + To Win + Chameleon",
        second: "Frequency + Not to Lose + Guardian",
        difference: "Adaptive aggression vs. simple defensiveness",
        first_behavior: "Switches between aggressive and random based on performance",
        second_behavior: "Simple pattern counting with a strong tie preference",
    },
];
