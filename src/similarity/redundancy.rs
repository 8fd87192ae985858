use crate::WinRate;

/// Total number of distinct robot configurations (5 × 3 × 7).
pub const TOTAL_COMBINATIONS: usize = 105;

/// One band of the redundancy breakdown across all combinations.
pub struct RedundancyTier {
    pub name: &'static str,
    pub count: usize,
    /// Share of all combinations, in percent.
    pub share: WinRate,
    pub description: &'static str,
    pub example: &'static str,
}

pub const REDUNDANCY_TIERS: [RedundancyTier; 4] = [
    RedundancyTier {
        name: "High Redundancy",
        count: 12,
        share: 11.4,
        description: "Feel very similar to play against",
        example: "Random + Any Strategy + Wildcard variants",
    },
    RedundancyTier {
        name: "Medium Redundancy",
        count: 18,
        share: 17.1,
        description: "Some similarities but distinguishable differences",
        example: "Aggressive counter-attacker variants",
    },
    RedundancyTier {
        name: "Low Redundancy",
        count: 25,
        share: 23.8,
        description: "Similar in some aspects but clearly different overall",
        example: "Same difficulty + strategy, different personalities",
    },
    RedundancyTier {
        name: "Unique Behaviors",
        count: 50,
        share: 47.6,
        description: "Clearly distinct and memorable robot characters",
        example: "LSTM + To Win + Berserker vs Random + Not to Lose + Guardian",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tiers_cover_every_combination() {
        let counted = REDUNDANCY_TIERS.iter().map(|t| t.count).sum::<usize>();
        assert_eq!(counted, TOTAL_COMBINATIONS);
    }

    #[test]
    fn shares_cover_the_whole() {
        let total = REDUNDANCY_TIERS.iter().map(|t| t.share).sum::<WinRate>();
        assert!((total - 100.0).abs() < 0.5, "shares sum to {}", total);
    }

    #[test]
    fn matches_enumeration() {
        assert_eq!(
            TOTAL_COMBINATIONS,
            crate::robot::Combination::all().len()
        );
    }
}
