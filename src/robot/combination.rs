use super::Difficulty;
use super::Personality;
use super::Strategy;

/// One (difficulty, strategy, personality) triple defining a distinct
/// robot opponent configuration.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Combination {
    pub difficulty: Difficulty,
    pub strategy: Strategy,
    pub personality: Personality,
}

impl Combination {
    /// All 105 combinations in nested enumeration order: difficulty
    /// outermost, strategy in the middle, personality innermost.
    pub fn all() -> Vec<Self> {
        let mut combinations = Vec::with_capacity(
            Difficulty::ALL.len() * Strategy::ALL.len() * Personality::ALL.len(),
        );
        for difficulty in Difficulty::ALL {
            for strategy in Strategy::ALL {
                for personality in Personality::ALL {
                    combinations.push(Self {
                        difficulty,
                        strategy,
                        personality,
                    });
                }
            }
        }
        combinations
    }

    /// Human-readable display name, e.g. "Lstm To Win Berserker".
    pub fn name(&self) -> String {
        format!(
            "{} {} {}",
            self.difficulty.label(),
            self.strategy.label(),
            self.personality.label()
        )
    }
}

impl std::fmt::Display for Combination {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} + {} + {}",
            self.difficulty, self.strategy, self.personality
        )
    }
}

/// The generated harness expects each combination as an object carrying
/// the three lowercase UI tokens plus the derived display name.
impl serde::Serialize for Combination {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut s = serializer.serialize_struct("Combination", 4)?;
        s.serialize_field("difficulty", &self.difficulty)?;
        s.serialize_field("strategy", &self.strategy)?;
        s.serialize_field("personality", &self.personality)?;
        s.serialize_field("name", &self.name())?;
        s.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn enumeration_is_total() {
        let all = Combination::all();
        assert_eq!(all.len(), 105);
        let unique = all.iter().collect::<HashSet<_>>();
        assert_eq!(unique.len(), 105);
    }

    #[test]
    fn enumeration_order_is_nested() {
        let all = Combination::all();
        let first = all.first().unwrap();
        let last = all.last().unwrap();
        assert_eq!(first.difficulty, Difficulty::Random);
        assert_eq!(first.strategy, Strategy::Balanced);
        assert_eq!(first.personality, Personality::Neutral);
        assert_eq!(last.difficulty, Difficulty::Lstm);
        assert_eq!(last.strategy, Strategy::NotToLose);
        assert_eq!(last.personality, Personality::Mirror);
        // personality varies fastest
        assert_eq!(all[0].personality, Personality::Neutral);
        assert_eq!(all[1].personality, Personality::Berserker);
        assert_eq!(all[0].strategy, all[1].strategy);
    }

    #[test]
    fn display_name() {
        let combo = Combination {
            difficulty: Difficulty::Lstm,
            strategy: Strategy::ToWin,
            personality: Personality::Berserker,
        };
        assert_eq!(combo.name(), "Lstm To Win Berserker");
        assert_eq!(combo.to_string(), "lstm + to_win + berserker");
    }

    #[test]
    fn serializes_with_derived_name() {
        let combo = Combination {
            difficulty: Difficulty::Frequency,
            strategy: Strategy::NotToLose,
            personality: Personality::Wildcard,
        };
        let json = serde_json::to_value(&combo).unwrap();
        assert_eq!(json["difficulty"], "frequency");
        assert_eq!(json["strategy"], "not_to_lose");
        assert_eq!(json["personality"], "wildcard");
        assert_eq!(json["name"], "Frequency Not To Lose Wildcard");
    }
}
