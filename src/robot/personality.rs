/// A behavioral modifier layered on top of difficulty and strategy.
///
/// Personalities can dominate the underlying algorithm: Wildcard injects
/// heavy randomness, Berserker aggressive countering, Guardian defensive
/// tie-seeking. The similarity report quantifies that dominance.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Personality {
    Neutral,
    Berserker,
    Guardian,
    Chameleon,
    Professor,
    Wildcard,
    Mirror,
}

impl Personality {
    /// Enumeration order matches the game UI's personality dropdown.
    pub const ALL: [Self; 7] = [
        Self::Neutral,
        Self::Berserker,
        Self::Guardian,
        Self::Chameleon,
        Self::Professor,
        Self::Wildcard,
        Self::Mirror,
    ];

    /// Title-case label used in combination display names.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Neutral => "Neutral",
            Self::Berserker => "Berserker",
            Self::Guardian => "Guardian",
            Self::Chameleon => "Chameleon",
            Self::Professor => "Professor",
            Self::Wildcard => "Wildcard",
            Self::Mirror => "Mirror",
        }
    }
}

impl std::fmt::Display for Personality {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Neutral => write!(f, "neutral"),
            Self::Berserker => write!(f, "berserker"),
            Self::Guardian => write!(f, "guardian"),
            Self::Chameleon => write!(f, "chameleon"),
            Self::Professor => write!(f, "professor"),
            Self::Wildcard => write!(f, "wildcard"),
            Self::Mirror => write!(f, "mirror"),
        }
    }
}

impl TryFrom<&str> for Personality {
    type Error = &'static str;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s {
            "neutral" => Ok(Self::Neutral),
            "berserker" => Ok(Self::Berserker),
            "guardian" => Ok(Self::Guardian),
            "chameleon" => Ok(Self::Chameleon),
            "professor" => Ok(Self::Professor),
            "wildcard" => Ok(Self::Wildcard),
            "mirror" => Ok(Self::Mirror),
            _ => Err("invalid personality"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokens_round_trip() {
        for personality in Personality::ALL {
            let token = personality.to_string();
            assert_eq!(Personality::try_from(token.as_str()), Ok(personality));
        }
    }
}
