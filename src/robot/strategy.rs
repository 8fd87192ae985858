/// The robot's risk posture: maximize wins, balance, or avoid losses.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    Balanced,
    ToWin,
    NotToLose,
}

impl Strategy {
    /// Enumeration order matches the game UI's strategy dropdown.
    pub const ALL: [Self; 3] = [Self::Balanced, Self::ToWin, Self::NotToLose];

    /// Title-case label used in combination display names.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Balanced => "Balanced",
            Self::ToWin => "To Win",
            Self::NotToLose => "Not To Lose",
        }
    }
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Balanced => write!(f, "balanced"),
            Self::ToWin => write!(f, "to_win"),
            Self::NotToLose => write!(f, "not_to_lose"),
        }
    }
}

impl TryFrom<&str> for Strategy {
    type Error = &'static str;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s {
            "balanced" => Ok(Self::Balanced),
            "to_win" => Ok(Self::ToWin),
            "not_to_lose" => Ok(Self::NotToLose),
            _ => Err("invalid strategy"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokens_round_trip() {
        for strategy in Strategy::ALL {
            let token = strategy.to_string();
            assert_eq!(Strategy::try_from(token.as_str()), Ok(strategy));
        }
    }

    #[test]
    fn labels_are_title_case() {
        assert_eq!(Strategy::ToWin.label(), "To Win");
        assert_eq!(Strategy::NotToLose.label(), "Not To Lose");
    }
}
