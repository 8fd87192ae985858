/// The base decision algorithm of the robot opponent.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    Random,
    Frequency,
    Markov,
    Enhanced,
    Lstm,
}

impl Difficulty {
    /// Enumeration order matches the game UI's difficulty dropdown.
    pub const ALL: [Self; 5] = [
        Self::Random,
        Self::Frequency,
        Self::Markov,
        Self::Enhanced,
        Self::Lstm,
    ];

    /// Title-case label used in combination display names.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Random => "Random",
            Self::Frequency => "Frequency",
            Self::Markov => "Markov",
            Self::Enhanced => "Enhanced",
            Self::Lstm => "Lstm",
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Random => write!(f, "random"),
            Self::Frequency => write!(f, "frequency"),
            Self::Markov => write!(f, "markov"),
            Self::Enhanced => write!(f, "enhanced"),
            Self::Lstm => write!(f, "lstm"),
        }
    }
}

impl TryFrom<&str> for Difficulty {
    type Error = &'static str;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s {
            "random" => Ok(Self::Random),
            "frequency" => Ok(Self::Frequency),
            "markov" => Ok(Self::Markov),
            "enhanced" => Ok(Self::Enhanced),
            "lstm" => Ok(Self::Lstm),
            _ => Err("invalid difficulty"),
        }
    }
}
