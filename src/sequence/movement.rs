/// One move in the game's own vocabulary (the web UI says stone, not rock).
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Move {
    Paper,
    Stone,
    Scissor,
}

impl Move {
    /// Title-case label for the HTML sequence tiles.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Paper => "Paper",
            Self::Stone => "Stone",
            Self::Scissor => "Scissor",
        }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Paper => write!(f, "paper"),
            Self::Stone => write!(f, "stone"),
            Self::Scissor => write!(f, "scissor"),
        }
    }
}

impl TryFrom<&str> for Move {
    type Error = &'static str;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s {
            "paper" => Ok(Self::Paper),
            "stone" => Ok(Self::Stone),
            "scissor" => Ok(Self::Scissor),
            _ => Err("invalid move"),
        }
    }
}
