use super::Move;
use crate::WinRate;

/// One optimal sequence record, loaded verbatim from the quick-reference
/// document and never mutated.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Sequence {
    pub sequence: Vec<Move>,
    pub name: String,
    pub avg_win_rate: WinRate,
    pub beats_count: usize,
}

impl Sequence {
    /// The moves joined with arrows, as shown in the manual instructions,
    /// e.g. "paper → stone → scissor".
    pub fn arrows(&self) -> String {
        self.sequence
            .iter()
            .map(Move::to_string)
            .collect::<Vec<String>>()
            .join(" → ")
    }

    /// Title-cased sequence name for headings ("anti frequency" -> "Anti Frequency").
    pub fn title(&self) -> String {
        self.name
            .split_whitespace()
            .map(|word| {
                let mut chars = word.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                    None => String::new(),
                }
            })
            .collect::<Vec<String>>()
            .join(" ")
    }
}
