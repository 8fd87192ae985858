use super::Sequence;
use anyhow::Context;
use std::collections::BTreeMap;
use std::path::Path;

/// The full optimal-sequence document, keyed by game length
/// ("25_moves", "50_moves").
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct Library(BTreeMap<String, Sequence>);

impl Library {
    /// Read and parse the quick-reference JSON. Any failure here is fatal
    /// to the generator: no artifacts are written.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path).with_context(|| {
            format!(
                "optimal sequences not found at {}; run the sequence optimizer first",
                path.display()
            )
        })?;
        serde_json::from_str(&text)
            .with_context(|| format!("malformed optimal sequences in {}", path.display()))
    }

    /// Look up the sequence for a game length, e.g. `get(25)` for "25_moves".
    pub fn get(&self, moves: usize) -> Option<&Sequence> {
        self.0.get(&format!("{}_moves", moves))
    }

    /// All entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Sequence)> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The game length a document key describes ("25_moves" -> 25).
    pub fn length_of(key: &str) -> Option<usize> {
        key.strip_suffix("_moves")?.parse().ok()
    }
}
