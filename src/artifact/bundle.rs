use super::HTML_FILE;
use super::JS_FILE;
use super::MD_FILE;
use crate::robot::Combination;
use crate::sequence::Library;
use anyhow::Context;
use std::path::Path;

/// The three rendered artifacts, ready to be written out together.
///
/// Rendering is a pure function of the loaded document, so writing the
/// same input twice produces byte-identical files.
pub struct Bundle {
    pub harness: String,
    pub page: String,
    pub manual: String,
}

impl Bundle {
    pub fn render(library: &Library) -> Self {
        let combinations = Combination::all();
        let harness = super::harness(library, &combinations);
        let page = super::page(library, &harness);
        let manual = super::manual(library);
        Self {
            harness,
            page,
            manual,
        }
    }

    /// Write all three artifacts into `dir`, overwriting unconditionally.
    pub fn write(&self, dir: &Path) -> anyhow::Result<()> {
        for (name, text) in [
            (JS_FILE, &self.harness),
            (HTML_FILE, &self.page),
            (MD_FILE, &self.manual),
        ] {
            let path = dir.join(name);
            std::fs::write(&path, text)
                .with_context(|| format!("write artifact {}", path.display()))?;
            log::info!("wrote {}", path.display());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn library() -> Library {
        serde_json::from_str(
            r#"{
                "25_moves": {
                    "sequence": ["paper", "stone", "scissor"],
                    "name": "demo",
                    "avg_win_rate": 42.5,
                    "beats_count": 60
                },
                "50_moves": {
                    "sequence": ["stone", "paper"],
                    "name": "anti frequency",
                    "avg_win_rate": 61.0,
                    "beats_count": 88
                }
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn writes_three_artifacts() {
        let dir = tempfile::tempdir().unwrap();
        let bundle = Bundle::render(&library());
        bundle.write(dir.path()).unwrap();
        for name in [JS_FILE, HTML_FILE, MD_FILE] {
            assert!(dir.path().join(name).exists(), "{} missing", name);
        }
    }

    #[test]
    fn rerun_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let library = library();
        Bundle::render(&library).write(dir.path()).unwrap();
        let first = std::fs::read(dir.path().join(JS_FILE)).unwrap();
        Bundle::render(&library).write(dir.path()).unwrap();
        let second = std::fs::read(dir.path().join(JS_FILE)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn overwrites_stale_artifacts() {
        let dir = tempfile::tempdir().unwrap();
        let stale = dir.path().join(MD_FILE);
        std::fs::write(&stale, "stale").unwrap();
        Bundle::render(&library()).write(dir.path()).unwrap();
        let fresh = std::fs::read_to_string(&stale).unwrap();
        assert!(fresh.contains("# Manual Testing Instructions"));
    }

    #[test]
    fn unwritable_directory_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let absent = dir.path().join("no_such_subdir");
        assert!(Bundle::render(&library()).write(&absent).is_err());
    }
}
