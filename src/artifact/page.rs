use crate::sequence::Library;
use crate::sequence::Sequence;

/// Render the standalone HTML viewer: one styled panel per sequence plus
/// the harness embedded in a copyable textarea.
pub fn page(library: &Library, harness: &str) -> String {
    let mut panels = String::new();
    for (key, sequence) in library.iter() {
        let length = Library::length_of(key)
            .map(|n| n.to_string())
            .unwrap_or_else(|| key.clone());
        panels.push_str(&panel(&length, sequence));
    }
    SHELL
        .replace("__PANELS__", &panels)
        .replace("__HARNESS__", &escape(harness))
}

fn panel(length: &str, sequence: &Sequence) -> String {
    let tiles = sequence
        .sequence
        .iter()
        .map(|movement| format!(r#"<div class="move {}">{}</div>"#, movement, movement.label()))
        .collect::<Vec<String>>()
        .join(" ");
    format!(
        r#"        <div class="sequence-box">
            <h2>{length}-Move Optimal Sequence</h2>
            <div class="stats">
                <div class="stat-card">
                    <div class="stat-value">{rate:.1}%</div>
                    <div>Average Win Rate</div>
                </div>
                <div class="stat-card">
                    <div class="stat-value">{beats}</div>
                    <div>Combinations Beaten</div>
                </div>
                <div class="stat-card">
                    <div class="stat-value">{name}</div>
                    <div>Strategy Type</div>
                </div>
            </div>
            <h3>Sequence:</h3>
            <div class="move-sequence">
                {tiles}
            </div>
        </div>
"#,
        length = length,
        rate = sequence.avg_win_rate,
        beats = sequence.beats_count,
        name = sequence.title(),
        tiles = tiles,
    )
}

/// Escape the harness so it survives the page's outer template literal
/// byte-for-byte: backslashes, backticks, and interpolation openers.
fn escape(harness: &str) -> String {
    harness
        .replace('\\', "\\\\")
        .replace('`', "\\`")
        .replace("${", "\\${")
}

const SHELL: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Optimal Sequence Test</title>
    <style>
        body {
            font-family: 'Courier New', monospace;
            background: #1a1a1a;
            color: #00ff88;
            padding: 20px;
            line-height: 1.6;
        }
        .container {
            max-width: 1200px;
            margin: 0 auto;
        }
        .header {
            text-align: center;
            border-bottom: 2px solid #00ff88;
            padding-bottom: 20px;
            margin-bottom: 30px;
        }
        .sequence-box {
            background: #2a2a2a;
            border: 1px solid #00ff88;
            border-radius: 8px;
            padding: 20px;
            margin: 20px 0;
        }
        .move-sequence {
            display: grid;
            grid-template-columns: repeat(auto-fit, minmax(60px, 1fr));
            gap: 10px;
            margin: 15px 0;
        }
        .move {
            background: #333;
            border: 1px solid #555;
            border-radius: 4px;
            padding: 8px;
            text-align: center;
            font-weight: bold;
        }
        .move.paper { background: #4CAF50; color: white; }
        .move.stone { background: #FF9800; color: white; }
        .move.scissor { background: #F44336; color: white; }
        .stats {
            display: grid;
            grid-template-columns: repeat(auto-fit, minmax(200px, 1fr));
            gap: 20px;
            margin: 20px 0;
        }
        .stat-card {
            background: #333;
            border-radius: 8px;
            padding: 15px;
            text-align: center;
        }
        .stat-value {
            font-size: 2em;
            font-weight: bold;
            color: #00ff88;
        }
        .instructions {
            background: #2a2a4a;
            border: 1px solid #4CAF50;
            border-radius: 8px;
            padding: 20px;
            margin: 20px 0;
        }
        .copy-button {
            background: #00ff88;
            color: #1a1a1a;
            border: none;
            padding: 10px 20px;
            border-radius: 4px;
            cursor: pointer;
            font-weight: bold;
        }
        .copy-button:hover {
            background: #00cc66;
        }
        textarea {
            width: 100%;
            height: 200px;
            background: #1a1a1a;
            color: #00ff88;
            border: 1px solid #555;
            padding: 10px;
            font-family: monospace;
        }
    </style>
</head>
<body>
    <div class="container">
        <div class="header">
            <h1>Optimal Move Sequences for RPS AI Testing</h1>
            <p>Precomputed sequences that maximize win rate against the AI opponents</p>
        </div>

        <div class="instructions">
            <h2>How to Use</h2>
            <ol>
                <li>Open the main game in another tab</li>
                <li>Copy the JavaScript test code below</li>
                <li>Open the browser developer console (F12)</li>
                <li>Paste and run the code</li>
                <li>Follow the console instructions to start automated testing</li>
            </ol>
            <p><strong>Warning:</strong> the full run tests all 105 robot combinations and takes 15-20 minutes.</p>
        </div>

__PANELS__
        <div class="sequence-box">
            <h2>JavaScript Test Code</h2>
            <p>Copy this code and paste it into the browser console on the game page:</p>
            <textarea id="jsCode" readonly>// Loading...</textarea>
            <br><br>
            <button class="copy-button" onclick="copyCode()">Copy Code to Clipboard</button>
        </div>
    </div>

    <script>
        document.getElementById('jsCode').value = `__HARNESS__`;

        function copyCode() {
            const textarea = document.getElementById('jsCode');
            textarea.select();
            document.execCommand('copy');
            alert('Code copied to clipboard');
        }
    </script>
</body>
</html>
"##;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::artifact::harness;
    use crate::robot::Combination;

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
    fn renders_panels_and_embeds_harness() {
        let library = library();
        let driver = harness(&library, &Combination::all());
        let rendered = page(&library, &driver);
        assert!(rendered.contains("<h2>25-Move Optimal Sequence</h2>"));
        assert!(rendered.contains("<h2>50-Move Optimal Sequence</h2>"));
        assert!(rendered.contains(r#"<div class="stat-value">42.5%</div>"#));
        assert!(rendered.contains(r#"<div class="move paper">Paper</div>"#));
        assert!(!rendered.contains("__PANELS__"));
        assert!(!rendered.contains("__HARNESS__"));
        // every embedded combination record survives the escaping
        assert_eq!(rendered.matches("\"personality\":").count(), 105);
    }

    #[test]
    fn escaping_neutralizes_template_literals() {
        let escaped = escape("a `b` ${c} d\\n");
        assert_eq!(escaped, "a \\`b\\` \\${c} d\\\\n");
    }

    #[test]
    fn rendering_is_deterministic() {
        let library = library();
        let driver = harness(&library, &Combination::all());
        assert_eq!(page(&library, &driver), page(&library, &driver));
    }
}
