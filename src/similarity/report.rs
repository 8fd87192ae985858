use super::DISTINCT_PAIRS;
use super::DOMINANCE_PATTERNS;
use super::REDUNDANCY_TIERS;
use super::SIMILAR_GROUPS;
use super::TOTAL_COMBINATIONS;
use colored::Colorize;

const RECOMMENDATIONS: [&str; 5] = [
    "STRENGTHS: the 3-layer system successfully creates ~75-80 distinct robot behaviors",
    "MINOR ISSUE: ~12 combinations with high redundancy (mostly Wildcard variants)",
    "OPTIMIZATION: consider reducing Wildcard's randomness from 70% to 50%",
    "ENHANCEMENT: add more interaction between Strategy and Personality components",
    "OVERALL: excellent design with minimal redundancy for 105 combinations",
];

const VERDICT: &str = "\
The robot combination system successfully creates a rich variety of AI
personalities with only minor redundancy. The three-component approach
(Difficulty + Strategy + Personality) produces 75+ genuinely distinct
robot behaviors that players will notice and remember.";

/// The full similarity report. All content is authored, not computed;
/// printing this is the whole behavior of the `similarity` binary.
#[derive(Default)]
pub struct Report;

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.title(f)?;
        self.similar(f)?;
        self.distinct(f)?;
        self.dominance(f)?;
        self.redundancy(f)?;
        self.recommendations(f)
    }
}

impl Report {
    fn section(f: &mut std::fmt::Formatter<'_>, title: &str) -> std::fmt::Result {
        writeln!(f, "{}", title.bold())?;
        writeln!(f, "{}", "=".repeat(title.len()))
    }

    fn title(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Self::section(f, "ROBOT COMBINATION SIMILARITY ANALYSIS")?;
        writeln!(
            f,
            "Identifying potentially redundant vs. clearly distinct robot combinations\n"
        )
    }

    fn similar(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Self::section(f, "POTENTIALLY REDUNDANT COMBINATIONS")?;
        writeln!(
            f,
            "These combinations might feel very similar to play against:\n"
        )?;
        for group in &SIMILAR_GROUPS {
            writeln!(
                f,
                "{} (similarity: {}%)",
                group.name.yellow().bold(),
                group.similarity
            )?;
            for member in &group.members {
                writeln!(f, "   • {}", member)?;
            }
            writeln!(f, "   Why similar: {}", group.reason)?;
            writeln!(f, "   Behavior: {}\n", group.behavior)?;
        }
        Ok(())
    }

    fn distinct(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Self::section(f, "GUARANTEED DISTINCT COMBINATIONS")?;
        writeln!(
            f,
            "These combinations will always feel different to play against:\n"
        )?;
        for (i, pair) in DISTINCT_PAIRS.iter().enumerate() {
            writeln!(f, "{}. {}", i + 1, pair.first.green())?;
            writeln!(f, "   vs. {}", pair.second.green())?;
            writeln!(f, "   Difference: {}", pair.difference)?;
            writeln!(f, "   Behavior 1: {}", pair.first_behavior)?;
            writeln!(f, "   Behavior 2: {}\n", pair.second_behavior)?;
        }
        Ok(())
    }

    fn dominance(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Self::section(f, "COMPONENT DOMINANCE PATTERNS")?;
        writeln!(
            f,
            "How a single component can dominate the robot's behavior:\n"
        )?;
        for pattern in &DOMINANCE_PATTERNS {
            writeln!(f, "{}", pattern.component.cyan().bold())?;
            writeln!(f, "   Dominance: {}", pattern.level)?;
            writeln!(f, "   Effect: {}", pattern.effect)?;
            writeln!(f, "   Example: {}", pattern.example)?;
            writeln!(f, "   Exceptions: {}\n", pattern.exceptions)?;
        }
        Ok(())
    }

    fn redundancy(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Self::section(f, "REDUNDANCY ASSESSMENT")?;
        writeln!(
            f,
            "Assessment of all {} robot combinations:\n",
            TOTAL_COMBINATIONS
        )?;
        for tier in &REDUNDANCY_TIERS {
            writeln!(
                f,
                "   {}: {} combinations ({:.1}%)",
                tier.name.bold(),
                tier.count,
                tier.share
            )?;
            writeln!(f, "      Description: {}", tier.description)?;
            writeln!(f, "      Examples: {}\n", tier.example)?;
        }
        Ok(())
    }

    fn recommendations(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Self::section(f, "DESIGN RECOMMENDATIONS")?;
        for recommendation in RECOMMENDATIONS {
            writeln!(f, "• {}", recommendation)?;
        }
        writeln!(f)?;
        Self::section(f, "FINAL VERDICT")?;
        writeln!(f, "{}", VERDICT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_every_section() {
        colored::control::set_override(false);
        let rendered = Report.to_string();
        for heading in [
            "ROBOT COMBINATION SIMILARITY ANALYSIS",
            "POTENTIALLY REDUNDANT COMBINATIONS",
            "GUARANTEED DISTINCT COMBINATIONS",
            "COMPONENT DOMINANCE PATTERNS",
            "REDUNDANCY ASSESSMENT",
            "DESIGN RECOMMENDATIONS",
            "FINAL VERDICT",
        ] {
            assert!(rendered.contains(heading), "missing section {}", heading);
        }
    }

    #[test]
    fn renders_all_data_rows() {
        colored::control::set_override(false);
        let rendered = Report.to_string();
        for group in &SIMILAR_GROUPS {
            assert!(rendered.contains(group.name));
        }
        for pair in &DISTINCT_PAIRS {
            assert!(rendered.contains(pair.difference));
        }
        for pattern in &DOMINANCE_PATTERNS {
            assert!(rendered.contains(pattern.component));
        }
        for tier in &REDUNDANCY_TIERS {
            assert!(rendered.contains(tier.description));
        }
    }
}
