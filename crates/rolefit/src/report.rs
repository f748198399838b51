//! Report rendering for the `rolefit` binary.
//!
//! The text report covers overview, score breakdown, skills analysis,
//! project suggestions, improvement tips, and recommendations; `--json`
//! emits the same content as a machine-readable envelope.

use comfy_table::{Cell, Table, presets::UTF8_FULL_CONDENSED};
use rolefit_model::EvaluationReport;
use rolefit_score::ScoringResult;
use serde::Serialize;

/// Effectiveness threshold separating the two recommendation tracks.
const STRONG_MATCH_THRESHOLD: f32 = 70.0;

/// Section separator line.
const RULE: &str = "================================================";

/// Recommendations for a resume already well-targeted at the role.
const RECOMMENDATIONS_STRONG: &[&str] = &[
    "Your resume is well-targeted for this role. Keep it updated.",
    "Consider advanced certifications to stand out.",
    "Network with professionals in this field.",
];

/// Recommendations for a resume that needs work for the role.
const RECOMMENDATIONS_WEAK: &[&str] = &[
    "Focus on adding missing skills and tailoring content.",
    "Work on projects that demonstrate required skills.",
    "Practice interview questions specific to this role.",
];

/// Renders the per-class evaluation breakdown as a table.
pub fn evaluation_table(report: &EvaluationReport) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(vec!["Class", "Precision", "Recall", "F1", "Support"]);

    for metrics in &report.per_class {
        table.add_row(vec![
            Cell::new(&metrics.label),
            Cell::new(format!("{:.2}", metrics.precision)),
            Cell::new(format!("{:.2}", metrics.recall)),
            Cell::new(format!("{:.2}", metrics.f1)),
            Cell::new(metrics.support.to_string()),
        ]);
    }

    table
}

/// JSON envelope for `--json` output: the scoring result plus the advice
/// content the report layer would otherwise render.
#[derive(Serialize)]
pub struct JsonReport<'a> {
    /// The scoring result.
    pub result: &'a ScoringResult,
    /// Gap-driven improvement suggestions.
    pub suggestions: &'a [String],
    /// Role-keyed project suggestions.
    pub project_suggestions: &'a [&'a str],
    /// Static resume-writing tips.
    pub tips: &'a [&'a str],
}

/// Renders the full text analysis report.
pub fn text_report(
    result: &ScoringResult,
    projects: &[&str],
    gap_suggestions: &[String],
    tips: &[&str],
) -> String {
    let mut sections: Vec<String> = Vec::new();

    sections.push(format!(
        "RESUME ANALYSIS REPORT\nGenerated on: {}\n{RULE}\n",
        result.timestamp.format("%Y-%m-%d %H:%M:%S")
    ));

    sections.push(format!(
        "OVERVIEW\n--------\n\
         Effectiveness Score: {:.0}%\n\
         Predicted Role: {}\n\
         Target Role: {}\n\
         Role Match: {}\n",
        result.effectiveness,
        result.predicted_role,
        result.target_role,
        if result.role_match { "Yes" } else { "No" }
    ));

    sections.push(format!(
        "SCORE BREAKDOWN\n---------------\n\
         Role Match: {}\n\
         Skills Match: {}/{} skills found ({:.1}/40)\n\
         Job Description Match: {:.1}/20\n",
        if result.role_match { "40/40" } else { "0/40" },
        result.present_skills.len(),
        result.required_skills.len(),
        result.skill_subscore,
        result.description_subscore
    ));

    sections.push(format!(
        "SKILLS ANALYSIS\n---------------\n\
         Skills Present ({}):\n{}\n\n\
         Skills to Add ({}):\n{}\n",
        result.present_skills.len(),
        result.present_skills.join(", "),
        result.missing_skills.len(),
        result.missing_skills.join(", ")
    ));

    sections.push(format!(
        "PROJECT SUGGESTIONS\n-------------------\n{}",
        bullet_list(projects.iter().copied())
    ));

    if !gap_suggestions.is_empty() {
        sections.push(format!(
            "IMPROVEMENT SUGGESTIONS\n-----------------------\n{}",
            bullet_list(gap_suggestions.iter().map(String::as_str))
        ));
    }

    sections.push(format!(
        "IMPROVEMENT TIPS\n----------------\n{}",
        bullet_list(tips.iter().copied())
    ));

    let recommendations = if result.effectiveness >= STRONG_MATCH_THRESHOLD {
        RECOMMENDATIONS_STRONG
    } else {
        RECOMMENDATIONS_WEAK
    };
    let numbered: String = recommendations
        .iter()
        .enumerate()
        .map(|(index, text)| format!("{}. {text}\n", index + 1))
        .collect();
    sections.push(format!("RECOMMENDATIONS\n---------------\n{numbered}"));

    sections.push(format!("{RULE}\nGenerated by rolefit\n"));

    sections.join("\n")
}

/// Formats items as a dashed bullet list, one per line.
fn bullet_list<'a>(items: impl Iterator<Item = &'a str>) -> String {
    items.map(|item| format!("- {item}\n")).collect()
}

#[cfg(test)]
mod test {
    use chrono::{TimeZone, Utc};

    use super::*;

    fn sample_result(effectiveness: f32) -> ScoringResult {
        ScoringResult {
            effectiveness,
            predicted_role: "Data Science".to_string(),
            target_role: "Data Science".to_string(),
            role_match: true,
            required_skills: vec!["Python".to_string(), "SQL".to_string()],
            present_skills: vec!["Python".to_string()],
            missing_skills: vec!["SQL".to_string()],
            role_subscore: 40.0,
            skill_subscore: 20.0,
            description_subscore: 5.0,
            timestamp: Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap(),
        }
    }

    #[test]
    fn text_report_has_all_sections() {
        let report = text_report(
            &sample_result(65.0),
            &["Portfolio project"],
            &["Add core skill: SQL".to_string()],
            &["Use action verbs"],
        );

        for section in [
            "RESUME ANALYSIS REPORT",
            "OVERVIEW",
            "SCORE BREAKDOWN",
            "SKILLS ANALYSIS",
            "PROJECT SUGGESTIONS",
            "IMPROVEMENT SUGGESTIONS",
            "IMPROVEMENT TIPS",
            "RECOMMENDATIONS",
        ] {
            assert!(report.contains(section), "missing section: {section}");
        }

        assert!(report.contains("Effectiveness Score: 65%"));
        assert!(report.contains("Generated on: 2024-03-01 12:00:00"));
        assert!(report.contains("Skills Match: 1/2 skills found (20.0/40)"));
        assert!(report.contains("- Portfolio project"));
        assert!(report.contains("- Use action verbs"));
    }

    #[test]
    fn empty_gap_suggestions_omit_the_section() {
        let report = text_report(&sample_result(65.0), &[], &[], &[]);
        assert!(!report.contains("IMPROVEMENT SUGGESTIONS"));
        assert!(report.contains("IMPROVEMENT TIPS"));
    }

    #[test]
    fn recommendations_switch_on_threshold() {
        let strong = text_report(&sample_result(75.0), &[], &[], &[]);
        assert!(strong.contains("well-targeted"));

        let weak = text_report(&sample_result(45.0), &[], &[], &[]);
        assert!(weak.contains("adding missing skills"));
    }

    #[test]
    fn evaluation_table_lists_every_class() {
        use rolefit_model::{ClassMetrics, EvaluationReport};

        let report = EvaluationReport {
            accuracy: 0.9,
            per_class: vec![
                ClassMetrics {
                    label: "Data Science".to_string(),
                    precision: 1.0,
                    recall: 0.8,
                    f1: 0.89,
                    support: 5,
                },
                ClassMetrics {
                    label: "HR".to_string(),
                    precision: 0.83,
                    recall: 1.0,
                    f1: 0.91,
                    support: 5,
                },
            ],
            test_size: 10,
        };

        let rendered = evaluation_table(&report).to_string();
        assert!(rendered.contains("Data Science"));
        assert!(rendered.contains("HR"));
        assert!(rendered.contains("Precision"));
    }
}
