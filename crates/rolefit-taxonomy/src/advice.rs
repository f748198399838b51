//! Role-keyed advice content for the report layer.
//!
//! Project suggestions and resume tips are presentation content with no
//! scoring influence. They live here as lookup tables keyed by role rather
//! than as conditionals scattered through the report code.

use crate::Role;

/// Project suggestions for data-oriented and Python roles.
const SUGGESTIONS_DATA: &[&str] = &[
    "Machine learning model with real-world dataset",
    "Data visualization dashboard using Tableau or Power BI",
    "Web application using Flask or Django framework",
    "Automated data pipeline with Python scripts",
];

/// Project suggestions for web design roles.
const SUGGESTIONS_WEB: &[&str] = &[
    "Responsive portfolio website with modern design",
    "E-commerce website template with product catalog",
    "Web application using React or Vue.js framework",
    "Website redesign case study with before/after analysis",
];

/// Project suggestions for HR roles.
const SUGGESTIONS_HR: &[&str] = &[
    "Employee onboarding process documentation",
    "Performance management system design",
    "HR policy compliance audit report",
    "Employee engagement survey analysis",
];

/// Generic project suggestions for roles without a dedicated list.
const SUGGESTIONS_GENERIC: &[&str] = &[
    "Portfolio showcasing your best work samples",
    "Case study documenting a successful project",
    "Technical documentation for a complex process",
    "Certification in relevant tools or methodologies",
];

/// Static resume-writing tips, independent of role.
const TIPS: &[&str] = &[
    "Use action verbs to describe achievements",
    "Quantify results with specific numbers and metrics",
    "Keep resume length to 1-2 pages maximum",
    "Tailor content for each specific job application",
    "Highlight most relevant experience first",
    "Include relevant certifications and training",
];

/// General resume-content checks for gap-driven suggestions: each pair is
/// (substring to look for, suggestion to emit when absent).
const GENERAL_CHECKS: &[(&str, &str)] = &[
    (
        "quantifiable achievements",
        "Add quantifiable achievements (e.g., 'Improved efficiency by 30%')",
    ),
    (
        "action verbs",
        "Use strong action verbs (e.g., 'Developed', 'Implemented', 'Managed')",
    ),
    (
        "contact information",
        "Ensure contact info is present and clear",
    ),
    ("education section", "Include education details with dates"),
];

/// Maximum number of gap-driven suggestions returned.
const MAX_GAP_SUGGESTIONS: usize = 10;

/// Returns project suggestions for a role.
pub fn project_suggestions(role: &str) -> &'static [&'static str] {
    match role {
        "Data Science" | "Python Developer" => SUGGESTIONS_DATA,
        "Web Designing" => SUGGESTIONS_WEB,
        "HR" => SUGGESTIONS_HR,
        _ => SUGGESTIONS_GENERIC,
    }
}

/// Returns the static resume-writing tips.
pub fn resume_tips() -> &'static [&'static str] {
    TIPS
}

/// Builds gap-driven improvement suggestions for a role.
///
/// Checks the role's `Core` and `Tools` tiers for skills absent from the
/// resume text (case-insensitive containment, same rule as the matcher),
/// then appends general resume-content checks. Capped at 10 entries.
pub fn skill_gap_suggestions(role: &Role, resume_text: &str) -> Vec<String> {
    let haystack = resume_text.to_lowercase();
    let mut suggestions = Vec::new();

    if let Some(core) = role.tier("Core") {
        for skill in &core.skills {
            if !haystack.contains(&skill.to_lowercase()) {
                suggestions.push(format!("Add core skill: {skill}"));
            }
        }
    }

    if let Some(tools) = role.tier("Tools") {
        for tool in &tools.skills {
            if !haystack.contains(&tool.to_lowercase()) {
                suggestions.push(format!("Consider adding tool: {tool}"));
            }
        }
    }

    for (needle, suggestion) in GENERAL_CHECKS {
        if !haystack.contains(needle) {
            suggestions.push((*suggestion).to_string());
        }
    }

    suggestions.truncate(MAX_GAP_SUGGESTIONS);
    suggestions
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::Taxonomy;

    #[test]
    fn dedicated_roles_get_dedicated_suggestions() {
        assert_eq!(project_suggestions("Data Science"), SUGGESTIONS_DATA);
        assert_eq!(project_suggestions("Python Developer"), SUGGESTIONS_DATA);
        assert_eq!(project_suggestions("Web Designing"), SUGGESTIONS_WEB);
        assert_eq!(project_suggestions("HR"), SUGGESTIONS_HR);
    }

    #[test]
    fn other_roles_fall_back_to_generic() {
        assert_eq!(project_suggestions("Advocate"), SUGGESTIONS_GENERIC);
        assert_eq!(project_suggestions("Unknown Role"), SUGGESTIONS_GENERIC);
    }

    #[test]
    fn tips_are_static() {
        assert_eq!(resume_tips().len(), 6);
    }

    #[test]
    fn gap_suggestions_flag_missing_core_skills() {
        let taxonomy = Taxonomy::builtin();
        let role = taxonomy.role("Data Science").unwrap();
        let suggestions = skill_gap_suggestions(role, "I know Python and SQL");

        assert!(
            suggestions
                .iter()
                .any(|s| s == "Add core skill: Machine Learning")
        );
        assert!(!suggestions.iter().any(|s| s == "Add core skill: Python"));
    }

    #[test]
    fn gap_suggestions_are_capped() {
        let taxonomy = Taxonomy::builtin();
        let role = taxonomy.role("Data Science").unwrap();
        let suggestions = skill_gap_suggestions(role, "");

        assert_eq!(suggestions.len(), MAX_GAP_SUGGESTIONS);
    }

    #[test]
    fn gap_suggestions_match_case_insensitively() {
        let taxonomy = Taxonomy::builtin();
        let role = taxonomy.role("DevOps Engineer").unwrap();
        let suggestions = skill_gap_suggestions(role, "experience with DOCKER and kubernetes");

        assert!(!suggestions.iter().any(|s| s.contains("Docker")));
        assert!(!suggestions.iter().any(|s| s.contains("Kubernetes")));
    }
}
