//! Plain-text views of a review

use shared_types::{Issue, StructuredDoc};

/// The restructured contract as readable text
pub fn to_text(doc: &StructuredDoc) -> String {
    doc.to_string()
}

/// Issue checklist, one entry per issue with its section hint
pub fn issues_to_text(issues: &[Issue]) -> String {
    if issues.is_empty() {
        return "No issues found.\n".to_string();
    }

    let mut output = String::new();
    for issue in issues {
        let mark = if issue.resolved { "x" } else { " " };
        output.push_str(&format!("[{}] {} ({})\n", mark, issue.title, issue.id()));
        output.push_str(&format!("    {}\n", issue.description));
        if let Some(location) = issue.location {
            output.push_str(&format!("    Section: {}\n", location));
        }
    }
    output
}
