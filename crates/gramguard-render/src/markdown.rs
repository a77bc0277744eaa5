use crate::{RenderableReport, RenderableVerdict};
use std::collections::BTreeMap;

pub fn render_markdown(report: &RenderableReport) -> String {
    let mut out = String::new();

    out.push_str("# Gramguard report\n\n");
    let verdict = match report.verdict {
        RenderableVerdict::Pass => "PASS",
        RenderableVerdict::Fail => "FAIL",
    };
    out.push_str(&format!(
        "- Source: `{}`\n- Verdict: **{}**\n- Violations: {}\n\n",
        report.display_source(),
        verdict,
        report.violations.len()
    ));

    if report.violations.is_empty() {
        out.push_str("No violations.\n");
        return out;
    }

    let mut counts: BTreeMap<&str, u32> = BTreeMap::new();
    for v in &report.violations {
        *counts.entry(v.label.as_str()).or_insert(0) += 1;
    }
    out.push_str("| Kind | Count |\n|---|---|\n");
    for (label, n) in &counts {
        out.push_str(&format!("| `{label}` | {n} |\n"));
    }

    out.push_str("\n## Violations\n\n");
    for v in &report.violations {
        out.push_str(&format!("- `{}` at {}:{}", v.label, v.line, v.col));
        if let Some(context) = &v.context {
            out.push_str(&format!(" in `{context}`"));
        }
        if let Some(message) = &v.message {
            out.push_str(&format!(": {message}"));
        }
        out.push('\n');
        if let Some(snippet) = &v.snippet {
            let fence = if snippet.contains("```") { "~~~" } else { "```" };
            out.push_str(&format!("  {fence}cpp\n"));
            for line in snippet.lines() {
                out.push_str(&format!("  {line}\n"));
            }
            out.push_str(&format!("  {fence}\n"));
        }
    }

    out
}
