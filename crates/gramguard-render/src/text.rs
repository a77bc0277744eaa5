use crate::RenderableReport;

/// Console format: a header line, then `LABEL (line, column) snippet` per violation.
///
/// A clean report renders as nothing.
pub fn render_text(report: &RenderableReport) -> String {
    let mut out = String::new();
    if report.violations.is_empty() {
        return out;
    }

    out.push_str(&format!(
        "Found {} violations in {}:\n",
        report.violations.len(),
        report.display_source()
    ));
    for v in &report.violations {
        out.push_str(&format!("{} ({}, {})", v.label, v.line, v.col));
        if let Some(snippet) = &v.snippet {
            out.push(' ');
            out.push_str(snippet);
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{report, violation};

    #[test]
    fn clean_report_renders_nothing() {
        assert_eq!(render_text(&report(vec![])), "");
    }

    #[test]
    fn renders_header_and_one_line_per_violation() {
        let mut first = violation("LOOP", "loop", 3, 5);
        first.snippet = Some("for (;;) {}".to_string());
        let second = violation("GOTO", "goto", 7, 9);

        let text = render_text(&report(vec![first, second]));
        assert_eq!(
            text,
            "Found 2 violations in main.cpp:\nLOOP (3, 5) for (;;) {}\nGOTO (7, 9)\n"
        );
    }

    #[test]
    fn unknown_source_has_a_placeholder() {
        let mut r = report(vec![violation("ARRAY", "array", 1, 1)]);
        r.source = None;
        assert!(render_text(&r).starts_with("Found 1 violations in <unknown source>:"));
    }
}
