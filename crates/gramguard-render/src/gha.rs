use crate::RenderableReport;

/// Render violations as GitHub Actions workflow command annotations.
///
/// Format:
/// `::error file={path},line={line},col={col}::{message}`
pub fn render_github_annotations(report: &RenderableReport) -> Vec<String> {
    let mut out = Vec::new();

    for v in &report.violations {
        let mut meta = String::new();
        if let Some(file) = v.file.as_deref().or(report.source.as_deref()) {
            meta.push_str(&format!("file={},", escape_property(file)));
        }
        meta.push_str(&format!("line={},col={}", v.line, v.col));

        let mut message = format!("[gramguard:{}] {}", v.code, v.label);
        if let Some(detail) = &v.message {
            message.push_str(&format!(": {detail}"));
        }
        if let Some(context) = &v.context {
            message.push_str(&format!(" (in {context})"));
        }

        out.push(format!("::error {}::{}", meta, escape_data(&message)));
    }

    out
}

fn escape_data(s: &str) -> String {
    s.replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

fn escape_property(s: &str) -> String {
    escape_data(s).replace(':', "%3A").replace(',', "%2C")
}
