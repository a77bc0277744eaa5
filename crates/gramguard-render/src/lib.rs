//! Rendering utilities for the console and CI surfaces (text, Markdown, GitHub annotations).

#![forbid(unsafe_code)]

mod gha;
mod markdown;
mod model;
mod text;

pub use gha::render_github_annotations;
pub use markdown::render_markdown;
pub use model::{RenderableReport, RenderableVerdict, RenderableViolation};
pub use text::render_text;

#[cfg(test)]
pub(crate) mod fixtures {
    use crate::{RenderableReport, RenderableVerdict, RenderableViolation};

    pub fn violation(label: &str, code: &str, line: u32, col: u32) -> RenderableViolation {
        RenderableViolation {
            label: label.to_string(),
            code: code.to_string(),
            file: Some("main.cpp".to_string()),
            line,
            col,
            context: Some("main".to_string()),
            snippet: None,
            message: None,
        }
    }

    pub fn report(violations: Vec<RenderableViolation>) -> RenderableReport {
        RenderableReport {
            verdict: if violations.is_empty() {
                RenderableVerdict::Pass
            } else {
                RenderableVerdict::Fail
            },
            source: Some("main.cpp".to_string()),
            violations,
        }
    }
}
