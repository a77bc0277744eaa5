//! Render use cases over in-memory reports.

use crate::report::to_renderable;
use gramguard_types::GramguardReport;

pub fn render_text(report: &GramguardReport) -> String {
    gramguard_render::render_text(&to_renderable(report))
}

pub fn render_markdown(report: &GramguardReport) -> String {
    gramguard_render::render_markdown(&to_renderable(report))
}

pub fn render_annotations(report: &GramguardReport, max: usize) -> Vec<String> {
    gramguard_render::render_github_annotations(&to_renderable(report))
        .into_iter()
        .take(max)
        .collect()
}
