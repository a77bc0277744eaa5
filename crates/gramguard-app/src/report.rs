use anyhow::Context;
use gramguard_render::{RenderableReport, RenderableVerdict, RenderableViolation};
use gramguard_types::{GramguardReport, ReportedViolation, SCHEMA_REPORT_V1, Verdict};

pub fn parse_report_json(text: &str) -> anyhow::Result<GramguardReport> {
    let report: GramguardReport = serde_json::from_str(text).context("parse report json")?;
    if report.schema != SCHEMA_REPORT_V1 {
        anyhow::bail!(
            "unknown report schema: {} (expected {SCHEMA_REPORT_V1})",
            report.schema
        );
    }
    Ok(report)
}

pub fn serialize_report(report: &GramguardReport) -> anyhow::Result<Vec<u8>> {
    serde_json::to_vec_pretty(report).context("serialize report")
}

pub fn to_renderable(report: &GramguardReport) -> RenderableReport {
    RenderableReport {
        verdict: match report.verdict {
            Verdict::Pass => RenderableVerdict::Pass,
            Verdict::Fail => RenderableVerdict::Fail,
        },
        source: report.data.source.clone(),
        violations: report.violations.iter().map(renderable_violation).collect(),
    }
}

fn renderable_violation(v: &ReportedViolation) -> RenderableViolation {
    RenderableViolation {
        label: v.kind.label(),
        code: v.kind.code().to_string(),
        file: v.location.file.clone(),
        line: v.location.line,
        col: v.location.col,
        context: v.context.name.clone(),
        snippet: v.snippet.clone(),
        message: v.message.clone(),
    }
}
