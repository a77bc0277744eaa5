//! The `check` use case: load a syntax tree, evaluate the policy and produce a report.

use crate::snippet::SourceText;
use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use gramguard_domain::{TranslationUnit, Violation};
use gramguard_settings::{Overrides, ResolvedConfig};
use gramguard_types::{
    ContextRef, GramguardData, GramguardReport, Location, ReportEnvelope, ReportedViolation,
    SCHEMA_REPORT_V1, ToolMeta, Verdict,
};
use rayon::prelude::*;
use time::OffsetDateTime;

/// Input for the check use case.
#[derive(Clone, Debug)]
pub struct CheckInput<'a> {
    /// Serialized syntax tree (`gramguard.tree.v1`).
    pub tree_path: &'a Utf8Path,
    /// Source file to take snippets from; defaults to the tree's `source`.
    pub source_path: Option<&'a Utf8Path>,
    /// Config file contents (empty string if not found).
    pub config_text: &'a str,
    /// CLI overrides.
    pub overrides: Overrides,
}

/// Input for checking several trees under one policy.
#[derive(Clone, Debug)]
pub struct CheckManyInput<'a> {
    pub tree_paths: &'a [Utf8PathBuf],
    pub config_text: &'a str,
    pub overrides: Overrides,
}

/// Output from the check use case.
#[derive(Clone, Debug)]
pub struct CheckOutput {
    /// The generated report.
    pub report: GramguardReport,
    /// The resolved configuration used.
    pub resolved_config: ResolvedConfig,
}

/// Run the check use case: parse config, load the tree, evaluate the policy, produce a report.
///
/// A tree the engine cannot evaluate is an error; no partial report is produced.
pub fn run_check(input: CheckInput<'_>) -> anyhow::Result<CheckOutput> {
    let resolved = resolve(input.config_text, input.overrides)?;
    let report = check_tree(input.tree_path, input.source_path, &resolved)?;
    Ok(CheckOutput {
        report,
        resolved_config: resolved,
    })
}

/// Check independent trees in parallel. Results come back in input order.
///
/// The first tree that cannot be checked fails the whole run.
pub fn run_check_many(input: CheckManyInput<'_>) -> anyhow::Result<Vec<CheckOutput>> {
    let resolved = resolve(input.config_text, input.overrides)?;
    let reports = input
        .tree_paths
        .par_iter()
        .map(|path| check_tree(path, None, &resolved))
        .collect::<anyhow::Result<Vec<_>>>()?;

    Ok(reports
        .into_iter()
        .map(|report| CheckOutput {
            report,
            resolved_config: resolved.clone(),
        })
        .collect())
}

/// Map verdict to exit code: 0 = pass, 2 = fail.
pub fn verdict_exit_code(verdict: Verdict) -> i32 {
    match verdict {
        Verdict::Pass => 0,
        Verdict::Fail => 2,
    }
}

fn resolve(config_text: &str, overrides: Overrides) -> anyhow::Result<ResolvedConfig> {
    // Parse config (empty is allowed, defaults apply).
    let cfg = if config_text.trim().is_empty() {
        gramguard_settings::GramguardConfigV1::default()
    } else {
        gramguard_settings::parse_config_toml(config_text).context("parse config")?
    };

    let mut resolved =
        gramguard_settings::resolve_config(cfg, overrides).context("resolve config")?;

    // Include targets are canonical, so the base path has to be as well.
    let base_path = &mut resolved.policy.header.base_path;
    match base_path.canonicalize_utf8() {
        Ok(real) => *base_path = real,
        Err(err) => {
            tracing::warn!(base_path = %base_path, error = %err, "base path not canonicalized");
        }
    }
    Ok(resolved)
}

fn check_tree(
    tree_path: &Utf8Path,
    source_override: Option<&Utf8Path>,
    resolved: &ResolvedConfig,
) -> anyhow::Result<GramguardReport> {
    let started_at = OffsetDateTime::now_utc();

    let unit = gramguard_tree::load_translation_unit(tree_path).context("load syntax tree")?;
    let violations = gramguard_domain::check(&unit, &resolved.policy)
        .with_context(|| format!("check {tree_path}"))?;

    let source = load_source(tree_path, source_override, &unit, &resolved.policy.encoding)?;
    let reported: Vec<ReportedViolation> = violations
        .iter()
        .map(|v| report_violation(v, &unit, source.as_ref()))
        .collect();

    let data = GramguardData::from_violations(unit.source.clone(), &reported);
    tracing::info!(
        tree = %tree_path,
        violations = data.violations_total,
        "check finished"
    );

    Ok(ReportEnvelope {
        schema: SCHEMA_REPORT_V1.to_string(),
        tool: ToolMeta {
            name: "gramguard".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
        started_at,
        finished_at: OffsetDateTime::now_utc(),
        verdict: Verdict::from_violation_count(reported.len()),
        violations: reported,
        data,
    })
}

/// An explicit source that cannot be read is an error; an implied one only costs the snippets.
fn load_source(
    tree_path: &Utf8Path,
    source_override: Option<&Utf8Path>,
    unit: &TranslationUnit,
    encoding: &str,
) -> anyhow::Result<Option<SourceText>> {
    if let Some(path) = source_override {
        return SourceText::read(path, encoding).map(Some);
    }

    let Some(recorded) = unit.source.as_deref() else {
        return Ok(None);
    };
    let path = match tree_path.parent() {
        Some(dir) => dir.join(recorded),
        None => Utf8PathBuf::from(recorded),
    };
    match SourceText::read(&path, encoding) {
        Ok(text) => Ok(Some(text)),
        Err(err) => {
            tracing::warn!(source = %path, error = %format!("{err:#}"), "snippets unavailable");
            Ok(None)
        }
    }
}

fn report_violation(
    v: &Violation<'_>,
    unit: &TranslationUnit,
    source: Option<&SourceText>,
) -> ReportedViolation {
    let location = v.location();
    let context = v.context;
    ReportedViolation {
        kind: v.kind,
        location: Location {
            file: location.file.clone().or_else(|| unit.source.clone()),
            line: location.line,
            col: location.column,
        },
        context: ContextRef {
            kind: context.kind.code().to_string(),
            name: (!context.spelling.is_empty()).then(|| context.spelling.clone()),
        },
        snippet: source.and_then(|s| s.snippet(v.node.extent)),
        message: v.message.clone(),
        fingerprint: v.fingerprint(),
    }
}
