use crate::ViolationKind;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use time::OffsetDateTime;

pub use crate::ids::SCHEMA_REPORT_V1;

/// A check either completed cleanly or found violations.
///
/// "Could not complete" is never a verdict: it is an error and produces no report.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Pass,
    Fail,
}

impl Verdict {
    pub fn from_violation_count(count: usize) -> Self {
        if count == 0 {
            Verdict::Pass
        } else {
            Verdict::Fail
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Location {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
    pub line: u32,
    pub col: u32,
}

/// The innermost function/struct/class enclosing a violation, or the translation unit.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ContextRef {
    /// Node kind code, e.g. `function_decl` or `translation_unit`.
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ReportedViolation {
    pub kind: ViolationKind,
    pub location: Location,
    pub context: ContextRef,

    /// Offending source text, decoded with the configured encoding.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snippet: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    /// Stable identifier intended for dedup and trending.
    pub fingerprint: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ToolMeta {
    pub name: String,
    pub version: String,
}

/// Gramguard-specific summary payload for the report.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema, Default)]
pub struct GramguardData {
    /// Source file of the checked translation unit, as recorded by the front end.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,

    pub violations_total: u32,

    /// Violation count per kind code.
    #[serde(default)]
    pub counts: BTreeMap<String, u32>,
}

impl GramguardData {
    pub fn from_violations(source: Option<String>, violations: &[ReportedViolation]) -> Self {
        let mut counts = BTreeMap::new();
        for v in violations {
            *counts.entry(v.kind.code().to_string()).or_insert(0) += 1;
        }
        Self {
            source,
            violations_total: violations.len() as u32,
            counts,
        }
    }
}

/// The report envelope emitted for one checked translation unit.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ReportEnvelope<TData = GramguardData> {
    /// Versioned schema identifier for the envelope shape.
    pub schema: String,
    pub tool: ToolMeta,
    #[schemars(with = "String")]
    #[serde(with = "time::serde::rfc3339")]
    pub started_at: OffsetDateTime,
    #[schemars(with = "String")]
    #[serde(with = "time::serde::rfc3339")]
    pub finished_at: OffsetDateTime,
    pub verdict: Verdict,
    /// In traversal order.
    pub violations: Vec<ReportedViolation>,
    pub data: TData,
}

pub type GramguardReport = ReportEnvelope<GramguardData>;
