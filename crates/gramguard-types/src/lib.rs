//! Stable DTOs and IDs used across the gramguard workspace.
//!
//! This crate is intentionally boring:
//! - the violation taxonomy and its stable codes
//! - data types for the emitted report
//! - explain registry for remediation guidance

#![forbid(unsafe_code)]

pub mod explain;
pub mod ids;
pub mod kind;
pub mod receipt;

pub use explain::{ExamplePair, Explanation, lookup_explanation};
pub use kind::ViolationKind;
pub use receipt::{
    ContextRef, GramguardData, GramguardReport, Location, ReportEnvelope, ReportedViolation,
    SCHEMA_REPORT_V1, ToolMeta, Verdict,
};
