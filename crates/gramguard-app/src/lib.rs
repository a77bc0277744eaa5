//! Use case orchestration for gramguard.
//!
//! This crate provides the application layer: use cases that coordinate the domain, tree,
//! settings and render layers. It is intentionally thin and delegates heavy lifting to them.
//!
//! The CLI crate depends on this; it only handles argument parsing and I/O.

#![forbid(unsafe_code)]

mod check;
mod explain;
mod render;
mod report;
mod snippet;

pub use check::{
    CheckInput, CheckManyInput, CheckOutput, run_check, run_check_many, verdict_exit_code,
};
pub use explain::{ExplainOutput, format_explanation, format_not_found, run_explain};
pub use render::{render_annotations, render_markdown, render_text};
pub use report::{parse_report_json, serialize_report, to_renderable};
