//! Front-end adapters: discover, read and validate serialized syntax trees.
//!
//! This crate is allowed to do filesystem IO. It never runs the C/C++ front end itself; trees
//! are produced elsewhere and handed over as `gramguard.tree.v1` JSON documents.

#![forbid(unsafe_code)]

mod discover;
mod document;
mod includes;

use anyhow::Context;
use camino::Utf8Path;
use gramguard_domain::TranslationUnit;

pub use discover::discover_trees;
pub use document::{TreeDocument, parse_tree_json};
pub use includes::canonicalize_includes;

/// Fuzz-friendly API for testing parsing robustness without filesystem access.
/// These functions are designed to never panic on any input.
pub mod fuzz {
    /// Parse arbitrary text as a tree document, including reference validation.
    ///
    /// Returns `Ok(())` on a well-formed document, `Err(...)` otherwise. **Never panics** on
    /// any input.
    pub fn parse_tree(text: &str) -> anyhow::Result<()> {
        let _ = super::parse_tree_json(text)?;
        Ok(())
    }
}

/// Read, validate and prepare the tree stored at `path`.
///
/// Existing include targets are replaced by their real path so that symlinked headers are
/// judged by where they actually live.
pub fn load_translation_unit(path: &Utf8Path) -> anyhow::Result<TranslationUnit> {
    let text = std::fs::read_to_string(path).with_context(|| format!("read {path}"))?;
    let mut unit = parse_tree_json(&text).with_context(|| format!("parse {path}"))?;
    let resolved = canonicalize_includes(&mut unit);

    tracing::debug!(
        tree = %path,
        types = unit.types.len(),
        includes_resolved = resolved,
        "loaded syntax tree"
    );
    Ok(unit)
}
