//! Conformance tests for gramguard.
//!
//! These tests validate:
//! 1. Every violation kind has an explanation
//! 2. Reports produced from every fixture validate against the report schema
//! 3. Reports are reproducible apart from timestamps

use assert_cmd::Command;
use gramguard_types::{GramguardReport, explain};
use serde_json::Value;
use std::path::PathBuf;
use walkdir::WalkDir;

#[allow(deprecated)]
fn gramguard_cmd() -> Command {
    Command::cargo_bin("gramguard").unwrap()
}

fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .expect("gramguard-cli should have parent")
        .parent()
        .expect("crates should have parent")
        .join("tests")
        .join("fixtures")
}

fn fixture_trees() -> Vec<PathBuf> {
    let mut trees: Vec<PathBuf> = WalkDir::new(fixtures_dir())
        .into_iter()
        .filter_map(Result::ok)
        .map(|e| e.into_path())
        .filter(|p| p.to_string_lossy().ends_with(".tree.json"))
        .collect();
    trees.sort();
    trees
}

/// Run `check --format json` from the tree's directory so its config applies.
fn report_for(tree: &PathBuf) -> Value {
    let dir = tree.parent().expect("tree has parent");
    let output = gramguard_cmd()
        .current_dir(dir)
        .args(["check", "--format", "json"])
        .arg(tree.file_name().expect("file name"))
        .output()
        .expect("run gramguard");
    assert!(
        matches!(output.status.code(), Some(0) | Some(2)),
        "{}: {}",
        tree.display(),
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).expect("json report")
}

fn without_timestamps(mut report: Value) -> Value {
    if let Some(obj) = report.as_object_mut() {
        obj.remove("started_at");
        obj.remove("finished_at");
    }
    report
}

#[test]
fn all_codes_have_explanations() {
    for code in explain::all_codes() {
        let exp = explain::lookup_explanation(code)
            .unwrap_or_else(|| panic!("Code '{}' has no explanation in registry", code));
        assert!(!exp.title.is_empty(), "Code '{}' has empty title", code);
        assert!(
            !exp.description.is_empty(),
            "Code '{}' has empty description",
            code
        );
        assert!(
            !exp.remediation.is_empty(),
            "Code '{}' has empty remediation",
            code
        );
    }
}

#[test]
fn fixtures_exist() {
    assert!(fixture_trees().len() >= 3, "expected fixture trees");
}

#[test]
fn fixture_reports_validate_against_schema() {
    let schema = serde_json::to_value(schemars::schema_for!(GramguardReport)).expect("schema");
    let validator = jsonschema::validator_for(&schema).expect("compile schema");

    for tree in fixture_trees() {
        let report = report_for(&tree);
        let errors: Vec<String> = validator
            .iter_errors(&report)
            .map(|e| e.to_string())
            .collect();
        assert!(errors.is_empty(), "{}: {:?}", tree.display(), errors);
    }
}

#[test]
fn fixture_reports_are_reproducible() {
    for tree in fixture_trees() {
        let first = without_timestamps(report_for(&tree));
        let second = without_timestamps(report_for(&tree));
        assert_eq!(first, second, "{}", tree.display());
    }
}

#[test]
fn fingerprints_are_unique_within_a_report() {
    for tree in fixture_trees() {
        let report = report_for(&tree);
        let mut fingerprints: Vec<&str> = report["violations"]
            .as_array()
            .expect("violations")
            .iter()
            .filter_map(|v| v["fingerprint"].as_str())
            .collect();
        let total = fingerprints.len();
        fingerprints.sort();
        fingerprints.dedup();
        assert_eq!(fingerprints.len(), total, "{}", tree.display());
    }
}
