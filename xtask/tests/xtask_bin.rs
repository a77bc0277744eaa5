use std::process::Command;

#[test]
fn xtask_help_runs() {
    let exe = env!("CARGO_BIN_EXE_xtask");
    let output = Command::new(exe)
        .arg("help")
        .output()
        .expect("run xtask");

    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("xtask commands"));
}

#[test]
fn xtask_explain_coverage_passes() {
    let exe = env!("CARGO_BIN_EXE_xtask");
    let output = Command::new(exe)
        .arg("explain-coverage")
        .output()
        .expect("run xtask");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("violation kinds have explanations"));
}

#[test]
fn xtask_lists_schema_ids() {
    let exe = env!("CARGO_BIN_EXE_xtask");
    let output = Command::new(exe)
        .arg("print-schema-ids")
        .output()
        .expect("run xtask");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let printed: Vec<&str> = stdout.lines().collect();
    assert_eq!(
        printed,
        vec![
            gramguard_types::ids::SCHEMA_REPORT_V1,
            gramguard_types::ids::SCHEMA_CONFIG_V1,
            gramguard_types::ids::SCHEMA_TREE_V1,
        ]
    );
}

#[test]
fn xtask_has_no_schema_drift_check_without_committed_schemas() {
    let exe = env!("CARGO_BIN_EXE_xtask");
    let help = Command::new(exe).arg("help").output().expect("run xtask");
    assert!(!String::from_utf8_lossy(&help.stderr).contains("validate-schemas"));

    let output = Command::new(exe)
        .arg("validate-schemas")
        .output()
        .expect("run xtask");
    assert!(!output.status.success());
}

#[test]
fn xtask_fixture_trees_conform() {
    let exe = env!("CARGO_BIN_EXE_xtask");
    let output = Command::new(exe).arg("conform").output().expect("run xtask");

    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
}

#[test]
fn xtask_rejects_unknown_command() {
    let exe = env!("CARGO_BIN_EXE_xtask");
    let output = Command::new(exe).arg("frobnicate").output().expect("run xtask");

    assert!(!output.status.success());
}
