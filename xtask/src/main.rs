//! Developer tasks (schema generation, fixture conformance, explain coverage).
//!
//! Keeping this separate avoids bloating the end-user CLI.

use anyhow::{Context, bail};
use camino::{Utf8Path, Utf8PathBuf};
use gramguard_types::ids;
use schemars::schema_for;
use std::fs;
use walkdir::WalkDir;

/// The workspace root (parent of the xtask directory).
fn project_root() -> Utf8PathBuf {
    let manifest_dir = Utf8Path::new(env!("CARGO_MANIFEST_DIR"));
    manifest_dir
        .parent()
        .unwrap_or(manifest_dir)
        .to_path_buf()
}

fn schemas_dir() -> Utf8PathBuf {
    project_root().join("schemas")
}

fn fixtures_dir() -> Utf8PathBuf {
    project_root().join("tests").join("fixtures")
}

/// A generated schema and the document id it describes.
struct SchemaSpec {
    id: &'static str,
    generate: fn() -> schemars::Schema,
}

impl SchemaSpec {
    fn filename(&self) -> String {
        format!("{}.json", self.id)
    }
}

fn generate_report_schema() -> schemars::Schema {
    schema_for!(gramguard_types::GramguardReport)
}

fn generate_config_schema() -> schemars::Schema {
    schema_for!(gramguard_settings::GramguardConfigV1)
}

fn generate_tree_schema() -> schemars::Schema {
    schema_for!(gramguard_tree::TreeDocument)
}

fn schema_specs() -> Vec<SchemaSpec> {
    vec![
        SchemaSpec {
            id: ids::SCHEMA_REPORT_V1,
            generate: generate_report_schema,
        },
        SchemaSpec {
            id: ids::SCHEMA_CONFIG_V1,
            generate: generate_config_schema,
        },
        SchemaSpec {
            id: ids::SCHEMA_TREE_V1,
            generate: generate_tree_schema,
        },
    ]
}

/// Serialize a schema to pretty-printed JSON with trailing newline.
fn serialize_schema(schema: &schemars::Schema) -> anyhow::Result<String> {
    let mut json = serde_json::to_string_pretty(schema).context("Failed to serialize schema")?;
    json.push('\n');
    Ok(json)
}

fn emit_schemas() -> anyhow::Result<()> {
    let dir = schemas_dir();
    fs::create_dir_all(&dir).context("Failed to create schemas directory")?;

    for spec in schema_specs() {
        let json = serialize_schema(&(spec.generate)())?;
        let path = dir.join(spec.filename());
        fs::write(&path, &json).with_context(|| format!("Failed to write schema to {}", path))?;
        println!("Wrote {}", path);
    }

    println!("\nSchemas emitted successfully.");
    Ok(())
}

fn print_help() {
    eprintln!("xtask commands:");
    eprintln!("  help              Show this message");
    eprintln!("  emit-schemas      Generate JSON schemas from Rust types to schemas/");
    eprintln!("  print-schema-ids  Print known schema IDs");
    eprintln!("  conform           Validate fixture trees against the tree schema and loader");
    eprintln!("  explain-coverage  Validate all violation kinds have explanations");
}

/// Every `*.tree.json` under tests/fixtures must satisfy the generated tree schema and load
/// cleanly (type references included).
fn conform() -> anyhow::Result<()> {
    let schema_value = serde_json::to_value(generate_tree_schema())?;
    let validator = jsonschema::validator_for(&schema_value)
        .map_err(|e| anyhow::anyhow!("Failed to compile tree schema: {}", e))?;

    let mut checked = 0;
    let mut errors = Vec::new();

    for entry in WalkDir::new(fixtures_dir()).sort_by_file_name() {
        let entry = entry.context("Failed to walk tests/fixtures/")?;
        let Some(path) = Utf8Path::from_path(entry.path()) else {
            continue;
        };
        if !path.as_str().ends_with(".tree.json") {
            continue;
        }
        checked += 1;

        let content = fs::read_to_string(path).with_context(|| format!("Failed to read {path}"))?;
        let value: serde_json::Value = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse {path} as JSON"))?;
        for err in validator.iter_errors(&value) {
            errors.push(format!("{path}: schema validation: {err}"));
        }
        if let Err(err) = gramguard_tree::load_translation_unit(path) {
            errors.push(format!("{path}: load: {err:#}"));
        }
    }

    if !errors.is_empty() {
        eprintln!("\nConformance errors:");
        for err in &errors {
            eprintln!("  - {}", err);
        }
        bail!("Conformance validation failed with {} errors", errors.len());
    }

    println!("✓ {} fixture trees conform", checked);
    Ok(())
}

fn explain_coverage() -> anyhow::Result<()> {
    let codes = gramguard_types::explain::all_codes();
    let mut errors = Vec::new();

    for code in &codes {
        match gramguard_types::explain::lookup_explanation(code) {
            Some(exp) => {
                if exp.title.is_empty() {
                    errors.push(format!("Kind '{}' has empty title", code));
                }
                if exp.description.is_empty() {
                    errors.push(format!("Kind '{}' has empty description", code));
                }
                if exp.remediation.is_empty() {
                    errors.push(format!("Kind '{}' has empty remediation", code));
                }
            }
            None => errors.push(format!("Kind '{}' has no explanation", code)),
        }
    }

    if errors.is_empty() {
        println!("✓ {} violation kinds have explanations", codes.len());
        Ok(())
    } else {
        for error in &errors {
            eprintln!("  - {}", error);
        }
        bail!(
            "Explain coverage validation failed with {} errors",
            errors.len()
        )
    }
}

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let cmd = args.get(1).map(|s| s.as_str()).unwrap_or("help");

    match cmd {
        "help" | "--help" | "-h" => {
            print_help();
            Ok(())
        }
        "emit-schemas" => emit_schemas(),
        "conform" => conform(),
        "explain-coverage" => explain_coverage(),
        "print-schema-ids" => {
            for spec in schema_specs() {
                println!("{}", spec.id);
            }
            Ok(())
        }
        other => bail!("unknown xtask command: {other}\n\nRun `cargo xtask help` for usage."),
    }
    .context("xtask failed")
}
