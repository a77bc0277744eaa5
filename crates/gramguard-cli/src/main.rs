//! CLI entry point for gramguard.
//!
//! This module is intentionally thin: it handles argument parsing, logging setup, I/O, and exit
//! codes. All business logic lives in the `gramguard-app` crate.

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use clap::{Parser, Subcommand, ValueEnum};
use gramguard_app::{
    CheckInput, CheckManyInput, CheckOutput, ExplainOutput, parse_report_json,
    render_annotations, render_markdown, render_text, run_check, run_check_many, run_explain,
    serialize_report, verdict_exit_code,
};
use gramguard_settings::Overrides;
use gramguard_types::GramguardReport;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

const DEFAULT_CONFIG: &str = "gramguard.toml";
const LOG_ENV: &str = "GRAMGUARD_LOG";

#[derive(Parser, Debug)]
#[command(
    name = "gramguard",
    version,
    about = "Grammar-subset policy checker for C/C++ translation units"
)]
struct Cli {
    /// Path to gramguard config TOML (default: ./gramguard.toml when present).
    #[arg(long)]
    config: Option<Utf8PathBuf>,

    /// Override the project root; headers under it are never restricted.
    #[arg(long)]
    base_path: Option<Utf8PathBuf>,

    /// Override the source encoding label (e.g. utf-8, gbk).
    #[arg(long)]
    encoding: Option<String>,

    /// Log at debug level (GRAMGUARD_LOG takes precedence).
    #[arg(long)]
    debug: bool,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Check one or more syntax trees against the policy.
    Check {
        /// Tree files (`*.tree.json`) or directories to search for them.
        #[arg(required = true)]
        trees: Vec<Utf8PathBuf>,

        /// Source file for snippets (single tree only; defaults to the tree's `source`).
        #[arg(long)]
        source: Option<Utf8PathBuf>,

        /// Output format written to stdout.
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// Where to write the JSON report. With several trees this is a directory.
        #[arg(long)]
        report_out: Option<Utf8PathBuf>,
    },

    /// Render markdown from an existing JSON report.
    Md {
        /// Path to the JSON report file.
        #[arg(long)]
        report: Utf8PathBuf,

        /// Where to write the Markdown output (if not specified, prints to stdout).
        #[arg(long, short)]
        output: Option<Utf8PathBuf>,
    },

    /// Explain a violation kind with remediation guidance.
    Explain {
        /// The kind code (e.g. "static_local") or console label (e.g. "STATIC_LOCAL").
        identifier: String,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
    Markdown,
    Annotations,
}

/// Annotations per report; GitHub truncates beyond this anyway.
const MAX_ANNOTATIONS: usize = 50;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match &cli.cmd {
        Commands::Check {
            trees,
            source,
            format,
            report_out,
        } => cmd_check(&cli, trees, source.as_deref(), *format, report_out.as_deref()),
        Commands::Md { report, output } => {
            init_tracing(cli.debug);
            cmd_md(report, output.as_deref())
        }
        Commands::Explain { identifier } => cmd_explain(identifier),
    }
}

fn init_tracing(debug: bool) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(if debug { "debug" } else { "warn" }));
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();
}

fn cmd_check(
    cli: &Cli,
    trees: &[Utf8PathBuf],
    source: Option<&Utf8Path>,
    format: OutputFormat,
    report_out: Option<&Utf8Path>,
) -> anyhow::Result<()> {
    let result = (|| -> anyhow::Result<i32> {
        let (cfg_path, cfg_text) = load_config_text(cli.config.as_deref())?;
        init_tracing(cli.debug || debug_from_config(&cfg_text));
        tracing::debug!(config = %cfg_path, "config loaded");

        let overrides = Overrides {
            config_dir: Some(config_dir(&cfg_path)),
            base_path: cli.base_path.clone(),
            encoding: cli.encoding.clone(),
            debug: cli.debug.then_some(true),
        };

        let tree_paths = gramguard_tree::discover_trees(trees)?;
        if tree_paths.is_empty() {
            anyhow::bail!("no syntax trees found");
        }

        let outputs = if let [tree_path] = tree_paths.as_slice() {
            let output = run_check(CheckInput {
                tree_path,
                source_path: source,
                config_text: &cfg_text,
                overrides,
            })?;
            if let Some(path) = report_out {
                write_report_file(path, &output.report).context("write report json")?;
            }
            vec![output]
        } else {
            if source.is_some() {
                anyhow::bail!("--source applies to a single tree, got {}", tree_paths.len());
            }
            let outputs = run_check_many(CheckManyInput {
                tree_paths: &tree_paths,
                config_text: &cfg_text,
                overrides,
            })?;
            if let Some(dir) = report_out {
                write_report_dir(dir, &tree_paths, &outputs)?;
            }
            outputs
        };

        for output in &outputs {
            emit(&output.report, format)?;
        }

        Ok(outputs
            .iter()
            .map(|o| verdict_exit_code(o.report.verdict))
            .max()
            .unwrap_or(0))
    })();

    match result {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
            Ok(())
        }
        Err(err) => {
            eprintln!("gramguard error: {err:#}");
            std::process::exit(1);
        }
    }
}

/// An explicit `--config` must exist; the default one may be absent (defaults apply), but an
/// existing default config that cannot be read is still an error.
fn load_config_text(explicit: Option<&Utf8Path>) -> anyhow::Result<(Utf8PathBuf, String)> {
    match explicit {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("read config: {}", path))?;
            Ok((path.to_path_buf(), text))
        }
        None => {
            let path = Utf8PathBuf::from(DEFAULT_CONFIG);
            match std::fs::read_to_string(&path) {
                Ok(text) => Ok((path, text)),
                Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                    Ok((path, String::new()))
                }
                Err(err) => Err(err).with_context(|| format!("read config: {}", path)),
            }
        }
    }
}

fn config_dir(cfg_path: &Utf8Path) -> Utf8PathBuf {
    match cfg_path.parent() {
        Some(dir) if !dir.as_str().is_empty() => dir.to_path_buf(),
        _ => Utf8PathBuf::from("."),
    }
}

/// Peek at `common.debug` so logging is configured before full resolution runs.
fn debug_from_config(cfg_text: &str) -> bool {
    gramguard_settings::parse_config_toml(cfg_text)
        .ok()
        .and_then(|cfg| cfg.common.debug)
        .unwrap_or(false)
}

fn emit(report: &GramguardReport, format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => print!("{}", render_text(report)),
        OutputFormat::Markdown => print!("{}", render_markdown(report)),
        OutputFormat::Annotations => {
            for annotation in render_annotations(report, MAX_ANNOTATIONS) {
                println!("{}", annotation);
            }
        }
        OutputFormat::Json => {
            let data = serialize_report(report).context("serialize report")?;
            println!("{}", String::from_utf8_lossy(&data));
        }
    }
    Ok(())
}

/// One `<stem>.report.json` per tree, named after the tree file.
fn write_report_dir(
    dir: &Utf8Path,
    tree_paths: &[Utf8PathBuf],
    outputs: &[CheckOutput],
) -> anyhow::Result<()> {
    let mut seen = std::collections::BTreeSet::new();
    for (tree_path, output) in tree_paths.iter().zip(outputs) {
        let name = report_file_name(tree_path);
        if !seen.insert(name.clone()) {
            anyhow::bail!("two trees map to the same report file: {}", name);
        }
        write_report_file(&dir.join(&name), &output.report)
            .with_context(|| format!("write report for {}", tree_path))?;
    }
    Ok(())
}

fn report_file_name(tree_path: &Utf8Path) -> String {
    let file_name = tree_path.file_name().unwrap_or("tree.json");
    let stem = file_name
        .strip_suffix(".tree.json")
        .or_else(|| file_name.strip_suffix(".json"))
        .unwrap_or(file_name);
    format!("{stem}.report.json")
}

fn write_report_file(path: &Utf8Path, report: &GramguardReport) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).with_context(|| format!("create directory: {}", parent))?;
    }
    let data = serialize_report(report).context("serialize report")?;
    std::fs::write(path, data).with_context(|| format!("write report: {}", path))?;
    Ok(())
}

fn write_text_file(path: &Utf8Path, text: &str) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).with_context(|| format!("create directory: {}", parent))?;
    }
    std::fs::write(path, text).with_context(|| format!("write text: {}", path))?;
    Ok(())
}

fn cmd_md(report_path: &Utf8Path, output: Option<&Utf8Path>) -> anyhow::Result<()> {
    let report_text = std::fs::read_to_string(report_path)
        .with_context(|| format!("read report: {}", report_path))?;
    let report = parse_report_json(&report_text)?;
    let md = render_markdown(&report);

    if let Some(out_path) = output {
        write_text_file(out_path, &md).context("write markdown output")?;
    } else {
        print!("{}", md);
    }

    Ok(())
}

fn cmd_explain(identifier: &str) -> anyhow::Result<()> {
    match run_explain(identifier) {
        ExplainOutput::Found(exp) => {
            print!("{}", gramguard_app::format_explanation(&exp));
            Ok(())
        }
        ExplainOutput::NotFound {
            identifier,
            available_codes,
        } => {
            eprint!(
                "{}",
                gramguard_app::format_not_found(&identifier, &available_codes)
            );
            std::process::exit(1);
        }
    }
}
