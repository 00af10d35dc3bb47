//! CLI entry point for secctl.
//!
//! This module is intentionally thin: it handles argument parsing, I/O, logging setup, and exit
//! codes. All business logic lives in the `secctl-app` crate.

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use clap::{Parser, Subcommand, ValueEnum};
use secctl_app::{
    format_explanation, format_not_found, list_controls, parse_report_json, render_controls_text,
    render_markdown, render_report_text, render_single_test_text, render_status_text,
    render_tests_text, render_validate_text, run_explain, run_report, run_single_test,
    run_test_suite, run_validate, serialize_report, verdict_exit_code, CheckMode, ControlQuery,
    ExplainOutput, RunInput, RunOutput,
};
use secctl_settings::Overrides;
use secctl_types::SecctlReport;
use std::io::Write;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter (e.g. `debug`, `secctl_app=trace`).
const LOG_ENV: &str = "SECCTL_LOG";

#[derive(Parser, Debug)]
#[command(
    name = "secctl",
    version,
    about = "Security control validation: effectiveness scoring and control-test reporting"
)]
struct Cli {
    /// Path to secctl config TOML (missing file means defaults).
    #[arg(long, global = true, default_value = "secctl.toml")]
    config: Utf8PathBuf,

    /// Override profile (standard|strict|lenient).
    #[arg(long, global = true)]
    profile: Option<String>,

    /// Override the verification window in calendar months.
    #[arg(long, global = true)]
    max_age_months: Option<u32>,

    /// Override when to exit non-zero (never|ineffective|partial).
    #[arg(long, global = true)]
    fail_on: Option<String>,

    /// Output format for validation commands.
    #[arg(long, global = true, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Also write the JSON report to this path.
    #[arg(long, global = true)]
    report_out: Option<Utf8PathBuf>,

    /// Treat every control test as passing instead of using its recorded outcome.
    #[arg(long, global = true)]
    assume_pass: bool,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
    Md,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Validate all built-in security controls.
    Validate,

    /// Run control tests: one by id, or the whole suite.
    Test {
        /// Control test id (e.g. "test-001").
        id: Option<String>,
    },

    /// List available controls grouped by category.
    Controls {
        /// Only list controls in this category (e.g. "preventive").
        #[arg(long)]
        category: Option<String>,

        /// Only list controls with this implementation status (e.g. "implemented").
        #[arg(long)]
        status: Option<String>,
    },

    /// Validate controls and run control tests, then print both reports.
    Report,

    /// Summarize declared control status and scored effectiveness.
    Status,

    /// Explain an issue code or status label with remediation guidance.
    Explain {
        /// The issue code (e.g. "missing_owner") or status (e.g. "INEFFECTIVE") to explain.
        identifier: String,
    },

    /// Render markdown from an existing JSON report.
    Md {
        /// Path to the JSON report file.
        #[arg(long, default_value = "artifacts/secctl/report.json")]
        report: Utf8PathBuf,

        /// Where to write the Markdown output (if not specified, prints to stdout).
        #[arg(long, short)]
        output: Option<Utf8PathBuf>,
    },
}

fn main() {
    init_logging();
    let cli = Cli::parse();

    let outcome = run(&cli);
    let _ = std::io::stdout().flush();

    match outcome {
        Ok(0) => {}
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("secctl error: {err:#}");
            std::process::exit(1);
        }
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: &Cli) -> anyhow::Result<i32> {
    match &cli.cmd {
        Commands::Validate => {
            let config_text = read_config(&cli.config)?;
            let output = run_validate(run_input(cli, &config_text))?;
            emit_run(cli, &output, render_validate_text)
        }
        Commands::Test { id: Some(id) } => {
            let config_text = read_config(&cli.config)?;
            let output = run_single_test(run_input(cli, &config_text), id)?;
            write_report_out(cli, &output.report)?;
            match cli.format {
                Format::Text => print!("{}", render_single_test_text(&output)),
                Format::Json => print_json(&output.report)?,
                Format::Md => print!("{}", render_markdown(&output.report)),
            }
            Ok(verdict_exit_code(
                output.report.verdict,
                output.resolved_config.policy.fail_on,
            ))
        }
        Commands::Test { id: None } => {
            let config_text = read_config(&cli.config)?;
            let output = run_test_suite(run_input(cli, &config_text))?;
            emit_run(cli, &output, render_tests_text)
        }
        Commands::Controls { category, status } => {
            let config_text = read_config(&cli.config)?;
            let query = ControlQuery {
                category: category.clone(),
                status: status.clone(),
            };
            let controls = list_controls(run_input(cli, &config_text), &query)?;
            print!("{}", render_controls_text(&controls));
            Ok(0)
        }
        Commands::Report => {
            let config_text = read_config(&cli.config)?;
            let output = run_report(run_input(cli, &config_text))?;
            emit_run(cli, &output, render_report_text)
        }
        Commands::Status => {
            let config_text = read_config(&cli.config)?;
            let output = run_validate(run_input(cli, &config_text))?;
            emit_run(cli, &output, render_status_text)
        }
        Commands::Explain { identifier } => cmd_explain(identifier),
        Commands::Md { report, output } => cmd_md(report, output.as_deref()),
    }
}

fn run_input<'a>(cli: &Cli, config_text: &'a str) -> RunInput<'a> {
    RunInput {
        config_text,
        overrides: Overrides {
            profile: cli.profile.clone(),
            max_age_months: cli.max_age_months,
            fail_on: cli.fail_on.clone(),
        },
        check: if cli.assume_pass {
            CheckMode::AssumePass
        } else {
            CheckMode::Recorded
        },
    }
}

/// Missing config file is allowed (defaults apply); any other read failure is an error.
fn read_config(path: &Utf8Path) -> anyhow::Result<String> {
    match std::fs::read_to_string(path) {
        Ok(text) => Ok(text),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            debug!(path = %path, "config file not found; using defaults");
            Ok(String::new())
        }
        Err(err) => Err(err).with_context(|| format!("read config: {}", path)),
    }
}

fn emit_run(cli: &Cli, output: &RunOutput, text: fn(&RunOutput) -> String) -> anyhow::Result<i32> {
    write_report_out(cli, &output.report)?;
    match cli.format {
        Format::Text => println!("{}", text(output)),
        Format::Json => print_json(&output.report)?,
        Format::Md => print!("{}", render_markdown(&output.report)),
    }
    Ok(verdict_exit_code(
        output.report.verdict,
        output.resolved_config.policy.fail_on,
    ))
}

fn print_json(report: &SecctlReport) -> anyhow::Result<()> {
    let data = serialize_report(report)?;
    let text = String::from_utf8(data).context("report json is not utf-8")?;
    println!("{text}");
    Ok(())
}

fn write_report_out(cli: &Cli, report: &SecctlReport) -> anyhow::Result<()> {
    let Some(path) = &cli.report_out else {
        return Ok(());
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_str().is_empty()) {
        std::fs::create_dir_all(parent).with_context(|| format!("create directory: {}", parent))?;
    }
    let data = serialize_report(report).context("serialize report")?;
    std::fs::write(path, data).with_context(|| format!("write report: {}", path))?;
    Ok(())
}

fn write_text_file(path: &Utf8Path, text: &str) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_str().is_empty()) {
        std::fs::create_dir_all(parent).with_context(|| format!("create directory: {}", parent))?;
    }
    std::fs::write(path, text).with_context(|| format!("write text: {}", path))?;
    Ok(())
}

fn cmd_md(report_path: &Utf8Path, output: Option<&Utf8Path>) -> anyhow::Result<i32> {
    let report_text = std::fs::read_to_string(report_path)
        .with_context(|| format!("read report: {}", report_path))?;
    let report = parse_report_json(&report_text)?;
    let md = render_markdown(&report);

    if let Some(out_path) = output {
        write_text_file(out_path, &md).context("write markdown output")?;
    } else {
        print!("{}", md);
    }

    Ok(0)
}

fn cmd_explain(identifier: &str) -> anyhow::Result<i32> {
    match run_explain(identifier) {
        ExplainOutput::Found(exp) => {
            print!("{}", format_explanation(&exp));
            Ok(0)
        }
        ExplainOutput::NotFound {
            identifier,
            available_codes,
            available_statuses,
        } => {
            eprint!(
                "{}",
                format_not_found(&identifier, available_codes, available_statuses)
            );
            Ok(1)
        }
    }
}
