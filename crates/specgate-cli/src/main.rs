// crates/specgate-cli/src/main.rs
// ============================================================================
// Module: Specgate CLI Entry Point
// Description: Command-line front-end for the specification scanner.
// Purpose: Load inputs, run the scan and validators, render the report.
// Dependencies: clap, specgate-config, specgate-core, specgate-report,
// specgate-validators, thiserror, tracing, tracing-subscriber
// ============================================================================

//! ## Overview
//! The Specgate CLI validates one Swagger/OpenAPI specification file against
//! a forbidden-keys rule configuration and the built-in validator set. All
//! fatal load and parse failures happen before the core engine runs and map
//! to the configuration exit code. The scan itself never fails: its verdict
//! is carried by the exit code (0 clean, 1 violations, 2 load failure).

// ============================================================================
// SECTION: Modules
// ============================================================================

pub(crate) mod spec_loader;

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fs;
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use clap::ValueEnum;
use specgate_config::DEFAULT_CONFIG_PATH;
use specgate_config::load_rule_config;
use specgate_core::CompiledRuleSet;
use specgate_core::scan;
use specgate_report::ScanReport;
use specgate_report::render_document;
use specgate_report::render_json;
use specgate_report::render_text;
use specgate_validators::default_validators;
use thiserror::Error;
use tracing::debug;
use tracing::warn;
use tracing_subscriber::EnvFilter;

use crate::spec_loader::load_spec_document;

// ============================================================================
// SECTION: Exit Codes
// ============================================================================

/// Exit code for a clean scan.
const EXIT_CLEAN: u8 = 0;
/// Exit code when findings or issues are present.
const EXIT_VIOLATIONS: u8 = 1;
/// Exit code for configuration or specification load failures.
const EXIT_LOAD_FAILURE: u8 = 2;

// ============================================================================
// SECTION: CLI Types
// ============================================================================

/// Report output format selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
enum OutputFormat {
    /// Human-readable text report.
    #[default]
    Text,
    /// Machine-readable JSON report.
    Json,
}

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(
    name = "specgate",
    version,
    about = "Validates Swagger/OpenAPI specification files against a list of forbidden keys."
)]
struct Cli {
    /// Path to the Swagger/OpenAPI file to validate.
    #[arg(value_name = "SPEC_FILE")]
    spec_file: PathBuf,
    /// Path to the forbidden keys configuration YAML file.
    #[arg(long, value_name = "CONFIG_FILE", default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,
    /// Enable verbose output.
    #[arg(long, short = 'v')]
    verbose: bool,
    /// Output format for the validation report.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
    /// Write an additional standalone HTML report document to this path.
    #[arg(long, value_name = "PATH")]
    report: Option<PathBuf>,
}

// ============================================================================
// SECTION: CLI Errors
// ============================================================================

/// Fatal CLI error carrying a user-facing message.
#[derive(Debug, Error)]
#[error("{message}")]
struct CliError {
    /// Human-readable error message.
    message: String,
}

impl CliError {
    /// Constructs a new [`CliError`] from a message.
    const fn new(message: String) -> Self {
        Self {
            message,
        }
    }
}

/// CLI result alias for fallible operations.
type CliResult<T> = Result<T, CliError>;

// ============================================================================
// SECTION: Entry Point
// ============================================================================

/// CLI entry point returning an exit code.
fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(err) => emit_error(&err.to_string()),
    }
}

/// Executes the scan pipeline.
fn run() -> CliResult<ExitCode> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    debug!(
        spec = %cli.spec_file.display(),
        config = %cli.config.display(),
        "starting validation"
    );

    let config = load_rule_config(&cli.config)
        .map_err(|err| CliError::new(format!("configuration error: {err}")))?;
    let document = load_spec_document(&cli.spec_file)
        .map_err(|err| CliError::new(format!("spec file error: {err}")))?;

    let (rules, diagnostics) = CompiledRuleSet::compile(&config);
    for diagnostic in &diagnostics {
        warn!(
            index = diagnostic.index,
            pattern = %diagnostic.pattern,
            detail = %diagnostic.detail,
            "invalid forbidden-key pattern skipped"
        );
    }

    let findings = scan(&document, &rules);
    debug!(count = findings.len(), "deep search completed");

    let mut issues = Vec::new();
    for validator in default_validators() {
        let mut produced = validator.validate(&document);
        debug!(validator = validator.id(), count = produced.len(), "validator completed");
        issues.append(&mut produced);
    }

    let report = ScanReport::build(
        &cli.spec_file.display().to_string(),
        &cli.config.display().to_string(),
        findings,
        issues,
    );

    let rendered = match cli.format {
        OutputFormat::Text => render_text(&report),
        OutputFormat::Json => render_json(&report)
            .map_err(|err| CliError::new(format!("report error: {err}")))?,
    };
    write_stdout(&rendered).map_err(|err| CliError::new(format!("stdout write failed: {err}")))?;

    if let Some(path) = &cli.report {
        let html = render_document(&report);
        fs::write(path, html).map_err(|err| {
            CliError::new(format!("report document write failed ({}): {err}", path.display()))
        })?;
        debug!(path = %path.display(), "report document written");
    }

    Ok(ExitCode::from(verdict_code(&report)))
}

// ============================================================================
// SECTION: Verdict Mapping
// ============================================================================

/// Maps the report verdict to the process exit code value.
const fn verdict_code(report: &ScanReport) -> u8 {
    if report.has_violations() {
        EXIT_VIOLATIONS
    } else {
        EXIT_CLEAN
    }
}

// ============================================================================
// SECTION: Logging
// ============================================================================

/// Initializes stderr logging; verbose mode lowers the filter to debug.
fn init_tracing(verbose: bool) {
    let default_directive = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

// ============================================================================
// SECTION: Output Helpers
// ============================================================================

/// Writes the rendered report to stdout.
fn write_stdout(message: &str) -> std::io::Result<()> {
    let mut stdout = std::io::stdout();
    stdout.write_all(message.as_bytes())
}

/// Writes a single line to stderr.
fn write_stderr_line(message: &str) -> std::io::Result<()> {
    let mut stderr = std::io::stderr();
    writeln!(&mut stderr, "{message}")
}

/// Emits an error message to stderr and returns the load-failure exit code.
fn emit_error(message: &str) -> ExitCode {
    let _ = write_stderr_line(message);
    ExitCode::from(EXIT_LOAD_FAILURE)
}
