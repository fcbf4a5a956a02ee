//! CLI module for enumg
//!
//! ```text
//! enumg [-V] [-d <dir> | -d:<dir>] FILE...
//! enumg -v
//! ```
//!
//! ## Design
//!
//! The CLI uses clap for argument parsing with derive macros.
//! Command functions return `CliResult<T>` instead of calling `process::exit`.
//! Only the top-level `run()` function handles errors and exits.

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod commands;

use std::fmt;
use std::path::PathBuf;
use std::process;

use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use crate::config::{GeneratorConfig, Verbosity};
use crate::version::ENUMG_VERSION;

// ============================================================================
// CLI Error handling
// ============================================================================

/// Exit code for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub i32);

impl ExitCode {
    pub const SUCCESS: ExitCode = ExitCode(0);
    pub const FAILURE: ExitCode = ExitCode(1);
}

/// Error type for CLI operations.
///
/// Contains a user-facing message and an exit code. The CLI entry point
/// catches these errors, prints the message, and exits with the code.
#[derive(Debug)]
pub struct CliError {
    /// User-facing error message (already formatted for display)
    pub message: String,
    /// Exit code to return to the shell
    pub exit_code: ExitCode,
}

impl CliError {
    pub fn new(message: impl Into<String>, exit_code: ExitCode) -> Self {
        Self {
            message: message.into(),
            exit_code,
        }
    }

    /// Create a failure error (exit code 1).
    pub fn failure(message: impl Into<String>) -> Self {
        Self::new(message, ExitCode::FAILURE)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

// ============================================================================
// Clap CLI definition
// ============================================================================

/// Generate C/C++ enums with string conversion helpers from INI descriptions
#[derive(Parser, Debug)]
#[command(name = "enumg")]
#[command(disable_version_flag = true)]
#[command(about = "Generate C/C++ enums with string conversion helpers from INI descriptions", long_about = None)]
pub struct Cli {
    /// Description files to process, in order
    #[arg(value_name = "FILE")]
    pub inputs: Vec<PathBuf>,

    /// Print version information
    #[arg(short = 'v', long = "version")]
    pub version: bool,

    /// Verbose output (echo every description entry)
    #[arg(short = 'V', long = "verbose")]
    pub verbose: bool,

    /// Working directory for outputs (`-d dir` or `-d:dir`)
    #[arg(short = 'd', value_name = "DIR", value_parser = parse_work_dir)]
    pub work_dir: Option<PathBuf>,
}

/// Accept the `-d:<dir>` spelling as well as `-d <dir>`.
fn parse_work_dir(raw: &str) -> Result<PathBuf, String> {
    let dir = raw.strip_prefix(':').unwrap_or(raw);
    if dir.is_empty() {
        return Err("working directory must not be empty".to_string());
    }
    Ok(PathBuf::from(dir))
}

impl Cli {
    pub fn verbosity(&self) -> Verbosity {
        Verbosity::from_flag(self.verbose)
    }

    pub fn config(&self) -> GeneratorConfig {
        let mut config = GeneratorConfig::new().with_verbosity(self.verbosity());
        if let Some(dir) = &self.work_dir {
            config = config.with_work_dir(dir);
        }
        config
    }
}

// ============================================================================
// CLI entry point
// ============================================================================

/// Main CLI entry point.
///
/// This is the only place where `process::exit` is called. All command
/// implementations return `CliResult` and errors are handled here.
pub fn run() {
    let cli = Cli::parse();
    init_tracing(cli.verbosity());

    match execute(cli) {
        Ok(exit_code) => {
            if exit_code.0 != 0 {
                process::exit(exit_code.0);
            }
        }
        Err(e) => {
            if !e.message.is_empty() {
                eprintln!("{}", e.message);
            }
            process::exit(e.exit_code.0);
        }
    }
}

/// Install the global subscriber. `RUST_LOG` wins over the verbosity flag.
fn init_tracing(verbosity: Verbosity) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(verbosity.filter_directive()));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .with_target(false)
        .try_init();
}

/// Text printed for `-v`: the bare version number, nothing else.
fn version_text() -> &'static str {
    ENUMG_VERSION
}

/// Execute the CLI command and return result.
fn execute(cli: Cli) -> CliResult<ExitCode> {
    if cli.version {
        println!("{}", version_text());
        return Ok(ExitCode::SUCCESS);
    }

    if cli.inputs.is_empty() {
        Cli::command()
            .print_help()
            .map_err(|e| CliError::failure(format!("Error printing help: {}", e)))?;
        println!();
        return Ok(ExitCode::SUCCESS);
    }

    let config = cli.config();
    commands::generate_files(&cli.inputs, &config)
}

// ============================================================================
// Tests
// ============================================================================
