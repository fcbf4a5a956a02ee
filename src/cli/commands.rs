//! CLI command implementations
//!
//! All command functions return `CliResult<ExitCode>` instead of calling
//! `process::exit`. Error handling and exits happen in the top-level `run()`.

use std::path::{Path, PathBuf};

use crate::backend::{GenerateError, GenerationReport, ProjectGenerator, ThreadRandom};
use crate::config::GeneratorConfig;
use enumg_core::conventions::TOOL_NAME;

use super::{CliError, CliResult, ExitCode};

/// Process every description in order. The first failure aborts the run.
pub fn generate_files(inputs: &[PathBuf], config: &GeneratorConfig) -> CliResult<ExitCode> {
    for input in inputs {
        tracing::info!("input: {}", input.display());
        let report = generate_file(input, config)?;
        log_report(&report);
    }
    Ok(ExitCode::SUCCESS)
}

/// Run the pipeline for one description with a fresh random source.
pub fn generate_file(input: &Path, config: &GeneratorConfig) -> CliResult<GenerationReport> {
    let config = config.clone().with_command(banner_command(input));
    ProjectGenerator::new(&config, ThreadRandom)
        .generate(input)
        .map_err(|e| to_cli_error(input, e))
}

/// The invocation recorded in generated banners. Only the input's file name is used so that output does not
/// depend on where the tool was run from.
fn banner_command(input: &Path) -> String {
    let name = input
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| input.display().to_string());
    format!("{} {}", TOOL_NAME, name)
}

fn to_cli_error(input: &Path, err: GenerateError) -> CliError {
    match &err {
        GenerateError::Config(e) => CliError::failure(format!("{}: error: {}", input.display(), e)),
        GenerateError::Io { .. } => CliError::failure(format!("error: {}", err)),
    }
}

fn log_report(report: &GenerationReport) {
    tracing::info!(
        token = %report.guard.token,
        source = ?report.guard.source,
        "guard token"
    );
    if report.warnings > 0 {
        tracing::warn!("{} malformed line(s) skipped", report.warnings);
    }
    if report.files_written() == 0 {
        tracing::info!("outputs up to date");
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_banner_command_uses_file_name() {
        assert_eq!(banner_command(Path::new("defs/colors.ini")), "enumg colors.ini");
    }

    #[test]
    fn test_config_error_aborts_run() {
        let dir = tempfile::tempdir().unwrap();
        let bad = dir.path().join("bad.ini");
        let good = dir.path().join("good.ini");
        fs::write(&bad, "field=ORPHAN\n").unwrap();
        fs::write(&good, "[Good]\nfield=A\n").unwrap();

        let config = GeneratorConfig::new().with_work_dir(dir.path());
        let err = generate_files(&[bad, good], &config).unwrap_err();

        assert_eq!(err.exit_code, ExitCode::FAILURE);
        assert!(err.message.contains("FIELD without SECTION"));
        assert!(!dir.path().join("bad.h").exists());
        assert!(!dir.path().join("good.h").exists());
    }

    #[test]
    fn test_generate_files_success() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("colors.ini");
        fs::write(&input, "[Color]\nfield=RED\n").unwrap();

        let config = GeneratorConfig::new().with_work_dir(dir.path());
        let code = generate_files(&[input], &config).unwrap();
        assert_eq!(code, ExitCode::SUCCESS);

        let header = fs::read_to_string(dir.path().join("colors.h")).unwrap();
        assert!(header.contains("// command: enumg colors.ini"));
    }
}
