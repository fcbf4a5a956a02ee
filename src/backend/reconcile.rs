//! Write reconciler - replaces output files only when their content changed
//!
//! Every artifact is staged in a private temporary file first. Only after all texts are staged is each one
//! compared with its target and written over it when different, so an unchanged target keeps its modification
//! time and downstream builds are not triggered. Staged files are removed when their handles drop, on the
//! error paths too.
//!
//! Targets are written in place rather than copied from the staged file: a new file gets the umask default
//! mode and an existing file keeps its own.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use miette::Diagnostic;
use tempfile::NamedTempFile;
use thiserror::Error;

/// A generated text and where it belongs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub path: PathBuf,
    pub text: String,
}

impl Artifact {
    pub fn new(path: impl Into<PathBuf>, text: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            text: text.into(),
        }
    }
}

/// What happened to one artifact.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    Written,
    Unchanged,
}

/// An I/O failure together with the file it concerns.
#[derive(Debug, Error, Diagnostic)]
#[error("{}: {source}", .path.display())]
#[diagnostic(code(enumg::reconcile))]
pub struct ReconcileError {
    pub path: PathBuf,
    #[source]
    pub source: io::Error,
}

struct Staged<'a> {
    artifact: &'a Artifact,
    file: NamedTempFile,
}

/// Stage, compare and (when needed) replace every artifact, in order.
#[tracing::instrument(skip_all, fields(artifacts = artifacts.len()))]
pub fn reconcile(artifacts: &[Artifact]) -> Result<Vec<WriteOutcome>, ReconcileError> {
    let mut staged = Vec::with_capacity(artifacts.len());
    for artifact in artifacts {
        let file = stage(&artifact.text).map_err(|source| ReconcileError {
            path: artifact.path.clone(),
            source,
        })?;
        staged.push(Staged { artifact, file });
    }

    let mut outcomes = Vec::with_capacity(staged.len());
    for Staged { artifact, file } in &staged {
        let outcome = replace_if_changed(file.path(), artifact).map_err(|source| ReconcileError {
            path: artifact.path.clone(),
            source,
        })?;
        match outcome {
            WriteOutcome::Written => tracing::info!("write {}", artifact.path.display()),
            WriteOutcome::Unchanged => tracing::debug!("unchanged {}", artifact.path.display()),
        }
        outcomes.push(outcome);
    }

    Ok(outcomes)
}

fn stage(text: &str) -> io::Result<NamedTempFile> {
    let mut file = NamedTempFile::new()?;
    file.write_all(text.as_bytes())?;
    file.flush()?;
    Ok(file)
}

fn replace_if_changed(staged: &Path, artifact: &Artifact) -> io::Result<WriteOutcome> {
    let target = artifact.path.as_path();
    if same_content(staged, target)? {
        return Ok(WriteOutcome::Unchanged);
    }

    if let Some(parent) = target.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(target, artifact.text.as_bytes())?;
    Ok(WriteOutcome::Written)
}

/// A missing target always differs.
fn same_content(staged: &Path, target: &Path) -> io::Result<bool> {
    let existing = match fs::read(target) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(false),
        Err(e) => return Err(e),
    };
    Ok(fs::read(staged)? == existing)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_target_is_written() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("include").join("colors.h");

        let outcomes = reconcile(&[Artifact::new(&target, "enum Color {};\n")]).unwrap();
        assert_eq!(outcomes, vec![WriteOutcome::Written]);
        assert_eq!(fs::read_to_string(&target).unwrap(), "enum Color {};\n");
    }

    #[test]
    fn test_identical_target_is_left_alone() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("colors.c");
        fs::write(&target, "same\n").unwrap();
        let before = fs::metadata(&target).unwrap().modified().unwrap();

        let outcomes = reconcile(&[Artifact::new(&target, "same\n")]).unwrap();
        assert_eq!(outcomes, vec![WriteOutcome::Unchanged]);
        assert_eq!(fs::metadata(&target).unwrap().modified().unwrap(), before);
    }

    #[test]
    fn test_changed_target_is_replaced() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("colors.c");
        fs::write(&target, "old\n").unwrap();

        let outcomes = reconcile(&[Artifact::new(&target, "new\n")]).unwrap();
        assert_eq!(outcomes, vec![WriteOutcome::Written]);
        assert_eq!(fs::read_to_string(&target).unwrap(), "new\n");
    }

    #[test]
    fn test_outcomes_follow_artifact_order() {
        let dir = tempfile::tempdir().unwrap();
        let kept = dir.path().join("a.h");
        fs::write(&kept, "a").unwrap();

        let outcomes = reconcile(&[
            Artifact::new(&kept, "a"),
            Artifact::new(dir.path().join("b.c"), "b"),
        ])
        .unwrap();
        assert_eq!(outcomes, vec![WriteOutcome::Unchanged, WriteOutcome::Written]);
    }

    #[test]
    fn test_target_is_directory_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("taken");
        fs::create_dir(&target).unwrap();

        let err = reconcile(&[Artifact::new(&target, "x")]).unwrap_err();
        assert_eq!(err.path, target);
        assert!(err.to_string().starts_with(&format!("{}: ", target.display())));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[cfg(unix)]
    #[test]
    fn test_written_files_keep_regular_permissions() {
        use std::os::unix::fs::PermissionsExt;

        let mode = |path: &Path| fs::metadata(path).unwrap().permissions().mode() & 0o777;

        let dir = tempfile::tempdir().unwrap();
        // Same umask as a plain create in the same directory
        let reference = dir.path().join("reference.h");
        fs::write(&reference, "x").unwrap();

        let fresh = dir.path().join("fresh.h");
        reconcile(&[Artifact::new(&fresh, "enum A {};\n")]).unwrap();
        assert_eq!(mode(&fresh), mode(&reference));

        let existing = dir.path().join("existing.c");
        fs::write(&existing, "old\n").unwrap();
        fs::set_permissions(&existing, fs::Permissions::from_mode(0o644)).unwrap();
        let outcomes = reconcile(&[Artifact::new(&existing, "new\n")]).unwrap();
        assert_eq!(outcomes, vec![WriteOutcome::Written]);
        assert_eq!(mode(&existing), 0o644);
        assert_eq!(fs::read_to_string(&existing).unwrap(), "new\n");
    }
}
