//! Project generator - runs one description file through the whole pipeline
//!
//! read → parse → build model → resolve guard token → emit → reconcile.
//!
//! Produces:
//! - `<work_dir>/<include-dir>/<title>.<c-header>`
//! - `<work_dir>/<src-dir>/<title>.<c-source>`

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use miette::Diagnostic;
use thiserror::Error;

use crate::backend::emitter::CodeEmitter;
use crate::backend::guard::{self, GuardToken, IdentityGuard, RandomSource};
use crate::backend::reconcile::{self, Artifact, WriteOutcome};
use crate::config::GeneratorConfig;
use crate::frontend::{ConfigError, DescriptionModel, ini};

/// Pipeline failure for one input file.
#[derive(Debug, Error, Diagnostic)]
pub enum GenerateError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Config(#[from] ConfigError),

    #[error("{}: {source}", .path.display())]
    #[diagnostic(code(enumg::io))]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl GenerateError {
    fn io(path: &Path, source: io::Error) -> Self {
        GenerateError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// What one run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationReport {
    pub guard: GuardToken,
    pub declaration_path: PathBuf,
    pub definition_path: PathBuf,
    pub declaration: WriteOutcome,
    pub definition: WriteOutcome,
    /// Malformed description lines that were skipped
    pub warnings: usize,
}

impl GenerationReport {
    /// Number of files actually replaced.
    pub fn files_written(&self) -> usize {
        [self.declaration, self.definition]
            .into_iter()
            .filter(|o| *o == WriteOutcome::Written)
            .count()
    }
}

/// Generates the declaration/definition pair for description files.
pub struct ProjectGenerator<'c, R: RandomSource> {
    config: &'c GeneratorConfig,
    guard: IdentityGuard<R>,
}

impl<'c, R: RandomSource> ProjectGenerator<'c, R> {
    pub fn new(config: &'c GeneratorConfig, random: R) -> Self {
        Self {
            config,
            guard: IdentityGuard::new(random),
        }
    }

    /// Run the pipeline for one description file.
    #[tracing::instrument(skip_all, fields(input = %input.display()))]
    pub fn generate(&mut self, input: &Path) -> Result<GenerationReport, GenerateError> {
        let source = fs::read_to_string(input).map_err(|e| GenerateError::io(input, e))?;

        let document = ini::parse(&source);
        for diagnostic in &document.diagnostics {
            tracing::warn!("{}: {}", input.display(), diagnostic);
        }

        let model = DescriptionModel::from_triples(&document.triples)?;

        let title = guard::file_title(input);
        let declaration_path = self
            .config
            .output_dir(model.include_dir.as_deref())
            .join(format!("{}.{}", title, model.declaration_suffix()));
        let definition_path = self
            .config
            .output_dir(model.source_dir.as_deref())
            .join(format!("{}.{}", title, model.definition_suffix()));

        let token = self
            .guard
            .resolve(model.guard_token.as_deref(), input, &declaration_path)
            .map_err(|e| GenerateError::io(&declaration_path, e))?;

        let indent = self.config.indent_style.unit();
        let sources = CodeEmitter::new(&model, &token.token, &title)
            .with_indent(&indent)
            .with_command(self.config.command.as_deref())
            .emit();

        let artifacts = [
            Artifact::new(&declaration_path, sources.declaration),
            Artifact::new(&definition_path, sources.definition),
        ];
        let outcomes = reconcile::reconcile(&artifacts).map_err(|e| GenerateError::io(&e.path, e.source))?;

        Ok(GenerationReport {
            guard: token,
            declaration: outcomes[0],
            definition: outcomes[1],
            declaration_path,
            definition_path,
            warnings: document.diagnostics.len(),
        })
    }
}
