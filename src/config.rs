//! Generator configuration
//!
//! Settings that come from the command line rather than from the description file. None of them changes the
//! semantics of emitted code; the indentation style only changes whitespace.

use std::path::{Path, PathBuf};

/// Generator configuration
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Directory that `src-dir` / `include-dir` are resolved against
    pub work_dir: PathBuf,
    /// Indentation inside generated blocks
    pub indent_style: IndentStyle,
    /// Command line recorded in the generated banner
    pub command: Option<String>,
    /// Log verbosity
    pub verbosity: Verbosity,
}

/// Indentation of emitted code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndentStyle {
    Tabs,
    Spaces(usize),
}

impl IndentStyle {
    /// The text of one indentation level.
    pub fn unit(self) -> String {
        match self {
            IndentStyle::Tabs => "\t".to_string(),
            IndentStyle::Spaces(width) => " ".repeat(width),
        }
    }
}

/// How chatty the run is when `RUST_LOG` is not set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verbosity {
    #[default]
    Normal,
    Verbose,
}

impl Verbosity {
    pub fn from_flag(verbose: bool) -> Self {
        if verbose { Verbosity::Verbose } else { Verbosity::Normal }
    }

    /// Default `tracing` filter directive for this verbosity.
    pub fn filter_directive(self) -> &'static str {
        match self {
            Verbosity::Normal => "warn",
            Verbosity::Verbose => "debug",
        }
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            work_dir: PathBuf::from("."),
            indent_style: IndentStyle::Tabs,
            command: None,
            verbosity: Verbosity::Normal,
        }
    }
}

impl GeneratorConfig {
    /// Create a new config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the working directory
    pub fn with_work_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.work_dir = dir.as_ref().to_path_buf();
        self
    }

    /// Set the indentation style
    pub fn with_indent_style(mut self, style: IndentStyle) -> Self {
        self.indent_style = style;
        self
    }

    /// Set the banner command line
    pub fn with_command(mut self, command: impl Into<String>) -> Self {
        self.command = Some(command.into());
        self
    }

    pub fn with_verbosity(mut self, verbosity: Verbosity) -> Self {
        self.verbosity = verbosity;
        self
    }

    /// Resolve an optional output directory prefix against the working directory.
    pub fn output_dir(&self, prefix: Option<&str>) -> PathBuf {
        match prefix {
            Some(prefix) => self.work_dir.join(prefix),
            None => self.work_dir.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GeneratorConfig::default();
        assert_eq!(config.work_dir, PathBuf::from("."));
        assert_eq!(config.indent_style, IndentStyle::Tabs);
        assert!(config.command.is_none());
        assert_eq!(config.verbosity, Verbosity::Normal);
    }

    #[test]
    fn test_builder_chain() {
        let config = GeneratorConfig::new()
            .with_work_dir("out")
            .with_indent_style(IndentStyle::Spaces(4))
            .with_command("enumg colors.ini")
            .with_verbosity(Verbosity::Verbose);

        assert_eq!(config.work_dir, PathBuf::from("out"));
        assert_eq!(config.indent_style.unit(), "    ");
        assert_eq!(config.command.as_deref(), Some("enumg colors.ini"));
        assert_eq!(config.verbosity.filter_directive(), "debug");
    }

    #[test]
    fn test_output_dir() {
        let config = GeneratorConfig::new().with_work_dir("build");
        assert_eq!(config.output_dir(Some("include")), PathBuf::from("build").join("include"));
        assert_eq!(config.output_dir(None), PathBuf::from("build"));
    }

    #[test]
    fn test_verbosity_from_flag() {
        assert_eq!(Verbosity::from_flag(false).filter_directive(), "warn");
        assert_eq!(Verbosity::from_flag(true), Verbosity::Verbose);
    }

    #[test]
    fn test_tabs_unit() {
        assert_eq!(IndentStyle::Tabs.unit(), "\t");
    }
}
