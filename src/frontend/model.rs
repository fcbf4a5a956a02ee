//! Description model: global settings plus ordered sections, built triple by triple.
//!
//! The model is only mutated by [`ModelBuilder`]; the emitter reads it afterwards.

use enumg_core::conventions::{DEFAULT_DECLARATION_SUFFIX, DEFAULT_DEFINITION_SUFFIX, DEFAULT_UNDERLYING_TYPE};
use enumg_core::keys::{self, KeyId, KeyScope};
use enumg_syntax::IniTriple;
use miette::Diagnostic;
use thiserror::Error;

use super::entry::Entry;

/// Fatal problems in a description. These abort the whole run.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum ConfigError {
    #[error("line {line}: FIELD without SECTION (`field={value}` appears before any [section])")]
    #[diagnostic(
        code(enumg::config::field_without_section),
        help("add a `[Name]` section header before the first `field` line")
    )]
    FieldWithoutSection { value: String, line: usize },

    #[error("line {line}: `{key}` sets a section property but no [section] is open")]
    #[diagnostic(code(enumg::config::section_key_without_section))]
    SectionKeyWithoutSection { key: String, line: usize },
}

/// One enumeration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub name: String,
    pub underlying_type: Option<String>,
    pub traits_type_name: Option<String>,
    pub traits_enable_macro: Option<String>,
    pub entries: Vec<Entry>,
}

impl Section {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            underlying_type: None,
            traits_type_name: None,
            traits_enable_macro: None,
            entries: Vec::new(),
        }
    }

    /// Storage type text, `enum` unless the description says otherwise.
    pub fn underlying_type(&self) -> &str {
        self.underlying_type.as_deref().unwrap_or(DEFAULT_UNDERLYING_TYPE)
    }
}

/// Everything one description file asks for.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DescriptionModel {
    pub declaration_suffix: Option<String>,
    pub definition_suffix: Option<String>,
    /// Explicit guard token; `None` means recover or derive one.
    pub guard_token: Option<String>,
    /// Macro wrapping all stringify/lookup code.
    pub conditional_macro: Option<String>,
    pub source_dir: Option<String>,
    pub include_dir: Option<String>,
    pub top_lines: Vec<String>,
    pub bottom_lines: Vec<String>,
    pub include_directives: Vec<String>,
    pub sections: Vec<Section>,
}

impl DescriptionModel {
    /// Build a model from triples in file order.
    pub fn from_triples<'a>(triples: impl IntoIterator<Item = &'a IniTriple>) -> Result<Self, ConfigError> {
        let mut builder = ModelBuilder::new();
        for triple in triples {
            builder.apply(triple)?;
        }
        Ok(builder.finish())
    }

    pub fn declaration_suffix(&self) -> &str {
        self.declaration_suffix.as_deref().unwrap_or(DEFAULT_DECLARATION_SUFFIX)
    }

    pub fn definition_suffix(&self) -> &str {
        self.definition_suffix.as_deref().unwrap_or(DEFAULT_DEFINITION_SUFFIX)
    }
}

/// Accumulates a [`DescriptionModel`] from `(section, key, value)` triples.
#[derive(Debug, Default)]
pub struct ModelBuilder {
    model: DescriptionModel,
    current_section: String,
}

impl ModelBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one triple.
    ///
    /// A non-empty section name that differs from the previous one opens a new section, so a name that
    /// reappears later produces a second, separate section.
    pub fn apply(&mut self, triple: &IniTriple) -> Result<(), ConfigError> {
        tracing::debug!("[{}]{}={}", triple.section, triple.key, triple.value);

        if !triple.section.is_empty() && triple.section != self.current_section {
            self.model.sections.push(Section::new(triple.section.as_str()));
            self.current_section = triple.section.clone();
        }

        let Some(key) = keys::from_str(&triple.key) else {
            tracing::debug!(key = %triple.key, line = triple.line, "ignoring unrecognized key");
            return Ok(());
        };

        let value = triple.value.as_str();
        match key {
            KeyId::DeclarationSuffix => self.model.declaration_suffix = non_empty(value),
            KeyId::DefinitionSuffix => self.model.definition_suffix = non_empty(value),
            KeyId::HeaderGuard => self.model.guard_token = non_empty(value),
            KeyId::StringifyDefine => self.model.conditional_macro = non_empty(value),
            KeyId::SourceDir => self.model.source_dir = non_empty(value),
            KeyId::IncludeDir => self.model.include_dir = non_empty(value),
            KeyId::Top => self.model.top_lines.push(value.to_string()),
            KeyId::Bottom => self.model.bottom_lines.push(value.to_string()),
            KeyId::IncludeFile => self.model.include_directives.push(value.to_string()),
            KeyId::Type => self.section_for(key, triple)?.underlying_type = non_empty(value),
            KeyId::Traits => self.section_for(key, triple)?.traits_type_name = non_empty(value),
            KeyId::TraitsEnableMacro => self.section_for(key, triple)?.traits_enable_macro = non_empty(value),
            KeyId::Field => self.section_for(key, triple)?.entries.push(Entry::analyze(value)),
        }

        Ok(())
    }

    pub fn finish(self) -> DescriptionModel {
        self.model
    }

    fn section_for(&mut self, key: KeyId, triple: &IniTriple) -> Result<&mut Section, ConfigError> {
        self.model.sections.last_mut().ok_or_else(|| match keys::info_for(key).scope {
            KeyScope::Entry => ConfigError::FieldWithoutSection {
                value: triple.value.clone(),
                line: triple.line,
            },
            KeyScope::Section | KeyScope::Global => ConfigError::SectionKeyWithoutSection {
                key: triple.key.clone(),
                line: triple.line,
            },
        })
    }
}

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() { None } else { Some(value.to_string()) }
}
