//! Code emitter - turns a [`DescriptionModel`] into declaration and definition text
//!
//! ## Module Organization
//!
//! - `declaration.rs` - marker, include guard, enum bodies and helper prototypes
//! - `definition.rs` - string/value tables and helper bodies
//! - `traits.rs` - per-section traits side-table
//!
//! Output is fully determined by the model, the guard token and the emitter options.

mod declaration;
mod definition;
pub mod traits;

use enumg_core::conventions::{GUARD_MARKER_PREFIX, TOOL_NAME};

use crate::backend::lookup;
use crate::backend::writer::CodeWriter;
use crate::frontend::{DescriptionModel, Section};

pub use traits::{TraitsRow, TraitsTable};

/// The two generated texts for one description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmittedSources {
    pub declaration: String,
    pub definition: String,
}

/// Emits C/C++ sources for one description model.
#[derive(Debug, Clone)]
pub struct CodeEmitter<'a> {
    model: &'a DescriptionModel,
    guard: &'a str,
    declaration_file_name: String,
    command: Option<&'a str>,
    indent: &'a str,
}

impl<'a> CodeEmitter<'a> {
    /// `title` is the input file name without its extension; the definition includes
    /// `<title>.<declaration suffix>`.
    pub fn new(model: &'a DescriptionModel, guard: &'a str, title: &str) -> Self {
        Self {
            model,
            guard,
            declaration_file_name: format!("{}.{}", title, model.declaration_suffix()),
            command: None,
            indent: "\t",
        }
    }

    /// Indentation used inside generated blocks.
    pub fn with_indent(mut self, indent: &'a str) -> Self {
        self.indent = indent;
        self
    }

    /// Command line recorded in the banner.
    pub fn with_command(mut self, command: Option<&'a str>) -> Self {
        self.command = command;
        self
    }

    #[tracing::instrument(skip_all, fields(sections = self.model.sections.len()))]
    pub fn emit(&self) -> EmittedSources {
        for section in &self.model.sections {
            tracing::info!("write enum {}", section.name);
            warn_unreachable_entries(section);
        }

        EmittedSources {
            declaration: self.emit_declaration(),
            definition: self.emit_definition(),
        }
    }

    pub fn emit_declaration(&self) -> String {
        let mut w = self.writer();
        w.raw_line(&format!("{}{}", GUARD_MARKER_PREFIX, self.guard));
        self.banner(&mut w);
        declaration::emit(&mut w, self.model, self.guard);
        w.finish()
    }

    pub fn emit_definition(&self) -> String {
        let mut w = self.writer();
        self.banner(&mut w);
        definition::emit(&mut w, self.model, &self.declaration_file_name);
        w.finish()
    }

    fn writer(&self) -> CodeWriter {
        CodeWriter::new(self.indent)
    }

    fn banner(&self, w: &mut CodeWriter) {
        w.raw_line(&format!("// file auto-generated by [{}]", TOOL_NAME));
        if let Some(command) = self.command {
            w.raw_line(&format!("// command: {}", command));
        }
        w.raw_line("// do not edit: regenerate from the description instead");
    }
}

fn warn_unreachable_entries(section: &Section) {
    if section.entries.is_empty() {
        tracing::warn!("{}: section has no `field` entries, lookups always fail", section.name);
        return;
    }

    let names: Vec<&str> = section.entries.iter().map(|e| e.name()).collect();
    for collision in lookup::case_insensitive_collisions(&names) {
        tracing::warn!(
            "{}: `{}` is unreachable through case-insensitive {}FromString, `{}` matches first",
            section.name,
            names[collision.index],
            section.name,
            names[collision.shadowed_by],
        );
    }

    if let Some(table) = TraitsTable::for_section(section) {
        for (_, row) in table.shadowed_rows() {
            tracing::warn!("{}: traits {} for `{}` are never returned", section.name, row.payload, row.value);
        }
    }
}

/// Escape a name for use inside a C string literal.
fn c_string_literal(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 2);
    out.push('"');
    for ch in text.chars() {
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            _ => out.push(ch),
        }
    }
    out.push('"');
    out
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_c_string_literal() {
        assert_eq!(c_string_literal("RED"), "\"RED\"");
        assert_eq!(c_string_literal("A\"B\\"), "\"A\\\"B\\\\\"");
    }

    #[test]
    fn test_marker_is_first_line() {
        let model = DescriptionModel::default();
        let text = CodeEmitter::new(&model, "colors_abc", "colors").emit_declaration();
        assert_eq!(text.lines().next(), Some("// enumg-guard: colors_abc"));
    }

    #[test]
    fn test_banner_records_command() {
        let model = DescriptionModel::default();
        let text = CodeEmitter::new(&model, "g", "colors")
            .with_command(Some("enumg colors.ini"))
            .emit_definition();
        assert!(text.contains("// command: enumg colors.ini\n"));
    }
}
