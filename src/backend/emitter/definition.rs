//! Definition (source) emission: tables and helper bodies.

use enumg_core::conventions::{
    HelperId, NOT_FOUND_SENTINEL, helper_name, string_table_name, traits_entry_type_name, traits_table_name,
    value_table_name,
};

use super::declaration::signature;
use super::{TraitsTable, c_string_literal};
use crate::backend::writer::{CodeWriter, Conditional};
use crate::frontend::{DescriptionModel, Section};

pub(super) fn emit(w: &mut CodeWriter, model: &DescriptionModel, declaration_file_name: &str) {
    w.raw_line(&format!("#include \"{}\"", declaration_file_name));

    let stringify = Conditional::from_macro(model.conditional_macro.as_deref());
    stringify.wrap(w, emit_std_includes);

    for section in &model.sections {
        w.blank_line();
        stringify.wrap(w, |w| emit_stringify(w, section));

        if let Some(table) = TraitsTable::for_section(section) {
            w.blank_line();
            Conditional::from_macro(table.enable_macro()).wrap(w, |w| emit_traits(w, section, &table));
        }
    }
}

fn emit_std_includes(w: &mut CodeWriter) {
    w.raw_line("#if defined(__cplusplus)");
    w.indent();
    w.line("#include <cstring>");
    w.line("#include <cctype>");
    w.dedent();
    w.raw_line("#else");
    w.indent();
    w.line("#include <string.h>");
    w.line("#include <ctype.h>");
    w.dedent();
    w.raw_line("#endif");
}

fn emit_stringify(w: &mut CodeWriter, section: &Section) {
    if section.entries.is_empty() {
        emit_empty_stringify(w, section);
        return;
    }

    let name = section.name.as_str();
    let strings = string_table_name(name);
    let values = value_table_name(name);

    w.block_with_close(&format!("const char *{}[] =", strings), "};", |w| {
        for entry in &section.entries {
            w.linef(format_args!("{},", c_string_literal(entry.name())));
        }
    });
    w.blank_line();

    w.block_with_close(&format!("{} {}[] =", name, values), "};", |w| {
        for entry in &section.entries {
            w.linef(format_args!("{},", entry.name()));
        }
    });
    w.blank_line();

    w.block(&signature(section, HelperId::ToString), |w| {
        w.linef(format_args!("int ix = {}(value);", helper_name(name, HelperId::ToIndex)));
        w.block("if (ix < 0)", |w| w.line("return NULL;"));
        w.linef(format_args!("return {}[ix];", strings));
    });
    w.blank_line();

    w.block(&signature(section, HelperId::ToIndex), |w| {
        w.linef(format_args!("unsigned count = {}();", helper_name(name, HelperId::ValueCount)));
        w.block("for (unsigned i = 0; i < count; ++i)", |w| {
            w.block(&format!("if ({}[i] == value)", values), |w| w.line("return (int)i;"));
        });
        w.linef(format_args!("return {};", NOT_FOUND_SENTINEL));
    });
    w.blank_line();

    w.block(&signature(section, HelperId::FromIndex), |w| {
        w.linef(format_args!("return {}[index];", values));
    });
    w.blank_line();

    w.block(&signature(section, HelperId::ValueCount), |w| {
        w.linef(format_args!("return {};", section.entries.len()));
    });
    w.blank_line();

    emit_from_string(w, section);
}

/// Helper bodies for a section without entries. Zero-length tables are not valid C/C++, so none are emitted.
fn emit_empty_stringify(w: &mut CodeWriter, section: &Section) {
    w.block(&signature(section, HelperId::ToString), |w| {
        w.line("(void)value;");
        w.line("return NULL;");
    });
    w.blank_line();

    w.block(&signature(section, HelperId::ToIndex), |w| {
        w.line("(void)value;");
        w.linef(format_args!("return {};", NOT_FOUND_SENTINEL));
    });
    w.blank_line();

    w.block(&signature(section, HelperId::FromIndex), |w| {
        w.line("(void)index;");
        w.linef(format_args!("return ({})0;", section.name));
    });
    w.blank_line();

    w.block(&signature(section, HelperId::ValueCount), |w| w.line("return 0;"));
    w.blank_line();

    w.block(&signature(section, HelperId::FromString), |w| {
        w.line("(void)str;");
        w.line("(void)presult;");
        w.line("(void)ignoreCase;");
        w.line("(void)ignorePrefixLen;");
        w.linef(format_args!("return {};", NOT_FOUND_SENTINEL));
    });
}

/// Character-by-character comparison honoring `ignoreCase` and `ignorePrefixLen`.
fn emit_from_string(w: &mut CodeWriter, section: &Section) {
    let name = section.name.as_str();
    w.block(&signature(section, HelperId::FromString), |w| {
        w.linef(format_args!("unsigned count = {}();", helper_name(name, HelperId::ValueCount)));
        w.block("for (unsigned i = 0; i < count; ++i)", |w| {
            w.linef(format_args!("{} value = {}(i);", name, helper_name(name, HelperId::FromIndex)));
            w.linef(format_args!("const char *stored = {}(value);", helper_name(name, HelperId::ToString)));
            w.line("const char *cursor = str;");
            w.line("unsigned skip = 0;");
            w.block("while (skip < ignorePrefixLen && stored[skip] != '\\0')", |w| w.line("++skip;"));
            w.line("stored += skip;");
            w.block("for (;;)", |w| {
                w.line("int a = (unsigned char)*cursor;");
                w.line("int b = (unsigned char)*stored;");
                w.block("if (ignoreCase)", |w| {
                    w.line("a = tolower(a);");
                    w.line("b = tolower(b);");
                });
                w.block("if (a != b)", |w| w.line("break;"));
                w.block("if (a == '\\0')", |w| {
                    w.line("*presult = value;");
                    w.line("return 0;");
                });
                w.line("++cursor;");
                w.line("++stored;");
            });
        });
        w.linef(format_args!("return {};", NOT_FOUND_SENTINEL));
    });
}

fn emit_traits(w: &mut CodeWriter, section: &Section, table: &TraitsTable<'_>) {
    let name = section.name.as_str();
    let entry_type = traits_entry_type_name(name);
    let table_name = traits_table_name(name);

    if table.rows().is_empty() {
        w.block(&signature(section, HelperId::GetTraits), |w| {
            w.line("(void)value;");
            w.line("return defaultTraits;");
        });
        return;
    }

    w.block_with_close("typedef struct", &format!("}} {};", entry_type), |w| {
        w.linef(format_args!("{} value;", name));
        w.linef(format_args!("{} traits;", table.type_name()));
    });
    w.blank_line();

    w.block_with_close(&format!("static const {} {}[] =", entry_type, table_name), "};", |w| {
        for row in table.rows() {
            w.linef(format_args!("{{ {}, {}{} }},", row.value, table.type_name(), row.payload));
        }
    });
    w.blank_line();

    w.block(&signature(section, HelperId::GetTraits), |w| {
        w.linef(format_args!("unsigned count = {};", table.rows().len()));
        w.block("for (unsigned i = 0; i < count; ++i)", |w| {
            w.block(&format!("if ({}[i].value == value)", table_name), |w| {
                w.linef(format_args!("return &{}[i].traits;", table_name));
            });
        });
        w.line("return defaultTraits;");
    });
}
