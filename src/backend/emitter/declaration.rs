//! Declaration (header) emission.

use enumg_core::conventions::{HelperId, helper_name, include_guard_macro};

use super::TraitsTable;
use crate::backend::writer::{CodeWriter, Conditional};
use crate::frontend::{DescriptionModel, Section};

pub(super) fn emit(w: &mut CodeWriter, model: &DescriptionModel, guard: &str) {
    let guard_macro = include_guard_macro(guard);
    w.raw_line(&format!("#ifndef {}", guard_macro));
    w.raw_line(&format!("#define {}", guard_macro));

    for line in &model.top_lines {
        w.raw_line(line);
    }
    for include in &model.include_directives {
        w.raw_line(include);
    }

    let stringify = Conditional::from_macro(model.conditional_macro.as_deref());
    for section in &model.sections {
        w.blank_line();
        emit_enum(w, section);
        w.blank_line();
        stringify.wrap(w, |w| emit_prototypes(w, section));

        if let Some(table) = TraitsTable::for_section(section) {
            w.blank_line();
            Conditional::from_macro(table.enable_macro()).wrap(w, |w| {
                w.line(&format!("{};", traits_prototype(section)));
            });
        }
    }

    w.blank_line();
    for line in &model.bottom_lines {
        w.raw_line(line);
    }
    w.raw_line(&format!("#endif // {}", guard_macro));
}

fn emit_enum(w: &mut CodeWriter, section: &Section) {
    w.block_with_close(&format!("{} {}", section.underlying_type(), section.name), "};", |w| {
        for entry in &section.entries {
            w.linef(format_args!("{},", entry.full_text()));
        }
    });
}

fn emit_prototypes(w: &mut CodeWriter, section: &Section) {
    for helper in [
        HelperId::ToString,
        HelperId::FromString,
        HelperId::ValueCount,
        HelperId::FromIndex,
        HelperId::ToIndex,
    ] {
        w.line(&format!("{};", signature(section, helper)));
    }
}

/// `GetTraits` prototype. `defaultTraits` defaults to null here; a definition may not repeat the default.
fn traits_prototype(section: &Section) -> String {
    let traits = section.traits_type_name.as_deref().unwrap_or("void");
    format!(
        "const {} *{}({} value, const {} *defaultTraits = 0)",
        traits,
        helper_name(&section.name, HelperId::GetTraits),
        section.name,
        traits
    )
}

/// Signature shared by prototype and definition of a generated helper.
pub(super) fn signature(section: &Section, helper: HelperId) -> String {
    let name = section.name.as_str();
    let func = helper_name(name, helper);
    match helper {
        HelperId::ToString => format!("const char *{}({} value)", func, name),
        HelperId::FromString => format!(
            "int {}(const char *str, {} *presult, int ignoreCase, unsigned ignorePrefixLen)",
            func, name
        ),
        HelperId::ValueCount => format!("unsigned {}(void)", func),
        HelperId::FromIndex => format!("{} {}(unsigned index)", name, func),
        HelperId::ToIndex => format!("int {}({} value)", func, name),
        HelperId::GetTraits => {
            let traits = section.traits_type_name.as_deref().unwrap_or("void");
            format!("const {} *{}({} value, const {} *defaultTraits)", traits, func, name, traits)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn traits_section() -> Section {
        let mut section = Section::new("Color");
        section.traits_type_name = Some("ColorInfo".to_string());
        section
    }

    #[test]
    fn test_traits_prototype_defaults_to_null() {
        assert_eq!(
            traits_prototype(&traits_section()),
            "const ColorInfo *ColorGetTraits(Color value, const ColorInfo *defaultTraits = 0)"
        );
    }

    #[test]
    fn test_traits_definition_signature_has_no_default() {
        assert_eq!(
            signature(&traits_section(), HelperId::GetTraits),
            "const ColorInfo *ColorGetTraits(Color value, const ColorInfo *defaultTraits)"
        );
    }
}
