//! Description key registry.
//!
//! This module centralizes the key spellings a description file may use so the model builder
//! doesn't need stringly-typed comparisons.
//!
//! ## Notes
//! - Matching is exact and case-sensitive.
//! - `thraits` is the historical spelling of the traits keys; `traits` is accepted as an alias.

/// Stable identifier for a recognized description key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyId {
    DeclarationSuffix,
    DefinitionSuffix,
    HeaderGuard,
    Type,
    Traits,
    TraitsEnableMacro,
    StringifyDefine,
    Top,
    Bottom,
    IncludeFile,
    SourceDir,
    IncludeDir,
    Field,
}

/// Where a key is allowed to appear.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyScope {
    /// Applies to the whole description, regardless of the current section.
    Global,
    /// Sets a property of the current section; requires one.
    Section,
    /// Appends an entry to the current section; requires one.
    Entry,
}

/// Metadata entry for a description key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyInfo {
    pub id: KeyId,
    pub canonical: &'static str,
    pub aliases: &'static [&'static str],
    pub scope: KeyScope,
    pub description: &'static str,
}

/// Registry of recognized description keys.
pub const KEYS: &[KeyInfo] = &[
    info(
        KeyId::DeclarationSuffix,
        "c-header",
        &[],
        KeyScope::Global,
        "File extension of the generated declaration (header) file.",
    ),
    info(
        KeyId::DefinitionSuffix,
        "c-source",
        &[],
        KeyScope::Global,
        "File extension of the generated definition (source) file.",
    ),
    info(
        KeyId::HeaderGuard,
        "header-guard",
        &[],
        KeyScope::Global,
        "Explicit guard token; disables guard recovery and generation.",
    ),
    info(
        KeyId::Type,
        "type",
        &[],
        KeyScope::Section,
        "Storage type text emitted before the enum name.",
    ),
    info(
        KeyId::Traits,
        "thraits",
        &["traits"],
        KeyScope::Section,
        "Name of the per-value traits record type.",
    ),
    info(
        KeyId::TraitsEnableMacro,
        "thraits-enable-macro",
        &["traits-enable-macro"],
        KeyScope::Section,
        "Macro guarding the generated traits lookup.",
    ),
    info(
        KeyId::StringifyDefine,
        "stringify-define",
        &[],
        KeyScope::Global,
        "Macro guarding all generated stringify and lookup code.",
    ),
    info(
        KeyId::Top,
        "top",
        &[],
        KeyScope::Global,
        "Verbatim line placed near the top of the declaration file.",
    ),
    info(
        KeyId::Bottom,
        "bottom",
        &[],
        KeyScope::Global,
        "Verbatim line placed at the bottom of the declaration file.",
    ),
    info(
        KeyId::IncludeFile,
        "include-file",
        &[],
        KeyScope::Global,
        "Verbatim include directive placed near the top of the declaration file.",
    ),
    info(
        KeyId::SourceDir,
        "src-dir",
        &[],
        KeyScope::Global,
        "Output directory of the definition file.",
    ),
    info(
        KeyId::IncludeDir,
        "include-dir",
        &[],
        KeyScope::Global,
        "Output directory of the declaration file.",
    ),
    info(
        KeyId::Field,
        "field",
        &[],
        KeyScope::Entry,
        "One enum entry: `NAME`, `NAME = value` and/or a `(traits payload)`.",
    ),
];

/// Resolve a key spelling to its stable id.
pub fn from_str(key: &str) -> Option<KeyId> {
    if let Some(info) = KEYS.iter().find(|k| k.canonical == key) {
        return Some(info.id);
    }
    KEYS.iter()
        .find(|k| {
            let aliases: &[&str] = k.aliases;
            aliases.contains(&key)
        })
        .map(|k| k.id)
}

/// Return the canonical spelling for a key.
pub fn as_str(id: KeyId) -> &'static str {
    info_for(id).canonical
}

/// Return the metadata entry for a key.
pub fn info_for(id: KeyId) -> &'static KeyInfo {
    KEYS.iter().find(|k| k.id == id).expect("INVARIANT: every KeyId has a registry entry")
}

const fn info(
    id: KeyId,
    canonical: &'static str,
    aliases: &'static [&'static str],
    scope: KeyScope,
    description: &'static str,
) -> KeyInfo {
    KeyInfo {
        id,
        canonical,
        aliases,
        scope,
        description,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_traits_alias_resolves() {
        assert_eq!(from_str("thraits"), Some(KeyId::Traits));
        assert_eq!(from_str("traits"), Some(KeyId::Traits));
        assert_eq!(from_str("traits-enable-macro"), Some(KeyId::TraitsEnableMacro));
    }

    #[test]
    fn test_matching_is_case_sensitive() {
        assert_eq!(from_str("Field"), None);
        assert_eq!(from_str("FIELD"), None);
        assert_eq!(from_str("field"), Some(KeyId::Field));
    }

    #[test]
    fn test_unknown_key() {
        assert_eq!(from_str("cpp-stringify"), None);
        assert_eq!(from_str(""), None);
    }

    #[test]
    fn test_section_scoped_keys() {
        assert_eq!(info_for(KeyId::Type).scope, KeyScope::Section);
        assert_eq!(info_for(KeyId::Field).scope, KeyScope::Entry);
        assert_eq!(info_for(KeyId::Top).scope, KeyScope::Global);
    }
}
