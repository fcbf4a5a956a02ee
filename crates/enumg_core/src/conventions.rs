//! Generated-code conventions (well-known identifiers and spellings).
//!
//! Everything the emitter names in its output is spelled here, so that tests and downstream
//! tooling can refer to the same identifiers.

/// Tool name as it appears in generated banners.
pub const TOOL_NAME: &str = "enumg";

/// Prefix of the private marker line carrying the guard token (first line of every declaration file).
pub const GUARD_MARKER_PREFIX: &str = "// enumg-guard: ";

/// Number of random lowercase letters appended to a derived guard token.
pub const GUARD_SUFFIX_LEN: usize = 16;

/// Declaration file extension used when the description sets none.
pub const DEFAULT_DECLARATION_SUFFIX: &str = "h";

/// Definition file extension used when the description sets none.
pub const DEFAULT_DEFINITION_SUFFIX: &str = "c";

/// Storage type text used when a section sets none.
pub const DEFAULT_UNDERLYING_TYPE: &str = "enum";

/// Return value of generated `ToIndex`/`FromString` when nothing matches.
pub const NOT_FOUND_SENTINEL: i32 = -1;

/// Generated per-section helper routines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HelperId {
    ToString,
    FromString,
    ValueCount,
    FromIndex,
    ToIndex,
    GetTraits,
}

impl HelperId {
    /// Suffix appended to the section name to form the routine name.
    pub const fn suffix(self) -> &'static str {
        match self {
            HelperId::ToString => "ToString",
            HelperId::FromString => "FromString",
            HelperId::ValueCount => "ValueCount",
            HelperId::FromIndex => "FromIndex",
            HelperId::ToIndex => "ToIndex",
            HelperId::GetTraits => "GetTraits",
        }
    }
}

/// Name of a generated helper routine, e.g. `ColorToString`.
pub fn helper_name(section: &str, helper: HelperId) -> String {
    format!("{}{}", section, helper.suffix())
}

/// Include guard macro wrapping the whole declaration file.
pub fn include_guard_macro(token: &str) -> String {
    format!("__enumg_HeaderGuard_{}_INCLUDED__", token)
}

/// Table of entry names, indexed like the value table.
pub fn string_table_name(section: &str) -> String {
    format!("g_{}StringArray", section)
}

/// Table of entry values in declaration order.
pub fn value_table_name(section: &str) -> String {
    format!("g_{}ValueArray", section)
}

/// Private record type pairing a value with its traits.
pub fn traits_entry_type_name(section: &str) -> String {
    format!("{}TraitsEntry", section)
}

/// Static table of traits records.
pub fn traits_table_name(section: &str) -> String {
    format!("g_{}TraitsTable", section)
}
