//! Per-section traits side-table.
//!
//! Only entries carrying a traits payload get a row. Lookup mirrors the generated `<S>GetTraits`:
//! exact value equality, first row wins.

use crate::frontend::Section;

/// One `{ value, TraitsType<payload> }` row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TraitsRow<'a> {
    pub value: &'a str,
    pub payload: &'a str,
}

/// Traits rows of one section, in declaration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraitsTable<'a> {
    type_name: &'a str,
    enable: Option<&'a str>,
    rows: Vec<TraitsRow<'a>>,
}

impl<'a> TraitsTable<'a> {
    /// `None` when the section declares no traits type.
    pub fn for_section(section: &'a Section) -> Option<Self> {
        let type_name = section.traits_type_name.as_deref()?;
        let rows = section
            .entries
            .iter()
            .filter_map(|entry| {
                entry.traits().map(|payload| TraitsRow {
                    value: entry.name(),
                    payload,
                })
            })
            .collect();

        Some(Self {
            type_name,
            enable: section.traits_enable_macro.as_deref(),
            rows,
        })
    }

    pub fn type_name(&self) -> &'a str {
        self.type_name
    }

    pub fn enable_macro(&self) -> Option<&'a str> {
        self.enable
    }

    pub fn rows(&self) -> &[TraitsRow<'a>] {
        &self.rows
    }

    /// Index of the row the generated lookup returns for `value`.
    pub fn lookup(&self, value: &str) -> Option<usize> {
        self.rows.iter().position(|row| row.value == value)
    }

    /// Rows that can never be returned because an earlier row has the same value.
    pub fn shadowed_rows(&self) -> impl Iterator<Item = (usize, &TraitsRow<'a>)> + '_ {
        self.rows
            .iter()
            .enumerate()
            .filter(|(index, row)| self.lookup(row.value) != Some(*index))
    }
}
