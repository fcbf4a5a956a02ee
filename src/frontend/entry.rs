//! Entry analysis: split one raw `field` value into name, declarator and traits payload.
//!
//! ```text
//!   "BLUE = 4 (descr=\"ok\")"
//!    └─name─┘            ← text before the first `=` / `(`
//!    └─full_text─┘       ← declarator without the payload
//!             └───traits───┘ ← from the first `(` to the end, verbatim
//! ```
//!
//! Only separators at a positive offset count: an entry starting with `=` or `(` keeps its whole text as its name.

/// One enum entry as declared in a description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    name: String,
    full_text: String,
    traits: Option<String>,
}

impl Entry {
    /// Analyze a raw entry line.
    pub fn analyze(raw: &str) -> Self {
        let raw = raw.trim();

        let (working, traits) = match first_at_positive_offset(raw, '(') {
            Some(pos) => (&raw[..pos], Some(raw[pos..].trim().to_string())),
            None => (raw, None),
        };

        let split = [
            first_at_positive_offset(working, '='),
            first_at_positive_offset(working, '('),
        ]
        .into_iter()
        .flatten()
        .min();

        let name = match split {
            Some(pos) => &working[..pos],
            None => working,
        };

        Self {
            name: name.trim().to_string(),
            full_text: working.trim().to_string(),
            traits,
        }
    }

    /// Identifier token, used in string and value tables.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declarator text emitted verbatim in the enum body (e.g. `RED = 3`).
    pub fn full_text(&self) -> &str {
        &self.full_text
    }

    /// Traits constructor payload including its parentheses, if any.
    pub fn traits(&self) -> Option<&str> {
        self.traits.as_deref()
    }
}

fn first_at_positive_offset(text: &str, ch: char) -> Option<usize> {
    text.find(ch).filter(|&pos| pos > 0)
}
