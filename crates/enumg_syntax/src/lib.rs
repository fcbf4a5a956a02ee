//! Description file reader for enumg: a generic INI-style format read as `(section, key, value)` triples.
//!
//! This crate is dependency-light and knows nothing about enums: it only turns text into an ordered stream of
//! triples and reports lines it could not make sense of.
//!
//! ## Notes
//! - The reader never fails: malformed lines become [`diagnostics::SyntaxDiagnostic`]s and are skipped.
//! - Key meaning (which keys exist, which need a section) lives in `enumg_core::keys`.
//!
//! ## Examples
//! ```rust
//! use enumg_syntax::ini;
//!
//! let doc = ini::parse("[Color]\nfield=RED\n");
//! assert_eq!(doc.triples.len(), 1);
//! assert_eq!(doc.triples[0].section, "Color");
//! ```

pub mod diagnostics;
pub mod ini;

pub use diagnostics::SyntaxDiagnostic;
pub use ini::{IniDocument, IniTriple};
