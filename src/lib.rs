#![forbid(unsafe_code)]
//! enumg - C/C++ enum code generator
//!
//! enumg reads INI-style descriptions of enumerations and writes a header/source pair per description: the
//! enum declarations plus string tables, string/index conversion helpers and optional per-value traits tables.
//! This crate provides the frontend (description reader and model), the backend (emission, guard tokens and
//! write reconciliation) and the CLI.
//!
//! ## Panic Policy
//!
//! This codebase follows explicit error handling:
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. The `cli` and `backend` modules
//!   enforce `#![deny(clippy::unwrap_used)]`.
//!
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.
//!
//! - **True invariants**: If a panic represents a generator bug (logic error), use `.expect("INVARIANT: reason")`
//!   with a clear explanation.

pub mod backend;
pub mod cli;
pub mod config;
pub mod frontend;
pub mod version;

pub use backend::project::{GenerateError, GenerationReport, ProjectGenerator};
pub use backend::{CodeEmitter, EmittedSources};
pub use config::{GeneratorConfig, IndentStyle, Verbosity};
pub use frontend::{DescriptionModel, Entry, Section};
