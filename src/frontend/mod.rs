//! enumg frontend
//!
//! This module turns a description file into a [`DescriptionModel`]:
//! - `ini`: the generic reader (provided by the `enumg_syntax` crate)
//! - `entry`: splitting a `field` value into name / declarator / traits payload
//! - `model`: accumulating triples into sections and global settings

// The reader is provided by the shared enumg_syntax crate.
pub use enumg_syntax::{SyntaxDiagnostic, ini};

pub mod entry;
pub mod model;

pub use entry::Entry;
pub use model::{ConfigError, DescriptionModel, ModelBuilder, Section};
