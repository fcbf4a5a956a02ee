//! enumg backend
//!
//! This module turns a [`DescriptionModel`](crate::frontend::DescriptionModel) into files on disk.
//!
//! The pipeline is:
//! 1. Resolve the guard token (explicit, recovered from the previous header, or freshly generated)
//! 2. Emit declaration and definition text
//! 3. Reconcile the texts with the files on disk, replacing only what changed
//!
//! ## Module Organization
//!
//! - `emitter/` - Code generation from the model to C/C++ text
//!   - `mod.rs` - Main CodeEmitter struct and banner
//!   - `declaration.rs` - Header emission
//!   - `definition.rs` - Source emission
//!   - `traits.rs` - Traits side-table
//! - `writer.rs` - Low-level C/C++ code string builder
//! - `guard.rs` - Guard token resolution
//! - `lookup.rs` - Model of the generated string lookup
//! - `reconcile.rs` - Compare-then-replace writes
//! - `project.rs` - Per-file pipeline

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod emitter;
pub mod guard;
pub mod lookup;
pub mod project;
pub mod reconcile;
pub mod writer;

pub use emitter::{CodeEmitter, EmittedSources};
pub use guard::{IdentityGuard, RandomSource, ThreadRandom};
pub use project::{GenerateError, GenerationReport, ProjectGenerator};
pub use reconcile::{Artifact, WriteOutcome};
