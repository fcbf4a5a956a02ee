//! Provide the canonical vocabulary shared by the enumg generator and its tooling.
//!
//! This crate is intentionally small and dependency-light. It answers two questions:
//! - which keys a description file may use (and what they mean), and
//! - how generated C/C++ identifiers, markers and guards are spelled.
//!
//! ## Notes
//!
//! - This is a "vocabulary" crate: **no IO**, no global state, and no generator-specific types.
//! - Keeping the spellings here means the model builder, the emitter and the tests cannot drift apart.

pub mod conventions;
pub mod keys;
