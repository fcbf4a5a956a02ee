//! enumg version information.
//!
//! ## Notes
//!
//! - The value is taken from Cargo metadata (`CARGO_PKG_VERSION`) at compile time.
//! - Prefer this constant over repeating `env!("CARGO_PKG_VERSION")` in multiple places.

/// The enumg version string (for example, `0.9.1`).
pub const ENUMG_VERSION: &str = env!("CARGO_PKG_VERSION");
