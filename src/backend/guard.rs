//! Guard token resolution.
//!
//! The guard token names the include guard of a declaration file. It must survive regeneration, so it is
//! written into the first line of the declaration (see [`GUARD_MARKER_PREFIX`]) and read back next time.
//!
//! Resolution order:
//! 1. explicit `header-guard` from the description,
//! 2. marker line of the existing declaration file,
//! 3. `<sanitized title>_<16 random lowercase letters>`.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use enumg_core::conventions::{GUARD_MARKER_PREFIX, GUARD_SUFFIX_LEN};
use rand::Rng;

/// Source of random lowercase suffixes.
pub trait RandomSource {
    /// Return `len` characters in `a..=z`.
    fn next(&mut self, len: usize) -> String;
}

/// [`RandomSource`] backed by the thread-local `rand` generator.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn next(&mut self, len: usize) -> String {
        let mut rng = rand::rng();
        (0..len).map(|_| char::from(rng.random_range(b'a'..=b'z'))).collect()
    }
}

/// Where a resolved token came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardSource {
    Explicit,
    Recovered,
    Generated,
}

/// A resolved guard token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuardToken {
    pub token: String,
    pub source: GuardSource,
}

/// Resolves guard tokens, drawing fresh suffixes from a [`RandomSource`].
pub struct IdentityGuard<R: RandomSource> {
    random: R,
}

impl Default for IdentityGuard<ThreadRandom> {
    fn default() -> Self {
        Self::new(ThreadRandom)
    }
}

impl<R: RandomSource> IdentityGuard<R> {
    pub fn new(random: R) -> Self {
        Self { random }
    }

    /// Resolve the token for `input_file`, whose previous declaration (if any) lives at `existing_declaration`.
    ///
    /// A missing declaration file simply has no marker; other read errors are returned.
    pub fn resolve(
        &mut self,
        explicit: Option<&str>,
        input_file: &Path,
        existing_declaration: &Path,
    ) -> io::Result<GuardToken> {
        if let Some(token) = explicit.filter(|t| !t.is_empty()) {
            return Ok(GuardToken {
                token: token.to_string(),
                source: GuardSource::Explicit,
            });
        }

        if let Some(token) = read_marker(existing_declaration)? {
            tracing::debug!(%token, path = %existing_declaration.display(), "recovered guard token");
            return Ok(GuardToken {
                token,
                source: GuardSource::Recovered,
            });
        }

        let token = format!(
            "{}_{}",
            sanitized_title(&file_title(input_file)),
            self.random.next(GUARD_SUFFIX_LEN)
        );
        tracing::debug!(%token, "generated guard token");
        Ok(GuardToken {
            token,
            source: GuardSource::Generated,
        })
    }
}

/// First marker token in `path`, scanning from the top. `Ok(None)` when the file does not exist.
pub fn read_marker(path: &Path) -> io::Result<Option<String>> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e),
    };

    for line in BufReader::new(file).split(b'\n') {
        let line = line?;
        let line = String::from_utf8_lossy(&line);
        if let Some(token) = line.strip_prefix(GUARD_MARKER_PREFIX) {
            let token = token.trim();
            if token.is_empty() {
                return Ok(None);
            }
            return Ok(Some(token.to_string()));
        }
    }

    Ok(None)
}

/// Input file name without directories and without its final extension.
///
/// A leading dot is not an extension separator (`.enums` stays `.enums`).
pub fn file_title(input_file: &Path) -> String {
    let name = input_file
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    match name.rfind('.') {
        Some(pos) if pos > 0 => name[..pos].to_string(),
        _ => name,
    }
}

/// Keep only ASCII alphanumerics and `_`.
pub fn sanitized_title(title: &str) -> String {
    title.chars().filter(|c| c.is_ascii_alphanumeric() || *c == '_').collect()
}
