//! Note name validation, generation, and resolution.
//!
//! A note name is the sole identifier of a note: 1-64 characters from
//! `[A-Za-z0-9_-]`, doubling as the storage file name. Requests carrying
//! no name, or an invalid one, are redirected to a freshly generated
//! 5-character name rather than rejected.

use rand::seq::SliceRandom;
use regex::Regex;

/// Alphabet for generated note names. Digits 0, 1, 6, 8 and letters
/// i, l, o, u, v, z are excluded to avoid visually ambiguous names and
/// accidental profanity.
pub const NAME_ALPHABET: &str = "234579abcdefghjkmnpqrstwxyz";

/// Length of a generated note name.
pub const GENERATED_NAME_LEN: usize = 5;

/// Longest accepted note name.
pub const MAX_NAME_LEN: usize = 64;

// ============================================================================
// Resolution
// ============================================================================

/// Outcome of resolving the requested identifier for one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NameResolution {
    /// The requested name is usable as-is.
    Valid(String),
    /// No usable name was supplied; redirect to this fresh one.
    Redirect(String),
}

/// Determine the effective note name for a request. An absent, oversized,
/// or malformed name is never an error: the caller is redirected to a
/// newly generated name instead, and no storage entry is created by that.
pub fn resolve_name(requested: Option<&str>) -> NameResolution {
    match requested {
        Some(name) if is_valid_name(name) => NameResolution::Valid(name.to_string()),
        _ => NameResolution::Redirect(generate_name()),
    }
}

/// Validation predicate: present, at most [`MAX_NAME_LEN`] bytes, and
/// matching `^[A-Za-z0-9_-]+$`.
pub fn is_valid_name(name: &str) -> bool {
    if name.is_empty() || name.len() > MAX_NAME_LEN {
        return false;
    }
    Regex::new(r"^[A-Za-z0-9_-]+$").unwrap().is_match(name)
}

/// Generate a fresh note name: shuffle the unambiguous alphabet into a
/// random permutation and take the last [`GENERATED_NAME_LEN`] characters,
/// so a generated name never repeats a character.
pub fn generate_name() -> String {
    let mut chars: Vec<char> = NAME_ALPHABET.chars().collect();
    chars.shuffle(&mut rand::thread_rng());
    chars[chars.len() - GENERATED_NAME_LEN..].iter().collect()
}

// ============================================================================
// Tests
// ============================================================================
