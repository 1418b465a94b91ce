//! Locale-style ordering for player names.
//!
//! Plain `str::cmp` orders by code point, which puts every uppercase letter
//! before every lowercase one and every accented letter after `z`. Roster
//! lists need the ordering people expect from a sorted name column, so names
//! are compared in three levels:
//!
//! 1. base letters, ignoring accents and case (`"Dončić"` sorts with `"Doncic"`)
//! 2. accents
//! 3. case, lowercase first
//!
//! Names identical at all three levels fall back to code point order so the
//! comparison stays a total order.

use std::cmp::Ordering;

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Compare two display names.
#[must_use]
pub fn compare_names(a: &str, b: &str) -> Ordering {
    base_key(a)
        .cmp(&base_key(b))
        .then_with(|| accent_key(a).cmp(&accent_key(b)))
        .then_with(|| compare_case(a, b))
        .then_with(|| a.cmp(b))
}

fn base_key(name: &str) -> String {
    name.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}

fn accent_key(name: &str) -> String {
    name.nfd().flat_map(char::to_lowercase).collect()
}

fn compare_case(a: &str, b: &str) -> Ordering {
    a.nfd()
        .zip(b.nfd())
        .map(|(left, right)| case_rank(left).cmp(&case_rank(right)))
        .find(|ordering| ordering.is_ne())
        .unwrap_or(Ordering::Equal)
}

fn case_rank(c: char) -> u8 {
    if c.is_uppercase() { 1 } else { 0 }
}
