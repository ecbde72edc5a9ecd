//! Letter/index conversion helpers for the 26-letter uppercase alphabet.
//!
//! All cipher arithmetic operates on indices in `[0, 25]`; conversion to
//! and from `char` happens once at the public API boundary.

/// Number of letters in the alphabet.
pub(crate) const LETTER_COUNT: u8 = 26;

/// Returns the alphabet index of `letter` (`'A'` → 0, …, `'Z'` → 25),
/// or `None` if `letter` is not an uppercase ASCII letter.
pub(crate) fn letter_index(letter: char) -> Option<u8> {
    if letter.is_ascii_uppercase() {
        Some(letter as u8 - b'A')
    } else {
        None
    }
}

/// Returns the letter at alphabet index `index` (0 → `'A'`, …, 25 → `'Z'`).
///
/// # Panics
/// Debug-panics if `index >= 26`. All internal arithmetic is reduced
/// modulo 26 before calling this.
pub(crate) fn letter_at(index: u8) -> char {
    debug_assert!(index < LETTER_COUNT);
    (b'A' + index) as char
}
