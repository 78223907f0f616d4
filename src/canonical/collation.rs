//! Fixed collation for `name` fields
//!
//! Approximates the Unicode root-locale ordering at tertiary strength so
//! that name-sorted arrays come out the same on every platform:
//!
//! 1. primary: NFKD, combining marks dropped, lowercased; each char weighted
//!    by class (whitespace < punctuation/symbols < digits < letters), then by
//!    code point
//! 2. secondary: accents, via the NFD form of the lowercased string
//! 3. tertiary: case, lowercase before uppercase
//! 4. identical: raw code point order, so the order is total
//!
//! Numeric substrings are not compared numerically: `"a10" < "a2"`.

use std::cmp::Ordering;

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum CharClass {
    Whitespace,
    Punctuation,
    Digit,
    Letter,
}

impl CharClass {
    fn of(c: char) -> Self {
        if c.is_whitespace() {
            CharClass::Whitespace
        } else if c.is_numeric() {
            CharClass::Digit
        } else if c.is_alphabetic() {
            CharClass::Letter
        } else {
            CharClass::Punctuation
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Case {
    Lower,
    Upper,
}

/// Sort key for one string. Field order is comparison order.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct CollationKey {
    primary: Vec<(CharClass, char)>,
    secondary: Vec<char>,
    tertiary: Vec<Case>,
    identical: String,
}

pub fn collation_key(s: &str) -> CollationKey {
    let base: Vec<char> = s.nfkd().filter(|c| !is_combining_mark(*c)).collect();

    let primary = base
        .iter()
        .flat_map(|c| c.to_lowercase())
        .map(|c| (CharClass::of(c), c))
        .collect();
    let secondary = s.to_lowercase().nfd().collect();
    let tertiary = base
        .iter()
        .map(|c| if c.is_uppercase() { Case::Upper } else { Case::Lower })
        .collect();

    CollationKey {
        primary,
        secondary,
        tertiary,
        identical: s.to_string(),
    }
}

pub fn compare(a: &str, b: &str) -> Ordering {
    collation_key(a).cmp(&collation_key(b))
}
