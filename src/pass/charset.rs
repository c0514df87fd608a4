//! Character pools and classification.

use std::fmt;

pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub const DIGITS: &str = "0123456789";
pub const SYMBOLS: &str = "!$&?%";

/// One of the four disjoint character pools.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharClass {
    Upper,
    Lower,
    Digit,
    Symbol,
}

impl CharClass {
    pub const ALL: [CharClass; 4] = [
        CharClass::Upper,
        CharClass::Lower,
        CharClass::Digit,
        CharClass::Symbol,
    ];

    pub fn pool(self) -> &'static str {
        match self {
            CharClass::Upper => UPPERCASE,
            CharClass::Lower => LOWERCASE,
            CharClass::Digit => DIGITS,
            CharClass::Symbol => SYMBOLS,
        }
    }

    pub fn chars(self) -> Vec<char> {
        self.pool().chars().collect()
    }

    /// Class of `c`, or `None` if it belongs to no pool.
    pub fn of(c: char) -> Option<Self> {
        Self::ALL.into_iter().find(|class| class.contains(c))
    }

    pub fn contains(self, c: char) -> bool {
        self.pool().contains(c)
    }
}

impl fmt::Display for CharClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CharClass::Upper => "uppercase letter",
            CharClass::Lower => "lowercase letter",
            CharClass::Digit => "digit",
            CharClass::Symbol => "symbol",
        };
        f.write_str(name)
    }
}

/// Upper and lower case letters, in that order.
pub fn letters() -> Vec<char> {
    UPPERCASE.chars().chain(LOWERCASE.chars()).collect()
}

/// Pool for `class` with `exclude` removed.
pub fn pool_without(class: CharClass, exclude: char) -> Vec<char> {
    class.pool().chars().filter(|&c| c != exclude).collect()
}

/// Per-class character counts of a password.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Composition {
    pub upper: usize,
    pub lower: usize,
    pub digits: usize,
    pub symbols: usize,
    pub other: usize,
}

impl Composition {
    pub fn of(password: &str) -> Self {
        let mut comp = Self::default();
        for c in password.chars() {
            match CharClass::of(c) {
                Some(CharClass::Upper) => comp.upper += 1,
                Some(CharClass::Lower) => comp.lower += 1,
                Some(CharClass::Digit) => comp.digits += 1,
                Some(CharClass::Symbol) => comp.symbols += 1,
                None => comp.other += 1,
            }
        }
        comp
    }

    pub fn letters(&self) -> usize {
        self.upper + self.lower
    }
}
