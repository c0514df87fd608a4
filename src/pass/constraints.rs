//! Constraint set for a single generation attempt.

use super::charset::CharClass;

pub const MIN_LENGTH: usize = 8;
pub const MAX_LENGTH: usize = 32;

/// Upper bound of the random digit count is `length / DIGIT_DIVISOR`.
pub const DIGIT_DIVISOR: usize = 5;
/// Upper bound of the random symbol count is `length / SYMBOL_DIVISOR`.
pub const SYMBOL_DIVISOR: usize = 6;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Constraints {
    pub length: usize,
    pub allow_digits: bool,
    pub allow_symbols: bool,
    pub start: Option<CharClass>,
    /// Total digits in the result, start character included.
    pub exact_digits: Option<usize>,
    /// Total symbols in the result, start character included.
    pub exact_symbols: Option<usize>,
}

impl Default for Constraints {
    fn default() -> Self {
        Self {
            length: 12,
            allow_digits: true,
            allow_symbols: true,
            start: None,
            exact_digits: None,
            exact_symbols: None,
        }
    }
}

impl Constraints {
    /// Smallest exact count accepted for `class`: a start character of that
    /// class always counts towards it.
    pub fn min_exact(&self, class: CharClass) -> usize {
        usize::from(self.start == Some(class))
    }

    /// Largest exact digit count that leaves room for the start character.
    pub fn digit_budget(&self) -> usize {
        self.length.saturating_sub(1)
    }

    /// Largest exact symbol count once the digit count is settled.
    pub fn symbol_budget(&self) -> usize {
        self.length
            .saturating_sub(1)
            .saturating_sub(self.exact_digits.unwrap_or(0))
    }

    /// Clamp a requested exact count for `class` into its valid range.
    pub fn clamp_exact(&self, class: CharClass, requested: usize) -> usize {
        let max = match class {
            CharClass::Digit => self.digit_budget(),
            CharClass::Symbol => self.symbol_budget(),
            CharClass::Upper | CharClass::Lower => return requested,
        };
        let min = self.min_exact(class);
        requested.clamp(min, max.max(min))
    }
}
