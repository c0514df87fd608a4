//! Password synthesis.

use log::{trace, warn};
use rand::Rng;
use rand::seq::SliceRandom;
use zeroize::Zeroize;

use super::charset::{self, CharClass};
use super::constraints::{Constraints, DIGIT_DIVISOR, SYMBOL_DIVISOR};

/// Build one password satisfying `constraints`, drawing from `rng`.
///
/// Inputs are trusted: exact counts are expected to have been clamped so the
/// start character and every required digit and symbol fit in `length`.
pub fn synthesize<R: Rng + ?Sized>(constraints: &Constraints, rng: &mut R) -> String {
    let length = constraints.length;
    let mut chars: Vec<char> = Vec::with_capacity(length.max(1));

    let first = first_char(constraints.start, rng);
    chars.push(first);

    // The start character already satisfies one required digit or symbol.
    let mut exact_digits = constraints.exact_digits;
    let mut exact_symbols = constraints.exact_symbols;
    match CharClass::of(first) {
        Some(CharClass::Digit) => exact_digits = exact_digits.map(|n| n.saturating_sub(1)),
        Some(CharClass::Symbol) => exact_symbols = exact_symbols.map(|n| n.saturating_sub(1)),
        _ => {}
    }

    if let Some(n) = exact_digits.filter(|&n| n > 0) {
        sample_distinct(&charset::pool_without(CharClass::Digit, first), n, rng, &mut chars);
    }
    if let Some(n) = exact_symbols.filter(|&n| n > 0) {
        sample_distinct(&charset::pool_without(CharClass::Symbol, first), n, rng, &mut chars);
    }

    if constraints.allow_digits && constraints.exact_digits.is_none() {
        let count = rng.gen_range(1..=(length / DIGIT_DIVISOR).max(1));
        sample_repeat(&CharClass::Digit.chars(), count, rng, &mut chars);
    }
    if constraints.allow_symbols && constraints.exact_symbols.is_none() {
        let count = rng.gen_range(1..=(length / SYMBOL_DIVISOR).max(1));
        sample_repeat(&CharClass::Symbol.chars(), count, rng, &mut chars);
    }

    if chars.len() > length {
        trace!("truncating {} built chars to {}", chars.len(), length);
        chars.truncate(length);
    } else if chars.len() < length {
        let remaining = length - chars.len();
        let mut pool = fill_pool(constraints, first);
        if pool.is_empty() {
            warn!("fill pool is empty, password is {remaining} char(s) short");
        } else {
            sample_repeat(&pool, remaining, rng, &mut chars);
        }
        pool.zeroize();
    }

    if let Some(rest) = chars.get_mut(1..) {
        rest.shuffle(rng);
    }

    let password: String = chars.iter().collect();
    chars.zeroize();
    password
}

fn first_char<R: Rng + ?Sized>(start: Option<CharClass>, rng: &mut R) -> char {
    let pool = match start {
        Some(class) => class.chars(),
        None => charset::letters(),
    };
    pick(&pool, rng)
}

/// Letters, plus digits and symbols that are allowed but not exactly counted,
/// minus the start character.
fn fill_pool(constraints: &Constraints, first: char) -> Vec<char> {
    let mut pool = charset::letters();
    if constraints.allow_digits && constraints.exact_digits.is_none() {
        pool.extend(CharClass::Digit.pool().chars());
    }
    if constraints.allow_symbols && constraints.exact_symbols.is_none() {
        pool.extend(CharClass::Symbol.pool().chars());
    }
    pool.retain(|&c| c != first);
    pool
}

#[inline]
fn pick<R: Rng + ?Sized>(pool: &[char], rng: &mut R) -> char {
    pool[rng.gen_range(0..pool.len())]
}

/// Draw `count` chars without replacement. Once the pool is exhausted the
/// rest are drawn with replacement so the count is still met.
fn sample_distinct<R: Rng + ?Sized>(pool: &[char], count: usize, rng: &mut R, out: &mut Vec<char>) {
    if pool.is_empty() {
        return;
    }
    out.extend(pool.choose_multiple(rng, count).copied());
    if count > pool.len() {
        sample_repeat(pool, count - pool.len(), rng, out);
    }
}

fn sample_repeat<R: Rng + ?Sized>(pool: &[char], count: usize, rng: &mut R, out: &mut Vec<char>) {
    if pool.is_empty() {
        return;
    }
    out.extend((0..count).map(|_| pick(pool, rng)));
}
