//! Answer parsing. Each routine returns a typed result the session can act on.

use super::InputError;
use crate::pass::{CharClass, MAX_LENGTH, MIN_LENGTH};

/// Answer that means "no exact count" for the count questions.
pub const SKIP_TOKEN: &str = "s";

pub fn parse_length(input: &str) -> Result<usize, InputError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(InputError::Empty);
    }
    let value: usize = input
        .parse()
        .map_err(|_| InputError::NotANumber(input.to_string()))?;
    if !(MIN_LENGTH..=MAX_LENGTH).contains(&value) {
        return Err(InputError::OutOfRange {
            value,
            min: MIN_LENGTH,
            max: MAX_LENGTH,
        });
    }
    Ok(value)
}

pub fn parse_yes_no(input: &str) -> Result<bool, InputError> {
    match input.trim().to_lowercase().as_str() {
        "" => Err(InputError::Empty),
        "y" | "yes" => Ok(true),
        "n" | "no" => Ok(false),
        other => Err(InputError::UnrecognizedChoice {
            input: other.to_string(),
            expected: "'y' or 'n'",
        }),
    }
}

pub fn parse_start_category(input: &str) -> Result<CharClass, InputError> {
    match input.trim() {
        "" => Err(InputError::Empty),
        "1" => Ok(CharClass::Upper),
        "2" => Ok(CharClass::Lower),
        "3" => Ok(CharClass::Digit),
        "4" => Ok(CharClass::Symbol),
        other => Err(InputError::UnrecognizedChoice {
            input: other.to_string(),
            expected: "1, 2, 3 or 4",
        }),
    }
}

/// Exact count or skip. `Ok(None)` means no exact count was requested.
/// Range checking is left to the caller, which clamps against the budget.
pub fn parse_exact_count(input: &str) -> Result<Option<usize>, InputError> {
    let input = input.trim();
    if input.is_empty() || input.eq_ignore_ascii_case(SKIP_TOKEN) {
        return Ok(None);
    }
    input
        .parse()
        .map(Some)
        .map_err(|_| InputError::NotANumber(input.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn length_accepts_bounds() {
        assert_eq!(parse_length("8"), Ok(8));
        assert_eq!(parse_length(" 32 \n"), Ok(32));
        assert_eq!(parse_length("17"), Ok(17));
    }

    #[test]
    fn length_rejects_out_of_range() {
        assert_eq!(
            parse_length("7"),
            Err(InputError::OutOfRange { value: 7, min: 8, max: 32 })
        );
        assert_eq!(
            parse_length("33"),
            Err(InputError::OutOfRange { value: 33, min: 8, max: 32 })
        );
    }

    #[test]
    fn length_rejects_garbage() {
        assert_eq!(parse_length(""), Err(InputError::Empty));
        assert_eq!(parse_length("ten"), Err(InputError::NotANumber("ten".into())));
        assert_eq!(parse_length("-9"), Err(InputError::NotANumber("-9".into())));
    }

    #[test]
    fn yes_no_variants() {
        assert_eq!(parse_yes_no("y"), Ok(true));
        assert_eq!(parse_yes_no("YES"), Ok(true));
        assert_eq!(parse_yes_no("n"), Ok(false));
        assert_eq!(parse_yes_no(" No "), Ok(false));
        assert_eq!(parse_yes_no(""), Err(InputError::Empty));
        assert!(matches!(
            parse_yes_no("maybe"),
            Err(InputError::UnrecognizedChoice { .. })
        ));
    }

    #[test]
    fn start_category_choices() {
        assert_eq!(parse_start_category("1"), Ok(CharClass::Upper));
        assert_eq!(parse_start_category("2"), Ok(CharClass::Lower));
        assert_eq!(parse_start_category("3"), Ok(CharClass::Digit));
        assert_eq!(parse_start_category("4"), Ok(CharClass::Symbol));
        assert!(matches!(
            parse_start_category("5"),
            Err(InputError::UnrecognizedChoice { .. })
        ));
        assert_eq!(parse_start_category("  "), Err(InputError::Empty));
    }

    #[test]
    fn exact_count_skip_and_numbers() {
        assert_eq!(parse_exact_count(""), Ok(None));
        assert_eq!(parse_exact_count("s"), Ok(None));
        assert_eq!(parse_exact_count("S"), Ok(None));
        assert_eq!(parse_exact_count("0"), Ok(Some(0)));
        assert_eq!(parse_exact_count("4"), Ok(Some(4)));
        assert_eq!(parse_exact_count("four"), Err(InputError::NotANumber("four".into())));
    }

    #[test]
    fn errors_read_as_corrections() {
        let msg = parse_length("40").unwrap_err().to_string();
        assert_eq!(msg, "40 is out of range, enter a number from 8 to 32.");
    }
}
