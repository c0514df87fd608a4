//! Banner, settings summary and candidate preview.

use crate::pass::{Composition, Constraints};
use crate::terminal::{
    DIGIT_COLOR, DIM, RESET, SYMBOL_COLOR, box_bottom, box_line, box_line_center, box_top, flush,
    highlight,
};

pub fn print_banner() {
    box_top("passprompt");
    box_line_center("Interactive password generator");
    box_line("");
    box_line("Answer each question and press Enter.");
    box_line(&format!("{DIM}Esc: skip/clear answer | CTRL+U: clear input | CTRL+C: quit{RESET}"));
    box_bottom();
    println!();
    flush();
}

fn describe(value: Option<usize>) -> String {
    value.map_or_else(|| "any".to_string(), |n| n.to_string())
}

/// Summary of the constraint set the candidates are built from.
pub fn print_constraints(constraints: &Constraints) {
    println!();
    box_top("Settings");
    box_line(&format!("Length: {}", constraints.length));
    box_line(&format!(
        "Digits: {} | Symbols: {}",
        if constraints.allow_digits { "yes" } else { "no" },
        if constraints.allow_symbols { "yes" } else { "no" },
    ));
    if let Some(start) = constraints.start {
        box_line(&format!("Starts with: {start}"));
        if constraints.allow_digits {
            box_line(&format!("Exact digits: {}", describe(constraints.exact_digits)));
        }
        if constraints.allow_symbols {
            box_line(&format!("Exact symbols: {}", describe(constraints.exact_symbols)));
        }
    }
    box_bottom();
}

/// Colorized candidate with its per-class breakdown.
pub fn print_preview(password: &str, attempt: usize) {
    let comp = Composition::of(password);
    println!();
    box_top(&format!("Candidate #{attempt}"));
    box_line_center(&highlight(password));
    box_line("");
    box_line(&format!(
        "{} letters | {DIGIT_COLOR}{} digits{RESET} | {SYMBOL_COLOR}{} symbols{RESET}",
        comp.letters(),
        comp.digits,
        comp.symbols,
    ));
    box_bottom();
    flush();
}
