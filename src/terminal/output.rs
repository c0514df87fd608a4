//! Terminal output utilities.
//!
//! Screen clearing, styled messages, box drawing and password highlighting.

use crossterm::cursor::MoveTo;
use crossterm::execute;
use crossterm::terminal::{Clear, ClearType, disable_raw_mode};
use std::io::{self, Write};

use crate::pass::CharClass;

// ============================================================================
// ANSI Color/Style Constants
// ============================================================================

pub const RESET: &str = "\x1b[0m";
pub const DIM: &str = "\x1b[2m";
pub const RED: &str = "\x1b[38;5;9m";
pub const YELLOW: &str = "\x1b[38;5;11m";
pub const CYAN: &str = "\x1b[38;5;14m";
pub const MAGENTA: &str = "\x1b[38;5;13m";

/// Color used for digits in a password preview.
pub const DIGIT_COLOR: &str = CYAN;
/// Color used for symbols in a password preview.
pub const SYMBOL_COLOR: &str = MAGENTA;

// ============================================================================
// Terminal Control
// ============================================================================

/// Clear screen and scrollback, move cursor to top-left.
pub fn clear() {
    let mut out = io::stdout();
    if execute!(out, Clear(ClearType::All), Clear(ClearType::Purge), MoveTo(0, 0)).is_err() {
        // Not a terminal crossterm can drive, fall back to plain escapes.
        print!("\x1b[2J\x1b[3J\x1b[H");
    }
    flush();
}

/// Flush stdout.
pub fn flush() {
    let _ = io::stdout().flush();
}

/// Reset terminal to sane state.
pub fn reset_terminal() {
    let _ = disable_raw_mode();
    print!("{RESET}");
    flush();
}

// ============================================================================
// Styled Output Helpers
// ============================================================================

/// Print error message in red.
pub fn print_error(msg: &str) {
    println!("{RED}{msg}{RESET}");
}

/// Print a notice in yellow.
pub fn print_notice(msg: &str) {
    println!("{YELLOW}{msg}{RESET}");
}

/// Wrap digits and symbols of `password` in their preview colors.
/// Letters and unknown characters are left plain.
pub fn highlight(password: &str) -> String {
    let mut out = String::with_capacity(password.len() * 4);
    for c in password.chars() {
        match CharClass::of(c) {
            Some(CharClass::Digit) => {
                out.push_str(DIGIT_COLOR);
                out.push(c);
                out.push_str(RESET);
            }
            Some(CharClass::Symbol) => {
                out.push_str(SYMBOL_COLOR);
                out.push(c);
                out.push_str(RESET);
            }
            _ => out.push(c),
        }
    }
    out
}

// ============================================================================
// Box Drawing (60 char width)
// ============================================================================

pub const BOX_WIDTH: usize = 60;

/// Print box top with optional title: ┌─ Title ───────────────────────────┐
pub fn box_top(title: &str) {
    if title.is_empty() {
        println!("┌{}┐", "─".repeat(BOX_WIDTH - 2));
    } else {
        let title_part = format!("─ {} ", title);
        let remaining = (BOX_WIDTH - 2).saturating_sub(title_part.chars().count());
        println!("┌{}{}┐", title_part, "─".repeat(remaining));
    }
}

/// Print box content line: │ content                                        │
pub fn box_line(content: &str) {
    let inner_width = BOX_WIDTH - 4;
    let display_len = console_width(content);

    if display_len <= inner_width {
        let padding = inner_width - display_len;
        println!("│ {}{} │", content, " ".repeat(padding));
    } else {
        println!("│ {} │", content);
    }
}

/// Print centered box content line: │          content          │
pub fn box_line_center(content: &str) {
    let inner_width = BOX_WIDTH - 4;
    let display_len = console_width(content);

    if display_len <= inner_width {
        let total_padding = inner_width - display_len;
        let left_pad = total_padding / 2;
        let right_pad = total_padding - left_pad;
        println!(
            "│ {}{}{} │",
            " ".repeat(left_pad),
            content,
            " ".repeat(right_pad)
        );
    } else {
        println!("│ {} │", content);
    }
}

/// Print box bottom: └───────────────────────────────────────────────────────┘
pub fn box_bottom() {
    println!("└{}┘", "─".repeat(BOX_WIDTH - 2));
}

/// Display width of `s`, ignoring ANSI escape sequences.
pub fn console_width(s: &str) -> usize {
    let mut width = 0;
    let mut in_escape = false;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape {
            if c == 'm' {
                in_escape = false;
            }
        } else {
            width += 1;
        }
    }
    width
}
