//! Answer input: raw-mode line editing on a TTY, plain reads otherwise.

use std::io::{self, BufRead};

use crossterm::event::{Event, KeyCode, KeyEventKind, KeyModifiers, read};
use log::debug;

use super::SessionError;
use crate::terminal::{RawModeGuard, flush, reset_terminal, stdin_is_tty};

/// Source of answer lines for the session.
pub trait LineSource {
    /// Show `prompt` and return the next line without its terminator.
    fn read_line(&mut self, prompt: &str) -> Result<String, SessionError>;
}

/// Reads answers from the controlling terminal, or from piped stdin.
pub struct TerminalInput {
    interactive: bool,
}

impl TerminalInput {
    pub fn new() -> Self {
        let interactive = stdin_is_tty();
        debug!("terminal input, interactive={interactive}");
        Self { interactive }
    }
}

impl Default for TerminalInput {
    fn default() -> Self {
        Self::new()
    }
}

impl LineSource for TerminalInput {
    fn read_line(&mut self, prompt: &str) -> Result<String, SessionError> {
        if self.interactive {
            match get_editable_input(prompt)? {
                Some(line) => Ok(line),
                None => Ok(String::new()),
            }
        } else {
            read_piped_line(prompt)
        }
    }
}

fn read_piped_line(prompt: &str) -> Result<String, SessionError> {
    print!("{prompt}: ");
    flush();

    let mut line = String::new();
    if io::stdin().lock().read_line(&mut line)? == 0 {
        println!();
        return Err(SessionError::InputClosed);
    }
    let trimmed = line.trim_end_matches(['\r', '\n']).to_string();
    // Echo so the transcript reads the same as an interactive session.
    println!("{trimmed}");
    Ok(trimmed)
}

/// Single-line editor in raw mode. `Ok(None)` when the user presses Esc.
fn get_editable_input(prompt: &str) -> Result<Option<String>, SessionError> {
    let mut input: Vec<char> = Vec::new();
    // 0-based insertion point within `input`.
    let mut cursor = 0;
    let mut drawn_len = 0;
    let mut cancelled = false;

    let mut guard = RawModeGuard::new()?;

    print!("{}: ", prompt);
    flush();

    loop {
        let key_event = match read()? {
            Event::Key(k) if k.kind != KeyEventKind::Release => k,
            _ => continue,
        };

        match key_event.code {
            KeyCode::Char('c') if key_event.modifiers.contains(KeyModifiers::CONTROL) => {
                // process::exit skips destructors, restore the terminal first
                guard.release();
                reset_terminal();
                println!();
                std::process::exit(130);
            }
            KeyCode::Char('d')
                if key_event.modifiers.contains(KeyModifiers::CONTROL) && input.is_empty() =>
            {
                guard.release();
                println!();
                return Err(SessionError::InputClosed);
            }
            KeyCode::Char('u') if key_event.modifiers.contains(KeyModifiers::CONTROL) => {
                input.clear();
                cursor = 0;
            }
            KeyCode::Esc => {
                cancelled = true;
                break;
            }
            KeyCode::Enter => break,
            KeyCode::Backspace => {
                if cursor > 0 {
                    cursor -= 1;
                    input.remove(cursor);
                }
            }
            KeyCode::Delete => {
                if cursor < input.len() {
                    input.remove(cursor);
                }
            }
            KeyCode::Left => cursor = cursor.saturating_sub(1),
            KeyCode::Right => cursor = (cursor + 1).min(input.len()),
            KeyCode::Home => cursor = 0,
            KeyCode::End => cursor = input.len(),
            KeyCode::Char(c) if !key_event.modifiers.contains(KeyModifiers::CONTROL) => {
                input.insert(cursor, c);
                cursor += 1;
            }
            _ => {}
        }

        // Redraw the input line, then place the cursor.
        let text: String = input.iter().collect();
        print!("\r{}: {}", prompt, " ".repeat(drawn_len + 1));
        print!("\r{}: {}", prompt, text);
        print!("\x1b[{}G", prompt.chars().count() + 3 + cursor);
        flush();
        drawn_len = input.len();
    }

    // Leave raw mode before printing the newline.
    guard.release();
    println!();

    if cancelled {
        Ok(None)
    } else {
        Ok(Some(input.into_iter().collect()))
    }
}
