//! Interactive session: questions, previews and the final result.

mod error;
mod input;
mod parse;
mod questions;
mod session;
mod text;

pub use error::{InputError, SessionError};
pub use input::{LineSource, TerminalInput};
pub use session::Session;

use log::debug;
use zeroize::Zeroize;

use crate::terminal::clear;

/// Run the interactive session and print the accepted password alone.
pub fn run() -> Result<(), SessionError> {
    text::print_banner();

    let mut session = Session::new(TerminalInput::new(), rand::thread_rng());
    let mut password = session.run()?;
    debug!("{} candidate(s) generated", session.attempts());

    clear();
    println!("{password}");
    password.zeroize();
    Ok(())
}
