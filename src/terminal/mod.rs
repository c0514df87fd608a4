//! Shared terminal utilities.
//!
//! Screen clearing, raw mode management, styled output and box drawing.

mod output;
mod raw_mode;

pub use output::*;
pub use raw_mode::*;
