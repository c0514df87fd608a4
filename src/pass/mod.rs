//! Password constraints and synthesis.

pub mod charset;
pub mod constraints;
mod generate;

pub use charset::{CharClass, Composition};
pub use constraints::{Constraints, MAX_LENGTH, MIN_LENGTH};
pub use generate::synthesize;
