//! Password generation.

pub mod charset;
mod generate;

pub use charset::{CharClass, CharsetSpec};
pub use generate::{Password, generate, generate_with};
