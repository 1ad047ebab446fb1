//! Shared terminal utilities.
//!
//! Box drawing, strength meter rendering and raw mode management.

mod output;
mod raw_mode;

pub use output::*;
pub use raw_mode::*;
