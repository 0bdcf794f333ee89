//! Stat literal parsing and display reconstruction.

mod decoration;
mod parser;

pub use decoration::{Decoration, Style, format_value};
pub use parser::{Multiplier, ParsedValue, parse_value};
