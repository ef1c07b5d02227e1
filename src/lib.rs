pub mod catalog;
pub mod cli;
pub mod color;
pub mod export;
pub mod names;
pub mod parse;
pub mod pipeline;
pub mod preview;
pub mod record;
pub mod scale;

pub use color::Color;
pub use parse::{parse, ParseError};
