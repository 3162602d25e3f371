//! Splits plain text fields into literal runs and `[text](href)` links, and
//! renders the result as inline HTML.

pub mod entity;
pub mod parser;
pub mod translator;

pub use entity::{Link, Segment, Segmented};
pub use parser::segment;
pub use translator::{render, translate};
