//! Weighted digraph text to Graphviz DOT conversion.
//!
//! A source file lists one vertex label per line, then a blank line, then
//! one `src,dst,weight` edge per line with vertices given by index.

pub mod codegen;
pub mod convert;
pub mod error;
pub mod front_end;
pub mod types;

pub use convert::{convert, convert_str, convert_to, target_filename};
pub use error::{Error, Result};
