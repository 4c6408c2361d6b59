//! Reading graph text files.

pub use parser::{parse_edge, parse_edges, read_lines, split_sections, EdgeRule};

mod parser;
