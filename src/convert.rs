//! The converter.

use crate::{
    codegen::codegen,
    error::Result,
    front_end::{parse_edges, read_lines, split_sections},
};
use log::info;
use std::{
    fs::File,
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

/// The extension given to generated files.
pub const EXTENSION: &str = "dot";

/// Converts `source` into the file named by [`target_filename`].
///
/// Returns the path written to.
pub fn convert<P: AsRef<Path>>(source: P) -> Result<PathBuf> {
    let target = target_filename(&source);
    convert_to(source, &target)?;
    Ok(target)
}

/// Converts `source` into `target` and returns the number of edges written.
///
/// The source is read before `target` is touched. A bad edge line leaves
/// `target` holding the edges before it.
pub fn convert_to<P: AsRef<Path>, Q: AsRef<Path>>(source: P, target: Q) -> Result<usize> {
    let (source, target) = (source.as_ref(), target.as_ref());
    let lines = read_lines(source)?;
    info!("read {} lines from {}", lines.len(), source.display());
    let mut w = BufWriter::new(File::create(target)?);
    let num_edges = convert_lines(&lines, &mut w)?;
    w.flush()?;
    info!("wrote {} edges to {}", num_edges, target.display());
    Ok(num_edges)
}

/// Converts graph text held in memory.
pub fn convert_str<W: Write>(input: &str, w: &mut W) -> Result<usize> {
    let lines: Vec<&str> = input.lines().collect();
    convert_lines(&lines, w)
}

fn convert_lines<S: AsRef<str>, W: Write>(lines: &[S], w: &mut W) -> Result<usize> {
    let (vertices, edges) = split_sections(lines);
    codegen(w, &vertices, parse_edges(edges))
}

/// Derives the output path: the file name up to its first dot, plus `.dot`.
///
/// Only the last path component is affected. Leading dots belong to the
/// name, so `.graph.txt` gives `.graph.dot`.
pub fn target_filename<P: AsRef<Path>>(source: P) -> PathBuf {
    let source = source.as_ref();
    match source.file_name() {
        Some(name) => {
            let name = name.to_string_lossy();
            let stem_len = name
                .char_indices()
                .skip_while(|&(_, c)| c == '.')
                .find(|&(_, c)| c == '.')
                .map_or(name.len(), |(pos, _)| pos);
            source.with_file_name(format!("{}.{}", &name[..stem_len], EXTENSION))
        }
        None => source.with_extension(EXTENSION),
    }
}
