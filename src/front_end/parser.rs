use crate::{
    error::{Error, Result},
    types::{EdgeRecord, FilePart, VId, Weight},
};
use itertools::Itertools;
use log::debug;
use pest::Parser;
use pest_derive::Parser;
use std::path::Path;

pub type EdgeRule = Rule;

#[derive(Parser)]
#[grammar = "front_end/grammar.pest"]
struct EdgeLineParser;

/// Reads the whole file and splits it into lines, keeping the blank ones.
pub fn read_lines<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let content = std::fs::read_to_string(path)?;
    Ok(content.lines().map(String::from).collect())
}

/// Splits lines into trimmed vertex labels and non-blank edge lines.
///
/// The first blank line separates the two parts and belongs to neither.
/// Later blank lines are skipped.
pub fn split_sections<S: AsRef<str>>(lines: &[S]) -> (Vec<&str>, Vec<&str>) {
    let mut part = FilePart::default();
    let mut vertices = vec![];
    let mut edges = vec![];
    for line in lines.iter().map(|line| line.as_ref()) {
        match part {
            _ if line.trim().is_empty() => part = FilePart::Edges,
            FilePart::Vertices => vertices.push(line.trim()),
            FilePart::Edges => edges.push(line),
        }
    }
    debug!("{} vertex lines, {} edge lines", vertices.len(), edges.len());
    (vertices, edges)
}

/// Parses `src,dst,weight`; fields past the third are ignored.
pub fn parse_edge(line: &str) -> Result<EdgeRecord> {
    let (src, dst, weight) = EdgeLineParser::parse(Rule::edge_line, line)?
        .flat_map(|pair| pair.into_inner())
        .filter(|pair| pair.as_rule() == Rule::field)
        .map(|pair| pair.as_str().trim())
        .take(3)
        .collect_tuple()
        .ok_or_else(|| Error::MalformedLine(String::from(line)))?;
    Ok(EdgeRecord::new(
        parse_vid(src)?,
        parse_vid(dst)?,
        parse_weight(weight)?,
    ))
}

/// Lazily parses edge lines, pairing each record with its line.
pub fn parse_edges<'a, I>(lines: I) -> impl Iterator<Item = Result<(&'a str, EdgeRecord)>>
where
    I: IntoIterator<Item = &'a str>,
{
    lines
        .into_iter()
        .map(|line| parse_edge(line).map(|edge| (line, edge)))
}

fn parse_vid(field: &str) -> Result<VId> {
    field.parse().map_err(|source| Error::InvalidIndex {
        field: String::from(field),
        source,
    })
}

fn parse_weight(field: &str) -> Result<Weight> {
    field.parse().map_err(|source| Error::InvalidWeight {
        field: String::from(field),
        source,
    })
}
