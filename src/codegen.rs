//! DOT document generation.

use crate::{
    error::{Error, Result},
    types::{EdgeRecord, VId, Weight},
};
use log::debug;
use std::{convert::TryFrom, io::Write};

/// Writes the whole document and returns the number of edges written.
///
/// Edges are consumed one at a time, so an error stops the output right
/// after the last good edge.
pub fn codegen<'a, W, I>(w: &mut W, vertices: &[&str], edges: I) -> Result<usize>
where
    W: Write,
    I: IntoIterator<Item = Result<(&'a str, EdgeRecord)>>,
{
    emit_header(w)?;
    let mut num_edges = 0;
    for edge in edges {
        let (line, edge) = edge?;
        let src = vertex_label(vertices, edge.src(), line)?;
        let dst = vertex_label(vertices, edge.dst(), line)?;
        debug!("{} -> {} ({})", src, dst, edge.weight());
        emit_edge(w, src, dst, edge.weight())?;
        num_edges += 1;
    }
    emit_footer(w)?;
    Ok(num_edges)
}

pub fn emit_header<W: Write>(w: &mut W) -> std::io::Result<()> {
    writeln!(w, "digraph {{")
}

/// Labels are written as is; embedded quotes are not escaped.
pub fn emit_edge<W: Write>(
    w: &mut W,
    src: &str,
    dst: &str,
    weight: Weight,
) -> std::io::Result<()> {
    writeln!(
        w,
        "\"{}\" -> \"{}\" [label={} arrowhead=normal]",
        src,
        dst,
        format_weight(weight)
    )
}

pub fn emit_footer<W: Write>(w: &mut W) -> std::io::Result<()> {
    writeln!(w, "}}")
}

/// Formats a weight with two fractional digits.
///
/// Rounds half up on the shortest decimal form of the weight, so `1.005`
/// gives `1.01` where `{:.2}` would give `1.00`.
pub fn format_weight(weight: Weight) -> String {
    if !weight.is_finite() {
        return weight.to_string();
    }
    let repr = weight.abs().to_string();
    let (int, frac) = match repr.find('.') {
        Some(pos) => (&repr[..pos], &repr[pos + 1..]),
        None => (repr.as_str(), ""),
    };
    let mut digits: Vec<char> = int
        .chars()
        .chain(frac.chars().chain(std::iter::repeat('0')).take(2))
        .collect();
    if frac.chars().nth(2).map_or(false, |d| d >= '5') {
        round_up(&mut digits);
    }
    let point = digits.len() - 2;
    format!(
        "{}{}.{}",
        if weight.is_sign_negative() { "-" } else { "" },
        digits[..point].iter().collect::<String>(),
        digits[point..].iter().collect::<String>()
    )
}

fn round_up(digits: &mut Vec<char>) {
    for d in digits.iter_mut().rev() {
        if *d == '9' {
            *d = '0';
        } else {
            *d = (*d as u8 + 1) as char;
            return;
        }
    }
    digits.insert(0, '1');
}

fn vertex_label<'v>(vertices: &[&'v str], index: VId, line: &str) -> Result<&'v str> {
    usize::try_from(index)
        .ok()
        .and_then(|i| vertices.get(i))
        .copied()
        .ok_or_else(|| Error::IndexRange {
            line: String::from(line),
            index,
            num_vertices: vertices.len(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(vertices: &[&str], edges: Vec<(&'static str, EdgeRecord)>) -> Result<String> {
        let mut out = vec![];
        codegen(&mut out, vertices, edges.into_iter().map(Ok))?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_format_weight() {
        assert_eq!(format_weight(3.0), "3.00");
        assert_eq!(format_weight(2.5), "2.50");
        assert_eq!(format_weight(1.5), "1.50");
        assert_eq!(format_weight(0.0), "0.00");
        assert_eq!(format_weight(1234.5678), "1234.57");
        assert_eq!(format_weight(0.001), "0.00");
    }

    #[test]
    fn test_format_weight_rounds_half_up() {
        assert_eq!(format_weight(1.005), "1.01");
        assert_eq!(format_weight(0.125), "0.13");
        assert_eq!(format_weight(2.675), "2.68");
        assert_eq!(format_weight(9.995), "10.00");
        assert_eq!(format_weight(99.999), "100.00");
        assert_eq!(format_weight(-2.345), "-2.35");
    }

    #[test]
    fn test_format_weight_non_finite() {
        assert_eq!(format_weight(f64::NAN), "NaN");
        assert_eq!(format_weight(f64::INFINITY), "inf");
        assert_eq!(format_weight(f64::NEG_INFINITY), "-inf");
    }

    #[test]
    fn test_codegen() {
        assert_eq!(
            render(
                &["A", "B", "C"],
                vec![
                    ("0,1,1.5", EdgeRecord::new(0, 1, 1.5)),
                    ("1,2,3", EdgeRecord::new(1, 2, 3.0)),
                ]
            )
            .unwrap(),
            "\
digraph {
\"A\" -> \"B\" [label=1.50 arrowhead=normal]
\"B\" -> \"C\" [label=3.00 arrowhead=normal]
}
"
        );
    }

    #[test]
    fn test_codegen_keeps_parallel_edges() {
        assert_eq!(
            render(
                &["x", "y"],
                vec![
                    ("1,0,1", EdgeRecord::new(1, 0, 1.0)),
                    ("1,0,1", EdgeRecord::new(1, 0, 1.0)),
                    ("0,0,2", EdgeRecord::new(0, 0, 2.0)),
                ]
            )
            .unwrap(),
            "\
digraph {
\"y\" -> \"x\" [label=1.00 arrowhead=normal]
\"y\" -> \"x\" [label=1.00 arrowhead=normal]
\"x\" -> \"x\" [label=2.00 arrowhead=normal]
}
"
        );
    }

    #[test]
    fn test_codegen_no_edges() {
        assert_eq!(render(&["A"], vec![]).unwrap(), "digraph {\n}\n");
    }

    #[test]
    fn test_codegen_index_out_of_range() {
        for (line, edge) in vec![
            ("0,2,1", EdgeRecord::new(0, 2, 1.0)),
            ("-1,0,1", EdgeRecord::new(-1, 0, 1.0)),
        ] {
            match render(&["A", "B"], vec![(line, edge)]) {
                Err(Error::IndexRange {
                    line: l,
                    num_vertices,
                    ..
                }) => {
                    assert_eq!(l, line);
                    assert_eq!(num_vertices, 2);
                }
                other => panic!("unexpected {:?}", other),
            }
        }
    }

    #[test]
    fn test_codegen_stops_at_error() {
        let mut out = vec![];
        let edges = vec![
            Ok(("0,1,1", EdgeRecord::new(0, 1, 1.0))),
            Err(Error::MalformedLine(String::from("oops"))),
            Ok(("1,0,1", EdgeRecord::new(1, 0, 1.0))),
        ];
        assert!(codegen(&mut out, &["A", "B"], edges).is_err());
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "digraph {\n\"A\" -> \"B\" [label=1.00 arrowhead=normal]\n"
        );
    }
}
