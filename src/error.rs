//! Error management.

use crate::{front_end::EdgeRule, types::VId};
use derive_more::Display;
use std::num::{ParseFloatError, ParseIntError};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Display)]
pub enum Error {
    #[display(fmt = "{}", _0)]
    Io(std::io::Error),
    #[display(fmt = "{}", _0)]
    Grammar(Box<pest::error::Error<EdgeRule>>),
    #[display(fmt = "illegible line {}", _0)]
    MalformedLine(String),
    #[display(fmt = "invalid vertex index `{}`: {}", field, source)]
    InvalidIndex { field: String, source: ParseIntError },
    #[display(fmt = "invalid weight `{}`: {}", field, source)]
    InvalidWeight {
        field: String,
        source: ParseFloatError,
    },
    #[display(
        fmt = "vertex index {} out of range (0..{}) in line {}",
        index,
        num_vertices,
        line
    )]
    IndexRange {
        line: String,
        index: VId,
        num_vertices: usize,
    },
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(e) => Some(e),
            Error::InvalidIndex { source, .. } => Some(source),
            Error::InvalidWeight { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::Io(e)
    }
}

impl From<pest::error::Error<EdgeRule>> for Error {
    fn from(e: pest::error::Error<EdgeRule>) -> Self {
        Error::Grammar(Box::new(e))
    }
}
