use std::{io, path::PathBuf};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("cannot open input file {}: {source}", path.display())]
    MissingInputFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to read input: {0}")]
    Read(#[source] io::Error),

    /// Header without a non-empty second `/`-delimited field, or data before the first header.
    #[error("malformed header at line {line}: {header:?} has no ZMW field")]
    MalformedHeader { line: usize, header: String },

    #[error("cannot create output file {}: {source}", path.display())]
    CreateOutput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write output: {0}")]
    OutputWrite(#[source] io::Error),
}
