//! Downsampling of PacBio FASTA reads by ZMW.
//!
//! Each header carries the ZMW as its second `/`-delimited field (`>movie/12345/0_100`).
//! Three quarters of the unique ZMWs are drawn at random, and every record of a drawn ZMW
//! is written, unchanged and in input order, to a gzip-compressed FASTA file.

pub mod emit;
pub mod error;
pub mod record;
pub mod sample;

use std::{
    fs::File,
    io::{BufReader, BufWriter},
    path::{Path, PathBuf},
};
use flate2::{write::GzEncoder, Compression};
use rand::Rng;

pub use crate::{
    emit::{emit_selected, EmitStats},
    error::{Error, Result},
    record::{extract_zmws, zmw_of, FastaRecords, Record},
    sample::{sample_size, select_zmws},
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub zmws: usize,
    pub zmws_selected: usize,
    pub records_read: usize,
    pub records_written: usize,
}

/// `./<prefix>_downsampled.fa.gz`, where `prefix` is the input file name up to its first `.`.
pub fn output_path(input: &Path) -> PathBuf {
    let basename = input.file_name().map(|s| s.to_string_lossy()).unwrap_or_default();
    let prefix = basename.split('.').next().unwrap_or("");
    Path::new(".").join(format!("{}_downsampled.fa.gz", prefix))
}

fn open_input(path: &Path) -> Result<BufReader<File>> {
    File::open(path)
        .map(BufReader::new)
        .map_err(|source| Error::MissingInputFile { path: path.to_owned(), source })
}

/// Reads `input` twice: once to collect ZMWs, once to write the records of the selected ZMWs
/// to `output`. Malformed headers are reported by the first pass, before `output` is created.
/// On a later failure, a partially written `output` is left in place.
pub fn run<G: Rng + ?Sized>(input: &Path, output: &Path, rng: &mut G) -> Result<Summary> {
    log::info!("Collecting ZMWs from {}", input.display());
    let zmws = extract_zmws(open_input(input)?)?;
    let selected = select_zmws(&zmws, rng);
    log::info!("Selected {} out of {} unique ZMWs", selected.len(), zmws.len());

    let f_in = open_input(input)?;
    let f_out = File::create(output)
        .map_err(|source| Error::CreateOutput { path: output.to_owned(), source })?;
    let mut f_out = BufWriter::with_capacity(131_072,
        GzEncoder::new(f_out, Compression::default()));
    let stats = emit_selected(f_in, &selected, &mut f_out)?;
    f_out.into_inner()
        .map_err(|e| Error::OutputWrite(e.into_error()))?
        .finish()
        .map_err(Error::OutputWrite)?;
    log::info!("Wrote {} out of {} records to {}",
        stats.records_written, stats.records_read, output.display());

    Ok(Summary {
        zmws: zmws.len(),
        zmws_selected: selected.len(),
        records_read: stats.records_read,
        records_written: stats.records_written,
    })
}
