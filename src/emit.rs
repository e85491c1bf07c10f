use std::{
    collections::HashSet,
    io::{BufRead, Write},
};
use crate::{
    error::{Error, Result},
    record::FastaRecords,
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EmitStats {
    pub records_read: usize,
    pub records_written: usize,
}

/// Writes every record whose ZMW is in `selected`, verbatim and in input order.
pub fn emit_selected(
    reader: impl BufRead,
    selected: &HashSet<Vec<u8>>,
    mut f_out: impl Write,
) -> Result<EmitStats> {
    let mut stats = EmitStats::default();
    for record in FastaRecords::new(reader) {
        let record = record?;
        stats.records_read += 1;
        if selected.contains(record.zmw()) {
            record.write_to(&mut f_out).map_err(Error::OutputWrite)?;
            stats.records_written += 1;
        }
    }
    f_out.flush().map_err(Error::OutputWrite)?;
    Ok(stats)
}
