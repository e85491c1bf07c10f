//! FASTA records keyed by the PacBio ZMW found in their header.

use std::{
    collections::BTreeSet,
    io::{self, BufRead, Write},
};
use crate::error::{Error, Result};

#[inline]
fn read_line(mut f: impl BufRead, buf: &mut Vec<u8>) -> io::Result<usize> {
    f.read_until(b'\n', buf)
}

fn trim_newline(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}

fn malformed(header: &[u8], line: usize) -> Error {
    Error::MalformedHeader {
        line,
        header: String::from_utf8_lossy(trim_newline(header)).into_owned(),
    }
}

#[inline]
pub fn is_header(line: &[u8]) -> bool {
    line.first() == Some(&b'>')
}

/// Returns the second `/`-delimited field of a header line: `>movie/12345/0_100` gives `12345`.
/// `line` is the 1-based line number, used only for the error.
pub fn zmw_of(header: &[u8], line: usize) -> Result<&[u8]> {
    match trim_newline(header).split(|&c| c == b'/').nth(1) {
        Some(zmw) if !zmw.is_empty() => Ok(zmw),
        _ => Err(malformed(header, line)),
    }
}

/// One read. Header and sequence keep their original line terminators.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    header: Vec<u8>,
    zmw: Vec<u8>,
    seq: Vec<u8>,
}

impl Record {
    pub fn new(header: Vec<u8>, seq: Vec<u8>, line: usize) -> Result<Self> {
        let zmw = zmw_of(&header, line)?.to_vec();
        Ok(Self { header, zmw, seq })
    }

    pub fn header(&self) -> &[u8] {
        &self.header
    }

    pub fn zmw(&self) -> &[u8] {
        &self.zmw
    }

    /// All sequence lines, concatenated with their terminators.
    pub fn seq(&self) -> &[u8] {
        &self.seq
    }

    pub fn write_to(&self, mut f: impl Write) -> io::Result<()> {
        f.write_all(&self.header)?;
        f.write_all(&self.seq)
    }
}

/// Iterator over the records of a FASTA stream, in file order.
/// Stops after the first error.
pub struct FastaRecords<R> {
    reader: R,
    buf: Vec<u8>,
    line: usize,
    /// Header line of the next record (and its line number), already consumed from `reader`.
    pending: Option<(Vec<u8>, usize)>,
    finished: bool,
}

impl<R: BufRead> FastaRecords<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buf: Vec::with_capacity(1024),
            line: 0,
            pending: None,
            finished: false,
        }
    }

    fn next_line(&mut self) -> Result<bool> {
        self.buf.clear();
        let n = read_line(&mut self.reader, &mut self.buf).map_err(Error::Read)?;
        if n > 0 {
            self.line += 1;
        }
        Ok(n > 0)
    }

    fn next_record(&mut self) -> Result<Option<Record>> {
        let (header, header_line) = match self.pending.take() {
            Some(pending) => pending,
            None => {
                if !self.next_line()? {
                    return Ok(None);
                }
                if !is_header(&self.buf) {
                    return Err(malformed(&self.buf, self.line));
                }
                (std::mem::take(&mut self.buf), self.line)
            }
        };

        let mut seq = Vec::new();
        while self.next_line()? {
            if is_header(&self.buf) {
                self.pending = Some((std::mem::take(&mut self.buf), self.line));
                break;
            }
            seq.extend_from_slice(&self.buf);
        }
        Record::new(header, seq, header_line).map(Some)
    }
}

impl<R: BufRead> Iterator for FastaRecords<R> {
    type Item = Result<Record>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        match self.next_record() {
            Ok(Some(record)) => Some(Ok(record)),
            Ok(None) => {
                self.finished = true;
                None
            }
            Err(e) => {
                self.finished = true;
                Some(Err(e))
            }
        }
    }
}

/// Collects unique ZMWs over all header lines, ignoring sequence lines.
/// Rejects data before the first header, same as [`FastaRecords`].
pub fn extract_zmws(mut reader: impl BufRead) -> Result<BTreeSet<Vec<u8>>> {
    let mut zmws = BTreeSet::new();
    let mut buf = Vec::with_capacity(1024);
    let mut line = 0;
    loop {
        buf.clear();
        if read_line(&mut reader, &mut buf).map_err(Error::Read)? == 0 {
            break;
        }
        line += 1;
        if line == 1 && !is_header(&buf) {
            return Err(malformed(&buf, line));
        }
        if is_header(&buf) {
            let zmw = zmw_of(&buf, line)?;
            if !zmws.contains(zmw) {
                zmws.insert(zmw.to_vec());
            }
        }
    }
    log::debug!("Scanned {} lines, {} unique ZMWs", line, zmws.len());
    Ok(zmws)
}
