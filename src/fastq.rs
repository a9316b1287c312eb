use needletail::{parse_fastx_file, parse_fastx_reader, FastxReader};

use std::fmt;
use std::fs;
use std::io;

use crate::errors::*;
use crate::read::*;

/// Where a record stream comes from, for error messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Origin {
    File(String),
    Bytes,
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Origin::File(file) => write!(f, "\"{}\"", file),
            Origin::Bytes => write!(f, "bytes"),
        }
    }
}

/// Stream of read pairs drawn from a single interleaved fasta/fastq source.
///
/// Every two consecutive records form one pair. A trailing record without a
/// mate is dropped and ends the stream without an error.
pub struct PairedRecords<'reader> {
    reader: Option<Box<dyn FastxReader + 'reader>>,
    origin: Origin,
    idx: usize,
}

impl PairedRecords<'static> {
    /// Stream read pairs from an interleaved, optionally gzipped, input file.
    ///
    /// A zero-length file yields no pairs. Anything that is not a readable,
    /// non-empty regular file is an error.
    pub fn new(file: impl AsRef<str>) -> Result<Self> {
        let file = file.as_ref();
        log::debug!("Opening interleaved records in \"{}\"", file);

        let metadata = fs::metadata(file).map_err(|e| Error::file_io(file, e))?;
        if !metadata.is_file() {
            return Err(Error::file_io(
                file,
                io::Error::new(io::ErrorKind::InvalidInput, "not a regular file"),
            ));
        }

        let reader = if metadata.len() == 0 {
            None
        } else {
            Some(parse_fastx_file(file).map_err(|e| Error::file_io(file, e))?)
        };

        Ok(Self {
            reader,
            origin: Origin::File(file.to_owned()),
            idx: 0,
        })
    }
}

impl<'reader> PairedRecords<'reader> {
    /// Stream read pairs from interleaved records held in a byte slice.
    pub fn from_bytes(bytes: &'reader [u8]) -> Result<Self> {
        let reader = if bytes.is_empty() {
            None
        } else {
            Some(parse_fastx_reader(bytes).map_err(|e| Error::BytesIo(Box::new(e)))?)
        };

        Ok(Self {
            reader,
            origin: Origin::Bytes,
            idx: 0,
        })
    }

    pub fn origin(&self) -> &Origin {
        &self.origin
    }

    /// Number of records consumed so far.
    pub fn records_read(&self) -> usize {
        self.idx
    }

    fn next_record(&mut self) -> Option<Result<Record>> {
        let reader = self.reader.as_mut()?;
        let record = reader.next()?;
        let idx = self.idx;
        self.idx += 1;

        Some(
            record
                .map(|r| Record::new(r.id(), r.seq().len()))
                .map_err(|e| Error::ParseRecord {
                    origin: self.origin.clone(),
                    idx,
                    source: Box::new(e),
                }),
        )
    }
}

impl<'reader> Iterator for PairedRecords<'reader> {
    type Item = Result<ReadPair>;

    fn next(&mut self) -> Option<Self::Item> {
        let r1 = match self.next_record()? {
            Ok(r) => r,
            Err(e) => {
                self.reader = None;
                return Some(Err(e));
            }
        };

        let Some(r2) = self.next_record() else {
            log::debug!(
                "Dropping unpaired trailing record {} in {}",
                self.idx - 1,
                self.origin
            );
            self.reader = None;
            return None;
        };

        match r2 {
            Ok(r2) => Some(Ok(ReadPair::new(r1, r2))),
            Err(e) => {
                self.reader = None;
                Some(Err(e))
            }
        }
    }
}
