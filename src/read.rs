use std::fmt;

use crate::errors::utf8;

/// One sequence record as yielded by the record reader.
///
/// Only the header is kept. `name` is the whole header line without its
/// leading `@` or `>` marker, so any tab-delimited payload after the read
/// name is kept too. `len` is the sequence length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    name: Vec<u8>,
    len: usize,
}

impl Record {
    pub fn new(name: &[u8], len: usize) -> Self {
        Self {
            name: name.to_owned(),
            len,
        }
    }

    pub fn name(&self) -> &[u8] {
        &self.name
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

/// Two consecutive records from an interleaved stream.
///
/// Mates are assigned by position only; nothing checks that the names agree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadPair {
    pub r1: Record,
    pub r2: Record,
}

impl ReadPair {
    pub fn new(r1: Record, r2: Record) -> Self {
        Self { r1, r2 }
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} ({} bp)", utf8(&self.name), self.len)
    }
}

impl fmt::Display for ReadPair {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "read1: {}\nread2: {}", self.r1, self.r2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_display() {
        let record = Record::new(b"r1\t{\"id\": \"s1\"}", 4);
        assert_eq!(record.to_string(), "r1\t{\"id\": \"s1\"} (4 bp)");

        let pair = ReadPair::new(record, Record::new(b"r2", 0));
        assert!(pair.r2.is_empty());
        assert_eq!(
            pair.to_string(),
            "read1: r1\t{\"id\": \"s1\"} (4 bp)\nread2: r2 (0 bp)"
        );
    }
}
