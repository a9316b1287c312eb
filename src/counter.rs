use rustc_hash::FxHashMap;

use crate::errors::*;
use crate::fastq::*;
use crate::header::*;
use crate::read::*;

/// Number of read pairs attributed to each barcode ID.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: FxHashMap<String, usize>,
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&mut self, id: impl Into<String>) {
        *self.counts.entry(id.into()).or_insert(0) += 1;
    }

    /// Count for `id`, zero if it was never seen.
    pub fn get(&self, id: &str) -> usize {
        self.counts.get(id).copied().unwrap_or(0)
    }

    /// Number of distinct barcode IDs.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Number of read pairs counted.
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.counts.iter().map(|(id, &c)| (id.as_str(), c))
    }

    /// Entries with the most frequent barcode first, ties broken by ID.
    pub fn sorted(&self) -> Vec<(&str, usize)> {
        let mut entries = self.iter().collect::<Vec<_>>();
        entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        entries
    }
}

impl<S: Into<String>> FromIterator<S> for FrequencyTable {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut table = Self::new();
        iter.into_iter().for_each(|id| table.increment(id));
        table
    }
}

/// Tally the barcode ID of every read pair in an interleaved input file.
///
/// Fails on the first unreadable record or malformed read-1 header; no
/// partial table is returned.
pub fn assess_file(file: impl AsRef<str>) -> Result<FrequencyTable> {
    let pairs = PairedRecords::new(file.as_ref())?;
    let table = assess_pairs(pairs)?;

    log::info!(
        "Counted {} read pairs with {} distinct barcodes in \"{}\"",
        table.total(),
        table.len(),
        file.as_ref()
    );
    for (id, count) in table.sorted() {
        log::debug!("  {}: {}", id, count);
    }
    Ok(table)
}

/// Tally the barcode ID of each pair's first mate.
pub fn assess_pairs(pairs: impl IntoIterator<Item = Result<ReadPair>>) -> Result<FrequencyTable> {
    let mut table = FrequencyTable::new();

    for pair in pairs {
        let pair = pair?;
        table.increment(barcode_id(pair.r1.name())?);
    }

    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assess_bytes(bytes: &[u8]) -> Result<FrequencyTable> {
        assess_pairs(PairedRecords::from_bytes(bytes)?)
    }

    fn fastq(ids: &[&str]) -> Vec<u8> {
        ids.iter()
            .enumerate()
            .flat_map(|(i, id)| format!("@r{}\t{{\"id\": \"{}\"}}\nACGT\n+\nIIII\n", i, id).into_bytes())
            .collect()
    }

    #[test]
    fn test_same_barcode() {
        let table = assess_bytes(&fastq(&["X", "X", "X", "X", "X", "X"])).unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(table.get("X"), 3);
        assert_eq!(table.total(), 3);
    }

    #[test]
    fn test_only_first_mate_counted() {
        let table = assess_bytes(&fastq(&["a", "b", "b", "a", "a", "a"])).unwrap();
        assert_eq!(table.get("a"), 2);
        assert_eq!(table.get("b"), 1);
        assert_eq!(table.get("c"), 0);
    }

    #[test]
    fn test_odd_count_matches_even() {
        let odd = assess_bytes(&fastq(&["A", "B", "C"])).unwrap();
        let even = assess_bytes(&fastq(&["A", "B"])).unwrap();
        assert_eq!(odd, even);
    }

    #[test]
    fn test_mate_header_not_parsed() {
        let bytes = b"@r1\t{\"id\": \"s1\"}\nA\n+\nI\n@r2 no payload\nA\n+\nI\n";
        let table = assess_bytes(bytes).unwrap();
        assert_eq!(table.get("s1"), 1);
    }

    #[test]
    fn test_malformed_header_aborts() {
        let bytes = b"@r1\t{\"id\": \"s1\"}\nA\n+\nI\n@r2\nA\n+\nI\n@r3\t{\"other\": 1}\nA\n+\nI\n@r4\nA\n+\nI\n";
        let res = assess_bytes(bytes);
        assert!(matches!(
            res,
            Err(Error::MalformedHeader {
                reason: HeaderFault::MissingId,
                ..
            })
        ));
    }

    #[test]
    fn test_sorted() {
        let table = ["b", "a", "b", "c", "a", "b"].into_iter().collect::<FrequencyTable>();
        assert_eq!(table.sorted(), vec![("b", 3), ("a", 2), ("c", 1)]);
    }
}
