use std::fmt;
use std::io::{self, Write};

use crate::counter::*;
use crate::errors::*;

/// Derive a sample label from an input path.
///
/// Takes the text after the last `/`, strips surrounding whitespace and then
/// underscores, and keeps the text before the first remaining underscore, so
/// `/data/_sample1_R1.fastq` becomes `sample1`.
pub fn sample_label(file: &str) -> String {
    let name = file.rsplit('/').next().unwrap_or_default();

    name.trim()
        .trim_matches('_')
        .split('_')
        .next()
        .unwrap_or_default()
        .to_owned()
}

/// Frequency tables keyed by sample label, in insertion order.
///
/// Labels double as the row and column headers of the leakage matrix: row `r`,
/// column `c` holds the number of pairs in sample `r` carrying barcode `c`.
#[derive(Debug, Clone, Default)]
pub struct SampleTable {
    samples: Vec<(String, FrequencyTable)>,
}

impl SampleTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Assess each input file in order, stopping at the first failure.
    pub fn assess_files<I>(files: I) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut table = Self::new();

        for file in files {
            let file = file.as_ref();
            let label = sample_label(file);
            log::debug!("Assessing \"{}\" as sample \"{}\"", file, label);
            table.insert(label, assess_file(file)?);
        }

        Ok(table)
    }

    /// Add a sample. A repeated label replaces the earlier table but keeps its position.
    pub fn insert(&mut self, label: impl Into<String>, counts: FrequencyTable) {
        let label = label.into();

        match self.samples.iter_mut().find(|(l, _)| *l == label) {
            Some((_, existing)) => {
                log::warn!("Sample \"{}\" appears more than once, keeping the last file", label);
                *existing = counts;
            }
            None => self.samples.push((label, counts)),
        }
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.samples.iter().map(|(l, _)| l.as_str())
    }

    pub fn get(&self, label: &str) -> Option<&FrequencyTable> {
        self.samples.iter().find(|(l, _)| l == label).map(|(_, c)| c)
    }

    /// Pairs in sample `row` carrying barcode `col`, zero if either is unknown.
    pub fn count(&self, row: &str, col: &str) -> usize {
        self.get(row).map_or(0, |c| c.get(col))
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Write the tab-separated sample-by-barcode matrix.
    pub fn write_matrix(&self, w: &mut impl Write) -> io::Result<()> {
        write!(w, "{}", self)
    }
}

impl fmt::Display for SampleTable {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "\t{}", self.labels().collect::<Vec<_>>().join("\t"))?;

        for (row, counts) in &self.samples {
            write!(f, "{}", row)?;
            for col in self.labels() {
                write!(f, "\t{}", counts.get(col))?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counts(entries: &[(&str, usize)]) -> FrequencyTable {
        entries
            .iter()
            .flat_map(|&(id, n)| std::iter::repeat(id).take(n))
            .collect()
    }

    #[test]
    fn test_sample_label() {
        assert_eq!(sample_label("/data/_sample1_R1.fastq"), "sample1");
        assert_eq!(sample_label("sample2_S2_L001_R1.fastq.gz"), "sample2");
        assert_eq!(sample_label("relative/dir/plain.fq"), "plain.fq");
        assert_eq!(sample_label("__x__"), "x");
        assert_eq!(sample_label("/data/"), "");
        assert_eq!(sample_label("a/b/."), ".");
    }

    #[test]
    fn test_matrix() {
        let mut table = SampleTable::new();
        table.insert("a", counts(&[("a", 5), ("b", 1)]));
        table.insert("b", counts(&[("b", 8)]));

        assert_eq!(table.to_string(), "\ta\tb\na\t5\t1\nb\t0\t8\n");

        let mut out = Vec::new();
        table.write_matrix(&mut out).unwrap();
        assert_eq!(out, b"\ta\tb\na\t5\t1\nb\t0\t8\n");
    }

    #[test]
    fn test_foreign_barcodes_not_shown() {
        let mut table = SampleTable::new();
        table.insert("a", counts(&[("a", 2), ("unknown", 9)]));

        assert_eq!(table.to_string(), "\ta\na\t2\n");
        assert_eq!(table.count("a", "unknown"), 9);
        assert_eq!(table.count("z", "a"), 0);
    }

    #[test]
    fn test_repeated_label_keeps_position() {
        let mut table = SampleTable::new();
        table.insert("a", counts(&[("a", 1)]));
        table.insert("b", counts(&[("b", 1)]));
        table.insert("a", counts(&[("a", 4)]));

        assert_eq!(table.len(), 2);
        assert_eq!(table.labels().collect::<Vec<_>>(), vec!["a", "b"]);
        assert_eq!(table.count("a", "a"), 4);
    }

    #[test]
    fn test_empty_matrix() {
        let table = SampleTable::new();
        assert!(table.is_empty());
        assert_eq!(table.to_string(), "\t\n");
    }
}
