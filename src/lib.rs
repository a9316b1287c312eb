//! Rust library for checking barcode leakage between sequencing samples.
//!
//! # Overview
//! Demultiplexed samples should only contain reads carrying their own barcode.
//! This crate counts, for each sample's interleaved paired-end fastq file, how
//! many read pairs carry each barcode ID, and lays the counts out as a
//! sample-by-sample matrix. Diagonal entries are correctly assigned pairs;
//! off-diagonal entries are pairs that leaked in from another sample.
//!
//! ## Read headers
//! The barcode ID lives in a JSON payload after the first tab of the read-1 header:
//! ```text
//! @read6	{"id": "sampleA", "umi": "ACGTAC"}
//! AATTCCGGAATTCCCAAAAG
//! +
//! 01234567890123456789
//! ```
//! See [`barcode_id`] for the exact rules. Read-2 headers are never inspected.
//!
//! ## Counting
//! [`assess_file`] streams pairs with [`PairedRecords`] and tallies them into a
//! [`FrequencyTable`]. Records are paired purely by position, and a trailing
//! record without a mate is ignored.
//!
//! [`SampleTable::assess_files`] does this for many files, labelling each with
//! [`sample_label`], and its `Display` impl prints the matrix:
//! ```text
//! 	a	b
//! a	5	1
//! b	0	8
//! ```
//!
//! ## Keyfiles
//! [`lex_keyfile`], [`count_keyfile_lines`] and [`keyfile_names`] read the
//! tab-delimited barcode-to-sample keyfiles used alongside the reads.

pub mod counter;
pub mod errors;
pub mod fastq;
pub mod header;
pub mod keyfile;
pub mod read;
pub mod sample;

// commonly used functions and types

pub use crate::counter::*;
pub use crate::errors::{Error, HeaderFault, Result};
pub use crate::fastq::*;
pub use crate::header::*;
pub use crate::keyfile::*;
pub use crate::read::*;
pub use crate::sample::*;
