use std::fs::File;
use std::io::{BufRead, BufReader};

use crate::errors::*;

/// Lines starting with any of these are comments.
pub const COMMENT_MARKERS: [char; 2] = ['#', ';'];

/// Tab-separated fields of one keyfile line. The last field is the sample name.
pub type KeyfileRow = Vec<String>;

/// Read the non-comment rows of a tab-delimited keyfile, in file order.
pub fn lex_keyfile(file: impl AsRef<str>) -> Result<Vec<KeyfileRow>> {
    let file = file.as_ref();
    let reader = File::open(file).map_err(|e| Error::file_io(file, e))?;

    lex_keyfile_reader(BufReader::new(reader)).map_err(|e| match e {
        Error::BytesIo(source) => Error::FileIo {
            file: file.to_owned(),
            source,
        },
        e => e,
    })
}

/// Lex keyfile rows from any buffered source.
///
/// Trailing whitespace is stripped before splitting, so a blank line yields
/// a single empty field.
pub fn lex_keyfile_reader(reader: impl BufRead) -> Result<Vec<KeyfileRow>> {
    let mut rows = Vec::new();

    for line in reader.lines() {
        let line = line.map_err(|e| Error::BytesIo(Box::new(e)))?;

        if is_comment(&line) {
            continue;
        }

        rows.push(line.trim_end().split('\t').map(|f| f.to_owned()).collect());
    }

    Ok(rows)
}

/// Number of barcodes in a keyfile.
pub fn count_keyfile_lines(file: impl AsRef<str>) -> Result<usize> {
    Ok(lex_keyfile(file)?.len())
}

/// Sample names of a keyfile, taken from the last column of each row.
pub fn keyfile_names(file: impl AsRef<str>) -> Result<Vec<String>> {
    Ok(lex_keyfile(file)?
        .into_iter()
        .filter_map(|mut row| row.pop())
        .collect())
}

fn is_comment(line: &str) -> bool {
    line.starts_with(COMMENT_MARKERS)
}
