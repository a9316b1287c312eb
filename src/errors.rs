use thiserror;

use crate::fastq::Origin;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Error reading \"{file}\": {source}")]
    FileIo {
        file: String,
        source: Box<dyn std::error::Error>,
    },

    #[error("Error reading bytes: {0}")]
    BytesIo(Box<dyn std::error::Error>),

    #[error("Error parsing record {idx} in {origin}: {source}")]
    ParseRecord {
        origin: Origin,
        idx: usize,
        source: Box<dyn std::error::Error>,
    },

    #[error("Error writing output: {0}")]
    Output(#[source] std::io::Error),

    #[error("Malformed read header \"{header}\": {reason}")]
    MalformedHeader { header: String, reason: HeaderFault },
}

/// Why a read header did not yield a barcode ID.
#[derive(thiserror::Error, Debug)]
pub enum HeaderFault {
    #[error("no tab separating the read name from its JSON payload")]
    MissingTab,

    #[error("payload is not valid JSON ({0})")]
    InvalidJson(#[from] serde_json::Error),

    #[error("payload is not a JSON object")]
    NotAnObject,

    #[error("payload has no \"id\" field")]
    MissingId,
}

impl Error {
    pub(crate) fn file_io(file: impl AsRef<str>, source: impl std::error::Error + 'static) -> Self {
        Error::FileIo {
            file: file.as_ref().to_owned(),
            source: Box::new(source),
        }
    }
}

pub fn utf8(b: &[u8]) -> String {
    String::from_utf8_lossy(b).into_owned()
}
