use memchr::memchr;
use serde_json::{Map, Value};

use crate::errors::*;

/// Key of the barcode identifier inside the header payload.
pub const ID_KEY: &str = "id";

/// Extract the barcode ID from a read header of the form `name\t{"id": ...}`.
///
/// Everything after the first tab is parsed as a JSON object. String IDs are
/// returned as-is; any other JSON value is returned in its compact JSON form.
pub fn barcode_id(header: &[u8]) -> Result<String> {
    let malformed = |reason: HeaderFault| Error::MalformedHeader {
        header: utf8(header),
        reason,
    };

    let tab = memchr(b'\t', header).ok_or_else(|| malformed(HeaderFault::MissingTab))?;
    let payload = &header[tab + 1..];

    let value: Value = serde_json::from_slice(payload).map_err(|e| malformed(e.into()))?;
    let Value::Object(fields) = value else {
        return Err(malformed(HeaderFault::NotAnObject));
    };

    id_field(fields).ok_or_else(|| malformed(HeaderFault::MissingId))
}

fn id_field(mut fields: Map<String, Value>) -> Option<String> {
    match fields.remove(ID_KEY)? {
        Value::String(id) => Some(id),
        other => Some(other.to_string()),
    }
}
