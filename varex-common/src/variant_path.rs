//! Codec for the `/variant/:id` path segment.
//!
//! A variant's identity is the ordered [`DATABASE_KEY`] fields of its
//! record, each percent-encoded and joined with `@@`. `@` is always
//! percent-encoded inside segments, so the separator is unambiguous.

use std::collections::BTreeMap;

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use thiserror::Error;

use crate::columns::DATABASE_KEY;
use crate::record::VariantRecord;

/// Everything but unreserved characters gets encoded inside a segment.
const SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

#[derive(Debug, Error, PartialEq, Eq)]
pub enum VariantPathError {
    #[error("variant path has {found} segments, expected {expected}")]
    SegmentCount { expected: usize, found: usize },
    #[error("variant path segment is not valid percent-encoded UTF-8")]
    InvalidEncoding,
}

/// Build the path id for a record. Missing key fields join as empty
/// segments, matching how the backend represents them.
pub fn join(record: &VariantRecord) -> String {
    DATABASE_KEY
        .iter()
        .map(|key| utf8_percent_encode(record.get(key).unwrap_or(""), SEGMENT).to_string())
        .collect::<Vec<_>>()
        .join("@@")
}

/// Recover the key fields from a path id.
pub fn split(id: &str) -> Result<BTreeMap<String, String>, VariantPathError> {
    let segments: Vec<&str> = id.split("@@").collect();
    if segments.len() != DATABASE_KEY.len() {
        return Err(VariantPathError::SegmentCount {
            expected: DATABASE_KEY.len(),
            found: segments.len(),
        });
    }
    DATABASE_KEY
        .iter()
        .zip(segments)
        .map(|(key, segment)| {
            percent_decode_str(segment)
                .decode_utf8()
                .map(|value| ((*key).to_string(), value.into_owned()))
                .map_err(|_| VariantPathError::InvalidEncoding)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> VariantRecord {
        let mut r = VariantRecord::new();
        r.insert("Gene_symbol", "BRCA1");
        r.insert("Genomic_Coordinate", "chr17:g.41256898:A>G");
        r
    }

    #[test]
    fn test_join_split_round_trip() {
        let id = join(&record());
        let fields = split(&id).unwrap();
        assert_eq!(fields.get("Gene_symbol").unwrap(), "BRCA1");
        assert_eq!(fields.get("Genomic_Coordinate").unwrap(), "chr17:g.41256898:A>G");
    }

    #[test]
    fn test_join_encodes_separator_chars() {
        let mut r = record();
        r.insert("Genomic_Coordinate", "a@@b");
        let id = join(&r);
        // The literal separator only ever appears between segments.
        assert_eq!(id.matches("@@").count(), 1);
        assert_eq!(split(&id).unwrap().get("Genomic_Coordinate").unwrap(), "a@@b");
    }

    #[test]
    fn test_split_rejects_wrong_segment_count() {
        assert_eq!(
            split("BRCA1"),
            Err(VariantPathError::SegmentCount {
                expected: DATABASE_KEY.len(),
                found: 1
            })
        );
    }

    #[test]
    fn test_missing_key_field_joins_empty() {
        let mut r = VariantRecord::new();
        r.insert("Gene_symbol", "BRCA2");
        let id = join(&r);
        let fields = split(&id).unwrap();
        assert_eq!(fields.get("Genomic_Coordinate").unwrap(), "");
    }
}
