//! Parser for event store documents.
//!
//! Two layouts are accepted:
//! - a JSON array of records (what the listing site ships), and
//! - JSON Lines, one record per line.
//!
//! Array documents are all-or-nothing. JSON Lines documents are parsed line by
//! line: a malformed line is reported and skipped, the rest still load.

use crate::model::{EventRecord, EventStore, ParseError};

/// Result of parsing a store document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedStore {
    /// Records that parsed, deduplicated by id.
    pub store: EventStore,
    /// Per-line errors for JSON Lines documents. Always empty for arrays.
    pub errors: Vec<ParseError>,
}

/// Detected document layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentLayout {
    /// A single JSON array.
    Array,
    /// One JSON object per line.
    Lines,
}

/// Guess the layout from the first non-whitespace character.
pub fn detect_layout(text: &str) -> DocumentLayout {
    if text.trim_start().starts_with('[') {
        DocumentLayout::Array
    } else {
        DocumentLayout::Lines
    }
}

/// Parse a store document.
///
/// # Errors
///
/// Returns `ParseError::InvalidDocument` when an array document is not a
/// valid array of records. JSON Lines documents never fail as a whole; their
/// bad lines are listed in [`ParsedStore::errors`].
pub fn parse_store(text: &str) -> Result<ParsedStore, ParseError> {
    match detect_layout(text) {
        DocumentLayout::Array => {
            let records: Vec<EventRecord> =
                serde_json::from_str(text).map_err(|e| ParseError::InvalidDocument {
                    message: e.to_string(),
                })?;
            Ok(ParsedStore {
                store: EventStore::from_records(records),
                errors: Vec::new(),
            })
        }
        DocumentLayout::Lines => {
            let (records, errors) = parse_lines(text);
            Ok(ParsedStore {
                store: EventStore::from_records(records),
                errors,
            })
        }
    }
}

/// Parse JSON Lines, collecting records and per-line errors separately.
///
/// Blank lines are ignored. Line numbers are 1-based.
pub fn parse_lines(text: &str) -> (Vec<EventRecord>, Vec<ParseError>) {
    let mut records = Vec::new();
    let mut errors = Vec::new();

    for (index, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        match parse_record(line, index + 1) {
            Ok(record) => records.push(record),
            Err(err) => errors.push(err),
        }
    }

    (records, errors)
}

/// Parse one record.
///
/// # Errors
///
/// Returns `ParseError::InvalidLine` with the given line number.
pub fn parse_record(line: &str, line_number: usize) -> Result<EventRecord, ParseError> {
    serde_json::from_str(line).map_err(|e| ParseError::InvalidLine {
        line: line_number,
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const RECORD_1: &str = r#"{"id":1,"title":"Jazz Night","category":"music","city":"A","date":"2025-01-10","time":"19:00","locationName":"Club"}"#;
    const RECORD_2: &str = r#"{"id":2,"title":"Gallery Walk","category":"art","city":"B","date":"2025-02-05","time":"10:00","locationName":"Museum","isFeatured":true}"#;

    #[test]
    fn detects_array_layout_after_whitespace() {
        assert_eq!(detect_layout("  \n[ ]"), DocumentLayout::Array);
        assert_eq!(detect_layout(RECORD_1), DocumentLayout::Lines);
    }

    #[test]
    fn parses_array_document() {
        let text = format!("[{RECORD_1},{RECORD_2}]");
        let parsed = parse_store(&text).unwrap();
        assert_eq!(parsed.store.len(), 2);
        assert!(parsed.errors.is_empty());
        assert!(parsed.store.events()[1].is_featured);
    }

    #[test]
    fn malformed_array_fails_whole_document() {
        let text = format!("[{RECORD_1},{{\"id\":\"oops\"}}]");
        assert!(matches!(
            parse_store(&text),
            Err(ParseError::InvalidDocument { .. })
        ));
    }

    #[test]
    fn parses_json_lines_and_skips_bad_lines() {
        let text = format!("{RECORD_1}\nnot json\n\n{RECORD_2}\n");
        let parsed = parse_store(&text).unwrap();

        assert_eq!(parsed.store.len(), 2, "Valid lines still load");
        assert_eq!(parsed.errors.len(), 1);
        assert!(matches!(
            parsed.errors[0],
            ParseError::InvalidLine { line: 2, .. }
        ));
    }

    #[test]
    fn empty_document_is_empty_store() {
        let parsed = parse_store("").unwrap();
        assert!(parsed.store.is_empty());
        assert!(parsed.errors.is_empty());
    }

    #[test]
    fn duplicate_ids_are_dropped() {
        let text = format!("{RECORD_1}\n{RECORD_1}\n");
        let parsed = parse_store(&text).unwrap();
        assert_eq!(parsed.store.len(), 1);
    }
}
