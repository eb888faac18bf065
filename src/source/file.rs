//! File-based store source.

use crate::model::error::InputError;
use crate::parser::{self, ParsedStore};
use std::path::Path;
use tracing::{info, warn};

/// Read and parse a store file.
///
/// Per-line errors of a JSON Lines file are logged and skipped; they are also
/// returned in [`ParsedStore::errors`].
///
/// # Errors
///
/// Returns `InputError::FileNotFound` if the file does not exist,
/// `InputError::Io` for other I/O errors, and `InputError::Parse` when an
/// array document is malformed.
pub fn read_store_file(path: &Path) -> Result<ParsedStore, InputError> {
    if !path.exists() {
        return Err(InputError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let text = std::fs::read_to_string(path)?;
    let parsed = parser::parse_store(&text)?;

    for error in &parsed.errors {
        warn!(path = %path.display(), "{error}");
    }
    info!(
        path = %path.display(),
        records = parsed.store.len(),
        skipped = parsed.errors.len(),
        "Event data parsed"
    );

    Ok(parsed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn reads_array_file() {
        let test_file = std::env::temp_dir().join("eventboard_reads_array_file.json");
        fs::write(
            &test_file,
            r#"[{"id":1,"title":"A","category":"music","city":"X","date":"2025-01-01","time":"10:00","locationName":"L"}]"#,
        )
        .unwrap();

        let result = read_store_file(&test_file);
        let _ = fs::remove_file(&test_file);

        assert_eq!(result.unwrap().store.len(), 1);
    }

    #[test]
    fn missing_file_is_file_not_found() {
        let missing = std::env::temp_dir().join("eventboard_nonexistent_12345.json");
        assert!(matches!(
            read_store_file(&missing),
            Err(InputError::FileNotFound { .. })
        ));
    }

    #[test]
    fn malformed_array_is_parse_error() {
        let test_file = std::env::temp_dir().join("eventboard_malformed_array.json");
        fs::write(&test_file, "[{").unwrap();

        let result = read_store_file(&test_file);
        let _ = fs::remove_file(&test_file);

        assert!(matches!(result, Err(InputError::Parse(_))));
    }
}
