use std::fs;
use std::io::Write;
use std::path::Path;

use serde_json::Value;

use crate::domain::error::SortError;
use crate::engine::keys::sort_top_level;
use crate::io::format::json;

/// Sort the top-level keys of the translation file at `path` in place.
///
/// The file is left untouched unless its content is a JSON object.
pub fn sort_file(path: &Path) -> Result<(), SortError> {
    if !path.is_file() {
        return Err(SortError::MissingFile {
            path: path.display().to_string(),
        });
    }

    let text = fs::read_to_string(path).map_err(|source| SortError::Read { source })?;
    let map = json::parse_object(&text)?;
    let sorted = Value::Object(sort_top_level(map));
    let bytes = json::to_pretty_bytes(&sorted)?;
    fs::write(path, bytes).map_err(|source| SortError::Write { source })
}

/// Run [`sort_file`] and report the outcome as one line on `out`.
pub fn run_file<W: Write>(path: &Path, out: &mut W) {
    let _ = match sort_file(path) {
        Ok(()) => writeln!(out, "Successfully sorted and saved: '{}'", path.display()),
        Err(error) => writeln!(
            out,
            "Error while processing file: '{}': {error}",
            path.display()
        ),
    };
}
