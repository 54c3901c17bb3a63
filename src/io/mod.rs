pub mod error;
pub mod format;

use std::ffi::OsStr;

pub use error::IoError;

/// File name suffix that marks a translation file.
pub const TRANSLATION_SUFFIX: &str = ".json";

/// Returns `true` when the file name ends with the literal `.json` suffix.
///
/// The match is case-sensitive and works on the raw encoded bytes, so names
/// that are not valid UTF-8 are still considered.
pub fn is_translation_file_name(name: &OsStr) -> bool {
    name.as_encoded_bytes().ends_with(TRANSLATION_SUFFIX.as_bytes())
}
