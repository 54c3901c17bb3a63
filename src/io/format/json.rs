use std::io::Write;

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::{Map, Value};

use crate::io::IoError;

const INDENT: &[u8] = b"    ";

/// Parse `text` and require the top-level value to be a JSON object.
pub fn parse_object(text: &str) -> Result<Map<String, Value>, IoError> {
    let value: Value = serde_json::from_str(text).map_err(IoError::JsonParse)?;
    match value {
        Value::Object(map) => Ok(map),
        _ => Err(IoError::NotAnObject),
    }
}

/// Write `value` with a four-space indent and no trailing newline.
///
/// Non-ASCII characters are written as-is; only the characters JSON requires
/// are escaped.
pub fn write_pretty<W: Write>(writer: W, value: &Value) -> Result<(), IoError> {
    let formatter = PrettyFormatter::with_indent(INDENT);
    let mut serializer = serde_json::Serializer::with_formatter(writer, formatter);
    value
        .serialize(&mut serializer)
        .map_err(IoError::JsonSerialize)
}

pub fn to_pretty_bytes(value: &Value) -> Result<Vec<u8>, IoError> {
    let mut out = Vec::new();
    write_pretty(&mut out, value)?;
    Ok(out)
}
